use crate::error::Result;
use crate::model::Cycle;

pub fn output_json(cycles: &[Cycle]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&cycles)?);
    Ok(())
}

pub fn output_ndjson(cycles: &[Cycle]) -> Result<()> {
    for cycle in cycles {
        println!("{}", serde_json::to_string(cycle)?);
    }
    Ok(())
}
