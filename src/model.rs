use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CYCLE_DAYS: u32 = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub date: NaiveDate,
    pub message: String,
}

// start_date serializes as "YYYY-MM-DD"; emitted cycles always carry at
// least one commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cycle {
    pub start_date: NaiveDate,
    pub commits: Vec<String>,
}
