pub mod build;
pub mod exec;
pub mod extract;
pub mod fetch;
pub mod output;

pub use build::build_cycles;
pub use exec::exec;
pub use extract::{extract, parse_cutoff, parse_records};
pub use fetch::{GitLog, LogSource};
pub use output::{output_json, output_ndjson};
