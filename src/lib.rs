pub mod cli;
pub mod cycles;
pub mod error;
pub mod model;
