pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{
    cli::{IoConsole, StdConsole},
    CliConfig, INPUT_COUNT,
};
pub use crate::core::{counter::run_counter, tracer::run_tracer};
pub use crate::domain::model::{LoopTrace, Parity, Tally};
pub use crate::utils::error::{DrillError, Result};
