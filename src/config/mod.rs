pub mod cli;

#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

/// How many integers the counter reads.
pub const INPUT_COUNT: usize = 10;

/// Flags shared by both binaries. Program behaviour itself is fixed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Emit logs as JSON on stderr"))]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn init_logging(&self) {
        if self.json_logs {
            crate::utils::logger::init_json_logger(self.verbose);
        } else {
            crate::utils::logger::init_cli_logger(self.verbose);
        }
    }
}
