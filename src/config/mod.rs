use crate::core::poem::{DEFAULT_DEPTH, MAX_DEPTH};
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use clap::Parser;

/// The command takes no flags or arguments; clap rejects anything passed.
#[derive(Debug, Clone, Parser)]
#[command(name = "recursion-poem")]
#[command(version)]
#[command(about = "Print a countdown poem built by recursion")]
pub struct CliConfig {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoemConfig {
    pub depth: i64,
}

impl Default for PoemConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
        }
    }
}

// Non-positive depths are valid and render only the terminator.
impl Validate for PoemConfig {
    fn validate(&self) -> Result<()> {
        validate_range("depth", self.depth, i64::MIN, MAX_DEPTH)
    }
}
