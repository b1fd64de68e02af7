pub mod config;
pub mod core;
pub mod utils;

pub use crate::core::poem::{
    checked_poem, countdown_lines, iterative_poem, recursion_poem, write_poem, TERMINATOR,
};
pub use config::{CliConfig, PoemConfig};
pub use utils::error::{PoemError, Result};
