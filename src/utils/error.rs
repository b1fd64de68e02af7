use thiserror::Error;

#[derive(Error, Debug)]
pub enum PoemError {
    #[error("Depth {depth} exceeds the maximum of {max}")]
    DepthExceeded { depth: i64, max: i64 },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PoemError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            PoemError::DepthExceeded { depth, max } => {
                format!("The poem cannot be {} lines deep (limit {})", depth, max)
            }
            PoemError::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration problem in '{}': {}", field, reason)
            }
            PoemError::Io(e) => format!("Could not write the poem: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PoemError::DepthExceeded { .. } => "Use a smaller depth or the iterative renderer",
            PoemError::InvalidConfigValue { .. } => "Check the configured depth",
            PoemError::Io(_) => "Make sure standard output is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, PoemError>;
