use groundplan_core::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Exit code for usage and plan-data errors.
pub const EXIT_INVALID: i32 = 2;
/// Exit code for I/O failures.
pub const EXIT_IO: i32 = 1;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl CliError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) | Self::Config(ConfigError::Io(_)) => EXIT_IO,
            Self::Config(_) | Self::InvalidArgument { .. } => EXIT_INVALID,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
