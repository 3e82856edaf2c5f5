use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Reasons a plan is rejected before anything is rendered.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("plan has no spaces")]
    NoSpaces,

    #[error("space label must not be empty")]
    EmptyLabel,

    #[error("duplicate space label: {label}")]
    DuplicateLabel { label: String },

    #[error("space {label:?} must have a positive width and height, got {width} x {height}")]
    NonPositiveDimension {
        label: String,
        width: f64,
        height: f64,
    },

    #[error("space {label:?} has a negative offset ({x}, {y})")]
    NegativeOffset { label: String, x: f64, y: f64 },

    #[error("space {label:?} extends past the overall plan bounds")]
    OutOfBounds { label: String },

    #[error("overall plan size must be positive, got {width} x {height}")]
    NonPositiveOverall { width: f64, height: f64 },

    #[error("ridge height must be positive, got {value}")]
    NonPositiveRidgeHeight { value: f64 },

    #[error("invalid color {value:?}; expected #rrggbb or #rgb")]
    InvalidColor { value: String },

    #[error("scale must be a positive number of pixels per foot, got {value}")]
    InvalidScale { value: f64 },

    #[error("render option {name} must be {expected}, got {value}")]
    InvalidRenderOption {
        name: &'static str,
        expected: &'static str,
        value: f64,
    },
}

impl ConfigError {
    /// True for errors in the plan data itself, as opposed to reading or
    /// parsing the file that carried it.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            Self::Io(_) | Self::Toml(_) | Self::TomlSerialize(_) | Self::Json(_)
        )
    }
}
