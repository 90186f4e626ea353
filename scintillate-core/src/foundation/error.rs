/// Crate-wide result alias.
pub type ScintillateResult<T> = Result<T, ScintillateError>;

/// Errors surfaced by scene construction, configuration and rendering.
#[derive(thiserror::Error, Debug)]
pub enum ScintillateError {
    /// An input value is out of range or malformed.
    #[error("validation error: {0}")]
    Validation(String),

    /// A config document could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// SVG parsing or rasterization failed.
    #[error("render error: {0}")]
    Render(String),

    /// Any other error, usually bubbled up from a dependency.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScintillateError {
    /// Build a [`ScintillateError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScintillateError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ScintillateError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
