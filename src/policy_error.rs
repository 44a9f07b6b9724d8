use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    /// The policy cannot be built from the given configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An observation field is outside the domain the control law accepts.
    #[error("Invalid observation: {field} = {value}")]
    InvalidObservation { field: &'static str, value: f64 },
}

impl From<config::ConfigError> for PolicyError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}
