use thiserror::Error;

/// Top-level error type for the panelform geometry core.
#[derive(Debug, Error)]
pub enum PanelformError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to geometric construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("parameter {parameter} is not finite: {value}")]
    NonFinite { parameter: &'static str, value: f64 },
}

/// Errors related to layout operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("entity not found: {0}")]
    EntityNotFound(String),
}

/// Errors related to loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Convenience type alias for results using [`PanelformError`].
pub type Result<T> = std::result::Result<T, PanelformError>;
