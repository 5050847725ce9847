use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures while acquiring GPU-resident instance buffers.
///
/// Raised only at activation time; the per-frame pass never produces one.
#[derive(Debug, thiserror::Error)]
pub enum InstanceError {
    #[error("instance buffer allocation failed for level {level}: {reason}")]
    Allocation { level: usize, reason: String },

    #[error("instance buffer of {requested} bytes exceeds device limit of {limit} bytes")]
    TooLarge { requested: u64, limit: u64 },
}

#[derive(Debug, thiserror::Error)]
pub enum FractalError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Instance(#[from] InstanceError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("renderer error: {0}")]
    Renderer(String),

    #[error("{0}")]
    Other(String),
}
