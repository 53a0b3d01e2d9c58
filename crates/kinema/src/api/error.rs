use thiserror::Error;

/// Errors surfaced by entity construction, force updates and config parsing.
#[derive(Debug, Error)]
pub enum MotionError {
    /// The requested driving force is longer than the allowed limit.
    /// The entity's force state is left untouched.
    #[error("force norm {norm} exceeds limit {limit}")]
    ForceLimitExceeded { norm: f64, limit: f64 },

    /// An animated entity needs at least one frame to take its size from.
    #[error("sprite sheet has no frames")]
    EmptySpriteSheet,

    #[error("invalid descriptor: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MotionError>;
