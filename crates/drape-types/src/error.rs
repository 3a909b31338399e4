//! Error types for the drape workspace.
//!
//! All crates return `DrapeResult<T>` from fallible operations. The
//! physics step itself never fails: degenerate geometry is recovered
//! in place and only construction and I/O boundaries report errors.

use thiserror::Error;

/// Unified error type for the drape workspace.
#[derive(Debug, Error)]
pub enum DrapeError {
    /// Scene data is malformed or inconsistent.
    #[error("Invalid scene: {0}")]
    InvalidScene(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Grid dimensions or spacing cannot produce a cloth.
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// Particle handle does not refer to a live particle.
    #[error("Particle index {index} out of bounds (count: {count})")]
    ParticleOutOfBounds { index: usize, count: usize },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Frame trace could not be analyzed.
    #[error("Trace error: {0}")]
    Trace(String),
}

/// Convenience alias for `Result<T, DrapeError>`.
pub type DrapeResult<T> = Result<T, DrapeError>;
