//! Error types for cell computation

use std::fmt;

/// Errors that can occur while configuring or running a frame
///
/// Degenerate geometry (parallel lines, coincident generators) is not an
/// error: it surfaces as `None` from the geometry primitives and simply means
/// a clip had no effect.
#[derive(Debug, Clone, PartialEq)]
pub enum VoronoiError {
    /// Configuration validation failed
    InvalidConfig(String),
    /// Requested generator index is not part of the frame snapshot
    GeneratorNotFound(usize),
}

impl fmt::Display for VoronoiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoronoiError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            VoronoiError::GeneratorNotFound(id) => write!(f, "generator not found: {}", id),
        }
    }
}

impl std::error::Error for VoronoiError {}

/// Result type alias for cell operations
pub type Result<T> = std::result::Result<T, VoronoiError>;
