//! Error types used by the crate.

use thiserror::Error;

/// Geohalo error type.
///
/// Errors of this type are internal to the engine: the public operations catch them at the
/// boundary, log them, and return `None` so that one failed shape never aborts a batch.
#[derive(Debug, Error)]
pub enum GeoHaloError {
    /// Input shape kind is not supported by the operation.
    #[error("unsupported geometry: {0}")]
    UnsupportedGeometry(String),
    /// The operation received or produced an empty shape.
    #[error("degenerate geometry")]
    Degenerate,
    /// Numerical failure in a planar computation.
    #[error("computation failed: {0}")]
    Computation(String),
}
