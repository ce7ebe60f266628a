use thiserror::Error;

/// Top-level error type for the figura primitives library.
///
/// Almost every operation in this crate is total; the variants below cover
/// the few documented exceptions.
#[derive(Debug, Error)]
pub enum FiguraError {
    /// The input describes geometry that does not exist, such as the
    /// circumscribed circle of three collinear points.
    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Convenience type alias for results using [`FiguraError`].
pub type Result<T> = std::result::Result<T, FiguraError>;
