/// Result alias that carries [`BackgroundError`].
pub type Result<T> = std::result::Result<T, BackgroundError>;

/// Errors surfaced by the background core.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BackgroundError {
    /// A variant name that does not match any known animation.
    #[error("unknown background variant `{0}` (expected line-rain, glyph-rain or lattice-pulse)")]
    UnknownVariant(String),
    /// The drawing surface has no area to paint on.
    #[error("viewport {width}x{height} has no drawable area")]
    EmptyViewport { width: f32, height: f32 },
}
