pub mod animator;
pub mod config;
pub mod constants;
pub mod error;
pub mod glyph;
pub mod lattice;
pub mod network;
pub mod paint;
pub mod rain;
pub mod scheduler;
pub mod viewport;

pub use animator::*;
pub use config::*;
pub use error::*;
pub use glyph::{Glyph, GlyphEvent, GlyphId, GlyphRain};
pub use paint::{Painter, Palette, Rgba};
pub use viewport::Viewport;
