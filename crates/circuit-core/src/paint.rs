//! Drawing seam between the simulation and a concrete 2D surface.
//!
//! The animator never touches a canvas directly. It issues primitive draw
//! calls through [`Painter`], which the web front-end implements over
//! `CanvasRenderingContext2d` and tests implement with a recorder.

use glam::Vec2;

use crate::viewport::Viewport;

/// 8-bit RGB color with a floating point alpha, CSS style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with alpha replaced (clamped to [0, 1]).
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Same color with alpha multiplied by `k`.
    #[inline]
    pub fn scale_alpha(self, k: f32) -> Self {
        self.with_alpha(self.a * k)
    }

    /// CSS `rgba(r, g, b, a)` string for canvas style setters.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Colors used by every variant.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    /// Circuit traces.
    pub trace: Rgba,
    /// Outer glow of a node at its center; fades to transparent at the rim.
    pub glow: Rgba,
    /// Bright node core.
    pub core: Rgba,
    /// Falling streaks and canvas-drawn glyphs.
    pub rain: Rgba,
    /// Overlay used to fade the previous frame.
    pub backdrop: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            trace: Rgba::new(0, 217, 255, 1.0),
            glow: Rgba::new(0, 217, 255, 0.3),
            core: Rgba::new(0, 255, 255, 0.4),
            rain: Rgba::new(0, 255, 200, 0.55),
            backdrop: Rgba::new(5, 10, 25, 1.0),
        }
    }
}

/// Primitive 2D drawing operations the animator needs.
pub trait Painter {
    /// Erase the whole surface to transparent.
    fn clear(&mut self, viewport: Viewport);
    /// Composite a translucent fill over the whole surface.
    fn fade(&mut self, viewport: Viewport, color: Rgba);
    fn line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32);
    /// Filled circle with a radial gradient from `inner` at the center to
    /// `outer` at `radius`.
    fn glow(&mut self, center: Vec2, radius: f32, inner: Rgba, outer: Rgba);
    fn disc(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn text(&mut self, text: &str, pos: Vec2, font_px: f32, color: Rgba);
}

/// Two-layer node: soft glow out to `size * glow_factor`, then a bright core.
pub fn paint_node<P: Painter + ?Sized>(
    painter: &mut P,
    pos: Vec2,
    size: f32,
    glow_factor: f32,
    palette: &Palette,
    intensity: f32,
) {
    let glow = palette.glow.scale_alpha(intensity);
    painter.glow(pos, size * glow_factor, glow, glow.with_alpha(0.0));
    painter.disc(pos, size, palette.core.scale_alpha(intensity));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_formats_rgba() {
        assert_eq!(Rgba::new(0, 217, 255, 0.3).css(), "rgba(0, 217, 255, 0.3)");
    }

    #[test]
    fn alpha_is_clamped() {
        let c = Rgba::new(1, 2, 3, 0.8);
        assert_eq!(c.scale_alpha(2.0).a, 1.0);
        assert_eq!(c.with_alpha(-1.0).a, 0.0);
    }
}
