//! Falling line streaks for the line-rain variant.

use glam::Vec2;
use rand::Rng;
use std::time::Duration;

use crate::constants::*;
use crate::viewport::Viewport;

/// A vertical streak. `y` is the top end; the streak extends `length` below.
#[derive(Clone, Debug, PartialEq)]
pub struct RainDrop {
    pub x: f32,
    pub y: f32,
    /// Pixels per second, fixed for the drop's lifetime.
    pub speed: f32,
    pub length: f32,
}

impl RainDrop {
    #[inline]
    pub fn head(&self) -> Vec2 {
        Vec2::new(self.x, self.y + self.length)
    }

    #[inline]
    pub fn tail(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Fully below the viewport plus margin.
    #[inline]
    pub fn has_exited(&self, viewport: Viewport) -> bool {
        self.y > viewport.height + DROP_EXIT_MARGIN
    }

    /// Move back above the top edge with a fresh length and column.
    fn respawn_above<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        self.length = DROP_LENGTH_MIN + rng.gen::<f32>() * DROP_LENGTH_SPAN;
        self.x = rng.gen::<f32>() * viewport.width;
        // strictly negative so the drop re-enters from above
        self.y = -self.length - rng.gen::<f32>() * viewport.height * 0.5 - 1.0;
    }
}

#[inline]
pub fn drop_count_for(viewport: Viewport) -> usize {
    (viewport.width / DROP_SPACING_PX).ceil().max(0.0) as usize
}

/// Drops spread across the width and scattered vertically so the first frames
/// are not one synchronized wave.
pub fn spawn_drops<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Vec<RainDrop> {
    if viewport.is_empty() {
        return Vec::new();
    }
    (0..drop_count_for(viewport))
        .map(|_| {
            let length = DROP_LENGTH_MIN + rng.gen::<f32>() * DROP_LENGTH_SPAN;
            RainDrop {
                x: rng.gen::<f32>() * viewport.width,
                y: rng.gen_range(-viewport.height..viewport.height),
                speed: DROP_SPEED_MIN + rng.gen::<f32>() * DROP_SPEED_SPAN,
                length,
            }
        })
        .collect()
}

/// Advance every drop by its fixed speed; wrap the ones that left the bottom.
pub fn advance<R: Rng + ?Sized>(
    drops: &mut [RainDrop],
    dt: Duration,
    viewport: Viewport,
    rng: &mut R,
) {
    let dt_sec = dt.as_secs_f32();
    for drop in drops {
        if drop.has_exited(viewport) {
            drop.respawn_above(viewport, rng);
            continue;
        }
        drop.y += drop.speed * dt_sec;
        if drop.has_exited(viewport) {
            drop.respawn_above(viewport, rng);
        }
    }
}
