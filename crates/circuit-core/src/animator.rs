//! The background animator: owns one variant's full population and renders it
//! through a [`Painter`] once per frame.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use crate::config::{AnimatorConfig, Variant};
use crate::constants::*;
use crate::glyph::{GlyphEvent, GlyphRain};
use crate::lattice::{self, Lattice};
use crate::network::Network;
use crate::paint::{paint_node, Painter};
use crate::rain::{self, RainDrop};
use crate::viewport::Viewport;

/// Variant-specific population, rebuilt wholesale on resize.
#[derive(Clone, Debug)]
pub enum Scene {
    LineRain { network: Network, drops: Vec<RainDrop> },
    GlyphRain { network: Network },
    LatticePulse { lattice: Lattice },
}

pub struct BackgroundAnimator {
    config: AnimatorConfig,
    viewport: Viewport,
    rng: StdRng,
    elapsed: Duration,
    scene: Scene,
    glyphs: GlyphRain,
    paint_glyphs: bool,
}

impl BackgroundAnimator {
    pub fn new(config: AnimatorConfig, viewport: Viewport) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let scene = build_scene(config.variant, viewport, &mut rng);
        let mut glyphs = GlyphRain::new();
        if config.variant == Variant::GlyphRain {
            glyphs.start(viewport, Duration::ZERO);
        }
        log::info!(
            "[animator] variant={} viewport={}x{}",
            config.variant,
            viewport.width,
            viewport.height
        );
        Self {
            config,
            viewport,
            rng,
            elapsed: Duration::ZERO,
            scene,
            glyphs,
            paint_glyphs: false,
        }
    }

    #[inline]
    pub fn variant(&self) -> Variant {
        self.config.variant
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Animation clock: the sum of all (clamped) frame steps so far.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn glyphs(&self) -> &GlyphRain {
        &self.glyphs
    }

    /// Paint live glyphs on the surface instead of leaving them to the host.
    pub fn set_paint_glyphs(&mut self, on: bool) {
        self.paint_glyphs = on;
    }

    pub fn network(&self) -> Option<&Network> {
        match &self.scene {
            Scene::LineRain { network, .. } | Scene::GlyphRain { network } => Some(network),
            Scene::LatticePulse { .. } => None,
        }
    }

    pub fn drops(&self) -> Option<&[RainDrop]> {
        match &self.scene {
            Scene::LineRain { drops, .. } => Some(drops),
            _ => None,
        }
    }

    pub fn lattice(&self) -> Option<&Lattice> {
        match &self.scene {
            Scene::LatticePulse { lattice } => Some(lattice),
            _ => None,
        }
    }

    /// Throw away the population and regenerate it for the new size.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        log::info!(
            "[animator] resize {}x{} -> {}x{}",
            self.viewport.width,
            self.viewport.height,
            viewport.width,
            viewport.height
        );
        // too narrow for a single column means the start-up burst never ran
        let missed_burst = self.viewport.width < RAIN_COLUMN_SPACING;
        self.viewport = viewport;
        self.scene = build_scene(self.config.variant, viewport, &mut self.rng);
        if missed_burst && self.config.variant == Variant::GlyphRain {
            self.glyphs.burst(viewport, self.elapsed);
        }
    }

    /// Advance the simulation by `dt` (clamped to `MAX_FRAME_DT`). Glyph
    /// spawn/expire events produced by the step are appended to `out`.
    pub fn tick(&mut self, dt: Duration, out: &mut Vec<GlyphEvent>) {
        let dt = dt.min(MAX_FRAME_DT);
        self.elapsed += dt;
        match &mut self.scene {
            Scene::LineRain { drops, .. } => {
                rain::advance(drops, dt, self.viewport, &mut self.rng);
            }
            Scene::GlyphRain { .. } => {
                self.glyphs
                    .tick(self.elapsed, self.viewport, &mut self.rng, out);
            }
            Scene::LatticePulse { lattice } => lattice.advance(dt),
        }
    }

    /// Draw the current state. No-op on an empty viewport.
    pub fn paint<P: Painter + ?Sized>(&self, painter: &mut P) {
        if self.viewport.is_empty() {
            return;
        }
        let palette = &self.config.palette;
        match &self.scene {
            Scene::LineRain { network, drops } => {
                painter.fade(self.viewport, palette.backdrop.with_alpha(FADE_ALPHA));
                self.paint_network(painter, network);
                for d in drops {
                    painter.line(d.tail(), d.head(), palette.rain, DROP_LINE_WIDTH);
                }
            }
            Scene::GlyphRain { network } => {
                painter.clear(self.viewport);
                self.paint_network(painter, network);
                if self.paint_glyphs {
                    for g in self.glyphs.live() {
                        let alpha = g.opacity(self.elapsed);
                        if alpha <= 0.0 {
                            continue;
                        }
                        let pos = Vec2::new(g.x, g.offset_y(self.elapsed, self.viewport));
                        painter.text(g.text, pos, g.font_px, palette.rain.scale_alpha(alpha));
                    }
                }
            }
            Scene::LatticePulse { lattice } => {
                painter.clear(self.viewport);
                self.paint_lattice(painter, lattice);
            }
        }
    }

    /// `tick` followed by `paint`.
    pub fn frame<P: Painter + ?Sized>(
        &mut self,
        dt: Duration,
        painter: &mut P,
        out: &mut Vec<GlyphEvent>,
    ) {
        self.tick(dt, out);
        self.paint(painter);
    }

    fn paint_network<P: Painter + ?Sized>(&self, painter: &mut P, network: &Network) {
        let palette = &self.config.palette;
        for c in &network.connections {
            let (a, b) = network.endpoints(c);
            let color = palette
                .trace
                .with_alpha(c.opacity * CONNECTION_ALPHA_SCALE);
            painter.line(a, b, color, CONNECTION_LINE_WIDTH);
        }
        for n in &network.nodes {
            paint_node(painter, n.pos, n.size, GLOW_RADIUS_FACTOR, palette, 1.0);
        }
    }

    fn paint_lattice<P: Painter + ?Sized>(&self, painter: &mut P, lattice: &Lattice) {
        let palette = &self.config.palette;
        for l in &lattice.links {
            let b = lattice::brightness(l.phase);
            let color = palette
                .trace
                .with_alpha(LATTICE_LINK_ALPHA_BASE + LATTICE_LINK_ALPHA_SPAN * b);
            let width = LATTICE_LINK_WIDTH_BASE + LATTICE_LINK_WIDTH_SPAN * b;
            painter.line(lattice.nodes[l.from].pos, lattice.nodes[l.to].pos, color, width);
        }
        for n in &lattice.nodes {
            if n.active {
                let b = lattice::brightness(n.phase);
                let size = LATTICE_NODE_RADIUS * (1.0 + LATTICE_NODE_PULSE * b);
                paint_node(painter, n.pos, size, GLOW_RADIUS_FACTOR, palette, 0.4 + 0.6 * b);
            } else {
                painter.disc(n.pos, 1.0, palette.core.with_alpha(LATTICE_IDLE_ALPHA));
            }
        }
    }
}

fn build_scene(variant: Variant, viewport: Viewport, rng: &mut StdRng) -> Scene {
    match variant {
        Variant::LineRain => Scene::LineRain {
            network: Network::generate(viewport, rng),
            drops: rain::spawn_drops(viewport, rng),
        },
        Variant::GlyphRain => Scene::GlyphRain {
            network: Network::generate(viewport, rng),
        },
        Variant::LatticePulse => Scene::LatticePulse {
            lattice: Lattice::generate(viewport, LATTICE_SPACING, rng),
        },
    }
}
