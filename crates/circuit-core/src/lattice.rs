//! Regular grid of nodes with independently pulsing active points and links.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;
use std::time::Duration;

use crate::constants::*;
use crate::viewport::Viewport;

#[derive(Clone, Debug, PartialEq)]
pub struct LatticeNode {
    pub row: usize,
    pub col: usize,
    pub pos: Vec2,
    pub active: bool,
    pub phase: f32,
    pub speed: f32,
}

/// Link between two active lattice nodes, indexed into `Lattice::nodes`.
#[derive(Clone, Debug, PartialEq)]
pub struct LatticeLink {
    pub from: usize,
    pub to: usize,
    pub phase: f32,
    pub speed: f32,
}

/// Euclidean distance in grid units between two (row, col) cells.
#[inline]
pub fn grid_distance(a: (usize, usize), b: (usize, usize)) -> f32 {
    let dr = a.0 as f32 - b.0 as f32;
    let dc = a.1 as f32 - b.1 as f32;
    (dr * dr + dc * dc).sqrt()
}

/// Maps a phase to [0, 1].
#[inline]
pub fn brightness(phase: f32) -> f32 {
    0.5 + 0.5 * phase.sin()
}

#[derive(Clone, Debug, Default)]
pub struct Lattice {
    pub rows: usize,
    pub cols: usize,
    pub spacing: f32,
    pub nodes: Vec<LatticeNode>,
    pub links: Vec<LatticeLink>,
}

impl Lattice {
    /// Lay out a grid covering the viewport (edges included) and wire up
    /// active neighbors.
    pub fn generate<R: Rng + ?Sized>(viewport: Viewport, spacing: f32, rng: &mut R) -> Self {
        if viewport.is_empty() || spacing <= 0.0 {
            return Self {
                spacing,
                ..Self::default()
            };
        }
        let cols = (viewport.width / spacing).floor() as usize + 1;
        let rows = (viewport.height / spacing).floor() as usize + 1;
        // center the grid so the leftover margin is split evenly
        let offset = Vec2::new(
            (viewport.width - (cols - 1) as f32 * spacing) * 0.5,
            (viewport.height - (rows - 1) as f32 * spacing) * 0.5,
        );

        let mut nodes = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                nodes.push(LatticeNode {
                    row,
                    col,
                    pos: offset + Vec2::new(col as f32 * spacing, row as f32 * spacing),
                    active: rng.gen_bool(LATTICE_ACTIVE_PROBABILITY),
                    phase: rng.gen::<f32>() * TAU,
                    speed: LATTICE_SPEED_MIN + rng.gen::<f32>() * LATTICE_SPEED_SPAN,
                });
            }
        }

        let links = link_active_neighbors(&nodes, cols, rng);
        log::debug!(
            "[lattice] {}x{} grid, active={} links={}",
            cols,
            rows,
            nodes.iter().filter(|n| n.active).count(),
            links.len()
        );
        Self {
            rows,
            cols,
            spacing,
            nodes,
            links,
        }
    }

    /// Advance every active node's and link's phase.
    pub fn advance(&mut self, dt: Duration) {
        let dt_sec = dt.as_secs_f32();
        for n in self.nodes.iter_mut().filter(|n| n.active) {
            n.phase = (n.phase + n.speed * dt_sec) % TAU;
        }
        for l in &mut self.links {
            l.phase = (l.phase + l.speed * dt_sec) % TAU;
        }
    }
}

// Only forward neighbors are visited so each pair is considered once.
fn link_active_neighbors<R: Rng + ?Sized>(
    nodes: &[LatticeNode],
    cols: usize,
    rng: &mut R,
) -> Vec<LatticeLink> {
    const FORWARD: [(isize, isize); 4] = [(0, 1), (1, -1), (1, 0), (1, 1)];
    let rows = if cols == 0 { 0 } else { nodes.len() / cols };
    let mut links = Vec::new();
    for (i, a) in nodes.iter().enumerate() {
        if !a.active {
            continue;
        }
        for (dr, dc) in FORWARD {
            let r = a.row as isize + dr;
            let c = a.col as isize + dc;
            if r < 0 || c < 0 || r as usize >= rows || c as usize >= cols {
                continue;
            }
            let j = r as usize * cols + c as usize;
            let b = &nodes[j];
            if !b.active || grid_distance((a.row, a.col), (b.row, b.col)) > LATTICE_NEIGHBOR_RADIUS {
                continue;
            }
            if rng.gen_bool(LATTICE_LINK_PROBABILITY) {
                links.push(LatticeLink {
                    from: i,
                    to: j,
                    phase: rng.gen::<f32>() * TAU,
                    speed: LATTICE_SPEED_MIN + rng.gen::<f32>() * LATTICE_SPEED_SPAN,
                });
            }
        }
    }
    links
}
