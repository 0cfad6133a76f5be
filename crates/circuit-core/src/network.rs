//! Randomly scattered nodes joined by proximity-based traces.

use glam::Vec2;
use rand::Rng;

use crate::constants::*;
use crate::viewport::Viewport;

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub pos: Vec2,
    pub size: f32,
}

/// A trace between two nodes. `from < to` always holds.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
    pub from: usize,
    pub to: usize,
    pub opacity: f32,
}

/// Number of nodes for a viewport: one per `NODE_AREA_PX` square pixels.
#[inline]
pub fn node_count_for(viewport: Viewport) -> usize {
    (viewport.area() / NODE_AREA_PX).floor() as usize
}

/// Linear falloff: 1 at zero distance, 0 at (and beyond) `threshold`.
#[inline]
pub fn proximity_opacity(distance: f32, threshold: f32) -> f32 {
    if threshold <= 0.0 {
        return 0.0;
    }
    (1.0 - distance / threshold).clamp(0.0, 1.0)
}

pub fn scatter_nodes<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Vec<Node> {
    (0..node_count_for(viewport))
        .map(|_| Node {
            pos: Vec2::new(
                rng.gen::<f32>() * viewport.width,
                rng.gen::<f32>() * viewport.height,
            ),
            size: NODE_SIZE_MIN + rng.gen::<f32>() * NODE_SIZE_SPAN,
        })
        .collect()
}

/// Connect every pair of nodes strictly closer than `threshold`.
pub fn connect_by_proximity(nodes: &[Node], threshold: f32) -> Vec<Connection> {
    let mut out = Vec::new();
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            let d = nodes[i].pos.distance(nodes[j].pos);
            if d < threshold {
                out.push(Connection {
                    from: i,
                    to: j,
                    opacity: proximity_opacity(d, threshold),
                });
            }
        }
    }
    out
}

/// Nodes plus the traces between them, regenerated as a unit.
#[derive(Clone, Debug, Default)]
pub struct Network {
    pub nodes: Vec<Node>,
    pub connections: Vec<Connection>,
}

impl Network {
    pub fn generate<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Self {
        let nodes = scatter_nodes(viewport, rng);
        let connections = connect_by_proximity(&nodes, CONNECTION_DISTANCE);
        log::debug!(
            "[network] {}x{} -> nodes={} connections={}",
            viewport.width,
            viewport.height,
            nodes.len(),
            connections.len()
        );
        Self { nodes, connections }
    }

    #[inline]
    pub fn endpoints(&self, c: &Connection) -> (Vec2, Vec2) {
        (self.nodes[c.from].pos, self.nodes[c.to].pos)
    }
}
