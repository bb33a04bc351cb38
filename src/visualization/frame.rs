//! Per-frame draw preparation.
//!
//! Turns a `SystemState` plus a frozen `Projector` into plain data an
//! external renderer can consume directly: depth-sorted body sprites and
//! decimated trail polylines. No drawing happens here.

use std::cmp::Ordering;

use crate::simulation::states::{Rgb, SystemState};
use crate::simulation::trail::TrailBuffer;
use crate::visualization::projection::{Projected, Projector};

/// Apparent size numerator, pixels * simulation units
const SIZE_SCALE: f64 = 550.0;

/// Trails are thinned to roughly this many points before drawing
pub const TRAIL_DRAW_POINTS: usize = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    pub index: usize, // body index in the state
    pub name: String,
    pub color: Rgb,
    pub x: i32,
    pub y: i32,
    pub radius: i32, // apparent radius in pixels, >= 1
    pub depth: f64,
}

/// Log-scaled visual size for a simulation mass
fn visual_size(m: f64) -> f64 {
    if m > 0.0 {
        (m.log10() + 2.0).max(0.5)
    } else {
        1.0
    }
}

/// Apparent radius shrinks with depth, never below one pixel
pub fn apparent_radius(m: f64, depth: f64) -> i32 {
    let r = visual_size(m) * SIZE_SCALE / depth;
    if r.is_finite() {
        (r as i32).max(1)
    } else {
        1
    }
}

/// Visible bodies, farthest first (painter's order)
pub fn draw_list(state: &SystemState, projector: &Projector) -> Vec<Drawable> {
    let mut out: Vec<Drawable> = state
        .bodies
        .iter()
        .enumerate()
        .filter_map(|(index, b)| {
            let p = projector.project(&b.x)?;
            Some(Drawable {
                index,
                name: b.name.clone(),
                color: b.color,
                x: p.x,
                y: p.y,
                radius: apparent_radius(b.m, p.depth),
                depth: p.depth,
            })
        })
        .collect();

    out.sort_by(|a, b| b.depth.partial_cmp(&a.depth).unwrap_or(Ordering::Equal));
    out
}

/// Thinned, projected trail (oldest first). The newest point is always
/// included when visible; hidden points are dropped.
pub fn trail_polyline(trail: &TrailBuffer, projector: &Projector) -> Vec<Projected> {
    if trail.len() < 2 {
        return Vec::new();
    }

    let stride = (trail.len() / TRAIL_DRAW_POINTS).max(1);
    let mut out: Vec<Projected> = trail
        .iter()
        .step_by(stride)
        .filter_map(|p| projector.project(p))
        .collect();

    // step_by already hit the newest point when it sits on the stride
    if (trail.len() - 1) % stride != 0 {
        if let Some(last) = trail.latest().and_then(|p| projector.project(p)) {
            out.push(last);
        }
    }
    out
}
