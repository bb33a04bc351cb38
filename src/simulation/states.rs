//! Core state types for the N-body simulation.
//!
//! - `Body` is a plain value record: mass, position, velocity, display
//!   metadata and its trail
//! - `SystemState` holds the ordered bodies, the gravitational constant `G`
//!   valid for their unit scale, and the simulation time `t`
//!
//! Index 0 is always the primary (used for centering and camera defaults).

use nalgebra::Vector3;

use crate::simulation::trail::TrailBuffer;

pub type NVec3 = Vector3<f64>;

/// Display color, RGB 0-255
pub type Rgb = [u8; 3];

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,
    pub color: Rgb,
    pub m: f64, // mass (simulation units)
    pub x: NVec3, // position (simulation units)
    pub v: NVec3, // velocity (simulation units / time)
    pub trail: TrailBuffer, // past positions, most recent last
}

impl Body {
    pub fn new(name: impl Into<String>, color: Rgb, m: f64, x: NVec3, v: NVec3, trail_capacity: usize) -> Self {
        Self {
            name: name.into(),
            color,
            m,
            x,
            v,
            trail: TrailBuffer::new(trail_capacity),
        }
    }
}

/// Scale factors applied by the unit normalizer
/// `sim = real * factor`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitScale {
    pub distance: f64, // s_x, simulation units per km
    pub mass: f64, // s_m, simulation units per kg
}

impl Default for UnitScale {
    fn default() -> Self {
        Self { distance: 1.0, mass: 1.0 }
    }
}

#[derive(Debug, Clone)]
#[allow(non_snake_case)]
pub struct SystemState {
    pub name: String,
    pub bodies: Vec<Body>,
    pub G: f64, // gravitational constant for this unit scale
    pub scale: UnitScale,
    pub t: f64, // time
}

impl SystemState {
    #[allow(non_snake_case)]
    pub fn new(name: impl Into<String>, bodies: Vec<Body>, G: f64) -> Self {
        Self {
            name: name.into(),
            bodies,
            G,
            scale: UnitScale::default(),
            t: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn primary(&self) -> Option<&Body> {
        self.bodies.first()
    }

    pub fn positions(&self) -> Vec<NVec3> {
        self.bodies.iter().map(|b| b.x).collect()
    }

    pub fn velocities(&self) -> Vec<NVec3> {
        self.bodies.iter().map(|b| b.v).collect()
    }

    pub fn masses(&self) -> Vec<f64> {
        self.bodies.iter().map(|b| b.m).collect()
    }

    /// Append each body's current position to its trail
    pub fn record_trails(&mut self) {
        for b in self.bodies.iter_mut() {
            b.trail.push(b.x);
        }
    }

    pub fn clear_trails(&mut self) {
        for b in self.bodies.iter_mut() {
            b.trail.clear();
        }
    }

    /// Sum of m * v over all bodies
    pub fn total_momentum(&self) -> NVec3 {
        self.bodies
            .iter()
            .fold(NVec3::zeros(), |p, b| p + b.m * b.v)
    }

    /// Kinetic plus pairwise potential energy, `-G m_i m_j / (r + softening)`
    /// per pair. The softening here only keeps coincident pairs finite; it is
    /// not the `|r|^3 + softening` term of the gravity field.
    pub fn total_energy(&self, softening: f64) -> f64 {
        let kinetic: f64 = self
            .bodies
            .iter()
            .map(|b| 0.5 * b.m * b.v.norm_squared())
            .sum();

        let mut potential = 0.0;
        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                let r = (self.bodies[j].x - self.bodies[i].x).norm();
                potential -= self.G * self.bodies[i].m * self.bodies[j].m / (r + softening);
            }
        }

        kinetic + potential
    }
}
