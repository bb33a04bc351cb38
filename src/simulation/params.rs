//! Numerical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed integration step size,
//! - gravity softening,
//! - trail capacity and sampling cadence

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // fixed step size
    pub softening: f64, // added to |r|^3 in the gravity denominator
    pub trail_capacity: usize, // max points kept per trail
    pub samples_per_frame: usize, // target trail points recorded per frame
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: 0.01,
            softening: crate::simulation::forces::DEFAULT_SOFTENING,
            trail_capacity: 350,
            samples_per_frame: 6,
        }
    }
}
