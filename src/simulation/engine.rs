//! High-level runtime engine settings
//!
//! How many RK4 sub-steps make up one rendered frame (the speed
//! multiplier).

#[derive(Debug, Clone)]
pub struct Engine {
    pub steps_per_frame: usize, // integrator sub-steps per frame, >= 1
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            steps_per_frame: 10,
        }
    }
}
