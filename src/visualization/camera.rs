//! Orbit camera around the origin.
//!
//! The camera always looks at the origin (where the primary sits after
//! normalization) from spherical coordinates `(r, phi, theta)`: `phi` is the
//! elevation above the x-z plane and `theta` the azimuth around world-up
//! (+y). User input moves a *target* camera; once per frame the rig moves
//! the current camera toward it and hands out a consistent snapshot.

use std::f64::consts::FRAC_PI_2;

use crate::simulation::states::NVec3;

/// Distance kept between `phi` and the poles
pub const POLE_MARGIN: f64 = 0.1;

/// Radians of rotation per pixel of drag
pub const DRAG_SENSITIVITY: f64 = 0.003;

pub const ZOOM_IN_FACTOR: f64 = 0.85;
pub const ZOOM_OUT_FACTOR: f64 = 1.15;

const MIN_RADIUS: f64 = 1e-3;
const MAX_RADIUS: f64 = 1e9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub r: f64, // distance from origin, > 0
    pub phi: f64, // elevation, kept inside (-pi/2, pi/2)
    pub theta: f64, // azimuth, unbounded
}

impl Camera {
    /// Build a camera with `r` and `phi` pulled back into their valid ranges
    pub fn new(r: f64, phi: f64, theta: f64) -> Self {
        Self {
            r: clamp_radius(r),
            phi: clamp_phi(phi),
            theta,
        }
    }

    /// Cartesian eye position
    pub fn eye(&self) -> NVec3 {
        NVec3::new(
            self.r * self.phi.cos() * self.theta.cos(),
            self.r * self.phi.sin(),
            self.r * self.phi.cos() * self.theta.sin(),
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(800.0, std::f64::consts::FRAC_PI_6, std::f64::consts::FRAC_PI_4)
    }
}

pub fn clamp_phi(phi: f64) -> f64 {
    phi.clamp(-FRAC_PI_2 + POLE_MARGIN, FRAC_PI_2 - POLE_MARGIN)
}

fn clamp_radius(r: f64) -> f64 {
    if r.is_nan() {
        return MIN_RADIUS;
    }
    r.clamp(MIN_RADIUS, MAX_RADIUS)
}

/// How the current camera follows its target
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Smoothing {
    /// Snap to the target every frame
    Instant,
    /// Close this fraction of the remaining gap every frame, in (0, 1]
    Eased(f64),
}

impl Default for Smoothing {
    fn default() -> Self {
        Smoothing::Eased(0.12)
    }
}

/// Current + target camera with a smoothing policy
#[derive(Debug, Clone)]
pub struct CameraRig {
    current: Camera,
    target: Camera,
    pub smoothing: Smoothing,
}

impl CameraRig {
    pub fn new(start: Camera, smoothing: Smoothing) -> Self {
        Self {
            current: start,
            target: start,
            smoothing,
        }
    }

    pub fn current(&self) -> Camera {
        self.current
    }

    pub fn target(&self) -> Camera {
        self.target
    }

    /// Drag by a pixel delta: x moves azimuth, y moves elevation
    /// (dragging down tilts the camera up)
    pub fn orbit(&mut self, dx: f64, dy: f64) {
        self.target.theta += dx * DRAG_SENSITIVITY;
        self.target.phi = clamp_phi(self.target.phi - dy * DRAG_SENSITIVITY);
    }

    pub fn zoom(&mut self, factor: f64) {
        self.target.r = clamp_radius(self.target.r * factor);
    }

    pub fn zoom_in(&mut self) {
        self.zoom(ZOOM_IN_FACTOR);
    }

    pub fn zoom_out(&mut self) {
        self.zoom(ZOOM_OUT_FACTOR);
    }

    pub fn set_radius(&mut self, r: f64) {
        self.target.r = clamp_radius(r);
    }

    /// Move the current camera toward the target and return the snapshot
    /// to project this frame with. Call once per frame, after input.
    pub fn update(&mut self) -> Camera {
        match self.smoothing {
            Smoothing::Instant => self.current = self.target,
            Smoothing::Eased(rate) => {
                let k = if rate.is_finite() { rate.clamp(0.0, 1.0) } else { 1.0 };
                let lerp = |cur: f64, tgt: f64| cur + (tgt - cur) * k;
                self.current = Camera {
                    r: clamp_radius(lerp(self.current.r, self.target.r)),
                    phi: clamp_phi(lerp(self.current.phi, self.target.phi)),
                    theta: lerp(self.current.theta, self.target.theta),
                };
            }
        }
        self.current
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(Camera::default(), Smoothing::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phi_never_reaches_the_poles() {
        let mut rig = CameraRig::new(Camera::default(), Smoothing::Instant);
        rig.orbit(0.0, -1e6);
        assert_eq!(rig.update().phi, FRAC_PI_2 - POLE_MARGIN);
        rig.orbit(0.0, 1e6);
        assert_eq!(rig.update().phi, -FRAC_PI_2 + POLE_MARGIN);
    }

    #[test]
    fn eased_rig_converges_on_target() {
        let mut rig = CameraRig::new(Camera::new(800.0, 0.5, 0.0), Smoothing::Eased(0.12));
        rig.set_radius(1500.0);
        rig.orbit(100.0, 0.0);

        let first = rig.update();
        assert!((first.r - (800.0 + 700.0 * 0.12)).abs() < 1e-9);

        for _ in 0..300 {
            rig.update();
        }
        let cam = rig.current();
        assert!((cam.r - 1500.0).abs() < 1e-6);
        assert!((cam.theta - 0.3).abs() < 1e-9);
    }

    #[test]
    fn instant_rig_snaps() {
        let mut rig = CameraRig::new(Camera::default(), Smoothing::Instant);
        rig.zoom_in();
        assert_eq!(rig.update().r, 800.0 * ZOOM_IN_FACTOR);
    }
}
