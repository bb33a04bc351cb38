//! Pinhole projection from simulation space to screen pixels.
//!
//! The look-at basis is built from the camera eye toward the origin with
//! world-up `+y`:
//! - `forward` = normalize(-eye)
//! - `right`   = normalize(up_world x forward)
//! - `up`      = forward x right
//!
//! A camera-space point with depth `z` maps to
//! `(w/2 + f x / z, h/2 - f y / z)`. Points with `z <= 0` are behind the
//! camera and are reported as not visible.

use crate::simulation::states::NVec3;
use crate::visualization::camera::Camera;

/// Default focal length in pixels
pub const DEFAULT_FOCAL_LENGTH: f64 = 500.0;

/// Below this length a basis vector is treated as degenerate
const BASIS_EPS: f64 = 1e-12;

/// Screen size in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 1200, height: 800 }
    }
}

/// Screen position and camera-space depth of a visible point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: i32,
    pub y: i32,
    pub depth: f64,
}

/// Frozen per-frame projection: camera basis plus screen parameters
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    eye: NVec3,
    right: NVec3,
    up: NVec3,
    forward: NVec3,
    viewport: Viewport,
    focal: f64,
}

impl Projector {
    pub fn new(camera: Camera, viewport: Viewport, focal: f64) -> Self {
        let eye = camera.eye();

        // Camera at the origin has no direction to look along
        let forward = (-eye)
            .try_normalize(BASIS_EPS)
            .unwrap_or_else(|| -NVec3::z());

        // Looking straight along world-up leaves `right` undefined
        let right = NVec3::y()
            .cross(&forward)
            .try_normalize(BASIS_EPS)
            .unwrap_or_else(NVec3::x);

        let up = forward.cross(&right);

        Self {
            eye,
            right,
            up,
            forward,
            viewport,
            focal,
        }
    }

    pub fn basis(&self) -> (NVec3, NVec3, NVec3) {
        (self.right, self.up, self.forward)
    }

    /// Camera-space coordinates `(x, y, depth)` of a world point
    pub fn to_camera_space(&self, p: &NVec3) -> NVec3 {
        let rel = p - self.eye;
        NVec3::new(rel.dot(&self.right), rel.dot(&self.up), rel.dot(&self.forward))
    }

    /// `None` when the point is behind (or level with) the camera
    pub fn project(&self, p: &NVec3) -> Option<Projected> {
        let cam = self.to_camera_space(p);
        let depth = cam.z;
        if !(depth > 0.0) {
            return None;
        }

        let sx = self.viewport.width as f64 / 2.0 + self.focal * cam.x / depth;
        let sy = self.viewport.height as f64 / 2.0 - self.focal * cam.y / depth;
        if !sx.is_finite() || !sy.is_finite() {
            return None;
        }

        // Float-to-int `as` truncates toward zero and saturates far off-screen points
        Some(Projected {
            x: sx as i32,
            y: sy as i32,
            depth,
        })
    }
}

/// Projection entry point: a closure mapping world points to screen points,
/// derived fresh from `(r, phi, theta)`
pub fn projection_fn(
    camera: Camera,
    viewport: Viewport,
    focal: f64,
) -> impl Fn(&NVec3) -> Option<Projected> {
    let projector = Projector::new(camera, viewport, focal);
    move |p| projector.project(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basis_is_orthonormal() {
        let proj = Projector::new(Camera::new(800.0, 0.4, 2.1), Viewport::default(), DEFAULT_FOCAL_LENGTH);
        let (r, u, f) = proj.basis();
        assert!((r.norm() - 1.0).abs() < 1e-12);
        assert!((u.norm() - 1.0).abs() < 1e-12);
        assert!(r.dot(&u).abs() < 1e-12);
        assert!(r.dot(&f).abs() < 1e-12);
        assert!(u.dot(&f).abs() < 1e-12);
        // world-up leans the same way as screen-up
        assert!(u.y > 0.0);
    }

    #[test]
    fn degenerate_camera_stays_finite() {
        let cam = Camera { r: 0.0, phi: 0.0, theta: 0.0 };
        let proj = Projector::new(cam, Viewport::default(), DEFAULT_FOCAL_LENGTH);
        let (r, u, f) = proj.basis();
        assert!(r.iter().chain(u.iter()).chain(f.iter()).all(|c| c.is_finite()));
        assert_eq!(f, -NVec3::z());

        let p = proj.project(&NVec3::new(0.0, 0.0, -10.0)).unwrap();
        assert_eq!((p.x, p.y), (600, 400));
    }

    #[test]
    fn looking_down_world_up_falls_back() {
        let cam = Camera { r: 10.0, phi: std::f64::consts::FRAC_PI_2, theta: 0.0 };
        let proj = Projector::new(cam, Viewport::default(), DEFAULT_FOCAL_LENGTH);
        let (r, _, _) = proj.basis();
        assert_eq!(r, NVec3::x());
    }
}
