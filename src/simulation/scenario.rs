//! Build and drive fully-initialized simulation scenarios
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`SystemState`, bodies at t = 0)
//! - active force set (`AccelSet`), built from the state's own `G`
//! - the orbit camera rig
//!
//! The scenario owns the state exclusively. A frame is a fixed number of
//! integrator sub-steps with trail sampling in between; loading a different
//! system swaps everything at once between frames.

use log::{debug, info, warn};

use crate::catalog::error::CatalogResult;
use crate::catalog::{load_entry, lookup, CatalogEntry, EphemerisSource};
use crate::configuration::config::{CameraConfig, ScenarioConfig, SmoothingConfig};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{gravity_for, AccelSet};
use crate::simulation::integrator::rk4_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::SystemState;
use crate::simulation::trail::TrailSampler;
use crate::visualization::camera::{Camera, CameraRig, Smoothing};
use crate::visualization::frame::{draw_list, trail_polyline, Drawable};
use crate::visualization::projection::{Projected, Projector, Viewport};

/// Everything the renderer needs for one frame
#[derive(Debug, Clone)]
pub struct FrameView {
    pub camera: Camera,
    pub bodies: Vec<Drawable>, // farthest first
    pub trails: Vec<Vec<Projected>>, // per body, in body order
}

pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    system: SystemState,
    forces: AccelSet, // always built from `system.G`
    pub camera: CameraRig,
    pub camera_cfg: CameraConfig,
    frame: u64, // frames since the current system was loaded
}

impl Scenario {
    /// Build from an already-normalized state
    pub fn new(cfg: &ScenarioConfig, mut system: SystemState) -> Self {
        let engine = Engine {
            steps_per_frame: cfg.engine.steps_per_frame.max(1),
        };

        let parameters = Parameters {
            dt: cfg.engine.dt,
            softening: cfg.engine.softening,
            trail_capacity: cfg.trail.capacity,
            samples_per_frame: cfg.trail.samples_per_frame,
        };

        let smoothing = match cfg.camera.smoothing {
            SmoothingConfig::Instant => Smoothing::Instant,
            SmoothingConfig::Eased => Smoothing::Eased(cfg.camera.lerp_speed),
        };
        let start = Camera::new(
            cfg.camera.radius_for(&system.name),
            cfg.camera.phi,
            cfg.camera.theta,
        );

        system.clear_trails();
        let forces = gravity_for(&system, parameters.softening);

        Self {
            engine,
            parameters,
            system,
            forces,
            camera: CameraRig::new(start, smoothing),
            camera_cfg: cfg.camera.clone(),
            frame: 0,
        }
    }

    /// Resolve the configured system (fetching remote vectors through
    /// `source`) and build the scenario
    pub fn build_scenario(cfg: &ScenarioConfig, source: &dyn EphemerisSource) -> CatalogResult<Self> {
        let entry = cfg.system.to_entry()?;
        let system = load_entry(&entry, source, cfg.trail.capacity)?;
        info!("loaded {} with {} bodies, G = {:e}", system.name, system.len(), system.G);
        Ok(Self::new(cfg, system))
    }

    pub fn system(&self) -> &SystemState {
        &self.system
    }

    pub fn forces(&self) -> &AccelSet {
        &self.forces
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Swap in a whole new state: forces are rebuilt from its `G`, trails
    /// and the frame counter reset, and the camera retargeted
    pub fn replace_system(&mut self, mut system: SystemState) {
        system.clear_trails();
        self.forces = gravity_for(&system, self.parameters.softening);
        self.camera.set_radius(self.camera_cfg.radius_for(&system.name));
        self.frame = 0;
        info!("switched to {} ({} bodies)", system.name, system.len());
        self.system = system;
    }

    /// Load and switch to another catalog entry. On failure the current
    /// state is kept as-is and the error returned.
    pub fn reload_entry(&mut self, entry: &CatalogEntry, source: &dyn EphemerisSource) -> CatalogResult<()> {
        match load_entry(entry, source, self.parameters.trail_capacity) {
            Ok(system) => {
                self.replace_system(system);
                Ok(())
            }
            Err(e) => {
                warn!("keeping {}: failed to load {}: {}", self.system.name, entry.name(), e);
                Err(e)
            }
        }
    }

    /// Load and switch to a built-in system by key
    pub fn reload(&mut self, key: &str, source: &dyn EphemerisSource) -> CatalogResult<()> {
        let entry = lookup(key)?;
        self.reload_entry(&entry, source)
    }

    /// One RK4 sub-step
    pub fn step(&mut self) {
        rk4_integrator(&mut self.system, &self.forces, self.parameters.dt);
    }

    /// Run one frame worth of sub-steps, sampling trails along the way
    pub fn advance_frame(&mut self) {
        let steps = self.engine.steps_per_frame.max(1);
        let sampler = TrailSampler::new(steps, self.parameters.samples_per_frame);

        for k in 0..steps {
            self.step();
            if sampler.should_sample(k) {
                self.system.record_trails();
            }
        }
        self.frame += 1;

        if log::log_enabled!(log::Level::Debug) && self.frame % 600 == 0 {
            debug!(
                "frame {} t = {:.3} |p| = {:e} E = {:e}",
                self.frame,
                self.system.t,
                self.system.total_momentum().norm(),
                self.system.total_energy(self.parameters.softening)
            );
        }
    }

    pub fn viewport(&self) -> Viewport {
        Viewport {
            width: self.camera_cfg.viewport[0],
            height: self.camera_cfg.viewport[1],
        }
    }

    /// Apply smoothing once and freeze the projection for this frame.
    /// Input deltas must be applied to `self.camera` before this.
    pub fn projector(&mut self) -> Projector {
        let cam = self.camera.update();
        Projector::new(cam, self.viewport(), self.camera_cfg.focal_length)
    }

    /// Camera update plus projection of every body and trail
    pub fn frame_view(&mut self) -> FrameView {
        let projector = self.projector();
        FrameView {
            camera: self.camera.current(),
            bodies: draw_list(&self.system, &projector),
            trails: self
                .system
                .bodies
                .iter()
                .map(|b| trail_polyline(&b.trail, &projector))
                .collect(),
        }
    }
}
