pub mod simulation;
pub mod catalog;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, SystemState, NVec3, Rgb, UnitScale};
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity, gravity_field, gravity_for};
pub use simulation::integrator::{rk4_integrator, rk4_kinematics, step};
pub use simulation::trail::{TrailBuffer, TrailSampler};
pub use simulation::scenario::{Scenario, FrameView};

pub use catalog::{load_system, lookup, system_names, CatalogEntry, EphemerisSource, OfflineSource};
pub use catalog::error::CatalogError;
pub use catalog::horizons::HorizonsClient;
pub use catalog::normalize::{normalize, RawBody};

pub use configuration::config::{ScenarioConfig, SystemConfig, ConfigError};

pub use visualization::camera::{Camera, CameraRig, Smoothing};
pub use visualization::projection::{projection_fn, Projected, Projector, Viewport};

pub use benchmark::benchmark::bench_steps;
