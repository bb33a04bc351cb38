//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`] – step size, speed multiplier, softening
//! - [`TrailConfig`]  – trail capacity and sampling cadence
//! - [`CameraConfig`] – initial orbit camera, smoothing and screen setup
//! - [`SystemConfig`] – which bodies to simulate: a built-in catalog key or
//!   an inline static system in real units
//!
//! Every section except `system` may be omitted and falls back to defaults.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   dt: 0.01
//!   steps_per_frame: 10     # speed multiplier
//!   softening: 1.0e-10
//!
//! trail:
//!   capacity: 350
//!   samples_per_frame: 6
//!
//! camera:
//!   radius: 800.0           # default for stars and planets
//!   wide_radius: 1500.0     # default for moon systems
//!   phi: 0.5236
//!   theta: 0.7854
//!   smoothing: "eased"      # or "instant"
//!   lerp_speed: 0.12
//!   focal_length: 500.0
//!   viewport: [1200, 800]
//!
//! system:
//!   static:
//!     name: "Binary"
//!     G_real: 6.67430e-20
//!     bodies:
//!       - name: "A"
//!         mass: 2.0e30
//!         x: [-1.0e8, 0.0, 0.0]
//!         v: [0.0, -15.0, 0.0]
//!         color: [255, 200, 120]
//!       - name: "B"
//!         mass: 2.0e30
//!         x: [1.0e8, 0.0, 0.0]
//!         v: [0.0, 15.0, 0.0]
//! ```
//!
//! or simply `system: { catalog: "TRAPPIST-1" }`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::catalog::error::{CatalogError, CatalogResult};
use crate::catalog::normalize::RawBody;
use crate::catalog::{lookup, CatalogEntry, StaticSystem};
use crate::simulation::states::{NVec3, Rgb};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read scenario: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse scenario: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid scenario: {0}")]
    Invalid(String),
}

/// RK4 settings
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub dt: f64, // fixed time step, simulation time units
    pub steps_per_frame: usize, // sub-steps per rendered frame
    pub softening: f64, // added to |r|^3 in the gravity denominator
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dt: 0.01,
            steps_per_frame: 10,
            softening: crate::simulation::forces::DEFAULT_SOFTENING,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct TrailConfig {
    pub capacity: usize, // max points per trail
    pub samples_per_frame: usize, // target points recorded per frame
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            capacity: 350,
            samples_per_frame: 6,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SmoothingConfig {
    #[serde(rename = "instant")]
    Instant,
    #[serde(rename = "eased")]
    #[default]
    Eased,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CameraConfig {
    pub radius: f64, // default distance for star and planetary systems
    pub wide_radius: f64, // default distance for moon systems
    pub phi: f64,
    pub theta: f64,
    pub smoothing: SmoothingConfig,
    pub lerp_speed: f64, // fraction of the gap closed per frame when eased
    pub focal_length: f64,
    pub viewport: [u32; 2],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            radius: 800.0,
            wide_radius: 1500.0,
            phi: std::f64::consts::FRAC_PI_6,
            theta: std::f64::consts::FRAC_PI_4,
            smoothing: SmoothingConfig::Eased,
            lerp_speed: 0.12,
            focal_length: crate::visualization::projection::DEFAULT_FOCAL_LENGTH,
            viewport: [1200, 800],
        }
    }
}

impl CameraConfig {
    /// Moon systems ("Jovian System", ...) start zoomed out; the Solar
    /// System and single-star systems use the normal radius
    pub fn radius_for(&self, system_name: &str) -> f64 {
        if system_name.contains("System") && system_name != "Solar System" {
            self.wide_radius
        } else {
            self.radius
        }
    }
}

/// Configuration for a single body in real units
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub mass: f64, // kg
    pub x: Vec<f64>, // km
    pub v: Vec<f64>, // km/s
    #[serde(default = "default_color")]
    pub color: Rgb,
}

fn default_color() -> Rgb {
    [200, 200, 200]
}

fn vec3(name: &str, what: &str, c: &[f64]) -> CatalogResult<NVec3> {
    match c {
        [x, y, z] => Ok(NVec3::new(*x, *y, *z)),
        _ => Err(CatalogError::Format(format!(
            "body {}: {} needs 3 components, got {}",
            name,
            what,
            c.len()
        ))),
    }
}

impl BodyConfig {
    pub fn to_raw(&self) -> CatalogResult<RawBody> {
        Ok(RawBody {
            name: self.name.clone(),
            color: self.color,
            mass_kg: self.mass,
            position_km: vec3(&self.name, "x", &self.x)?,
            velocity_km_s: vec3(&self.name, "v", &self.v)?,
        })
    }
}

#[derive(Deserialize, Debug, Clone)]
#[allow(non_snake_case)]
pub struct StaticSystemConfig {
    pub name: String,
    #[serde(default)]
    pub G_real: Option<f64>, // km^3 kg^-1 s^-2
    pub bodies: Vec<BodyConfig>,
}

/// Exactly one of `catalog` / `static` must be set
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SystemConfig {
    pub catalog: Option<String>,
    #[serde(rename = "static")]
    pub inline: Option<StaticSystemConfig>,
}

impl SystemConfig {
    pub fn catalog(key: &str) -> Self {
        Self {
            catalog: Some(key.to_string()),
            inline: None,
        }
    }

    /// Resolve to a catalog entry; inline bodies are checked here so a
    /// malformed vector never reaches the normalizer
    pub fn to_entry(&self) -> CatalogResult<CatalogEntry> {
        match (&self.catalog, &self.inline) {
            (Some(key), None) => lookup(key),
            (None, Some(s)) => {
                let bodies = s
                    .bodies
                    .iter()
                    .map(BodyConfig::to_raw)
                    .collect::<CatalogResult<Vec<_>>>()?;
                Ok(CatalogEntry::Static(StaticSystem {
                    name: s.name.clone(),
                    G_real: s.G_real,
                    bodies,
                }))
            }
            (Some(_), Some(_)) => Err(CatalogError::Format(
                "system sets both `catalog` and `static`".into(),
            )),
            (None, None) => Err(CatalogError::Format(
                "system needs either `catalog` or `static`".into(),
            )),
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub trail: TrailConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub system: SystemConfig,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: ScenarioConfig = serde_yaml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let reader = BufReader::new(File::open(path)?);
        let cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject settings the engine cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bad = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if !(self.engine.dt.is_finite() && self.engine.dt > 0.0) {
            return bad("engine.dt must be a positive number");
        }
        if self.engine.steps_per_frame == 0 {
            return bad("engine.steps_per_frame must be at least 1");
        }
        if !(self.engine.softening >= 0.0) {
            return bad("engine.softening must be non-negative");
        }
        if self.trail.capacity == 0 {
            return bad("trail.capacity must be at least 1");
        }
        if !(self.camera.radius > 0.0 && self.camera.wide_radius > 0.0) {
            return bad("camera radii must be positive");
        }
        if !(self.camera.focal_length > 0.0) {
            return bad("camera.focal_length must be positive");
        }
        if !(self.camera.lerp_speed > 0.0 && self.camera.lerp_speed <= 1.0) {
            return bad("camera.lerp_speed must be in (0, 1]");
        }
        if self.camera.viewport.contains(&0) {
            return bad("camera.viewport must be non-empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_only_file_uses_defaults() {
        let cfg = ScenarioConfig::from_yaml_str("system:\n  catalog: \"TRAPPIST-1\"\n").unwrap();
        assert_eq!(cfg.engine.dt, 0.01);
        assert_eq!(cfg.engine.steps_per_frame, 10);
        assert_eq!(cfg.trail.capacity, 350);
        assert_eq!(cfg.camera.smoothing, SmoothingConfig::Eased);
        assert_eq!(cfg.system.catalog.as_deref(), Some("TRAPPIST-1"));
    }

    #[test]
    fn inline_system_is_parsed() {
        let yaml = r#"
engine:
  dt: 0.5
camera:
  smoothing: "instant"
system:
  static:
    name: "Pair"
    bodies:
      - { name: "A", mass: 1.0e30, x: [0.0, 0.0, 0.0], v: [0.0, 0.0, 0.0] }
      - { name: "B", mass: 1.0e24, x: [1.0e6, 0.0, 0.0], v: [0.0, 10.0, 0.0], color: [1, 2, 3] }
"#;
        let cfg = ScenarioConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.engine.dt, 0.5);
        assert_eq!(cfg.camera.smoothing, SmoothingConfig::Instant);

        match cfg.system.to_entry().unwrap() {
            CatalogEntry::Static(s) => {
                assert_eq!(s.bodies.len(), 2);
                assert_eq!(s.bodies[1].color, [1, 2, 3]);
                assert_eq!(s.bodies[0].color, default_color());
                assert!(s.G_real.is_none());
            }
            other => panic!("expected static entry, got {:?}", other),
        }
    }

    #[test]
    fn short_vector_is_a_format_error() {
        let yaml = r#"
system:
  static:
    name: "Broken"
    bodies:
      - { name: "A", mass: 1.0, x: [0.0, 0.0], v: [0.0, 0.0, 0.0] }
"#;
        let cfg = ScenarioConfig::from_yaml_str(yaml).unwrap();
        assert!(matches!(cfg.system.to_entry(), Err(CatalogError::Format(_))));
    }

    #[test]
    fn documented_example_parses() {
        let yaml = r#"
engine:
  dt: 0.01
  steps_per_frame: 10      # speed multiplier, >= 1
  softening: 1.0e-10
trail:
  capacity: 350
  samples_per_frame: 6     # trail sampling cadence; see 11.3
camera:
  radius: 800.0            # planets and single stars
  wide_radius: 1500.0      # moon systems
  theta: 0.785
  phi: 0.523
  smoothing: "eased"       # or "instant"
  lerp_speed: 0.12         # used when eased, in (0, 1]
  focal_length: 500.0
  viewport: [1200, 800]
system:
  catalog: "TRAPPIST-1"    # built-in key
  # or inline:
  # static:
  #   name: "Binary"
  #   G_real: 6.67430e-20
  #   bodies: [ { name, mass, x: [..], v: [..], color: [r,g,b] }, ... ]
"#;
        let cfg = ScenarioConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.camera.smoothing, SmoothingConfig::Eased);
        assert_eq!(cfg.camera.lerp_speed, 0.12);
        assert_eq!(cfg.camera.wide_radius, 1500.0);
        assert_eq!(cfg.camera.viewport, [1200, 800]);
        assert_eq!(cfg.trail.samples_per_frame, 6);
        assert!(matches!(cfg.system.to_entry(), Ok(CatalogEntry::Static(_))));
    }

    #[test]
    fn smoothing_rate_map_is_rejected() {
        let err = ScenarioConfig::from_yaml_str("camera:\n  smoothing: { eased: 0.12 }\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn zero_dt_is_rejected() {
        let err = ScenarioConfig::from_yaml_str("engine:\n  dt: 0.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn moon_systems_start_wide() {
        let cam = CameraConfig::default();
        assert_eq!(cam.radius_for("Jovian System"), 1500.0);
        assert_eq!(cam.radius_for("Solar System"), 800.0);
        assert_eq!(cam.radius_for("TRAPPIST-1"), 800.0);
    }
}
