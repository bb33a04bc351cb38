//! Real-world units -> simulation space.
//!
//! Positions are re-centered on the primary and scaled so the farthest body
//! sits at [`SIM_DISTANCE_EXTENT`]; masses are scaled so the heaviest is
//! [`SIM_MASS_EXTENT`]. Velocities stay in km/s, so one simulation time unit
//! is `1 / s_x` seconds, and `G` is rescaled by `s_x / s_m` to keep orbits
//! closed in those units. A real period `T` lasts `s_x * T` time units.

use log::debug;

use crate::catalog::error::{CatalogError, CatalogResult};
use crate::simulation::states::{Body, NVec3, Rgb, SystemState, UnitScale};

/// Simulation-space distance of the farthest body from the primary
pub const SIM_DISTANCE_EXTENT: f64 = 1000.0;

/// Simulation-space mass of the heaviest body
pub const SIM_MASS_EXTENT: f64 = 1_000_000.0;

/// Newtonian constant in km^3 kg^-1 s^-2
pub const G_REAL: f64 = 6.67430e-20;

/// A body in real units, in catalog order. Index 0 is the primary.
#[derive(Debug, Clone, PartialEq)]
pub struct RawBody {
    pub name: String,
    pub color: Rgb,
    pub mass_kg: f64,
    pub position_km: NVec3,
    pub velocity_km_s: NVec3,
}

fn check(raw: &[RawBody]) -> CatalogResult<()> {
    let primary = raw
        .first()
        .ok_or_else(|| CatalogError::Format("system has no bodies".into()))?;

    if !(primary.mass_kg > 0.0) {
        return Err(CatalogError::Format(format!(
            "primary body {} must have positive mass, got {}",
            primary.name, primary.mass_kg
        )));
    }

    for b in raw {
        let finite = b.mass_kg.is_finite()
            && b.position_km.iter().all(|c| c.is_finite())
            && b.velocity_km_s.iter().all(|c| c.is_finite());
        if !finite {
            return Err(CatalogError::Format(format!("body {} has non-finite state", b.name)));
        }
        if b.mass_kg < 0.0 {
            return Err(CatalogError::Format(format!("body {} has negative mass", b.name)));
        }
    }

    Ok(())
}

/// Normalize `raw` into a fresh [`SystemState`] with empty trails.
#[allow(non_snake_case)]
pub fn normalize(
    name: &str,
    raw: &[RawBody],
    G_real: f64,
    trail_capacity: usize,
) -> CatalogResult<SystemState> {
    check(raw)?;

    // Re-center on the primary; velocities are left in the source frame
    let origin = raw[0].position_km;
    let centered: Vec<NVec3> = raw.iter().map(|b| b.position_km - origin).collect();

    // Farthest body defines the distance scale (1 for a lone or coincident set)
    let mut max_dist = centered.iter().map(|x| x.norm()).fold(0.0, f64::max);
    if max_dist == 0.0 {
        max_dist = 1.0;
    }

    // Primary mass > 0 was checked, so this is > 0 too
    let max_mass = raw.iter().map(|b| b.mass_kg).fold(0.0, f64::max);

    let s_x = SIM_DISTANCE_EXTENT / max_dist;
    let s_m = SIM_MASS_EXTENT / max_mass;
    let G_sim = G_real * (s_x / s_m);

    debug!(
        "normalized {}: max_dist = {:e} km, max_mass = {:e} kg, G_sim = {:e}",
        name, max_dist, max_mass, G_sim
    );

    let bodies = raw
        .iter()
        .zip(centered)
        .map(|(b, x)| {
            Body::new(
                b.name.clone(),
                b.color,
                b.mass_kg * s_m,
                x * s_x,
                b.velocity_km_s,
                trail_capacity,
            )
        })
        .collect();

    let mut state = SystemState::new(name, bodies, G_sim);
    state.scale = UnitScale { distance: s_x, mass: s_m };
    Ok(state)
}
