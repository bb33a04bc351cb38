//! Body catalogs and system loading.
//!
//! A catalog entry is either [`CatalogEntry::Static`] (vectors given inline)
//! or [`CatalogEntry::Remote`] (vectors fetched from an [`EphemerisSource`]).
//! Loading resolves the entry to raw bodies and runs them through the unit
//! normalizer, producing a fresh [`SystemState`]. Nothing is built unless
//! every body resolves.

pub mod error;
pub mod horizons;
pub mod normalize;
mod systems;

use log::info;

use crate::simulation::states::{NVec3, Rgb, SystemState};

use self::error::{CatalogError, CatalogResult};
use self::normalize::{normalize, RawBody, G_REAL};
use self::systems::{BuiltinSystem, BUILTIN};

/// Inline system: real-unit bodies plus an optional `G` override
#[derive(Debug, Clone, PartialEq)]
#[allow(non_snake_case)]
pub struct StaticSystem {
    pub name: String,
    pub G_real: Option<f64>,
    pub bodies: Vec<RawBody>,
}

/// A body whose state vector is looked up by id
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteBody {
    pub id: String,
    pub name: String,
    pub mass_kg: f64,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemoteSystem {
    pub name: String,
    pub center: String, // observing center, e.g. "500@0"
    pub bodies: Vec<RemoteBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEntry {
    Static(StaticSystem),
    Remote(RemoteSystem),
}

impl CatalogEntry {
    pub fn name(&self) -> &str {
        match self {
            CatalogEntry::Static(s) => &s.name,
            CatalogEntry::Remote(r) => &r.name,
        }
    }
}

/// Supplies real-unit state vectors (km, km/s) for remote catalogs
pub trait EphemerisSource {
    fn state_vector(&self, body_id: &str, center: &str) -> CatalogResult<(NVec3, NVec3)>;
}

/// Source that never reaches the network; remote systems fail to load
pub struct OfflineSource;

impl EphemerisSource for OfflineSource {
    fn state_vector(&self, body_id: &str, _center: &str) -> CatalogResult<(NVec3, NVec3)> {
        Err(CatalogError::Retrieval(format!("offline, cannot fetch body {}", body_id)))
    }
}

/// Built-in system keys in catalog order
pub fn system_names() -> Vec<&'static str> {
    BUILTIN.iter().map(BuiltinSystem::key).collect()
}

/// Look up a built-in system by key
pub fn lookup(key: &str) -> CatalogResult<CatalogEntry> {
    let builtin = BUILTIN
        .iter()
        .find(|s| s.key() == key)
        .ok_or_else(|| CatalogError::UnknownSystem(key.to_string()))?;

    let entry = match builtin {
        BuiltinSystem::Remote { key, center, bodies } => CatalogEntry::Remote(RemoteSystem {
            name: key.to_string(),
            center: center.to_string(),
            bodies: bodies
                .iter()
                .map(|&(id, mass_kg, name, color)| RemoteBody {
                    id: id.to_string(),
                    name: name.to_string(),
                    mass_kg,
                    color,
                })
                .collect(),
        }),
        BuiltinSystem::Static { key, g_real, bodies } => CatalogEntry::Static(StaticSystem {
            name: key.to_string(),
            G_real: *g_real,
            bodies: bodies
                .iter()
                .map(|&(mass_kg, x, v, name, color)| RawBody {
                    name: name.to_string(),
                    color,
                    mass_kg,
                    position_km: NVec3::from(x),
                    velocity_km_s: NVec3::from(v),
                })
                .collect(),
        }),
    };

    Ok(entry)
}

/// Resolve an entry to real-unit bodies and the `G` they should use
pub fn gather(entry: &CatalogEntry, source: &dyn EphemerisSource) -> CatalogResult<(Vec<RawBody>, f64)> {
    match entry {
        CatalogEntry::Static(s) => {
            info!("loading static system: {}", s.name);
            Ok((s.bodies.clone(), s.G_real.unwrap_or(G_REAL)))
        }
        CatalogEntry::Remote(r) => {
            info!("fetching {} bodies for {} (center {})", r.bodies.len(), r.name, r.center);
            let mut raw = Vec::with_capacity(r.bodies.len());
            for b in &r.bodies {
                let (x, v) = source.state_vector(&b.id, &r.center)?;
                raw.push(RawBody {
                    name: b.name.clone(),
                    color: b.color,
                    mass_kg: b.mass_kg,
                    position_km: x,
                    velocity_km_s: v,
                });
            }
            info!("fetched {}", r.name);
            Ok((raw, G_REAL))
        }
    }
}

/// Resolve and normalize a catalog entry
pub fn load_entry(
    entry: &CatalogEntry,
    source: &dyn EphemerisSource,
    trail_capacity: usize,
) -> CatalogResult<SystemState> {
    let (raw, g_real) = gather(entry, source)?;
    normalize(entry.name(), &raw, g_real, trail_capacity)
}

/// Load a built-in system by key
pub fn load_system(
    key: &str,
    source: &dyn EphemerisSource,
    trail_capacity: usize,
) -> CatalogResult<SystemState> {
    let entry = lookup(key)?;
    load_entry(&entry, source, trail_capacity)
}
