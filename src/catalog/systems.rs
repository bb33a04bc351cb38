//! Built-in body catalogs.
//!
//! Remote systems name each body by its JPL Horizons command id and give the
//! observing center; their state vectors are fetched at load time. Static
//! systems carry their vectors inline (kg, km, km/s).

use crate::simulation::states::Rgb;

/// (horizons id, mass kg, display name, color)
pub(crate) type RemoteRow = (&'static str, f64, &'static str, Rgb);

/// (mass kg, position km, velocity km/s, display name, color)
pub(crate) type StaticRow = (f64, [f64; 3], [f64; 3], &'static str, Rgb);

pub(crate) enum BuiltinSystem {
    Remote {
        key: &'static str,
        center: &'static str,
        bodies: &'static [RemoteRow],
    },
    Static {
        key: &'static str,
        g_real: Option<f64>,
        bodies: &'static [StaticRow],
    },
}

impl BuiltinSystem {
    pub(crate) fn key(&self) -> &'static str {
        match self {
            BuiltinSystem::Remote { key, .. } | BuiltinSystem::Static { key, .. } => *key,
        }
    }
}

const SUN: RemoteRow = ("10", 1.98847e30, "Sun", [255, 204, 0]);
const MERCURY: RemoteRow = ("199", 3.3011e23, "Mercury", [165, 165, 165]);
const VENUS: RemoteRow = ("299", 4.8675e24, "Venus", [227, 186, 142]);
const EARTH: RemoteRow = ("399", 5.97237e24, "Earth", [40, 122, 255]);
const MARS: RemoteRow = ("499", 6.4171e23, "Mars", [255, 107, 60]);
const JUPITER: RemoteRow = ("599", 1.8982e27, "Jupiter", [216, 178, 147]);
const SATURN: RemoteRow = ("699", 5.6834e26, "Saturn", [225, 198, 110]);
const URANUS: RemoteRow = ("799", 8.6810e25, "Uranus", [175, 238, 238]);
const NEPTUNE: RemoteRow = ("899", 1.02413e26, "Neptune", [75, 112, 221]);
const PLUTO: RemoteRow = ("999", 1.303e22, "Pluto", [255, 230, 200]);

pub(crate) const BUILTIN: &[BuiltinSystem] = &[
    BuiltinSystem::Remote {
        key: "Solar System",
        center: "500@0", // solar system barycenter
        bodies: &[SUN, MERCURY, VENUS, EARTH, MARS, JUPITER, SATURN, URANUS, NEPTUNE],
    },
    BuiltinSystem::Remote {
        key: "Jovian System",
        center: "500@599",
        bodies: &[
            ("599", 1.89822e27, "Jupiter", [216, 178, 147]),
            ("501", 8.9319e22, "Io", [249, 249, 131]),
            ("502", 4.800e22, "Europa", [191, 192, 192]),
            ("503", 1.4819e23, "Ganymede", [147, 125, 108]),
            ("504", 1.0759e23, "Callisto", [110, 103, 89]),
        ],
    },
    BuiltinSystem::Remote {
        key: "Saturnian System",
        center: "500@699",
        bodies: &[
            SATURN,
            ("606", 1.3452e23, "Titan", [238, 194, 70]),
            ("605", 2.306e21, "Rhea", [220, 220, 220]),
            ("608", 1.805e21, "Iapetus", [180, 180, 180]),
            ("604", 1.095e21, "Dione", [160, 160, 160]),
            ("603", 6.174e20, "Tethys", [140, 140, 140]),
        ],
    },
    BuiltinSystem::Remote {
        key: "Earth-Moon",
        center: "500@399",
        bodies: &[EARTH, ("301", 7.342e22, "Moon", [200, 200, 200])],
    },
    BuiltinSystem::Remote {
        key: "Uranian System",
        center: "500@799",
        bodies: &[
            URANUS,
            ("703", 3.527e21, "Titania", [210, 210, 210]),
            ("704", 3.014e21, "Oberon", [190, 190, 190]),
            ("702", 1.172e21, "Umbriel", [150, 150, 150]),
            ("701", 1.353e21, "Ariel", [230, 230, 230]),
        ],
    },
    BuiltinSystem::Remote {
        key: "Neptunian System",
        center: "500@899",
        bodies: &[NEPTUNE, ("801", 2.14e22, "Triton", [210, 255, 210])],
    },
    BuiltinSystem::Remote {
        key: "Extended Solar System",
        center: "500@0",
        bodies: &[
            SUN,
            MERCURY,
            VENUS,
            EARTH,
            MARS,
            ("1;", 9.393e20, "Ceres", [200, 200, 200]),
            ("4;", 2.59e20, "Vesta", [180, 180, 180]),
            JUPITER,
            SATURN,
            URANUS,
            NEPTUNE,
            PLUTO,
            ("920136199", 1.66e22, "Eris", [230, 230, 230]),
            ("920136108", 4.01e21, "Haumea", [240, 240, 240]),
            ("136472;", 3.1e21, "Makemake", [255, 180, 150]),
        ],
    },
    BuiltinSystem::Remote {
        key: "Pluto System",
        center: "500@999",
        bodies: &[PLUTO, ("901", 1.586e21, "Charon", [150, 150, 150])],
    },
    BuiltinSystem::Remote {
        key: "Mars System",
        center: "500@499",
        bodies: &[
            MARS,
            ("401", 1.066e16, "Phobos", [140, 130, 120]),
            ("402", 1.476e15, "Deimos", [160, 150, 140]),
        ],
    },
    BuiltinSystem::Static {
        key: "TRAPPIST-1",
        g_real: Some(6.67430e-20),
        bodies: &[
            (1.78e29, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0], "TRAPPIST-1", [255, 100, 50]),
            (8.18e24, [1.65e6, 0.0, 0.0], [0.0, 85.0, 0.0], "b", [200, 150, 100]),
            (7.82e24, [2.25e6, 0.0, 0.0], [0.0, 72.0, 0.0], "c", [210, 180, 150]),
            (2.33e24, [3.30e6, 0.0, 0.0], [0.0, 60.0, 0.0], "d", [180, 180, 180]),
            (4.12e24, [4.34e6, 0.0, 0.0], [0.0, 52.0, 0.0], "e", [100, 150, 255]),
            (6.21e24, [5.68e6, 0.0, 0.0], [0.0, 45.0, 0.0], "f", [150, 150, 200]),
            (7.88e24, [7.03e6, 0.0, 0.0], [0.0, 41.0, 0.0], "g", [120, 120, 180]),
            (1.97e24, [9.27e6, 0.0, 0.0], [0.0, 36.0, 0.0], "h", [160, 160, 160]),
        ],
    },
];
