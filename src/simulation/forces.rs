//! Force / acceleration contributors for the n-body engine
//!
//! Accelerations are evaluated from bare position and mass slices rather
//! than a whole `SystemState`, so the integrator can evaluate trial positions
//! (RK4 stages) without cloning bodies or trails.

use crate::simulation::states::{NVec3, SystemState};

/// Default softening added to `|r|^3` in the gravity denominator
pub const DEFAULT_SOFTENING: f64 = 1e-10;

/// Collection of acceleration terms
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl Acceleration + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute total accelerations for bodies at positions `x` with masses `m`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, x: &[NVec3], m: &[f64], out: &mut [NVec3]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        for term in &self.terms {
            term.acceleration(x, m, out);
        }
    }

    /// Allocating variant of [`AccelSet::accumulate_accels`]
    pub fn accels(&self, x: &[NVec3], m: &[f64]) -> Vec<NVec3> {
        let mut out = vec![NVec3::zeros(); x.len()];
        self.accumulate_accels(x, m, &mut out);
        out
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Acceleration sources. Implementations add their contribution into
/// `out[i]` for each body and must not read anything but their inputs.
pub trait Acceleration {
    fn acceleration(&self, x: &[NVec3], m: &[f64], out: &mut [NVec3]);
}

/// Newtonian point-mass gravity, direct O(N^2) sum
///
/// Denominator is `|r|^3 + softening` so coincident bodies give a zero
/// (finite) pull instead of NaN.
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub softening: f64,
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, x: &[NVec3], m: &[f64], out: &mut [NVec3]) {
        let n = x.len().min(m.len());
        if n < 2 { // nothing to attract
            return;
        }

        // Each unordered pair (i, j) with i < j is visited once, so a body
        // never meets itself and the pair forces are exactly antisymmetric
        for i in 0..n {
            let xi = x[i];
            let mi = m[i];

            for j in (i + 1)..n {
                // r points from i to j: i is pulled along +r, j along -r
                let r = x[j] - xi;
                let dist = r.norm();

                // coef = G / (|r|^3 + eps)
                let coef = self.G / (dist * dist * dist + self.softening);

                out[i] += coef * m[j] * r;
                out[j] -= coef * mi * r;
            }
        }
    }
}

/// Gravitational acceleration on every body: the sum over `j != i` of
/// `G m_j (x_j - x_i) / (|x_j - x_i|^3 + softening)`.
///
/// Pure function of its inputs.
#[allow(non_snake_case)]
pub fn gravity_field(x: &[NVec3], m: &[f64], G: f64, softening: f64) -> Vec<NVec3> {
    let mut out = vec![NVec3::zeros(); x.len()];
    NewtonianGravity { G, softening }.acceleration(x, m, &mut out);
    out
}

/// Gravity-only force set for a state, using that state's own `G`
pub fn gravity_for(system: &SystemState, softening: f64) -> AccelSet {
    AccelSet::new().with(NewtonianGravity {
        G: system.G,
        softening,
    })
}
