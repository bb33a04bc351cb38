//! Fixed-step time integrators for the N-body system
//!
//! - `rk4_kinematics`: classical 4-stage Runge-Kutta on `dx/dt = v`,
//!   `dv/dt = a(x)`, a pure function of positions, velocities and masses
//! - `rk4_integrator`: applies one RK4 step to a `SystemState` in place
//! - `step`: pure stepping with gravity built from the state's own `G`
//!
//! None of them touch trails or display metadata; recording trails is the
//! caller's job.

use super::forces::{gravity_for, AccelSet};
use super::states::{NVec3, SystemState};

/// One RK4 step. Returns `(x1, v1)` in the same body order as the inputs.
///
/// Stage k evaluates the field at the trial positions `x0 + v_k * h`
/// while `v_k` itself is advanced from the previous stage's acceleration.
pub fn rk4_kinematics(
    x0: &[NVec3],
    v0: &[NVec3],
    m: &[f64],
    forces: &AccelSet,
    dt: f64,
) -> (Vec<NVec3>, Vec<NVec3>) {
    let n = x0.len();
    let half_dt = 0.5 * dt;

    // x0 + v * h, body by body
    let offset = |v: &[NVec3], h: f64| -> Vec<NVec3> {
        x0.iter().zip(v).map(|(x, v)| x + v * h).collect()
    };
    // v0 + a * h, body by body
    let kick = |a: &[NVec3], h: f64| -> Vec<NVec3> {
        v0.iter().zip(a).map(|(v, a)| v + a * h).collect()
    };

    // Stage 1
    let a1 = forces.accels(x0, m);
    let v1 = v0.to_vec();

    // Stage 2: half step using stage-1 slopes
    let a2 = forces.accels(&offset(&v1, half_dt), m);
    let v2 = kick(&a1, half_dt);

    // Stage 3: half step using stage-2 slopes
    let a3 = forces.accels(&offset(&v2, half_dt), m);
    let v3 = kick(&a2, half_dt);

    // Stage 4: full step using stage-3 slopes
    let a4 = forces.accels(&offset(&v3, dt), m);
    let v4 = kick(&a3, dt);

    // Weighted average (1, 2, 2, 1) / 6
    let sixth = dt / 6.0;
    let mut x1 = Vec::with_capacity(n);
    let mut v_new = Vec::with_capacity(n);
    for i in 0..n {
        x1.push(x0[i] + sixth * (v1[i] + 2.0 * v2[i] + 2.0 * v3[i] + v4[i]));
        v_new.push(v0[i] + sixth * (a1[i] + 2.0 * a2[i] + 2.0 * a3[i] + a4[i]));
    }

    (x1, v_new)
}

/// Advance `sys` by one RK4 step of size `dt` and bump `sys.t`
pub fn rk4_integrator(sys: &mut SystemState, forces: &AccelSet, dt: f64) {
    if sys.bodies.is_empty() { // no bodies, return
        return;
    }

    let (x1, v1) = rk4_kinematics(&sys.positions(), &sys.velocities(), &sys.masses(), forces, dt);

    for ((b, x), v) in sys.bodies.iter_mut().zip(x1).zip(v1) {
        b.x = x;
        b.v = v;
    }
    sys.t += dt;
}

/// Pure stepping entry point: returns the advanced state, leaving the
/// input untouched. Gravity always comes from `sys.G`, never from a force
/// set built for another state. Trails are carried over as-is.
pub fn step(sys: &SystemState, dt: f64, softening: f64) -> SystemState {
    let forces = gravity_for(sys, softening);
    let mut next = sys.clone();
    rk4_integrator(&mut next, &forces, dt);
    next
}
