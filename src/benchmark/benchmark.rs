use std::time::Instant;

use crate::simulation::forces::{gravity_for, DEFAULT_SOFTENING};
use crate::simulation::integrator::rk4_integrator;
use crate::simulation::states::{Body, NVec3, SystemState};

/// Helper to build a manual system of size `n` on a loose ring
fn make_system(n: usize) -> SystemState {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec3::new(
            (i_f * 0.37).sin() * 500.0,
            (i_f * 0.13).cos() * 50.0,
            (i_f * 0.07).sin() * 500.0,
        );
        let v = NVec3::new(-x.z, 0.0, x.x) * 1e-3;

        bodies.push(Body::new(format!("b{}", i), [255, 255, 255], 1000.0, x, v, 1));
    }

    SystemState::new("bench", bodies, 1.0)
}

/// Time RK4 steps for catalog-sized systems
/// Prints `N,us_per_step`
pub fn bench_steps() {
    let steps = 20_000;

    println!("N,us_per_step");

    for n in 2..=16 {
        let mut sys = make_system(n);
        let forces = gravity_for(&sys, DEFAULT_SOFTENING);

        // Warm up
        for _ in 0..100 {
            rk4_integrator(&mut sys, &forces, 0.01);
        }

        let t0 = Instant::now();
        for _ in 0..steps {
            rk4_integrator(&mut sys, &forces, 0.01);
        }
        let us = t0.elapsed().as_secs_f64() * 1e6 / steps as f64;

        println!("{},{:.3}", n, us);
    }
}
