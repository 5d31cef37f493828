//! Burst-mode demo: an explosion ticked with fixed deltas.
//!
//! Run with: `cargo run --example burst`

use ember::prelude::*;
use glam::Vec2;

fn main() {
    let preset = EmitterPreset::explosion().with_max_particles(1000);
    let mut emitter = Emitter::with_seed(preset, 2024);
    emitter.set_emitting(true);

    let center = Vec2::new(320.0, 240.0);
    let delta = 1.0 / 60.0;

    // The armed burst fires on the first emitting tick
    for frame in 0..90 {
        emitter.update(delta, center);
        if frame % 15 == 0 {
            println!(
                "frame {frame:3}  alive={:4}  spawned={}",
                emitter.pool().alive_count(),
                emitter.stats().spawned
            );
        }
    }

    // Scripted one-shot: fire again somewhere else without re-arming
    emitter.trigger_burst(Vec2::new(100.0, 100.0));
    println!(
        "after trigger_burst: alive={} spawned={}",
        emitter.pool().alive_count(),
        emitter.stats().spawned
    );

    // reset() re-arms the update-driven burst
    emitter.reset();
    emitter.update(delta, center);
    println!(
        "after reset + update: alive={} spawned={}",
        emitter.pool().alive_count(),
        emitter.stats().spawned
    );
}
