//! Stream-mode demo: a fountain driven by wall-clock time.
//!
//! Run with: `cargo run --example fountain`

use ember::prelude::*;
use glam::Vec2;

fn main() {
    let preset = EmitterPreset::fountain().with_max_particles(2000);
    let mut emitter = Emitter::new(preset);
    emitter.set_emitting(true);

    let mut time = Time::new();
    let origin = Vec2::new(400.0, 550.0);
    let mut next_report = 0.25f32;

    loop {
        let (elapsed, delta) = time.update();
        emitter.update(delta, origin);

        if elapsed >= next_report {
            next_report += 0.25;
            let stats = emitter.stats();
            println!(
                "t={elapsed:5.2}s  alive={:4}/{}  spawned={}  dropped={}",
                emitter.pool().alive_count(),
                emitter.pool().capacity(),
                stats.spawned,
                stats.dropped,
            );
        }

        if elapsed > 5.0 {
            break;
        }
    }

    // A renderer would consume the alive view here; print a few records
    for p in emitter.pool().alive().iter().take(3) {
        println!(
            "particle at ({:7.1}, {:7.1}) scale {:.2} alpha {:.2}",
            p.position.x, p.position.y, p.scale, p.color.w
        );
    }
}
