//! The per-emitter runtime: spawn-rate control and shape sampling.
//!
//! An [`Emitter`] owns one [`ParticlePool`] plus a shared [`EmitterPreset`]
//! and converts wall-clock delta time and an emitter world position into
//! pool mutations. It is the only component holding randomness: each emitter
//! carries its own seedable generator, so independently constructed emitters
//! never interfere and tests can reproduce exact spawn sequences.
//!
//! # Emission Modes
//!
//! | Mode | Behavior |
//! |------|----------|
//! | `Stream` | `rate` particles/sec via a fractional accumulator, frame-rate independent |
//! | `Burst` | `floor(rate)` particles on the first emitting tick, re-armed by `reset()` |
//!
//! Presets are edited live by artists, so nothing here fails: a full pool
//! drops the spawn, a non-positive rate emits nothing, and malformed preset
//! values degrade to the nearest sensible behavior.
//!
//! # Example
//!
//! ```
//! use ember::{Emitter, EmitterPreset};
//! use glam::Vec2;
//!
//! let mut emitter = Emitter::new(EmitterPreset::fountain());
//! emitter.set_emitting(true);
//!
//! // Once per simulation step:
//! emitter.update(1.0 / 60.0, Vec2::new(400.0, 300.0));
//!
//! // Renderer reads the alive view, valid until the next update:
//! for particle in emitter.pool().alive() {
//!     let _ = (particle.position, particle.scale, particle.color);
//! }
//! ```

use crate::pool::ParticlePool;
use crate::preset::{EmissionMode, EmissionShape, EmitterPreset};
use crate::Particle;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;
use std::sync::Arc;

/// Spawn counters for UI and debug display.
///
/// `dropped` counts spawns discarded because the pool was full; the
/// back-pressure policy is drop-newest, never blocking or growing the pool.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmitterStats {
    /// Particles successfully spawned since construction or reset.
    pub spawned: u64,
    /// Spawns dropped on a full pool since construction or reset.
    pub dropped: u64,
}

/// Drives one particle pool from an immutable preset.
///
/// Created once per active emitter instance; [`reset`](Self::reset) clears
/// the pool and emission bookkeeping for reuse on respawn or restart.
pub struct Emitter {
    preset: Arc<EmitterPreset>,
    pool: ParticlePool,
    /// Fractional particles carried across ticks in Stream mode.
    accumulator: f32,
    /// Whether the one-shot burst has fired since the last reset.
    has_burst: bool,
    emitting: bool,
    rng: SmallRng,
    stats: EmitterStats,
}

impl Emitter {
    /// Create an emitter with an entropy-seeded generator.
    ///
    /// The pool is sized from `preset.max_particles`. Accepts either an
    /// `EmitterPreset` or an existing `Arc` when several emitters share one
    /// preset.
    pub fn new(preset: impl Into<Arc<EmitterPreset>>) -> Self {
        Self::from_parts(preset.into(), SmallRng::from_entropy())
    }

    /// Create an emitter with a fixed seed for reproducible spawn sequences.
    ///
    /// Two emitters built from the same preset and seed, ticked identically,
    /// produce identical pools.
    pub fn with_seed(preset: impl Into<Arc<EmitterPreset>>, seed: u64) -> Self {
        Self::from_parts(preset.into(), SmallRng::seed_from_u64(seed))
    }

    fn from_parts(preset: Arc<EmitterPreset>, rng: SmallRng) -> Self {
        let pool = ParticlePool::new(preset.max_particles);
        Self {
            preset,
            pool,
            accumulator: 0.0,
            has_burst: false,
            emitting: false,
            rng,
            stats: EmitterStats::default(),
        }
    }

    /// Advance the emitter by `delta` seconds.
    ///
    /// Runs the spawn phase for the current emission mode, then advances all
    /// live particles in the pool. Call exactly once per simulation step;
    /// `position` is the emitter's world position for this tick.
    pub fn update(&mut self, delta: f32, position: Vec2) {
        if self.emitting {
            match self.preset.emission_mode {
                EmissionMode::Stream => self.update_stream(delta, position),
                EmissionMode::Burst => {
                    if !self.has_burst {
                        self.emit_burst(position);
                        self.has_burst = true;
                    }
                }
            }
        }

        self.pool.advance(delta, self.preset.gravity);
    }

    /// Manually fire `floor(emission_rate)` particles at `position`.
    ///
    /// Works in any mode and ignores the burst arming state, for scripted
    /// one-shot effects driven by the caller.
    pub fn trigger_burst(&mut self, position: Vec2) {
        self.emit_burst(position);
    }

    /// Return to the pool-cleared, accumulator-zeroed, burst-armed state.
    ///
    /// `is_emitting` is deliberately left unchanged; this is the only way to
    /// re-arm a Burst-mode emitter.
    pub fn reset(&mut self) {
        self.pool.clear();
        self.accumulator = 0.0;
        self.has_burst = false;
        self.stats = EmitterStats::default();
    }

    /// Whether the spawn phase runs on update.
    #[inline]
    pub fn is_emitting(&self) -> bool {
        self.emitting
    }

    /// Start or stop spawning. Live particles keep aging either way.
    pub fn set_emitting(&mut self, emitting: bool) {
        self.emitting = emitting;
    }

    /// The pool this emitter drives, for the alive view and counts.
    #[inline]
    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    /// The preset this emitter runs from.
    #[inline]
    pub fn preset(&self) -> &EmitterPreset {
        &self.preset
    }

    /// Spawn counters since construction or the last reset.
    #[inline]
    pub fn stats(&self) -> EmitterStats {
        self.stats
    }

    // =========================================================================
    // SPAWNING
    // =========================================================================

    /// Accumulator-based stream emission.
    ///
    /// At rate R over T seconds this emits `floor(R*T)` particles no matter
    /// how T is chunked into ticks; the fractional remainder persists.
    fn update_stream(&mut self, delta: f32, position: Vec2) {
        if self.preset.emission_rate <= 0.0 {
            return;
        }

        self.accumulator += self.preset.emission_rate * delta;
        while self.accumulator >= 1.0 {
            self.accumulator -= 1.0;
            self.emit_one(position);
        }
    }

    fn emit_burst(&mut self, position: Vec2) {
        let count = self.preset.emission_rate.max(0.0).floor() as u32;
        for _ in 0..count {
            self.emit_one(position);
        }
    }

    /// Spawn a single particle with randomized kinematics.
    ///
    /// On a full pool the spawn is dropped silently, never queued or retried.
    fn emit_one(&mut self, position: Vec2) {
        let preset = Arc::clone(&self.preset);

        let offset = self.sample_shape_offset();
        let speed = self.random_range(preset.speed_min, preset.speed_max);
        let angle = self
            .random_range(preset.angle_min, preset.angle_max)
            .to_radians();
        let velocity = Vec2::new(angle.cos(), angle.sin()) * speed;
        let lifetime = self.random_range(preset.lifetime_min, preset.lifetime_max);

        let particle = Particle::new(position + offset, velocity, lifetime)
            .with_colors(preset.resolved_start_color(), preset.resolved_end_color())
            .with_scale(preset.scale_start, preset.scale_end);

        if self.pool.emit(particle) {
            self.stats.spawned += 1;
        } else {
            self.stats.dropped += 1;
        }
    }

    /// `min + u * (max - min)` with `u` uniform in `[0, 1)`.
    ///
    /// An inverted or collapsed range yields `min`, matching the
    /// degrade-never-fail preset policy.
    fn random_range(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        min + self.rng.gen::<f32>() * (max - min)
    }

    /// Sample a spawn offset from the preset's emission shape.
    fn sample_shape_offset(&mut self) -> Vec2 {
        let w = self.preset.shape_width;
        let h = self.preset.shape_height;

        match self.preset.emission_shape {
            EmissionShape::Point => Vec2::ZERO,

            EmissionShape::Rectangle => Vec2::new(
                self.random_range(-w / 2.0, w / 2.0),
                self.random_range(-h / 2.0, h / 2.0),
            ),

            EmissionShape::Circle => {
                let angle = self.random_range(0.0, TAU);
                // sqrt keeps the density uniform in area rather than
                // clustering toward the center
                let radius = (w / 2.0) * self.rng.gen::<f32>().sqrt();
                Vec2::new(angle.cos(), angle.sin()) * radius
            }

            EmissionShape::Edge => self.sample_edge_offset(w, h),
        }
    }

    /// Place a point exactly on the perimeter of the centered `w` x `h`
    /// rectangle, walking the sides top, right, bottom, left.
    fn sample_edge_offset(&mut self, w: f32, h: f32) -> Vec2 {
        let perimeter = 2.0 * (w + h);
        if perimeter <= 0.0 {
            return Vec2::ZERO;
        }

        let mut t = self.random_range(0.0, perimeter);

        if t < w {
            return Vec2::new(-w / 2.0 + t, -h / 2.0);
        }
        t -= w;
        if t < h {
            return Vec2::new(w / 2.0, -h / 2.0 + t);
        }
        t -= h;
        if t < w {
            return Vec2::new(w / 2.0 - t, h / 2.0);
        }
        t -= w;
        Vec2::new(-w / 2.0, h / 2.0 - t)
    }
}
