//! # Ember - CPU Particle Simulation Core
//!
//! Fixed-capacity particle pools and rate-controlled emitters for 2D effects.
//!
//! Ember is the simulation half of a particle system: it decides when
//! particles spawn, where, with what kinematics, and ages them until they
//! die. Rendering, authoring UI, and preset-file loading are collaborators
//! that sit on top of it.
//!
//! ## Quick Start
//!
//! ```
//! use ember::prelude::*;
//! use glam::Vec2;
//!
//! let mut emitter = Emitter::new(EmitterPreset::fire().with_max_particles(2000));
//! emitter.set_emitting(true);
//!
//! // Simulation loop: one update per tick
//! for _ in 0..120 {
//!     emitter.update(1.0 / 60.0, Vec2::new(400.0, 500.0));
//! }
//!
//! // Renderer draws the contiguous alive view, one sprite per record
//! for p in emitter.pool().alive() {
//!     let _ = (p.position, p.rotation, p.scale, p.color);
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Pools
//!
//! A [`ParticlePool`] stores up to `capacity` live [`Particle`] records in
//! one contiguous buffer, allocated once. Expired particles are compacted
//! out in place by swapping the last live record into the vacated slot, so
//! the live range `[0, alive_count)` stays packed with no per-death shifting
//! and no reallocation.
//!
//! ### Emitters
//!
//! An [`Emitter`] owns one pool plus a shared, immutable [`EmitterPreset`].
//! Stream mode converts `emission_rate` particles/sec into spawns through a
//! fractional accumulator, so spawn counts are independent of frame rate.
//! Burst mode fires `floor(emission_rate)` particles once per arming.
//!
//! ### Spawn Shapes
//!
//! | Shape | Offset distribution |
//! |-------|---------------------|
//! | [`EmissionShape::Point`] | Always the emitter position |
//! | [`EmissionShape::Circle`] | Uniform over a filled disk |
//! | [`EmissionShape::Rectangle`] | Uniform over a filled rectangle |
//! | [`EmissionShape::Edge`] | Uniform over the rectangle perimeter |
//!
//! ### Graceful Degradation
//!
//! Presets are live-edited by artists, so the core never fails a tick: a
//! full pool drops the newest spawn (counted in [`EmitterStats`]), a color
//! array with fewer than four channels renders opaque white, and a
//! non-positive emission rate simply emits nothing.
//!
//! ## Threading
//!
//! Everything is single-threaded and synchronous. Each emitter owns its pool
//! outright and shares no state with other emitters, so a caller may advance
//! independent emitters on separate threads.
//!
//! ## Features
//!
//! - `serde` - `Serialize`/`Deserialize` on the preset types for loading
//!   declarative preset files.

mod emitter;
mod particle;
mod pool;
mod preset;
pub mod time;

pub use emitter::{Emitter, EmitterStats};
pub use glam::{Vec2, Vec4};
pub use particle::Particle;
pub use pool::ParticlePool;
pub use preset::{EmissionMode, EmissionShape, EmitterPreset};

/// Convenient re-exports for common usage.
///
/// ```
/// use ember::prelude::*;
/// ```
pub mod prelude {
    pub use crate::emitter::{Emitter, EmitterStats};
    pub use crate::particle::Particle;
    pub use crate::pool::ParticlePool;
    pub use crate::preset::{EmissionMode, EmissionShape, EmitterPreset};
    pub use crate::time::Time;
    pub use crate::{Vec2, Vec4};
}
