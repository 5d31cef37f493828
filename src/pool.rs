//! Fixed-capacity particle storage with in-place compaction.
//!
//! A [`ParticlePool`] owns a contiguous buffer of [`Particle`] records sized
//! once at construction, plus a live-count cursor. All live particles sit
//! packed at indices `[0, alive_count)` at every point in time, so iteration
//! for simulation and rendering is a single linear sweep with no holes.
//!
//! Death handling is swap-to-end: when a particle expires mid-scan, the last
//! live record overwrites its slot and the cursor stays put, giving O(1)
//! removal without shifting the tail or reallocating. Slots past the cursor
//! hold stale data and are never exposed.
//!
//! The pool knows nothing about emission policy; that lives in
//! [`Emitter`](crate::Emitter).

use crate::particle::Particle;
use glam::Vec2;

/// Fixed-capacity contiguous storage for live particles.
///
/// # Example
///
/// ```
/// use ember::{Particle, ParticlePool};
/// use glam::Vec2;
///
/// let mut pool = ParticlePool::new(64);
/// pool.emit(Particle::new(Vec2::ZERO, Vec2::new(10.0, 0.0), 1.0));
///
/// pool.advance(0.5, Vec2::ZERO);
/// assert_eq!(pool.alive_count(), 1);
///
/// pool.advance(0.6, Vec2::ZERO);
/// assert_eq!(pool.alive_count(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct ParticlePool {
    /// Fixed-length storage; only `[0, alive)` is meaningful.
    slots: Vec<Particle>,
    /// Number of live particles.
    alive: usize,
}

impl ParticlePool {
    /// Create a pool that can hold up to `capacity` particles.
    ///
    /// The storage is allocated once here and never grows.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![Particle::default(); capacity],
            alive: 0,
        }
    }

    /// Add a particle to the pool.
    ///
    /// Returns `false` without mutating anything when the pool is full. This
    /// is the only way new particles enter the pool.
    pub fn emit(&mut self, particle: Particle) -> bool {
        if self.alive == self.slots.len() {
            return false;
        }
        self.slots[self.alive] = particle;
        self.alive += 1;
        true
    }

    /// Advance every live particle by `delta` seconds.
    ///
    /// Ages, integrates, and re-interpolates each particle; expired particles
    /// are compacted out by overwriting their slot with the last live record.
    /// The just-moved record is re-examined at the same index, so a single
    /// left-to-right scan handles any number of deaths per tick.
    pub fn advance(&mut self, delta: f32, gravity: Vec2) {
        let mut i = 0;
        while i < self.alive {
            self.slots[i].elapsed += delta;

            if !self.slots[i].is_alive() {
                self.alive -= 1;
                self.slots[i] = self.slots[self.alive];
                // Do not advance the cursor: the moved record still needs
                // its turn this tick.
                continue;
            }

            let p = &mut self.slots[i];
            p.velocity += gravity * delta;
            p.position += p.velocity * delta;

            let t = p.normalized_age();
            p.scale = p.scale_start + (p.scale_end - p.scale_start) * t;
            p.color = p.color_start.lerp(p.color_end, t);

            i += 1;
        }
    }

    /// Read-only view of all live particles.
    ///
    /// Zero-copy: this borrows the pool's storage in place, so it is valid
    /// only until the next [`emit`](Self::emit), [`advance`](Self::advance),
    /// or [`clear`](Self::clear) call (compaction moves records around).
    #[inline]
    pub fn alive(&self) -> &[Particle] {
        &self.slots[..self.alive]
    }

    /// Kill all particles. Storage is left as-is; dead slots are never read.
    pub fn clear(&mut self) {
        self.alive = 0;
    }

    /// Maximum number of particles this pool can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of live particles.
    #[inline]
    pub fn alive_count(&self) -> usize {
        self.alive
    }

    /// Whether the pool can accept another particle.
    #[inline]
    pub fn has_room(&self) -> bool {
        self.alive < self.slots.len()
    }

    /// Whether no particles are live.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.alive == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    fn particle(lifetime: f32) -> Particle {
        Particle::new(Vec2::ZERO, Vec2::ZERO, lifetime)
    }

    #[test]
    fn test_capacity_bound() {
        let mut pool = ParticlePool::new(4);
        for _ in 0..4 {
            assert!(pool.emit(particle(1.0)));
        }

        // One past capacity fails and leaves the pool untouched
        assert!(!pool.emit(particle(1.0)));
        assert_eq!(pool.alive_count(), 4);
        assert!(!pool.has_room());
    }

    #[test]
    fn test_deterministic_aging() {
        let mut pool = ParticlePool::new(8);
        pool.emit(particle(1.0));

        pool.advance(0.5, Vec2::ZERO);
        assert_eq!(pool.alive_count(), 1);
        assert_eq!(pool.alive()[0].elapsed, 0.5);

        pool.advance(0.6, Vec2::ZERO);
        assert_eq!(pool.alive_count(), 0);
    }

    #[test]
    fn test_compaction_keeps_live_particles_packed() {
        let mut pool = ParticlePool::new(8);
        // Alternating short and long lifetimes
        for i in 0..8 {
            let lifetime = if i % 2 == 0 { 0.1 } else { 10.0 };
            pool.emit(particle(lifetime));
        }

        pool.advance(0.5, Vec2::ZERO);

        assert_eq!(pool.alive_count(), 4);
        for p in pool.alive() {
            assert!(p.is_alive());
            assert_eq!(p.lifetime, 10.0);
        }
    }

    #[test]
    fn test_all_particles_can_die_in_one_tick() {
        let mut pool = ParticlePool::new(16);
        for _ in 0..16 {
            pool.emit(particle(0.25));
        }

        pool.advance(1.0, Vec2::ZERO);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_integration_applies_gravity() {
        let mut pool = ParticlePool::new(1);
        pool.emit(Particle::new(Vec2::ZERO, Vec2::new(10.0, 0.0), 10.0));

        pool.advance(1.0, Vec2::new(0.0, 5.0));

        let p = &pool.alive()[0];
        assert_eq!(p.velocity, Vec2::new(10.0, 5.0));
        // Position integrates the post-gravity velocity
        assert_eq!(p.position, Vec2::new(10.0, 5.0));
    }

    #[test]
    fn test_interpolation_at_midpoint() {
        let mut pool = ParticlePool::new(1);
        pool.emit(
            Particle::new(Vec2::ZERO, Vec2::ZERO, 10.0)
                .with_scale(0.0, 2.0)
                .with_colors(Vec4::new(1.0, 1.0, 1.0, 1.0), Vec4::new(1.0, 1.0, 1.0, 0.0)),
        );

        pool.advance(5.0, Vec2::ZERO);

        let p = &pool.alive()[0];
        assert_eq!(p.scale, 1.0);
        assert_eq!(p.color.w, 0.5);
    }

    #[test]
    fn test_clear_empties_without_touching_capacity() {
        let mut pool = ParticlePool::new(8);
        for _ in 0..5 {
            pool.emit(particle(1.0));
        }

        pool.clear();
        assert!(pool.is_empty());
        assert_eq!(pool.capacity(), 8);
        assert!(pool.has_room());
    }

    #[test]
    fn test_alive_invariant_over_mixed_sequence() {
        let mut pool = ParticlePool::new(32);
        let mut lifetime = 0.3;
        for step in 0..20 {
            for _ in 0..3 {
                pool.emit(particle(lifetime));
                lifetime += 0.17;
            }
            pool.advance(0.1 * (step % 4) as f32, Vec2::new(0.0, 9.8));

            assert!(pool.alive_count() <= pool.capacity());
            for p in pool.alive() {
                assert!(p.is_alive());
            }
        }
    }
}
