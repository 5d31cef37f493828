//! The particle record: one live particle's simulation and render state.
//!
//! A [`Particle`] is a flat, fixed-size value with no owned resources. The
//! pool stores them contiguously so a full pool iterates as one cache-friendly
//! sweep, and the renderer can consume the alive view without any conversion.
//!
//! # Fields
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `position`, `velocity` | World space, pixels and pixels/sec |
//! | `rotation` | Radians, carried for renderers (integration ignores it) |
//! | `scale`, `color` | *Current* interpolated values, updated every tick |
//! | `lifetime`, `elapsed` | Total seconds to live, seconds since spawn |
//! | `scale_start/end`, `color_start/end` | Interpolation endpoints |
//!
//! The record is `Pod`, so a renderer that wants the raw bytes can do
//! `bytemuck::cast_slice(pool.alive())` and upload the view verbatim.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec4};

/// One live particle.
///
/// Created through [`Particle::new`] plus the `with_*` builder methods, which
/// guarantee a freshly spawned record: `elapsed` is zero, and the current
/// `scale`/`color` match their start endpoints.
///
/// # Example
///
/// ```
/// use ember::Particle;
/// use glam::{Vec2, Vec4};
///
/// let p = Particle::new(Vec2::ZERO, Vec2::new(0.0, -120.0), 2.0)
///     .with_colors(Vec4::ONE, Vec4::new(1.0, 0.4, 0.0, 0.0))
///     .with_scale(1.0, 0.2);
///
/// assert!(p.is_alive());
/// assert_eq!(p.normalized_age(), 0.0);
/// ```
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Particle {
    /// Current color (RGBA, interpolated from the endpoints each tick).
    pub color: Vec4,
    /// Color at spawn.
    pub color_start: Vec4,
    /// Color at death.
    pub color_end: Vec4,
    /// World-space position in pixels.
    pub position: Vec2,
    /// Velocity in pixels per second.
    pub velocity: Vec2,
    /// Rotation in radians. Not touched by integration.
    pub rotation: f32,
    /// Current scale (interpolated from the endpoints each tick).
    pub scale: f32,
    /// Total seconds this particle may live.
    pub lifetime: f32,
    /// Seconds since spawn.
    pub elapsed: f32,
    /// Scale at spawn.
    pub scale_start: f32,
    /// Scale at death.
    pub scale_end: f32,
    // Keeps the record free of implicit padding so Pod can be derived.
    _pad: [f32; 2],
}

impl Particle {
    /// Create a freshly spawned particle.
    ///
    /// Defaults to opaque white, unit scale, and zero rotation; use the
    /// `with_*` methods to override.
    pub fn new(position: Vec2, velocity: Vec2, lifetime: f32) -> Self {
        Self {
            color: Vec4::ONE,
            color_start: Vec4::ONE,
            color_end: Vec4::ONE,
            position,
            velocity,
            rotation: 0.0,
            scale: 1.0,
            lifetime,
            elapsed: 0.0,
            scale_start: 1.0,
            scale_end: 1.0,
            _pad: [0.0; 2],
        }
    }

    /// Set the color endpoints. The current color starts at `start`.
    pub fn with_colors(mut self, start: Vec4, end: Vec4) -> Self {
        self.color = start;
        self.color_start = start;
        self.color_end = end;
        self
    }

    /// Set the scale endpoints. The current scale starts at `start`.
    pub fn with_scale(mut self, start: f32, end: f32) -> Self {
        self.scale = start;
        self.scale_start = start;
        self.scale_end = end;
        self
    }

    /// Set the render rotation in radians.
    pub fn with_rotation(mut self, radians: f32) -> Self {
        self.rotation = radians;
        self
    }

    /// Whether this particle is still alive (`elapsed < lifetime`).
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.elapsed < self.lifetime
    }

    /// Lifetime progress mapped to `[0, 1]`.
    ///
    /// Drives all time-based interpolation. A non-positive lifetime counts
    /// as fully aged.
    #[inline]
    pub fn normalized_age(&self) -> f32 {
        if self.lifetime > 0.0 {
            (self.elapsed / self.lifetime).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

impl Default for Particle {
    fn default() -> Self {
        Self::new(Vec2::ZERO, Vec2::ZERO, 0.0)
    }
}
