//! Emitter presets: the immutable configuration an emitter runs from.
//!
//! A preset describes one emitter's full behavior and is authored outside the
//! core, typically in a declarative preset file edited live by an artist. The
//! core only reads it; with the `serde` feature enabled the types derive
//! `Serialize`/`Deserialize` so a collaborator can load them directly.
//!
//! Presets are tuned by non-programmers, so out-of-range values never fail:
//! a non-positive rate emits nothing, an inverted min/max range samples as
//! "always min", and a color array with fewer than four channels falls back
//! to opaque white.
//!
//! # Named Presets
//!
//! Common effects available as one-liners:
//!
//! ```
//! use ember::EmitterPreset;
//!
//! let fire = EmitterPreset::fire();
//! let fountain = EmitterPreset::fountain();
//! let explosion = EmitterPreset::explosion();
//! ```

use glam::{Vec2, Vec4};

/// Policy for how spawn timing is computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EmissionMode {
    /// Continuous emission at `emission_rate` particles per second.
    #[default]
    Stream,
    /// One shot of `emission_rate` particles, fired on the first emitting
    /// tick and re-armed by [`Emitter::reset`](crate::Emitter::reset).
    Burst,
}

/// Geometric region used to randomize the spawn offset.
///
/// Offsets are relative to the emitter's world position; `shape_width` and
/// `shape_height` parameterize the region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EmissionShape {
    /// All particles spawn exactly at the emitter position.
    #[default]
    Point,
    /// Uniform over a filled disk of diameter `shape_width`.
    Circle,
    /// Uniform over a filled `shape_width` x `shape_height` rectangle.
    Rectangle,
    /// Uniform over the *perimeter* of that rectangle.
    Edge,
}

/// Immutable emission configuration.
///
/// Owned by whoever constructs the [`Emitter`](crate::Emitter) and shared
/// into it behind an `Arc`; the core never mutates it.
///
/// # Example
///
/// ```
/// use ember::{EmissionShape, EmitterPreset};
///
/// let preset = EmitterPreset::new()
///     .with_max_particles(2000)
///     .with_emission_rate(150.0)
///     .with_shape(EmissionShape::Circle, 40.0, 0.0)
///     .with_speed(20.0, 60.0)
///     .with_lifetime(1.0, 2.5);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmitterPreset {
    /// Pool capacity for emitters built from this preset.
    pub max_particles: usize,
    /// Stream or Burst.
    pub emission_mode: EmissionMode,
    /// Particles per second (Stream) or particle count (Burst).
    pub emission_rate: f32,
    /// Spawn-offset region.
    pub emission_shape: EmissionShape,
    /// Shape width in pixels (diameter for `Circle`).
    pub shape_width: f32,
    /// Shape height in pixels (unused by `Point` and `Circle`).
    pub shape_height: f32,
    /// Minimum initial speed in pixels/sec.
    pub speed_min: f32,
    /// Maximum initial speed in pixels/sec.
    pub speed_max: f32,
    /// Minimum launch angle in degrees.
    pub angle_min: f32,
    /// Maximum launch angle in degrees.
    pub angle_max: f32,
    /// Minimum particle lifetime in seconds.
    pub lifetime_min: f32,
    /// Maximum particle lifetime in seconds.
    pub lifetime_max: f32,
    /// Constant acceleration applied to every particle, pixels/sec^2.
    pub gravity: Vec2,
    /// Scale at spawn.
    pub scale_start: f32,
    /// Scale at death.
    pub scale_end: f32,
    /// RGBA at spawn, as authored (shorter arrays resolve to opaque white).
    pub start_color: Vec<f32>,
    /// RGBA at death, as authored (shorter arrays resolve to opaque white).
    pub end_color: Vec<f32>,
}

impl Default for EmitterPreset {
    fn default() -> Self {
        Self {
            max_particles: 1000,
            emission_mode: EmissionMode::Stream,
            emission_rate: 50.0,
            emission_shape: EmissionShape::Point,
            shape_width: 0.0,
            shape_height: 0.0,
            speed_min: 20.0,
            speed_max: 60.0,
            angle_min: 0.0,
            angle_max: 360.0,
            lifetime_min: 1.0,
            lifetime_max: 2.0,
            gravity: Vec2::ZERO,
            scale_start: 1.0,
            scale_end: 1.0,
            start_color: vec![1.0, 1.0, 1.0, 1.0],
            end_color: vec![1.0, 1.0, 1.0, 0.0],
        }
    }
}

impl EmitterPreset {
    /// Create a preset with default values.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // NAMED PRESETS
    // =========================================================================

    /// Fire: warm particles rising against gravity, shrinking as they cool.
    pub fn fire() -> Self {
        Self {
            emission_rate: 120.0,
            emission_shape: EmissionShape::Circle,
            shape_width: 16.0,
            speed_min: 30.0,
            speed_max: 70.0,
            angle_min: 250.0,
            angle_max: 290.0,
            lifetime_min: 0.8,
            lifetime_max: 1.6,
            scale_start: 1.0,
            scale_end: 0.2,
            start_color: vec![1.0, 0.9, 0.3, 1.0],
            end_color: vec![0.8, 0.2, 0.0, 0.0],
            ..Self::default()
        }
    }

    /// Fountain: particles arc up and fall under gravity.
    pub fn fountain() -> Self {
        Self {
            emission_rate: 200.0,
            speed_min: 150.0,
            speed_max: 220.0,
            angle_min: 260.0,
            angle_max: 280.0,
            lifetime_min: 2.0,
            lifetime_max: 3.0,
            gravity: Vec2::new(0.0, 300.0),
            start_color: vec![0.7, 0.85, 1.0, 1.0],
            end_color: vec![0.2, 0.4, 0.8, 0.0],
            ..Self::default()
        }
    }

    /// Explosion: one radial burst that fades quickly.
    pub fn explosion() -> Self {
        Self {
            emission_mode: EmissionMode::Burst,
            emission_rate: 400.0,
            speed_min: 80.0,
            speed_max: 300.0,
            lifetime_min: 0.6,
            lifetime_max: 1.2,
            scale_start: 1.0,
            scale_end: 0.0,
            start_color: vec![1.0, 1.0, 0.8, 1.0],
            end_color: vec![1.0, 0.3, 0.0, 0.0],
            ..Self::default()
        }
    }

    /// Snow: slow drifting particles spawned along a wide top edge.
    pub fn snow() -> Self {
        Self {
            emission_rate: 40.0,
            emission_shape: EmissionShape::Edge,
            shape_width: 800.0,
            shape_height: 0.0,
            speed_min: 15.0,
            speed_max: 35.0,
            angle_min: 80.0,
            angle_max: 100.0,
            lifetime_min: 6.0,
            lifetime_max: 10.0,
            scale_start: 0.6,
            scale_end: 0.6,
            end_color: vec![1.0, 1.0, 1.0, 1.0],
            ..Self::default()
        }
    }

    // =========================================================================
    // BUILDER METHODS
    // =========================================================================

    /// Set the pool capacity.
    pub fn with_max_particles(mut self, max: usize) -> Self {
        self.max_particles = max;
        self
    }

    /// Set the emission mode.
    pub fn with_emission_mode(mut self, mode: EmissionMode) -> Self {
        self.emission_mode = mode;
        self
    }

    /// Set the emission rate (particles/sec for Stream, count for Burst).
    pub fn with_emission_rate(mut self, rate: f32) -> Self {
        self.emission_rate = rate;
        self
    }

    /// Set the spawn shape and its dimensions.
    pub fn with_shape(mut self, shape: EmissionShape, width: f32, height: f32) -> Self {
        self.emission_shape = shape;
        self.shape_width = width;
        self.shape_height = height;
        self
    }

    /// Set the initial speed range in pixels/sec.
    pub fn with_speed(mut self, min: f32, max: f32) -> Self {
        self.speed_min = min;
        self.speed_max = max;
        self
    }

    /// Set the launch angle range in degrees.
    pub fn with_angle(mut self, min_deg: f32, max_deg: f32) -> Self {
        self.angle_min = min_deg;
        self.angle_max = max_deg;
        self
    }

    /// Set the particle lifetime range in seconds.
    pub fn with_lifetime(mut self, min: f32, max: f32) -> Self {
        self.lifetime_min = min;
        self.lifetime_max = max;
        self
    }

    /// Set the gravity applied to every particle.
    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the scale endpoints.
    pub fn with_scale(mut self, start: f32, end: f32) -> Self {
        self.scale_start = start;
        self.scale_end = end;
        self
    }

    /// Set the color endpoints from resolved RGBA values.
    pub fn with_colors(mut self, start: Vec4, end: Vec4) -> Self {
        self.start_color = start.to_array().to_vec();
        self.end_color = end.to_array().to_vec();
        self
    }

    /// Resolve the authored start color, substituting opaque white when the
    /// array has fewer than four channels.
    pub fn resolved_start_color(&self) -> Vec4 {
        resolve_color(&self.start_color)
    }

    /// Resolve the authored end color, substituting opaque white when the
    /// array has fewer than four channels.
    pub fn resolved_end_color(&self) -> Vec4 {
        resolve_color(&self.end_color)
    }
}

/// Turn an authored color array into RGBA, falling back to opaque white.
fn resolve_color(channels: &[f32]) -> Vec4 {
    match channels {
        [r, g, b, a, ..] => Vec4::new(*r, *g, *b, *a),
        _ => Vec4::ONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preset_is_sane() {
        let preset = EmitterPreset::default();
        assert_eq!(preset.emission_mode, EmissionMode::Stream);
        assert_eq!(preset.emission_shape, EmissionShape::Point);
        assert!(preset.emission_rate > 0.0);
        assert!(preset.lifetime_min <= preset.lifetime_max);
    }

    #[test]
    fn test_builder_chain() {
        let preset = EmitterPreset::new()
            .with_max_particles(64)
            .with_emission_mode(EmissionMode::Burst)
            .with_emission_rate(32.0)
            .with_shape(EmissionShape::Rectangle, 100.0, 50.0)
            .with_lifetime(0.5, 0.5);

        assert_eq!(preset.max_particles, 64);
        assert_eq!(preset.emission_mode, EmissionMode::Burst);
        assert_eq!(preset.shape_width, 100.0);
        assert_eq!(preset.shape_height, 50.0);
    }

    #[test]
    fn test_short_color_array_resolves_white() {
        let preset = EmitterPreset {
            start_color: vec![1.0, 0.0],
            end_color: vec![],
            ..EmitterPreset::default()
        };

        assert_eq!(preset.resolved_start_color(), Vec4::ONE);
        assert_eq!(preset.resolved_end_color(), Vec4::ONE);
    }

    #[test]
    fn test_full_color_array_resolves_as_authored() {
        let preset = EmitterPreset {
            start_color: vec![0.2, 0.4, 0.6, 0.8],
            ..EmitterPreset::default()
        };

        assert_eq!(preset.resolved_start_color(), Vec4::new(0.2, 0.4, 0.6, 0.8));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_preset_round_trips_through_json() {
        let preset = EmitterPreset::fire().with_max_particles(512);
        let json = serde_json::to_string(&preset).unwrap();
        let back: EmitterPreset = serde_json::from_str(&json).unwrap();

        assert_eq!(back.max_particles, 512);
        assert_eq!(back.emission_shape, EmissionShape::Circle);
        assert_eq!(back.start_color, preset.start_color);
    }
}
