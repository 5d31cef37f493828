//! Wall-clock time source for callers driving a simulation loop.
//!
//! The core integrates with whatever delta it is handed; this is the clock a
//! loop uses to produce those deltas. Uses `std::time` only.
//!
//! # Example
//!
//! ```no_run
//! use ember::time::Time;
//!
//! let mut time = Time::new();
//! loop {
//!     let (elapsed, delta) = time.update();
//!     // emitter.update(delta, position);
//!     if elapsed > 5.0 {
//!         break;
//!     }
//! }
//! ```

use std::time::Instant;

/// Frame timing for a simulation loop.
#[derive(Debug)]
pub struct Time {
    start: Instant,
    last_frame: Instant,
    elapsed_secs: f32,
    delta_secs: f32,
    frame_count: u64,
    paused: bool,
    /// Multiplier applied to delta time (1.0 = normal speed).
    time_scale: f32,
}

impl Time {
    /// Create a time tracker starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frame_count: 0,
            paused: false,
            time_scale: 1.0,
        }
    }

    /// Update timing values. Call once per frame.
    ///
    /// Returns `(elapsed_time, delta_time)` for convenience. While paused the
    /// delta is zero and elapsed time stops accumulating.
    pub fn update(&mut self) -> (f32, f32) {
        let now = Instant::now();

        if self.paused {
            self.last_frame = now;
            self.delta_secs = 0.0;
            return (self.elapsed_secs, 0.0);
        }

        self.delta_secs = now.duration_since(self.last_frame).as_secs_f32() * self.time_scale;
        self.elapsed_secs += self.delta_secs;
        self.last_frame = now;
        self.frame_count += 1;

        (self.elapsed_secs, self.delta_secs)
    }

    /// Total unpaused time in seconds since start.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Time since the last frame in seconds.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Total frames since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Whether time is currently paused.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause time progression.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume time progression after pausing.
    pub fn resume(&mut self) {
        if self.paused {
            self.last_frame = Instant::now();
            self.paused = false;
        }
    }

    /// Current time scale multiplier.
    #[inline]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Set the time scale multiplier. Negative values clamp to zero.
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    /// The instant this clock was created or last reset.
    #[inline]
    pub fn start_instant(&self) -> Instant {
        self.start
    }

    /// Reset the clock to its initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}
