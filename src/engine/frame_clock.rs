/// Frame timing for the scene update loop
///
/// The scene advances in fixed 60 Hz steps so walk speed, gravity and the
/// animation counters behave identically regardless of display refresh
/// rate. Rendering happens as often as the windowing system asks for it.
use std::time::{Duration, Instant};

/// Fixed update rate (60 updates per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Cap on catch-up steps after a stall, prevents spiral of death
const MAX_STEPS_PER_FRAME: u32 = 5;

/// Accumulator-based fixed timestep clock
pub struct FrameClock {
    accumulator: Duration,
    last_frame_time: Instant,
    start_time: Instant,
    frame_count: u64,
    step_count: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: now,
            start_time: now,
            frame_count: 0,
            step_count: 0,
        }
    }

    /// Begin a new frame, returns the number of fixed updates to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;

        self.accumulator += frame_time;

        let mut steps = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && steps < MAX_STEPS_PER_FRAME {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            steps += 1;
        }

        self.step_count += steps as u64;
        steps
    }

    /// Interpolation factor between the last two fixed steps
    pub fn alpha(&self) -> f32 {
        self.accumulator.as_secs_f32() / FIXED_TIMESTEP
    }

    /// Wall-clock time since the clock was created, in seconds
    pub fn elapsed_secs(&self) -> f32 {
        Instant::now().duration_since(self.start_time).as_secs_f32()
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
