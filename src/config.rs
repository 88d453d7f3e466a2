use std::time::Duration;

/// Fixed knobs of the simulation and animation pipeline.
pub struct Config;

impl Config {
    /// Default magnification for rendered frames.
    pub const DEFAULT_SCALE: u32 = 4;
    /// Hard cap on generated frames for patterns that never settle.
    pub const MAX_ITERATIONS: usize = 2048;
    /// Display time of every animation frame.
    pub const FRAME_DELAY: Duration = Duration::from_millis(10);

    /// Redraw rate of the interactive terminal loop.
    pub const UPDATES_PER_MINUTE: f64 = 75.;

    /// Default marker for alive cells in freeform text patterns.
    pub const TEXT_MARKER: u8 = b'o';
    /// Default fill rate for random fields.
    pub const RANDOM_FILL_RATE: f64 = 0.3;
}
