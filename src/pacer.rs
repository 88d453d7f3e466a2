use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Paces the interactive terminal loop to a fixed number of updates per
/// minute.
pub struct UpdatePacer {
    target_frametime: Duration,
    frame_timer: Instant,
}

impl UpdatePacer {
    pub fn new(updates_per_minute: f64) -> Self {
        Self {
            target_frametime: Duration::from_secs_f64(60. / updates_per_minute),
            frame_timer: Instant::now(),
        }
    }

    /// Sleeps off whatever remains of the current tick.
    pub fn delay(&mut self) {
        let elapsed = self.frame_timer.elapsed();
        if self.target_frametime > elapsed {
            sleep(self.target_frametime - elapsed);
        }
        self.frame_timer = Instant::now();
    }
}
