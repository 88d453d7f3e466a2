use crate::{Config, Frame, GridError, LifeGrid};
use ahash::AHashSet;
use std::time::Duration;

/// Why [`generate`] stopped producing frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The simulation reached a generation it had already been in
    /// (a still life or an oscillator of any period).
    StableCycleDetected,
    /// The frame count hit the caller's iteration cap.
    IterationLimitReached,
}

/// Ordered frame sequence of one simulation run.
///
/// Every frame is displayed for the same constant `delay`; sinks serialize
/// the sequence into whatever container format they like.
#[derive(Debug)]
pub struct Animation {
    pub frames: Vec<Frame>,
    pub delay: Duration,
    pub reason: Termination,
}

/// Drives the grid through successive generations, rendering one frame per
/// generation, until the state repeats or `max_iterations` frames have been
/// collected.
///
/// Cycle detection digests every generation seen so far, so oscillators of
/// arbitrary period are caught, not just fixed points. The digest set lives
/// only for the duration of this call. The repeating generation itself is
/// not appended: it duplicates a frame already in the output.
///
/// The only failure is an invalid `scale`, surfaced by the first render
/// before the grid is ever advanced.
pub fn generate(
    grid: &mut LifeGrid,
    scale: u32,
    max_iterations: usize,
) -> Result<Animation, GridError> {
    let mut frames = Vec::new();
    let mut seen = AHashSet::new();
    seen.insert(grid.fingerprint());

    loop {
        frames.push(grid.render_frame(scale)?);
        if frames.len() >= max_iterations {
            log::debug!("iteration cap hit after {} frames", frames.len());
            return Ok(Animation {
                frames,
                delay: Config::FRAME_DELAY,
                reason: Termination::IterationLimitReached,
            });
        }
        grid.advance();
        if !seen.insert(grid.fingerprint()) {
            log::debug!("state repeated after {} frames", frames.len());
            return Ok(Animation {
                frames,
                delay: Config::FRAME_DELAY,
                reason: Termination::StableCycleDetected,
            });
        }
    }
}
