use crate::Animation;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, ImageResult};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Encodes the animation as a looping GIF.
pub fn write_gif<W: Write>(writer: W, animation: &Animation) -> ImageResult<()> {
    let mut encoder = GifEncoder::new(writer);
    encoder.set_repeat(Repeat::Infinite)?;
    let delay = Delay::from_saturating_duration(animation.delay);
    for frame in &animation.frames {
        encoder.encode_frame(image::Frame::from_parts(frame.to_rgba(), 0, 0, delay))?;
    }
    Ok(())
}

pub fn write_gif_to_path<P: AsRef<Path>>(path: P, animation: &Animation) -> ImageResult<()> {
    let file = File::create(path)?;
    write_gif(BufWriter::new(file), animation)
}
