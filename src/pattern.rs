use crate::{GridError, LifeGrid};
use image::DynamicImage;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// A pixel darker than this 8-bit luminance counts as an alive cell.
const LUMINANCE_THRESHOLD: u8 = 16;

/// Failures while turning an external pattern source into a grid.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read pattern file")]
    Io(#[from] std::io::Error),
    #[error("malformed grid document")]
    Json(#[from] serde_json::Error),
    #[error("failed to decode image")]
    Image(#[from] image::ImageError),
    #[error("malformed RLE pattern: {0}")]
    Rle(String),
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// JSON document describing a saved field.
///
/// Each entry of `cells` is one row; a space is a dead cell, any other
/// character an alive one. Rows and columns beyond the declared dimensions
/// are ignored, missing ones stay dead.
#[derive(Debug, Serialize, Deserialize)]
pub struct GridSave {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<String>,
}

pub fn from_json_str(data: &str) -> Result<LifeGrid, LoadError> {
    let save: GridSave = serde_json::from_str(data)?;
    let mut grid = LifeGrid::new(save.width, save.height)?;
    for (y, line) in save.cells.iter().take(save.height).enumerate() {
        for (x, ch) in line.bytes().take(save.width).enumerate() {
            grid.set(x as i64, y as i64, ch != b' ')?;
        }
    }
    Ok(grid)
}

pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<LifeGrid, LoadError> {
    let data = std::fs::read_to_string(path)?;
    from_json_str(&data)
}

/// Builds a grid from freeform text: every byte equal to `marker`
/// (case-insensitively) is an alive cell. The line count gives the height,
/// the longest line the width; shorter lines are padded with dead cells.
pub fn from_text(data: &str, marker: u8) -> Result<LifeGrid, LoadError> {
    let lines = data.lines().collect::<Vec<_>>();
    let height = lines.len();
    let width = lines.iter().map(|line| line.len()).max().unwrap_or(0);
    let mut grid = LifeGrid::new(width, height)?;
    for (y, line) in lines.iter().enumerate() {
        for (x, ch) in line.bytes().enumerate() {
            if ch.eq_ignore_ascii_case(&marker) {
                grid.set(x as i64, y as i64, true)?;
            }
        }
    }
    Ok(grid)
}

/// Builds a grid from a rasterized image, one cell per pixel; only nearly
/// black pixels (luminance below 16) come out alive.
pub fn from_image(img: &DynamicImage) -> Result<LifeGrid, LoadError> {
    let gray = img.to_luma8();
    let (width, height) = gray.dimensions();
    let mut grid = LifeGrid::new(width as usize, height as usize)?;
    for (x, y, pixel) in gray.enumerate_pixels() {
        if pixel.0[0] < LUMINANCE_THRESHOLD {
            grid.set(x as i64, y as i64, true)?;
        }
    }
    Ok(grid)
}

pub fn from_image_file<P: AsRef<Path>>(path: P) -> Result<LifeGrid, LoadError> {
    let img = image::open(path)?;
    from_image(&img)
}

/// Parses a run-length-encoded pattern (the common `.rle` interchange
/// format: `b` dead, `o` alive, `$` end of row, `!` end of pattern).
pub fn from_rle(data: &str) -> Result<LifeGrid, LoadError> {
    let mut lines = data.lines().filter(|line| !line.starts_with('#'));
    let header = lines
        .next()
        .ok_or_else(|| LoadError::Rle("missing header line".to_owned()))?;

    // Header looks like `x = 36, y = 9, rule = B3/S23`.
    let mut dims = [0usize; 2];
    let mut parts = header.split(',');
    for dim in dims.iter_mut() {
        let part = parts
            .next()
            .and_then(|entry| entry.split('=').nth(1))
            .ok_or_else(|| LoadError::Rle(format!("bad header: {header:?}")))?;
        *dim = part
            .trim()
            .parse()
            .map_err(|_| LoadError::Rle(format!("bad header: {header:?}")))?;
    }

    let mut grid = LifeGrid::new(dims[0], dims[1])?;
    let (mut x, mut y) = (0i64, 0i64);
    let mut count = 0usize;
    for line in lines {
        for ch in line.bytes() {
            match ch {
                b'0'..=b'9' => count = count * 10 + (ch - b'0') as usize,
                b'o' => {
                    for _ in 0..count.max(1) {
                        grid.set(x, y, true)?;
                        x += 1;
                    }
                    count = 0;
                }
                b'b' => {
                    x += count.max(1) as i64;
                    count = 0;
                }
                b'$' => {
                    y += count.max(1) as i64;
                    x = 0;
                    count = 0;
                }
                b'!' => return Ok(grid),
                c if c.is_ascii_whitespace() => {}
                c => return Err(LoadError::Rle(format!("unexpected byte {:?}", c as char))),
            }
        }
    }
    Ok(grid)
}
