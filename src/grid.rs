use crate::{Frame, GridError};
use std::hash::{BuildHasher, Hasher};

// Seeds for the fingerprint hasher; fixed so that equal generations always
// digest to the same value within a process.
const FINGERPRINT_SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

/// Bounded Game of Life field with double-buffered state.
///
/// The boundary is open: every coordinate outside the field reads as dead,
/// so neighbor counting needs no special-casing at the edges and patterns
/// never wrap around.
#[derive(Debug)]
pub struct LifeGrid {
    width: usize,
    height: usize,
    cells_curr: Vec<bool>,
    cells_next: Vec<bool>,
}

impl LifeGrid {
    /// Creates a field with all cells dead.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        let size = width * height;
        Ok(Self {
            width,
            height,
            cells_curr: vec![false; size],
            cells_next: vec![false; size],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell state at `(x, y)`; dead for any out-of-bounds coordinate.
    pub fn at(&self, x: i64, y: i64) -> bool {
        if x < 0 || x >= self.width as i64 || y < 0 || y >= self.height as i64 {
            return false;
        }
        self.cells_curr[x as usize + y as usize * self.width]
    }

    /// Writes a cell state into both buffers, keeping cells that are never
    /// touched by [`LifeGrid::advance`] consistent across the swap.
    pub fn set(&mut self, x: i64, y: i64, alive: bool) -> Result<(), GridError> {
        if x < 0 || x >= self.width as i64 || y < 0 || y >= self.height as i64 {
            return Err(GridError::OutOfBounds { x, y });
        }
        let idx = x as usize + y as usize * self.width;
        self.cells_curr[idx] = alive;
        self.cells_next[idx] = alive;
        Ok(())
    }

    /// Number of alive cells among the 8 neighbors of `(x, y)`.
    pub fn neighbor_count(&self, x: i64, y: i64) -> u8 {
        self.at(x - 1, y - 1) as u8
            + self.at(x, y - 1) as u8
            + self.at(x + 1, y - 1) as u8
            + self.at(x - 1, y) as u8
            + self.at(x + 1, y) as u8
            + self.at(x - 1, y + 1) as u8
            + self.at(x, y + 1) as u8
            + self.at(x + 1, y + 1) as u8
    }

    /// Advances the field by one generation.
    ///
    /// The next generation is computed entirely from the current one into the
    /// staging buffer and then published with a whole-buffer swap, so no cell
    /// update ever observes a partially written generation.
    pub fn advance(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let neibs = self.neighbor_count(x as i64, y as i64);
                let next = if self.cells_curr[x + y * self.width] {
                    neibs == 2 || neibs == 3
                } else {
                    neibs == 3
                };
                self.cells_next[x + y * self.width] = next;
            }
        }
        std::mem::swap(&mut self.cells_curr, &mut self.cells_next);
    }

    /// Fills the field with random cells.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) {
        use rand::{Rng, SeedableRng};

        let mut rng = match seed {
            Some(x) => rand_chacha::ChaCha8Rng::seed_from_u64(x),
            None => rand_chacha::ChaCha8Rng::from_entropy(),
        };
        for (curr, next) in self.cells_curr.iter_mut().zip(self.cells_next.iter_mut()) {
            let alive = rng.gen_bool(fill_rate);
            *curr = alive;
            *next = alive;
        }
    }

    /// Digest of the full current generation, row-major.
    ///
    /// Equal generations always digest to the same value; distinct
    /// generations may collide, which cycle detection accepts as an
    /// astronomically unlikely event.
    pub fn fingerprint(&self) -> u64 {
        let state = ahash::RandomState::with_seeds(
            FINGERPRINT_SEEDS[0],
            FINGERPRINT_SEEDS[1],
            FINGERPRINT_SEEDS[2],
            FINGERPRINT_SEEDS[3],
        );
        let mut hasher = state.build_hasher();
        for &alive in &self.cells_curr {
            hasher.write_u8(alive as u8);
        }
        hasher.finish()
    }

    /// Renders the current generation as a two-color raster, each cell drawn
    /// as a `scale x scale` block.
    pub fn render_frame(&self, scale: u32) -> Result<Frame, GridError> {
        if scale == 0 {
            return Err(GridError::InvalidScale);
        }
        let scale = scale as usize;
        let (frame_w, frame_h) = (self.width * scale, self.height * scale);
        let mut pixels = vec![0u8; frame_w * frame_h];
        for y in 0..self.height {
            for x in 0..self.width {
                if !self.cells_curr[x + y * self.width] {
                    continue;
                }
                for py in y * scale..(y + 1) * scale {
                    pixels[py * frame_w + x * scale..py * frame_w + (x + 1) * scale].fill(1);
                }
            }
        }
        Ok(Frame::new(frame_w as u32, frame_h as u32, pixels))
    }

    /// Prints the field as text, one character per cell.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(if self.cells_curr[x + y * self.width] {
                    'o'
                } else {
                    ' '
                });
            }
            out.push('\n');
        }
        out
    }
}
