use image::{Rgba, RgbaImage};

const DEAD_COLOR: [u8; 4] = [0xff, 0xff, 0xff, 0xff];
const ALIVE_COLOR: [u8; 4] = [0x00, 0x00, 0x00, 0xff];

/// One rendered generation: a two-color raster, immutable once produced.
///
/// Pixels are stored row-major from the top-left corner, one byte per pixel,
/// zero for dead and nonzero for alive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Frame {
    pub(crate) fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw palette indices, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Expands the raster to RGBA, white for dead and black for alive.
    pub fn to_rgba(&self) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(self.width, self.height, Rgba(DEAD_COLOR));
        for (i, &p) in self.pixels.iter().enumerate() {
            if p != 0 {
                let (x, y) = (i as u32 % self.width, i as u32 / self.width);
                img.put_pixel(x, y, Rgba(ALIVE_COLOR));
            }
        }
        img
    }
}
