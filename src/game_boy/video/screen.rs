use rgb::RGB8;

use super::palette::Palette;

pub const NUM_SCANLINES: u8 = 144;
pub const PIXELS_PER_LINE: u8 = 160;

#[derive(Clone)]
pub struct Screen {
    lines: [Line; NUM_SCANLINES as usize],
}

impl Screen {
    pub fn new() -> Self {
        Self {
            lines: [Line::new(); NUM_SCANLINES as usize],
        }
    }

    pub fn pixel(&self, x: u8, y: u8) -> RGB8 {
        self.lines[y as usize].pixels[x as usize]
    }

    pub fn set_pixel(&mut self, x: u8, y: u8, pixel: RGB8) {
        self.lines[y as usize].pixels[x as usize] = pixel;
    }
}

#[derive(Copy, Clone)]
struct Line {
    pixels: [RGB8; PIXELS_PER_LINE as usize],
}

impl Line {
    fn new() -> Self {
        Self {
            pixels: [Palette::MONOCHROME_GREEN.color(0); PIXELS_PER_LINE as usize],
        }
    }
}
