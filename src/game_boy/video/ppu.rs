use core::fmt;

use rgb::RGB8;

use super::{
    palette::Palette,
    screen::{self, Screen},
    sprites::{Sprite, SpriteSize},
    tile_maps::TileMap,
    tiles::{self, TileAddressMode, TileIndex},
    PpuAccessible,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Mode {
    BetweenFrames = 1,
    PreparingScanline = 2,
    DrawingPixels = 3,
    FinishingScanline = 0,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::BetweenFrames => write!(f, "Between Frames"),
            Mode::PreparingScanline => write!(f, "Preparing Scanline"),
            Mode::DrawingPixels => write!(f, "Drawing Pixels"),
            Mode::FinishingScanline => write!(f, "Finishing Scanline"),
        }
    }
}

pub const SCANLINE_TOTAL_DOTS: u32 = 456;
pub const LINES_PER_FRAME: u8 = 154;
const SCANLINE_PREPARING_DOTS: u32 = 80;
// A fixed draw window; the penalty dots real hardware spends on sprites and
// window fetches are not modelled.
const SCANLINE_DRAWING_DOTS: u32 = 172;
const MAX_SPRITES_PER_LINE: usize = 10;

pub struct PpuTickResult {
    pub screen: Option<Screen>,
    pub vblank_started: bool,
    pub hblanks_entered: u32,
}

/// Scanline-serial renderer: the whole line is composited when the drawing
/// phase begins, and the dot counter only drives mode timing and
/// interrupts.
pub struct PixelProcessingUnit {
    line: u8,
    dots: u32,
    window_line_counter: u8,
    screen: Screen,
}

impl PixelProcessingUnit {
    pub fn new() -> Self {
        Self {
            line: 0,
            dots: 0,
            window_line_counter: 0,
            screen: Screen::new(),
        }
    }

    pub fn current_line(&self) -> u8 {
        self.line
    }

    pub fn mode(&self) -> Mode {
        if self.line >= screen::NUM_SCANLINES {
            Mode::BetweenFrames
        } else if self.dots < SCANLINE_PREPARING_DOTS {
            Mode::PreparingScanline
        } else if self.dots < SCANLINE_PREPARING_DOTS + SCANLINE_DRAWING_DOTS {
            Mode::DrawingPixels
        } else {
            Mode::FinishingScanline
        }
    }

    pub fn tick(&mut self, mut dots: u32, data: &PpuAccessible) -> PpuTickResult {
        let mut result = PpuTickResult {
            screen: None,
            vblank_started: false,
            hblanks_entered: 0,
        };

        while dots > 0 {
            let boundary = if self.line >= screen::NUM_SCANLINES {
                SCANLINE_TOTAL_DOTS
            } else if self.dots < SCANLINE_PREPARING_DOTS {
                SCANLINE_PREPARING_DOTS
            } else if self.dots < SCANLINE_PREPARING_DOTS + SCANLINE_DRAWING_DOTS {
                SCANLINE_PREPARING_DOTS + SCANLINE_DRAWING_DOTS
            } else {
                SCANLINE_TOTAL_DOTS
            };

            let advance = dots.min(boundary - self.dots);
            self.dots += advance;
            dots -= advance;

            if self.dots < boundary {
                break;
            }

            match boundary {
                SCANLINE_PREPARING_DOTS => self.render_line(data),
                x if x == SCANLINE_PREPARING_DOTS + SCANLINE_DRAWING_DOTS => {
                    result.hblanks_entered += 1;
                }
                _ => {
                    self.dots = 0;
                    self.line += 1;

                    if self.line == screen::NUM_SCANLINES {
                        result.vblank_started = true;
                        result.screen = Some(self.screen.clone());
                    } else if self.line == LINES_PER_FRAME {
                        self.line = 0;
                        self.window_line_counter = 0;
                    }
                }
            }
        }

        result
    }

    fn render_line(&mut self, data: &PpuAccessible) {
        let y = self.line;
        let cgb = data.cgb;
        let blank = Palette::MONOCHROME_GREEN.color(0);

        let mut bg_color = [0u8; screen::PIXELS_PER_LINE as usize];
        let mut bg_over_sprites = [false; screen::PIXELS_PER_LINE as usize];
        let mut line = [blank; screen::PIXELS_PER_LINE as usize];

        // In color mode LCDC bit 0 no longer blanks the background, it only
        // demotes its priority against sprites.
        let background_visible = cgb || data.control.background_and_window_enabled();

        if background_visible {
            let map = data.memory.tile_map(data.control.background_tile_map());
            let scx = data.background_viewport.x;
            let scy = data.background_viewport.y;

            for x in 0..screen::PIXELS_PER_LINE {
                let (color, over_sprites, pixel) =
                    tile_map_pixel(data, map, x.wrapping_add(scx), y.wrapping_add(scy));
                bg_color[x as usize] = color;
                bg_over_sprites[x as usize] = over_sprites;
                line[x as usize] = pixel;
            }

            if data.control.window_enabled() && y >= data.window.y && data.window.x_plus_7 <= 166 {
                let map = data.memory.tile_map(data.control.window_tile_map());
                let origin = data.window.x_plus_7 as i16 - 7;
                let wy = self.window_line_counter;
                let mut rendered = false;

                for x in 0..screen::PIXELS_PER_LINE {
                    if (x as i16) < origin {
                        continue;
                    }
                    let wx = (x as i16 - origin) as u8;
                    let (color, over_sprites, pixel) = tile_map_pixel(data, map, wx, wy);
                    bg_color[x as usize] = color;
                    bg_over_sprites[x as usize] = over_sprites;
                    line[x as usize] = pixel;
                    rendered = true;
                }

                // The window keeps its own line counter, so hiding it for a
                // few scanlines doesn't skip window content
                if rendered {
                    self.window_line_counter += 1;
                }
            }
        }

        if data.control.sprites_enabled() {
            let size = data.control.sprite_size();
            let mut sprites: Vec<Sprite> = data
                .memory
                .sprites()
                .iter()
                .filter(|sprite| sprite.position.on_line(y, size))
                .take(MAX_SPRITES_PER_LINE)
                .cloned()
                .collect();

            // DMG priority: lowest X wins, ties broken by OAM order (stable
            // sort). Color hardware uses OAM order alone.
            if !cgb {
                sprites.sort_by_key(|sprite| sprite.position.x_plus_8);
            }

            let mut sprite_color = [0u8; screen::PIXELS_PER_LINE as usize];
            let mut sprite_behind = [false; screen::PIXELS_PER_LINE as usize];
            let mut sprite_pixel = [blank; screen::PIXELS_PER_LINE as usize];

            for sprite in &sprites {
                let mut row = (y as i16 + 16 - sprite.position.y_plus_16 as i16) as u8;
                if sprite.attributes.flip_y() {
                    row = size.height() - 1 - row;
                }

                let mut tile = match size {
                    SpriteSize::Single => sprite.tile,
                    SpriteSize::Double => TileIndex(sprite.tile.0 & 0xfe),
                };
                if row >= 8 {
                    tile = TileIndex(tile.0 + 1);
                    row -= 8;
                }

                let bank = if cgb { sprite.attributes.bank() } else { 0 };
                let (block, index) = TileAddressMode::Block0Block1.tile(tile);
                let (low, high) = data.memory.tile_block(bank, block).row(index, row);

                for i in 0..8u8 {
                    let screen_x = sprite.position.x_plus_8 as i16 - 8 + i as i16;
                    if !(0..screen::PIXELS_PER_LINE as i16).contains(&screen_x) {
                        continue;
                    }
                    let x = screen_x as usize;
                    if sprite_color[x] != 0 {
                        continue;
                    }

                    let bit = if sprite.attributes.flip_x() { 7 - i } else { i };
                    let color = tiles::pixel(low, high, bit);
                    if color == 0 {
                        continue;
                    }

                    sprite_color[x] = color;
                    sprite_behind[x] = sprite.attributes.behind_background();
                    sprite_pixel[x] = if cgb {
                        data.color_palettes
                            .sprites
                            .color(sprite.attributes.cgb_palette(), color)
                    } else if sprite.attributes.palette() == 0 {
                        data.palettes
                            .sprite0
                            .get(color, &Palette::MONOCHROME_GREEN)
                    } else {
                        data.palettes
                            .sprite1
                            .get(color, &Palette::MONOCHROME_GREEN)
                    };
                }
            }

            for x in 0..screen::PIXELS_PER_LINE as usize {
                if sprite_color[x] == 0 {
                    continue;
                }

                let sprite_wins = if cgb && !data.control.background_and_window_enabled() {
                    // Color master priority: sprites always in front
                    true
                } else if bg_color[x] == 0 {
                    true
                } else if bg_over_sprites[x] {
                    false
                } else {
                    !sprite_behind[x]
                };

                if sprite_wins {
                    line[x] = sprite_pixel[x];
                }
            }
        }

        for x in 0..screen::PIXELS_PER_LINE {
            self.screen.set_pixel(x, y, line[x as usize]);
        }
    }
}

/// One pixel of a tile map layer: raw color index, color-mode priority
/// attribute, and the resolved screen color.
fn tile_map_pixel(data: &PpuAccessible, map: &TileMap, px: u8, py: u8) -> (u8, bool, RGB8) {
    let tile = map.tile(px / 8, py / 8);
    let attributes = map.attributes(px / 8, py / 8);

    let mut fine_x = px % 8;
    let mut fine_y = py % 8;
    let bank = if data.cgb { attributes.bank() } else { 0 };
    if data.cgb && attributes.flip_x() {
        fine_x = 7 - fine_x;
    }
    if data.cgb && attributes.flip_y() {
        fine_y = 7 - fine_y;
    }

    let (block, index) = data.control.tile_address_mode().tile(tile);
    let (low, high) = data.memory.tile_block(bank, block).row(index, fine_y);
    let color = tiles::pixel(low, high, fine_x);

    let pixel = if data.cgb {
        data.color_palettes
            .background
            .color(attributes.palette(), color)
    } else {
        data.palettes
            .background
            .get(color, &Palette::MONOCHROME_GREEN)
    };

    (color, data.cgb && attributes.priority(), pixel)
}
