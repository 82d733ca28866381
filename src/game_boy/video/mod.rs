use bitflags::bitflags;

use control::Control;
use memory::VideoMemory;
use palette::{ColorPalettes, PaletteMap, Palettes};
use ppu::{Mode, PixelProcessingUnit};
use screen::Screen;

pub mod control;
pub mod memory;
pub mod palette;
pub mod ppu;
pub mod screen;
pub mod sprites;
pub mod tile_maps;
pub mod tiles;

#[derive(Debug)]
pub enum Register {
    Control,
    Status,
    BackgroundViewportY,
    BackgroundViewportX,
    WindowY,
    WindowX,
    CurrentScanline,
    InterruptOnScanline,
    BackgroundPalette,
    Sprite0Palette,
    Sprite1Palette,
    VramBank,
    BackgroundPaletteIndex,
    BackgroundPaletteData,
    SpritePaletteIndex,
    SpritePaletteData,
}

pub struct VideoTickResult {
    pub screen: Option<Screen>,
    pub request_vblank: bool,
    pub request_stat: bool,
    pub hblanks_entered: u32,
}

struct BackgroundViewportPosition {
    x: u8,
    y: u8,
}

bitflags! {
    pub struct InterruptFlags: u8 {
        const CURRENT_LINE_COMPARE = 0b01000000;
        const PREPARING_SCANLINE   = 0b00100000;
        const BETWEEN_FRAMES       = 0b00010000;
        const FINISHING_SCANLINE   = 0b00001000;
    }
}

struct Interrupts {
    flags: InterruptFlags,
    current_line_compare: u8,
}

/// Everything the renderer needs to look at while a line is drawn; kept in
/// one struct so the pixel processing unit can borrow it independently of
/// the interrupt bookkeeping around it.
pub struct PpuAccessible {
    control: Control,
    background_viewport: BackgroundViewportPosition,
    window: Window,
    palettes: Palettes,
    color_palettes: ColorPalettes,
    memory: VideoMemory,
    cgb: bool,
}

pub struct Window {
    y: u8,
    x_plus_7: u8,
}

pub struct Video {
    ppu: Option<PixelProcessingUnit>,
    ppu_accessible: PpuAccessible,
    interrupts: Interrupts,
    vram_bank: u8,
    stat_line_was_high: bool,
}

impl Video {
    pub fn new(cgb: bool) -> Self {
        Self {
            ppu_accessible: PpuAccessible {
                control: Control::default(),
                background_viewport: BackgroundViewportPosition { x: 0, y: 0 },
                window: Window { y: 0, x_plus_7: 0 },
                palettes: Palettes::default(),
                color_palettes: ColorPalettes::new(),
                memory: VideoMemory::new(),
                cgb,
            },

            ppu: Some(PixelProcessingUnit::new()),
            interrupts: Interrupts {
                flags: InterruptFlags::empty(),
                current_line_compare: 0,
            },
            vram_bank: 0,
            stat_line_was_high: false,
        }
    }

    pub fn read_register(&self, register: Register) -> u8 {
        match register {
            Register::Control => self.ppu_accessible.control.bits(),
            Register::Status => {
                let mode = match &self.ppu {
                    Some(ppu) => ppu.mode() as u8,
                    None => 0,
                };
                let line_compare = if self.ly_compare() { 0b100 } else { 0 };
                0x80 | self.interrupts.flags.bits() | line_compare | mode
            }
            Register::BackgroundViewportY => self.ppu_accessible.background_viewport.y,
            Register::BackgroundViewportX => self.ppu_accessible.background_viewport.x,
            Register::WindowY => self.ppu_accessible.window.y,
            Register::WindowX => self.ppu_accessible.window.x_plus_7,
            Register::CurrentScanline => self.current_line(),
            Register::InterruptOnScanline => self.interrupts.current_line_compare,
            Register::BackgroundPalette => self.ppu_accessible.palettes.background.0,
            Register::Sprite0Palette => self.ppu_accessible.palettes.sprite0.0,
            Register::Sprite1Palette => self.ppu_accessible.palettes.sprite1.0,
            Register::VramBank if self.ppu_accessible.cgb => 0xfe | self.vram_bank,
            Register::BackgroundPaletteIndex if self.ppu_accessible.cgb => {
                self.ppu_accessible.color_palettes.background.read_index()
            }
            Register::BackgroundPaletteData if self.ppu_accessible.cgb => {
                self.ppu_accessible.color_palettes.background.read_data()
            }
            Register::SpritePaletteIndex if self.ppu_accessible.cgb => {
                self.ppu_accessible.color_palettes.sprites.read_index()
            }
            Register::SpritePaletteData if self.ppu_accessible.cgb => {
                self.ppu_accessible.color_palettes.sprites.read_data()
            }
            _ => 0xff,
        }
    }

    pub fn write_register(&mut self, register: Register, value: u8) {
        match register {
            Register::Control => {
                self.ppu_accessible.control = Control::from_bits_retain(value);
            }
            Register::Status => {
                self.interrupts.flags = InterruptFlags::from_bits_truncate(value);
            }
            Register::BackgroundViewportY => self.ppu_accessible.background_viewport.y = value,
            Register::BackgroundViewportX => self.ppu_accessible.background_viewport.x = value,
            Register::WindowY => self.ppu_accessible.window.y = value,
            Register::WindowX => self.ppu_accessible.window.x_plus_7 = value,
            Register::InterruptOnScanline => self.interrupts.current_line_compare = value,
            Register::BackgroundPalette => {
                self.ppu_accessible.palettes.background = PaletteMap(value)
            }
            Register::Sprite0Palette => self.ppu_accessible.palettes.sprite0 = PaletteMap(value),
            Register::Sprite1Palette => self.ppu_accessible.palettes.sprite1 = PaletteMap(value),
            Register::CurrentScanline => {} // writes to LY are ignored
            Register::VramBank => {
                if self.ppu_accessible.cgb {
                    self.vram_bank = value & 1;
                }
            }
            Register::BackgroundPaletteIndex => {
                if self.ppu_accessible.cgb {
                    self.ppu_accessible
                        .color_palettes
                        .background
                        .write_index(value);
                }
            }
            Register::BackgroundPaletteData => {
                if self.ppu_accessible.cgb {
                    self.ppu_accessible
                        .color_palettes
                        .background
                        .write_data(value);
                }
            }
            Register::SpritePaletteIndex => {
                if self.ppu_accessible.cgb {
                    self.ppu_accessible.color_palettes.sprites.write_index(value);
                }
            }
            Register::SpritePaletteData => {
                if self.ppu_accessible.cgb {
                    self.ppu_accessible.color_palettes.sprites.write_data(value);
                }
            }
        }
    }

    pub fn read_memory(&self, address: memory::MappedAddress) -> u8 {
        self.ppu_accessible.memory.read(address, self.vram_bank)
    }

    pub fn write_memory(&mut self, address: memory::MappedAddress, value: u8) {
        self.ppu_accessible
            .memory
            .write(address, self.vram_bank, value);
    }

    pub fn mode(&self) -> Mode {
        match &self.ppu {
            Some(ppu) => ppu.mode(),
            None => Mode::FinishingScanline,
        }
    }

    pub fn current_line(&self) -> u8 {
        match &self.ppu {
            Some(ppu) => ppu.current_line(),
            None => 0,
        }
    }

    pub fn control(&self) -> Control {
        self.ppu_accessible.control
    }

    fn ly_compare(&self) -> bool {
        self.current_line() == self.interrupts.current_line_compare
    }

    fn stat_line_active(&self) -> bool {
        let ppu = match &self.ppu {
            Some(ppu) => ppu,
            None => return false,
        };

        let mode = ppu.mode();

        (self
            .interrupts
            .flags
            .contains(InterruptFlags::FINISHING_SCANLINE)
            && mode == Mode::FinishingScanline)
            || (self
                .interrupts
                .flags
                .contains(InterruptFlags::BETWEEN_FRAMES)
                && mode == Mode::BetweenFrames)
            || (self
                .interrupts
                .flags
                .contains(InterruptFlags::PREPARING_SCANLINE)
                && mode == Mode::PreparingScanline)
            || (self
                .interrupts
                .flags
                .contains(InterruptFlags::CURRENT_LINE_COMPARE)
                && self.ly_compare())
    }

    /// Advance the dot clock. The STAT interrupt line is re-evaluated once
    /// per call; it only requests an interrupt on a rising edge.
    pub fn tick(&mut self, dots: u32) -> VideoTickResult {
        let mut result = VideoTickResult {
            screen: None,
            request_vblank: false,
            request_stat: false,
            hblanks_entered: 0,
        };

        if self.ppu_accessible.control.video_enabled() {
            let ppu = self.ppu.get_or_insert_with(PixelProcessingUnit::new);
            let tick = ppu.tick(dots, &self.ppu_accessible);
            result.screen = tick.screen;
            result.request_vblank = tick.vblank_started;
            result.hblanks_entered = tick.hblanks_entered;
        } else {
            // Turning the LCD off blanks the panel and resets the dot clock
            if self.ppu.take().is_some() {
                self.stat_line_was_high = false;
                result.screen = Some(Screen::new());
            }
            return result;
        }

        let stat_line_high = self.stat_line_active();
        if stat_line_high && !self.stat_line_was_high {
            result.request_stat = true;
        }
        self.stat_line_was_high = stat_line_high;

        result
    }
}
