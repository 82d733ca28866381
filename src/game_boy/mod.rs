use audio::Audio;
use cartridge::Cartridge;
use cpu::Cpu;
use dma::Hdma;
use joypad::{Button, Joypad};
use memory::Ram;
use timers::Timers;
use video::{screen::Screen, Video};

pub mod audio;
pub mod cartridge;
pub mod cpu;
pub mod dma;
pub mod execute;
pub mod interrupts;
pub mod joypad;
pub mod memory;
pub mod serial_transfer;
pub mod timers;
pub mod video;

/// T-cycles per frame at single speed: 154 scanlines of 456 dots.
pub const TCYCLES_PER_FRAME: u32 = 70224;

struct SpeedSwitch {
    double: bool,
    armed: bool,
}

// Anything accessible via a memory address is stored in a separate
// struct to allow borrowing independently of the Cpu
pub struct MemoryMapped {
    cartridge: Cartridge,
    ram: Ram,
    video: Video,
    audio: Audio,
    joypad: Joypad,
    interrupts: interrupts::Registers,
    serial: serial_transfer::Registers,
    timers: Timers,
    dma_source: u8,
    hdma: Hdma,
    speed: SpeedSwitch,
    cgb: bool,
}

pub struct GameBoy {
    cpu: Cpu,
    screen: Screen,
    mapped: MemoryMapped,
    /// T-cycles the last frame ran past its budget; the next frame starts
    /// with this much already on the clock.
    frame_excess: u32,
    /// In double speed the dot clock runs at half the CPU clock; odd cycle
    /// counts leave half a dot here.
    video_dot_remainder: u32,
}

impl GameBoy {
    pub fn new(cartridge: Cartridge) -> GameBoy {
        let cgb = cartridge.supports_cgb();
        let cpu = Cpu::new(cgb, cartridge.header_checksum());

        GameBoy {
            cpu,
            screen: Screen::new(),
            frame_excess: 0,
            video_dot_remainder: 0,
            mapped: MemoryMapped {
                cartridge,
                ram: Ram::new(),
                video: Video::new(cgb),
                audio: Audio::new(),
                joypad: Joypad::new(),
                interrupts: interrupts::Registers::new(),
                serial: serial_transfer::Registers::new(),
                timers: Timers::new(),
                dma_source: 0,
                hdma: Hdma::new(),
                speed: SpeedSwitch {
                    double: false,
                    armed: false,
                },
                cgb,
            },
        }
    }

    /// Run until the frame's T-cycle budget is spent. The final instruction
    /// may overshoot; the excess is carried into the next frame.
    pub fn run_frame(&mut self) {
        let budget = TCYCLES_PER_FRAME << self.mapped.speed.double as u32;

        let mut total = self.frame_excess;
        while total < budget {
            total += self.step().0;
        }
        self.frame_excess = total - budget;
    }

    pub fn memory_mapped(&self) -> &MemoryMapped {
        &self.mapped
    }

    pub fn memory_mapped_mut(&mut self) -> &mut MemoryMapped {
        &mut self.mapped
    }

    pub fn cartridge(&self) -> &Cartridge {
        &self.mapped.cartridge
    }

    pub fn cartridge_mut(&mut self) -> &mut Cartridge {
        &mut self.mapped.cartridge
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    pub fn interrupts(&self) -> &interrupts::Registers {
        &self.mapped.interrupts
    }

    /// The last completed frame.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn double_speed(&self) -> bool {
        self.mapped.speed.double
    }

    pub fn press_button(&mut self, button: Button) {
        if self.mapped.joypad.press_selected(button) {
            self.mapped.interrupts.request(interrupts::Interrupt::Joypad);
        }
        self.mapped.joypad.press_button(button);
    }

    pub fn release_button(&mut self, button: Button) {
        self.mapped.joypad.release_button(button);
    }

    pub fn drain_serial_output(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.mapped.serial.output)
    }
}
