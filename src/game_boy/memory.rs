use super::{dma::HdmaRegister, interrupts, serial_transfer, timers, video, MemoryMapped};

/// Work RAM and high RAM. Work RAM is always held as eight 4 KiB banks;
/// plain DMG hardware only ever sees banks 0 and 1.
pub struct Ram {
    work_ram: [[u8; 0x1000]; 8],
    high_ram: [u8; 0x7f],
    bank: u8,
}

impl Ram {
    pub fn new() -> Self {
        Self {
            work_ram: [[0; 0x1000]; 8],
            high_ram: [0; 0x7f],
            bank: 1,
        }
    }

    /// `offset` is relative to 0xC000; the upper half goes through the
    /// selected bank.
    fn read_work(&self, offset: u16) -> u8 {
        if offset < 0x1000 {
            self.work_ram[0][offset as usize]
        } else {
            self.work_ram[self.bank as usize][(offset - 0x1000) as usize]
        }
    }

    fn write_work(&mut self, offset: u16, value: u8) {
        if offset < 0x1000 {
            self.work_ram[0][offset as usize] = value;
        } else {
            self.work_ram[self.bank as usize][(offset - 0x1000) as usize] = value;
        }
    }

    fn read_bank_select(&self) -> u8 {
        0xf8 | self.bank
    }

    fn write_bank_select(&mut self, value: u8) {
        self.bank = (value & 0b111).max(1);
    }
}

#[derive(Debug)]
pub enum MappedAddress {
    Cartridge(u16),
    WorkRam(u16),
    HighRam(u8),
    VideoRam(video::memory::MappedAddress),
    JoypadRegister,
    SerialTransferRegister(serial_transfer::Register),
    TimerRegister(timers::Register),
    InterruptRegister(interrupts::Register),
    AudioRegister(u16),
    AudioWaveRam(u8),
    VideoRegister(video::Register),
    BeginDmaTransfer,
    SpeedSwitch,
    BootRomDisable,
    HdmaRegister(HdmaRegister),
    WorkRamBankSelect,
    Unmapped,
}

impl MappedAddress {
    pub fn map(address: u16) -> Self {
        match address {
            0x0000..=0x7fff => Self::Cartridge(address),
            0x8000..=0x9fff => Self::VideoRam(video::memory::MappedAddress::map(address)),
            0xa000..=0xbfff => Self::Cartridge(address),
            0xc000..=0xdfff => Self::WorkRam(address - 0xc000),
            0xe000..=0xfdff => Self::WorkRam(address - 0xe000),
            0xfe00..=0xfe9f => Self::VideoRam(video::memory::MappedAddress::map(address)),
            0xfea0..=0xfeff => Self::Unmapped,
            0xff00 => Self::JoypadRegister,
            0xff01 => Self::SerialTransferRegister(serial_transfer::Register::Data),
            0xff02 => Self::SerialTransferRegister(serial_transfer::Register::Control),
            0xff03 => Self::Unmapped,
            0xff04 => Self::TimerRegister(timers::Register::Divider),
            0xff05 => Self::TimerRegister(timers::Register::Counter),
            0xff06 => Self::TimerRegister(timers::Register::Modulo),
            0xff07 => Self::TimerRegister(timers::Register::Control),
            0xff08..=0xff0e => Self::Unmapped,
            0xff0f => Self::InterruptRegister(interrupts::Register::Requested),
            0xff10..=0xff26 => Self::AudioRegister(address),
            0xff27..=0xff2f => Self::Unmapped,
            0xff30..=0xff3f => Self::AudioWaveRam((address - 0xff30) as u8),
            0xff40 => Self::VideoRegister(video::Register::Control),
            0xff41 => Self::VideoRegister(video::Register::Status),
            0xff42 => Self::VideoRegister(video::Register::BackgroundViewportY),
            0xff43 => Self::VideoRegister(video::Register::BackgroundViewportX),
            0xff44 => Self::VideoRegister(video::Register::CurrentScanline),
            0xff45 => Self::VideoRegister(video::Register::InterruptOnScanline),
            0xff46 => Self::BeginDmaTransfer,
            0xff47 => Self::VideoRegister(video::Register::BackgroundPalette),
            0xff48 => Self::VideoRegister(video::Register::Sprite0Palette),
            0xff49 => Self::VideoRegister(video::Register::Sprite1Palette),
            0xff4a => Self::VideoRegister(video::Register::WindowY),
            0xff4b => Self::VideoRegister(video::Register::WindowX),
            0xff4c => Self::Unmapped,
            0xff4d => Self::SpeedSwitch,
            0xff4e => Self::Unmapped,
            0xff4f => Self::VideoRegister(video::Register::VramBank),
            0xff50 => Self::BootRomDisable,
            0xff51 => Self::HdmaRegister(HdmaRegister::SourceHigh),
            0xff52 => Self::HdmaRegister(HdmaRegister::SourceLow),
            0xff53 => Self::HdmaRegister(HdmaRegister::DestinationHigh),
            0xff54 => Self::HdmaRegister(HdmaRegister::DestinationLow),
            0xff55 => Self::HdmaRegister(HdmaRegister::Control),
            0xff56..=0xff67 => Self::Unmapped,
            0xff68 => Self::VideoRegister(video::Register::BackgroundPaletteIndex),
            0xff69 => Self::VideoRegister(video::Register::BackgroundPaletteData),
            0xff6a => Self::VideoRegister(video::Register::SpritePaletteIndex),
            0xff6b => Self::VideoRegister(video::Register::SpritePaletteData),
            0xff6c..=0xff6f => Self::Unmapped,
            0xff70 => Self::WorkRamBankSelect,
            0xff71..=0xff7f => Self::Unmapped,
            0xff80..=0xfffe => Self::HighRam((address - 0xff80) as u8),
            0xffff => Self::InterruptRegister(interrupts::Register::Enabled),
        }
    }
}

impl MemoryMapped {
    pub fn read(&self, address: u16) -> u8 {
        self.read_mapped(MappedAddress::map(address))
    }

    fn read_mapped(&self, address: MappedAddress) -> u8 {
        match address {
            MappedAddress::Cartridge(address) => self.cartridge.read(address),
            MappedAddress::WorkRam(offset) => self.ram.read_work(offset),
            MappedAddress::HighRam(offset) => self.ram.high_ram[offset as usize],
            MappedAddress::VideoRam(address) => self.video.read_memory(address),
            MappedAddress::JoypadRegister => self.joypad.read_register(),
            MappedAddress::SerialTransferRegister(register) => match register {
                serial_transfer::Register::Data => self.serial.data,
                serial_transfer::Register::Control => self.serial.control.bits() | 0x7e,
            },
            MappedAddress::TimerRegister(register) => self.timers.read_register(register),
            MappedAddress::InterruptRegister(register) => match register {
                interrupts::Register::Enabled => self.interrupts.enabled.bits(),
                interrupts::Register::Requested => {
                    self.interrupts.requested.bits() | 0xe0
                }
            },
            MappedAddress::AudioRegister(address) => self.audio.read_register(address),
            MappedAddress::AudioWaveRam(offset) => self.audio.read_wave_ram(offset),
            MappedAddress::VideoRegister(register) => self.video.read_register(register),
            MappedAddress::BeginDmaTransfer => self.dma_source,
            MappedAddress::SpeedSwitch if self.cgb => {
                0x7e | (self.speed.double as u8) << 7 | self.speed.armed as u8
            }
            MappedAddress::HdmaRegister(register) if self.cgb => self.read_hdma_register(register),
            MappedAddress::WorkRamBankSelect if self.cgb => self.ram.read_bank_select(),

            MappedAddress::SpeedSwitch
            | MappedAddress::HdmaRegister(_)
            | MappedAddress::WorkRamBankSelect
            | MappedAddress::BootRomDisable
            | MappedAddress::Unmapped => 0xff,
        }
    }

    pub fn write(&mut self, address: u16, value: u8) {
        self.write_mapped(MappedAddress::map(address), value);
    }

    pub fn write_word(&mut self, address: u16, value: u16) {
        let [low, high] = value.to_le_bytes();
        self.write(address, low);
        self.write(address.wrapping_add(1), high);
    }

    fn write_mapped(&mut self, address: MappedAddress, value: u8) {
        match address {
            MappedAddress::Cartridge(address) => self.cartridge.write(address, value),
            MappedAddress::WorkRam(offset) => self.ram.write_work(offset, value),
            MappedAddress::HighRam(offset) => self.ram.high_ram[offset as usize] = value,
            MappedAddress::VideoRam(address) => self.video.write_memory(address, value),
            MappedAddress::JoypadRegister => self.joypad.write_register(value),
            MappedAddress::SerialTransferRegister(register) => match register {
                serial_transfer::Register::Data => self.serial.data = value,
                serial_transfer::Register::Control => {
                    self.serial.control = serial_transfer::Control::from_bits_retain(value);
                    self.serial.start_transfer();
                }
            },
            MappedAddress::TimerRegister(register) => {
                self.timers.write_register(register, value);
            }
            MappedAddress::InterruptRegister(register) => match register {
                interrupts::Register::Enabled => {
                    self.interrupts.enabled = interrupts::InterruptFlags::from_bits_retain(value)
                }
                interrupts::Register::Requested => {
                    self.interrupts.requested = interrupts::InterruptFlags::from_bits_retain(value)
                }
            },
            MappedAddress::AudioRegister(address) => self.audio.write_register(address, value),
            MappedAddress::AudioWaveRam(offset) => self.audio.write_wave_ram(offset, value),
            MappedAddress::VideoRegister(register) => self.video.write_register(register, value),
            MappedAddress::BeginDmaTransfer => self.oam_dma_transfer(value),
            MappedAddress::SpeedSwitch => {
                if self.cgb {
                    self.speed.armed = value & 1 != 0;
                }
            }
            MappedAddress::HdmaRegister(register) => {
                if self.cgb {
                    self.write_hdma_register(register, value);
                }
            }
            MappedAddress::WorkRamBankSelect => {
                if self.cgb {
                    self.ram.write_bank_select(value);
                }
            }

            MappedAddress::BootRomDisable | MappedAddress::Unmapped => {}
        }
    }
}
