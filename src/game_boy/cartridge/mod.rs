mod mbc;

use log::info;
use thiserror::Error;

use mbc::{mbc1::Mbc1, mbc2::Mbc2, mbc3::Mbc3, mbc5::Mbc5, no_mbc::NoMbc, Mbc};

use super::cpu::cycles::Cycles;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum CartridgeError {
    #[error("unsupported cartridge type {code:#04x}")]
    UnsupportedCartridge { code: u8 },
    #[error("rom is {len} bytes but its header declares {declared}")]
    DeclaredSizeMismatch { len: usize, declared: usize },
    #[error("rom length {0} is not a whole number of 16 KiB banks")]
    InvalidRomSize(usize),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum MbcKind {
    None,
    Mbc1,
    Mbc2,
    Mbc3,
    Mbc5,
}

#[derive(Clone, Debug)]
pub struct Header {
    pub title: String,
    pub cgb: bool,
    pub sgb: bool,
    pub cartridge_type: u8,
    pub rom_banks: usize,
    pub ram_size: usize,
    pub header_checksum: u8,
    pub global_checksum: u16,

    kind: MbcKind,
    pub has_ram: bool,
    pub has_battery: bool,
    pub has_rtc: bool,
    pub has_rumble: bool,
}

impl Header {
    fn parse(rom: &[u8]) -> Result<Header, CartridgeError> {
        if rom.len() < 0x8000 || rom.len() % 0x4000 != 0 {
            return Err(CartridgeError::InvalidRomSize(rom.len()));
        }

        let mut title = String::new();
        for character in rom[0x134..0x143].iter() {
            if *character == 0u8 {
                break;
            }

            title.push(*character as char)
        }

        let cartridge_type = rom[0x147];
        let (kind, has_ram, has_battery, has_rtc, has_rumble) = match cartridge_type {
            0x00 => (MbcKind::None, false, false, false, false),
            0x01 => (MbcKind::Mbc1, false, false, false, false),
            0x02 => (MbcKind::Mbc1, true, false, false, false),
            0x03 => (MbcKind::Mbc1, true, true, false, false),
            0x05 => (MbcKind::Mbc2, true, false, false, false),
            0x06 => (MbcKind::Mbc2, true, true, false, false),
            0x08 => (MbcKind::None, true, false, false, false),
            0x09 => (MbcKind::None, true, true, false, false),
            0x0f => (MbcKind::Mbc3, false, true, true, false),
            0x10 => (MbcKind::Mbc3, true, true, true, false),
            0x11 => (MbcKind::Mbc3, false, false, false, false),
            0x12 => (MbcKind::Mbc3, true, false, false, false),
            0x13 => (MbcKind::Mbc3, true, true, false, false),
            0x19 => (MbcKind::Mbc5, false, false, false, false),
            0x1a => (MbcKind::Mbc5, true, false, false, false),
            0x1b => (MbcKind::Mbc5, true, true, false, false),
            0x1c => (MbcKind::Mbc5, false, false, false, true),
            0x1d => (MbcKind::Mbc5, true, false, false, true),
            0x1e => (MbcKind::Mbc5, true, true, false, true),

            code => return Err(CartridgeError::UnsupportedCartridge { code }),
        };

        let rom_banks = match rom[0x148] {
            code @ 0x00..=0x08 => 2 << code,
            0x52 => 72,
            0x53 => 80,
            0x54 => 96,
            _ => return Err(CartridgeError::InvalidRomSize(rom.len())),
        };

        let declared = rom_banks * 0x4000;
        if rom.len() != declared {
            return Err(CartridgeError::DeclaredSizeMismatch {
                len: rom.len(),
                declared,
            });
        }

        let ram_size = if has_ram && kind != MbcKind::Mbc2 {
            match rom[0x149] {
                1 => 0x800,
                2 => 0x2000,
                3 => 0x8000,
                4 => 0x20000,
                5 => 0x10000,
                _ => 0,
            }
        } else {
            0
        };

        Ok(Header {
            title,
            // Only the two defined values mean color support; homebrew
            // sometimes leaves stray bytes here.
            cgb: matches!(rom[0x143], 0x80 | 0xc0),
            sgb: rom[0x146] == 0x03,
            cartridge_type,
            rom_banks,
            ram_size,
            header_checksum: rom[0x14d],
            global_checksum: u16::from_be_bytes([rom[0x14e], rom[0x14f]]),
            kind,
            has_ram,
            has_battery,
            has_rtc,
            has_rumble,
        })
    }
}

pub struct Cartridge {
    rom: Vec<u8>,
    header: Header,
    mbc: Mbc,
    ram_dirty: bool,
}

impl Cartridge {
    pub fn new(rom: Vec<u8>, save_data: Option<Vec<u8>>) -> Result<Cartridge, CartridgeError> {
        let header = Header::parse(&rom)?;
        let save = if header.has_battery { save_data } else { None };

        let mbc = match header.kind {
            MbcKind::None => Mbc::NoMbc(NoMbc::new(header.ram_size, save)),
            MbcKind::Mbc1 => Mbc::Mbc1(Mbc1::new(header.ram_size, save)),
            MbcKind::Mbc2 => Mbc::Mbc2(Mbc2::new(save)),
            MbcKind::Mbc3 => Mbc::Mbc3(Mbc3::new(header.ram_size, header.has_rtc, save)),
            MbcKind::Mbc5 => Mbc::Mbc5(Mbc5::new(header.ram_size, header.has_rumble, save)),
        };

        info!(
            "loaded \"{}\": {:?}, {} rom banks, {} bytes ram{}{}",
            header.title,
            header.kind,
            header.rom_banks,
            header.ram_size,
            if header.has_battery { ", battery" } else { "" },
            if header.cgb { ", color" } else { "" },
        );

        Ok(Cartridge {
            rom,
            header,
            mbc,
            ram_dirty: false,
        })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn title(&self) -> &str {
        &self.header.title
    }

    pub fn has_battery(&self) -> bool {
        self.header.has_battery
    }

    pub fn supports_cgb(&self) -> bool {
        self.header.cgb
    }

    pub fn header_checksum(&self) -> u8 {
        self.header.header_checksum
    }

    pub fn global_checksum(&self) -> u16 {
        self.header.global_checksum
    }

    /// A copy of the external RAM, sized exactly as the save image format
    /// requires. None when the cartridge has no RAM.
    pub fn ram_image(&self) -> Option<Vec<u8>> {
        self.mbc.ram()
    }

    pub fn ram_dirty(&self) -> bool {
        self.ram_dirty
    }

    pub fn clear_ram_dirty(&mut self) {
        self.ram_dirty = false;
    }

    pub fn read(&self, address: u16) -> u8 {
        self.mbc.read(&self.rom, address)
    }

    pub fn write(&mut self, address: u16, value: u8) {
        if self.mbc.write(address, value) {
            self.ram_dirty = true;
        }
    }

    pub fn tick(&mut self, cycles: Cycles) {
        self.mbc.tick(cycles);
    }
}
