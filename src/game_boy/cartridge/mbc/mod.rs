pub mod mbc1;
pub mod mbc2;
pub mod mbc3;
pub mod mbc5;
pub mod no_mbc;

use super::super::cpu::cycles::Cycles;

pub enum Mbc {
    NoMbc(no_mbc::NoMbc),
    Mbc1(mbc1::Mbc1),
    Mbc2(mbc2::Mbc2),
    Mbc3(mbc3::Mbc3),
    Mbc5(mbc5::Mbc5),
}

impl Mbc {
    pub fn ram(&self) -> Option<Vec<u8>> {
        match self {
            Mbc::NoMbc(m) => m.ram(),
            Mbc::Mbc1(m) => m.ram(),
            Mbc::Mbc2(m) => m.ram(),
            Mbc::Mbc3(m) => m.ram(),
            Mbc::Mbc5(m) => m.ram(),
        }
    }

    pub fn read(&self, rom: &[u8], address: u16) -> u8 {
        match self {
            Mbc::NoMbc(m) => m.read(rom, address),
            Mbc::Mbc1(m) => m.read(rom, address),
            Mbc::Mbc2(m) => m.read(rom, address),
            Mbc::Mbc3(m) => m.read(rom, address),
            Mbc::Mbc5(m) => m.read(rom, address),
        }
    }

    /// Returns true when the write landed in external RAM, so the owner can
    /// mark the save image dirty.
    pub fn write(&mut self, address: u16, value: u8) -> bool {
        match self {
            Mbc::NoMbc(m) => m.write(address, value),
            Mbc::Mbc1(m) => m.write(address, value),
            Mbc::Mbc2(m) => m.write(address, value),
            Mbc::Mbc3(m) => m.write(address, value),
            Mbc::Mbc5(m) => m.write(address, value),
        }
    }

    pub fn tick(&mut self, cycles: Cycles) {
        if let Mbc::Mbc3(m) = self {
            m.tick(cycles);
        }
    }
}

/// External RAM buffer sized by the header's RAM-size code, preloaded from
/// a saved image when one is supplied.
pub(super) fn external_ram(size: usize, save_data: Option<Vec<u8>>) -> Vec<u8> {
    let mut ram = vec![0; size];
    if let Some(data) = save_data {
        let len = data.len().min(ram.len());
        ram[..len].copy_from_slice(&data[..len]);
    }
    ram
}
