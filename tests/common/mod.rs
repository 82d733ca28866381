#![allow(dead_code)]

use dotmatrix::game_boy::{cartridge::Cartridge, GameBoy};

/// Build a ROM image with a valid header: "TEST" title, the given mapper
/// type and size codes, and correct checksums. The body is all NOPs.
pub fn build_rom(cartridge_type: u8, rom_size_code: u8, ram_size_code: u8) -> Vec<u8> {
    let banks = 2usize << rom_size_code;
    let mut rom = vec![0u8; banks * 0x4000];

    rom[0x134..0x138].copy_from_slice(b"TEST");
    rom[0x147] = cartridge_type;
    rom[0x148] = rom_size_code;
    rom[0x149] = ram_size_code;

    fix_checksums(&mut rom);
    rom
}

/// Place a program at the entry point (0x100, where execution starts).
pub fn with_program(mut rom: Vec<u8>, program: &[u8]) -> Vec<u8> {
    rom[0x100..0x100 + program.len()].copy_from_slice(program);
    fix_checksums(&mut rom);
    rom
}

/// Stamp each 16 KiB bank with its own number at offset 0, so tests can
/// tell which bank a read went through.
pub fn stamp_banks(mut rom: Vec<u8>) -> Vec<u8> {
    for bank in 0..rom.len() / 0x4000 {
        rom[bank * 0x4000] = bank as u8;
    }
    fix_checksums(&mut rom);
    rom
}

pub fn fix_checksums(rom: &mut [u8]) {
    let mut header: u8 = 0;
    for byte in &rom[0x134..=0x14c] {
        header = header.wrapping_sub(*byte).wrapping_sub(1);
    }
    rom[0x14d] = header;

    rom[0x14e] = 0;
    rom[0x14f] = 0;
    let global = rom
        .iter()
        .fold(0u16, |sum, byte| sum.wrapping_add(*byte as u16));
    rom[0x14e..0x150].copy_from_slice(&global.to_be_bytes());
}

pub fn cartridge(rom: Vec<u8>) -> Cartridge {
    Cartridge::new(rom, None).expect("test rom should parse")
}

pub fn game_boy(rom: Vec<u8>) -> GameBoy {
    GameBoy::new(cartridge(rom))
}

/// A 32 KiB no-mapper ROM running the given program.
pub fn game_boy_with_program(program: &[u8]) -> GameBoy {
    game_boy(with_program(build_rom(0x00, 0, 0), program))
}
