mod common;

use common::{build_rom, cartridge, stamp_banks};
use dotmatrix::game_boy::cartridge::{Cartridge, CartridgeError};
use dotmatrix::game_boy::cpu::cycles::Cycles;

#[test]
fn parses_header_fields() {
    let cart = cartridge(build_rom(0x03, 1, 3));

    assert_eq!(cart.title(), "TEST");
    assert!(cart.has_battery());
    assert!(!cart.supports_cgb());
    assert_eq!(cart.header().rom_banks, 4);
    assert_eq!(cart.header().ram_size, 0x8000);
}

#[test]
fn cgb_flag_requires_defined_values() {
    let mut rom = build_rom(0x00, 0, 0);
    rom[0x143] = 0x42; // stray byte, not a color cartridge
    common::fix_checksums(&mut rom);
    assert!(!cartridge(rom).supports_cgb());

    let mut rom = build_rom(0x00, 0, 0);
    rom[0x143] = 0xc0;
    common::fix_checksums(&mut rom);
    assert!(cartridge(rom).supports_cgb());
}

#[test]
fn rejects_unknown_cartridge_type() {
    let rom = build_rom(0x0b, 0, 0);
    assert_eq!(
        Cartridge::new(rom, None).err().unwrap(),
        CartridgeError::UnsupportedCartridge { code: 0x0b }
    );
}

#[test]
fn rejects_undersized_rom() {
    let rom = vec![0u8; 0x4000];
    assert_eq!(
        Cartridge::new(rom, None).err().unwrap(),
        CartridgeError::InvalidRomSize(0x4000)
    );
}

#[test]
fn rejects_ragged_rom() {
    let rom = vec![0u8; 0x8000 + 5];
    assert_eq!(
        Cartridge::new(rom, None).err().unwrap(),
        CartridgeError::InvalidRomSize(0x8000 + 5)
    );
}

#[test]
fn rejects_rom_shorter_than_header_declares() {
    let mut rom = build_rom(0x00, 0, 0);
    rom[0x148] = 2; // claims 8 banks, image has 2
    common::fix_checksums(&mut rom);
    assert_eq!(
        Cartridge::new(rom, None).err().unwrap(),
        CartridgeError::DeclaredSizeMismatch {
            len: 0x8000,
            declared: 8 * 0x4000,
        }
    );
}

#[test]
fn plain_rom_ignores_rom_writes() {
    let mut cart = cartridge(stamp_banks(build_rom(0x00, 0, 0)));

    cart.write(0x2000, 0x01);
    assert_eq!(cart.read(0x4000), 1); // still the fixed second bank
}

#[test]
fn plain_rom_with_ram() {
    let mut cart = cartridge(build_rom(0x08, 0, 2));

    cart.write(0xa000, 0x42);
    assert_eq!(cart.read(0xa000), 0x42);
    assert!(cart.ram_dirty());
}

#[test]
fn mbc1_ram_enable_gates_access() {
    let mut cart = cartridge(build_rom(0x02, 4, 2));

    cart.write(0x0000, 0x0a);
    cart.write(0xa000, 0x42);
    assert_eq!(cart.read(0xa000), 0x42);

    cart.write(0x0000, 0x00);
    assert_eq!(cart.read(0xa000), 0xff);
}

#[test]
fn mbc1_zero_low_bank_remaps() {
    // 128 banks so the upper register's bits matter
    let mut cart = cartridge(stamp_banks(build_rom(0x01, 6, 0)));

    for (upper, expected) in [(0u8, 0x01u8), (1, 0x21), (2, 0x41), (3, 0x61)] {
        cart.write(0x4000, upper);
        cart.write(0x2000, 0x00);
        assert_eq!(cart.read(0x4000), expected);
    }

    // A non-zero low field passes through untouched
    cart.write(0x4000, 0x01);
    cart.write(0x2000, 0x12);
    assert_eq!(cart.read(0x4000), 0x32);
}

#[test]
fn mbc1_ram_banking_windows_are_independent() {
    let mut cart = cartridge(build_rom(0x03, 4, 3));

    cart.write(0x0000, 0x0a);
    cart.write(0x6000, 0x01); // RAM banking mode

    for bank in 0..4u8 {
        cart.write(0x4000, bank);
        cart.write(0xa000, 0x10 + bank);
    }
    for bank in 0..4u8 {
        cart.write(0x4000, bank);
        assert_eq!(cart.read(0xa000), 0x10 + bank);
    }
}

#[test]
fn mbc2_register_select_uses_address_bit_8() {
    let mut cart = cartridge(stamp_banks(build_rom(0x05, 2, 0)));

    // Bit 8 clear: RAM enable. Bit 8 set: ROM bank.
    cart.write(0x0000, 0x0a);
    cart.write(0x0100, 0x03);
    assert_eq!(cart.read(0x4000), 3);

    cart.write(0xa000, 0x3f);
    assert_eq!(cart.read(0xa000), 0x0f); // only a nibble is stored

    // The 512 nibbles repeat across the window
    assert_eq!(cart.read(0xa200), 0x0f);
}

#[test]
fn mbc3_latches_clock_on_zero_one_sequence() {
    let mut cart = cartridge(build_rom(0x0f, 0, 0));

    cart.write(0x0000, 0x0a);
    cart.write(0x4000, 0x08); // map the seconds register

    // 61 emulated seconds
    for _ in 0..61 {
        cart.tick(Cycles(4_194_304));
    }

    // Nothing visible until a latch
    assert_eq!(cart.read(0xa000), 0);

    cart.write(0x6000, 0x00);
    cart.write(0x6000, 0x01);
    assert_eq!(cart.read(0xa000), 1);

    cart.write(0x4000, 0x09);
    assert_eq!(cart.read(0xa000), 1); // minutes
}

#[test]
fn mbc3_halt_bit_stops_the_clock() {
    let mut cart = cartridge(build_rom(0x0f, 0, 0));

    cart.write(0x0000, 0x0a);
    cart.write(0x4000, 0x0c);
    cart.write(0xa000, 0x40); // halt

    cart.tick(Cycles(4_194_304 * 2));

    cart.write(0x6000, 0x00);
    cart.write(0x6000, 0x01);
    cart.write(0x4000, 0x08);
    assert_eq!(cart.read(0xa000), 0);
}

#[test]
fn mbc5_has_nine_bank_bits_and_selectable_bank_zero() {
    let mut cart = cartridge(stamp_banks(build_rom(0x19, 8, 0)));

    cart.write(0x2000, 0x34);
    cart.write(0x3000, 0x01);
    // Bank 0x134 of 512; the stamp is its low byte
    assert_eq!(cart.read(0x4000), 0x34);

    cart.write(0x2000, 0x00);
    cart.write(0x3000, 0x00);
    assert_eq!(cart.read(0x4000), 0x00); // bank 0, no remap
}

#[test]
fn ram_writes_mark_the_save_image_dirty() {
    let mut cart = cartridge(build_rom(0x03, 4, 2));
    assert!(!cart.ram_dirty());

    cart.write(0x0000, 0x0a);
    assert!(!cart.ram_dirty()); // register writes don't count

    cart.write(0xa000, 0x01);
    assert!(cart.ram_dirty());

    cart.clear_ram_dirty();
    assert_eq!(cart.ram_image().unwrap()[0], 0x01);
}

#[test]
fn saved_ram_image_restores_contents() {
    let rom = build_rom(0x03, 4, 2);
    let mut cart = Cartridge::new(rom, Some(vec![0x99; 0x2000])).unwrap();

    cart.write(0x0000, 0x0a);
    assert_eq!(cart.read(0xa000), 0x99);
}
