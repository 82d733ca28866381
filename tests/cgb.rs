mod common;

use common::{build_rom, fix_checksums, game_boy};
use dotmatrix::game_boy::GameBoy;

/// A 32 KiB color-flagged ROM running the given program.
fn color_game_boy(program: &[u8]) -> GameBoy {
    let mut rom = build_rom(0x00, 0, 0);
    rom[0x143] = 0x80;
    rom[0x100..0x100 + program.len()].copy_from_slice(program);
    fix_checksums(&mut rom);
    game_boy(rom)
}

#[test]
fn boots_with_the_color_accumulator() {
    let gb = color_game_boy(&[0x00]);
    assert_eq!(gb.cpu().a, 0x11);
}

#[test]
fn work_ram_banks_switch_through_svbk() {
    let mut gb = color_game_boy(&[0x00]);
    let memory = gb.memory_mapped_mut();

    memory.write(0xff70, 2);
    memory.write(0xd000, 0xaa);

    memory.write(0xff70, 3);
    memory.write(0xd000, 0xbb);

    memory.write(0xff70, 2);
    assert_eq!(memory.read(0xd000), 0xaa);

    // The lower half is bank 0 regardless of the selector
    memory.write(0xc000, 0x11);
    memory.write(0xff70, 5);
    assert_eq!(memory.read(0xc000), 0x11);

    // Bank 0 can't be selected for the upper half
    memory.write(0xff70, 0);
    assert_eq!(memory.read(0xff70) & 0x07, 1);
}

#[test]
fn svbk_is_inert_on_plain_hardware() {
    let mut gb = common::game_boy_with_program(&[0x00]);
    let memory = gb.memory_mapped_mut();

    memory.write(0xd000, 0xaa);
    memory.write(0xff70, 3);
    assert_eq!(memory.read(0xff70), 0xff);
    assert_eq!(memory.read(0xd000), 0xaa);
}

#[test]
fn vram_bank_one_holds_tile_attributes() {
    let mut gb = color_game_boy(&[0x00]);
    let memory = gb.memory_mapped_mut();

    memory.write(0x9800, 0x12); // tile index, bank 0

    memory.write(0xff4f, 0x01);
    memory.write(0x9800, 0x07); // attributes for the same entry
    assert_eq!(memory.read(0x9800), 0x07);
    assert_eq!(memory.read(0xff4f), 0xff);

    memory.write(0xff4f, 0x00);
    assert_eq!(memory.read(0x9800), 0x12);
}

#[test]
fn color_palette_ports_auto_increment() {
    let mut gb = color_game_boy(&[0x00]);
    let memory = gb.memory_mapped_mut();

    memory.write(0xff68, 0x80); // index 0, auto-increment
    memory.write(0xff69, 0x1f); // palette 0 color 0: red, low byte
    memory.write(0xff69, 0x00);

    memory.write(0xff68, 0x00);
    assert_eq!(memory.read(0xff69), 0x1f);
    memory.write(0xff68, 0x01);
    assert_eq!(memory.read(0xff69), 0x00);
}

#[test]
fn stop_engages_an_armed_speed_switch() {
    // two stops, each with its pad byte
    let mut gb = color_game_boy(&[0x10, 0x00, 0x10, 0x00]);
    assert!(!gb.double_speed());

    gb.memory_mapped_mut().write(0xff4d, 0x01);
    gb.step();

    assert!(gb.double_speed());
    assert!(!gb.cpu().stopped);
    assert_eq!(gb.memory_mapped().read(0xff4d) & 0x81, 0x80);

    // A second switch goes back to single speed
    gb.memory_mapped_mut().write(0xff4d, 0x01);
    gb.step();
    assert!(!gb.double_speed());
}

#[test]
fn stop_without_an_armed_switch_stops_the_cpu() {
    let mut gb = color_game_boy(&[0x10, 0x00, 0x00]);

    gb.step();
    assert!(gb.cpu().stopped);
}

#[test]
fn general_purpose_vram_dma_copies_immediately() {
    let mut gb = color_game_boy(&[0x00]);
    let memory = gb.memory_mapped_mut();

    for i in 0..32u16 {
        memory.write(0xc000 + i, i as u8 + 1);
    }

    memory.write(0xff51, 0xc0); // source 0xc000
    memory.write(0xff52, 0x00);
    memory.write(0xff53, 0x00); // destination 0x8000
    memory.write(0xff54, 0x00);
    memory.write(0xff55, 0x01); // two blocks, general purpose

    for i in 0..32u16 {
        assert_eq!(memory.read(0x8000 + i), i as u8 + 1);
    }
    assert_eq!(memory.read(0xff55), 0xff); // transfer finished
}

#[test]
fn hblank_vram_dma_moves_one_block_per_hblank() {
    let mut gb = color_game_boy(&[0x00]);

    for i in 0..32u16 {
        gb.memory_mapped_mut().write(0xc000 + i, 0x55);
    }

    gb.memory_mapped_mut().write(0xff51, 0xc0);
    gb.memory_mapped_mut().write(0xff52, 0x00);
    gb.memory_mapped_mut().write(0xff53, 0x00);
    gb.memory_mapped_mut().write(0xff54, 0x00);
    gb.memory_mapped_mut().write(0xff55, 0x81); // two blocks, per hblank

    // Nothing moves until a horizontal blank comes around
    assert_eq!(gb.memory_mapped().read(0x8000), 0x00);

    // Run through the first scanline's drawing phase
    for _ in 0..(252 / 4) + 1 {
        gb.step();
    }
    assert_eq!(gb.memory_mapped().read(0x8000), 0x55);
    assert_eq!(gb.memory_mapped().read(0x8010), 0x00);

    // And the next line finishes the transfer
    for _ in 0..456 / 4 {
        gb.step();
    }
    assert_eq!(gb.memory_mapped().read(0x8010), 0x55);
    assert_eq!(gb.memory_mapped().read(0xff55), 0xff);
}

#[test]
fn cgb_registers_hide_on_plain_hardware() {
    let mut gb = common::game_boy_with_program(&[0x00]);
    let memory = gb.memory_mapped_mut();

    for address in [0xff4d, 0xff4f, 0xff55, 0xff68, 0xff69, 0xff6a, 0xff6b] {
        assert_eq!(memory.read(address), 0xff);
    }

    memory.write(0xff4d, 0x01);
    assert_eq!(memory.read(0xff4d), 0xff);
}
