mod common;

use common::game_boy_with_program;
use dotmatrix::game_boy::cpu::cycles::Cycles;
use dotmatrix::game_boy::cpu::Flags;

#[test]
fn nops_then_jump() {
    // nop / nop / jp 0x0150
    let mut gb = game_boy_with_program(&[0x00, 0x00, 0xc3, 0x50, 0x01]);

    let cycles = gb.step() + gb.step() + gb.step();

    assert_eq!(gb.cpu().program_counter, 0x0150);
    assert_eq!(cycles, Cycles(24));
}

#[test]
fn daa_adjusts_bcd_addition() {
    // ld a, 0x15 / ld b, 0x27 / add a, b / daa
    let mut gb = game_boy_with_program(&[0x3e, 0x15, 0x06, 0x27, 0x80, 0x27]);

    for _ in 0..4 {
        gb.step();
    }

    assert_eq!(gb.cpu().a, 0x42);
    assert_eq!(gb.cpu().flags, Flags::empty());
}

#[test]
fn push_pop_round_trips() {
    // push af / pop bc
    let mut gb = game_boy_with_program(&[0xf5, 0xc1]);
    gb.cpu_mut().a = 0x5a;
    gb.cpu_mut().flags = Flags::ZERO | Flags::CARRY;

    gb.step();
    gb.step();

    assert_eq!(gb.cpu().b, 0x5a);
    assert_eq!(gb.cpu().c, 0x90);
}

#[test]
fn pop_af_zeroes_the_low_nibble() {
    // ld bc, 0xabcd / push bc / pop af
    let mut gb = game_boy_with_program(&[0x01, 0xcd, 0xab, 0xc5, 0xf1]);

    for _ in 0..3 {
        gb.step();
    }

    assert_eq!(gb.cpu().a, 0xab);
    assert_eq!(gb.cpu().flags.bits(), 0xc0);
    assert_eq!(
        gb.cpu().get_register16(dotmatrix::game_boy::cpu::Register16::Af),
        0xabc0
    );
}

#[test]
fn add_sp_carries_on_the_low_byte() {
    // ld sp, 0x00ff / add sp, 1
    let mut gb = game_boy_with_program(&[0x31, 0xff, 0x00, 0xe8, 0x01]);

    gb.step();
    let cycles = gb.step();

    assert_eq!(gb.cpu().stack_pointer, 0x0100);
    assert_eq!(gb.cpu().flags, Flags::HALF_CARRY | Flags::CARRY);
    assert_eq!(cycles, Cycles(16));
}

#[test]
fn ld_hl_sp_offset_sets_flags_without_zero() {
    // ld sp, 0x0005 / ld hl, sp-2
    let mut gb = game_boy_with_program(&[0x31, 0x05, 0x00, 0xf8, 0xfe]);

    gb.step();
    let cycles = gb.step();

    assert_eq!(
        gb.cpu().get_register16(dotmatrix::game_boy::cpu::Register16::Hl),
        0x0003
    );
    assert!(!gb.cpu().flags.contains(Flags::ZERO));
    assert_eq!(cycles, Cycles(12));
}

#[test]
fn add_hl_preserves_zero_flag() {
    // ld hl, 0x0fff / ld bc, 0x0001 / add hl, bc
    let mut gb = game_boy_with_program(&[0x21, 0xff, 0x0f, 0x01, 0x01, 0x00, 0x09]);
    gb.cpu_mut().flags = Flags::ZERO;

    for _ in 0..3 {
        gb.step();
    }

    assert_eq!(
        gb.cpu().get_register16(dotmatrix::game_boy::cpu::Register16::Hl),
        0x1000
    );
    assert_eq!(gb.cpu().flags, Flags::ZERO | Flags::HALF_CARRY);
}

#[test]
fn accumulator_rotates_clear_zero() {
    // rlca with a = 0
    let mut gb = game_boy_with_program(&[0x07]);
    gb.cpu_mut().a = 0;
    gb.cpu_mut().flags = Flags::ZERO;

    gb.step();

    assert!(!gb.cpu().flags.contains(Flags::ZERO));
}

#[test]
fn cb_rotate_sets_zero_normally() {
    // rlc b with b = 0
    let mut gb = game_boy_with_program(&[0xcb, 0x00]);
    gb.cpu_mut().b = 0;

    let cycles = gb.step();

    assert!(gb.cpu().flags.contains(Flags::ZERO));
    assert_eq!(cycles, Cycles(8));
}

#[test]
fn bit_test_preserves_carry() {
    // bit 7, a with a = 0
    let mut gb = game_boy_with_program(&[0xcb, 0x7f]);
    gb.cpu_mut().a = 0;
    gb.cpu_mut().flags = Flags::CARRY;

    gb.step();

    let flags = gb.cpu().flags;
    assert!(flags.contains(Flags::ZERO));
    assert!(flags.contains(Flags::HALF_CARRY));
    assert!(flags.contains(Flags::CARRY));
    assert!(!flags.contains(Flags::NEGATIVE));
}

#[test]
fn read_modify_write_through_hl() {
    // ld hl, 0xc000 / ld [hl], 0x0f / inc [hl] / set 7, [hl]
    let mut gb = game_boy_with_program(&[
        0x21, 0x00, 0xc0, 0x36, 0x0f, 0x34, 0xcb, 0xfe,
    ]);

    assert_eq!(gb.step(), Cycles(12)); // ld hl, d16
    assert_eq!(gb.step(), Cycles(12)); // ld [hl], d8
    assert_eq!(gb.step(), Cycles(12)); // inc [hl]
    assert_eq!(gb.step(), Cycles(16)); // set 7, [hl]

    assert_eq!(gb.memory_mapped().read(0xc000), 0x90);
    assert!(gb.cpu().flags.contains(Flags::HALF_CARRY)); // 0x0f + 1
}

#[test]
fn conditional_jump_cycle_counts() {
    // jr nz, +2 taken, then jr nz, -2 untaken
    let mut gb = game_boy_with_program(&[0x20, 0x00, 0x20, 0xfe]);

    gb.cpu_mut().flags = Flags::empty();
    assert_eq!(gb.step(), Cycles(12)); // taken

    gb.cpu_mut().flags = Flags::ZERO;
    assert_eq!(gb.step(), Cycles(8)); // untaken
}

#[test]
fn call_and_ret_cycle_counts() {
    // call a subroutine placed in wram; it returns immediately
    let mut gb = game_boy_with_program(&[0xcd, 0x00, 0xc0]);
    gb.memory_mapped_mut().write(0xc000, 0xc9); // ret

    let sp_before = gb.cpu().stack_pointer;

    assert_eq!(gb.step(), Cycles(24));
    assert_eq!(gb.cpu().program_counter, 0xc000);
    assert_eq!(gb.cpu().stack_pointer, sp_before.wrapping_sub(2));

    assert_eq!(gb.step(), Cycles(16));
    assert_eq!(gb.cpu().program_counter, 0x0103);
    assert_eq!(gb.cpu().stack_pointer, sp_before);
}

#[test]
fn undefined_opcode_locks_the_cpu() {
    let mut gb = game_boy_with_program(&[0xd3, 0x00, 0x00]);

    gb.step();
    assert!(gb.cpu().locked);

    let pc = gb.cpu().program_counter;
    for _ in 0..8 {
        gb.step();
    }
    assert_eq!(gb.cpu().program_counter, pc);
}

#[test]
fn high_ram_loads() {
    // ld a, 0x77 / ldh [0x80], a / ldh a, [0x80] into b via ld b, a
    let mut gb = game_boy_with_program(&[0x3e, 0x77, 0xe0, 0x80, 0xf0, 0x80, 0x47]);

    gb.step();
    assert_eq!(gb.step(), Cycles(12)); // ldh [a8], a
    assert_eq!(gb.step(), Cycles(12)); // ldh a, [a8]
    gb.step();

    assert_eq!(gb.cpu().b, 0x77);
    assert_eq!(gb.memory_mapped().read(0xff80), 0x77);
}
