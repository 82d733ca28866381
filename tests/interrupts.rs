mod common;

use common::game_boy_with_program;
use dotmatrix::game_boy::cpu::cycles::Cycles;
use dotmatrix::game_boy::cpu::InterruptMasterEnable;
use dotmatrix::game_boy::interrupts::InterruptFlags;

#[test]
fn service_sequence_pushes_pc_and_jumps_to_the_vector() {
    let mut gb = game_boy_with_program(&[0x00; 16]);
    gb.cpu_mut().interrupt_master_enable = InterruptMasterEnable::Enabled;

    // VBlank is requested at boot; enable it
    gb.memory_mapped_mut().write(0xffff, 0x01);
    let sp_before = gb.cpu().stack_pointer;

    let cycles = gb.step();

    assert_eq!(cycles, Cycles(20));
    assert_eq!(gb.cpu().program_counter, 0x0040);
    assert_eq!(
        gb.cpu().interrupt_master_enable,
        InterruptMasterEnable::Disabled
    );
    assert_eq!(gb.cpu().stack_pointer, sp_before - 2);

    // The old PC sits on the stack little-endian
    let sp = gb.cpu().stack_pointer;
    assert_eq!(gb.memory_mapped().read(sp), 0x00);
    assert_eq!(gb.memory_mapped().read(sp + 1), 0x01);

    // The serviced request is gone
    assert!(!gb
        .interrupts()
        .requested
        .contains(InterruptFlags::VIDEO_BETWEEN_FRAMES));
}

#[test]
fn priority_runs_high_to_low() {
    let mut gb = game_boy_with_program(&[0x00; 16]);
    gb.cpu_mut().interrupt_master_enable = InterruptMasterEnable::Enabled;

    // Timer and serial both pending and enabled
    gb.memory_mapped_mut().write(0xff0f, 0x0c);
    gb.memory_mapped_mut().write(0xffff, 0x0c);

    gb.step();
    assert_eq!(gb.cpu().program_counter, 0x0050);

    gb.cpu_mut().interrupt_master_enable = InterruptMasterEnable::Enabled;
    gb.step();
    assert_eq!(gb.cpu().program_counter, 0x0058);
}

#[test]
fn ei_takes_effect_after_the_next_instruction() {
    // ei / nop / nop...
    let mut gb = game_boy_with_program(&[0xfb, 0x00, 0x00, 0x00]);
    gb.memory_mapped_mut().write(0xffff, 0x01); // VBlank pending at boot

    gb.step(); // ei
    assert_eq!(gb.cpu().program_counter, 0x0101);

    gb.step(); // the shadow instruction still runs
    assert_eq!(gb.cpu().program_counter, 0x0102);
    assert_eq!(
        gb.cpu().interrupt_master_enable,
        InterruptMasterEnable::Enabled
    );

    gb.step(); // now the interrupt is taken
    assert_eq!(gb.cpu().program_counter, 0x0040);
}

#[test]
fn di_masks_immediately() {
    // di / nop
    let mut gb = game_boy_with_program(&[0xf3, 0x00]);
    gb.cpu_mut().interrupt_master_enable = InterruptMasterEnable::Enabled;
    gb.memory_mapped_mut().write(0xff0f, 0x00);
    gb.memory_mapped_mut().write(0xffff, 0x01);

    gb.step(); // di
    gb.memory_mapped_mut().write(0xff0f, 0x01);
    gb.step(); // nop, not the vector

    assert_eq!(gb.cpu().program_counter, 0x0102);
}

#[test]
fn halt_idles_until_an_interrupt_arrives() {
    // halt / inc a
    let mut gb = game_boy_with_program(&[0x76, 0x3c]);
    gb.memory_mapped_mut().write(0xff0f, 0x00); // nothing pending

    gb.step(); // halt
    assert!(gb.cpu().halted);

    let cycles = gb.step();
    assert!(gb.cpu().halted);
    assert_eq!(cycles, Cycles(4));
    assert_eq!(gb.cpu().program_counter, 0x0101);

    // An enabled pending interrupt wakes the CPU even with IME off
    gb.memory_mapped_mut().write(0xffff, 0x04);
    gb.memory_mapped_mut().write(0xff0f, 0x04);

    gb.step();
    assert!(!gb.cpu().halted);
    assert_eq!(gb.cpu().a, 0x01 + 1); // boot value plus the inc
}

#[test]
fn halt_with_masked_pending_interrupt_repeats_a_fetch() {
    // halt / inc a, with a masked interrupt already pending
    let mut gb = game_boy_with_program(&[0x76, 0x3c, 0x00]);
    let a_before = gb.cpu().a;
    gb.memory_mapped_mut().write(0xffff, 0x01); // VBlank pending at boot, IME off

    gb.step(); // halt falls through without halting
    assert!(!gb.cpu().halted);

    gb.step(); // inc a, pc stuck
    assert_eq!(gb.cpu().program_counter, 0x0101);

    gb.step(); // inc a again
    assert_eq!(gb.cpu().program_counter, 0x0102);
    assert_eq!(gb.cpu().a, a_before.wrapping_add(2));
}
