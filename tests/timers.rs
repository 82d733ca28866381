mod common;

use common::game_boy_with_program;
use dotmatrix::game_boy::GameBoy;

fn run_steps(gb: &mut GameBoy, steps: u32) {
    for _ in 0..steps {
        gb.step(); // all NOPs, 4 T-cycles each
    }
}

#[test]
fn divider_ticks_at_16384_hz() {
    let mut gb = game_boy_with_program(&[0x00; 0x100]);

    gb.memory_mapped_mut().write(0xff04, 0x00);
    assert_eq!(gb.memory_mapped().read(0xff04), 0);

    run_steps(&mut gb, 64); // 256 T-cycles
    assert_eq!(gb.memory_mapped().read(0xff04), 1);
}

#[test]
fn divider_write_resets_the_whole_counter() {
    let mut gb = game_boy_with_program(&[0x00; 0x100]);

    run_steps(&mut gb, 100);
    gb.memory_mapped_mut().write(0xff04, 0x5a);
    assert_eq!(gb.memory_mapped().read(0xff04), 0);
}

#[test]
fn tima_counts_at_4096_hz() {
    let mut gb = game_boy_with_program(&[0x00; 0x400]);

    gb.memory_mapped_mut().write(0xff04, 0x00); // align the counter
    gb.memory_mapped_mut().write(0xff07, 0x04); // enable, 4096 Hz

    run_steps(&mut gb, 255); // 1020 T-cycles: one short of the edge
    assert_eq!(gb.memory_mapped().read(0xff05), 0);

    run_steps(&mut gb, 1); // 1024
    assert_eq!(gb.memory_mapped().read(0xff05), 1);
}

#[test]
fn tima_overflow_reloads_from_tma_after_a_delay() {
    let mut gb = game_boy_with_program(&[0x00; 0x400]);

    gb.memory_mapped_mut().write(0xff04, 0x00);
    gb.memory_mapped_mut().write(0xff07, 0x04);
    gb.memory_mapped_mut().write(0xff06, 0x80); // TMA
    gb.memory_mapped_mut().write(0xff05, 0xff);

    run_steps(&mut gb, 256); // the overflow edge

    // During the reload delay TIMA reads zero and no interrupt is out yet
    assert_eq!(gb.memory_mapped().read(0xff05), 0);
    assert_eq!(gb.memory_mapped().read(0xff0f) & 0x04, 0);

    run_steps(&mut gb, 1);
    assert_eq!(gb.memory_mapped().read(0xff05), 0x80);
    assert_eq!(gb.memory_mapped().read(0xff0f) & 0x04, 0x04);
}

#[test]
fn tima_write_during_the_delay_cancels_the_reload() {
    let mut gb = game_boy_with_program(&[0x00; 0x400]);

    gb.memory_mapped_mut().write(0xff04, 0x00);
    gb.memory_mapped_mut().write(0xff07, 0x04);
    gb.memory_mapped_mut().write(0xff06, 0x80);
    gb.memory_mapped_mut().write(0xff05, 0xff);

    run_steps(&mut gb, 256);
    gb.memory_mapped_mut().write(0xff05, 0x12); // cancels the pending reload

    run_steps(&mut gb, 1);
    assert_eq!(gb.memory_mapped().read(0xff05), 0x12);
    assert_eq!(gb.memory_mapped().read(0xff0f) & 0x04, 0);
}

#[test]
fn disabling_the_selected_bit_causes_the_glitch_increment() {
    let mut gb = game_boy_with_program(&[0x00; 0x400]);

    gb.memory_mapped_mut().write(0xff04, 0x00);
    gb.memory_mapped_mut().write(0xff07, 0x04);

    run_steps(&mut gb, 128); // 512 T-cycles: the selected bit is high

    // Disabling the timer while the bit is high clocks TIMA once
    gb.memory_mapped_mut().write(0xff07, 0x00);
    assert_eq!(gb.memory_mapped().read(0xff05), 1);
}
