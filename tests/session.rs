mod common;

use std::io;
use std::sync::{Arc, Mutex};

use common::{build_rom, with_program};
use dotmatrix::{load, Button, SaveKey, SaveStore};

#[derive(Clone, Default)]
struct RecordingStore {
    saves: Arc<Mutex<Vec<(SaveKey, Vec<u8>)>>>,
    fail: Arc<Mutex<bool>>,
}

impl SaveStore for RecordingStore {
    fn save(&mut self, key: &SaveKey, ram: &[u8]) -> io::Result<()> {
        if *self.fail.lock().unwrap() {
            return Err(io::Error::new(io::ErrorKind::Other, "store offline"));
        }
        self.saves.lock().unwrap().push((key.clone(), ram.to_vec()));
        Ok(())
    }
}

/// Enables external RAM, stores 0x42 at its start, then loops forever.
const SAVE_AND_SPIN: &[u8] = &[
    0x3e, 0x0a, // ld a, 0x0a
    0xea, 0x00, 0x00, // ld [0x0000], a
    0x3e, 0x42, // ld a, 0x42
    0xea, 0x00, 0xa0, // ld [0xa000], a
    0x18, 0xfe, // jr -2
];

#[test]
fn framebuffer_is_full_size_rgba() {
    let mut session = load(build_rom(0x00, 0, 0), None).unwrap();
    session.step_frame();

    let frame = session.framebuffer();
    assert_eq!(frame.len(), 160 * 144 * 4);
    assert!(frame.chunks(4).all(|pixel| pixel[3] == 0xff));
}

#[test]
fn reads_are_total_over_the_address_space() {
    let session = load(build_rom(0x00, 0, 0), None).unwrap();
    let memory = session.game_boy().memory_mapped();

    for address in 0..=0xffffu16 {
        memory.read(address);
    }
}

#[test]
fn echo_ram_mirrors_work_ram() {
    let mut session = load(build_rom(0x00, 0, 0), None).unwrap();
    let memory = session.game_boy_mut().memory_mapped_mut();

    memory.write(0xc123, 0x55);
    assert_eq!(memory.read(0xe123), 0x55);

    memory.write(0xfd00, 0xaa);
    assert_eq!(memory.read(0xdd00), 0xaa);

    for address in 0xe000..=0xfdffu16 {
        assert_eq!(memory.read(address), memory.read(address - 0x2000));
    }
}

#[test]
fn unusable_region_reads_open_bus() {
    let session = load(build_rom(0x00, 0, 0), None).unwrap();
    for address in 0xfea0..=0xfeffu16 {
        assert_eq!(session.game_boy().memory_mapped().read(address), 0xff);
    }
}

#[test]
fn dirty_battery_ram_flushes_at_the_frame_boundary() {
    let rom = with_program(build_rom(0x03, 4, 2), SAVE_AND_SPIN);
    let mut session = load(rom, None).unwrap();

    let store = RecordingStore::default();
    session.set_save_store(Box::new(store.clone()));

    session.step_frame();

    let saves = store.saves.lock().unwrap();
    assert_eq!(saves.len(), 1);
    let (key, ram) = &saves[0];
    assert_eq!(key.title, "TEST");
    assert_eq!(key.global_checksum, session.save_key().global_checksum);
    assert_eq!(ram.len(), 0x2000);
    assert_eq!(ram[0], 0x42);

    assert!(!session.game_boy().cartridge().ram_dirty());
}

#[test]
fn failed_saves_keep_the_dirty_flag_for_retry() {
    let rom = with_program(build_rom(0x03, 4, 2), SAVE_AND_SPIN);
    let mut session = load(rom, None).unwrap();

    let store = RecordingStore::default();
    *store.fail.lock().unwrap() = true;
    session.set_save_store(Box::new(store.clone()));

    session.step_frame();
    assert!(session.game_boy().cartridge().ram_dirty());
    assert!(store.saves.lock().unwrap().is_empty());

    // The store comes back and the next frame retries
    *store.fail.lock().unwrap() = false;
    session.step_frame();
    assert!(!session.game_boy().cartridge().ram_dirty());
    assert_eq!(store.saves.lock().unwrap().len(), 1);
}

#[test]
fn cartridges_without_a_battery_never_flush() {
    // Same program, but mapper type without battery backing
    let rom = with_program(build_rom(0x02, 4, 2), SAVE_AND_SPIN);
    let mut session = load(rom, None).unwrap();

    let store = RecordingStore::default();
    session.set_save_store(Box::new(store.clone()));

    session.step_frame();
    assert!(store.saves.lock().unwrap().is_empty());
}

#[test]
fn saved_ram_comes_back_on_load() {
    let rom = build_rom(0x03, 4, 2);
    let mut session = load(rom, Some(vec![0x99; 0x2000])).unwrap();

    session.game_boy_mut().memory_mapped_mut().write(0x0000, 0x0a);
    assert_eq!(session.game_boy().memory_mapped().read(0xa000), 0x99);
}

#[test]
fn buttons_reach_the_joypad_register() {
    let mut session = load(build_rom(0x00, 0, 0), None).unwrap();

    // Select the button group, then press Start
    session
        .game_boy_mut()
        .memory_mapped_mut()
        .write(0xff00, 0x10);
    session.press(Button::Start);

    let value = session.game_boy().memory_mapped().read(0xff00);
    assert_eq!(value & 0x08, 0); // start line pulled low

    // Pressing a selected button raises the joypad interrupt request
    assert_ne!(
        session.game_boy().memory_mapped().read(0xff0f) & 0x10,
        0
    );

    session.release(Button::Start);
    let value = session.game_boy().memory_mapped().read(0xff00);
    assert_eq!(value & 0x08, 0x08);
}

#[test]
fn serial_output_is_captured_for_tests() {
    // ld a, 0x47 / ld [0xff01], a / ld a, 0x81 / ld [0xff02], a / jr -2
    let program = &[
        0x3e, 0x47, 0xe0, 0x01, 0x3e, 0x81, 0xe0, 0x02, 0x18, 0xfe,
    ];
    let rom = with_program(build_rom(0x00, 0, 0), program);
    let mut session = load(rom, None).unwrap();

    session.step_frame();
    assert_eq!(session.serial_output(), b"G");
}
