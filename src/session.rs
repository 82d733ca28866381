//! Host-facing facade: load a cartridge, pump frames, inject input, take
//! the framebuffer away and persist battery-backed saves.

use std::io;

use log::warn;

use crate::game_boy::{
    cartridge::{Cartridge, CartridgeError},
    joypad::{self, DirectionalPad},
    video::screen::{NUM_SCANLINES, PIXELS_PER_LINE},
    GameBoy,
};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Button {
    Right,
    Left,
    Up,
    Down,
    A,
    B,
    Select,
    Start,
}

impl From<Button> for joypad::Button {
    fn from(button: Button) -> joypad::Button {
        match button {
            Button::Right => joypad::Button::DirectionalPad(DirectionalPad::Right),
            Button::Left => joypad::Button::DirectionalPad(DirectionalPad::Left),
            Button::Up => joypad::Button::DirectionalPad(DirectionalPad::Up),
            Button::Down => joypad::Button::DirectionalPad(DirectionalPad::Down),
            Button::A => joypad::Button::A,
            Button::B => joypad::Button::B,
            Button::Select => joypad::Button::Select,
            Button::Start => joypad::Button::Start,
        }
    }
}

/// Identifies the save image a cartridge owns. The global checksum keeps
/// two games with the same title apart.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct SaveKey {
    pub title: String,
    pub global_checksum: u16,
}

/// Where battery-backed RAM goes at frame boundaries. The image is a raw
/// copy of the external RAM, no wrapper around it.
pub trait SaveStore {
    fn save(&mut self, key: &SaveKey, ram: &[u8]) -> io::Result<()>;
}

pub struct Session {
    game_boy: GameBoy,
    save_store: Option<Box<dyn SaveStore>>,
}

/// Build a session from a ROM image and, for battery-backed cartridges, a
/// previously saved RAM image.
pub fn load(rom: Vec<u8>, saved_ram: Option<Vec<u8>>) -> Result<Session, CartridgeError> {
    let cartridge = Cartridge::new(rom, saved_ram)?;

    Ok(Session {
        game_boy: GameBoy::new(cartridge),
        save_store: None,
    })
}

impl Session {
    pub fn set_save_store(&mut self, store: Box<dyn SaveStore>) {
        self.save_store = Some(store);
    }

    /// Emulate one frame, then flush the save image if the frame dirtied
    /// it.
    pub fn step_frame(&mut self) {
        self.game_boy.run_frame();
        self.flush_battery_ram();
    }

    pub fn press(&mut self, button: Button) {
        self.game_boy.press_button(button.into());
    }

    pub fn release(&mut self, button: Button) {
        self.game_boy.release_button(button.into());
    }

    /// The most recent completed frame as RGBA8888 bytes, 160x144 pixels
    /// in row-major order.
    pub fn framebuffer(&self) -> Vec<u8> {
        let screen = self.game_boy.screen();
        let mut buffer =
            Vec::with_capacity(PIXELS_PER_LINE as usize * NUM_SCANLINES as usize * 4);

        for y in 0..NUM_SCANLINES {
            for x in 0..PIXELS_PER_LINE {
                let pixel = screen.pixel(x, y);
                buffer.extend_from_slice(&[pixel.r, pixel.g, pixel.b, 0xff]);
            }
        }

        buffer
    }

    pub fn save_key(&self) -> SaveKey {
        let cartridge = self.game_boy.cartridge();
        SaveKey {
            title: cartridge.title().to_string(),
            global_checksum: cartridge.global_checksum(),
        }
    }

    /// A snapshot of the external RAM, for hosts that persist saves
    /// themselves instead of installing a [`SaveStore`].
    pub fn save_ram(&self) -> Option<Vec<u8>> {
        self.game_boy.cartridge().ram_image()
    }

    /// Bytes the game pushed out the serial port since the last call.
    pub fn serial_output(&mut self) -> Vec<u8> {
        self.game_boy.drain_serial_output()
    }

    pub fn game_boy(&self) -> &GameBoy {
        &self.game_boy
    }

    pub fn game_boy_mut(&mut self) -> &mut GameBoy {
        &mut self.game_boy
    }

    fn flush_battery_ram(&mut self) {
        let cartridge = self.game_boy.cartridge();
        if !cartridge.has_battery() || !cartridge.ram_dirty() {
            return;
        }

        let Some(store) = &mut self.save_store else {
            return;
        };
        let Some(ram) = self.game_boy.cartridge().ram_image() else {
            return;
        };

        let key = SaveKey {
            title: self.game_boy.cartridge().title().to_string(),
            global_checksum: self.game_boy.cartridge().global_checksum(),
        };

        match store.save(&key, &ram) {
            // Keep the dirty flag on failure so the next frame retries
            Ok(()) => self.game_boy.cartridge_mut().clear_ram_dirty(),
            Err(error) => warn!("failed to persist save ram for \"{}\": {}", key.title, error),
        }
    }
}
