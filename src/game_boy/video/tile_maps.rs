use core::fmt;

use bitflags::bitflags;

use super::tiles::TileIndex;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TileMapId(pub u8);

impl fmt::Display for TileMapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tile Map #{}", self.0)
    }
}

/// Per-tile attributes, stored in VRAM bank 1 on the Game Boy Color.
#[derive(Clone, Copy)]
pub struct Attributes(pub u8);

bitflags! {
    impl Attributes: u8 {
        const PRIORITY = 0b1000_0000;
        const FLIP_Y = 0b0100_0000;
        const FLIP_X = 0b0010_0000;
        const BANK = 0b0000_1000;
        const PALETTE = 0b0000_0111;
    }
}

impl Attributes {
    pub fn priority(&self) -> bool {
        self.contains(Attributes::PRIORITY)
    }

    pub fn flip_y(&self) -> bool {
        self.contains(Attributes::FLIP_Y)
    }

    pub fn flip_x(&self) -> bool {
        self.contains(Attributes::FLIP_X)
    }

    pub fn bank(&self) -> u8 {
        (self.0 >> 3) & 1
    }

    pub fn palette(&self) -> u8 {
        self.0 & 0x07
    }
}

/// A 32x32 grid of tile indices, with a parallel attribute plane in color
/// mode.
#[derive(Copy, Clone)]
pub struct TileMap {
    pub tiles: [u8; 0x400],
    pub attributes: [u8; 0x400],
}

impl TileMap {
    pub fn new() -> Self {
        Self {
            tiles: [0; 0x400],
            attributes: [0; 0x400],
        }
    }

    pub fn tile(&self, x: u8, y: u8) -> TileIndex {
        TileIndex(self.tiles[y as usize * 32 + x as usize])
    }

    pub fn attributes(&self, x: u8, y: u8) -> Attributes {
        Attributes(self.attributes[y as usize * 32 + x as usize])
    }
}
