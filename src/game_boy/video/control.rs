use bitflags::bitflags;

use super::sprites::SpriteSize;
use super::tile_maps::TileMapId;
use super::tiles::TileAddressMode;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Control: u8 {
        const VIDEO_ENABLE                 = 0b10000000;
        const WINDOW_TILE_MAP              = 0b01000000;
        const WINDOW_ENABLE                = 0b00100000;
        const TILE_DATA                    = 0b00010000;
        const BACKGROUND_TILE_MAP          = 0b00001000;
        const SPRITE_SIZE                  = 0b00000100;
        const SPRITE_ENABLE                = 0b00000010;
        const BACKGROUND_AND_WINDOW_ENABLE = 0b00000001;
    }
}

impl Control {
    pub fn video_enabled(&self) -> bool {
        self.contains(Control::VIDEO_ENABLE)
    }

    pub fn window_enabled(&self) -> bool {
        self.contains(Control::WINDOW_ENABLE)
    }

    pub fn sprites_enabled(&self) -> bool {
        self.contains(Control::SPRITE_ENABLE)
    }

    /// On DMG this blanks the background and window; in color mode the same
    /// bit instead demotes background priority below sprites.
    pub fn background_and_window_enabled(&self) -> bool {
        self.contains(Control::BACKGROUND_AND_WINDOW_ENABLE)
    }

    pub fn window_tile_map(&self) -> TileMapId {
        if self.contains(Control::WINDOW_TILE_MAP) {
            TileMapId(1)
        } else {
            TileMapId(0)
        }
    }

    pub fn background_tile_map(&self) -> TileMapId {
        if self.contains(Control::BACKGROUND_TILE_MAP) {
            TileMapId(1)
        } else {
            TileMapId(0)
        }
    }

    pub fn tile_address_mode(&self) -> TileAddressMode {
        if self.contains(Control::TILE_DATA) {
            TileAddressMode::Block0Block1
        } else {
            TileAddressMode::Block2Block1
        }
    }

    pub fn sprite_size(&self) -> SpriteSize {
        if self.contains(Control::SPRITE_SIZE) {
            SpriteSize::Double
        } else {
            SpriteSize::Single
        }
    }
}

impl Default for Control {
    fn default() -> Self {
        // Post-boot LCDC: display on, unsigned tile data, background on
        Control::VIDEO_ENABLE | Control::TILE_DATA | Control::BACKGROUND_AND_WINDOW_ENABLE
    }
}
