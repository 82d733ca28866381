//! Game Boy / Game Boy Color emulation core.
//!
//! This crate contains the platform-agnostic machine: LR35902 CPU, memory
//! map, cartridge mappers, video, timers and interrupts. Hosts drive it
//! through the [`session`] facade, one frame at a time, and take the
//! rendered screen away as RGBA bytes.

pub mod game_boy;
pub mod session;

pub use session::{load, Button, SaveKey, SaveStore, Session};
