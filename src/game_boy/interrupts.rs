use bitflags::bitflags;

#[derive(Debug)]
pub enum Register {
    Enabled,
    Requested,
}

/// The five interrupt sources. Priority follows bit order: the lower the
/// bit, the sooner the CPU services it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interrupt {
    VideoBetweenFrames,
    VideoStatus,
    Timer,
    Serial,
    Joypad,
}

bitflags! {
    #[derive(Copy, Clone, Debug)]
    pub struct InterruptFlags: u8 {
        const VIDEO_BETWEEN_FRAMES = 1 << 0;
        const VIDEO_STATUS         = 1 << 1;
        const TIMER                = 1 << 2;
        const SERIAL               = 1 << 3;
        const JOYPAD               = 1 << 4;

        const _OTHER = !0;
    }
}

impl Interrupt {
    fn bit(self) -> u8 {
        match self {
            Interrupt::VideoBetweenFrames => 0,
            Interrupt::VideoStatus => 1,
            Interrupt::Timer => 2,
            Interrupt::Serial => 3,
            Interrupt::Joypad => 4,
        }
    }

    fn from_bit(bit: u32) -> Option<Interrupt> {
        Some(match bit {
            0 => Interrupt::VideoBetweenFrames,
            1 => Interrupt::VideoStatus,
            2 => Interrupt::Timer,
            3 => Interrupt::Serial,
            4 => Interrupt::Joypad,
            _ => return None,
        })
    }

    fn flag(self) -> InterruptFlags {
        InterruptFlags::from_bits_truncate(1 << self.bit())
    }

    /// The handler address the CPU jumps to: 0x40, 0x48 ... 0x60.
    pub fn vector(self) -> u16 {
        0x40 + 8 * self.bit() as u16
    }
}

#[derive(Clone)]
pub struct Registers {
    pub enabled: InterruptFlags,
    pub requested: InterruptFlags,
}

impl Registers {
    pub fn new() -> Self {
        Self {
            enabled: InterruptFlags::empty(),
            // The boot sequence hands control over with a vblank already
            // requested
            requested: InterruptFlags::VIDEO_BETWEEN_FRAMES,
        }
    }

    pub fn request(&mut self, interrupt: Interrupt) {
        self.requested.insert(interrupt.flag());
    }

    /// Drop a request, as the CPU does when it starts servicing it.
    pub fn acknowledge(&mut self, interrupt: Interrupt) {
        self.requested.remove(interrupt.flag());
    }

    /// The interrupt the CPU would service next: the lowest bit set in
    /// both registers.
    pub fn pending(&self) -> Option<Interrupt> {
        let live = (self.enabled & self.requested).bits() & 0x1f;
        Interrupt::from_bit(live.trailing_zeros())
    }
}
