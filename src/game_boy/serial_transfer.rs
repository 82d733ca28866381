use bitflags::bitflags;

use super::cpu::cycles::Cycles;

/// T-cycles per transferred bit at the internal 8192 Hz clock.
const TCYCLES_PER_BIT: u32 = 512;

#[derive(Debug)]
pub enum Register {
    Data,
    Control,
}

bitflags! {
    #[derive(Copy, Clone, Debug)]
    pub struct Control: u8 {
        const ENABLE         = 0b10000000;
        const INTERNAL_CLOCK = 0b00000001;

        const _OTHER = !0;
    }
}

/// Serial port with no link partner attached: transfers shift 1s in and the
/// outgoing bytes are captured, which is how test programs report results.
pub struct Registers {
    pub data: u8,
    pub control: Control,
    bits_remaining: u8,
    bit_countdown: u32,
    pub output: Vec<u8>,
}

impl Registers {
    pub fn new() -> Self {
        Registers {
            data: 0,
            control: Control::from_bits_retain(0x7e),
            bits_remaining: 0,
            bit_countdown: 0,
            output: Vec::new(),
        }
    }

    /// Called when the SC register is written. Starts a transfer when
    /// ENABLE and INTERNAL_CLOCK are both set; externally-clocked transfers
    /// never complete (there is nobody on the other end of the cable).
    pub fn start_transfer(&mut self) {
        self.bits_remaining = 0;

        if self
            .control
            .contains(Control::ENABLE | Control::INTERNAL_CLOCK)
        {
            self.output.push(self.data);
            self.bits_remaining = 8;
            self.bit_countdown = TCYCLES_PER_BIT;
        }
    }

    /// Advance the transfer clock. Returns true when a transfer completes
    /// and the Serial interrupt should be requested.
    pub fn tick(&mut self, cycles: Cycles) -> bool {
        if self.bits_remaining == 0 {
            return false;
        }

        let mut remaining = cycles.0;
        while remaining > 0 && self.bits_remaining > 0 {
            let step = remaining.min(self.bit_countdown);
            self.bit_countdown -= step;
            remaining -= step;

            if self.bit_countdown == 0 {
                // Disconnected link: a set bit shifts in for each bit out
                self.data = (self.data << 1) | 1;
                self.bits_remaining -= 1;
                self.bit_countdown = TCYCLES_PER_BIT;
            }
        }

        if self.bits_remaining == 0 {
            self.control.remove(Control::ENABLE);
            true
        } else {
            false
        }
    }
}
