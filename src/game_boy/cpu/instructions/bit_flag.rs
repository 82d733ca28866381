use core::fmt;

use super::Target8;

/// CB-prefixed single-bit operations.
pub enum BitFlag {
    Test(u8, Target8),
    Clear(u8, Target8),
    Set(u8, Target8),
}

impl BitFlag {
    /// Decode 0x40-0xff of the CB table; the operand register cycles every
    /// column and the bit number every eight opcodes.
    pub fn decode(op: u8) -> Self {
        let bit = (op >> 3) & 0b111;
        let target = column_target(op);

        match op {
            0x40..=0x7f => Self::Test(bit, target),
            0x80..=0xbf => Self::Clear(bit, target),
            _ => Self::Set(bit, target),
        }
    }
}

pub(super) fn column_target(op: u8) -> Target8 {
    match op & 0b111 {
        0 => Target8::b(),
        1 => Target8::c(),
        2 => Target8::d(),
        3 => Target8::e(),
        4 => Target8::h(),
        5 => Target8::l(),
        6 => Target8::deref_hl(),
        _ => Target8::a(),
    }
}

impl fmt::Display for BitFlag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Test(bit, target) => write!(f, "bit {}, {}", bit, target),
            Self::Clear(bit, target) => write!(f, "res {}, {}", bit, target),
            Self::Set(bit, target) => write!(f, "set {}, {}", bit, target),
        }
    }
}
