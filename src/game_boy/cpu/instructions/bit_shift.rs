use core::fmt;

use super::bit_flag::column_target;
use super::Target8;

pub enum BitShift {
    /// Register A optimised variants, not within the cb prefix.
    RotateA(Direction, Carry),
    Rotate(Direction, Carry, Target8),
    ShiftArithmetical(Direction, Target8),
    ShiftRightLogical(Target8),
    Swap(Target8),
}

#[derive(Clone, Copy)]
pub enum Direction {
    Left,
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Left => write!(f, "l"),
            Self::Right => write!(f, "r"),
        }
    }
}

#[derive(Clone, Copy)]
pub enum Carry {
    /// The old carry rotates in (rl/rr).
    Through,
    /// The shifted-out bit wraps around and also lands in carry (rlc/rrc).
    SetOnly,
}

impl fmt::Display for Carry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Through => write!(f, ""),
            Self::SetOnly => write!(f, "c"),
        }
    }
}

impl BitShift {
    /// Decode 0x00-0x3f of the CB table.
    pub fn decode(op: u8) -> Self {
        let target = column_target(op);

        match op {
            0x00..=0x07 => Self::Rotate(Direction::Left, Carry::SetOnly, target),
            0x08..=0x0f => Self::Rotate(Direction::Right, Carry::SetOnly, target),
            0x10..=0x17 => Self::Rotate(Direction::Left, Carry::Through, target),
            0x18..=0x1f => Self::Rotate(Direction::Right, Carry::Through, target),
            0x20..=0x27 => Self::ShiftArithmetical(Direction::Left, target),
            0x28..=0x2f => Self::ShiftArithmetical(Direction::Right, target),
            0x30..=0x37 => Self::Swap(target),
            _ => Self::ShiftRightLogical(target),
        }
    }
}

impl fmt::Display for BitShift {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::RotateA(direction, carry) => write!(f, "r{}{}a", direction, carry),
            Self::Rotate(direction, carry, target) => {
                write!(f, "r{}{} {}", direction, carry, target)
            }
            Self::ShiftArithmetical(direction, target) => write!(f, "s{}a {}", direction, target),
            Self::ShiftRightLogical(target) => write!(f, "srl {}", target),
            Self::Swap(target) => write!(f, "swap {}", target),
        }
    }
}
