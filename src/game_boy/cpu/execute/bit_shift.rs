use super::super::super::MemoryMapped;
use super::super::{
    cycles::Cycles,
    instructions::{
        bit_shift::{Carry, Direction},
        BitShift,
    },
    Cpu, Flags,
};

impl Cpu {
    pub(super) fn execute_bit_shift(
        &mut self,
        instruction: BitShift,
        memory: &mut MemoryMapped,
    ) -> Cycles {
        match instruction {
            BitShift::RotateA(direction, carry) => {
                self.a = self.rotate(self.a, direction, carry);
                // The accumulator rotates always report not-zero
                self.flags.remove(Flags::ZERO);
                Cycles(4)
            }
            BitShift::Rotate(direction, carry, target) => {
                Cycles(8)
                    + self.modify8(target, memory, |cpu, value| {
                        cpu.rotate(value, direction, carry)
                    })
            }
            BitShift::ShiftArithmetical(Direction::Left, target) => {
                Cycles(8)
                    + self.modify8(target, memory, |cpu, value| {
                        cpu.set_shift_flags(value << 1, value & 0x80 != 0)
                    })
            }
            BitShift::ShiftArithmetical(Direction::Right, target) => {
                Cycles(8)
                    + self.modify8(target, memory, |cpu, value| {
                        cpu.set_shift_flags((value >> 1) | (value & 0x80), value & 1 != 0)
                    })
            }
            BitShift::ShiftRightLogical(target) => {
                Cycles(8)
                    + self.modify8(target, memory, |cpu, value| {
                        cpu.set_shift_flags(value >> 1, value & 1 != 0)
                    })
            }
            BitShift::Swap(target) => {
                Cycles(8)
                    + self.modify8(target, memory, |cpu, value| {
                        cpu.set_shift_flags(value.rotate_left(4), false)
                    })
            }
        }
    }

    fn rotate(&mut self, value: u8, direction: Direction, carry: Carry) -> u8 {
        let old_carry = self.flags.contains(Flags::CARRY);

        let (result, carry_out) = match direction {
            Direction::Left => {
                let carry_in = match carry {
                    Carry::Through => old_carry,
                    Carry::SetOnly => value & 0x80 != 0,
                };
                ((value << 1) | carry_in as u8, value & 0x80 != 0)
            }
            Direction::Right => {
                let carry_in = match carry {
                    Carry::Through => old_carry,
                    Carry::SetOnly => value & 1 != 0,
                };
                ((value >> 1) | ((carry_in as u8) << 7), value & 1 != 0)
            }
        };

        self.set_shift_flags(result, carry_out)
    }

    fn set_shift_flags(&mut self, result: u8, carry: bool) -> u8 {
        self.flags = Flags::empty();
        self.flags.set(Flags::ZERO, result == 0);
        self.flags.set(Flags::CARRY, carry);
        result
    }
}
