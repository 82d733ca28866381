use super::super::super::MemoryMapped;
use super::super::{cycles::Cycles, instructions::BitFlag, Cpu, Flags};

impl Cpu {
    pub(super) fn execute_bit_flag(
        &mut self,
        instruction: BitFlag,
        memory: &mut MemoryMapped,
    ) -> Cycles {
        match instruction {
            BitFlag::Test(bit, target) => {
                let (value, cycles) = self.fetch8(target.to_source(), memory);
                self.flags.set(Flags::ZERO, value & (1 << bit) == 0);
                self.flags.remove(Flags::NEGATIVE);
                self.flags.insert(Flags::HALF_CARRY);
                Cycles(8) + cycles
            }
            BitFlag::Clear(bit, target) => {
                Cycles(8) + self.modify8(target, memory, |_, value| value & !(1 << bit))
            }
            BitFlag::Set(bit, target) => {
                Cycles(8) + self.modify8(target, memory, |_, value| value | (1 << bit))
            }
        }
    }
}
