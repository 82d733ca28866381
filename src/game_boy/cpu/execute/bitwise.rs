use super::super::super::MemoryMapped;
use super::super::{cycles::Cycles, instructions::Bitwise, Cpu, Flags};

impl Cpu {
    pub(super) fn execute_bitwise(
        &mut self,
        instruction: Bitwise,
        memory: &mut MemoryMapped,
    ) -> Cycles {
        match instruction {
            Bitwise::AndA(source) => {
                let (value, cycles) = self.fetch8(source, memory);
                self.a &= value;
                self.flags = Flags::HALF_CARRY;
                self.flags.set(Flags::ZERO, self.a == 0);
                Cycles(4) + cycles
            }
            Bitwise::OrA(source) => {
                let (value, cycles) = self.fetch8(source, memory);
                self.a |= value;
                self.flags = Flags::empty();
                self.flags.set(Flags::ZERO, self.a == 0);
                Cycles(4) + cycles
            }
            Bitwise::XorA(source) => {
                let (value, cycles) = self.fetch8(source, memory);
                self.a ^= value;
                self.flags = Flags::empty();
                self.flags.set(Flags::ZERO, self.a == 0);
                Cycles(4) + cycles
            }
            Bitwise::ComplementA => {
                self.a = !self.a;
                self.flags.insert(Flags::NEGATIVE | Flags::HALF_CARRY);
                Cycles(4)
            }
        }
    }
}
