use super::super::super::MemoryMapped;
use super::super::{cycles::Cycles, instructions::Stack, Cpu};

impl Cpu {
    pub(super) fn execute_stack(&mut self, instruction: Stack, memory: &mut MemoryMapped) -> Cycles {
        match instruction {
            Stack::Push(register) => {
                let value = self.get_register16(register);
                self.push_word(value, memory);
                Cycles(16)
            }
            Stack::Pop(register) => {
                let value = self.pop_word(memory);
                // Popping into AF can only restore the four real flag bits
                self.set_register16(register, value);
                Cycles(12)
            }
            Stack::Adjust(offset) => {
                self.stack_pointer = self.stack_pointer_with_offset(offset);
                Cycles(16)
            }
        }
    }
}
