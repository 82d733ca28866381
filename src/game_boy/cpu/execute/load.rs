use super::super::super::MemoryMapped;
use super::super::{
    cycles::Cycles,
    instructions::{Load, Source16, Target16},
    Cpu,
};

impl Cpu {
    pub(super) fn execute_load(&mut self, instruction: Load, memory: &mut MemoryMapped) -> Cycles {
        match instruction {
            Load::Load8(target, source) => {
                let (value, fetch_cycles) = self.fetch8(source, memory);
                let set_cycles = self.set8(target, value, memory);
                Cycles(4) + fetch_cycles + set_cycles
            }

            Load::Load16(target, source) => {
                let (value, source_cycles) = match source {
                    Source16::Constant(value) => (value, Cycles(8)),
                    // LD sp, hl spends an internal cycle on the transfer
                    Source16::Register(register) => (self.get_register16(register), Cycles(4)),
                    Source16::StackPointerWithOffset(offset) => {
                        (self.stack_pointer_with_offset(offset), Cycles(8))
                    }
                };

                match target {
                    Target16::Register(register) => {
                        self.set_register16(register, value);
                        Cycles(4) + source_cycles
                    }
                    // LD [a16], sp: two operand bytes and two bus writes
                    Target16::Memory(address) => {
                        memory.write_word(address, value);
                        Cycles(20)
                    }
                }
            }
        }
    }
}
