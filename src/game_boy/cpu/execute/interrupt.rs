use super::super::super::MemoryMapped;
use super::super::{cycles::Cycles, instructions, Cpu, InterruptMasterEnable};

impl Cpu {
    pub(super) fn execute_interrupt(
        &mut self,
        instruction: instructions::Interrupt,
        memory: &MemoryMapped,
    ) -> Cycles {
        match instruction {
            instructions::Interrupt::Enable => {
                if self.interrupt_master_enable == InterruptMasterEnable::Disabled {
                    self.interrupt_master_enable = InterruptMasterEnable::EnableAfterNextInstruction;
                }
            }
            instructions::Interrupt::Disable => {
                self.interrupt_master_enable = InterruptMasterEnable::Disabled;
            }
            instructions::Interrupt::Await => {
                // HALT bug: with the master enable off and an interrupt
                // already pending, the CPU doesn't halt; the next fetch
                // reads its opcode without moving PC
                if self.interrupt_master_enable == InterruptMasterEnable::Disabled
                    && memory.interrupts.pending().is_some()
                {
                    self.halt_bug = true;
                } else {
                    self.halted = true;
                }
            }
        }

        Cycles(4)
    }
}
