use super::super::super::MemoryMapped;
use super::super::{
    cycles::Cycles,
    instructions::{
        jump::{Condition, Location},
        Address, Jump,
    },
    Cpu, InterruptMasterEnable, Register16,
};

impl Cpu {
    pub(super) fn execute_jump(&mut self, instruction: Jump, memory: &mut MemoryMapped) -> Cycles {
        match instruction {
            Jump::Jump(condition, location) => {
                let (address, taken, untaken) = match location {
                    Location::Address(Address::Fixed(address)) => (address, 16, 12),
                    Location::Address(Address::Relative(offset)) => {
                        (self.program_counter.wrapping_add(offset as u16), 12, 8)
                    }
                    Location::Address(_) => unreachable!(),
                    Location::RegisterHl => (self.get_register16(Register16::Hl), 4, 4),
                };

                if self.check_condition(&condition) {
                    self.program_counter = address;
                    Cycles(taken)
                } else {
                    Cycles(untaken)
                }
            }

            Jump::Call(condition, location) => {
                let address = match location {
                    Location::Address(Address::Fixed(address)) => address,
                    _ => unreachable!(),
                };

                if self.check_condition(&condition) {
                    let return_address = self.program_counter;
                    self.push_word(return_address, memory);
                    self.program_counter = address;
                    Cycles(24)
                } else {
                    Cycles(12)
                }
            }

            Jump::Return(None) => {
                self.program_counter = self.pop_word(memory);
                Cycles(16)
            }

            Jump::Return(condition @ Some(_)) => {
                if self.check_condition(&condition) {
                    self.program_counter = self.pop_word(memory);
                    Cycles(20)
                } else {
                    Cycles(8)
                }
            }

            Jump::ReturnAndEnableInterrupts => {
                self.program_counter = self.pop_word(memory);
                // Unlike EI, RETI enables interrupts with no delay
                self.interrupt_master_enable = InterruptMasterEnable::Enabled;
                Cycles(16)
            }

            Jump::Restart(vector) => {
                let return_address = self.program_counter;
                self.push_word(return_address, memory);
                self.program_counter = vector as u16;
                Cycles(16)
            }
        }
    }

    fn check_condition(&self, condition: &Option<Condition>) -> bool {
        match condition {
            Some(Condition(flag, value)) => self.flags.contains((*flag).into()) == *value,
            None => true,
        }
    }
}
