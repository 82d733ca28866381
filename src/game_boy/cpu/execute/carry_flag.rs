use super::super::{cycles::Cycles, instructions::CarryFlag, Cpu, Flags};

impl Cpu {
    pub(super) fn execute_carry_flag(&mut self, instruction: CarryFlag) -> Cycles {
        let carry = match instruction {
            CarryFlag::Set => true,
            CarryFlag::Complement => !self.flags.contains(Flags::CARRY),
        };

        self.flags.remove(Flags::NEGATIVE | Flags::HALF_CARRY);
        self.flags.set(Flags::CARRY, carry);

        Cycles(4)
    }
}
