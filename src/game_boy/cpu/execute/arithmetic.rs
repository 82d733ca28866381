use super::super::super::MemoryMapped;
use super::super::{
    cycles::Cycles,
    instructions::{Arithmetic, Arithmetic16, Arithmetic8},
    Cpu, Flags, Register16,
};

impl Cpu {
    pub(super) fn execute_arithmetic(
        &mut self,
        instruction: Arithmetic,
        memory: &mut MemoryMapped,
    ) -> Cycles {
        match instruction {
            Arithmetic::Arithmetic8(instruction) => self.execute_arithmetic8(instruction, memory),
            Arithmetic::Arithmetic16(instruction) => self.execute_arithmetic16(instruction),
        }
    }

    fn execute_arithmetic8(
        &mut self,
        instruction: Arithmetic8,
        memory: &mut MemoryMapped,
    ) -> Cycles {
        match instruction {
            Arithmetic8::AddA(source) => {
                let (value, cycles) = self.fetch8(source, memory);
                self.add_a(value, false);
                Cycles(4) + cycles
            }
            Arithmetic8::AddACarry(source) => {
                let (value, cycles) = self.fetch8(source, memory);
                self.add_a(value, true);
                Cycles(4) + cycles
            }
            Arithmetic8::SubtractA(source) => {
                let (value, cycles) = self.fetch8(source, memory);
                self.a = self.subtract_a(value, false);
                Cycles(4) + cycles
            }
            Arithmetic8::SubtractACarry(source) => {
                let (value, cycles) = self.fetch8(source, memory);
                self.a = self.subtract_a(value, true);
                Cycles(4) + cycles
            }
            Arithmetic8::CompareA(source) => {
                let (value, cycles) = self.fetch8(source, memory);
                self.subtract_a(value, false);
                Cycles(4) + cycles
            }
            Arithmetic8::Increment(target) => {
                Cycles(4)
                    + self.modify8(target, memory, |cpu, value| {
                        let result = value.wrapping_add(1);
                        cpu.flags.set(Flags::ZERO, result == 0);
                        cpu.flags.remove(Flags::NEGATIVE);
                        cpu.flags.set(Flags::HALF_CARRY, value & 0xf == 0xf);
                        result
                    })
            }
            Arithmetic8::Decrement(target) => {
                Cycles(4)
                    + self.modify8(target, memory, |cpu, value| {
                        let result = value.wrapping_sub(1);
                        cpu.flags.set(Flags::ZERO, result == 0);
                        cpu.flags.insert(Flags::NEGATIVE);
                        cpu.flags.set(Flags::HALF_CARRY, value & 0xf == 0);
                        result
                    })
            }
        }
    }

    fn add_a(&mut self, value: u8, with_carry: bool) {
        let carry = (with_carry && self.flags.contains(Flags::CARRY)) as u8;
        let result = self.a as u16 + value as u16 + carry as u16;

        self.flags = Flags::empty();
        self.flags.set(Flags::ZERO, result as u8 == 0);
        self.flags
            .set(Flags::HALF_CARRY, (self.a & 0xf) + (value & 0xf) + carry > 0xf);
        self.flags.set(Flags::CARRY, result > 0xff);

        self.a = result as u8;
    }

    /// Shared by sub, sbc and cp; cp discards the result.
    fn subtract_a(&mut self, value: u8, with_carry: bool) -> u8 {
        let carry = (with_carry && self.flags.contains(Flags::CARRY)) as i16;
        let result = self.a as i16 - value as i16 - carry;

        self.flags = Flags::NEGATIVE;
        self.flags.set(Flags::ZERO, result as u8 == 0);
        self.flags.set(
            Flags::HALF_CARRY,
            (self.a & 0xf) as i16 - (value & 0xf) as i16 - carry < 0,
        );
        self.flags.set(Flags::CARRY, result < 0);

        result as u8
    }

    fn execute_arithmetic16(&mut self, instruction: Arithmetic16) -> Cycles {
        match instruction {
            // The 16-bit increments and decrements leave every flag alone
            Arithmetic16::Increment(register) => {
                self.set_register16(register, self.get_register16(register).wrapping_add(1));
            }
            Arithmetic16::Decrement(register) => {
                self.set_register16(register, self.get_register16(register).wrapping_sub(1));
            }
            Arithmetic16::AddHl(register) => {
                let hl = self.get_register16(Register16::Hl);
                let value = self.get_register16(register);

                // Z survives; H and C come from bits 11 and 15
                self.flags.remove(Flags::NEGATIVE);
                self.flags
                    .set(Flags::HALF_CARRY, (hl & 0xfff) + (value & 0xfff) > 0xfff);
                self.flags
                    .set(Flags::CARRY, hl as u32 + value as u32 > 0xffff);

                self.set_register16(Register16::Hl, hl.wrapping_add(value));
            }
        }

        Cycles(8)
    }

    pub(super) fn execute_daa(&mut self) -> Cycles {
        let mut a = self.a;

        if self.flags.contains(Flags::NEGATIVE) {
            if self.flags.contains(Flags::CARRY) {
                a = a.wrapping_sub(0x60);
            }
            if self.flags.contains(Flags::HALF_CARRY) {
                a = a.wrapping_sub(0x06);
            }
        } else {
            if self.flags.contains(Flags::CARRY) || a > 0x99 {
                a = a.wrapping_add(0x60);
                self.flags.insert(Flags::CARRY);
            }
            if self.flags.contains(Flags::HALF_CARRY) || a & 0xf > 0x9 {
                a = a.wrapping_add(0x06);
            }
        }

        self.a = a;
        self.flags.set(Flags::ZERO, a == 0);
        self.flags.remove(Flags::HALF_CARRY);

        Cycles(4)
    }
}
