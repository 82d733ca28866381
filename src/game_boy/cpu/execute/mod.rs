use super::super::MemoryMapped;
use super::{
    cycles::Cycles,
    instructions::{Address, Instruction, Source8, Target8},
    Cpu, Flags, Register16,
};

mod arithmetic;
mod bit_flag;
mod bit_shift;
mod bitwise;
mod carry_flag;
mod interrupt;
mod jump;
mod load;
mod stack;

impl Cpu {
    pub fn execute(&mut self, instruction: Instruction, memory: &mut MemoryMapped) -> Cycles {
        match instruction {
            Instruction::Load(instruction) => self.execute_load(instruction, memory),
            Instruction::Arithmetic(instruction) => self.execute_arithmetic(instruction, memory),
            Instruction::Bitwise(instruction) => self.execute_bitwise(instruction, memory),
            Instruction::BitFlag(instruction) => self.execute_bit_flag(instruction, memory),
            Instruction::BitShift(instruction) => self.execute_bit_shift(instruction, memory),
            Instruction::Jump(instruction) => self.execute_jump(instruction, memory),
            Instruction::CarryFlag(instruction) => self.execute_carry_flag(instruction),
            Instruction::Stack(instruction) => self.execute_stack(instruction, memory),
            Instruction::Interrupt(instruction) => self.execute_interrupt(instruction, memory),
            Instruction::DecimalAdjustAccumulator => self.execute_daa(),
            Instruction::NoOperation => Cycles(4),
            Instruction::Stop => self.execute_stop(memory),
            Instruction::Invalid(_) => {
                // Hardware wedges on the undefined opcodes; reproduce the
                // lock instead of crashing
                self.locked = true;
                Cycles(4)
            }
        }
    }

    fn execute_stop(&mut self, memory: &mut MemoryMapped) -> Cycles {
        if memory.cgb && memory.speed.armed {
            memory.speed.double = !memory.speed.double;
            memory.speed.armed = false;
        } else {
            self.stopped = true;
        }
        Cycles(4)
    }

    /// Resolve an addressing mode to a bus address. The post-increment and
    /// post-decrement forms adjust HL here.
    fn resolve_address(&mut self, address: Address) -> u16 {
        match address {
            Address::Fixed(address) => address,
            Address::Relative(offset) => self.program_counter.wrapping_add(offset as u16),
            Address::Hram(offset) => 0xff00 + offset as u16,
            Address::HramPlusC => 0xff00 + self.c as u16,
            Address::Dereference(register) => self.get_register16(register),
            Address::DereferenceHlAndIncrement => {
                let address = self.get_register16(Register16::Hl);
                self.set_register16(Register16::Hl, address.wrapping_add(1));
                address
            }
            Address::DereferenceHlAndDecrement => {
                let address = self.get_register16(Register16::Hl);
                self.set_register16(Register16::Hl, address.wrapping_sub(1));
                address
            }
            Address::DereferenceFixed(address) => address,
        }
    }

    fn fetch8(&mut self, source: Source8, memory: &MemoryMapped) -> (u8, Cycles) {
        match source {
            Source8::Constant(value) => (value, Cycles(4)),
            Source8::Register(register) => (self.get_register8(register), Cycles(0)),
            Source8::Memory(address) => {
                let cycles = address_cycles(address);
                let address = self.resolve_address(address);
                (memory.read(address), cycles)
            }
        }
    }

    fn set8(&mut self, target: Target8, value: u8, memory: &mut MemoryMapped) -> Cycles {
        match target {
            Target8::Register(register) => {
                self.set_register8(register, value);
                Cycles(0)
            }
            Target8::Memory(address) => {
                let cycles = address_cycles(address);
                let address = self.resolve_address(address);
                memory.write(address, value);
                cycles
            }
        }
    }

    /// Read-modify-write against a register or [hl].
    fn modify8(
        &mut self,
        target: Target8,
        memory: &mut MemoryMapped,
        f: impl FnOnce(&mut Cpu, u8) -> u8,
    ) -> Cycles {
        match target {
            Target8::Register(register) => {
                let value = self.get_register8(register);
                let value = f(self, value);
                self.set_register8(register, value);
                Cycles(0)
            }
            Target8::Memory(address) => {
                let address = self.resolve_address(address);
                let value = memory.read(address);
                let value = f(self, value);
                memory.write(address, value);
                Cycles(8)
            }
        }
    }

    pub(crate) fn push_word(&mut self, value: u16, memory: &mut MemoryMapped) {
        self.stack_pointer = self.stack_pointer.wrapping_sub(2);
        memory.write_word(self.stack_pointer, value);
    }

    pub(crate) fn pop_word(&mut self, memory: &MemoryMapped) -> u16 {
        let low = memory.read(self.stack_pointer);
        let high = memory.read(self.stack_pointer.wrapping_add(1));
        self.stack_pointer = self.stack_pointer.wrapping_add(2);
        u16::from_le_bytes([low, high])
    }

    /// SP plus a signed offset, with the half-carry and carry computed on
    /// the low byte as ADD SP,e8 and LD HL,SP+e8 both require.
    fn stack_pointer_with_offset(&mut self, offset: i8) -> u16 {
        let sp = self.stack_pointer;
        let unsigned = offset as u8 as u16;

        self.flags = Flags::empty();
        self.flags
            .set(Flags::HALF_CARRY, (sp & 0xf) + (unsigned & 0xf) > 0xf);
        self.flags.set(Flags::CARRY, (sp & 0xff) + unsigned > 0xff);

        sp.wrapping_add(offset as u16)
    }
}

/// Extra T-cycles an addressing mode costs over a register operand: its
/// operand-byte fetches plus the bus access itself.
fn address_cycles(address: Address) -> Cycles {
    match address {
        Address::Hram(_) => Cycles(8),
        Address::DereferenceFixed(_) => Cycles(12),
        _ => Cycles(4),
    }
}
