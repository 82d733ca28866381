use super::{
    cpu::{cycles::Cycles, instructions::Instruction, InterruptMasterEnable},
    interrupts::Interrupt,
    GameBoy, MemoryMapped,
};

struct ProgramCounterIterator<'a> {
    pc: &'a mut u16,
    memory: &'a MemoryMapped,
    /// HALT bug: the fetch after a buggy HALT reads its byte without moving
    /// the program counter, so the byte is decoded twice.
    suppress_increment: bool,
}

impl Iterator for ProgramCounterIterator<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.memory.read(*self.pc);
        if self.suppress_increment {
            self.suppress_increment = false;
        } else {
            *self.pc = self.pc.wrapping_add(1);
        }
        Some(value)
    }
}

impl GameBoy {
    /// Run one step: service an interrupt or execute one instruction, then
    /// bring every peripheral forward by the same number of T-cycles.
    pub fn step(&mut self) -> Cycles {
        let cycles = if self.cpu.locked {
            // An undefined opcode wedged the CPU; only the peripherals keep
            // running
            Cycles(4)
        } else if let Some(interrupt) = self.check_for_interrupt() {
            self.service_interrupt(interrupt)
        } else if self.cpu.halted || self.cpu.stopped {
            Cycles(4)
        } else {
            let instruction = self.decode_next_instruction();
            self.cpu.execute(instruction, &mut self.mapped)
        };

        self.tick_hardware(cycles);
        cycles
    }

    fn decode_next_instruction(&mut self) -> Instruction {
        let suppress_increment = self.cpu.halt_bug;
        self.cpu.halt_bug = false;

        let mut ops = ProgramCounterIterator {
            pc: &mut self.cpu.program_counter,
            memory: &self.mapped,
            suppress_increment,
        };
        Instruction::decode(&mut ops).unwrap()
    }

    fn check_for_interrupt(&mut self) -> Option<Interrupt> {
        match self.cpu.interrupt_master_enable {
            InterruptMasterEnable::EnableAfterNextInstruction => {
                self.cpu.interrupt_master_enable = InterruptMasterEnable::Enabled;
                None
            }
            InterruptMasterEnable::Enabled => self.mapped.interrupts.pending(),
            InterruptMasterEnable::Disabled => {
                // A pending interrupt still wakes the CPU, it just isn't
                // serviced
                if (self.cpu.halted || self.cpu.stopped)
                    && self.mapped.interrupts.pending().is_some()
                {
                    self.cpu.halted = false;
                    self.cpu.stopped = false;
                }
                None
            }
        }
    }

    fn service_interrupt(&mut self, interrupt: Interrupt) -> Cycles {
        self.cpu.interrupt_master_enable = InterruptMasterEnable::Disabled;
        self.cpu.halted = false;
        self.cpu.stopped = false;

        let pc = self.cpu.program_counter;
        self.cpu.push_word(pc, &mut self.mapped);
        self.mapped.interrupts.acknowledge(interrupt);
        self.cpu.program_counter = interrupt.vector();

        Cycles(20)
    }

    fn tick_hardware(&mut self, cycles: Cycles) {
        if self.mapped.timers.tick(cycles) {
            self.mapped.interrupts.request(Interrupt::Timer);
        }
        if self.mapped.serial.tick(cycles) {
            self.mapped.interrupts.request(Interrupt::Serial);
        }
        self.mapped.cartridge.tick(cycles);

        // The dot clock doesn't speed up in double-speed mode
        let dots = if self.mapped.speed.double {
            self.video_dot_remainder += cycles.0;
            let dots = self.video_dot_remainder / 2;
            self.video_dot_remainder %= 2;
            dots
        } else {
            cycles.0
        };

        let video_result = self.mapped.video.tick(dots);
        if video_result.request_vblank {
            self.mapped
                .interrupts
                .request(Interrupt::VideoBetweenFrames);
        }
        if video_result.request_stat {
            self.mapped.interrupts.request(Interrupt::VideoStatus);
        }
        for _ in 0..video_result.hblanks_entered {
            self.mapped.hdma_hblank_step();
        }
        if let Some(screen) = video_result.screen {
            self.screen = screen;
        }
    }
}
