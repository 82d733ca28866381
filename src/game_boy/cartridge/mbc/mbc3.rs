use super::super::super::cpu::cycles::Cycles;

/// Emulated T-cycles per real-time-clock second.
const TCYCLES_PER_SECOND: u32 = 4_194_304;

enum Mapped {
    Ram(u8),
    Clock(ClockRegister),
}

#[derive(Clone, Copy)]
enum ClockRegister {
    Seconds,
    Minutes,
    Hours,
    DayLower,
    DayUpper,
}

#[derive(Clone, Copy, Default)]
struct Clock {
    seconds: u8,
    minutes: u8,
    hours: u8,
    days_lower: u8,
    /// Bit 0 = day counter bit 8, bit 6 = halt, bit 7 = day carry.
    days_upper: u8,
}

impl Clock {
    fn register(&self, register: ClockRegister) -> u8 {
        match register {
            ClockRegister::Seconds => self.seconds,
            ClockRegister::Minutes => self.minutes,
            ClockRegister::Hours => self.hours,
            ClockRegister::DayLower => self.days_lower,
            ClockRegister::DayUpper => self.days_upper,
        }
    }

    fn set_register(&mut self, register: ClockRegister, value: u8) {
        match register {
            ClockRegister::Seconds => self.seconds = value & 0x3f,
            ClockRegister::Minutes => self.minutes = value & 0x3f,
            ClockRegister::Hours => self.hours = value & 0x1f,
            ClockRegister::DayLower => self.days_lower = value,
            ClockRegister::DayUpper => self.days_upper = value & 0xc1,
        }
    }

    fn halted(&self) -> bool {
        self.days_upper & 0x40 != 0
    }

    fn advance_second(&mut self) {
        self.seconds = (self.seconds + 1) % 60;
        if self.seconds != 0 {
            return;
        }
        self.minutes = (self.minutes + 1) % 60;
        if self.minutes != 0 {
            return;
        }
        self.hours = (self.hours + 1) % 24;
        if self.hours != 0 {
            return;
        }
        let days = ((self.days_upper as u16 & 1) << 8 | self.days_lower as u16) + 1;
        self.days_lower = days as u8;
        self.days_upper = (self.days_upper & 0xfe) | ((days >> 8) as u8 & 1);
        if days == 512 {
            // Day counter overflow is sticky until software clears it
            self.days_upper = (self.days_upper & 0x7e) | 0x80;
        }
    }
}

struct Rtc {
    live: Clock,
    latched: Clock,
    subsecond: u32,
}

pub struct Mbc3 {
    ram: Vec<u8>,
    rtc: Option<Rtc>,
    ram_and_clock_enabled: bool,
    bank: u8,
    mapped: Mapped,
    /// The previous write to the latch register; a 0x00 -> 0x01 sequence
    /// copies the live clock into the latched registers.
    latch_armed: bool,
}

impl Mbc3 {
    pub fn new(ram_size: usize, has_rtc: bool, save_data: Option<Vec<u8>>) -> Self {
        Self {
            ram: super::external_ram(ram_size, save_data),
            rtc: has_rtc.then(|| Rtc {
                live: Clock::default(),
                latched: Clock::default(),
                subsecond: 0,
            }),
            ram_and_clock_enabled: false,
            bank: 1,
            mapped: Mapped::Ram(0),
            latch_armed: false,
        }
    }

    pub fn ram(&self) -> Option<Vec<u8>> {
        if self.ram.is_empty() {
            None
        } else {
            Some(self.ram.clone())
        }
    }

    /// Advance the real-time clock by emulated time.
    pub fn tick(&mut self, cycles: Cycles) {
        let Some(rtc) = &mut self.rtc else { return };
        if rtc.live.halted() {
            return;
        }

        rtc.subsecond += cycles.0;
        while rtc.subsecond >= TCYCLES_PER_SECOND {
            rtc.subsecond -= TCYCLES_PER_SECOND;
            rtc.live.advance_second();
        }
    }

    fn ram_offset(&self, ram_bank: u8, address: u16) -> usize {
        (ram_bank as usize * 0x2000 + (address - 0xa000) as usize) % self.ram.len()
    }

    pub fn read(&self, rom: &[u8], address: u16) -> u8 {
        match address {
            0x0000..=0x3fff => rom[address as usize],
            0x4000..=0x7fff => {
                let offset = self.bank as usize * 0x4000 + (address - 0x4000) as usize;
                rom[offset % rom.len()]
            }
            0xa000..=0xbfff if self.ram_and_clock_enabled => match self.mapped {
                Mapped::Ram(bank) if !self.ram.is_empty() => self.ram[self.ram_offset(bank, address)],
                Mapped::Ram(_) => 0xff,
                Mapped::Clock(register) => match &self.rtc {
                    Some(rtc) => rtc.latched.register(register),
                    None => 0xff,
                },
            },
            _ => 0xff,
        }
    }

    pub fn write(&mut self, address: u16, value: u8) -> bool {
        match address {
            0x0000..=0x1fff => self.ram_and_clock_enabled = value & 0xf == 0xa,
            0x2000..=0x3fff => {
                self.bank = (value & 0x7f).max(1);
            }
            0x4000..=0x5fff => {
                self.mapped = match value & 0x0f {
                    0x00..=0x07 => Mapped::Ram(value & 0x07),
                    0x08 => Mapped::Clock(ClockRegister::Seconds),
                    0x09 => Mapped::Clock(ClockRegister::Minutes),
                    0x0a => Mapped::Clock(ClockRegister::Hours),
                    0x0b => Mapped::Clock(ClockRegister::DayLower),
                    0x0c => Mapped::Clock(ClockRegister::DayUpper),
                    _ => Mapped::Ram(0),
                };
            }
            0x6000..=0x7fff => {
                if value == 0x01 && self.latch_armed {
                    if let Some(rtc) = &mut self.rtc {
                        rtc.latched = rtc.live;
                    }
                }
                self.latch_armed = value == 0x00;
            }
            0xa000..=0xbfff if self.ram_and_clock_enabled => match self.mapped {
                Mapped::Ram(bank) if !self.ram.is_empty() => {
                    let offset = self.ram_offset(bank, address);
                    self.ram[offset] = value;
                    return true;
                }
                Mapped::Ram(_) => {}
                Mapped::Clock(register) => {
                    if let Some(rtc) = &mut self.rtc {
                        rtc.live.set_register(register, value);
                        if let ClockRegister::Seconds = register {
                            rtc.subsecond = 0;
                        }
                    }
                }
            },
            _ => {}
        }
        false
    }
}
