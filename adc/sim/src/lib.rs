#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

//! # PIC ADC Simulator
//!
//! An in-memory stand-in for the PIC16F1787 converter, implementing the
//! [`RegisterBlock`] capability so the real driver can be exercised on the
//! host. The model covers what the driver relies on:
//!
//! - writing GO with ADON set starts a conversion of the selected channel
//! - the conversion completes after a configurable number of ADCON0 reads,
//!   or only when [`SimulatedAdc::complete_conversion`] is called
//! - completion loads ADRESH/ADRESL from the channel's input, clears GO and
//!   raises ADIF
//!
//! Every register write is journaled for bit-exact assertions.

mod delay;

pub use delay::SimDelay;

use heapless::Vec;
use pic_adc_core::{Channel, RawSample, Resolution};
use pic_adc_regs::bitfields::{ADCON0, INTCON, PIE1, PIR1};
use pic_adc_regs::{LocalRegisterCopy, Register, RegisterBlock};

/// Number of writes kept in the journal; later writes are dropped
pub const JOURNAL_CAPACITY: usize = 64;

/// ADCON0 reads a conversion stays busy for by default
pub const DEFAULT_LATENCY: u32 = 3;

const CHANNELS: usize = Channel::MAX as usize + 1;

#[derive(Debug, Clone, Copy)]
struct Conversion {
    channel: u8,
    remaining: Option<u32>,
}

/// Simulated converter and its surrounding registers
#[derive(Debug)]
pub struct SimulatedAdc {
    registers: [u8; Register::COUNT],
    inputs: [u16; CHANNELS],
    latency: Option<u32>,
    in_flight: Option<Conversion>,
    journal: Vec<(Register, u8), JOURNAL_CAPACITY>,
    conversions: u32,
}

impl SimulatedAdc {
    /// All registers cleared, conversions complete after [`DEFAULT_LATENCY`] polls
    pub const fn new() -> Self {
        Self {
            registers: [0; Register::COUNT],
            inputs: [0; CHANNELS],
            latency: Some(DEFAULT_LATENCY),
            in_flight: None,
            journal: Vec::new(),
            conversions: 0,
        }
    }

    /// Conversions never finish on their own
    ///
    /// Use [`complete_conversion`](Self::complete_conversion) to play the
    /// hardware's part, or leave them hanging to model a stuck converter.
    pub fn manual() -> Self {
        let mut sim = Self::new();
        sim.latency = None;
        sim
    }

    /// Set how many ADCON0 reads a conversion stays busy for
    pub fn set_latency(&mut self, latency: Option<u32>) {
        self.latency = latency;
    }

    /// Set the analog value presented on a channel, in result counts
    pub fn set_input(&mut self, channel: Channel, value: u16) {
        self.inputs[channel.raw() as usize] = value;
    }

    /// Peek at a register without side effects
    pub fn register(&self, register: Register) -> u8 {
        self.registers[register.index()]
    }

    /// Poke a register without side effects or journaling
    pub fn set_register(&mut self, register: Register, value: u8) {
        self.registers[register.index()] = value;
    }

    /// Register writes made through [`RegisterBlock::write`], oldest first
    pub fn writes(&self) -> &[(Register, u8)] {
        &self.journal
    }

    /// Forget the journaled writes
    pub fn clear_writes(&mut self) {
        self.journal.clear();
    }

    /// Number of conversions completed so far
    pub fn conversions(&self) -> u32 {
        self.conversions
    }

    /// Whether a conversion has been started and not yet completed
    pub fn is_converting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether the CPU would currently take the ADC interrupt
    pub fn interrupt_pending(&self) -> bool {
        let flag = LocalRegisterCopy::<u8, PIR1::Register>::new(self.register(Register::Pir1));
        let enable = LocalRegisterCopy::<u8, PIE1::Register>::new(self.register(Register::Pie1));
        let intcon = LocalRegisterCopy::<u8, INTCON::Register>::new(self.register(Register::Intcon));
        flag.is_set(PIR1::ADIF)
            && enable.is_set(PIE1::ADIE)
            && intcon.is_set(INTCON::PEIE)
            && intcon.is_set(INTCON::GIE)
    }

    /// Finish the in-flight conversion now
    ///
    /// Returns the sample loaded into the result registers, or `None` if no
    /// conversion was running.
    pub fn complete_conversion(&mut self) -> Option<RawSample> {
        let conversion = self.in_flight.take()?;
        let mut adcon0 = self.adcon0();
        let resolution = if adcon0.matches_all(ADCON0::ADRMD::Bits10) {
            Resolution::Bits10
        } else {
            Resolution::Bits12
        };
        let value = self.inputs[conversion.channel as usize] & resolution.max_value();
        let sample = RawSample(value);
        let (high, low) = sample.to_registers();
        self.set_register(Register::Adresh, high);
        self.set_register(Register::Adresl, low);

        adcon0.modify(ADCON0::GO::CLEAR);
        self.set_register(Register::Adcon0, adcon0.get());
        let pir1 = self.register(Register::Pir1) | PIR1::ADIF::SET.value;
        self.set_register(Register::Pir1, pir1);

        self.conversions += 1;
        Some(sample)
    }

    fn adcon0(&self) -> LocalRegisterCopy<u8, ADCON0::Register> {
        LocalRegisterCopy::new(self.register(Register::Adcon0))
    }

    fn tick(&mut self) {
        let due = match self.in_flight.as_mut() {
            Some(Conversion {
                remaining: Some(remaining),
                ..
            }) => {
                if *remaining == 0 {
                    true
                } else {
                    *remaining -= 1;
                    false
                }
            }
            _ => false,
        };
        if due {
            self.complete_conversion();
        }
    }

    fn write_adcon0(&mut self, value: u8) {
        let mut written = LocalRegisterCopy::<u8, ADCON0::Register>::new(value);
        let was_converting = self.in_flight.is_some();

        if written.is_set(ADCON0::GO) {
            if !written.is_set(ADCON0::ADON) {
                // GO cannot be set while the converter is off
                written.modify(ADCON0::GO::CLEAR);
            } else if !was_converting {
                self.in_flight = Some(Conversion {
                    channel: written.read(ADCON0::CHS),
                    remaining: self.latency,
                });
            }
        } else if was_converting {
            // Clearing GO aborts the conversion; results stay untouched
            self.in_flight = None;
        }

        self.set_register(Register::Adcon0, written.get());
    }
}

impl Default for SimulatedAdc {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterBlock for SimulatedAdc {
    fn read(&mut self, register: Register) -> u8 {
        if register == Register::Adcon0 {
            self.tick();
        }
        self.register(register)
    }

    fn write(&mut self, register: Register, value: u8) {
        // A full journal only loses the tail; the register model still updates
        let _ = self.journal.push((register, value));
        match register {
            Register::Adcon0 => self.write_adcon0(value),
            // Result registers are read-only to software
            Register::Adresh | Register::Adresl => {}
            other => self.set_register(other, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pic_adc_regs::reg;

    fn start(sim: &mut SimulatedAdc, channel: u8) {
        sim.write_fields(
            reg::ADCON0,
            ADCON0::ADON::SET + ADCON0::CHS.val(channel) + ADCON0::GO::SET,
        );
    }

    #[test]
    fn test_conversion_completes_after_latency() {
        let mut sim = SimulatedAdc::new();
        sim.set_input(Channel::AN1, 0x0ABC);
        start(&mut sim, 1);

        for _ in 0..DEFAULT_LATENCY {
            assert!(sim.is_set(reg::ADCON0, ADCON0::GO));
        }
        assert!(!sim.is_set(reg::ADCON0, ADCON0::GO));
        assert_eq!(sim.register(Register::Adresh), 0x0A);
        assert_eq!(sim.register(Register::Adresl), 0xBC);
        assert_eq!(sim.conversions(), 1);
        assert!(sim.is_set(reg::PIR1, PIR1::ADIF));
    }

    #[test]
    fn test_manual_never_completes() {
        let mut sim = SimulatedAdc::manual();
        start(&mut sim, 0);
        for _ in 0..1000 {
            assert!(sim.is_set(reg::ADCON0, ADCON0::GO));
        }
        assert!(sim.complete_conversion().is_some());
        assert!(sim.complete_conversion().is_none());
    }

    #[test]
    fn test_go_ignored_while_disabled() {
        let mut sim = SimulatedAdc::manual();
        sim.write_fields(reg::ADCON0, ADCON0::GO::SET);
        assert!(!sim.is_converting());
        assert_eq!(sim.register(Register::Adcon0), 0);
    }

    #[test]
    fn test_ten_bit_mode_masks_input() {
        let mut sim = SimulatedAdc::manual();
        sim.set_input(Channel::AN0, 0xFFFF);
        sim.write_fields(
            reg::ADCON0,
            ADCON0::ADRMD::Bits10 + ADCON0::ADON::SET + ADCON0::GO::SET,
        );
        assert_eq!(sim.complete_conversion(), Some(RawSample(1023)));
    }

    #[test]
    fn test_interrupt_pending_needs_all_enables() {
        let mut sim = SimulatedAdc::manual();
        start(&mut sim, 0);
        sim.complete_conversion();
        assert!(!sim.interrupt_pending());
        sim.modify(reg::PIE1, PIE1::ADIE::SET);
        sim.modify(reg::INTCON, INTCON::PEIE::SET);
        assert!(!sim.interrupt_pending());
        sim.modify(reg::INTCON, INTCON::GIE::SET);
        assert!(sim.interrupt_pending());
    }

    #[test]
    fn test_journal_records_writes() {
        let mut sim = SimulatedAdc::new();
        sim.write(Register::Adcon2, 0x0F);
        sim.write(Register::Adresh, 0x55);
        assert_eq!(sim.writes(), &[(Register::Adcon2, 0x0F), (Register::Adresh, 0x55)]);
        assert_eq!(sim.register(Register::Adresh), 0);
        sim.clear_writes();
        assert!(sim.writes().is_empty());
    }
}
