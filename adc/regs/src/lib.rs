#![cfg_attr(not(test), no_std)]

//! # PIC ADC Registers
//!
//! Register map of the PIC16F1787 analog-to-digital converter and the
//! registers around it (port A pin setup, interrupt enables and flags),
//! expressed as `tock-registers` bitfields over `u8`.
//!
//! Drivers never touch addresses directly. They go through the
//! [`RegisterBlock`] capability, which is implemented by [`Mmio`] for real
//! hardware and can be implemented by a simulated peripheral in tests:
//!
//! ```rust,ignore
//! use pic_adc_regs::{bitfields::ADCON0, reg, RegisterBlock};
//!
//! fn start<R: RegisterBlock>(regs: &mut R) {
//!     regs.modify(reg::ADCON0, ADCON0::GO::SET);
//! }
//! ```

pub mod bitfields;
mod block;
mod mmio;

pub use block::{reg, Reg, Register, RegisterBlock};
pub use mmio::Mmio;

// Re-export so dependents can name copies and field values without a
// direct tock-registers dependency
pub use tock_registers::fields::{Field, FieldValue};
pub use tock_registers::LocalRegisterCopy;
