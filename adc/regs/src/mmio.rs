//! Volatile access to the memory-mapped special function registers

use crate::block::{Register, RegisterBlock};

/// Register access through volatile loads and stores
///
/// Addresses are `base + Register::address()`. On the target `base` is 0,
/// the start of linear data memory.
#[derive(Debug)]
pub struct Mmio {
    base: usize,
}

impl Mmio {
    /// Access the on-chip registers.
    ///
    /// ## Safety
    ///
    /// There must never be more than a single `Mmio` alive at any given time,
    /// and the program must run on a device with the PIC16F1787 SFR layout.
    pub const unsafe fn new() -> Self {
        Self { base: 0 }
    }

    /// Access a register map relocated to `base`.
    ///
    /// ## Safety
    ///
    /// `base + address` must be valid for volatile byte reads and writes for
    /// every [`Register`], for as long as the returned value lives, and must
    /// not be accessed through any other path meanwhile.
    pub const unsafe fn with_base(base: usize) -> Self {
        Self { base }
    }

    fn pointer(&self, register: Register) -> *mut u8 {
        (self.base + register.address() as usize) as *mut u8
    }
}

impl RegisterBlock for Mmio {
    fn read(&mut self, register: Register) -> u8 {
        // Safety: guaranteed by the contract of the constructors
        unsafe { core::ptr::read_volatile(self.pointer(register)) }
    }

    fn write(&mut self, register: Register, value: u8) {
        // Safety: guaranteed by the contract of the constructors
        unsafe { core::ptr::write_volatile(self.pointer(register), value) }
    }
}
