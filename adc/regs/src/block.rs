//! Register addresses and the register access capability

use core::fmt;
use core::marker::PhantomData;

use tock_registers::fields::{Field, FieldValue};
use tock_registers::{LocalRegisterCopy, RegisterLongName};

/// Special function registers used by the driver, by linear SFR address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum Register {
    Intcon = 0x00B,
    Pir1 = 0x011,
    Trisa = 0x08C,
    Pie1 = 0x091,
    Adresl = 0x09B,
    Adresh = 0x09C,
    Adcon0 = 0x09D,
    Adcon1 = 0x09E,
    Adcon2 = 0x09F,
    Ansela = 0x18C,
}

impl Register {
    /// Number of registers in the map
    pub const COUNT: usize = 10;

    /// Every register, in address order
    pub const ALL: [Register; Register::COUNT] = [
        Register::Intcon,
        Register::Pir1,
        Register::Trisa,
        Register::Pie1,
        Register::Adresl,
        Register::Adresh,
        Register::Adcon0,
        Register::Adcon1,
        Register::Adcon2,
        Register::Ansela,
    ];

    /// Linear data-memory address
    pub const fn address(self) -> u16 {
        self as u16
    }

    /// Position in [`Register::ALL`], handy for backing storage
    pub const fn index(self) -> usize {
        match self {
            Register::Intcon => 0,
            Register::Pir1 => 1,
            Register::Trisa => 2,
            Register::Pie1 => 3,
            Register::Adresl => 4,
            Register::Adresh => 5,
            Register::Adcon0 => 6,
            Register::Adcon1 => 7,
            Register::Adcon2 => 8,
            Register::Ansela => 9,
        }
    }

    /// Datasheet name
    pub const fn name(self) -> &'static str {
        match self {
            Register::Intcon => "INTCON",
            Register::Pir1 => "PIR1",
            Register::Trisa => "TRISA",
            Register::Pie1 => "PIE1",
            Register::Adresl => "ADRESL",
            Register::Adresh => "ADRESH",
            Register::Adcon0 => "ADCON0",
            Register::Adcon1 => "ADCON1",
            Register::Adcon2 => "ADCON2",
            Register::Ansela => "ANSELA",
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:#05x}", self.name(), self.address())
    }
}

/// A register tagged with its bitfield layout `R`
pub struct Reg<R: RegisterLongName> {
    register: Register,
    _layout: PhantomData<R>,
}

impl<R: RegisterLongName> Reg<R> {
    /// Tag `register` with layout `R`
    pub const fn new(register: Register) -> Self {
        Self {
            register,
            _layout: PhantomData,
        }
    }

    /// The untyped register
    pub const fn register(self) -> Register {
        self.register
    }
}

impl<R: RegisterLongName> Clone for Reg<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: RegisterLongName> Copy for Reg<R> {}

impl<R: RegisterLongName> fmt::Debug for Reg<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Reg").field(&self.register).finish()
    }
}

/// Typed handles for every register in the map
pub mod reg {
    use super::{Reg, Register};
    use crate::bitfields::{ADCON0, ADCON1, ADCON2, ANSELA, INTCON, PIE1, PIR1, TRISA};

    pub const INTCON: Reg<INTCON::Register> = Reg::new(Register::Intcon);
    pub const PIR1: Reg<PIR1::Register> = Reg::new(Register::Pir1);
    pub const PIE1: Reg<PIE1::Register> = Reg::new(Register::Pie1);
    pub const TRISA: Reg<TRISA::Register> = Reg::new(Register::Trisa);
    pub const ANSELA: Reg<ANSELA::Register> = Reg::new(Register::Ansela);
    pub const ADCON0: Reg<ADCON0::Register> = Reg::new(Register::Adcon0);
    pub const ADCON1: Reg<ADCON1::Register> = Reg::new(Register::Adcon1);
    pub const ADCON2: Reg<ADCON2::Register> = Reg::new(Register::Adcon2);
    pub const ADRESH: Reg<()> = Reg::new(Register::Adresh);
    pub const ADRESL: Reg<()> = Reg::new(Register::Adresl);
}

/// Byte-wide access to the ADC's registers
///
/// This is the seam between the driver and the silicon: [`crate::Mmio`]
/// talks to the real special function registers, a simulated peripheral can
/// stand in for it on the host. Only [`read`](RegisterBlock::read) and
/// [`write`](RegisterBlock::write) need implementing; the typed helpers are
/// built on top of them.
pub trait RegisterBlock {
    /// Read the current value of a register
    fn read(&mut self, register: Register) -> u8;

    /// Overwrite a register
    fn write(&mut self, register: Register, value: u8);

    /// Read a register as a typed local copy
    fn load<R: RegisterLongName>(&mut self, reg: Reg<R>) -> LocalRegisterCopy<u8, R> {
        LocalRegisterCopy::new(self.read(reg.register()))
    }

    /// Write back a typed local copy
    fn store<R: RegisterLongName>(&mut self, reg: Reg<R>, value: LocalRegisterCopy<u8, R>) {
        self.write(reg.register(), value.get());
    }

    /// Overwrite a register with `fields`, every other bit cleared
    fn write_fields<R: RegisterLongName>(&mut self, reg: Reg<R>, fields: FieldValue<u8, R>) {
        let mut value = LocalRegisterCopy::new(0);
        value.modify(fields);
        self.store(reg, value);
    }

    /// Read-modify-write `fields`, leaving every other bit untouched
    fn modify<R: RegisterLongName>(&mut self, reg: Reg<R>, fields: FieldValue<u8, R>) {
        let mut value = self.load(reg);
        value.modify(fields);
        self.store(reg, value);
    }

    /// Test a single-bit field
    fn is_set<R: RegisterLongName>(&mut self, reg: Reg<R>, field: Field<u8, R>) -> bool {
        self.load(reg).is_set(field)
    }
}

impl<T: RegisterBlock> RegisterBlock for &mut T {
    fn read(&mut self, register: Register) -> u8 {
        (**self).read(register)
    }

    fn write(&mut self, register: Register, value: u8) {
        (**self).write(register, value)
    }
}
