#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![forbid(unsafe_code)]

//! # PIC ADC Core
//!
//! Hardware-independent building blocks of the PIC ADC driver: the error
//! taxonomy, the channel / resolution / sample value types, the peripheral
//! configuration values and the pure scaling function that maps a raw sample
//! onto a caller-defined range.

use core::fmt;

pub mod config;
pub mod sample;
pub mod scale;

pub use config::*;
pub use sample::*;
pub use scale::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type used throughout the driver
pub type AdcResult<T> = Result<T, AdcError>;

/// Error types for ADC operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdcError {
    /// A strict configuration request named a value the hardware cannot do
    InvalidConfiguration,
    /// Scaling target range has `min > max` (or a NaN bound)
    InvalidRange,
    /// Scaling bit width is not one of 8, 10 or 12
    UnsupportedBitWidth(u8),
    /// Channel number does not fit the channel-select field
    InvalidChannel(u8),
    /// The converter did not clear its busy flag within the wait bound
    Timeout,
    /// A conversion is already in flight
    Busy,
    /// The result was requested before the conversion completed
    NotReady,
    /// No ADC handle has been installed
    Uninitialized,
}

impl fmt::Display for AdcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdcError::InvalidConfiguration => write!(f, "Invalid ADC configuration"),
            AdcError::InvalidRange => write!(f, "Scaling range minimum exceeds maximum"),
            AdcError::UnsupportedBitWidth(bits) => {
                write!(f, "Unsupported bit width: {}", bits)
            }
            AdcError::InvalidChannel(ch) => write!(f, "Invalid ADC channel: {}", ch),
            AdcError::Timeout => write!(f, "Conversion timed out"),
            AdcError::Busy => write!(f, "Conversion already in progress"),
            AdcError::NotReady => write!(f, "Conversion not complete"),
            AdcError::Uninitialized => write!(f, "ADC not initialized"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AdcError {}

#[cfg(feature = "defmt")]
impl defmt::Format for AdcError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            AdcError::InvalidConfiguration => defmt::write!(fmt, "InvalidConfiguration"),
            AdcError::InvalidRange => defmt::write!(fmt, "InvalidRange"),
            AdcError::UnsupportedBitWidth(bits) => {
                defmt::write!(fmt, "UnsupportedBitWidth({})", bits)
            }
            AdcError::InvalidChannel(ch) => defmt::write!(fmt, "InvalidChannel({})", ch),
            AdcError::Timeout => defmt::write!(fmt, "Timeout"),
            AdcError::Busy => defmt::write!(fmt, "Busy"),
            AdcError::NotReady => defmt::write!(fmt, "NotReady"),
            AdcError::Uninitialized => defmt::write!(fmt, "Uninitialized"),
        }
    }
}
