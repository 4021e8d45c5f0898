//! Channel, resolution and sample value types

use core::fmt;
use crate::{AdcError, AdcResult};

/// Analog input channel selector
///
/// Only the width of the channel-select field is checked; whether a pin is
/// actually wired to the requested channel is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Channel(u8);

impl Channel {
    /// RA0 / AN0, configured as analog input by the driver
    pub const AN0: Channel = Channel(0);
    /// RA1 / AN1, configured as analog input by the driver
    pub const AN1: Channel = Channel(1);

    /// Highest value the 5-bit channel-select field can hold
    pub const MAX: u8 = 0x1F;

    /// Create a channel selector
    pub const fn new(channel: u8) -> AdcResult<Self> {
        if channel > Self::MAX {
            Err(AdcError::InvalidChannel(channel))
        } else {
            Ok(Self(channel))
        }
    }

    /// Get the raw channel number
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Channel {
    type Error = AdcError;

    fn try_from(channel: u8) -> AdcResult<Self> {
        Self::new(channel)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AN{}", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Channel {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "AN{}", self.0);
    }
}

/// Conversion resolution supported by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution {
    /// 10-bit result
    Bits10,
    /// 12-bit result
    #[default]
    Bits12,
}

impl Resolution {
    /// Interpret a resolution request the lenient way
    ///
    /// Exactly `10` selects 10-bit mode. Every other value, including
    /// nonsense such as `0`, `-1` or `99`, selects 12-bit mode.
    pub const fn from_request(request: i32) -> Self {
        if request == 10 {
            Resolution::Bits10
        } else {
            Resolution::Bits12
        }
    }

    /// Number of result bits
    pub const fn bits(self) -> u8 {
        match self {
            Resolution::Bits10 => 10,
            Resolution::Bits12 => 12,
        }
    }

    /// The scaling bit width matching this resolution
    pub const fn bit_width(self) -> BitWidth {
        match self {
            Resolution::Bits10 => BitWidth::Bits10,
            Resolution::Bits12 => BitWidth::Bits12,
        }
    }

    /// Largest sample the converter produces in this mode
    pub const fn max_value(self) -> u16 {
        self.bit_width().max_value()
    }
}

/// Strict parsing: anything but 10 or 12 is rejected
impl TryFrom<u8> for Resolution {
    type Error = AdcError;

    fn try_from(bits: u8) -> AdcResult<Self> {
        match bits {
            10 => Ok(Resolution::Bits10),
            12 => Ok(Resolution::Bits12),
            _ => Err(AdcError::InvalidConfiguration),
        }
    }
}

/// Bit width accepted by the scaling function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitWidth {
    Bits8,
    Bits10,
    Bits12,
}

impl BitWidth {
    /// Full-scale value for this width
    pub const fn max_value(self) -> u16 {
        match self {
            BitWidth::Bits8 => 255,
            BitWidth::Bits10 => 1023,
            BitWidth::Bits12 => 4095,
        }
    }

    /// Number of bits
    pub const fn bits(self) -> u8 {
        match self {
            BitWidth::Bits8 => 8,
            BitWidth::Bits10 => 10,
            BitWidth::Bits12 => 12,
        }
    }
}

impl TryFrom<u8> for BitWidth {
    type Error = AdcError;

    fn try_from(bits: u8) -> AdcResult<Self> {
        match bits {
            8 => Ok(BitWidth::Bits8),
            10 => Ok(BitWidth::Bits10),
            12 => Ok(BitWidth::Bits12),
            other => Err(AdcError::UnsupportedBitWidth(other)),
        }
    }
}

/// Unscaled result of one conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RawSample(pub u16);

impl RawSample {
    /// Assemble a sample from the high and low result bytes
    pub const fn from_registers(high: u8, low: u8) -> Self {
        Self(((high as u16) << 8) | low as u16)
    }

    /// Get the raw value
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Split back into (high, low) result bytes
    pub const fn to_registers(self) -> (u8, u8) {
        ((self.0 >> 8) as u8, self.0 as u8)
    }
}

impl From<RawSample> for u16 {
    fn from(sample: RawSample) -> u16 {
        sample.0
    }
}

impl fmt::Display for RawSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for RawSample {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_assembly() {
        let sample = RawSample::from_registers(0x0A, 0x3C);
        assert_eq!(sample.value(), 0x0A3C);
        assert_eq!(sample.value(), 2620);
        assert_eq!(sample.to_registers(), (0x0A, 0x3C));
    }

    #[test]
    fn test_resolution_fallback() {
        assert_eq!(Resolution::from_request(10), Resolution::Bits10);
        for request in [12, 0, -1, 99, 8, 11] {
            assert_eq!(Resolution::from_request(request), Resolution::Bits12);
        }
    }

    #[test]
    fn test_resolution_strict() {
        assert_eq!(Resolution::try_from(10), Ok(Resolution::Bits10));
        assert_eq!(Resolution::try_from(12), Ok(Resolution::Bits12));
        assert_eq!(Resolution::try_from(8), Err(AdcError::InvalidConfiguration));
    }

    #[test]
    fn test_channel_field_width() {
        assert_eq!(Channel::new(0), Ok(Channel::AN0));
        assert_eq!(Channel::new(31).map(Channel::raw), Ok(31));
        assert_eq!(Channel::new(32), Err(AdcError::InvalidChannel(32)));
    }

    #[test]
    fn test_bit_width_max_values() {
        assert_eq!(BitWidth::Bits8.max_value(), 255);
        assert_eq!(BitWidth::Bits10.max_value(), 1023);
        assert_eq!(BitWidth::Bits12.max_value(), 4095);
        assert_eq!(BitWidth::try_from(16), Err(AdcError::UnsupportedBitWidth(16)));
        assert_eq!(Resolution::Bits10.max_value(), 1023);
    }
}
