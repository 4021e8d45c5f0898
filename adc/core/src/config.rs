//! Peripheral configuration values

use crate::Resolution;

/// Oscillator frequency the default clock divider is chosen for
pub const OSCILLATOR_HZ: u32 = 8_000_000;

/// Settling time between channel selection and the start of a conversion
pub const ACQUISITION_TIME_US: u32 = 2;

/// Busy-flag polls allowed before a conversion is declared stuck
///
/// A 12-bit conversion takes about 15 conversion clocks (30 us at Fosc/16,
/// 8 MHz); this leaves several orders of magnitude of headroom.
pub const DEFAULT_MAX_POLLS: u32 = 10_000;

/// Positive voltage reference (ADPREF)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PositiveReference {
    /// Supply rail VDD
    #[default]
    Vdd,
    /// External VREF+ pin
    VrefPin,
    /// Internal fixed voltage reference
    Fvr,
}

impl PositiveReference {
    /// ADPREF field encoding
    pub const fn code(self) -> u8 {
        match self {
            PositiveReference::Vdd => 0b00,
            PositiveReference::VrefPin => 0b10,
            PositiveReference::Fvr => 0b11,
        }
    }
}

/// Negative voltage reference (ADNREF)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NegativeReference {
    /// Supply rail VSS
    #[default]
    Vss,
    /// External VREF- pin
    VrefPin,
}

impl NegativeReference {
    /// ADNREF field encoding
    pub const fn code(self) -> u8 {
        match self {
            NegativeReference::Vss => 0,
            NegativeReference::VrefPin => 1,
        }
    }
}

/// Conversion clock source (ADCS)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockDivider {
    Fosc2,
    Fosc4,
    Fosc8,
    #[default]
    Fosc16,
    Fosc32,
    Fosc64,
    /// Dedicated internal RC oscillator
    Frc,
}

impl ClockDivider {
    /// ADCS field encoding
    pub const fn code(self) -> u8 {
        match self {
            ClockDivider::Fosc2 => 0b000,
            ClockDivider::Fosc8 => 0b001,
            ClockDivider::Fosc32 => 0b010,
            ClockDivider::Frc => 0b011,
            ClockDivider::Fosc4 => 0b100,
            ClockDivider::Fosc16 => 0b101,
            ClockDivider::Fosc64 => 0b110,
        }
    }

    /// Oscillator cycles per conversion clock, `None` for the RC clock
    pub const fn divisor(self) -> Option<u32> {
        match self {
            ClockDivider::Fosc2 => Some(2),
            ClockDivider::Fosc4 => Some(4),
            ClockDivider::Fosc8 => Some(8),
            ClockDivider::Fosc16 => Some(16),
            ClockDivider::Fosc32 => Some(32),
            ClockDivider::Fosc64 => Some(64),
            ClockDivider::Frc => None,
        }
    }

    /// Conversion clock period (TAD) in nanoseconds for a given oscillator
    pub const fn tad_ns(self, oscillator_hz: u32) -> Option<u32> {
        match self.divisor() {
            Some(divisor) if oscillator_hz > 0 => {
                Some((divisor as u64 * 1_000_000_000 / oscillator_hz as u64) as u32)
            }
            _ => None,
        }
    }
}

/// Result encoding (ADFM)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResultFormat {
    SignMagnitude,
    #[default]
    TwosComplement,
}

/// How long the polling path waits for the busy flag to clear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WaitPolicy {
    /// Give up with a timeout after `max_polls` reads of the busy flag
    Bounded { max_polls: u32 },
    /// Spin until the hardware clears the flag, forever if it never does
    Unbounded,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        WaitPolicy::Bounded {
            max_polls: DEFAULT_MAX_POLLS,
        }
    }
}

/// ADC configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcConfig {
    pub resolution: Resolution,
    pub positive_reference: PositiveReference,
    pub negative_reference: NegativeReference,
    pub clock: ClockDivider,
    pub format: ResultFormat,
    /// Acquisition delay applied before every conversion, in microseconds
    pub acquisition_us: u32,
    pub wait: WaitPolicy,
}

impl AdcConfig {
    /// Default configuration with a lenient resolution request
    ///
    /// See [`Resolution::from_request`].
    pub fn from_resolution_request(request: i32) -> Self {
        Self {
            resolution: Resolution::from_request(request),
            ..Self::default()
        }
    }

    /// Replace the resolution
    pub const fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    /// Replace the wait policy
    pub const fn with_wait(mut self, wait: WaitPolicy) -> Self {
        self.wait = wait;
        self
    }
}

impl Default for AdcConfig {
    fn default() -> Self {
        Self {
            resolution: Resolution::Bits12,
            positive_reference: PositiveReference::Vdd,
            negative_reference: NegativeReference::Vss,
            clock: ClockDivider::Fosc16,
            format: ResultFormat::TwosComplement,
            acquisition_us: ACQUISITION_TIME_US,
            wait: WaitPolicy::default(),
        }
    }
}
