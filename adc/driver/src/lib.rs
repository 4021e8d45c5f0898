#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![forbid(unsafe_code)]

//! # PIC ADC
//!
//! Driver for the 10/12-bit analog-to-digital converter of PIC16F1787-class
//! microcontrollers. It configures the converter for analog inputs on
//! RA0/RA1, runs conversions either by polling the busy flag or by waiting
//! for the conversion-complete interrupt, and scales raw samples onto a
//! caller-defined range.
//!
//! The driver reaches the hardware only through a
//! [`RegisterBlock`](regs::RegisterBlock) and an `embedded-hal`
//! [`DelayNs`](embedded_hal::delay::DelayNs), so it runs unchanged against
//! the simulated peripheral in `pic-adc-sim`.
//!
//! ## Polling
//!
//! ```rust,ignore
//! use pic_adc::{Adc, AdcConfig, Channel};
//!
//! let config = AdcConfig::from_resolution_request(12);
//! let mut adc = Adc::new(regs, delay, config);
//!
//! let sample = adc.poll_read(Channel::AN0)?;
//! let percent = adc.scale(sample, 0.0, 100.0)?;
//! ```
//!
//! ## Interrupt driven
//!
//! ```rust,ignore
//! use pic_adc::{Adc, AdcConfig, Channel, SharedAdc};
//!
//! static ADC: SharedAdc<Mmio, Delay> = SharedAdc::new();
//!
//! let mut adc = Adc::new(regs, delay, AdcConfig::default());
//! adc.enable_interrupts();
//! ADC.install(adc);
//! ADC.start_conversion(Channel::AN1)?;
//!
//! // in the interrupt handler
//! ADC.on_interrupt();
//!
//! // back in the main loop
//! if let Some(sample) = ADC.take_sample() { /* ... */ }
//! ```

mod adc;
mod shared;
pub mod wait;

pub use adc::Adc;
pub use shared::SharedAdc;

pub use pic_adc_core::{
    scale, scale_or_sentinel, scale_sample, AdcConfig, AdcError, AdcResult, BitWidth, Channel,
    ClockDivider, NegativeReference, PositiveReference, RawSample, Resolution, ResultFormat,
    ScaleRequest, WaitPolicy, ACQUISITION_TIME_US, DEFAULT_MAX_POLLS, OSCILLATOR_HZ,
    SCALE_SENTINEL,
};
pub use pic_adc_regs as regs;
