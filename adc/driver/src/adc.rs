//! The ADC peripheral handle

use defmt_or_log::{debug, trace, warn};
use embedded_hal::delay::DelayNs;

use pic_adc_core::{
    scale_sample, AdcConfig, AdcError, AdcResult, Channel, RawSample, Resolution, ResultFormat,
};
use pic_adc_regs::bitfields::{ADCON0, ADCON1, ADCON2, ANSELA, INTCON, PIE1, PIR1, TRISA};
use pic_adc_regs::{reg, FieldValue, Register, RegisterBlock};

use crate::wait::wait_until;

/// Owned handle to the single ADC peripheral
///
/// `R` provides register access (see [`RegisterBlock`]), `D` the
/// acquisition delay. Constructing the handle applies the configuration, so
/// every conversion runs on a configured peripheral.
///
/// Only one conversion can be in flight. Both trigger paths refuse to start
/// another one with [`AdcError::Busy`] while the hardware still reports the
/// previous one as running.
#[derive(Debug)]
pub struct Adc<R, D> {
    regs: R,
    delay: D,
    config: AdcConfig,
}

impl<R: RegisterBlock, D: DelayNs> Adc<R, D> {
    /// Configure the peripheral and take ownership of it
    ///
    /// Sets RA0 and RA1 up as analog inputs, selects the references, clock,
    /// result format and resolution from `config`, and turns the converter
    /// on with AN0 selected.
    pub fn new(regs: R, delay: D, config: AdcConfig) -> Self {
        let mut adc = Self { regs, delay, config };
        adc.configure();
        adc
    }

    fn configure(&mut self) {
        let config = self.config;

        self.regs
            .modify(reg::TRISA, TRISA::TRISA0::SET + TRISA::TRISA1::SET);
        self.regs
            .modify(reg::ANSELA, ANSELA::ANSA0::SET + ANSELA::ANSA1::SET);

        self.regs.write_fields(
            reg::ADCON2,
            ADCON2::TRIGSEL::Disabled + ADCON2::CHSN::Adnref,
        );

        let format = match config.format {
            ResultFormat::SignMagnitude => ADCON1::ADFM::SignMagnitude,
            ResultFormat::TwosComplement => ADCON1::ADFM::TwosComplement,
        };
        self.regs.write_fields(
            reg::ADCON1,
            format
                + ADCON1::ADCS.val(config.clock.code())
                + ADCON1::ADNREF.val(config.negative_reference.code())
                + ADCON1::ADPREF.val(config.positive_reference.code()),
        );

        self.regs.write_fields(
            reg::ADCON0,
            resolution_mode(config.resolution)
                + ADCON0::CHS.val(Channel::AN0.raw())
                + ADCON0::ADON::SET,
        );

        debug!(
            "ADC configured: {} bit, ADCS {}",
            config.resolution.bits(),
            config.clock.code()
        );
    }

    /// The configuration applied at construction
    pub fn config(&self) -> &AdcConfig {
        &self.config
    }

    /// The configured conversion resolution
    pub fn resolution(&self) -> Resolution {
        self.config.resolution
    }

    /// Whether the hardware reports a conversion in flight
    pub fn is_converting(&mut self) -> bool {
        self.regs.is_set(reg::ADCON0, ADCON0::GO)
    }

    // Channel select, acquisition delay, GO
    fn trigger(&mut self, channel: Channel) -> AdcResult<()> {
        if self.is_converting() {
            warn!("Conversion requested on AN{} while busy", channel.raw());
            return Err(AdcError::Busy);
        }

        self.regs.modify(reg::ADCON0, ADCON0::CHS.val(channel.raw()));
        self.delay.delay_us(self.config.acquisition_us);
        self.regs.modify(reg::ADCON0, ADCON0::GO::SET);

        trace!("Conversion started on AN{}", channel.raw());
        Ok(())
    }

    fn assemble(&mut self) -> RawSample {
        let high = self.regs.read(Register::Adresh);
        let low = self.regs.read(Register::Adresl);
        RawSample::from_registers(high, low)
    }

    /// Convert `channel` and wait for the result
    ///
    /// Blocks for the acquisition delay plus the conversion. How long the
    /// busy flag is polled is governed by the configured
    /// [`WaitPolicy`](pic_adc_core::WaitPolicy); a bounded wait that runs out
    /// returns [`AdcError::Timeout`] and leaves the conversion running.
    pub fn poll_read(&mut self, channel: Channel) -> AdcResult<RawSample> {
        self.trigger(channel)?;

        let policy = self.config.wait;
        let regs = &mut self.regs;
        match wait_until(policy, || !regs.is_set(reg::ADCON0, ADCON0::GO)) {
            Ok(polls) => {
                trace!("Conversion on AN{} done after {} polls", channel.raw(), polls);
            }
            Err(err) => {
                warn!("Conversion on AN{} timed out", channel.raw());
                return Err(err);
            }
        }

        let sample = self.assemble();
        // Completion raised ADIF as well; drop it so the interrupt path
        // does not see this conversion as its own
        self.regs.modify(reg::PIR1, PIR1::ADIF::CLEAR);
        Ok(sample)
    }

    /// Convert `channel` and scale the result onto `[min, max]`
    pub fn read_scaled(&mut self, channel: Channel, min: f32, max: f32) -> AdcResult<f32> {
        let sample = self.poll_read(channel)?;
        self.scale(sample, min, max)
    }

    /// Scale a sample taken at the configured resolution onto `[min, max]`
    pub fn scale(&self, sample: RawSample, min: f32, max: f32) -> AdcResult<f32> {
        scale_sample(sample, self.config.resolution, min, max)
    }

    /// Enable delivery of the conversion-complete interrupt
    ///
    /// Sets ADIE, PEIE and GIE. A completion flag left over from earlier
    /// polled conversions is cleared first, unless the interrupt was already
    /// enabled, so calling this again is harmless.
    pub fn enable_interrupts(&mut self) {
        if !self.regs.is_set(reg::PIE1, PIE1::ADIE) {
            self.regs.modify(reg::PIR1, PIR1::ADIF::CLEAR);
            self.regs.modify(reg::PIE1, PIE1::ADIE::SET);
        }
        self.regs
            .modify(reg::INTCON, INTCON::PEIE::SET + INTCON::GIE::SET);
        debug!("ADC interrupt enabled");
    }

    /// Stop the converter from raising its interrupt
    ///
    /// PEIE and GIE are shared with other peripherals and stay as they are.
    pub fn disable_interrupts(&mut self) {
        self.regs.modify(reg::PIE1, PIE1::ADIE::CLEAR);
    }

    /// Start converting `channel` and return without waiting
    ///
    /// Completion is signalled by the ADC interrupt; collect the sample with
    /// [`handle_interrupt`](Self::handle_interrupt) from the handler, or with
    /// [`read_result`](Self::read_result) / [`try_read`](Self::try_read).
    pub fn start_conversion(&mut self, channel: Channel) -> AdcResult<()> {
        self.trigger(channel)
    }

    /// Read the result of the last conversion
    ///
    /// Fails with [`AdcError::NotReady`] while a conversion is still running.
    pub fn read_result(&mut self) -> AdcResult<RawSample> {
        if self.is_converting() {
            return Err(AdcError::NotReady);
        }
        Ok(self.assemble())
    }

    /// Non-blocking completion check
    pub fn try_read(&mut self) -> nb::Result<RawSample, AdcError> {
        if self.is_converting() {
            return Err(nb::Error::WouldBlock);
        }
        Ok(self.assemble())
    }

    /// Service the conversion-complete interrupt
    ///
    /// Call from the interrupt handler. If ADIF is set it is acknowledged
    /// and the new sample returned; otherwise the interrupt came from
    /// another source and `None` is returned.
    pub fn handle_interrupt(&mut self) -> Option<RawSample> {
        if !self.regs.is_set(reg::PIR1, PIR1::ADIF) {
            return None;
        }
        self.regs.modify(reg::PIR1, PIR1::ADIF::CLEAR);
        Some(self.assemble())
    }

    /// Direct access to the register capability
    pub fn registers_mut(&mut self) -> &mut R {
        &mut self.regs
    }

    /// Give back the register capability and the delay
    pub fn free(self) -> (R, D) {
        (self.regs, self.delay)
    }
}

fn resolution_mode(resolution: Resolution) -> FieldValue<u8, ADCON0::Register> {
    match resolution {
        Resolution::Bits10 => ADCON0::ADRMD::Bits10,
        Resolution::Bits12 => ADCON0::ADRMD::Bits12,
    }
}
