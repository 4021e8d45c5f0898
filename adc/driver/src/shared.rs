//! ADC handle shared between the main loop and the interrupt handler

use core::cell::{Cell, RefCell};

use critical_section::Mutex;
use embedded_hal::delay::DelayNs;

use pic_adc_core::{AdcError, AdcResult, Channel, RawSample};
use pic_adc_regs::RegisterBlock;

use crate::Adc;

/// Interrupt-safe home for the [`Adc`] handle
///
/// Meant to live in a `static`: the main loop installs the configured handle
/// and starts conversions, the interrupt handler calls
/// [`on_interrupt`](Self::on_interrupt), which stores the finished sample for
/// the main loop to pick up with [`take_sample`](Self::take_sample). Every
/// access runs inside a critical section.
///
/// ```rust,ignore
/// static ADC: SharedAdc<Mmio, Delay> = SharedAdc::new();
///
/// fn isr() {
///     ADC.on_interrupt();
/// }
/// ```
pub struct SharedAdc<R, D> {
    adc: Mutex<RefCell<Option<Adc<R, D>>>>,
    latest: Mutex<Cell<Option<RawSample>>>,
}

impl<R, D> SharedAdc<R, D> {
    /// An empty slot
    pub const fn new() -> Self {
        Self {
            adc: Mutex::new(RefCell::new(None)),
            latest: Mutex::new(Cell::new(None)),
        }
    }
}

impl<R, D> Default for SharedAdc<R, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RegisterBlock, D: DelayNs> SharedAdc<R, D> {
    /// Move a handle in, returning the one it replaces
    pub fn install(&self, adc: Adc<R, D>) -> Option<Adc<R, D>> {
        critical_section::with(|cs| self.adc.borrow_ref_mut(cs).replace(adc))
    }

    /// Move the handle back out
    pub fn take(&self) -> Option<Adc<R, D>> {
        critical_section::with(|cs| self.adc.borrow_ref_mut(cs).take())
    }

    /// Run `f` on the installed handle
    pub fn with<T, F>(&self, f: F) -> AdcResult<T>
    where
        F: FnOnce(&mut Adc<R, D>) -> T,
    {
        critical_section::with(|cs| {
            let mut slot = self.adc.borrow_ref_mut(cs);
            let adc = slot.as_mut().ok_or(AdcError::Uninitialized)?;
            Ok(f(adc))
        })
    }

    /// Start a conversion on the installed handle
    pub fn start_conversion(&self, channel: Channel) -> AdcResult<()> {
        self.with(|adc| adc.start_conversion(channel))?
    }

    /// Interrupt handler entry point
    ///
    /// Returns the sample if this interrupt was the ADC's. Does nothing
    /// when no handle is installed.
    pub fn on_interrupt(&self) -> Option<RawSample> {
        critical_section::with(|cs| {
            let sample = self.adc.borrow_ref_mut(cs).as_mut()?.handle_interrupt()?;
            self.latest.borrow(cs).set(Some(sample));
            Some(sample)
        })
    }

    /// Collect the sample stored by the last interrupt, if any
    pub fn take_sample(&self) -> Option<RawSample> {
        critical_section::with(|cs| self.latest.borrow(cs).take())
    }
}
