//! Mapping raw samples onto caller-defined ranges

use crate::{AdcError, AdcResult, BitWidth, RawSample, Resolution};

/// Value returned by [`scale_or_sentinel`] when the inputs are invalid
///
/// It is indistinguishable from a genuine result of 255.0.
pub const SCALE_SENTINEL: f32 = 255.0;

/// Linearly rescale `raw` from `[0, full scale of bits]` onto `[min, max]`
///
/// `bits` must be 8, 10 or 12 and `min` must not exceed `max`. Results are
/// not rounded; `raw == 0` yields exactly `min` and a full-scale `raw` yields
/// exactly `max`.
pub fn scale(raw: u16, bits: u8, min: f32, max: f32) -> AdcResult<f32> {
    // Written as a negated `<=` so NaN bounds are rejected too
    if !(min <= max) {
        return Err(AdcError::InvalidRange);
    }
    let width = BitWidth::try_from(bits)?;
    Ok(interpolate(raw, width, min, max))
}

/// [`scale`] with the legacy error signal
///
/// Returns [`SCALE_SENTINEL`] instead of an error.
pub fn scale_or_sentinel(raw: u16, bits: u8, min: f32, max: f32) -> f32 {
    scale(raw, bits, min, max).unwrap_or(SCALE_SENTINEL)
}

/// Scale a sample produced at a known converter resolution
pub fn scale_sample(sample: RawSample, resolution: Resolution, min: f32, max: f32) -> AdcResult<f32> {
    scale(sample.value(), resolution.bits(), min, max)
}

fn interpolate(raw: u16, width: BitWidth, min: f32, max: f32) -> f32 {
    let t = raw as f32 / width.max_value() as f32;
    min * (1.0 - t) + max * t
}

/// One conversion-to-real-units mapping
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScaleRequest {
    pub raw: u16,
    pub bits: u8,
    pub min: f32,
    pub max: f32,
}

impl ScaleRequest {
    /// Create a new scale request
    pub const fn new(raw: u16, bits: u8, min: f32, max: f32) -> Self {
        Self { raw, bits, min, max }
    }

    /// Evaluate the request
    pub fn apply(&self) -> AdcResult<f32> {
        scale(self.raw, self.bits, self.min, self.max)
    }
}
