//! Blocking conversion tests against the simulated peripheral

use pic_adc::regs::bitfields::PIR1;
use pic_adc::regs::{reg, Register, RegisterBlock};
use pic_adc::{Adc, AdcConfig, AdcError, Channel, RawSample, WaitPolicy};
use pic_adc_sim::{SimDelay, SimulatedAdc};

fn adc_with(sim: SimulatedAdc, config: AdcConfig) -> Adc<SimulatedAdc, SimDelay> {
    Adc::new(sim, SimDelay::new(), config)
}

#[test]
fn test_poll_read_returns_sample() {
    let mut sim = SimulatedAdc::new();
    sim.set_input(Channel::AN0, 2048);
    sim.set_input(Channel::AN1, 0x0ABC);
    let mut adc = adc_with(sim, AdcConfig::default());

    assert_eq!(adc.poll_read(Channel::AN0), Ok(RawSample(2048)));
    assert_eq!(adc.poll_read(Channel::AN1), Ok(RawSample(0x0ABC)));
    assert_eq!(adc.registers_mut().conversions(), 2);
}

#[test]
fn test_poll_read_selects_channel() {
    let mut sim = SimulatedAdc::new();
    sim.set_input(Channel::AN1, 7);
    let mut adc = adc_with(sim, AdcConfig::default());
    adc.poll_read(Channel::AN1).unwrap();

    let adcon0 = adc.registers_mut().register(Register::Adcon0);
    assert_eq!((adcon0 >> 2) & 0x1F, 1);
    assert_eq!(adcon0 & 0x02, 0, "GO must be clear after completion");
}

#[test]
fn test_acquisition_delay_before_each_conversion() {
    let mut adc = adc_with(SimulatedAdc::new(), AdcConfig::default());
    adc.poll_read(Channel::AN0).unwrap();
    adc.poll_read(Channel::AN0).unwrap();

    let (_, delay) = adc.free();
    assert_eq!(delay.calls(), 2);
    assert_eq!(delay.total_us(), 4);
}

#[test]
fn test_poll_read_clears_completion_flag() {
    let mut adc = adc_with(SimulatedAdc::new(), AdcConfig::default());
    adc.poll_read(Channel::AN0).unwrap();
    assert!(!adc.registers_mut().is_set(reg::PIR1, PIR1::ADIF));
}

#[test]
fn test_ten_bit_results_fit_ten_bits() {
    let mut sim = SimulatedAdc::new();
    sim.set_input(Channel::AN0, 0x0FFF);
    let mut adc = adc_with(sim, AdcConfig::from_resolution_request(10));
    assert_eq!(adc.poll_read(Channel::AN0), Ok(RawSample(1023)));
}

#[test]
fn test_stuck_converter_times_out() {
    let config = AdcConfig::default().with_wait(WaitPolicy::Bounded { max_polls: 100 });
    let mut adc = adc_with(SimulatedAdc::manual(), config);

    assert_eq!(adc.poll_read(Channel::AN0), Err(AdcError::Timeout));
    // The conversion is still in flight and blocks the next one
    assert!(adc.is_converting());
    assert_eq!(adc.poll_read(Channel::AN0), Err(AdcError::Busy));
}

#[test]
fn test_busy_does_not_touch_registers() {
    let mut adc = adc_with(SimulatedAdc::manual(), AdcConfig::default());
    adc.start_conversion(Channel::AN0).unwrap();
    adc.registers_mut().clear_writes();

    assert_eq!(adc.poll_read(Channel::AN1), Err(AdcError::Busy));
    assert!(adc.registers_mut().writes().is_empty());
}

#[test]
fn test_recovers_after_timeout() {
    let config = AdcConfig::default().with_wait(WaitPolicy::Bounded { max_polls: 10 });
    let mut sim = SimulatedAdc::manual();
    sim.set_input(Channel::AN0, 300);
    let mut adc = adc_with(sim, config);

    assert_eq!(adc.poll_read(Channel::AN0), Err(AdcError::Timeout));
    adc.registers_mut().complete_conversion();
    assert_eq!(adc.read_result(), Ok(RawSample(300)));

    adc.registers_mut().set_latency(Some(2));
    assert_eq!(adc.poll_read(Channel::AN0), Ok(RawSample(300)));
}

#[test]
fn test_unbounded_wait_completes() {
    let mut sim = SimulatedAdc::new();
    sim.set_latency(Some(20_000));
    sim.set_input(Channel::AN0, 42);
    let config = AdcConfig::default().with_wait(WaitPolicy::Unbounded);
    let mut adc = adc_with(sim, config);
    assert_eq!(adc.poll_read(Channel::AN0), Ok(RawSample(42)));
}

#[test]
fn test_read_scaled() {
    let mut sim = SimulatedAdc::new();
    sim.set_input(Channel::AN0, 2048);
    let mut adc = adc_with(sim, AdcConfig::from_resolution_request(12));

    let value = adc.read_scaled(Channel::AN0, 0.0, 99.0).unwrap();
    assert!((value - 49.51).abs() < 0.01, "got {}", value);
}

#[test]
fn test_read_scaled_rejects_inverted_range() {
    let mut adc = adc_with(SimulatedAdc::new(), AdcConfig::default());
    assert_eq!(adc.read_scaled(Channel::AN0, 5.0, 1.0), Err(AdcError::InvalidRange));
}

#[test]
fn test_scale_uses_configured_resolution() {
    let adc = adc_with(SimulatedAdc::new(), AdcConfig::from_resolution_request(10));
    assert_eq!(adc.scale(RawSample(1023), 0.0, 3.3), Ok(3.3));
    assert_eq!(adc.scale(RawSample(0), 0.0, 3.3), Ok(0.0));
}
