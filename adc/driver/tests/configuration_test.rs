//! Register-level checks of the configuration sequence
//! Runs the driver against the simulated peripheral on the host

use pic_adc::regs::Register;
use pic_adc::{Adc, AdcConfig, ClockDivider, Resolution, ResultFormat};
use pic_adc_sim::{SimDelay, SimulatedAdc};

fn configure(config: AdcConfig) -> SimulatedAdc {
    let adc = Adc::new(SimulatedAdc::new(), SimDelay::new(), config);
    let (sim, _) = adc.free();
    sim
}

#[test]
fn test_configuration_sequence_12_bit() {
    let sim = configure(AdcConfig::from_resolution_request(12));
    assert_eq!(
        sim.writes(),
        &[
            (Register::Trisa, 0x03),
            (Register::Ansela, 0x03),
            (Register::Adcon2, 0x0F),
            (Register::Adcon1, 0xD0),
            (Register::Adcon0, 0x01),
        ]
    );
}

#[test]
fn test_configuration_sequence_10_bit() {
    let sim = configure(AdcConfig::from_resolution_request(10));
    assert_eq!(sim.register(Register::Adcon0), 0x81);
    assert_eq!(sim.register(Register::Adcon1), 0xD0);
    assert_eq!(sim.register(Register::Adcon2), 0x0F);
}

#[test]
fn test_pin_setup_preserves_other_bits() {
    let mut sim = SimulatedAdc::new();
    sim.set_register(Register::Trisa, 0xF0);
    sim.set_register(Register::Ansela, 0x20);
    let adc = Adc::new(sim, SimDelay::new(), AdcConfig::default());
    let (sim, _) = adc.free();
    assert_eq!(sim.register(Register::Trisa), 0xF3);
    assert_eq!(sim.register(Register::Ansela), 0x23);
}

#[test]
fn test_control_registers_fully_overwritten() {
    let mut sim = SimulatedAdc::new();
    sim.set_register(Register::Adcon0, 0x7C);
    sim.set_register(Register::Adcon1, 0x0F);
    sim.set_register(Register::Adcon2, 0xF0);
    let adc = Adc::new(sim, SimDelay::new(), AdcConfig::default());
    let (sim, _) = adc.free();
    assert_eq!(sim.register(Register::Adcon0), 0x01);
    assert_eq!(sim.register(Register::Adcon1), 0xD0);
    assert_eq!(sim.register(Register::Adcon2), 0x0F);
}

#[test]
fn test_resolution_request_is_lenient() {
    let cases = [
        (10, Resolution::Bits10),
        (12, Resolution::Bits12),
        (0, Resolution::Bits12),
        (-1, Resolution::Bits12),
        (99, Resolution::Bits12),
    ];
    for (request, expected) in cases {
        let adc = Adc::new(
            SimulatedAdc::new(),
            SimDelay::new(),
            AdcConfig::from_resolution_request(request),
        );
        assert_eq!(adc.resolution(), expected, "request {}", request);
    }
}

#[test]
fn test_alternative_clock_and_format() {
    let config = AdcConfig {
        clock: ClockDivider::Frc,
        format: ResultFormat::SignMagnitude,
        ..AdcConfig::default()
    };
    let sim = configure(config);
    assert_eq!(sim.register(Register::Adcon1), ClockDivider::Frc.code() << 4);
}

#[test]
fn test_configuration_does_not_convert() {
    let sim = configure(AdcConfig::default());
    assert!(!sim.is_converting());
    assert_eq!(sim.conversions(), 0);
}
