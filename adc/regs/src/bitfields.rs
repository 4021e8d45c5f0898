//! Bitfield layouts of the registers touched by the driver

use tock_registers::register_bitfields;

register_bitfields![u8,
    /// Interrupt control register
    pub INTCON [
        /// Global interrupt enable
        GIE OFFSET(7) NUMBITS(1) [],
        /// Peripheral interrupt enable
        PEIE OFFSET(6) NUMBITS(1) []
    ],
    /// Peripheral interrupt request register 1
    pub PIR1 [
        /// ADC conversion complete flag
        ADIF OFFSET(6) NUMBITS(1) []
    ],
    /// Peripheral interrupt enable register 1
    pub PIE1 [
        /// ADC conversion complete interrupt enable
        ADIE OFFSET(6) NUMBITS(1) []
    ],
    /// Port A direction register
    pub TRISA [
        TRISA1 OFFSET(1) NUMBITS(1) [],
        TRISA0 OFFSET(0) NUMBITS(1) []
    ],
    /// Port A analog select register
    pub ANSELA [
        ANSA1 OFFSET(1) NUMBITS(1) [],
        ANSA0 OFFSET(0) NUMBITS(1) []
    ],
    /// ADC control register 0
    pub ADCON0 [
        /// Result mode
        ADRMD OFFSET(7) NUMBITS(1) [
            Bits12 = 0,
            Bits10 = 1
        ],
        /// Positive input channel select, 0..=31
        CHS OFFSET(2) NUMBITS(5) [],
        /// Conversion status: write 1 to start, cleared by hardware when done
        GO OFFSET(1) NUMBITS(1) [],
        /// ADC enable
        ADON OFFSET(0) NUMBITS(1) []
    ],
    /// ADC control register 1
    pub ADCON1 [
        /// Result format
        ADFM OFFSET(7) NUMBITS(1) [
            SignMagnitude = 0,
            TwosComplement = 1
        ],
        /// Conversion clock select, 0..=7
        ADCS OFFSET(4) NUMBITS(3) [],
        /// Negative voltage reference, 0 = VSS, 1 = VREF- pin
        ADNREF OFFSET(2) NUMBITS(1) [],
        /// Positive voltage reference, 0b00 = VDD, 0b10 = VREF+ pin, 0b11 = FVR
        ADPREF OFFSET(0) NUMBITS(2) []
    ],
    /// ADC control register 2
    pub ADCON2 [
        /// Auto-conversion trigger source
        TRIGSEL OFFSET(4) NUMBITS(4) [
            Disabled = 0
        ],
        /// Negative differential input channel
        CHSN OFFSET(0) NUMBITS(4) [
            Adnref = 0b1111 // single-ended, negative input follows ADNREF
        ]
    ]
];
