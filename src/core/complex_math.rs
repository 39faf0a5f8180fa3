use crate::core::{
    actions::{
        arithmetic::{add, divide, multiply, subtract},
        convert::{convert, convert_with},
        measure::{conjugate, modulus, phase},
    },
    config::ComplexMathConfig,
    conversion::mode::ConversionMode,
    data::{complex::Complex, precision::Precision},
    errors::ComplexMathError,
};

/// The arithmetic operations bound to one [`ComplexMathConfig`].
///
/// `ComplexMath::default()` rounds to 4 decimal places and computes phase with
/// the single-argument arctangent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComplexMath {
    config: ComplexMathConfig,
}

impl ComplexMath {
    #[must_use]
    pub fn new(config: ComplexMathConfig) -> Self {
        Self { config }
    }

    pub fn with_decimal_places(decimal_places: u32) -> Result<Self, ComplexMathError> {
        let precision = Precision::new(decimal_places)?;

        Ok(Self::new(ComplexMathConfig::default().with_precision(precision)))
    }

    #[must_use]
    pub fn config(&self) -> ComplexMathConfig {
        self.config
    }

    #[must_use]
    pub fn precision(&self) -> Precision {
        self.config.precision
    }

    #[must_use]
    pub fn add(&self, a: Complex, b: Complex) -> Complex {
        add(a, b, self.config.precision)
    }

    #[must_use]
    pub fn subtract(&self, a: Complex, b: Complex) -> Complex {
        subtract(a, b, self.config.precision)
    }

    #[must_use]
    pub fn multiply(&self, a: Complex, b: Complex) -> Complex {
        multiply(a, b, self.config.precision)
    }

    pub fn divide(&self, a: Complex, b: Complex) -> Result<Complex, ComplexMathError> {
        divide(a, b, self.config.precision)
    }

    #[must_use]
    pub fn modulus(&self, a: Complex) -> f64 {
        modulus(a, self.config.precision)
    }

    #[must_use]
    pub fn conjugate(&self, a: Complex) -> Complex {
        conjugate(a, self.config.precision)
    }

    pub fn phase(&self, a: Complex) -> Result<f64, ComplexMathError> {
        phase(a, self.config.precision, self.config.phase_convention)
    }

    pub fn convert(&self, a: Complex, mode: &str) -> Result<Complex, ComplexMathError> {
        convert(
            a,
            mode,
            self.config.precision,
            self.config.phase_convention,
        )
    }

    pub fn convert_with(
        &self,
        a: Complex,
        mode: ConversionMode,
    ) -> Result<Complex, ComplexMathError> {
        convert_with(
            a,
            mode,
            self.config.precision,
            self.config.phase_convention,
        )
    }
}
