use crate::core::{data::complex::Complex, errors::ComplexMathError};

pub const DEFAULT_DECIMAL_PLACES: u32 = 4;

/// Number of decimal places every real-valued result is rounded to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Precision {
    decimal_places: u32,
}

impl Precision {
    /// Digits past this point are noise for an `f64`.
    pub const MAX_DECIMAL_PLACES: u32 = 15;

    pub fn new(decimal_places: u32) -> Result<Self, ComplexMathError> {
        if decimal_places > Self::MAX_DECIMAL_PLACES {
            return Err(ComplexMathError::InvalidPrecision {
                decimal_places,
                max: Self::MAX_DECIMAL_PLACES,
            });
        }

        Ok(Self { decimal_places })
    }

    #[must_use]
    pub fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    /// Rounds the exact binary value of `value`, breaking ties to even.
    /// NaN and infinities are returned unchanged.
    #[must_use]
    pub fn round(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return value;
        }

        // decimal formatting is exact, so nothing is rounded twice
        format!("{:.*}", self.decimal_places as usize, value)
            .parse()
            .unwrap_or(value)
    }

    #[must_use]
    pub fn round_complex(&self, c: Complex) -> Complex {
        Complex {
            real: self.round(c.real),
            imag: self.round(c.imag),
        }
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            decimal_places: DEFAULT_DECIMAL_PLACES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_four_places() {
        assert_eq!(Precision::default().decimal_places(), 4);
    }

    #[test]
    fn new_accepts_max_and_rejects_above() {
        assert!(Precision::new(Precision::MAX_DECIMAL_PLACES).is_ok());
        assert_eq!(
            Precision::new(16),
            Err(ComplexMathError::InvalidPrecision {
                decimal_places: 16,
                max: 15
            })
        );
    }

    #[test]
    fn rounds_to_configured_places() {
        let four = Precision::default();
        let one = Precision::new(1).unwrap();
        let zero = Precision::new(0).unwrap();

        assert_eq!(four.round(3.905124837), 3.9051);
        assert_eq!(four.round(-0.153846), -0.1538);
        assert_eq!(one.round(10.1), 10.1);
        assert_eq!(one.round(0.7999999999), 0.8);
        assert_eq!(zero.round(2.5), 2.0);
        assert_eq!(zero.round(3.5), 4.0);
    }

    #[test]
    fn rounds_the_stored_binary_value() {
        // 1.0005 is stored just below the halfway point
        assert_eq!(Precision::new(3).unwrap().round(1.0005), 1.0);
        assert_eq!(Precision::default().round(2.00025), 2.0002);
    }

    #[test]
    fn rounding_is_symmetric_around_zero() {
        let p = Precision::default();

        assert_eq!(p.round(-1.24904577), -p.round(1.24904577));
    }

    #[test]
    fn rounding_twice_changes_nothing() {
        let p = Precision::default();
        let once = p.round(2.598076211);

        assert_eq!(p.round(once), once);
    }

    #[test]
    fn non_finite_values_pass_through() {
        let p = Precision::default();

        assert!(p.round(f64::NAN).is_nan());
        assert_eq!(p.round(f64::INFINITY), f64::INFINITY);
        assert_eq!(p.round(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert_eq!(p.round(f64::MAX), f64::MAX);
    }

    #[test]
    fn round_complex_rounds_both_parts() {
        let rounded = Precision::default().round_complex(Complex::new(1.000049, -2.99996));

        assert_eq!(rounded, Complex::new(1.0, -3.0));
    }
}
