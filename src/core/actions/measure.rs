use crate::core::{
    conversion::phase_convention::PhaseConvention,
    data::{complex::Complex, precision::Precision},
    errors::ComplexMathError,
};

#[must_use]
pub fn modulus(a: Complex, precision: Precision) -> f64 {
    precision.round(a.magnitude_squared().sqrt())
}

#[must_use]
pub fn conjugate(a: Complex, precision: Precision) -> Complex {
    precision.round_complex(Complex {
        real: a.real,
        imag: -a.imag,
    })
}

/// Angle in radians between `a` and the positive real axis.
///
/// Under [`PhaseConvention::Ratio`] a zero real part is reported as
/// [`ComplexMathError::DivisionByZero`].
pub fn phase(
    a: Complex,
    precision: Precision,
    convention: PhaseConvention,
) -> Result<f64, ComplexMathError> {
    let angle = match convention {
        PhaseConvention::Ratio => {
            if a.real == 0.0 {
                return Err(ComplexMathError::DivisionByZero);
            }
            (a.imag / a.real).atan()
        }
        PhaseConvention::FullQuadrant => a.imag.atan2(a.real),
    };

    Ok(precision.round(angle))
}
