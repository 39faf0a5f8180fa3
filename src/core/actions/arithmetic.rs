use crate::core::{
    data::{complex::Complex, precision::Precision},
    errors::ComplexMathError,
};

#[must_use]
pub fn add(a: Complex, b: Complex, precision: Precision) -> Complex {
    precision.round_complex(a + b)
}

#[must_use]
pub fn subtract(a: Complex, b: Complex, precision: Precision) -> Complex {
    precision.round_complex(a - b)
}

#[must_use]
pub fn multiply(a: Complex, b: Complex, precision: Precision) -> Complex {
    precision.round_complex(a * b)
}

pub fn divide(a: Complex, b: Complex, precision: Precision) -> Result<Complex, ComplexMathError> {
    let denominator = b.magnitude_squared();

    if denominator == 0.0 {
        return Err(ComplexMathError::DivisionByZero);
    }

    let quotient = Complex {
        real: (a.real * b.real + a.imag * b.imag) / denominator,
        imag: (b.real * a.imag - a.real * b.imag) / denominator,
    };

    Ok(precision.round_complex(quotient))
}
