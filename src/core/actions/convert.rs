use crate::core::{
    actions::measure::{modulus, phase},
    conversion::{mode::ConversionMode, phase_convention::PhaseConvention},
    data::{complex::Complex, precision::Precision},
    errors::ComplexMathError,
};

/// Parses `mode` case-insensitively, then behaves like [`convert_with`].
pub fn convert(
    a: Complex,
    mode: &str,
    precision: Precision,
    convention: PhaseConvention,
) -> Result<Complex, ComplexMathError> {
    let mode: ConversionMode = mode.parse()?;

    convert_with(a, mode, precision, convention)
}

/// `Cartesian` reads `a` as `(magnitude, angle)`; `Polar` returns
/// `(modulus, phase)` packed into the same two fields.
pub fn convert_with(
    a: Complex,
    mode: ConversionMode,
    precision: Precision,
    convention: PhaseConvention,
) -> Result<Complex, ComplexMathError> {
    match mode {
        ConversionMode::Cartesian => {
            let (magnitude, angle) = (a.real, a.imag);

            Ok(precision.round_complex(Complex {
                real: magnitude * angle.cos(),
                imag: magnitude * angle.sin(),
            }))
        }
        ConversionMode::Polar => Ok(Complex {
            real: modulus(a, precision),
            imag: phase(a, precision, convention)?,
        }),
    }
}
