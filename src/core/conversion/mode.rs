use std::str::FromStr;

use crate::core::errors::ComplexMathError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionMode {
    /// Input is `(magnitude, angle)`, output is `(real, imag)`.
    Cartesian,
    /// Input is `(real, imag)`, output is `(magnitude, angle)`.
    Polar,
}

impl ConversionMode {
    pub const ALL: &'static [Self] = &[Self::Cartesian, Self::Polar];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Cartesian => "cartesian",
            Self::Polar => "polar",
        }
    }
}

impl FromStr for ConversionMode {
    type Err = ComplexMathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.display_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ComplexMathError::InvalidConversionMode {
                mode: s.to_string(),
            })
    }
}

impl std::fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
