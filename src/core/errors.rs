use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum ComplexMathError {
    DivisionByZero,
    InvalidConversionMode { mode: String },
    InvalidPrecision { decimal_places: u32, max: u32 },
}

impl ComplexMathError {
    #[must_use]
    pub fn is_domain_error(&self) -> bool {
        matches!(self, Self::DivisionByZero)
    }

    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidConversionMode { .. } | Self::InvalidPrecision { .. }
        )
    }
}

impl fmt::Display for ComplexMathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => {
                write!(f, "division by a complex number with zero magnitude")
            }
            Self::InvalidConversionMode { mode } => {
                write!(
                    f,
                    "unknown conversion mode {:?}: only \"cartesian\" or \"polar\" conversions are supported",
                    mode
                )
            }
            Self::InvalidPrecision {
                decimal_places,
                max,
            } => {
                write!(
                    f,
                    "precision of {} decimal places exceeds maximum {}",
                    decimal_places, max
                )
            }
        }
    }
}

impl Error for ComplexMathError {}
