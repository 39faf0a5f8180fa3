mod controllers;
mod core;

pub use controllers::cli::demo::CliDemoController;

pub use crate::core::actions::arithmetic::{add, divide, multiply, subtract};
pub use crate::core::actions::convert::{convert, convert_with};
pub use crate::core::actions::format::format;
pub use crate::core::actions::measure::{conjugate, modulus, phase};
pub use crate::core::complex_math::ComplexMath;
pub use crate::core::config::ComplexMathConfig;
pub use crate::core::conversion::{mode::ConversionMode, phase_convention::PhaseConvention};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::precision::{DEFAULT_DECIMAL_PLACES, Precision};
pub use crate::core::errors::ComplexMathError;
