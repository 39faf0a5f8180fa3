pub mod complex;
pub mod precision;
