pub mod actions;
pub mod complex_math;
pub mod config;
pub mod conversion;
pub mod data;
pub mod errors;
