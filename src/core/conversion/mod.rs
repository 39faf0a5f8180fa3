pub mod mode;
pub mod phase_convention;
