use crate::core::{conversion::phase_convention::PhaseConvention, data::precision::Precision};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComplexMathConfig {
    pub precision: Precision,
    pub phase_convention: PhaseConvention,
}

impl ComplexMathConfig {
    #[must_use]
    pub fn with_precision(self, precision: Precision) -> Self {
        Self { precision, ..self }
    }

    #[must_use]
    pub fn with_phase_convention(self, phase_convention: PhaseConvention) -> Self {
        Self {
            phase_convention,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::precision::DEFAULT_DECIMAL_PLACES;

    #[test]
    fn default_config() {
        let config = ComplexMathConfig::default();

        assert_eq!(config.precision.decimal_places(), DEFAULT_DECIMAL_PLACES);
        assert_eq!(config.phase_convention, PhaseConvention::Ratio);
    }

    #[test]
    fn builders_only_touch_their_field() {
        let one = Precision::new(1).unwrap();
        let config = ComplexMathConfig::default()
            .with_precision(one)
            .with_phase_convention(PhaseConvention::FullQuadrant);

        assert_eq!(config.precision, one);
        assert_eq!(config.phase_convention, PhaseConvention::FullQuadrant);

        let reverted = config.with_phase_convention(PhaseConvention::Ratio);
        assert_eq!(reverted.precision, one);
    }
}
