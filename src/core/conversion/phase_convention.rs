/// Which arctangent `phase` is computed with.
///
/// `Ratio` takes `atan(imag / real)`: the result lies in `(-π/2, π/2)`, so
/// numbers with a negative real part land in the opposite quadrant, and a zero
/// real part is a division by zero. `FullQuadrant` uses `atan2(imag, real)`
/// and is defined everywhere, returning angles in `[-π, π]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseConvention {
    Ratio,
    FullQuadrant,
}

impl PhaseConvention {
    pub const ALL: &'static [Self] = &[Self::Ratio, Self::FullQuadrant];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Ratio => "Ratio arctangent",
            Self::FullQuadrant => "Full-quadrant arctangent",
        }
    }
}

impl Default for PhaseConvention {
    fn default() -> Self {
        Self::Ratio
    }
}

impl std::fmt::Display for PhaseConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
