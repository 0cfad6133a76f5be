use std::fmt;
use std::str::FromStr;

use crate::error::BackgroundError;
use crate::paint::Palette;

/// Which background animation to run. Only one is active per page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    /// Node network with falling line streaks over a fading backdrop.
    LineRain,
    /// Node network with falling binary/operator symbols.
    #[default]
    GlyphRain,
    /// Fixed lattice whose active points and links pulse.
    LatticePulse,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::LineRain, Variant::GlyphRain, Variant::LatticePulse];

    pub fn name(&self) -> &'static str {
        match self {
            Variant::LineRain => "line-rain",
            Variant::GlyphRain => "glyph-rain",
            Variant::LatticePulse => "lattice-pulse",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = BackgroundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        Variant::ALL
            .into_iter()
            .find(|v| v.name() == key)
            .ok_or_else(|| BackgroundError::UnknownVariant(s.to_string()))
    }
}

/// Everything needed to build a [`crate::BackgroundAnimator`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimatorConfig {
    pub variant: Variant,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    pub palette: Palette,
}

impl AnimatorConfig {
    pub fn with_variant(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
