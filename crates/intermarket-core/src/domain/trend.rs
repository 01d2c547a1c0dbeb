use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Display color bucket shared by every trend-driven element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Green,
    Red,
    Neutral,
}

impl Tone {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Red => "red",
            Self::Neutral => "neutral",
        }
    }
}

impl Display for Tone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three-state classification of a period-over-period change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

impl TrendDirection {
    /// Exact-sign classification: no rounding or epsilon tolerance, so a
    /// delta of `0.0001` is already `Up`. `Flat` only on exact zero.
    pub fn classify(delta: f64) -> Self {
        if delta > 0.0 {
            Self::Up
        } else if delta < 0.0 {
            Self::Down
        } else {
            Self::Flat
        }
    }

    /// Arrow glyph paired with this direction; the renderer never picks
    /// one independently.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Up => "▲",
            Self::Down => "▼",
            Self::Flat => "→",
        }
    }

    pub const fn tone(self) -> Tone {
        match self {
            Self::Up => Tone::Green,
            Self::Down => Tone::Red,
            Self::Flat => Tone::Neutral,
        }
    }
}

/// Direction already labeled by the backend for macro indicators.
///
/// Never reclassified from the reading itself; the label is only mapped
/// to presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MacroDirection {
    Up,
    Down,
    Flat,
}

impl MacroDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Flat => "flat",
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Down => "↓",
            Self::Flat => "→",
        }
    }

    /// Macro readings render adverse-when-rising: a climbing CPI or
    /// policy rate is red, a falling one green.
    pub const fn tone(self) -> Tone {
        match self {
            Self::Up => Tone::Red,
            Self::Down => Tone::Green,
            Self::Flat => Tone::Neutral,
        }
    }
}

impl Display for MacroDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MacroDirection {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "flat" => Ok(Self::Flat),
            other => Err(ValidationError::UnknownDirection {
                value: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_exact_sign() {
        assert_eq!(TrendDirection::classify(2.5), TrendDirection::Up);
        assert_eq!(TrendDirection::classify(0.0001), TrendDirection::Up);
        assert_eq!(TrendDirection::classify(-0.01), TrendDirection::Down);
        assert_eq!(TrendDirection::classify(0.0), TrendDirection::Flat);
        assert_eq!(TrendDirection::classify(-0.0), TrendDirection::Flat);
    }

    #[test]
    fn direction_owns_glyph_and_tone() {
        assert_eq!(TrendDirection::Up.glyph(), "▲");
        assert_eq!(TrendDirection::Up.tone(), Tone::Green);
        assert_eq!(TrendDirection::Down.glyph(), "▼");
        assert_eq!(TrendDirection::Down.tone(), Tone::Red);
        assert_eq!(TrendDirection::Flat.glyph(), "→");
        assert_eq!(TrendDirection::Flat.tone(), Tone::Neutral);
    }

    #[test]
    fn parses_macro_direction_labels() {
        let up: MacroDirection = "up".parse().expect("must parse");
        assert_eq!(up, MacroDirection::Up);
        assert_eq!(up.glyph(), "↑");

        let err = "sideways".parse::<MacroDirection>().expect_err("must fail");
        assert!(matches!(err, ValidationError::UnknownDirection { .. }));
    }

    #[test]
    fn macro_tone_is_inverted() {
        assert_eq!(MacroDirection::Up.tone(), Tone::Red);
        assert_eq!(MacroDirection::Down.tone(), Tone::Green);
        assert_eq!(MacroDirection::Flat.tone(), Tone::Neutral);
    }
}
