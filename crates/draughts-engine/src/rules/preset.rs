//! Named rule configurations.

use super::RuleConfig;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown rule preset '{0}' (expected flying, english or casual)")]
pub struct UnknownPreset(pub String);

/// A named [`RuleConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RulePreset {
    /// Every rule enabled.
    #[default]
    Flying,
    /// English draughts: short kings, men capture forward only, jumps are
    /// chained and mandatory.
    English,
    /// Every rule disabled.
    Casual,
}

impl RulePreset {
    pub const ALL: [RulePreset; 3] = [RulePreset::Flying, RulePreset::English, RulePreset::Casual];

    pub const fn config(self) -> RuleConfig {
        match self {
            RulePreset::Flying => RuleConfig::ALL_ENABLED,
            RulePreset::English => RuleConfig {
                flying_kings: false,
                backwards_capture: false,
                multiple_capture: true,
                force_capture: true,
            },
            RulePreset::Casual => RuleConfig::ALL_DISABLED,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            RulePreset::Flying => "flying",
            RulePreset::English => "english",
            RulePreset::Casual => "casual",
        }
    }
}

impl FromStr for RulePreset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RulePreset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPreset(s.to_string()))
    }
}

impl std::fmt::Display for RulePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<RulePreset> for RuleConfig {
    fn from(preset: RulePreset) -> Self {
        preset.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_presets() {
        assert_eq!("flying".parse::<RulePreset>(), Ok(RulePreset::Flying));
        assert_eq!("English".parse::<RulePreset>(), Ok(RulePreset::English));
        assert_eq!(" casual ".parse::<RulePreset>(), Ok(RulePreset::Casual));
        assert_eq!(
            "russian".parse::<RulePreset>(),
            Err(UnknownPreset("russian".to_string()))
        );
    }

    #[test]
    fn english_rules() {
        let config = RuleConfig::from(RulePreset::English);
        assert!(!config.flying_kings);
        assert!(!config.backwards_capture);
        assert!(config.multiple_capture);
        assert!(config.force_capture);
    }

    #[test]
    fn default_preset_is_default_config() {
        assert_eq!(RulePreset::default().config(), RuleConfig::default());
    }
}
