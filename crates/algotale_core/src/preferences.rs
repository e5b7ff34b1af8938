//! Learner preferences: experience level and narrative theme.

use serde::{Deserialize, Serialize};

/// Experience level of the learner.
///
/// Controls the register of the generated story: plain-language analogies
/// for beginners, complexity and implementation framing for advanced.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Level {
    /// New to programming; everyday analogies, no jargon
    #[default]
    Beginner,
    /// Wants complexity analysis, implementation detail, optimizations
    Advanced,
}

impl Level {
    /// Parse a level, defaulting to [`Level::Beginner`] when unrecognized.
    pub fn parse_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

/// Narrative framing for the generated story.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Theme {
    /// Heroes, challenges, dramatic moments
    #[default]
    Adventure,
    /// Futuristic worlds, space, AI
    SciFi,
    /// Detective cases, clues, revelations
    Mystery,
    /// Wizards, spells, magical kingdoms
    Fantasy,
}

impl Theme {
    /// Parse a theme, defaulting to [`Theme::Adventure`] when unrecognized.
    pub fn parse_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

/// Preferences supplied by the caller for one generation.
///
/// # Examples
///
/// ```
/// use algotale_core::{Level, StoryPreferences, Theme};
///
/// let prefs = StoryPreferences::default();
/// assert_eq!(prefs.level, Level::Beginner);
/// assert_eq!(prefs.theme, Theme::Adventure);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryPreferences {
    /// Experience level, defaulting to beginner
    #[serde(default)]
    pub level: Level,
    /// Narrative theme, defaulting to adventure
    #[serde(default)]
    pub theme: Theme,
}

impl StoryPreferences {
    /// Create preferences from explicit level and theme.
    pub fn new(level: Level, theme: Theme) -> Self {
        Self { level, theme }
    }
}
