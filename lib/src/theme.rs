use std::fmt;

use serde::{Serialize, Deserialize};

use crate::color::Hsl;
use crate::features::TextFeatures;

/// The dominant tone of a post, which selects its palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Technical,
    Creative,
    Energetic,
    Calm,
}

const ENERGETIC: &[&str] = &[
    "exciting", "amazing", "powerful", "dynamic", "fast",
    "energy", "intense", "bold", "thrilling", "explosive",
];

const CALM: &[&str] = &[
    "peaceful", "calm", "quiet", "gentle", "serene",
    "relaxing", "soft", "tranquil", "slow", "mindful",
];

const TECHNICAL: &[&str] = &[
    "code", "algorithm", "system", "framework", "data",
    "technical", "software", "engineering", "architecture", "function",
];

const CREATIVE: &[&str] = &[
    "design", "creative", "art", "innovative", "imagine",
    "beautiful", "color", "inspire", "craft", "story",
];

impl Theme {
    /// Every theme, in tie-breaking order: when two themes score equally,
    /// the one listed first wins.
    pub const ALL: [Theme; 4] = [Theme::Technical, Theme::Creative, Theme::Energetic, Theme::Calm];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Technical => "technical",
            Theme::Creative => "creative",
            Theme::Energetic => "energetic",
            Theme::Calm => "calm",
        }
    }

    /// The lowercase keywords a word must contain, as a substring, to count
    /// toward this theme.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Theme::Technical => TECHNICAL,
            Theme::Creative => CREATIVE,
            Theme::Energetic => ENERGETIC,
            Theme::Calm => CALM,
        }
    }

    /// Returns `true` if `word` (already lowercase) contains any keyword.
    pub fn matches(self, word: &str) -> bool {
        self.keywords().iter().any(|keyword| word.contains(keyword))
    }

    /// The highest scoring theme in `features`. Ties go to the theme listed
    /// earlier in [`Theme::ALL`], so text with no keyword hits at all is
    /// [`Theme::Technical`].
    pub fn dominant(features: &TextFeatures) -> Theme {
        let mut best = Theme::ALL[0];
        for theme in &Theme::ALL[1..] {
            if features.score(*theme) > features.score(best) {
                best = *theme;
            }
        }

        best
    }

    /// The three non-black gradient colors for this theme. `base_hue` derives
    /// from the title; `seasonal_hue` from the publish date and is used only
    /// by [`Theme::Calm`]. Hues are reduced modulo 360.
    pub fn palette(self, base_hue: f64, seasonal_hue: f64) -> [Hsl; 3] {
        let hsl = |hue: f64, s, l| Hsl::new(hue % 360.0, s, l);
        match self {
            Theme::Technical => [
                hsl(base_hue + 200.0, 0.6, 0.10),
                hsl(base_hue + 180.0, 0.4, 0.50),
                hsl(base_hue + 160.0, 0.8, 0.30),
            ],
            Theme::Creative => [
                hsl(base_hue + 30.0, 0.7, 0.15),
                hsl(base_hue + 60.0, 0.6, 0.40),
                hsl(base_hue + 45.0, 0.9, 0.60),
            ],
            Theme::Energetic => [
                hsl(base_hue + 120.0, 0.8, 0.20),
                hsl(base_hue + 240.0, 0.7, 0.40),
                hsl(base_hue, 0.9, 0.70),
            ],
            Theme::Calm => [
                hsl(seasonal_hue + 120.0, 0.3, 0.12),
                hsl(seasonal_hue + 30.0, 0.2, 0.55),
                hsl(seasonal_hue + 60.0, 0.4, 0.40),
            ],
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}
