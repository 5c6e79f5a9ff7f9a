use rustc_hash::FxHashSet;
use serde::{Serialize, Deserialize};

use crate::theme::Theme;

/// Numeric signals derived from a post's text.
///
/// Theme scores are the fraction of words matching that theme's keywords.
/// Lengths are measured in UTF-16 code units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFeatures {
    pub word_count: usize,
    pub unique_word_count: usize,
    pub unique_word_ratio: f64,
    pub average_word_length: f64,
    pub energy: f64,
    pub calmness: f64,
    pub technical: f64,
    pub creative: f64,
    pub complexity: f64,
}

impl TextFeatures {
    /// Analyzes `text`: lowercased and split on runs of whitespace.
    ///
    /// Text without a single word yields [`TextFeatures::default()`], all
    /// zeroes, rather than the NaN a `0 / 0` ratio would produce.
    ///
    /// ```
    /// use hueline::features::TextFeatures;
    ///
    /// let features = TextFeatures::analyze("Fast code, fast DATA");
    /// assert_eq!(features.word_count, 4);
    /// assert_eq!(features.unique_word_count, 3);
    /// assert_eq!(features.technical, 0.5);
    /// assert_eq!(features.energy, 0.5);
    /// ```
    pub fn analyze(text: &str) -> Self {
        let text = text.to_lowercase();
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            return TextFeatures::default();
        }

        let count = words.len() as f64;
        let unique: FxHashSet<&str> = words.iter().copied().collect();
        let total_length: usize = words.iter().map(|w| w.encode_utf16().count()).sum();
        let score = |theme: Theme| {
            words.iter().filter(|w| theme.matches(w)).count() as f64 / count
        };

        TextFeatures {
            word_count: words.len(),
            unique_word_count: unique.len(),
            unique_word_ratio: unique.len() as f64 / count,
            average_word_length: total_length as f64 / count,
            energy: score(Theme::Energetic),
            calmness: score(Theme::Calm),
            technical: score(Theme::Technical),
            creative: score(Theme::Creative),
            complexity: (unique.len() as f64 / 100.0).min(1.0),
        }
    }

    /// This text's score for `theme`.
    pub fn score(&self, theme: Theme) -> f64 {
        match theme {
            Theme::Technical => self.technical,
            Theme::Creative => self.creative,
            Theme::Energetic => self.energy,
            Theme::Calm => self.calmness,
        }
    }
}
