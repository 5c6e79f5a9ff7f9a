use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Deserialize};

use crate::color::Hsl;
use crate::features::TextFeatures;
use crate::post::Post;
use crate::range::map_range;
use crate::rng::Lcg;
use crate::seed::hash;
use crate::theme::Theme;

/// The fixed height, in pixels, of every gradient.
pub const HEIGHT: u32 = 500;

/// Everything the renderer needs to draw a post's gradient.
///
/// Serializes with the renderer's camelCase field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientParams {
    pub height: u32,
    /// Black followed by the three theme colors, as `#rrggbb`.
    pub colors: [String; 4],
    pub positions: u32,
    pub wave_x: f64,
    pub wave_x_shift: f64,
    pub wave_y: f64,
    pub wave_y_shift: f64,
    pub mixing: f64,
    pub grain_mixer: f64,
    pub grain_overlay: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale: f64,
    pub rotation: f64,
}

/// The intermediate values behind a [`GradientParams`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub seed: u32,
    pub theme: Theme,
    pub base_hue: f64,
    pub seasonal_hue: f64,
    pub features: TextFeatures,
    pub params: GradientParams,
}

/// The text every feature and the seed are computed over.
pub fn analysis_text(post: &Post, body: Option<&str>) -> String {
    format!("{} {} {}", post.title, post.description, body.unwrap_or(""))
}

/// A hue that walks the color wheel over the year. January 1st is day 1, so
/// the hue is never 0, and the last day of a leap year lands just past 360.
///
/// ```
/// use chrono::NaiveDate;
/// use hueline::gradient::seasonal_hue;
///
/// let jan1 = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
/// let dec31 = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
/// assert_eq!(seasonal_hue(jan1), 1.0 / 365.0 * 360.0);
/// assert_eq!(seasonal_hue(dec31), 360.0);
/// ```
pub fn seasonal_hue(date: NaiveDate) -> f64 {
    f64::from(date.ordinal()) / 365.0 * 360.0
}

/// A hue in `[0, 360)` derived from the post's title alone.
pub fn title_hue(title: &str) -> f64 {
    f64::from(hash(title) % 360)
}

/// Derives the gradient for `post`, with `body` as its optional raw text.
pub fn generate(post: &Post, body: Option<&str>) -> GradientParams {
    analyze(post, body).params
}

/// Like [`generate()`], but keeps the intermediate values.
pub fn analyze(post: &Post, body: Option<&str>) -> Analysis {
    let text = analysis_text(post, body);
    let seed = hash(&text);
    let mut rng = Lcg::new(seed);
    let features = TextFeatures::analyze(&text);

    let seasonal_hue = seasonal_hue(post.pub_date);
    let base_hue = title_hue(&post.title);
    let theme = Theme::dominant(&features);
    let [c1, c2, c3] = theme.palette(base_hue, seasonal_hue);
    let colors = [Hsl::BLACK, c1, c2, c3].map(Hsl::to_hex);
    tracing::trace!(title = %post.title, %theme, seed, "derived gradient palette");

    // Draw order is fixed: x shift, y shift, x offset, y offset.
    let params = GradientParams {
        height: HEIGHT,
        colors,
        positions: map_range(features.unique_word_ratio, 0.0, 1.0, 20.0, 80.0).floor() as u32,
        wave_x: map_range(features.energy.max(0.1), 0.0, 1.0, 0.2, 0.8),
        wave_x_shift: rng.next_f64() * 2.0 - 1.0,
        wave_y: map_range(features.calmness.max(0.1), 0.0, 1.0, 0.5, 1.5),
        wave_y_shift: rng.next_f64() * 2.0 - 1.0,
        mixing: map_range(features.complexity, 0.0, 1.0, 0.0, 0.4),
        grain_mixer: map_range(features.technical, 0.0, 1.0, 0.2, 0.6),
        grain_overlay: map_range(features.creative, 0.0, 1.0, 0.5, 0.9),
        offset_x: (rng.next_f64() - 0.5) * 0.4,
        offset_y: (rng.next_f64() - 0.5) * 0.4,
        scale: map_range(features.average_word_length, 3.0, 12.0, 0.8, 1.4),
        rotation: map_range(utf16_len(&post.title), 5.0, 50.0, -15.0, 15.0),
    };

    Analysis { seed, theme, base_hue, seasonal_hue, features, params }
}

fn utf16_len(s: &str) -> f64 {
    s.encode_utf16().count() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::hsl_to_hex;

    fn post(title: &str, description: &str, (y, m, d): (i32, u32, u32)) -> Post {
        Post {
            title: title.into(),
            description: description.into(),
            pub_date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            draft: false,
            slug: None,
        }
    }

    fn is_hex_color(s: &str) -> bool {
        s.len() == 7
            && s.starts_with('#')
            && s[1..].bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }

    #[test]
    fn framework_post_is_technical() {
        let post = post("Amazing Dynamic Framework", "An innovative system", (2024, 3, 15));
        let analysis = analyze(&post, Some(""));

        // "framework" and "system" tie "amazing" and "dynamic"; technical wins.
        assert_eq!(analysis.features.technical, analysis.features.energy);
        assert_eq!(analysis.theme, Theme::Technical);
        assert_eq!(analysis.base_hue, 198.0);
        assert_eq!(analysis.seed, 1040378381);

        let params = analysis.params;
        assert_eq!(params.colors[1], hsl_to_hex((198.0 + 200.0) % 360.0, 0.6, 0.10));
        assert_eq!(params.colors, ["#000000", "#291e0a", "#b36b4d", "#8a0f13"]);
        assert_eq!(params.positions, 80);
        assert_eq!(params.wave_x, 0.4);
        assert_eq!(params.wave_x_shift, -0.1944880448281765);
        assert_eq!(params.wave_y, 0.6);
        assert_eq!(params.wave_y_shift, 0.2593183252029121);
        assert_eq!(params.mixing, 0.024);
        assert_eq!(params.grain_mixer, 0.3333333333333333);
        assert_eq!(params.grain_overlay, 0.5666666666666667);
        assert_eq!(params.offset_x, 0.06147886458784342);
        assert_eq!(params.offset_y, 0.0015052692033350468);
        assert_eq!(params.scale, 1.0555555555555556);
        assert_eq!(params.rotation, -1.666666666666666);
        assert_eq!(params.height, 500);
    }

    #[test]
    fn missing_and_empty_bodies_agree() {
        let post = post("Amazing Dynamic Framework", "An innovative system", (2024, 3, 15));
        assert_eq!(generate(&post, None), generate(&post, Some("")));
    }

    #[test]
    fn calm_posts_follow_the_season() {
        let post = post("A peaceful morning", "Slow and gentle notes on a quiet walk", (2023, 7, 4));
        let analysis = analyze(&post, Some("The calm of a serene lake is tranquil."));

        assert_eq!(analysis.theme, Theme::Calm);
        assert_eq!(analysis.seasonal_hue, 185.0 / 365.0 * 360.0);
        assert_eq!(analysis.params.colors, ["#000000", "#281527", "#758aa3", "#413d8f"]);
        assert_eq!(analysis.params.positions, 73);
        assert_eq!(analysis.params.wave_y, 0.868421052631579);
        assert_eq!(analysis.params.wave_x_shift, -0.9231750913895667);
    }

    #[test]
    fn creative_posts_use_title_hue() {
        let post = post("Painting with light", "Creative design stories", (2022, 12, 31));
        let analysis = analyze(&post, Some("I imagine beautiful art and color every day."));

        assert_eq!(analysis.theme, Theme::Creative);
        assert_eq!(analysis.base_hue, 88.0);
        assert_eq!(analysis.params.colors, ["#000000", "#0d410b", "#29a362", "#3df565"]);
        assert_eq!(analysis.params.grain_overlay, 0.6714285714285715);
        assert_eq!(analysis.params.scale, 0.9571428571428571);
    }

    #[test]
    fn empty_post_uses_zero_features() {
        let post = post("", "", (2024, 1, 1));
        let analysis = analyze(&post, None);

        assert_eq!(analysis.features, TextFeatures::default());
        assert_eq!(analysis.theme, Theme::Technical);
        assert_eq!(analysis.seed, 1024);

        let params = analysis.params;
        assert_eq!(params.colors, ["#000000", "#0a1f29", "#4db3b3", "#0f8a61"]);
        assert_eq!(params.positions, 20);
        assert_eq!(params.wave_x, 0.26);
        assert_eq!(params.mixing, 0.0);
        assert_eq!(params.scale, 0.6000000000000001);
        assert_eq!(params.rotation, -18.333333333333332);
        assert!([params.wave_x_shift, params.wave_y_shift, params.offset_x, params.offset_y]
            .iter()
            .all(|v| v.is_finite()));
    }

    #[test]
    fn generation_is_deterministic() {
        let post = post("Notes on a system", "Fast code and calm data", (2021, 6, 1));
        let body = "Some body text about software architecture and design.";
        let first = generate(&post, Some(body));
        for _ in 0..10 {
            assert_eq!(generate(&post, Some(body)), first);
        }

        let json = serde_json::to_string(&first).unwrap();
        assert_eq!(json, serde_json::to_string(&generate(&post, Some(body))).unwrap());
    }

    #[test]
    fn colors_are_well_formed() {
        let dates = [(2020, 2, 29), (2021, 1, 1), (2022, 12, 31), (2023, 9, 9)];
        let titles = ["", "x", "Calm", "Quiet and gentle", "Explosive", "Design", "Data"];
        for (title, date) in titles.iter().flat_map(|t| dates.iter().map(move |d| (t, d))) {
            let params = generate(&post(title, "", *date), None);
            assert_eq!(params.colors[0], "#000000");
            assert!(params.colors.iter().all(|c| is_hex_color(c)), "{:?}", params.colors);
            assert!((-0.2..0.2).contains(&params.offset_x));
            assert!((-1.0..1.0).contains(&params.wave_y_shift));
        }
    }

    #[test]
    fn serializes_with_renderer_field_names() {
        let params = generate(&post("Title", "Description", (2024, 5, 5)), None);
        let value = serde_json::to_value(&params).unwrap();
        let object = value.as_object().unwrap();

        let expected = [
            "height", "colors", "positions", "waveX", "waveXShift", "waveY",
            "waveYShift", "mixing", "grainMixer", "grainOverlay", "offsetX",
            "offsetY", "scale", "rotation",
        ];

        assert_eq!(object.len(), expected.len());
        assert!(expected.iter().all(|key| object.contains_key(*key)));
        assert_eq!(object["colors"].as_array().unwrap().len(), 4);
        assert!(object["positions"].is_u64());
    }
}
