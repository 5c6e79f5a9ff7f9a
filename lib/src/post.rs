use std::path::Path;

use chrono::NaiveDate;
use serde::{Serialize, Deserialize};

use crate::body::BodyMode;
use crate::error::{Result, Chainable};
use crate::format::{Format, Json, Toml};
use crate::gradient::{self, Analysis, GradientParams};

/// A post's metadata, as read from its front matter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(alias = "pub_date", alias = "date", with = "pub_date")]
    pub pub_date: NaiveDate,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub draft: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// A post and, for markdown sources, its raw body.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub post: Post,
    pub body: Option<String>,
}

/// File extensions a [`Document`] can be read from.
pub const MARKDOWN_EXTS: &[&str] = &["md", "mdown", "markdown"];
pub const METADATA_EXTS: &[&str] = &["toml", "json"];

impl Document {
    /// Parses a markdown source with `+++`-fenced TOML front matter.
    ///
    /// ```
    /// use hueline::post::Document;
    ///
    /// let doc = Document::parse("+++\ntitle = \"Hi\"\npubDate = 2024-03-15\n+++\nBody.\n").unwrap();
    /// assert_eq!(doc.post.title, "Hi");
    /// assert_eq!(doc.body.as_deref(), Some("Body.\n"));
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let Some((front_matter, body)) = split_front_matter(input) else {
            return err!("post is missing `+++` front matter");
        };

        let post = Toml::from_str(front_matter).chain(error!("invalid post front matter"))?;
        Ok(Document { post, body: Some(body.to_string()) })
    }

    /// Reads a post from `path`, choosing the parser by file extension:
    /// markdown with front matter, or a bare TOML/JSON metadata file.
    pub fn read(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let post = match ext {
            "toml" => Toml::read(path)?,
            "json" => Json::read(path)?,
            _ if MARKDOWN_EXTS.contains(&ext) => {
                let input = std::fs::read_to_string(path).chain_with(|| error! {
                    "failed to open file for reading",
                    "file path" => path.display(),
                })?;

                return Document::parse(&input).chain_with(|| error! {
                    "failed to parse markdown post",
                    "file path" => path.display(),
                });
            }
            _ => return err! {
                "unsupported post file type",
                "file path" => path.display(),
                "supported extensions" => format!("{:?}", [MARKDOWN_EXTS, METADATA_EXTS].concat()),
            },
        };

        Ok(Document { post, body: None })
    }

    /// The body text to analyze under `mode`, if there is a body.
    pub fn text(&self, mode: BodyMode) -> Option<std::borrow::Cow<'_, str>> {
        self.body.as_deref().map(|body| mode.extract(body))
    }

    pub fn gradient(&self, mode: BodyMode) -> GradientParams {
        gradient::generate(&self.post, self.text(mode).as_deref())
    }

    pub fn analyze(&self, mode: BodyMode) -> Analysis {
        gradient::analyze(&self.post, self.text(mode).as_deref())
    }
}

/// Splits `input` into `(front_matter, body)` if it opens with a `+++` fence
/// line and has a matching closing fence line.
fn split_front_matter(input: &str) -> Option<(&str, &str)> {
    const FENCE: &[u8] = b"+++";

    fn strip_newline(s: &str) -> Option<&str> {
        s.strip_prefix("\r\n").or_else(|| s.strip_prefix('\n'))
    }

    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let rest = strip_newline(input.strip_prefix("+++")?)?;

    let bytes = rest.as_bytes();
    let mut start = 0;
    while let Some(i) = memchr::memmem::find(&bytes[start..], FENCE) {
        let fence = start + i;
        let after = &rest[fence + FENCE.len()..];
        let line_start = fence == 0 || bytes[fence - 1] == b'\n';
        if line_start && (after.is_empty() || strip_newline(after).is_some()) {
            let front_matter = &rest[..fence];
            return Some((front_matter, strip_newline(after).unwrap_or(after)));
        }

        start = fence + FENCE.len();
    }

    None
}

/// Publish dates: a TOML date or datetime, or a string holding `YYYY-MM-DD`,
/// RFC 3339, or `YYYY-MM-DDTHH:MM:SS`. The calendar date as written is kept;
/// offsets never shift it.
pub mod pub_date {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn parse(s: &str) -> Result<NaiveDate, chrono::ParseError> {
        let s = s.trim();
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .or_else(|_| DateTime::parse_from_rfc3339(s).map(|dt| dt.date_naive()))
            .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
    }

    pub fn serialize<S: Serializer>(date: &NaiveDate, ser: S) -> Result<S::Ok, S::Error> {
        ser.collect_str(&date.format("%Y-%m-%d"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveDate, D::Error> {
        match toml::Value::deserialize(de)? {
            toml::Value::Datetime(datetime) => {
                let date = datetime.date
                    .ok_or_else(|| de::Error::custom("publish date is missing its date part"))?;

                NaiveDate::from_ymd_opt(date.year.into(), date.month.into(), date.day.into())
                    .ok_or_else(|| de::Error::custom(format!("invalid publish date: {datetime}")))
            }
            toml::Value::String(s) => parse(&s)
                .map_err(|e| de::Error::custom(format!("invalid publish date {s:?}: {e}"))),
            value => Err(de::Error::custom(format!(
                "expected publish date, found {}", value.type_str()
            ))),
        }
    }
}
