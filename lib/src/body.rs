use std::borrow::Cow;
use std::str::FromStr;

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use serde::{Serialize, Deserialize};

/// How a post's body is turned into the text that gets analyzed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyMode {
    /// The body exactly as written, markup included.
    #[default]
    Raw,
    /// Only the text a reader would see once the markdown is rendered.
    Text,
}

impl BodyMode {
    pub fn extract(self, body: &str) -> Cow<'_, str> {
        match self {
            BodyMode::Raw => Cow::Borrowed(body),
            BodyMode::Text => Cow::Owned(plain_text(body)),
        }
    }
}

impl FromStr for BodyMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(BodyMode::Raw),
            "text" => Ok(BodyMode::Text),
            _ => Err(format!("unknown body mode {s:?}: expected `raw` or `text`")),
        }
    }
}

/// Renders `markdown` and collects its visible text. Blocks and line breaks
/// become whitespace; HTML and metadata blocks are dropped.
///
/// ```
/// use hueline::body::plain_text;
///
/// let text = plain_text("# Title\n\nSome **bold** `code`.\n\n<div>x</div>\n");
/// assert_eq!(text.split_whitespace().collect::<Vec<_>>(), ["Title", "Some", "bold", "code."]);
/// ```
pub fn plain_text(markdown: &str) -> String {
    let options = Options::all().difference(Options::ENABLE_SMART_PUNCTUATION);
    let mut output = String::with_capacity(markdown.len());
    let mut in_metadata = false;
    for event in Parser::new_ext(markdown, options) {
        match event {
            Event::Start(Tag::MetadataBlock(_)) => in_metadata = true,
            Event::End(TagEnd::MetadataBlock(_)) => in_metadata = false,
            Event::Text(text) | Event::Code(text) if !in_metadata => output.push_str(&text),
            Event::SoftBreak | Event::HardBreak => output.push(' '),
            Event::End(TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item
                | TagEnd::CodeBlock | TagEnd::BlockQuote | TagEnd::TableCell) => output.push('\n'),
            _ => { }
        }
    }

    output
}
