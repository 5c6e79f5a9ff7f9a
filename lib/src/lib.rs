#![doc = svgbobdoc::transform!(
//! Deterministic, content-derived gradients for blog posts.
//!
//! # Overview
//!
//! Hueline turns a post's title, description, body, and publish date into
//! the parameters of a decorative, animated gradient: four colors plus a
//! handful of wave, grain, offset, scale, and rotation scalars. The same post
//! always produces the same gradient; there is no shared state between calls.
//!
//! ```svgbob
//!  +-------+      +----------+      +-------+      +--------+
//!  | title |----->|   text   |----->| seed  |----->|  LCG   |---.
//!  | desc. |      | features |      | hash  |      | draws  |   |
//!  | body  |      +----+-----+      +-------+      +--------+   |
//!  +---+---+           |                                        v
//!      |               |  dominant theme   +---------+   +-------------+
//!      |               '------------------>| palette |-->|  Gradient   |
//!      |  title hue, seasonal hue          +---------+   |   Params    |
//!      '---------------------------------------^         +-------------+
//! ```
//!
//! The pipeline is:
//!
//! 1. The title, description, and body are joined into one analysis text.
//! 2. The text is [hashed](seed::hash) into a seed for a [`rng::Lcg`].
//! 3. [`features::TextFeatures`] are measured over the text: word counts,
//!    keyword-based theme scores, and complexity.
//! 4. The [dominant theme](theme::Theme::dominant) selects a palette built
//!    around the title's hue, or, for calm posts, the time of year.
//! 5. Feature values are [mapped](range::map_range) onto each scalar's range.
//!
//! [`gradient::generate()`] runs the whole pipeline. The remaining modules
//! load posts from a site's content directory: [`post`] parses front matter,
//! [`catalog`] discovers post files, and [`batch`] generates for all of them.
)]

#[macro_use]
pub mod error;
pub mod util;
pub mod seed;
pub mod rng;
pub mod range;
pub mod color;
pub mod theme;
pub mod features;
pub mod gradient;
pub mod format;
pub mod body;
pub mod post;
pub mod fstree;
pub mod catalog;
pub mod batch;

pub use gradient::{generate, GradientParams};
pub use post::{Document, Post};
pub use theme::Theme;
