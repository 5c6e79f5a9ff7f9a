use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use hueline::batch;
use hueline::body::BodyMode;
use hueline::error::Result;
use hueline::format::{Format, Toml};

use crate::flags::Build;

/// How generated gradients are written out.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// One JSON object, keyed by slug.
    #[default]
    Manifest,
    /// One `<slug>.json` file per post in the output directory.
    Split,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub content: PathBuf,
    pub output: PathBuf,
    pub body: BodyMode,
    pub drafts: bool,
    pub layout: Layout,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            content: PathBuf::from("content"),
            output: PathBuf::from("gradients.json"),
            body: BodyMode::Raw,
            drafts: false,
            layout: Layout::Manifest,
        }
    }
}

impl Settings {
    /// Reads `huesmith.toml` from `site`, if there is one. Relative paths in
    /// the file are resolved against `site`.
    pub fn discover(site: &Path) -> Result<Self> {
        let path = site.join(crate::CONFIG_FILE);
        let mut settings = match path.is_file() {
            true => Toml::read(&path)?,
            false => Settings::default(),
        };

        settings.content = site.join(&settings.content);
        settings.output = site.join(&settings.output);
        tracing::debug!(config = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    /// Discovers the settings for `flags.site`, then applies `flags` on top.
    pub fn for_build(flags: &Build) -> Result<Self> {
        let mut settings = Settings::discover(&flags.site)?;
        if let Some(output) = &flags.output {
            settings.output = output.clone();
        }

        if let Some(body) = flags.body {
            settings.body = body;
        }

        settings.drafts |= flags.drafts;
        if flags.split {
            settings.layout = Layout::Split;
        }

        Ok(settings)
    }

    pub fn batch_options(&self) -> batch::Options {
        batch::Options { body: self.body, drafts: self.drafts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_flags(site: &Path) -> Build {
        Build { site: site.into(), output: None, body: None, drafts: false, split: false }
    }

    #[test]
    fn defaults_without_a_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::discover(dir.path()).unwrap();
        assert_eq!(settings.content, dir.path().join("content"));
        assert_eq!(settings.output, dir.path().join("gradients.json"));
        assert_eq!(settings.batch_options(), batch::Options::default());
        assert_eq!(settings.layout, Layout::Manifest);
    }

    #[test]
    fn file_then_flags_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = "content = \"posts\"\nbody = \"text\"\nlayout = \"split\"\n";
        std::fs::write(dir.path().join(crate::CONFIG_FILE), config).unwrap();

        let settings = Settings::for_build(&build_flags(dir.path())).unwrap();
        assert_eq!(settings.content, dir.path().join("posts"));
        assert_eq!(settings.body, BodyMode::Text);
        assert_eq!(settings.layout, Layout::Split);

        let flags = Build {
            output: Some("elsewhere".into()),
            body: Some(BodyMode::Raw),
            drafts: true,
            ..build_flags(dir.path())
        };

        let settings = Settings::for_build(&flags).unwrap();
        assert_eq!(settings.output, Path::new("elsewhere"));
        assert_eq!(settings.body, BodyMode::Raw);
        assert!(settings.drafts);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(crate::CONFIG_FILE), "colour = \"red\"\n").unwrap();
        let error = Settings::discover(dir.path()).unwrap_err();
        assert_eq!(error.message(), "Toml deserialization failed");
    }
}
