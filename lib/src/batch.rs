use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use crate::body::BodyMode;
use crate::catalog::{Catalog, CatalogEntry};
use crate::error::{Result, Chainable};
use crate::gradient::GradientParams;
use crate::post::Document;
use crate::util::slugify_path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    pub body: BodyMode,
    /// Generate for posts marked `draft = true` too.
    pub drafts: bool,
}

/// One post's generated gradient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Generated {
    pub slug: String,
    pub source: PathBuf,
    pub params: GradientParams,
}

/// Generates gradients for every post in `catalog`, in parallel. The result
/// is sorted by slug. A front matter `slug` overrides the location slug;
/// two posts resolving to the same slug are an error.
pub fn generate_all(catalog: &Catalog, options: Options) -> Result<Vec<Generated>> {
    let results = catalog.entries.par_iter()
        .map(|entry| generate_one(entry, options))
        .collect::<Result<Vec<_>>>()?;

    let mut generated: Vec<Generated> = results.into_iter().flatten().collect();
    generated.sort_by(|a, b| a.slug.cmp(&b.slug));
    if let Some(pair) = generated.windows(2).find(|w| w[0].slug == w[1].slug) {
        return err! {
            "found multiple posts with the same slug",
            "slug" => &pair[0].slug,
            "first post" => pair[0].source.display(),
            "second post" => pair[1].source.display(),
        };
    }

    tracing::debug!(posts = generated.len(), skipped = catalog.len() - generated.len(), "generated gradients");
    Ok(generated)
}

fn generate_one(entry: &CatalogEntry, options: Options) -> Result<Option<Generated>> {
    let document = Document::read(&entry.path).chain_with(|| error! {
        "failed to load post",
        "path" => entry.relative.display(),
    })?;

    if document.post.draft && !options.drafts {
        tracing::debug!(path = %entry.relative.display(), "skipping draft");
        return Ok(None);
    }

    let slug = match document.post.slug.as_deref().map(|s| slugify_path(Path::new(s))) {
        Some(slug) if !slug.is_empty() => slug,
        _ => entry.slug.clone(),
    };

    let params = document.gradient(options.body);
    Ok(Some(Generated { slug, source: entry.path.to_path_buf(), params }))
}

/// Arranges `generated` as a JSON object keyed by slug.
pub fn manifest(generated: &[Generated]) -> BTreeMap<&str, &GradientParams> {
    generated.iter().map(|g| (g.slug.as_str(), &g.params)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient;

    fn site(files: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (path, contents) in files {
            let path = dir.path().join(path);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, contents).unwrap();
        }

        dir
    }

    const FRAMEWORK: &str = "+++\ntitle = \"Amazing Dynamic Framework\"\n\
        description = \"An innovative system\"\npubDate = 2024-03-15\n+++\n";

    #[test]
    fn generates_sorted_by_slug() {
        let dir = site(&[
            ("z-post.md", FRAMEWORK),
            ("a/index.md", "+++\ntitle = \"A\"\npubDate = 2023-01-01\n+++\nCalm.\n"),
            ("meta.json", r#"{"title": "M", "pubDate": "2022-06-01"}"#),
        ]);

        let catalog = Catalog::discover(dir.path()).unwrap();
        let generated = generate_all(&catalog, Options::default()).unwrap();
        let slugs: Vec<_> = generated.iter().map(|g| g.slug.as_str()).collect();
        assert_eq!(slugs, ["a", "meta", "z-post"]);

        let framework = &generated[2].params;
        assert_eq!(framework.colors, ["#000000", "#291e0a", "#b36b4d", "#8a0f13"]);

        let manifest = manifest(&generated);
        assert_eq!(manifest.len(), 3);
        assert_eq!(manifest["z-post"], framework);
    }

    #[test]
    fn drafts_are_skipped_unless_requested() {
        let draft = "+++\ntitle = \"D\"\npubDate = 2024-01-01\ndraft = true\n+++\n";
        let dir = site(&[("draft.md", draft), ("post.md", FRAMEWORK)]);
        let catalog = Catalog::discover(dir.path()).unwrap();

        let published = generate_all(&catalog, Options::default()).unwrap();
        assert_eq!(published.len(), 1);

        let all = generate_all(&catalog, Options { drafts: true, ..Options::default() }).unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn front_matter_slug_wins_and_must_be_unique() {
        let aliased = "+++\ntitle = \"B\"\npubDate = 2024-01-01\nslug = \"Post\"\n+++\n";
        let dir = site(&[("b.md", aliased), ("custom.md", aliased)]);
        let catalog = Catalog::discover(dir.path()).unwrap();

        let error = generate_all(&catalog, Options::default()).unwrap_err();
        let rendered = error.to_string();
        assert_eq!(error.message(), "found multiple posts with the same slug");
        assert!(rendered.contains("slug: post"));
        assert!(rendered.contains("b.md") && rendered.contains("custom.md"));
    }

    #[test]
    fn body_mode_changes_the_analysis() {
        let source = "+++\ntitle = \"T\"\npubDate = 2024-01-01\n+++\n**calm** _quiet_\n";
        let dir = site(&[("t.md", source)]);
        let catalog = Catalog::discover(dir.path()).unwrap();

        let raw = generate_all(&catalog, Options::default()).unwrap();
        let text = generate_all(&catalog, Options { body: BodyMode::Text, drafts: false }).unwrap();
        assert_ne!(raw[0].params, text[0].params);

        let document = Document::parse(source).unwrap();
        let expected = gradient::generate(&document.post, Some("calm quiet\n"));
        assert_eq!(text[0].params, expected);
    }

    #[test]
    fn load_errors_name_the_file() {
        let dir = site(&[("broken.md", "+++\ntitle = 1\n+++\n")]);
        let catalog = Catalog::discover(dir.path()).unwrap();
        let error = generate_all(&catalog, Options::default()).unwrap_err();
        assert_eq!(error.message(), "failed to load post");
        assert!(error.to_string().contains("path: broken.md"));
    }
}
