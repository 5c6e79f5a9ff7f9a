use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::Result;
use crate::fstree::FsTree;
use crate::post::{MARKDOWN_EXTS, METADATA_EXTS};
use crate::util::slugify_path;

/// A post file found in the content directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Absolute or root-relative path to the file.
    pub path: Arc<Path>,
    /// Path relative to the content directory.
    pub relative: PathBuf,
    /// The slug implied by the file's location.
    pub slug: String,
}

/// Every post file beneath a content directory, in sorted depth-first order.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub root: PathBuf,
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn discover<P: AsRef<Path>>(content: P) -> Result<Self> {
        let tree = FsTree::build(content.as_ref())?;
        let root = tree.root();
        let entries: Vec<_> = tree.files(root.id)
            .filter(|e| e.file_ext().map_or(false, is_post_ext))
            .filter_map(|entry| {
                let relative = entry.path_relative_to(root)?.to_path_buf();
                let slug = location_slug(&relative);
                Some(CatalogEntry { path: entry.path.clone(), relative, slug })
            })
            .collect();

        tracing::debug!(root = %root.path.display(), posts = entries.len(), "catalogued content");
        Ok(Catalog { root: root.path.to_path_buf(), entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn is_post_ext(ext: &str) -> bool {
    MARKDOWN_EXTS.contains(&ext) || METADATA_EXTS.contains(&ext)
}

/// The slug for a post at `relative`: its slugified path without extension.
/// An `index` file is named after its directory; the content root's own
/// index is `index`.
///
/// ```
/// use hueline::catalog::location_slug;
///
/// assert_eq!(location_slug("Hello World.md".as_ref()), "hello-world");
/// assert_eq!(location_slug("blog/2024/First Post.markdown".as_ref()), "blog/2024/first-post");
/// assert_eq!(location_slug("blog/trip/index.md".as_ref()), "blog/trip");
/// assert_eq!(location_slug("index.toml".as_ref()), "index");
/// ```
pub fn location_slug(relative: &Path) -> String {
    let stem = relative.with_extension("");
    let path = match stem.file_name() {
        Some(name) if name == "index" => stem.parent().unwrap_or(stem.as_path()),
        _ => stem.as_path(),
    };

    match slugify_path(path) {
        slug if slug.is_empty() => "index".into(),
        slug => slug,
    }
}
