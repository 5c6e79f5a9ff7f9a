use std::fs;
use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use hueline::batch::{self, Generated};
use hueline::body::BodyMode;
use hueline::catalog::Catalog;
use hueline::error::{Result, Chainable};
use hueline::{error, Document};

use crate::config::{Layout, Settings};
use crate::flags::Build;

/// Runs a full site build and returns what was generated.
pub fn build(flags: &Build) -> Result<Vec<Generated>> {
    let start = Instant::now();
    let settings = Settings::for_build(flags)?;

    let catalog = Catalog::discover(&settings.content).chain_with(|| error! {
        "failed to discover posts",
        "content directory" => settings.content.display(),
    })?;

    tracing::info!(posts = catalog.len(), ms = start.elapsed().as_millis(), "discovery");

    let generation = Instant::now();
    let generated = batch::generate_all(&catalog, settings.batch_options())?;
    tracing::info!(posts = generated.len(), ms = generation.elapsed().as_millis(), "generation");

    let write = Instant::now();
    match settings.layout {
        Layout::Manifest => write_json(&settings.output, &batch::manifest(&generated))?,
        Layout::Split => write_split(&settings.output, &generated)?,
    }

    tracing::info!(output = %settings.output.display(), ms = write.elapsed().as_millis(), "write");
    tracing::info!(ms = start.elapsed().as_millis(), "total");
    Ok(generated)
}

/// Writes each post's parameters to `<dir>/<slug>.json`.
fn write_split(dir: &Path, generated: &[Generated]) -> Result<()> {
    for post in generated {
        write_json(&dir.join(format!("{}.json", post.slug)), &post.params)?;
    }

    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).chain_with(|| error! {
            "failed to create output directory",
            "path" => parent.display(),
        })?;
    }

    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json + "\n").chain_with(|| error! {
        "failed to write output",
        "path" => path.display(),
    })
}

/// The gradient for the post at `path`, as pretty JSON.
pub fn post(path: &Path, body: BodyMode) -> Result<String> {
    let document = Document::read(path)?;
    Ok(serde_json::to_string_pretty(&document.gradient(body))?)
}

/// The full analysis of the post at `path`, as pretty JSON.
pub fn inspect(path: &Path, body: BodyMode) -> Result<String> {
    let document = Document::read(path)?;
    Ok(serde_json::to_string_pretty(&document.analyze(body))?)
}
