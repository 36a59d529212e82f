//! CLI commands operating on a site directory

pub mod asset;
pub mod clean;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod new;
pub mod render;
pub mod theme;

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;

use crate::content::PostMeta;
use crate::Folio;

/// Refuse slugs that cannot be a single file name and URL segment
pub(crate) fn check_slug(slug: &str) -> Result<()> {
    if slug.is_empty() {
        anyhow::bail!("Slug is required");
    }
    if slug.contains(['/', '\\']) || slug == "." || slug == ".." {
        anyhow::bail!("Slug must be a single path segment: {}", slug);
    }
    Ok(())
}

/// Read the catalog file; a missing file is an empty catalog
pub(crate) fn read_catalog(folio: &Folio) -> Result<Vec<PostMeta>> {
    let path = folio.data_path(&folio.config.catalog_path);
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(&path)?;
    serde_json::from_str(&content).with_context(|| format!("Invalid catalog {:?}", path))
}

/// Write the catalog file with four-space indentation
pub(crate) fn write_catalog(folio: &Folio, posts: &[PostMeta]) -> Result<()> {
    let path = folio.data_path(&folio.config.catalog_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    posts.serialize(&mut ser)?;
    buf.push(b'\n');

    fs::write(&path, buf)?;
    Ok(())
}
