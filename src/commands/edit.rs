//! Edit an existing post

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::content::PostMeta;
use crate::Folio;

/// Changes to a catalog entry; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct EditPost {
    /// Slug of the entry to edit
    pub slug: String,
    pub new_slug: Option<String>,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub read_time: Option<String>,
    pub date: Option<String>,
    /// Markdown file replacing the post body
    pub body: Option<PathBuf>,
}

/// Update a catalog entry in place, moving its body when the slug changes
pub fn edit_post(folio: &Folio, edit: EditPost) -> Result<PostMeta> {
    let mut posts = super::read_catalog(folio)?;
    let index = posts
        .iter()
        .position(|p| p.slug == edit.slug)
        .with_context(|| format!("Post not found: {}", edit.slug))?;

    let mut meta = posts[index].clone();
    if let Some(title) = edit.title {
        let title = title.trim();
        if title.is_empty() {
            anyhow::bail!("Title is required");
        }
        meta.title = title.to_string();
    }
    if let Some(excerpt) = edit.excerpt {
        meta.excerpt = excerpt;
    }
    if let Some(read_time) = edit.read_time {
        meta.read_time = Some(read_time);
    }
    if let Some(date) = edit.date {
        meta.date = date;
    }

    let old_path = folio.data_path(&folio.config.post_body_path(&edit.slug));
    if let Some(new_slug) = edit.new_slug.as_deref().map(str::trim) {
        if new_slug != edit.slug {
            super::check_slug(new_slug)?;
            if posts.iter().any(|p| p.slug == new_slug) {
                anyhow::bail!("Post already exists: {}", new_slug);
            }
            meta.slug = new_slug.to_string();
        }
    }

    let body_path = folio.data_path(&folio.config.post_body_path(&meta.slug));
    if body_path != old_path {
        if body_path.exists() {
            anyhow::bail!("File already exists: {:?}", body_path);
        }
        if old_path.exists() {
            fs::rename(&old_path, &body_path)?;
            println!("Moved: {:?} -> {:?}", old_path, body_path);
        } else {
            tracing::warn!("No body file at {:?}", old_path);
        }
    }

    if let Some(source) = edit.body {
        let content = fs::read_to_string(&source)
            .with_context(|| format!("Failed to read {:?}", source))?;
        if let Some(parent) = body_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&body_path, content)?;
    }

    posts[index] = meta.clone();
    super::write_catalog(folio, &posts)?;

    println!("Updated: {}", meta.slug);

    Ok(meta)
}

/// Run the edit command
pub fn run(folio: &Folio, edit: EditPost) -> Result<()> {
    edit_post(folio, edit)?;
    Ok(())
}
