//! Create a new post

use anyhow::Result;
use std::fs;

use crate::content::PostMeta;
use crate::Folio;

/// Fields of a new catalog entry; `None` picks the default
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub title: String,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub read_time: Option<String>,
    pub date: Option<String>,
}

/// Insert a post at the top of the catalog and write its markdown body
pub fn create_post(folio: &Folio, post: NewPost) -> Result<PostMeta> {
    let title = post.title.trim();
    if title.is_empty() {
        anyhow::bail!("Title is required");
    }

    let slug = match post.slug.as_deref().map(str::trim) {
        Some(slug) => slug.to_string(),
        None => slug::slugify(title),
    };
    super::check_slug(&slug)?;

    let mut posts = super::read_catalog(folio)?;
    if posts.iter().any(|p| p.slug == slug) {
        anyhow::bail!("Post already exists: {}", slug);
    }

    let date = post
        .date
        .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());
    let mut meta =
        PostMeta::new(&slug, title, &date).with_excerpt(post.excerpt.as_deref().unwrap_or(""));
    meta.read_time = Some(
        post.read_time
            .unwrap_or_else(|| folio.config.default_read_time.clone()),
    );

    let body_path = folio.data_path(&folio.config.post_body_path(&slug));
    if body_path.exists() {
        anyhow::bail!("File already exists: {:?}", body_path);
    }
    if let Some(parent) = body_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&body_path, format!("# {}\n\n", title))?;

    posts.insert(0, meta.clone());
    super::write_catalog(folio, &posts)?;

    println!("Created: {:?}", body_path);

    Ok(meta)
}

/// Run the new command
pub fn run(folio: &Folio, post: NewPost) -> Result<()> {
    create_post(folio, post)?;
    Ok(())
}
