//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::content::PostMeta;
use crate::helpers::{full_url_for, html_escape};
use crate::Folio;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    if target_dir.join("_config.yml").exists() {
        anyhow::bail!("A site already exists in {:?}", target_dir);
    }

    let config = SiteConfig::default();
    fs::create_dir_all(target_dir.join(&config.posts_dir))?;
    fs::create_dir_all(target_dir.join("assets"))?;

    let config_content = r#"# Site
title: My Personal Space
description: Personal Website & Blog
author: John Doe
intro: >-
  This is where I share my thoughts, projects, and experiments.
  Check out my latest writing below.

# URL
url: http://example.com
## path: /posts, /post/<slug> (needs a host that serves index.html on sub-paths)
## hash: #posts, #post/<slug>
addressing: path

# Data
catalog_path: data/posts.json
posts_dir: data/posts
public_dir: .
shell: index.html

# Writing
default_read_time: 5 min read

# Rendering
container_id: main-content
animation_class: fade-in
index:
  grouping: timeline
  sort_toggle: true

# Local server
server:
  port: 4000
  ip: localhost
"#;
    fs::write(target_dir.join("_config.yml"), config_content)?;
    fs::write(target_dir.join(&config.shell), shell_html(&config))?;

    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    let mut hello = PostMeta::new("hello-world", "Hello World", &today)
        .with_excerpt("Welcome to your new blog. This is your very first post.");
    hello.read_time = Some("1 min read".to_string());

    let folio = Folio::new(target_dir)?;
    super::write_catalog(&folio, &[hello])?;

    let sample_post = r#"Welcome! This is your very first post. Edit it in `data/posts/hello-world.md`.

## Quick Start

### Create a new post

```bash
$ folio-rs new "My New Post" --excerpt "What it is about"
```

### Run server

```bash
$ folio-rs server
```

### Export static pages

```bash
$ folio-rs export
```
"#;
    fs::write(folio.data_path(&config.post_body_path("hello-world")), sample_post)?;

    Ok(())
}

/// App shell served for every route; export stamps its metadata per page
pub fn shell_html(config: &SiteConfig) -> String {
    let title = html_escape(&config.title);
    let description = html_escape(&config.description);
    let url = html_escape(&full_url_for(&config.url, ""));

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <meta name="description" content="{description}">
    <meta property="og:title" content="{title}">
    <meta property="og:description" content="{description}">
    <meta property="og:url" content="{url}">
    <link rel="canonical" href="{url}">
    <link rel="stylesheet" href="/css/style.css">
</head>
<body>
    <nav class="navbar">
        <a href="/home" class="logo">{title}</a>
        <div class="nav-links">
            <a href="/home" class="nav-link">Home</a>
            <a href="/posts" class="nav-link">Posts</a>
            <button type="button" id="theme-toggle" class="theme-toggle">Theme</button>
        </div>
    </nav>
    <main id="{container}" class="{animation}"></main>
    <script type="module" src="/js/app.js"></script>
</body>
</html>
"#,
        title = title,
        description = description,
        url = url,
        container = config.container_id,
        animation = config.animation_class,
    )
}
