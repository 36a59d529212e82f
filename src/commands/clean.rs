//! Remove exported pages

use anyhow::Result;
use std::fs;

use crate::Folio;

/// Output directories written by export, relative to the public dir
const EXPORT_DIRS: &[&str] = &["post", "home", "posts"];

/// Delete the export output and local storage
pub fn run(folio: &Folio) -> Result<()> {
    for dir in EXPORT_DIRS {
        let path = folio.public_dir.join(dir);
        if path.exists() {
            fs::remove_dir_all(&path)?;
            tracing::info!("Deleted: {:?}", path);
        }
    }

    let storage = folio.base_dir.join(crate::theme::STORAGE_FILE);
    if storage.exists() {
        fs::remove_file(&storage)?;
        tracing::info!("Deleted: {:?}", storage);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_clean_removes_export_only() {
        let dir = TempDir::new().unwrap();
        crate::commands::init::init_site(dir.path()).unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        folio.export().unwrap();
        assert!(dir.path().join("post/hello-world/index.html").exists());

        folio.clean().unwrap();
        assert!(!dir.path().join("post").exists());
        assert!(!dir.path().join("home").exists());
        assert!(dir.path().join("index.html").exists());
        assert!(dir.path().join("data/posts/hello-world.md").exists());
    }
}
