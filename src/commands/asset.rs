//! Import an image into the site assets

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::Folio;

/// Directory under the site root holding imported assets
pub const ASSETS_DIR: &str = "assets";

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// Copy an image into `assets/` and return the markdown that embeds it
pub fn import_image(folio: &Folio, source: &Path, alt: &str, force: bool) -> Result<String> {
    let extension = source
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    if !IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        anyhow::bail!("Not an image: {:?}", source);
    }

    let filename = source
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("Invalid file name: {:?}", source))?;

    let assets_dir = folio.base_dir.join(ASSETS_DIR);
    let dest = assets_dir.join(filename);
    if dest.exists() && !force {
        anyhow::bail!("File already exists: {:?}", dest);
    }

    fs::create_dir_all(&assets_dir)?;
    fs::copy(source, &dest).with_context(|| format!("Failed to copy {:?}", source))?;
    tracing::debug!("Copied {:?} to {:?}", source, dest);

    Ok(format!(
        "![{}](/{}/{})",
        alt,
        ASSETS_DIR,
        crate::helpers::encode_segment(filename)
    ))
}

/// Run the asset command and print the snippet
pub fn run(folio: &Folio, source: &Path, alt: &str, force: bool) -> Result<()> {
    let snippet = import_image(folio, source, alt, force)?;
    println!("{}", snippet);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn site() -> (TempDir, Folio) {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        (dir, folio)
    }

    #[test]
    fn test_import_copies_and_returns_snippet() {
        let (dir, folio) = site();
        let source = dir.path().join("photo.PNG");
        fs::write(&source, b"\x89PNG").unwrap();

        let snippet = import_image(&folio, &source, "Alt Text", false).unwrap();
        assert_eq!(snippet, "![Alt Text](/assets/photo.PNG)");
        assert_eq!(fs::read(dir.path().join("assets/photo.PNG")).unwrap(), b"\x89PNG");
    }

    #[test]
    fn test_import_encodes_file_name() {
        let (dir, folio) = site();
        let source = dir.path().join("my cat.jpg");
        fs::write(&source, b"jpg").unwrap();

        let snippet = import_image(&folio, &source, "Cat", false).unwrap();
        assert_eq!(snippet, "![Cat](/assets/my%20cat.jpg)");
    }

    #[test]
    fn test_import_refusals() {
        let (dir, folio) = site();
        let text = dir.path().join("notes.txt");
        fs::write(&text, "hi").unwrap();
        assert!(import_image(&folio, &text, "x", false).is_err());

        let image = dir.path().join("a.gif");
        fs::write(&image, b"one").unwrap();
        import_image(&folio, &image, "x", false).unwrap();

        fs::write(&image, b"two").unwrap();
        let err = import_image(&folio, &image, "x", false).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(fs::read(dir.path().join("assets/a.gif")).unwrap(), b"one");

        import_image(&folio, &image, "x", true).unwrap();
        assert_eq!(fs::read(dir.path().join("assets/a.gif")).unwrap(), b"two");
    }
}
