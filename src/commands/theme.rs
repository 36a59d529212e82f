//! Show or flip the stored theme preference

use anyhow::Result;

use crate::dom::MemoryDocument;
use crate::helpers::full_url_for;
use crate::theme::{self, FileStorage, Theme, LIGHT_CLASS};
use crate::Folio;

/// Print the stored theme, toggling it first when asked
pub fn run(folio: &Folio, toggle: bool) -> Result<Theme> {
    let mut storage = FileStorage::open(&folio.base_dir);
    let mut document = MemoryDocument::new(&full_url_for(&folio.config.url, ""))?;

    let current = if toggle {
        theme::toggle(&mut storage, &mut document)?
    } else {
        theme::init(&storage, &mut document)
    };

    println!("Theme: {}", current.as_str());
    tracing::debug!("Root class {}: {}", LIGHT_CLASS, document.root_has_class(LIGHT_CLASS));
    Ok(current)
}
