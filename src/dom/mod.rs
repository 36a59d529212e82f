//! Document environment seen by the router and the theme toggle.
//!
//! A browser host implements [`Document`] over the real DOM and history API;
//! [`MemoryDocument`] is the in-process implementation used for headless
//! rendering.

mod memory;

pub use memory::{DomOp, MemoryDocument};

/// Element lookup, HTML injection and history primitives
pub trait Document {
    /// Absolute URL of the current location
    fn location(&self) -> String;

    /// Push a new history entry for an in-app location
    fn push_state(&mut self, location: &str);

    /// Replace the current history entry
    fn replace_state(&mut self, location: &str);

    /// Replace the content of the element with `id`; `false` when missing
    fn set_inner_html(&mut self, id: &str, html: &str) -> bool;

    /// Current content of the element with `id`
    fn inner_html(&self, id: &str) -> Option<String>;

    fn add_class(&mut self, id: &str, class: &str);

    fn remove_class(&mut self, id: &str, class: &str);

    /// Read the element's layout width, forcing a synchronous reflow
    fn offset_width(&mut self, id: &str) -> u32;

    /// Set the value of a form input
    fn set_input_value(&mut self, id: &str, value: &str);

    /// `href` of every primary navigation link
    fn nav_links(&self) -> Vec<String>;

    fn set_nav_active(&mut self, href: &str, active: bool);

    /// Toggle a class on the root element
    fn set_root_class(&mut self, class: &str, on: bool);
}
