//! In-memory document used for headless rendering

use std::collections::{BTreeSet, HashMap};
use url::Url;

use super::Document;

/// Recorded mutation, in the order it was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomOp {
    SetHtml(String),
    AddClass(String, String),
    RemoveClass(String, String),
    Reflow(String),
    Push(String),
    Replace(String),
}

/// A tiny document: a set of root elements whose HTML may contain nested
/// elements addressable by `id`, plus a history stack and nav links.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    history: Vec<Url>,
    cursor: usize,
    roots: HashMap<String, String>,
    classes: HashMap<String, BTreeSet<String>>,
    values: HashMap<String, String>,
    nav: Vec<(String, bool)>,
    root_classes: BTreeSet<String>,
    ops: Vec<DomOp>,
}

impl MemoryDocument {
    /// Create a document loaded at `url`
    pub fn new(url: &str) -> anyhow::Result<Self> {
        Ok(Self {
            history: vec![Url::parse(url)?],
            cursor: 0,
            roots: HashMap::new(),
            classes: HashMap::new(),
            values: HashMap::new(),
            nav: Vec::new(),
            root_classes: BTreeSet::new(),
            ops: Vec::new(),
        })
    }

    /// Add an empty top-level element
    pub fn with_container(mut self, id: &str) -> Self {
        self.roots.insert(id.to_string(), String::new());
        self
    }

    pub fn with_nav_links(mut self, hrefs: &[&str]) -> Self {
        self.nav = hrefs.iter().map(|h| (h.to_string(), false)).collect();
        self
    }

    /// Every history entry, oldest first
    pub fn history(&self) -> Vec<String> {
        self.history.iter().map(|u| u.to_string()).collect()
    }

    pub fn ops(&self) -> &[DomOp] {
        &self.ops
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.classes
            .get(id)
            .map(|c| c.contains(class))
            .unwrap_or(false)
    }

    pub fn root_has_class(&self, class: &str) -> bool {
        self.root_classes.contains(class)
    }

    /// Hrefs of the nav links currently marked active
    pub fn active_nav(&self) -> Vec<&str> {
        self.nav
            .iter()
            .filter(|(_, active)| *active)
            .map(|(href, _)| href.as_str())
            .collect()
    }

    pub fn input_value(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    /// Step back in history, as the browser's back button does
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.history.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    fn current(&self) -> &Url {
        &self.history[self.cursor]
    }

    fn resolve(&self, location: &str) -> Option<Url> {
        match self.current().join(location) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!("Ignoring invalid location {}: {}", location, e);
                None
            }
        }
    }
}

impl Document for MemoryDocument {
    fn location(&self) -> String {
        self.current().to_string()
    }

    fn push_state(&mut self, location: &str) {
        if let Some(url) = self.resolve(location) {
            self.history.truncate(self.cursor + 1);
            self.history.push(url);
            self.cursor = self.history.len() - 1;
            self.ops.push(DomOp::Push(location.to_string()));
        }
    }

    fn replace_state(&mut self, location: &str) {
        if let Some(url) = self.resolve(location) {
            self.history[self.cursor] = url;
            self.ops.push(DomOp::Replace(location.to_string()));
        }
    }

    fn set_inner_html(&mut self, id: &str, html: &str) -> bool {
        if let Some(content) = self.roots.get_mut(id) {
            *content = html.to_string();
            self.ops.push(DomOp::SetHtml(id.to_string()));
            return true;
        }

        for content in self.roots.values_mut() {
            if let Some((start, end)) = locate_inner(content, id) {
                content.replace_range(start..end, html);
                self.ops.push(DomOp::SetHtml(id.to_string()));
                return true;
            }
        }
        false
    }

    fn inner_html(&self, id: &str) -> Option<String> {
        if let Some(content) = self.roots.get(id) {
            return Some(content.clone());
        }
        self.roots.values().find_map(|content| {
            locate_inner(content, id).map(|(start, end)| content[start..end].to_string())
        })
    }

    fn add_class(&mut self, id: &str, class: &str) {
        self.classes
            .entry(id.to_string())
            .or_default()
            .insert(class.to_string());
        self.ops
            .push(DomOp::AddClass(id.to_string(), class.to_string()));
    }

    fn remove_class(&mut self, id: &str, class: &str) {
        if let Some(classes) = self.classes.get_mut(id) {
            classes.remove(class);
        }
        self.ops
            .push(DomOp::RemoveClass(id.to_string(), class.to_string()));
    }

    fn offset_width(&mut self, id: &str) -> u32 {
        self.ops.push(DomOp::Reflow(id.to_string()));
        960
    }

    fn set_input_value(&mut self, id: &str, value: &str) {
        self.values.insert(id.to_string(), value.to_string());
    }

    fn nav_links(&self) -> Vec<String> {
        self.nav.iter().map(|(href, _)| href.clone()).collect()
    }

    fn set_nav_active(&mut self, href: &str, active: bool) {
        for link in self.nav.iter_mut().filter(|(h, _)| h == href) {
            link.1 = active;
        }
    }

    fn set_root_class(&mut self, class: &str, on: bool) {
        if on {
            self.root_classes.insert(class.to_string());
        } else {
            self.root_classes.remove(class);
        }
    }
}

/// Byte range of the content of the element carrying `id="..."`
fn locate_inner(html: &str, id: &str) -> Option<(usize, usize)> {
    let attr = format!(r#"id="{}""#, id);
    let attr_pos = html.find(&attr)?;
    let tag_start = html[..attr_pos].rfind('<')?;
    let name: String = html[tag_start + 1..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();
    if name.is_empty() {
        return None;
    }
    let content_start = attr_pos + html[attr_pos..].find('>')? + 1;

    let open = format!("<{}", name);
    let close = format!("</{}>", name);
    let mut depth = 1;
    let mut pos = content_start;

    while depth > 0 {
        let rest = &html[pos..];
        let next_close = rest.find(&close)?;
        let next_open = find_open_tag(rest, &open);

        match next_open {
            Some(o) if o < next_close => {
                depth += 1;
                pos += o + open.len();
            }
            _ => {
                depth -= 1;
                if depth == 0 {
                    return Some((content_start, pos + next_close));
                }
                pos += next_close + close.len();
            }
        }
    }
    None
}

/// Position of `<name` followed by a tag delimiter (so `<div` skips `<divider`)
fn find_open_tag(haystack: &str, open: &str) -> Option<usize> {
    let mut offset = 0;
    while let Some(i) = haystack[offset..].find(open) {
        let at = offset + i;
        let next = haystack[at + open.len()..].chars().next();
        if matches!(next, Some(' ') | Some('>') | Some('/') | Some('\n') | Some('\t')) {
            return Some(at);
        }
        offset = at + open.len();
    }
    None
}
