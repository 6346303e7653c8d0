//! In-memory display surface that rendered cards are inserted into.
//!
//! # Design
//! A `MountPoint` models one container element plus the content placed
//! around it. Insertion follows `insertAdjacentHTML`: fragments go before
//! the element, at the start or end of its children, or after it. Content
//! is only ever added, never replaced, so a plain mutex around the three
//! lists is all the coordination concurrent renderers need.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;

/// Where a fragment lands relative to the mount point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertPosition {
    /// Immediately before the container element.
    BeforeBegin,
    /// Inside the container, before its first child.
    AfterBegin,
    /// Inside the container, after its last child.
    #[default]
    BeforeEnd,
    /// Immediately after the container element.
    AfterEnd,
}

impl InsertPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsertPosition::BeforeBegin => "beforebegin",
            InsertPosition::AfterBegin => "afterbegin",
            InsertPosition::BeforeEnd => "beforeend",
            InsertPosition::AfterEnd => "afterend",
        }
    }
}

impl fmt::Display for InsertPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown insert position '{0}', expected beforebegin, afterbegin, beforeend or afterend")]
pub struct UnknownPosition(pub String);

impl FromStr for InsertPosition {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "beforebegin" => Ok(InsertPosition::BeforeBegin),
            "afterbegin" => Ok(InsertPosition::AfterBegin),
            "beforeend" => Ok(InsertPosition::BeforeEnd),
            "afterend" => Ok(InsertPosition::AfterEnd),
            _ => Err(UnknownPosition(s.to_string())),
        }
    }
}

#[derive(Debug, Default)]
struct Surface {
    before: Vec<String>,
    children: Vec<String>,
    after: Vec<String>,
}

/// Cloneable handle to a shared container element.
#[derive(Debug, Clone)]
pub struct MountPoint {
    tag: String,
    class: String,
    surface: Arc<Mutex<Surface>>,
}

impl MountPoint {
    pub fn new(tag: &str, class: &str) -> Self {
        Self {
            tag: tag.to_string(),
            class: class.to_string(),
            surface: Arc::new(Mutex::new(Surface::default())),
        }
    }

    /// The `div.card-container` element the profile page renders into.
    pub fn card_container() -> Self {
        Self::new("div", "card-container")
    }

    /// Class selector that locates this element, e.g. `.card-container`.
    pub fn selector(&self) -> String {
        format!(".{}", self.class)
    }

    pub fn insert_adjacent_html(&self, position: InsertPosition, html: &str) {
        let mut surface = self.surface.lock();
        let html = html.to_string();
        match position {
            InsertPosition::BeforeBegin => surface.before.push(html),
            InsertPosition::AfterBegin => surface.children.insert(0, html),
            InsertPosition::BeforeEnd => surface.children.push(html),
            InsertPosition::AfterEnd => surface.after.insert(0, html),
        }
    }

    /// Fragments inside the element, in document order.
    pub fn children(&self) -> Vec<String> {
        self.surface.lock().children.clone()
    }

    /// Number of fragments inserted anywhere relative to this element.
    pub fn fragment_count(&self) -> usize {
        let surface = self.surface.lock();
        surface.before.len() + surface.children.len() + surface.after.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragment_count() == 0
    }

    /// The element with its surrounding fragments, as HTML.
    pub fn outer_html(&self) -> String {
        let surface = self.surface.lock();
        let mut out = String::new();
        for fragment in &surface.before {
            out.push_str(fragment);
            out.push('\n');
        }
        out.push_str(&format!("<{} class=\"{}\">\n", self.tag, self.class));
        for fragment in &surface.children {
            out.push_str(fragment);
            out.push('\n');
        }
        out.push_str(&format!("</{}>\n", self.tag));
        for fragment in &surface.after {
            out.push_str(fragment);
            out.push('\n');
        }
        out
    }
}
