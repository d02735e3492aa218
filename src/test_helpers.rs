//! Shared test utilities: navigation tree builders, page fixtures, and small
//! HTML probes.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tree = nav("root")
//!     .child(nav("guide").importance(2.0).child(nav("install").build()).build())
//!     .child(nav("faq").build())
//!     .build();
//! let html = render_menu_item(&tree, &Relative::AsGiven, None, &RenderContext::default());
//! assert_eq!(count(&html.into_string(), "<li"), 4);
//! ```

use crate::types::{DocPage, NavItem, PageData, PageItem, Section};

// =========================================================================
// Builders
// =========================================================================

/// Builder for [`NavItem`]. Defaults: `path` and `title` equal the id,
/// `hasContents` is true, no importance.
pub struct NavBuilder {
    item: NavItem,
}

pub fn nav(id: &str) -> NavBuilder {
    NavBuilder {
        item: NavItem {
            id: id.to_string(),
            importance: None,
            has_contents: true,
            path: id.to_string(),
            title: Some(id.to_string()),
            items: vec![],
        },
    }
}

impl NavBuilder {
    pub fn importance(mut self, importance: f64) -> Self {
        self.item.importance = Some(importance);
        self
    }

    pub fn contents(mut self, has_contents: bool) -> Self {
        self.item.has_contents = has_contents;
        self
    }

    pub fn path(mut self, path: &str) -> Self {
        self.item.path = path.to_string();
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.item.title = Some(title.to_string());
        self
    }

    pub fn child(mut self, child: NavItem) -> Self {
        self.item.items.push(child);
        self
    }

    pub fn build(self) -> NavItem {
        self.item
    }
}

/// A navigable page item with no excerpt, summary or media.
pub fn page_item(id: &str) -> PageItem {
    PageItem {
        id: id.to_string(),
        has_contents: true,
        path: id.to_string(),
        title: Some(id.to_string()),
        ..Default::default()
    }
}

/// A page item with an excerpt, so it passes the non-empty filter.
pub fn page_item_with_excerpt(id: &str, excerpt: &str) -> PageItem {
    PageItem {
        excerpt: Some(excerpt.to_string()),
        ..page_item(id)
    }
}

/// A three-level tree: `root` → `a`, `b` → `a1` under `a`.
pub fn three_level_tree() -> NavItem {
    nav("root")
        .path("/")
        .title("Root")
        .child(
            nav("a")
                .path("/a")
                .title("Level A")
                .child(nav("a1").path("/a/a1").title("Level A1").build())
                .build(),
        )
        .child(nav("b").path("/b").title("Level B").build())
        .build()
}

/// A page titled `title` with the given sections and child items.
pub fn doc_page(title: &str, sections: &[(&str, &str)], items: Vec<PageItem>) -> DocPage {
    DocPage {
        id: title.to_lowercase(),
        data: Some(PageData {
            title: title.to_string(),
            sections: sections
                .iter()
                .map(|(title, id)| Section {
                    title: title.to_string(),
                    id: id.to_string(),
                })
                .collect(),
            ..Default::default()
        }),
        items,
    }
}

// =========================================================================
// HTML probes
// =========================================================================

/// Number of non-overlapping occurrences of `needle` in `haystack`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Byte offset of `needle`, panicking with the document on a miss.
pub fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("'{needle}' not found in:\n{haystack}"))
}
