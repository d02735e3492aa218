//! Path resolution against the page being displayed.
//!
//! Item paths arrive in three flavours, expressed by [`Relative`]: exactly as
//! given (the browser resolves them), relative to the current page, or
//! relative to a site root URL. [`SiteLocation`] knows the current page's URL
//! path and uses it both to build link targets and to answer "is this the
//! current page?".
//!
//! Pages are served as `dir/index.html`, so the current page acts as a
//! directory when resolving relative targets.

use crate::context::{Link, LinkRenderer, PathMatcher};
use maud::{Markup, html};

/// How a target path is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Relative {
    /// Emitted unchanged; the browser resolves it.
    #[default]
    AsGiven,
    /// Relative to the current page.
    CurrentPage,
    /// Relative to the given root URL path.
    Root(String),
}

/// Normalize a URL path: collapse `.`, `..` and repeated slashes, always with
/// a leading slash and never a trailing one (except for `/` itself).
///
/// ```
/// use docpage_kit::location::normalize_path;
///
/// assert_eq!(normalize_path("a//b/./c/"), "/a/b/c");
/// assert_eq!(normalize_path("/a/b/../../.."), "/");
/// ```
pub fn normalize_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    format!("/{}", segments.join("/"))
}

fn join(base: &str, to: &str) -> String {
    normalize_path(&format!("{base}/{to}"))
}

/// The page currently being rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLocation {
    current: String,
}

impl SiteLocation {
    pub fn new(current: &str) -> Self {
        Self {
            current: normalize_path(current),
        }
    }

    /// Normalized URL path of the current page.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Absolute, normalized path that `to` denotes from this location.
    pub fn resolve(&self, to: &str, relative: &Relative) -> String {
        if to.starts_with('/') {
            return normalize_path(to);
        }
        match relative {
            Relative::Root(root) => join(root, to),
            Relative::AsGiven | Relative::CurrentPage => join(&self.current, to),
        }
    }

    /// Link target for `to`: unchanged for [`Relative::AsGiven`], otherwise
    /// the resolved path in directory form (`/guide/`).
    pub fn href(&self, to: &str, relative: &Relative) -> String {
        if *relative == Relative::AsGiven {
            return to.to_string();
        }
        let resolved = self.resolve(to, relative);
        if resolved == "/" {
            resolved
        } else {
            format!("{resolved}/")
        }
    }
}

impl PathMatcher for SiteLocation {
    fn is_current(&self, path: &str, relative: &Relative) -> bool {
        self.resolve(path, relative) == self.current
    }
}

impl LinkRenderer for SiteLocation {
    fn render_link(&self, link: &Link<'_>, children: Markup) -> Markup {
        let href = self.href(link.to, link.relative);
        html! {
            a href=(href) class=[link.unstyled.then_some("unstyled")] title=[link.title] {
                (children)
            }
        }
    }
}
