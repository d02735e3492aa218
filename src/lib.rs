//! # docpage-kit
//!
//! Server-side rendering for documentation pages: a navigation sidebar that
//! collapses on narrow screens, the page body with breadcrumbs and an in-page
//! table of contents, and preview cards for child pages.
//!
//! All input is render-ready data (usually JSON from a content pipeline):
//! a navigation tree of [`types::NavItem`] and one [`types::DocPage`] per
//! page. Rendering is a pure function of that data plus a [`context::RenderContext`]
//! and a [`layout::SidebarState`].
//!
//! ```text
//! nav.json + page.json  →  DocPageView  →  index.html
//!                           ├── header + sidebar toggle
//!                           ├── main: breadcrumbs, title, ToC, body, cards
//!                           ├── sidebar: recursive menu
//!                           └── footer
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Input data: nav items, page items, media, the page itself |
//! | [`ordering`] | Stable importance sort and the "worth showing" filters |
//! | [`context`] | Injectable renderers for markup, links, images and the current-page check |
//! | [`location`] | Path resolution against the page being displayed |
//! | [`markup`] | CommonMark renderer for content strings |
//! | [`nav_link`] | One nav entry as link, current marker, or plain text |
//! | [`menu`] | Recursive sidebar menu with a depth budget |
//! | [`page_block`] | Preview card for a child page |
//! | [`content`] | Page body: breadcrumbs, title, lead, section ToC, cards |
//! | [`layout`] | Sidebar state machine and the 800px breakpoint |
//! | [`document`] | Page assembly and the full HTML document |
//! | [`config`] | Hierarchical `config.toml` loading, validation and theme CSS |
//! | [`site`] | Static build over a content directory |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Sidebar State as Data
//!
//! The sidebar has two phases: before the page is interactive it is open and
//! the toggle is hidden, afterwards it follows the viewport (closed at 800px
//! and below) and the toggle works. [`layout::SidebarState`] models this as a
//! plain value. The server renders the pre-interactive phase; a small script
//! mirrors the same transitions in the browser, keyed on the same classes.
//!
//! ## Injected Collaborators
//!
//! Components never hard-code how links, markup or images become HTML. They
//! receive a [`context::RenderContext`] of trait objects with plain defaults,
//! so a host can swap in its own router links or image pipeline.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): malformed markup
//! is a build error and all interpolation is escaped unless wrapped in
//! `PreEscaped` on purpose.

pub mod config;
pub mod content;
pub mod context;
pub mod document;
pub mod layout;
pub mod location;
pub mod markup;
pub mod menu;
pub mod nav_link;
pub mod ordering;
pub mod output;
pub mod page_block;
pub mod site;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
