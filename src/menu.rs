//! Sidebar navigation tree.
//!
//! Each node renders its own label through [`render_nav_link`] and then,
//! budget permitting, its displayable children. Children are filtered and
//! importance-sorted independently at every level; the tree is never
//! flattened.
//!
//! The depth budget (`child_levels`) counts levels *below* the node being
//! rendered: `Some(0)` renders the node alone, `Some(1)` adds its direct
//! children, `None` renders the whole tree.

use crate::context::RenderContext;
use crate::location::Relative;
use crate::nav_link::render_nav_link;
use crate::ordering::{displayable_children, sort_by_importance};
use crate::types::{NavEntry, NavItem};
use maud::{Markup, html};

/// Render `item` as an `<li>` with its subtree.
pub fn render_menu_item<T: NavEntry>(
    item: &T,
    relative: &Relative,
    child_levels: Option<u32>,
    ctx: &RenderContext<'_>,
) -> Markup {
    let children = displayable_children(item);
    let active = ctx.paths.is_current(item.path(), relative);
    let expand = child_levels.is_none_or(|levels| levels > 0) && !children.is_empty();

    if !expand && !children.is_empty() {
        tracing::trace!(
            path = item.path(),
            hidden = children.len(),
            "Menu depth budget exhausted"
        );
    }

    let next_levels = child_levels.map(|levels| levels.saturating_sub(1));

    html! {
        li class=[active.then_some("active")] {
            (render_nav_link(item, relative, true, ctx))
            @if expand {
                ul.nav-items {
                    @for child in &children {
                        (render_menu_item(*child, relative, next_levels, ctx))
                    }
                }
            }
        }
    }
}

/// Render the whole sidebar navigation.
///
/// Top-level entries are importance-sorted but not filtered. Links resolve
/// against `root_url_path`. An empty tree renders nothing.
pub fn render_global_nav(
    nav: &[NavItem],
    root_url_path: &str,
    child_levels: Option<u32>,
    ctx: &RenderContext<'_>,
) -> Markup {
    let sorted = sort_by_importance(nav);
    let relative = Relative::Root(root_url_path.to_string());

    html! {
        @if !sorted.is_empty() {
            nav.global-nav id="global-nav" {
                ul.nav-items.nav-top-level {
                    @for item in &sorted {
                        (render_menu_item(*item, &relative, child_levels, ctx))
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::SiteLocation;
    use crate::test_helpers::{count, nav, position, three_level_tree};

    fn render(item: &NavItem, child_levels: Option<u32>) -> String {
        render_menu_item(item, &Relative::AsGiven, child_levels, &RenderContext::default())
            .into_string()
    }

    #[test]
    fn depth_budget_of_one_stops_at_children() {
        let html = render(&three_level_tree(), Some(1));
        assert!(html.contains("Root"));
        assert!(html.contains("Level A"));
        assert!(html.contains("Level B"));
        assert!(!html.contains("Level A1"));
        assert_eq!(count(&html, "<li"), 3);
    }

    #[test]
    fn omitted_budget_renders_every_level() {
        let html = render(&three_level_tree(), None);
        assert!(html.contains("Level A1"));
        assert_eq!(count(&html, "<li"), 4);
        assert_eq!(count(&html, "<ul"), 2);
    }

    #[test]
    fn zero_budget_renders_only_the_node() {
        let html = render(&three_level_tree(), Some(0));
        assert_eq!(count(&html, "<li"), 1);
        assert!(!html.contains("<ul"));
    }

    #[test]
    fn children_are_sorted_per_level() {
        let tree = nav("root")
            .child(
                nav("low")
                    .importance(1.0)
                    .child(nav("low-z").build())
                    .child(nav("low-y").importance(3.0).build())
                    .build(),
            )
            .child(nav("high").importance(2.0).build())
            .build();
        let html = render(&tree, None);
        assert!(position(&html, ">high<") < position(&html, ">low<"));
        assert!(position(&html, ">low-y<") < position(&html, ">low-z<"));
    }

    #[test]
    fn empty_children_are_skipped() {
        let tree = nav("root")
            .child(nav("hidden").contents(false).build())
            .child(nav("shown").build())
            .build();
        let html = render(&tree, None);
        assert!(!html.contains("hidden"));
        assert!(html.contains("shown"));
    }

    #[test]
    fn leaf_node_has_no_list() {
        let html = render(&nav("leaf").build(), None);
        assert_eq!(html, r#"<li><a href="leaf" class="unstyled">leaf</a></li>"#);
    }

    #[test]
    fn current_node_is_marked_active() {
        let loc = SiteLocation::new("/a");
        let ctx = RenderContext::default().with_paths(&loc);
        let html = render_menu_item(&three_level_tree(), &Relative::AsGiven, None, &ctx)
            .into_string();
        assert_eq!(count(&html, r#"<li class="active">"#), 1);
        assert!(html.contains(r#"<li class="active"><em aria-current="page">Level A</em>"#));
    }

    #[test]
    fn global_nav_sorts_top_level_without_filtering() {
        let items = vec![
            nav("plain").contents(false).title("Plain").build(),
            nav("first").importance(9.0).title("First").build(),
        ];
        let html = render_global_nav(&items, "/", None, &RenderContext::default()).into_string();
        assert!(html.contains(r#"<nav class="global-nav" id="global-nav">"#));
        assert!(position(&html, "First") < position(&html, "Plain"));
        assert!(html.contains("<span>Plain</span>"));
    }

    #[test]
    fn global_nav_links_resolve_against_root() {
        let loc = SiteLocation::new("/docs/guide");
        let ctx = RenderContext::default().with_paths(&loc).with_links(&loc);
        let items = vec![
            nav("guide").title("Guide").build(),
            nav("faq").title("FAQ").build(),
        ];
        let html = render_global_nav(&items, "/docs", None, &ctx).into_string();
        assert!(html.contains(r#"<a href="/docs/faq/" class="unstyled">FAQ</a>"#));
        assert!(html.contains(r#"<em aria-current="page">Guide</em>"#));
    }

    #[test]
    fn empty_global_nav_renders_nothing() {
        let html = render_global_nav(&[], "/", None, &RenderContext::default()).into_string();
        assert!(html.is_empty());
    }
}
