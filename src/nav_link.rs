//! A single navigation entry as link, current-page marker, or plain text.

use crate::context::{Link, RenderContext};
use crate::location::Relative;
use crate::types::NavEntry;
use maud::{Markup, html};

/// Render one entry.
///
/// - navigable and not current: a link to `item.path()`
/// - navigable and current: `<em aria-current="page">`
/// - not navigable: a plain `<span>`
///
/// A missing title renders an empty label.
pub fn render_nav_link<T: NavEntry>(
    item: &T,
    relative: &Relative,
    unstyled: bool,
    ctx: &RenderContext<'_>,
) -> Markup {
    let title = item.title().unwrap_or_default();

    if !item.is_navigable() {
        return html! { span { (title) } };
    }

    if ctx.paths.is_current(item.path(), relative) {
        return html! { em aria-current="page" { (title) } };
    }

    let link = Link {
        to: item.path(),
        relative,
        unstyled,
        title: None,
    };
    ctx.links.render_link(&link, html! { (title) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::SiteLocation;
    use crate::test_helpers::nav;

    #[test]
    fn navigable_item_renders_as_link() {
        let item = nav("guide").path("/guide").title("Guide").build();
        let html = render_nav_link(&item, &Relative::AsGiven, false, &RenderContext::default())
            .into_string();
        assert_eq!(html, r#"<a href="/guide">Guide</a>"#);
    }

    #[test]
    fn current_item_renders_as_emphasis() {
        let loc = SiteLocation::new("/a/b");
        let ctx = RenderContext::default().with_paths(&loc);
        let item = nav("b").path("/a/b").title("B").build();
        let html = render_nav_link(&item, &Relative::AsGiven, false, &ctx).into_string();
        assert_eq!(html, r#"<em aria-current="page">B</em>"#);
        assert!(!html.contains("<a"));
    }

    #[test]
    fn non_navigable_item_renders_as_text() {
        let item = nav("label").contents(false).title("Label").build();
        let html = render_nav_link(&item, &Relative::AsGiven, false, &RenderContext::default())
            .into_string();
        assert_eq!(html, "<span>Label</span>");
    }

    #[test]
    fn group_without_contents_is_navigable_through_children() {
        let item = nav("group")
            .contents(false)
            .title("Group")
            .child(nav("child").build())
            .build();
        let html = render_nav_link(&item, &Relative::AsGiven, true, &RenderContext::default())
            .into_string();
        assert_eq!(html, r#"<a href="group" class="unstyled">Group</a>"#);
    }

    #[test]
    fn missing_title_renders_empty_label() {
        let mut item = nav("untitled").contents(false).build();
        item.title = None;
        let html = render_nav_link(&item, &Relative::AsGiven, false, &RenderContext::default())
            .into_string();
        assert_eq!(html, "<span></span>");
    }

    #[test]
    fn current_check_uses_relative_hint() {
        let loc = SiteLocation::new("/docs/guide");
        let ctx = RenderContext::default().with_paths(&loc).with_links(&loc);
        let item = nav("guide").path("guide").title("Guide").build();

        let rooted = render_nav_link(&item, &Relative::Root("/docs".into()), false, &ctx);
        assert!(rooted.into_string().starts_with("<em"));

        let elsewhere = render_nav_link(&item, &Relative::Root("/other".into()), false, &ctx);
        assert_eq!(elsewhere.into_string(), r#"<a href="/other/guide/">Guide</a>"#);
    }

    #[test]
    fn title_is_escaped() {
        let item = nav("x").title("<b>x</b>").contents(false).build();
        let html = render_nav_link(&item, &Relative::AsGiven, false, &RenderContext::default())
            .into_string();
        assert_eq!(html, "<span>&lt;b&gt;x&lt;/b&gt;</span>");
    }
}
