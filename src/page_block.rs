//! Child-page preview cards.
//!
//! A card shows an optional blurred cover image, the child's title, its
//! summary or excerpt, and a compact horizontal list of the child's own
//! non-empty children. The list is one level deep; cards never recurse.

use crate::context::{Link, RenderContext};
use crate::location::Relative;
use crate::nav_link::render_nav_link;
use crate::ordering::previewable;
use crate::types::{MediaItem, NavEntry, PageItem};
use maud::{Markup, html};

/// The first media entry, when it has known dimensions.
fn cover_media(item: &PageItem) -> Option<&MediaItem> {
    item.media
        .first()
        .filter(|m| m.dimensions().is_some_and(|d| d.is_known()))
}

/// Cover assets live next to the child page: `./<path>/<filename>`.
fn cover_src(item: &PageItem, media: &MediaItem) -> String {
    format!("./{}/{}", item.path.trim_matches('/'), media.filename())
}

fn render_cover(item: &PageItem, media: &MediaItem, ctx: &RenderContext<'_>) -> Markup {
    html! {
        @if let Some(dimensions) = media.dimensions() {
            div.cover-overlay role="presentation" {}
            (ctx.images.render_image(&cover_src(item, media), dimensions, Some("cover-image")))
        }
    }
}

/// Render one child page as a preview card.
pub fn render_page_block(item: &PageItem, ctx: &RenderContext<'_>) -> Markup {
    let children = previewable(&item.items);
    let has_toc = !children.is_empty();
    let title = item.title.as_deref().unwrap_or_default();
    let title_link = Link {
        to: &item.path,
        relative: &Relative::AsGiven,
        unstyled: false,
        title: None,
    };

    html! {
        article.page-block.has-toc[has_toc] {
            @if let Some(media) = cover_media(item) {
                (render_cover(item, media, ctx))
            }

            h3.title id=(item.id) {
                @if item.is_navigable() {
                    (ctx.links.render_link(&title_link, html! { (title) }))
                } @else {
                    (title)
                }
            }

            div.excerpt {
                @if let Some(summary) = item.summary.as_deref().filter(|s| !s.is_empty()) {
                    (ctx.markup.render(summary, true))
                } @else {
                    p { (item.excerpt.as_deref().unwrap_or_default()) }
                }
            }

            @if has_toc {
                ul.toc-items.block-toc {
                    @for child in &children {
                        li { (render_nav_link(*child, &Relative::CurrentPage, false, ctx)) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{count, page_item, page_item_with_excerpt, position};
    use crate::types::Dimensions;

    fn render(item: &PageItem) -> String {
        render_page_block(item, &RenderContext::default()).into_string()
    }

    fn with_cover(mut item: PageItem, dimensions: Option<Dimensions>) -> PageItem {
        item.media = vec![MediaItem::Image {
            filename: "cover.png".to_string(),
            dimensions,
        }];
        item
    }

    #[test]
    fn card_shows_linked_title_and_excerpt() {
        let html = render(&page_item_with_excerpt("guide", "Getting started"));
        assert!(html.starts_with(r#"<article class="page-block">"#));
        assert!(html.contains(r#"<h3 class="title" id="guide"><a href="guide">guide</a></h3>"#));
        assert!(html.contains(r#"<div class="excerpt"><p>Getting started</p></div>"#));
        assert!(!html.contains("block-toc"));
    }

    #[test]
    fn summary_wins_over_excerpt() {
        let mut item = page_item_with_excerpt("guide", "plain");
        item.summary = Some("<em>rich</em>".to_string());
        let html = render(&item);
        assert!(html.contains(r#"<div class="excerpt"><em>rich</em></div>"#));
        assert!(!html.contains("plain"));
    }

    #[test]
    fn non_navigable_title_is_text() {
        let mut item = page_item_with_excerpt("note", "x");
        item.has_contents = false;
        let html = render(&item);
        assert!(html.contains(r#"<h3 class="title" id="note">note</h3>"#));
    }

    #[test]
    fn cover_uses_first_media_with_dimensions() {
        let item = with_cover(
            page_item("guide"),
            Some(Dimensions {
                width: 400.0,
                height: 200.0,
            }),
        );
        let html = render(&item);
        assert!(html.contains(r#"<div class="cover-overlay" role="presentation"></div>"#));
        assert!(html.contains(r#"src="./guide/cover.png""#));
        assert!(position(&html, "cover-overlay") < position(&html, "<h3"));
    }

    #[test]
    fn cover_renders_from_fractional_dimensions() {
        let item: PageItem = serde_json::from_str(
            r#"{ "id": "guide", "hasContents": true, "path": "guide", "title": "Guide",
                 "media": [{ "type": "image", "filename": "cover.png",
                             "dimensions": { "width": 1280.0, "height": 720.5 } }] }"#,
        )
        .unwrap();
        let html = render(&item);
        assert!(html.contains("cover-overlay"));
        assert!(html.contains(r#"width="640""#));
        assert!(html.contains(r#"height="360""#));
    }

    #[test]
    fn cover_without_dimensions_is_skipped() {
        let html = render(&with_cover(page_item("guide"), None));
        assert!(!html.contains("<img"));
        assert!(!html.contains("cover-overlay"));
    }

    #[test]
    fn mini_toc_lists_non_empty_children_by_importance() {
        let mut item = page_item_with_excerpt("guide", "Guide");
        let mut first = page_item_with_excerpt("first", "1");
        first.importance = Some(5.0);
        item.items = vec![
            page_item_with_excerpt("second", "2"),
            page_item("empty"),
            first,
        ];
        let html = render(&item);
        assert!(html.contains(r#"<article class="page-block has-toc">"#));
        assert_eq!(count(&html, "<li>"), 2);
        assert!(!html.contains(">empty<"));
        assert!(position(&html, ">first<") < position(&html, ">second<"));
    }

    #[test]
    fn mini_toc_does_not_recurse() {
        let mut grandchild_parent = page_item_with_excerpt("child", "c");
        grandchild_parent.items = vec![page_item_with_excerpt("grandchild", "g")];
        let mut item = page_item_with_excerpt("guide", "Guide");
        item.items = vec![grandchild_parent];
        let html = render(&item);
        assert!(html.contains(">child<"));
        assert!(!html.contains("grandchild"));
    }
}
