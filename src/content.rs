//! Page body: breadcrumbs, title, lead, in-page ToC, contents and preview
//! cards for child pages.

use crate::config::LabelsConfig;
use crate::context::{Link, RenderContext};
use crate::location::Relative;
use crate::ordering::previewable;
use crate::page_block::render_page_block;
use crate::types::{Breadcrumb, DocPage, Section};
use maud::{Markup, html};

/// Relative "up" target for crumb `idx` of `total`: the first crumb climbs
/// `total` levels, the last one a single level.
fn crumb_target(idx: usize, total: usize) -> String {
    vec![".."; total - idx].join("/")
}

/// Render the ancestor trail. Empty input renders nothing.
pub fn render_breadcrumbs(crumbs: &[Breadcrumb], ctx: &RenderContext<'_>) -> Markup {
    html! {
        @if !crumbs.is_empty() {
            ul.breadcrumbs {
                @for (idx, crumb) in crumbs.iter().enumerate() {
                    @let to = crumb_target(idx, crumbs.len());
                    @let link = Link {
                        to: &to,
                        relative: &Relative::AsGiven,
                        unstyled: true,
                        title: None,
                    };
                    li.crumb { (ctx.links.render_link(&link, html! { (crumb.title) })) }
                }
            }
        }
    }
}

/// In-page table of contents. Sections keep their document order.
pub fn render_section_toc(sections: &[Section], heading: &str) -> Markup {
    html! {
        @if !sections.is_empty() {
            nav.page-toc {
                h3.header { (heading) }
                ul.toc-items.page-toc-items {
                    @for section in sections {
                        li { a href={ "#" (section.id) } { (section.title) } }
                    }
                }
            }
        }
    }
}

/// Render everything inside the main column for `page`.
///
/// Order: breadcrumbs, title, summary (inline markup) or excerpt, section
/// ToC, body contents, preview cards for non-empty child items.
pub fn render_page_content(
    page: &DocPage,
    ctx: &RenderContext<'_>,
    labels: &LabelsConfig,
) -> Markup {
    let data = page.data.as_ref();
    let blocks = previewable(&page.items);
    let summary = data
        .and_then(|d| d.summary.as_deref())
        .filter(|s| !s.is_empty());

    html! {
        @if let Some(data) = data {
            (render_breadcrumbs(&data.breadcrumbs, ctx))
        }

        h2.page-title { (page.title().unwrap_or_default()) }

        div.lead {
            @if let Some(summary) = summary {
                (ctx.markup.render(summary, true))
            } @else {
                p { (data.and_then(|d| d.excerpt.as_deref()).unwrap_or_default()) }
            }
        }

        @if let Some(data) = data {
            (render_section_toc(&data.sections, &labels.toc_heading))
        }

        (ctx.markup.render(data.and_then(|d| d.contents.as_deref()).unwrap_or_default(), false))

        @if !blocks.is_empty() {
            section.page-blocks {
                @for item in &blocks {
                    (render_page_block(item, ctx))
                }
            }
        }
    }
}
