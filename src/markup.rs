//! Markdown sources rendered with pulldown-cmark.
//!
//! Used when page data carries markdown instead of pre-rendered HTML
//! (`[markup] format = "markdown"`). Output is inserted unescaped, the same
//! trust level as [`RawHtml`](crate::context::RawHtml).

use crate::context::MarkupRenderer;
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Options, Parser, html as md_html};

#[derive(Debug, Clone, Copy, Default)]
pub struct CommonMark;

impl CommonMark {
    fn to_html(content: &str) -> String {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_HEADING_ATTRIBUTES;
        let parser = Parser::new_ext(content, options);
        let mut out = String::new();
        md_html::push_html(&mut out, parser);
        out
    }
}

/// Drop the `<p>` wrapper pulldown-cmark puts around a single paragraph so the
/// result can sit inside an existing block.
fn unwrap_single_paragraph(html: &str) -> &str {
    let trimmed = html.trim_end();
    match trimmed
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
    {
        Some(inner) if !inner.contains("<p>") => inner,
        _ => trimmed,
    }
}

impl MarkupRenderer for CommonMark {
    fn render(&self, content: &str, inline: bool) -> Markup {
        let rendered = Self::to_html(content);
        html! {
            @if inline {
                (PreEscaped(unwrap_single_paragraph(&rendered)))
            } @else {
                div.markup { (PreEscaped(rendered)) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_markdown_is_wrapped() {
        let html = CommonMark
            .render("# Intro {#intro}\n\nThis is **bold**.", false)
            .into_string();
        assert!(html.starts_with(r#"<div class="markup">"#));
        assert!(html.contains(r#"<h1 id="intro">Intro</h1>"#));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn inline_single_paragraph_loses_p_tag() {
        let html = CommonMark.render("Quick *start*", true).into_string();
        assert_eq!(html, "Quick <em>start</em>");
    }

    #[test]
    fn inline_multiple_paragraphs_are_kept() {
        let html = CommonMark.render("One\n\nTwo", true).into_string();
        assert_eq!(html, "<p>One</p>\n<p>Two</p>");
    }
}
