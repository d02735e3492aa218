//! Capabilities supplied by the caller.
//!
//! Rendering never reaches for global state. Every component receives a
//! [`RenderContext`], a small bundle of trait objects for the four things the
//! kit does not do itself:
//!
//! | Capability | Trait | Default |
//! |------------|-------|---------|
//! | Turn a content string into display markup | [`MarkupRenderer`] | [`RawHtml`] |
//! | Render a navigational element | [`LinkRenderer`] | [`PlainAnchors`] |
//! | Decide whether a path is the displayed page | [`PathMatcher`] | [`NeverCurrent`] |
//! | Render a responsive image | [`ImageRenderer`] | [`DoubleDensityImage`] |
//!
//! [`SiteLocation`](crate::location::SiteLocation) implements both
//! `LinkRenderer` and `PathMatcher` for a known current URL, and
//! [`CommonMark`](crate::markup::CommonMark) renders markdown sources.

use crate::location::Relative;
use crate::types::Dimensions;
use maud::{Markup, PreEscaped, html};

/// Produces display output from a raw content string.
///
/// The kit never parses or sanitizes markup itself.
pub trait MarkupRenderer {
    /// `inline` content is placed inside existing block elements and must not
    /// be wrapped.
    fn render(&self, content: &str, inline: bool) -> Markup;
}

/// A navigational element to be rendered by a [`LinkRenderer`].
#[derive(Debug, Clone, Copy)]
pub struct Link<'a> {
    pub to: &'a str,
    pub relative: &'a Relative,
    /// Suppress link styling (used inside the navigation menu).
    pub unstyled: bool,
    pub title: Option<&'a str>,
}

pub trait LinkRenderer {
    fn render_link(&self, link: &Link<'_>, children: Markup) -> Markup;
}

/// Answers "is this path the page currently displayed?".
pub trait PathMatcher {
    fn is_current(&self, path: &str, relative: &Relative) -> bool;
}

pub trait ImageRenderer {
    fn render_image(&self, src: &str, dimensions: Dimensions, class: Option<&str>) -> Markup;
}

/// Passes pre-rendered HTML through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawHtml;

impl MarkupRenderer for RawHtml {
    fn render(&self, content: &str, inline: bool) -> Markup {
        html! {
            @if inline {
                (PreEscaped(content))
            } @else {
                div.markup { (PreEscaped(content)) }
            }
        }
    }
}

/// Emits `<a href>` with the target exactly as given.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainAnchors;

impl LinkRenderer for PlainAnchors {
    fn render_link(&self, link: &Link<'_>, children: Markup) -> Markup {
        html! {
            a href=(link.to) class=[link.unstyled.then_some("unstyled")] title=[link.title] {
                (children)
            }
        }
    }
}

/// Nothing is ever current: every navigable item renders as a link.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCurrent;

impl PathMatcher for NeverCurrent {
    fn is_current(&self, _path: &str, _relative: &Relative) -> bool {
        false
    }
}

/// Renders a high-density asset at half its pixel size.
///
/// `src` points at the 2x asset and `dimensions` are its pixel dimensions, so
/// the element is laid out at `width / 2` by `height / 2` CSS pixels, rounded
/// to whole pixels.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleDensityImage;

impl ImageRenderer for DoubleDensityImage {
    fn render_image(&self, src: &str, dimensions: Dimensions, class: Option<&str>) -> Markup {
        let half = |edge: f64| (edge / 2.0).round().max(1.0) as u32;
        let width = half(dimensions.width);
        let height = half(dimensions.height);
        let style = format!(
            "aspect-ratio: {} / {};",
            dimensions.width, dimensions.height
        );
        html! {
            img class=[class]
                src=(src)
                srcset={ (src) " 2x" }
                width=(width)
                height=(height)
                style=(style)
                alt=""
                loading="lazy";
        }
    }
}

/// The capability bundle threaded through every render call.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub markup: &'a dyn MarkupRenderer,
    pub links: &'a dyn LinkRenderer,
    pub paths: &'a dyn PathMatcher,
    pub images: &'a dyn ImageRenderer,
}

impl Default for RenderContext<'_> {
    fn default() -> Self {
        Self {
            markup: &RawHtml,
            links: &PlainAnchors,
            paths: &NeverCurrent,
            images: &DoubleDensityImage,
        }
    }
}

impl<'a> RenderContext<'a> {
    pub fn with_markup(mut self, markup: &'a dyn MarkupRenderer) -> Self {
        self.markup = markup;
        self
    }

    pub fn with_links(mut self, links: &'a dyn LinkRenderer) -> Self {
        self.links = links;
        self
    }

    pub fn with_paths(mut self, paths: &'a dyn PathMatcher) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_images(mut self, images: &'a dyn ImageRenderer) -> Self {
        self.images = images;
        self
    }
}
