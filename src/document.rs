//! Page assembly: header, sidebar navigation, page content, footer.
//!
//! [`DocPageView`] composes the components for one page. The sidebar state is
//! passed in as data ([`SidebarState`]) and surfaces as classes on the
//! `.docpage` wrapper, so a single set of style rules covers every layout
//! mode. [`render_document`] wraps the body in a full HTML document with the
//! theme CSS and the sidebar script inlined.
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/docpage.css`: base styles (theme variables injected from config)
//! - `static/sidebar.js`: post-display sidebar behavior

use crate::config::{self, SiteConfig};
use crate::content::render_page_content;
use crate::context::RenderContext;
use crate::layout::SidebarState;
use crate::menu::render_global_nav;
use crate::types::{DocPage, NavItem};
use maud::{DOCTYPE, Markup, PreEscaped, html};

const CSS_STATIC: &str = include_str!("../static/docpage.css");
const JS: &str = include_str!("../static/sidebar.js");

/// Everything the assembly root needs for one page view.
pub struct DocPageView<'a> {
    pub page: &'a DocPage,
    pub nav: &'a [NavItem],
    /// Base the navigation paths are resolved against.
    pub root_url_path: &'a str,
    /// Logo or site title.
    pub header: Markup,
    /// Credits.
    pub footer: Option<Markup>,
}

impl<'a> DocPageView<'a> {
    /// A view using the config's root path, header and footer.
    pub fn new(page: &'a DocPage, nav: &'a [NavItem], config: &'a SiteConfig) -> Self {
        Self {
            page,
            nav,
            root_url_path: &config.root_url_path,
            header: default_header(config),
            footer: default_footer(config),
        }
    }

    /// Render the `.docpage` wrapper and everything inside it.
    pub fn render_body(
        &self,
        state: &SidebarState,
        ctx: &RenderContext<'_>,
        config: &SiteConfig,
    ) -> Markup {
        let has_nav = !self.nav.is_empty();

        html! {
            div class={ "docpage " (state.body_classes()) } {
                header.docs-header {
                    (self.header)
                    @if has_nav {
                        button.sidebar-toggle
                            type="button"
                            aria-controls="global-nav"
                            aria-expanded=(state.is_open())
                            hidden[!state.is_interactive()] {
                            (config.labels.menu_toggle)
                        }
                    }
                }

                div.docs-body role="presentation" {
                    main.docs-main id="docs-main" {
                        (render_page_content(self.page, ctx, &config.labels))
                    }
                    (render_global_nav(
                        self.nav,
                        self.root_url_path,
                        config.navigation.child_levels,
                        ctx,
                    ))
                }

                footer.docs-footer {
                    @if let Some(footer) = &self.footer {
                        (footer)
                    }
                }
            }
        }
    }
}

/// Site title linking to the root.
pub fn default_header(config: &SiteConfig) -> Markup {
    html! {
        a.site-title href=(config.root_url_path) { (config.site_title) }
    }
}

pub fn default_footer(config: &SiteConfig) -> Option<Markup> {
    config
        .footer
        .as_deref()
        .map(|text| html! { p.credits { (text) } })
}

/// `<title>` text: page title, then site title.
fn document_title(page: &DocPage, config: &SiteConfig) -> String {
    match page.title().filter(|t| !t.is_empty()) {
        Some(title) => format!("{title} · {}", config.site_title),
        None => config.site_title.clone(),
    }
}

/// Full HTML document for one page.
pub fn render_document(
    view: &DocPageView<'_>,
    state: &SidebarState,
    ctx: &RenderContext<'_>,
    config: &SiteConfig,
) -> Markup {
    let css = format!(
        "{}\n\n{}",
        config::generate_theme_css(&config.theme),
        CSS_STATIC
    );

    html! {
        (DOCTYPE)
        html lang=(config.lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (document_title(view.page, config)) }
                style { (PreEscaped(css)) }
            }
            body {
                (view.render_body(state, ctx, config))
                script { (PreEscaped(JS)) }
            }
        }
    }
}
