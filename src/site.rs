//! Static build over a content directory.
//!
//! ## Content Layout
//!
//! ```text
//! content/
//! ├── config.toml            # Optional, cascades to subdirectories
//! ├── nav.json               # Navigation tree: array of NavItem
//! ├── page.json              # Root page (DocPage)
//! ├── guide/
//! │   ├── page.json          # → dist/guide/index.html
//! │   ├── cover.png          # Copied as-is (preview card covers)
//! │   └── install/
//! │       └── page.json      # → dist/guide/install/index.html
//! └── reference/
//!     ├── config.toml        # Overrides root config for this subtree
//!     └── page.json
//! ```
//!
//! Every `page.json` is rendered with the configuration cascaded from the
//! content root down to its directory, and with its own URL path as the
//! current location. Any other file except `nav.json` and `config.toml` is
//! copied to the same relative location in the output.

use crate::config::{self, ConfigError, MarkupFormat, SiteConfig};
use crate::context::{MarkupRenderer, RawHtml, RenderContext};
use crate::document::{DocPageView, render_document};
use crate::layout::SidebarState;
use crate::location::{SiteLocation, normalize_path};
use crate::markup::CommonMark;
use crate::types::{DocPage, NavItem};
use maud::Markup;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

pub const NAV_FILE: &str = "nav.json";
pub const PAGE_FILE: &str = "page.json";
const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Config error in {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Navigation file not found: {0}")]
    MissingNav(PathBuf),
    #[error("Page file not found: {0}")]
    MissingPage(PathBuf),
}

/// A page found in the content directory.
#[derive(Debug)]
pub struct SourcePage {
    /// Directory relative to the content root (empty for the root page).
    pub rel_dir: PathBuf,
    /// URL path the page is served at.
    pub url_path: String,
    pub page: DocPage,
    /// Configuration cascaded down to this page's directory.
    pub config: SiteConfig,
}

/// Everything loaded from a content directory.
#[derive(Debug)]
pub struct Content {
    pub root: PathBuf,
    pub config: SiteConfig,
    pub nav: Vec<NavItem>,
    pub pages: Vec<SourcePage>,
    /// Files copied verbatim, relative to the content root.
    pub assets: Vec<PathBuf>,
}

/// One generated HTML file.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPage {
    pub title: String,
    pub url_path: String,
    /// Output file relative to the output directory.
    pub output: PathBuf,
}

#[derive(Debug, Default)]
pub struct BuildReport {
    pub pages: Vec<GeneratedPage>,
    pub assets_copied: usize,
}

/// Read and deserialize a JSON file, naming the file in errors.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, SiteError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| SiteError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn url_path_for(root_url_path: &str, rel_dir: &Path) -> String {
    let rel: Vec<String> = rel_dir
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    normalize_path(&format!("{}/{}", root_url_path, rel.join("/")))
}

/// Raw config values merged from the content root down to `dir`, cached per
/// directory. Walk order guarantees a parent is resolved before its children.
fn cascaded_value(
    cache: &mut HashMap<PathBuf, toml::Value>,
    root_value: &toml::Value,
    root: &Path,
    dir: &Path,
) -> Result<toml::Value, SiteError> {
    if let Some(value) = cache.get(dir) {
        return Ok(value.clone());
    }
    let parent_value = match dir.parent() {
        Some(parent) if dir != root && parent.starts_with(root) => {
            cascaded_value(cache, root_value, root, parent)?
        }
        _ => root_value.clone(),
    };
    let value = if dir == root {
        root_value.clone()
    } else {
        let overlay = config::load_raw_config(dir).map_err(|source| SiteError::Config {
            path: dir.join(CONFIG_FILE),
            source,
        })?;
        match overlay {
            Some(overlay) if overlay.get("root_url_path").is_some() => {
                return Err(SiteError::Config {
                    path: dir.join(CONFIG_FILE),
                    source: ConfigError::Validation(
                        "root_url_path can only be set in the root config.toml".into(),
                    ),
                });
            }
            Some(overlay) => config::merge_toml(parent_value, overlay),
            None => parent_value,
        }
    };
    cache.insert(dir.to_path_buf(), value.clone());
    Ok(value)
}

/// Load navigation, pages and configuration from `root`.
pub fn load_content(root: &Path) -> Result<Content, SiteError> {
    let config_error = |source| SiteError::Config {
        path: root.join(CONFIG_FILE),
        source,
    };
    let root_overlay = config::load_raw_config(root).map_err(config_error)?;
    let root_value = match root_overlay {
        Some(overlay) => config::merge_toml(config::stock_defaults_value(), overlay),
        None => config::stock_defaults_value(),
    };
    let site_config =
        config::resolve_config(root_value.clone(), None).map_err(config_error)?;

    let nav_path = root.join(NAV_FILE);
    if !nav_path.is_file() {
        return Err(SiteError::MissingNav(nav_path));
    }
    let nav: Vec<NavItem> = read_json(&nav_path)?;

    let mut cache = HashMap::new();
    let mut pages = Vec::new();
    let mut assets = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let dir = path.parent().unwrap_or(root);
        let rel_dir = dir.strip_prefix(root).unwrap_or(Path::new("")).to_path_buf();
        let file_name = entry.file_name().to_string_lossy();

        match &*file_name {
            PAGE_FILE => {
                let value = cascaded_value(&mut cache, &root_value, root, dir)?;
                let page_config =
                    config::resolve_config(value, None).map_err(|source| SiteError::Config {
                        path: dir.join(CONFIG_FILE),
                        source,
                    })?;
                let page: DocPage = read_json(path)?;
                let url_path = url_path_for(&site_config.root_url_path, &rel_dir);
                tracing::debug!(url = %url_path, source = %path.display(), "Loaded page");
                pages.push(SourcePage {
                    rel_dir,
                    url_path,
                    page,
                    config: page_config,
                });
            }
            CONFIG_FILE => {}
            NAV_FILE if dir == root => {}
            _ => {
                if let Ok(rel) = path.strip_prefix(root) {
                    assets.push(rel.to_path_buf());
                }
            }
        }
    }

    if pages.is_empty() {
        return Err(SiteError::MissingPage(root.join(PAGE_FILE)));
    }

    Ok(Content {
        root: root.to_path_buf(),
        config: site_config,
        nav,
        pages,
        assets,
    })
}

/// Render one page as a full HTML document.
///
/// Links and the current-page check resolve against `current_url`; content
/// strings are interpreted per `config.markup.format`.
pub fn render_page(
    page: &DocPage,
    nav: &[NavItem],
    config: &SiteConfig,
    current_url: &str,
    state: &SidebarState,
) -> Markup {
    let location = SiteLocation::new(current_url);
    let markup: &dyn MarkupRenderer = match config.markup.format {
        MarkupFormat::Html => &RawHtml,
        MarkupFormat::Markdown => &CommonMark,
    };
    let ctx = RenderContext::default()
        .with_markup(markup)
        .with_links(&location)
        .with_paths(&location);
    let view = DocPageView::new(page, nav, config);
    render_document(&view, state, &ctx, config)
}

/// Render every page of `content` into `output_dir` and copy assets.
pub fn build(content: &Content, output_dir: &Path) -> Result<BuildReport, SiteError> {
    fs::create_dir_all(output_dir)?;
    let mut report = BuildReport::default();

    for source in &content.pages {
        let html = render_page(
            &source.page,
            &content.nav,
            &source.config,
            &source.url_path,
            &SidebarState::new(),
        );
        let rel_output = source.rel_dir.join("index.html");
        let out_path = output_dir.join(&rel_output);
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&out_path, html.into_string())?;
        tracing::info!(url = %source.url_path, output = %out_path.display(), "Generated page");

        report.pages.push(GeneratedPage {
            title: source.page.title().unwrap_or_default().to_string(),
            url_path: source.url_path.clone(),
            output: rel_output,
        });
    }

    for asset in &content.assets {
        let dst = output_dir.join(asset);
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(content.root.join(asset), &dst)?;
        report.assets_copied += 1;
    }

    Ok(report)
}
