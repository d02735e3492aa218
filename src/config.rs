//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml` files. Configuration
//! is hierarchical: stock defaults are overridden by user config files at any
//! level of the content tree (root → section → page).
//!
//! ## Config File Location
//!
//! ```text
//! content/
//! ├── config.toml              # Root config (overrides stock defaults)
//! ├── nav.json
//! ├── page.json
//! └── reference/
//!     ├── config.toml          # Section config (overrides root)
//!     ├── page.json
//!     └── api/
//!         └── page.json        # Rendered with root + reference config
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! site_title = "Documentation"
//! lang = "en"
//! root_url_path = "/"          # Base for sidebar navigation links
//! # footer = "© Example Corp"  # Optional footer text
//!
//! [navigation]
//! # child_levels = 2           # Menu depth below top-level items (omit = unlimited)
//!
//! [labels]
//! toc_heading = "In this article"
//! menu_toggle = "Menu"
//!
//! [markup]
//! format = "html"              # "html" (pre-rendered) or "markdown"
//!
//! [theme]
//! sidebar_width = "16rem"
//! header_height = "4rem"
//! sidebar_background = "whitesmoke"
//! sidebar_border = "rgb(224, 224, 224) 1px solid"
//! content_max_width = "50rem"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! [labels]
//! toc_heading = "On this page"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Shown in the header and appended to every `<title>`.
    pub site_title: String,
    /// Document language (`<html lang>`).
    pub lang: String,
    /// URL path the navigation tree's paths are relative to.
    pub root_url_path: String,
    /// Optional footer text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    /// Sidebar menu settings.
    pub navigation: NavigationConfig,
    /// User-visible fixed strings.
    pub labels: LabelsConfig,
    /// How page content strings are interpreted.
    pub markup: MarkupConfig,
    /// Layout sizes and sidebar colors.
    pub theme: ThemeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: "Documentation".to_string(),
            lang: "en".to_string(),
            root_url_path: "/".to_string(),
            footer: None,
            navigation: NavigationConfig::default(),
            labels: LabelsConfig::default(),
            markup: MarkupConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lang.trim().is_empty() {
            return Err(ConfigError::Validation("lang must not be empty".into()));
        }
        if !self.root_url_path.starts_with('/') {
            return Err(ConfigError::Validation(
                "root_url_path must start with '/'".into(),
            ));
        }
        for (key, value) in self.theme.entries() {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "theme.{key} must not be empty"
                )));
            }
        }
        Ok(())
    }
}

/// Sidebar menu settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavigationConfig {
    /// Levels rendered below each top-level menu item.
    /// When absent, the whole tree is rendered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_levels: Option<u32>,
}

/// User-visible fixed strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelsConfig {
    /// Heading of the in-page section list.
    pub toc_heading: String,
    /// Accessible label of the sidebar toggle.
    pub menu_toggle: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            toc_heading: "In this article".to_string(),
            menu_toggle: "Menu".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupFormat {
    /// Content strings are pre-rendered HTML.
    #[default]
    Html,
    /// Content strings are markdown, rendered with pulldown-cmark.
    Markdown,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkupConfig {
    pub format: MarkupFormat,
}

/// Layout sizes and sidebar colors, emitted as CSS custom properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub sidebar_width: String,
    pub header_height: String,
    pub sidebar_background: String,
    pub sidebar_border: String,
    /// Maximum width of the main column in the wide layout.
    pub content_max_width: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            sidebar_width: "16rem".to_string(),
            header_height: "4rem".to_string(),
            sidebar_background: "whitesmoke".to_string(),
            sidebar_border: "rgb(224, 224, 224) 1px solid".to_string(),
            content_max_width: "50rem".to_string(),
        }
    }
}

impl ThemeConfig {
    fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("sidebar_width", self.sidebar_width.as_str()),
            ("header_height", self.header_height.as_str()),
            ("sidebar_background", self.sidebar_background.as_str()),
            ("sidebar_border", self.sidebar_border.as_str()),
            ("content_max_width", self.content_max_width.as_str()),
        ]
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# docpage Configuration
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Config files can be placed at any level of the content tree:
#   content/config.toml               -> root (overrides stock defaults)
#   content/reference/config.toml     -> section (overrides root)
#   content/reference/api/config.toml -> page (overrides section)
#
# Each level only needs the keys it wants to override.
# Unknown keys will cause an error.

# Shown in the header and appended to every page <title>.
site_title = "Documentation"

# Document language for <html lang="...">.
lang = "en"

# URL path that navigation paths in nav.json are relative to.
# Only valid in the root config.toml.
root_url_path = "/"

# Optional footer text.
# footer = "Built with docpage"

# ---------------------------------------------------------------------------
# Sidebar navigation
# ---------------------------------------------------------------------------
[navigation]
# Levels rendered below each top-level item. Omit for the whole tree.
# child_levels = 2

# ---------------------------------------------------------------------------
# Labels
# ---------------------------------------------------------------------------
[labels]
# Heading above the in-page section list.
toc_heading = "In this article"

# Accessible label of the sidebar toggle button.
menu_toggle = "Menu"

# ---------------------------------------------------------------------------
# Content markup
# ---------------------------------------------------------------------------
[markup]
# "html": summary/contents strings are pre-rendered HTML, inserted as-is.
# "markdown": they are markdown and rendered to HTML.
format = "html"

# ---------------------------------------------------------------------------
# Theme / layout (CSS values)
# ---------------------------------------------------------------------------
[theme]
sidebar_width = "16rem"
header_height = "4rem"
sidebar_background = "whitesmoke"
sidebar_border = "rgb(224, 224, 224) 1px solid"
content_max_width = "50rem"
"##
}

/// Generate CSS custom properties from theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --sidebar-width: {sidebar_width};
    --header-height: {header_height};
    --sidebar-background: {sidebar_background};
    --sidebar-border: {sidebar_border};
    --content-max-width: {content_max_width};
}}"#,
        sidebar_width = theme.sidebar_width,
        header_height = theme.header_height,
        sidebar_background = theme.sidebar_background,
        sidebar_border = theme.sidebar_border,
        content_max_width = theme.content_max_width,
    )
}
