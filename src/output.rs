//! CLI output formatting for the `check` and `build` commands.
//!
//! Every entity (nav entry, page) leads with its semantic identity: a
//! positional index and its title. URL paths and output files follow as
//! secondary context after an arrow.
//!
//! ## Check Output
//!
//! ```text
//! Navigation
//! 001 Guide → guide
//!     001 Install → guide/install
//! 002 Topics (label)
//!
//! Pages
//! 001 Guide → /guide
//!     Sections: Intro, Usage
//!     Cards: 2 (1 hidden)
//!
//! 3 nav entries, 1 page
//! ```
//!
//! ## Build Output
//!
//! ```text
//! Pages
//! 001 Guide → guide/index.html
//!
//! Generated 1 page, copied 2 assets
//! ```
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::ordering::{displayable_children, item_is_non_empty, sort_by_importance};
use crate::site::{BuildReport, Content};
use crate::types::{NavEntry, NavItem};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn counted(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

/// One nav entry line. Entries without a page of their own are marked
/// `(label)`; untitled entries show their id in parentheses.
///
/// ```text
/// 001 Guide → guide
/// 002 Topics (label)
/// 003 (faq) → faq
/// ```
fn nav_line(index: usize, item: &NavItem) -> String {
    let title = match item.title() {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => format!("({})", item.id()),
    };
    if item.is_navigable() {
        format!("{} {} → {}", format_index(index), title, item.path())
    } else {
        format!("{} {} (label)", format_index(index), title)
    }
}

/// Walk the tree in display order: the top level sorted, deeper levels
/// filtered and sorted like the sidebar menu.
fn walk_nav(items: Vec<&NavItem>, depth: usize, lines: &mut Vec<String>) -> usize {
    let mut total = 0;
    for (i, item) in items.into_iter().enumerate() {
        lines.push(format!("{}{}", indent(depth), nav_line(i + 1, item)));
        total += 1 + walk_nav(displayable_children(item), depth + 1, lines);
    }
    total
}

/// Format `check` output: the navigation tree and the pages found.
pub fn format_check_output(content: &Content) -> Vec<String> {
    let mut lines = vec!["Navigation".to_string()];
    let nav_count = walk_nav(sort_by_importance(&content.nav), 0, &mut lines);

    lines.push(String::new());
    lines.push("Pages".to_string());
    for (i, source) in content.pages.iter().enumerate() {
        let title = source.page.title().filter(|t| !t.is_empty()).unwrap_or("(untitled)");
        lines.push(format!(
            "{} {} → {}",
            format_index(i + 1),
            title,
            source.url_path
        ));

        let sections: Vec<&str> = source
            .page
            .data
            .iter()
            .flat_map(|d| d.sections.iter().map(|s| s.title.as_str()))
            .collect();
        if !sections.is_empty() {
            lines.push(format!("{}Sections: {}", indent(1), sections.join(", ")));
        }

        let items = &source.page.items;
        if !items.is_empty() {
            let hidden = items.iter().filter(|item| !item_is_non_empty(item)).count();
            if hidden > 0 {
                lines.push(format!("{}Cards: {} ({} hidden)", indent(1), items.len(), hidden));
            } else {
                lines.push(format!("{}Cards: {}", indent(1), items.len()));
            }
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "{}, {}",
        counted(nav_count, "nav entry", "nav entries"),
        counted(content.pages.len(), "page", "pages")
    ));
    lines
}

pub fn print_check_output(content: &Content) {
    for line in format_check_output(content) {
        println!("{line}");
    }
}

/// Format `build` output: one line per generated page plus a summary.
pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];
    for (i, page) in report.pages.iter().enumerate() {
        let title = if page.title.is_empty() {
            "(untitled)"
        } else {
            page.title.as_str()
        };
        lines.push(format!(
            "{} {} → {}",
            format_index(i + 1),
            title,
            page.output.display()
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "Generated {}, copied {}",
        counted(report.pages.len(), "page", "pages"),
        counted(report.assets_copied, "asset", "assets")
    ));
    lines
}

pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{line}");
    }
}
