//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Every page is shown by its semantic identity first (positional index and
//! label) with the URL path and output file as secondary context. The same
//! header shape is used by `routes`, `check` and `build` so a page looks the
//! same wherever it appears.
//!
//! # Output Format
//!
//! ## Routes
//!
//! ```text
//! 001 Home → /
//!     File: index.html
//! 002 About → /about
//!     File: about/index.html
//! ...
//! --- Not Found → (any other path)
//!     File: 404.html
//! ```
//!
//! ## Build
//!
//! ```text
//! 001 Home → index.html (14.2 KB, written)
//! 002 About → about/index.html (12.9 KB, unchanged)
//! ...
//!
//! Generated 5 pages: 1 written, 4 unchanged
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::generate::{GenerateReport, PageStatus, RenderedPage};
use crate::route::{NOT_FOUND_FILE, Route};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Human-readable byte size with one decimal for kilobytes.
fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    }
}

fn status_label(status: PageStatus) -> &'static str {
    match status {
        PageStatus::Written => "written",
        PageStatus::Unchanged => "unchanged",
    }
}

// ============================================================================
// Routes
// ============================================================================

pub fn format_routes() -> Vec<String> {
    let mut lines = Vec::new();
    for (idx, route) in Route::ALL.iter().enumerate() {
        lines.push(format!(
            "{} {} → {}",
            format_index(idx + 1),
            route.label(),
            route.path()
        ));
        lines.push(format!("{}File: {}", indent(1), route.output_file()));
    }
    lines.push("--- Not Found → (any other path)".to_string());
    lines.push(format!("{}File: {}", indent(1), NOT_FOUND_FILE));
    lines
}

pub fn print_routes() {
    for line in format_routes() {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

/// One line per rendered page plus a totals line.
pub fn format_check_output(pages: &[RenderedPage]) -> Vec<String> {
    let mut lines: Vec<String> = pages
        .iter()
        .enumerate()
        .map(|(idx, page)| {
            format!(
                "{} {} → {} ({})",
                format_index(idx + 1),
                page.label(),
                page.location.path(),
                format_size(page.html.len())
            )
        })
        .collect();
    lines.push(String::new());
    lines.push(format!("Rendered {} pages", pages.len()));
    lines
}

pub fn print_check_output(pages: &[RenderedPage]) {
    for line in format_check_output(pages) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .pages
        .iter()
        .enumerate()
        .map(|(idx, page)| {
            format!(
                "{} {} → {} ({}, {})",
                format_index(idx + 1),
                page.label,
                page.file,
                format_size(page.bytes),
                status_label(page.status)
            )
        })
        .collect();
    lines.push(String::new());
    lines.push(format!(
        "Generated {} pages: {} written, {} unchanged",
        report.pages.len(),
        report.written(),
        report.unchanged()
    ));
    lines
}

pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}
