//! Report rendering
//!
//! One line per result-map entry, key-sorted: `"[url] term" count`.

use crate::crawler::SeedReport;
use std::fmt::Write;

/// Renders a seed report as output lines
///
/// The result map is ordered by key, so rendering is deterministic and
/// reproducible across runs.
pub fn render_report(report: &SeedReport) -> String {
    let mut out = String::new();

    for (key, count) in &report.results {
        // Keys are pre-formatted as "[url] term"; a single space separates
        // the key from the count.
        let _ = writeln!(out, "{} {}", key, count);
    }

    out
}
