//! Crawl report rendering
//!
//! Presentation of the final visit counts, separated from the engine so the
//! core never prints anything itself.

use crate::crawler::VisitCounts;

/// Returns the visit counts as rows sorted for presentation.
///
/// Highest counts first; ties break alphabetically so output is stable
/// across runs.
pub fn sorted_counts(pages: &VisitCounts) -> Vec<(&str, u64)> {
    let mut rows: Vec<(&str, u64)> = pages.iter().map(|(url, n)| (url.as_str(), *n)).collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    rows
}

/// Prints the report for a finished crawl
pub fn print_report(pages: &VisitCounts, base_url: &str) {
    println!("=============================");
    println!("  REPORT for {}", base_url);
    println!("=============================");

    for (url, count) in sorted_counts(pages) {
        println!("Found {} internal links to {}", count, url);
    }
}
