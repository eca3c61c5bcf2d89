use std::{path::Path, time::Duration};

use console::style;
use ds_cache::{bytes::ByteUnitSystem, CacheStats, CacheStatus, Usage};

pub fn make_report(
    label: &str,
    dir: &Path,
    usage: &Usage,
    bus: &ByteUnitSystem,
    took: Duration,
) -> String {
    let mut report = String::new();
    let mut max_len = 0;
    let mut push = |s: &str| {
        let width = console::measure_text_width(s);
        if width > max_len {
            max_len = width;
        }
        report.push_str(s);
        report.push('\n');
    };

    push(&format!(
        "Disk space usage for '{}' ({}): {}",
        dir.display(),
        label,
        bus.format(usage.size_bytes)
    ));
    push(&format!("Resolved Path: {}", usage.path.display()));
    push(&format!("Cache: {}", status_label(usage.status)));
    push(&format!("Time elapsed for {}: {:.2?}", label, took));

    let sep = "=".repeat(max_len);
    format!("{}\n{}{}\n", sep, report, sep)
}

pub fn print_report(
    label: &str,
    dir: &Path,
    usage: &Usage,
    bus: &ByteUnitSystem,
    took: Duration,
) {
    println!("{}", make_report(label, dir, usage, bus, took));
}

pub fn make_stats_line(stats: &CacheStats) -> String {
    format!(
        "Walks: {} (hits: {}, misses: {}, stale: {}, failed: {})",
        stats.walks, stats.hits, stats.misses, stats.stale, stats.failed_walks
    )
}

fn status_label(status: CacheStatus) -> String {
    match status {
        CacheStatus::Hit => style("hit (cached size reused)").green().to_string(),
        CacheStatus::Miss => style("miss (directory walked)").yellow().to_string(),
        CacheStatus::Stale => style("stale (directory changed, walked again)")
            .yellow()
            .to_string(),
    }
}
