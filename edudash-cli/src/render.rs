/// Plain-text rendering for the terminal views
///
/// The dashboard's charts become their terminal stand-ins here: count
/// tables with a percentage column and an ASCII bar, a day-by-day trend
/// table, and a ranked author list. Everything returns a `String` so the
/// command layer decides where output goes.
use edudash_core::stats::{format_label, AuthorStats, CategoryCount, TrendPoint};
use std::fmt::Write as _;

const BAR_WIDTH: usize = 30;

/// An ASCII bar proportional to `value / max`
///
/// `max` of zero renders an empty bar rather than dividing by zero.
fn bar(value: u64, max: u64) -> String {
    if max == 0 {
        return String::new();
    }
    let filled = (value as usize * BAR_WIDTH) / max as usize;
    "#".repeat(filled)
}

/// Renders a grouped count table with percentage and bar columns
pub fn count_table(title: &str, rows: &[CategoryCount]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title);

    if rows.is_empty() {
        let _ = writeln!(out, "  (no data)");
        return out;
    }

    let total: u64 = rows.iter().map(|r| r.count).sum();
    let max = rows.iter().map(|r| r.count).max().unwrap_or(0);
    let width = rows
        .iter()
        .map(|r| format_label(Some(r.label.as_str())).len())
        .max()
        .unwrap_or(0);

    for row in rows {
        let label = format_label(Some(row.label.as_str()));
        let _ = writeln!(
            out,
            "  {:<width$}  {:>6}  {:>5.1}%  {}",
            label,
            row.count,
            row.percent_of(total),
            bar(row.count, max),
            width = width
        );
    }
    out
}

/// Renders the trailing trend as a day-by-day table
pub fn trend_table(points: &[TrendPoint]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Activity, last {} days", points.len());
    let _ = writeln!(out, "  {:<12} {:>6} {:>9}", "Day", "Posts", "Comments");
    for point in points {
        let _ = writeln!(
            out,
            "  {:<3} {:<8} {:>6} {:>9}",
            point.label,
            point.date.format("%m-%d"),
            point.posts,
            point.comments
        );
    }
    out
}

/// Renders the top-author ranking
pub fn author_list(authors: &[AuthorStats]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Top authors");
    if authors.is_empty() {
        let _ = writeln!(out, "  (no data)");
        return out;
    }
    for (rank, author) in authors.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {}: {} posts, {} likes",
            rank + 1,
            author.username,
            author.post_count,
            author.like_count
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_scales_to_max() {
        assert_eq!(bar(10, 10).len(), BAR_WIDTH);
        assert_eq!(bar(5, 10).len(), BAR_WIDTH / 2);
        assert_eq!(bar(0, 10), "");
        assert_eq!(bar(3, 0), "");
    }

    #[test]
    fn test_count_table_formats_labels() {
        let rows = vec![
            CategoryCount { label: "in_progress".to_string(), count: 3 },
            CategoryCount { label: "completed".to_string(), count: 1 },
        ];
        let table = count_table("Projects by status", &rows);
        assert!(table.contains("In Progress"));
        assert!(table.contains("75.0%"));
        assert!(table.contains("25.0%"));
    }

    #[test]
    fn test_count_table_empty() {
        let table = count_table("Nothing", &[]);
        assert!(table.contains("(no data)"));
    }
}
