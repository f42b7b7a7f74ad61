/// Display-ready aggregation over list-shaped API payloads
///
/// Every analytics view derives its chart data the same way: group flat
/// records by a categorical field, bucket them into a trailing daily window,
/// or rank them by an actor. These helpers are pure and total — empty input
/// yields an empty table, zero-filled buckets, or an empty ranking, never an
/// error.
///
/// # Example
///
/// ```
/// use edudash_core::stats::category_counts;
///
/// let rows = vec![Some("text"), Some("text"), Some("question"), None];
/// let table = category_counts(&rows, |r| r.as_deref(), "Unknown");
///
/// assert_eq!(table.len(), 3);
/// assert_eq!(table[0].label, "text");
/// assert_eq!(table[0].count, 2);
/// assert_eq!(table[2].label, "Unknown");
/// ```
use crate::models::community::{Comment, Post};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of days in the trailing trend window
pub const TREND_WINDOW_DAYS: usize = 7;

/// Number of entries in a top-author ranking
pub const TOP_AUTHOR_LIMIT: usize = 5;

/// One row of a grouped count table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    /// Category value, or the fallback label for missing values
    pub label: String,

    /// Occurrences of the category
    pub count: u64,
}

impl CategoryCount {
    /// Share of the given total, as a percentage
    ///
    /// Returns 0 for a zero total so callers never divide by zero.
    pub fn percent_of(&self, total: u64) -> f64 {
        if total == 0 {
            0.0
        } else {
            self.count as f64 * 100.0 / total as f64
        }
    }
}

/// Groups records by a categorical field, preserving first-seen order
///
/// Missing or empty category values land in a `fallback` bucket instead of
/// being dropped. Only observed categories appear, so zero counts cannot
/// occur. First-seen ordering keeps downstream color assignment stable
/// across refreshes of the same data.
pub fn category_counts<T, F>(items: &[T], category: F, fallback: &str) -> Vec<CategoryCount>
where
    F: Fn(&T) -> Option<&str>,
{
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, u64> = HashMap::new();

    for item in items {
        let label = match category(item) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => fallback.to_string(),
        };
        if !counts.contains_key(&label) {
            order.push(label.clone());
        }
        *counts.entry(label).or_insert(0) += 1;
    }

    order
        .into_iter()
        .map(|label| {
            let count = counts[&label];
            CategoryCount { label, count }
        })
        .collect()
}

/// One day of the posting trend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Calendar day of the bucket (UTC)
    pub date: NaiveDate,

    /// Short weekday label ("Mon", "Tue", …)
    pub label: String,

    /// Posts created on this day
    pub posts: u64,

    /// Comments created on this day
    pub comments: u64,
}

/// Buckets two record streams into a trailing daily window
///
/// Produces exactly `days` buckets ordered oldest to newest, ending at
/// `today`. A record counts toward a bucket when its UTC calendar date
/// matches; records without a timestamp match nothing. Days with no
/// matches stay zero-filled.
pub fn trend_by_day<P, C, FP, FC>(
    posts: &[P],
    comments: &[C],
    post_date: FP,
    comment_date: FC,
    days: usize,
    today: NaiveDate,
) -> Vec<TrendPoint>
where
    FP: Fn(&P) -> Option<NaiveDate>,
    FC: Fn(&C) -> Option<NaiveDate>,
{
    (0..days)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset as i64);
            let post_count = posts.iter().filter(|p| post_date(p) == Some(date)).count();
            let comment_count = comments
                .iter()
                .filter(|c| comment_date(c) == Some(date))
                .count();
            TrendPoint {
                date,
                label: date.format("%a").to_string(),
                posts: post_count as u64,
                comments: comment_count as u64,
            }
        })
        .collect()
}

/// Convenience wrapper over [`trend_by_day`] for the community models
pub fn post_comment_trend(
    posts: &[Post],
    comments: &[Comment],
    today: NaiveDate,
) -> Vec<TrendPoint> {
    trend_by_day(
        posts,
        comments,
        |p| p.created_at.map(|t| t.date_naive()),
        |c| c.created_at.map(|t| t.date_naive()),
        TREND_WINDOW_DAYS,
        today,
    )
}

/// One entry of a top-author ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorStats {
    /// Author's username, or "Unknown" when the record carried no author
    pub username: String,

    /// Number of records attributed to the author
    pub post_count: u64,

    /// Sum of the like totals on those records
    pub like_count: u64,
}

/// Ranks authors by record count, keeping the top `k`
///
/// Records without an author fall into an "Unknown" bucket rather than
/// being dropped. The sort is descending by count and stable, so ties keep
/// their first-seen input order.
pub fn top_authors<T, FA, FL>(items: &[T], author: FA, likes: FL, k: usize) -> Vec<AuthorStats>
where
    FA: Fn(&T) -> Option<&str>,
    FL: Fn(&T) -> u64,
{
    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, (u64, u64)> = HashMap::new();

    for item in items {
        let name = match author(item) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => "Unknown".to_string(),
        };
        if !totals.contains_key(&name) {
            order.push(name.clone());
        }
        let entry = totals.entry(name).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += likes(item);
    }

    let mut ranking: Vec<AuthorStats> = order
        .into_iter()
        .map(|username| {
            let (post_count, like_count) = totals[&username];
            AuthorStats {
                username,
                post_count,
                like_count,
            }
        })
        .collect();

    ranking.sort_by(|a, b| b.post_count.cmp(&a.post_count));
    ranking.truncate(k);
    ranking
}

/// Engagement totals and per-post averages for the community view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngagementSummary {
    /// Total posts in the sample
    pub total_posts: u64,

    /// Total comments: the comment list length when comments were fetched,
    /// else the sum of per-post comment counters
    pub total_comments: u64,

    /// Sum of like counters across posts
    pub total_likes: u64,

    /// Sum of view counters across posts
    pub total_views: u64,

    /// Likes per post, 0 when there are no posts
    pub avg_likes_per_post: f64,

    /// Comments per post, 0 when there are no posts
    pub avg_comments_per_post: f64,
}

impl EngagementSummary {
    /// Derives engagement totals from fetched posts and comments
    pub fn from_posts(posts: &[Post], comments: &[Comment]) -> Self {
        let total_posts = posts.len() as u64;
        let total_likes: u64 = posts.iter().map(|p| p.like_count).sum();
        let total_views: u64 = posts.iter().map(|p| p.view_count).sum();
        let total_comments = if comments.is_empty() {
            posts.iter().map(|p| p.comment_count).sum()
        } else {
            comments.len() as u64
        };

        let (avg_likes, avg_comments) = if total_posts == 0 {
            (0.0, 0.0)
        } else {
            (
                total_likes as f64 / total_posts as f64,
                total_comments as f64 / total_posts as f64,
            )
        };

        Self {
            total_posts,
            total_comments,
            total_likes,
            total_views,
            avg_likes_per_post: avg_likes,
            avg_comments_per_post: avg_comments,
        }
    }
}

/// Formats a raw categorical value for display
///
/// `None` and empty strings become "Unknown"; otherwise underscores turn
/// into spaces and each word is title-cased ("in_progress" → "In Progress").
pub fn format_label(raw: Option<&str>) -> String {
    match raw {
        Some(value) if !value.is_empty() => value
            .replace('_', " ")
            .split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => {
                        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                    }
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" "),
        _ => "Unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn post(post_type: Option<&str>, author: Option<&str>, likes: u64, day: u32) -> Post {
        Post {
            post_type: post_type.map(str::to_string),
            author: author.map(|name| crate::models::user::UserRef {
                username: Some(name.to_string()),
                ..Default::default()
            }),
            like_count: likes,
            created_at: Some(Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn test_category_counts_empty_input() {
        let table = category_counts::<Post, _>(&[], |p| p.post_type.as_deref(), "Unknown");
        assert!(table.is_empty());
    }

    #[test]
    fn test_category_counts_sums_and_order() {
        let posts = vec![
            post(Some("text"), None, 0, 1),
            post(Some("text"), None, 0, 1),
            post(Some("question"), None, 0, 2),
        ];
        let table = category_counts(&posts, |p| p.post_type.as_deref(), "Unknown");

        assert_eq!(table.len(), 2);
        assert_eq!(table[0], CategoryCount { label: "text".to_string(), count: 2 });
        assert_eq!(table[1], CategoryCount { label: "question".to_string(), count: 1 });

        // Counts always sum to the input length
        let total: u64 = table.iter().map(|c| c.count).sum();
        assert_eq!(total, posts.len() as u64);
    }

    #[test]
    fn test_category_counts_fallback_bucket() {
        let posts = vec![post(None, None, 0, 1), post(Some(""), None, 0, 1)];
        let table = category_counts(&posts, |p| p.post_type.as_deref(), "Unknown");

        assert_eq!(table.len(), 1);
        assert_eq!(table[0].label, "Unknown");
        assert_eq!(table[0].count, 2);
    }

    #[test]
    fn test_percent_of_zero_total() {
        let row = CategoryCount { label: "x".to_string(), count: 0 };
        assert_eq!(row.percent_of(0), 0.0);
    }

    #[test]
    fn test_trend_always_seven_buckets() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();

        let empty = post_comment_trend(&[], &[], today);
        assert_eq!(empty.len(), TREND_WINDOW_DAYS);
        assert!(empty.iter().all(|p| p.posts == 0 && p.comments == 0));

        // Oldest to newest
        assert_eq!(empty[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(empty[6].date, today);
    }

    #[test]
    fn test_trend_counts_matching_days() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        let posts = vec![
            post(Some("text"), None, 0, 7),
            post(Some("text"), None, 0, 7),
            post(Some("text"), None, 0, 5),
            // Outside the window
            post(Some("text"), None, 0, 20),
        ];
        let comments = vec![Comment {
            created_at: Some(Utc.with_ymd_and_hms(2024, 1, 7, 8, 0, 0).unwrap()),
            ..Default::default()
        }];

        let trend = post_comment_trend(&posts, &comments, today);
        assert_eq!(trend.len(), 7);
        assert_eq!(trend[6].posts, 2);
        assert_eq!(trend[6].comments, 1);
        assert_eq!(trend[4].posts, 1);
        assert_eq!(trend[3].posts, 0);
    }

    #[test]
    fn test_top_authors_ranking() {
        let posts = vec![
            post(None, Some("alice"), 5, 1),
            post(None, Some("bob"), 1, 1),
            post(None, Some("alice"), 2, 2),
            post(None, None, 9, 2),
        ];

        let ranking = top_authors(
            &posts,
            |p| p.author_name(),
            |p| p.like_count,
            TOP_AUTHOR_LIMIT,
        );

        assert_eq!(ranking.len(), 3);
        assert_eq!(ranking[0].username, "alice");
        assert_eq!(ranking[0].post_count, 2);
        assert_eq!(ranking[0].like_count, 7);
        // Tie between bob and the Unknown bucket keeps input order
        assert_eq!(ranking[1].username, "bob");
        assert_eq!(ranking[2].username, "Unknown");
        assert_eq!(ranking[2].like_count, 9);
    }

    #[test]
    fn test_top_authors_truncates_to_k() {
        let posts: Vec<Post> = (0..10)
            .map(|i| post(None, Some(&format!("user{}", i)), 0, 1))
            .collect();
        let ranking = top_authors(&posts, |p| p.author_name(), |p| p.like_count, 5);
        assert_eq!(ranking.len(), 5);
        assert!(ranking.windows(2).all(|w| w[0].post_count >= w[1].post_count));
    }

    #[test]
    fn test_engagement_summary_empty() {
        let summary = EngagementSummary::from_posts(&[], &[]);
        assert_eq!(summary, EngagementSummary::default());
    }

    #[test]
    fn test_engagement_summary_prefers_fetched_comments() {
        let posts = vec![post(None, None, 4, 1), post(None, None, 2, 1)];
        let comments = vec![Comment::default(), Comment::default(), Comment::default()];

        let summary = EngagementSummary::from_posts(&posts, &comments);
        assert_eq!(summary.total_likes, 6);
        assert_eq!(summary.total_comments, 3);
        assert_eq!(summary.avg_likes_per_post, 3.0);
        assert_eq!(summary.avg_comments_per_post, 1.5);
    }

    #[test]
    fn test_format_label() {
        assert_eq!(format_label(Some("in_progress")), "In Progress");
        assert_eq!(format_label(Some("text")), "Text");
        assert_eq!(format_label(Some("")), "Unknown");
        assert_eq!(format_label(None), "Unknown");
    }
}
