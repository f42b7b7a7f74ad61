/// Community moderation endpoints and the moderation overview
///
/// The moderation view is read-mostly: it lists posts, comments,
/// organizations, and hashtags, derives engagement aggregates from them,
/// and offers exactly one mutation, deleting a post.
use crate::error::ApiResult;
use crate::http::{or_empty, ApiClient};
use chrono::NaiveDate;
use edudash_core::models::community::{Comment, Hashtag, Organization, Post};
use edudash_core::stats::{
    category_counts, post_comment_trend, top_authors, AuthorStats, CategoryCount,
    EngagementSummary, TrendPoint, TOP_AUTHOR_LIMIT,
};
use uuid::Uuid;

impl ApiClient {
    /// Lists community posts
    pub async fn list_posts(&self) -> ApiResult<Vec<Post>> {
        self.get_list("/community/posts/").await
    }

    /// Lists comments across all posts
    pub async fn list_comments(&self) -> ApiResult<Vec<Comment>> {
        self.get_list("/community/comments/").await
    }

    /// Lists organizations
    pub async fn list_organizations(&self) -> ApiResult<Vec<Organization>> {
        self.get_list("/community/organizations/").await
    }

    /// Lists hashtags with their usage totals
    pub async fn list_hashtags(&self) -> ApiResult<Vec<Hashtag>> {
        self.get_list("/community/hashtags/").await
    }

    /// Removes a post
    pub async fn delete_post(&self, id: Uuid) -> ApiResult<()> {
        self.delete(&format!("/community/posts/{}/", id)).await
    }
}

/// Aggregates derived from the fetched community content
#[derive(Debug, Clone, Default)]
pub struct ContentStats {
    /// Totals and per-post averages
    pub engagement: EngagementSummary,

    /// Posts grouped by type, in first-seen order
    pub posts_by_type: Vec<CategoryCount>,

    /// Post/comment volume over the trailing week
    pub trend: Vec<TrendPoint>,

    /// Most prolific authors
    pub top_authors: Vec<AuthorStats>,
}

impl ContentStats {
    /// Derives all aggregates from fetched content
    ///
    /// `today` anchors the trend window; callers pass the current UTC date
    /// outside of tests.
    pub fn derive(posts: &[Post], comments: &[Comment], today: NaiveDate) -> Self {
        ContentStats {
            engagement: EngagementSummary::from_posts(posts, comments),
            posts_by_type: category_counts(posts, |p| p.post_type.as_deref(), "discussion"),
            trend: post_comment_trend(posts, comments, today),
            top_authors: top_authors(
                posts,
                |p| p.author_name(),
                |p| p.like_count,
                TOP_AUTHOR_LIMIT,
            ),
        }
    }
}

/// Everything the moderation view needs, fetched in one pass
#[derive(Debug, Clone, Default)]
pub struct CommunityOverview {
    /// All posts
    pub posts: Vec<Post>,

    /// All comments
    pub comments: Vec<Comment>,

    /// All organizations
    pub organizations: Vec<Organization>,

    /// All hashtags
    pub hashtags: Vec<Hashtag>,

    /// Aggregates derived from the above
    pub stats: ContentStats,
}

impl CommunityOverview {
    /// Fetches the four listings concurrently and derives the aggregates
    ///
    /// Each listing independently falls back to empty on failure; the
    /// aggregates are then computed from whatever arrived.
    pub async fn fetch(client: &ApiClient, today: NaiveDate) -> Self {
        let (posts, comments, organizations, hashtags) = tokio::join!(
            client.list_posts(),
            client.list_comments(),
            client.list_organizations(),
            client.list_hashtags(),
        );

        let posts = or_empty(posts, "posts");
        let comments = or_empty(comments, "comments");
        let organizations = or_empty(organizations, "organizations");
        let hashtags = or_empty(hashtags, "hashtags");

        let stats = ContentStats::derive(&posts, &comments, today);

        CommunityOverview {
            posts,
            comments,
            organizations,
            hashtags,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_stats_empty() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let stats = ContentStats::derive(&[], &[], today);
        assert_eq!(stats.engagement.total_posts, 0);
        assert!(stats.posts_by_type.is_empty());
        assert_eq!(stats.trend.len(), 7);
        assert!(stats.top_authors.is_empty());
    }

    #[test]
    fn test_untyped_posts_count_as_discussion() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let posts = vec![Post::default(), Post::default()];
        let stats = ContentStats::derive(&posts, &[], today);
        assert_eq!(stats.posts_by_type.len(), 1);
        assert_eq!(stats.posts_by_type[0].label, "discussion");
        assert_eq!(stats.posts_by_type[0].count, 2);
    }
}
