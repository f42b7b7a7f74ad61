/// Client-side filtering and sorting for admin tables
///
/// Every admin listing works the same way: fetch the full collection once,
/// then search, filter, and sort it locally without touching the fetched
/// data. [`TableQuery`] holds the view state and [`TableRow`] is the seam a
/// record type implements to participate.
///
/// # Example
///
/// ```
/// use edudash_core::tableview::{TableQuery, SortDirection};
/// use edudash_core::models::community::Post;
///
/// let posts = vec![
///     Post { title: "Rust tips".to_string(), like_count: 4, ..Default::default() },
///     Post { title: "Intro thread".to_string(), like_count: 9, ..Default::default() },
/// ];
///
/// let mut query = TableQuery::default();
/// query.toggle_sort("like_count");
/// let view = query.apply(&posts);
///
/// assert_eq!(view[0].title, "Intro thread");
/// assert_eq!(posts[0].title, "Rust tips"); // source untouched
/// ```
use crate::models::community::{Organization, Post};
use crate::models::user::User;
use std::cmp::Ordering;

/// Direction of a column sort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first
    Ascending,

    /// Largest first; the default for a freshly selected column
    Descending,
}

impl SortDirection {
    /// The opposite direction
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// A sortable field value
///
/// Borrowed where possible: text fields hand out `&str`, numeric and date
/// fields collapse to `f64` so one comparison path covers counts and
/// timestamps alike.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Compared case-insensitively, like the browser views did
    Text(&'a str),

    /// Compared numerically; NaN never occurs in practice
    Number(f64),
}

impl<'a> FieldValue<'a> {
    fn compare(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => {
                a.to_lowercase().cmp(&b.to_lowercase())
            }
            (FieldValue::Number(a), FieldValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            // Mixed types should not happen for a well-formed column;
            // treat text as smaller so the sort stays total
            (FieldValue::Text(_), FieldValue::Number(_)) => Ordering::Less,
            (FieldValue::Number(_), FieldValue::Text(_)) => Ordering::Greater,
        }
    }
}

/// A record that can appear in a searchable, sortable admin table
pub trait TableRow {
    /// Text fields the free-text search matches against
    fn search_text(&self) -> Vec<&str>;

    /// Value of the named column; unknown names sort as empty text
    fn field(&self, name: &str) -> FieldValue<'_>;

    /// Value of the named categorical filter field, if the row has one
    fn filter_value(&self, name: &str) -> Option<&str> {
        match self.field(name) {
            FieldValue::Text(value) => Some(value),
            FieldValue::Number(_) => None,
        }
    }
}

/// View state of one admin table: search text, exact filters, sort column
#[derive(Debug, Clone, Default)]
pub struct TableQuery {
    /// Free-text search; empty matches everything
    pub search: String,

    /// Exact-match categorical filters, ANDed together
    pub filters: Vec<(String, String)>,

    /// Currently sorted column, if any
    pub sort_field: Option<String>,

    /// Direction of the current sort
    pub direction: SortDirection,
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Descending
    }
}

impl TableQuery {
    /// Selects a sort column the way a column-header click does
    ///
    /// Clicking the already-active column flips the direction; clicking a
    /// new column selects it descending.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field.as_deref() == Some(field) {
            self.direction = self.direction.flipped();
        } else {
            self.sort_field = Some(field.to_string());
            self.direction = SortDirection::Descending;
        }
    }

    /// Sets or clears an exact-match filter
    ///
    /// Passing `None` (or "all") removes the filter for that field.
    pub fn set_filter(&mut self, field: &str, value: Option<&str>) {
        self.filters.retain(|(f, _)| f != field);
        if let Some(value) = value {
            if value != "all" {
                self.filters.push((field.to_string(), value.to_string()));
            }
        }
    }

    /// Applies the query to a fetched collection, returning the view
    ///
    /// The source slice is never mutated. Search is a case-insensitive
    /// substring match ORed across the row's search fields; filters match
    /// exactly and are ANDed; the sort is stable so equal keys keep their
    /// fetched order.
    pub fn apply<T: TableRow + Clone>(&self, rows: &[T]) -> Vec<T> {
        let needle = self.search.to_lowercase();

        let mut view: Vec<T> = rows
            .iter()
            .filter(|row| self.matches_search(*row, &needle) && self.matches_filters(*row))
            .cloned()
            .collect();

        if let Some(field) = self.sort_field.as_deref() {
            view.sort_by(|a, b| {
                let ord = a.field(field).compare(&b.field(field));
                match self.direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }

        view
    }

    fn matches_search<T: TableRow>(&self, row: &T, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        row.search_text()
            .iter()
            .any(|text| text.to_lowercase().contains(needle))
    }

    fn matches_filters<T: TableRow>(&self, row: &T) -> bool {
        self.filters
            .iter()
            .all(|(field, value)| row.filter_value(field) == Some(value.as_str()))
    }
}

impl TableRow for Post {
    fn search_text(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.content.as_str()];
        if let Some(author) = self.author_name() {
            fields.push(author);
        }
        fields
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "title" => FieldValue::Text(&self.title),
            "post_type" => FieldValue::Text(self.post_type.as_deref().unwrap_or("")),
            "author" => FieldValue::Text(self.author_name().unwrap_or("")),
            "like_count" => FieldValue::Number(self.like_count as f64),
            "comment_count" => FieldValue::Number(self.comment_count as f64),
            "view_count" => FieldValue::Number(self.view_count as f64),
            "created_at" => FieldValue::Number(
                self.created_at.map(|t| t.timestamp() as f64).unwrap_or(0.0),
            ),
            _ => FieldValue::Text(""),
        }
    }
}

impl TableRow for User {
    fn search_text(&self) -> Vec<&str> {
        let mut fields = vec![self.username.as_str(), self.email.as_str()];
        if let Some(first) = self.first_name.as_deref() {
            fields.push(first);
        }
        if let Some(last) = self.last_name.as_deref() {
            fields.push(last);
        }
        fields
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "username" => FieldValue::Text(&self.username),
            "email" => FieldValue::Text(&self.email),
            "role" => FieldValue::Text(&self.role),
            "program" => FieldValue::Text(self.program.as_deref().unwrap_or("")),
            "is_active" => FieldValue::Number(if self.is_active { 1.0 } else { 0.0 }),
            "created_at" => FieldValue::Number(
                self.created_at.map(|t| t.timestamp() as f64).unwrap_or(0.0),
            ),
            _ => FieldValue::Text(""),
        }
    }
}

impl TableRow for Organization {
    fn search_text(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "name" => FieldValue::Text(&self.name),
            "org_type" => FieldValue::Text(self.org_type.as_deref().unwrap_or("")),
            "member_count" => FieldValue::Number(self.member_count as f64),
            "post_count" => FieldValue::Number(self.post_count as f64),
            "is_official" => FieldValue::Number(if self.is_official { 1.0 } else { 0.0 }),
            _ => FieldValue::Text(""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::UserRef;

    fn post(title: &str, post_type: &str, author: &str, likes: u64) -> Post {
        Post {
            title: title.to_string(),
            post_type: Some(post_type.to_string()),
            author: Some(UserRef {
                username: Some(author.to_string()),
                ..Default::default()
            }),
            like_count: likes,
            ..Default::default()
        }
    }

    fn sample() -> Vec<Post> {
        vec![
            post("Rust ownership explained", "text", "alice", 10),
            post("Weekly showcase", "showcase", "bob", 25),
            post("How do lifetimes work?", "question", "alice", 5),
        ]
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let posts = sample();
        let view = TableQuery::default().apply(&posts);
        assert_eq!(view.len(), 3);
        // Fetched order preserved when no sort is selected
        assert_eq!(view[0].title, posts[0].title);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let posts = sample();
        let query = TableQuery {
            search: "RUST".to_string(),
            ..Default::default()
        };
        assert_eq!(query.apply(&posts).len(), 1);

        // Author matches count too
        let by_author = TableQuery {
            search: "alice".to_string(),
            ..Default::default()
        };
        assert_eq!(by_author.apply(&posts).len(), 2);
    }

    #[test]
    fn test_exact_filter() {
        let posts = sample();
        let mut query = TableQuery::default();
        query.set_filter("post_type", Some("question"));
        let view = query.apply(&posts);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].title, "How do lifetimes work?");

        // "all" clears the filter
        query.set_filter("post_type", Some("all"));
        assert_eq!(query.apply(&posts).len(), 3);
    }

    #[test]
    fn test_sort_toggles_direction() {
        let posts = sample();
        let mut query = TableQuery::default();

        query.toggle_sort("like_count");
        assert_eq!(query.direction, SortDirection::Descending);
        let view = query.apply(&posts);
        assert_eq!(view[0].like_count, 25);

        query.toggle_sort("like_count");
        assert_eq!(query.direction, SortDirection::Ascending);
        let view = query.apply(&posts);
        assert_eq!(view[0].like_count, 5);

        // Switching columns resets to descending
        query.toggle_sort("title");
        assert_eq!(query.direction, SortDirection::Descending);
    }

    #[test]
    fn test_double_toggle_restores_order() {
        let posts = sample();
        let mut query = TableQuery::default();
        query.toggle_sort("like_count");
        let first: Vec<String> = query.apply(&posts).iter().map(|p| p.title.clone()).collect();

        query.toggle_sort("like_count");
        query.toggle_sort("like_count");
        let third: Vec<String> = query.apply(&posts).iter().map(|p| p.title.clone()).collect();
        assert_eq!(first, third);
    }

    #[test]
    fn test_text_sort_ignores_case() {
        let posts = vec![
            post("banana", "text", "a", 0),
            post("Apple", "text", "a", 0),
        ];
        let mut query = TableQuery::default();
        query.toggle_sort("title");
        query.toggle_sort("title"); // ascending
        let view = query.apply(&posts);
        assert_eq!(view[0].title, "Apple");
    }

    #[test]
    fn test_stable_sort_keeps_tied_rows_in_fetch_order() {
        let posts = vec![
            post("first", "text", "a", 7),
            post("second", "text", "a", 7),
            post("third", "text", "a", 7),
        ];
        let mut query = TableQuery::default();
        query.toggle_sort("like_count");
        let view = query.apply(&posts);
        let titles: Vec<&str> = view.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_apply_does_not_mutate_source() {
        let posts = sample();
        let before: Vec<String> = posts.iter().map(|p| p.title.clone()).collect();
        let mut query = TableQuery::default();
        query.search = "a".to_string();
        query.toggle_sort("like_count");
        let _ = query.apply(&posts);
        let after: Vec<String> = posts.iter().map(|p| p.title.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_user_rows() {
        let users = vec![
            User {
                username: "jdoe".to_string(),
                email: "jdoe@example.edu".to_string(),
                role: "student".to_string(),
                ..Default::default()
            },
            User {
                username: "asmith".to_string(),
                email: "asmith@example.edu".to_string(),
                role: "instructor".to_string(),
                ..Default::default()
            },
        ];
        let mut query = TableQuery::default();
        query.set_filter("role", Some("instructor"));
        let view = query.apply(&users);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].username, "asmith");
    }
}
