//! Multi-field keyword search over posts.

use super::post::{Post, sort_by_recency};

/// A non-empty, case-folded search pattern.
///
/// The pattern is a literal: no tokenizing, stemming or regex syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Returns `None` when there is nothing to search for.
    pub fn new(raw: Option<&str>) -> Option<Self> {
        match raw {
            Some(raw) if !raw.is_empty() => Some(Self {
                needle: raw.to_lowercase(),
            }),
            _ => None,
        }
    }

    /// Case-insensitive substring match on title, content, author or any tag.
    pub fn matches(&self, post: &Post) -> bool {
        self.contained_in(&post.title)
            || self.contained_in(&post.content)
            || self.contained_in(&post.author)
            || post.tags.iter().any(|tag| self.contained_in(tag))
    }

    fn contained_in(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.needle)
    }
}

/// Filter `corpus` down to the posts matching `query`, newest first.
///
/// An absent or empty query yields no results rather than every post.
pub fn search(query: Option<&str>, corpus: impl IntoIterator<Item = Post>) -> Vec<Post> {
    let Some(query) = SearchQuery::new(query) else {
        return Vec::new();
    };

    let mut hits: Vec<Post> = corpus.into_iter().filter(|p| query.matches(p)).collect();
    sort_by_recency(&mut hits);
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewPost, PostFields, PostId};
    use chrono::{TimeZone, Utc};

    fn post(day: u32, title: &str, content: &str, author: &str, tags: &[&str]) -> Post {
        NewPost::new(
            PostFields {
                title: title.to_string(),
                content: content.to_string(),
                author: author.to_string(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
            },
            Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap(),
        )
        .into_post(PostId::generate())
    }

    #[test]
    fn test_matches_title_or_tag_in_recency_order() {
        let intro = post(1, "Intro to Go", "basics", "ann", &[]);
        let tagged = post(2, "Concurrency", "channels", "bob", &["Go"]);
        let other = post(3, "Rust", "ownership", "cat", &["systems"]);

        let hits = search(Some("go"), vec![intro.clone(), tagged.clone(), other]);

        let ids: Vec<_> = hits.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![tagged.id, intro.id]);
    }

    #[test]
    fn test_empty_or_absent_query_matches_nothing() {
        let corpus = vec![post(1, "a", "b", "c", &["d"])];

        assert!(search(Some(""), corpus.clone()).is_empty());
        assert!(search(None, corpus).is_empty());
    }

    #[test]
    fn test_matches_content_and_author() {
        let by_content = post(1, "x", "Deep dive into TOKIO", "ann", &[]);
        let by_author = post(2, "y", "z", "Tokio Team", &[]);
        let miss = post(3, "x", "z", "ann", &["async"]);

        assert_eq!(search(Some("tokio"), vec![by_content, by_author, miss]).len(), 2);
    }

    #[test]
    fn test_tag_substring_matches() {
        let p = post(1, "x", "y", "z", &["webdev"]);
        assert!(SearchQuery::new(Some("DEV")).unwrap().matches(&p));
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let p = post(1, "C++ tips", "y", "z", &[]);
        let q = post(2, "Ca tips", "y", "z", &[]);

        let hits = search(Some("c++"), vec![p.clone(), q]);
        assert_eq!(hits, vec![p]);
        assert!(search(Some(".*"), vec![post(3, "x", "y", "z", &[])]).is_empty());
    }
}
