//! Host-service traits consumed by renderers.
//!
//! The content store answers the post-grid query; the media store resolves
//! attachment identifiers to renderable sources. Both are host concerns —
//! this crate ships in-memory implementations for tests and for embedding
//! without a CMS, the way a library ships a memory storage backend.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// A content-store query: newest published posts first, optionally filtered
/// by tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostQuery {
    pub post_type: String,
    pub per_page: usize,
    pub tag: Option<String>,
}

impl PostQuery {
    /// The standard query: `per_page` most recent published posts.
    pub fn recent(per_page: usize) -> Self {
        Self {
            post_type: "post".to_string(),
            per_page,
            tag: None,
        }
    }

    /// Restrict to posts carrying the given tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// One published item as the content store exposes it to renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSummary {
    pub title: String,
    pub permalink: String,
    pub date: DateTime<Utc>,
    pub excerpt: String,
    /// Thumbnail attachment id, when the post has one.
    pub thumbnail: Option<String>,
}

/// The external system holding publishable items.
pub trait ContentStore {
    /// Most recent published posts matching the query, date-descending.
    fn recent_posts(&self, query: &PostQuery) -> Vec<PostSummary>;
}

/// Resolved attachment attributes at a named size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
    pub srcset: Option<String>,
}

/// The external media store resolving attachment identifiers.
pub trait MediaStore {
    /// Resolve an attachment at a named size. `None` for unknown ids.
    fn attachment(&self, id: &str, size: &str) -> Option<ImageSource>;

    /// The responsive source-set for an attachment at a named size.
    fn srcset(&self, id: &str, size: &str) -> Option<String> {
        self.attachment(id, size).and_then(|source| source.srcset)
    }
}

/// A named crop size the component set asks its host to provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
    pub crop: bool,
}

#[derive(Debug, Clone)]
struct StoredPost {
    summary: PostSummary,
    tags: Vec<String>,
    published: bool,
}

/// In-memory content store for tests and CMS-less embedding.
#[derive(Debug, Default)]
pub struct InMemoryContentStore {
    posts: Vec<StoredPost>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a published post with the given tags.
    pub fn add(&mut self, summary: PostSummary, tags: &[&str]) {
        self.posts.push(StoredPost {
            summary,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            published: true,
        });
    }

    /// Add an unpublished post — never returned by queries.
    pub fn add_draft(&mut self, summary: PostSummary) {
        self.posts.push(StoredPost {
            summary,
            tags: Vec::new(),
            published: false,
        });
    }
}

impl ContentStore for InMemoryContentStore {
    fn recent_posts(&self, query: &PostQuery) -> Vec<PostSummary> {
        let mut matches: Vec<&StoredPost> = self
            .posts
            .iter()
            .filter(|p| p.published)
            .filter(|p| match &query.tag {
                Some(tag) => p.tags.iter().any(|t| t == tag),
                None => true,
            })
            .collect();
        matches.sort_by(|a, b| b.summary.date.cmp(&a.summary.date));
        matches
            .into_iter()
            .take(query.per_page)
            .map(|p| p.summary.clone())
            .collect()
    }
}

/// In-memory media store keyed by (attachment id, size name).
#[derive(Debug, Default)]
pub struct InMemoryMediaStore {
    sources: HashMap<(String, String), ImageSource>,
}

impl InMemoryMediaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an attachment source at a named size.
    pub fn insert(&mut self, id: impl Into<String>, size: impl Into<String>, source: ImageSource) {
        self.sources.insert((id.into(), size.into()), source);
    }
}

impl MediaStore for InMemoryMediaStore {
    fn attachment(&self, id: &str, size: &str) -> Option<ImageSource> {
        self.sources.get(&(id.to_string(), size.to_string())).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn post(title: &str, day: u32) -> PostSummary {
        PostSummary {
            title: title.to_string(),
            permalink: format!("/posts/{title}"),
            date: Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap(),
            excerpt: String::new(),
            thumbnail: None,
        }
    }

    #[test]
    fn recent_posts_sorted_date_descending() {
        let mut store = InMemoryContentStore::new();
        store.add(post("old", 1), &[]);
        store.add(post("new", 20), &[]);
        store.add(post("mid", 10), &[]);

        let posts = store.recent_posts(&PostQuery::recent(10));
        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["new", "mid", "old"]);
    }

    #[test]
    fn per_page_limits_results() {
        let mut store = InMemoryContentStore::new();
        for day in 1..=9 {
            store.add(post(&format!("p{day}"), day), &[]);
        }
        assert_eq!(store.recent_posts(&PostQuery::recent(6)).len(), 6);
    }

    #[test]
    fn tag_filter_applies() {
        let mut store = InMemoryContentStore::new();
        store.add(post("tagged", 2), &["news"]);
        store.add(post("untagged", 3), &[]);

        let posts = store.recent_posts(&PostQuery::recent(10).with_tag("news"));
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "tagged");
    }

    #[test]
    fn drafts_are_excluded() {
        let mut store = InMemoryContentStore::new();
        store.add_draft(post("draft", 5));
        assert!(store.recent_posts(&PostQuery::recent(10)).is_empty());
    }

    #[test]
    fn media_store_resolves_by_id_and_size() {
        let mut media = InMemoryMediaStore::new();
        media.insert(
            "42",
            "full",
            ImageSource {
                url: "/media/42-full.jpg".into(),
                width: 1600,
                height: 900,
                alt: "Hero".into(),
                srcset: Some("/media/42-full.jpg 1600w".into()),
            },
        );

        assert!(media.attachment("42", "full").is_some());
        assert!(media.attachment("42", "thumb").is_none());
        assert!(media.attachment("7", "full").is_none());
        assert_eq!(
            media.srcset("42", "full").as_deref(),
            Some("/media/42-full.jpg 1600w")
        );
    }
}
