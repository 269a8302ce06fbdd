//! Post grid block — the most recent published posts in a column layout,
//! optionally filtered by tag.

use crate::classes::ClassList;
use crate::context::{BlockRenderer, RenderContext};
use crate::escape;
use crate::image::ImageTag;
use seedblocks_fields::resolve;

/// Crop size the grid thumbnails render at.
pub const POST_GRID_IMAGE_SIZE: &str = "post_grid";

const COLUMN_CHOICES: &[&str] = &["2", "3", "4"];
const POSTS_MIN: i64 = 2;
const POSTS_MAX: i64 = 12;
const POSTS_DEFAULT: i64 = 6;
const EXCERPT_LIMIT: usize = 155;

pub struct PostGridRenderer;

fn truncate_excerpt(excerpt: &str) -> String {
    if excerpt.chars().count() > EXCERPT_LIMIT {
        let truncated: String = excerpt.chars().take(EXCERPT_LIMIT).collect();
        format!("{truncated}...")
    } else {
        excerpt.to_string()
    }
}

impl BlockRenderer for PostGridRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let values = ctx.values;
        let title = resolve::text(values, "title");
        let text = resolve::text(values, "text");
        let columns = resolve::choice(values, "columns", COLUMN_CHOICES, "3");
        let selector_tag = resolve::text(values, "selector_tag");
        let number_of_posts =
            resolve::int_in_range(values, "number_of_posts", POSTS_MIN, POSTS_MAX, POSTS_DEFAULT);

        let mut wrapper = ClassList::new("sb-post-grid");
        wrapper.push_prefixed("align", ctx.attributes.align());
        wrapper.push_prefixed("anchor-", ctx.attributes.anchor());
        wrapper.push(format!("sb-post-grid--columns-{columns}"));
        wrapper.push(ctx.attributes.class_name());

        let mut query = crate::stores::PostQuery::recent(number_of_posts as usize);
        if !selector_tag.is_empty() {
            query = query.with_tag(selector_tag);
        }
        let posts = ctx.content.recent_posts(&query);

        let mut html = String::new();
        html.push_str(&format!("<div class=\"{}\">\n", wrapper.attr()));
        html.push_str("<div class=\"sb-post-grid__container\">\n");

        if !title.is_empty() {
            html.push_str(&format!(
                "<h2 class=\"sb-post-grid__title\">{}</h2>\n",
                escape::text(&title)
            ));
        }
        if !text.is_empty() {
            html.push_str(&format!(
                "<div class=\"sb-post-grid__text\">\n{}\n</div>\n",
                escape::rich_text(&escape::autop(&text))
            ));
        }

        if posts.is_empty() {
            html.push_str("<p class=\"sb-post-grid__no-posts\">No posts found.</p>\n");
        } else {
            html.push_str("<div class=\"sb-post-grid__items\">\n");
            for post in &posts {
                let permalink = escape::url(&post.permalink);
                html.push_str("<article class=\"sb-post-grid__item\">\n");

                let thumbnail = post
                    .thumbnail
                    .as_deref()
                    .and_then(|id| {
                        ImageTag::new(id, ctx.media)
                            .simple(POST_GRID_IMAGE_SIZE, &["sb-post-grid__thumbnail"])
                    });
                if let Some(tag) = thumbnail {
                    html.push_str(&format!(
                        "<a href=\"{permalink}\" class=\"sb-post-grid__thumbnail-link\">{tag}</a>\n"
                    ));
                }

                html.push_str("<div class=\"sb-post-grid__content\">\n");
                html.push_str(&format!(
                    "<time class=\"sb-post-grid__date\" datetime=\"{}\">{}</time>\n",
                    post.date.to_rfc3339(),
                    post.date.format("%B %-d, %Y")
                ));
                html.push_str(&format!(
                    "<h3 class=\"sb-post-grid__item-title\"><a href=\"{permalink}\">{}</a></h3>\n",
                    escape::text(&post.title)
                ));
                html.push_str(&format!(
                    "<div class=\"sb-post-grid__excerpt\">{}</div>\n",
                    escape::text(&truncate_excerpt(&post.excerpt))
                ));
                html.push_str("</div>\n</article>\n");
            }
            html.push_str("</div>\n");
        }

        html.push_str("</div>\n</div>\n");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::BlockAttributes;
    use crate::stores::{
        ImageSource, InMemoryContentStore, InMemoryMediaStore, PostSummary,
    };
    use chrono::{TimeZone, Utc};
    use seedblocks_fields::FieldValues;
    use serde_json::json;

    fn post(title: &str, day: u32) -> PostSummary {
        PostSummary {
            title: title.to_string(),
            permalink: format!("/posts/{title}"),
            date: Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap(),
            excerpt: format!("Excerpt for {title}"),
            thumbnail: None,
        }
    }

    fn render(values: FieldValues, content: &InMemoryContentStore) -> String {
        let media = InMemoryMediaStore::new();
        let attributes = BlockAttributes::default();
        PostGridRenderer.render(&RenderContext {
            values: &values,
            attributes: &attributes,
            inner_content: "",
            content,
            media: &media,
        })
    }

    #[test]
    fn out_of_range_post_count_falls_back_to_six() {
        let mut store = InMemoryContentStore::new();
        for day in 1..=9 {
            store.add(post(&format!("p{day}"), day), &[]);
        }
        let values = FieldValues::from([("number_of_posts", json!(50))]);
        let html = render(values, &store);
        assert_eq!(html.matches("<article").count(), 6);
    }

    #[test]
    fn in_range_post_count_is_used() {
        let mut store = InMemoryContentStore::new();
        for day in 1..=9 {
            store.add(post(&format!("p{day}"), day), &[]);
        }
        let values = FieldValues::from([("number_of_posts", json!(4))]);
        let html = render(values, &store);
        assert_eq!(html.matches("<article").count(), 4);
    }

    #[test]
    fn invalid_columns_falls_back_to_three() {
        let values = FieldValues::from([("columns", json!("7"))]);
        let html = render(values, &InMemoryContentStore::new());
        assert!(html.contains("sb-post-grid--columns-3"));
    }

    #[test]
    fn numeric_columns_value_matches_choice() {
        let values = FieldValues::from([("columns", json!(4))]);
        let html = render(values, &InMemoryContentStore::new());
        assert!(html.contains("sb-post-grid--columns-4"));
    }

    #[test]
    fn empty_result_renders_fallback_message() {
        let html = render(FieldValues::new(), &InMemoryContentStore::new());
        assert!(html.contains("<p class=\"sb-post-grid__no-posts\">No posts found.</p>"));
        assert!(!html.contains("sb-post-grid__items"));
    }

    #[test]
    fn tag_filter_restricts_posts() {
        let mut store = InMemoryContentStore::new();
        store.add(post("tagged", 2), &["news"]);
        store.add(post("untagged", 3), &[]);
        let values = FieldValues::from([("selector_tag", json!("news"))]);
        let html = render(values, &store);
        assert!(html.contains("tagged"));
        assert!(!html.contains("untagged"));
    }

    #[test]
    fn long_excerpt_is_truncated_with_ellipsis() {
        let mut store = InMemoryContentStore::new();
        let mut long = post("long", 1);
        long.excerpt = "x".repeat(200);
        store.add(long, &[]);
        let html = render(FieldValues::new(), &store);
        let expected = format!("{}...", "x".repeat(155));
        assert!(html.contains(&expected));
        assert!(!html.contains(&"x".repeat(156)));
    }

    #[test]
    fn short_excerpt_is_untouched() {
        assert_eq!(truncate_excerpt("short"), "short");
        let exact = "y".repeat(155);
        assert_eq!(truncate_excerpt(&exact), exact);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let excerpt = "é".repeat(160);
        let truncated = truncate_excerpt(&excerpt);
        assert_eq!(truncated, format!("{}...", "é".repeat(155)));
    }

    #[test]
    fn thumbnail_links_to_post() {
        let mut store = InMemoryContentStore::new();
        let mut with_thumb = post("pictured", 1);
        with_thumb.thumbnail = Some("42".into());
        store.add(with_thumb, &[]);

        let mut media = InMemoryMediaStore::new();
        media.insert(
            "42",
            POST_GRID_IMAGE_SIZE,
            ImageSource {
                url: "/media/42-grid.jpg".into(),
                width: 437,
                height: 251,
                alt: String::new(),
                srcset: None,
            },
        );

        let values = FieldValues::new();
        let attributes = BlockAttributes::default();
        let html = PostGridRenderer.render(&RenderContext {
            values: &values,
            attributes: &attributes,
            inner_content: "",
            content: &store,
            media: &media,
        });
        assert!(html.contains("<a href=\"/posts/pictured\" class=\"sb-post-grid__thumbnail-link\">"));
        assert!(html.contains("src=\"/media/42-grid.jpg\""));
        assert!(html.contains("sb-post-grid__thumbnail"));
    }

    #[test]
    fn date_renders_machine_and_human_forms() {
        let mut store = InMemoryContentStore::new();
        store.add(post("dated", 5), &[]);
        let html = render(FieldValues::new(), &store);
        assert!(html.contains("datetime=\"2024-03-05T12:00:00+00:00\""));
        assert!(html.contains(">March 5, 2024</time>"));
    }
}
