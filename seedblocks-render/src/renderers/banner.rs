//! Banner block — lead text, heading, rich text, and an optional button over
//! a background color or image.

use crate::classes::ClassList;
use crate::context::{BlockRenderer, RenderContext};
use crate::escape;
use crate::image::ImageTag;
use seedblocks_fields::{resolve, ImageValue};

const HEADING_CHOICES: &[&str] = &["h1", "h2", "h3", "h4"];
const HEIGHT_CHOICES: &[&str] = &["auto", "small", "medium", "large"];
const DEFAULT_BACKGROUND: &str = "#ffffff";

pub struct BannerRenderer;

impl BlockRenderer for BannerRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let values = ctx.values;
        let lead_text = resolve::text(values, "lead_text");
        let title = resolve::text(values, "title");
        let heading_type = resolve::choice(values, "heading_type", HEADING_CHOICES, "h2");
        let text = resolve::text(values, "text");
        let background_color = resolve::text_or(values, "background_color", DEFAULT_BACKGROUND);
        let height = resolve::choice(values, "height", HEIGHT_CHOICES, "auto");
        let button_text = resolve::text(values, "button_text");
        let button_link = resolve::text(values, "button_link");

        let mut outer = ClassList::new("sb-banner-wrapper");
        outer.push(ctx.attributes.class_name());

        let mut wrapper = ClassList::new("sb-banner");
        wrapper.push_prefixed("align", ctx.attributes.align());
        wrapper.push_prefixed("anchor-", ctx.attributes.anchor());
        if height != "auto" {
            wrapper.push(format!("sb-banner--height-{height}"));
        }

        let mut styles = vec![format!(
            "background-color: {};",
            escape::attr(&background_color)
        )];
        let image_url = resolve::image(values, "image").and_then(|image| match image {
            ImageValue::Resolved { url, .. } => Some(url),
            ImageValue::Id(id) => ImageTag::new(id, ctx.media).url("full"),
        });
        if let Some(url) = image_url {
            let url = escape::url(&url);
            if !url.is_empty() {
                styles.push(format!("background-image: url({url});"));
            }
        }

        let mut html = String::new();
        html.push_str(&format!("<div class=\"{}\">\n", outer.attr()));
        html.push_str(&format!(
            "<div class=\"{}\" style=\"{}\">\n",
            wrapper.attr(),
            styles.join(" ")
        ));
        html.push_str("<div class=\"sb-banner__container\">\n");
        html.push_str("<div class=\"sb-banner__content\">\n");

        if !lead_text.is_empty() {
            html.push_str(&format!(
                "<div class=\"sb-banner__lead-text\">{}</div>\n",
                escape::text(&lead_text)
            ));
        }
        if !title.is_empty() {
            html.push_str(&format!(
                "<{heading_type} class=\"sb-banner__title\">{}</{heading_type}>\n",
                escape::text(&title)
            ));
        }
        if !text.is_empty() {
            html.push_str(&format!(
                "<div class=\"sb-banner__text\">\n{}\n</div>\n",
                escape::rich_text(&escape::autop(&text))
            ));
        }
        if !button_text.is_empty() && !button_link.is_empty() {
            let href = escape::url(&button_link);
            html.push_str(&format!(
                "<div class=\"sb-banner__button\">\n<a href=\"{href}\" class=\"sb-banner__button-link\">{}</a>\n</div>\n",
                escape::text(&button_text)
            ));
        }

        html.push_str("</div>\n</div>\n</div>\n</div>\n");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::BlockAttributes;
    use crate::stores::{ImageSource, InMemoryContentStore, InMemoryMediaStore};
    use seedblocks_fields::FieldValues;
    use serde_json::json;

    fn render(values: FieldValues, attributes: BlockAttributes) -> String {
        let content = InMemoryContentStore::new();
        let media = InMemoryMediaStore::new();
        BannerRenderer.render(&RenderContext {
            values: &values,
            attributes: &attributes,
            inner_content: "",
            content: &content,
            media: &media,
        })
    }

    #[test]
    fn invalid_heading_type_falls_back_to_h2() {
        let values = FieldValues::from([("title", json!("Welcome")), ("heading_type", json!("h5"))]);
        let html = render(values, BlockAttributes::default());
        assert!(html.contains("<h2 class=\"sb-banner__title\">Welcome</h2>"));
        assert!(!html.contains("h5"));
    }

    #[test]
    fn valid_heading_type_is_used() {
        let values = FieldValues::from([("title", json!("Welcome")), ("heading_type", json!("h3"))]);
        let html = render(values, BlockAttributes::default());
        assert!(html.contains("<h3 class=\"sb-banner__title\">Welcome</h3>"));
    }

    #[test]
    fn height_auto_adds_no_modifier() {
        let html = render(FieldValues::new(), BlockAttributes::default());
        assert!(!html.contains("sb-banner--height-"));
    }

    #[test]
    fn height_variant_adds_modifier_class() {
        let values = FieldValues::from([("height", json!("large"))]);
        let html = render(values, BlockAttributes::default());
        assert!(html.contains("sb-banner--height-large"));
    }

    #[test]
    fn invalid_height_falls_back_to_auto() {
        let values = FieldValues::from([("height", json!("gigantic"))]);
        let html = render(values, BlockAttributes::default());
        assert!(!html.contains("sb-banner--height-"));
    }

    #[test]
    fn background_color_defaults_to_white() {
        let html = render(FieldValues::new(), BlockAttributes::default());
        assert!(html.contains("background-color: #ffffff;"));
    }

    #[test]
    fn resolved_image_becomes_background() {
        let values = FieldValues::from([("image", json!({"url": "/media/bg.jpg"}))]);
        let html = render(values, BlockAttributes::default());
        assert!(html.contains("background-image: url(/media/bg.jpg);"));
    }

    #[test]
    fn image_id_resolves_through_media_store() {
        let values = FieldValues::from([("image", json!("42"))]);
        let mut media = InMemoryMediaStore::new();
        media.insert(
            "42",
            "full",
            ImageSource {
                url: "/media/42.jpg".into(),
                width: 1600,
                height: 900,
                alt: String::new(),
                srcset: None,
            },
        );
        let content = InMemoryContentStore::new();
        let attributes = BlockAttributes::default();
        let html = BannerRenderer.render(&RenderContext {
            values: &values,
            attributes: &attributes,
            inner_content: "",
            content: &content,
            media: &media,
        });
        assert!(html.contains("background-image: url(/media/42.jpg);"));
    }

    #[test]
    fn button_requires_text_and_link() {
        let values = FieldValues::from([("button_text", json!("Read more"))]);
        let html = render(values, BlockAttributes::default());
        assert!(!html.contains("sb-banner__button"));

        let values = FieldValues::from([
            ("button_text", json!("Read more")),
            ("button_link", json!("https://example.com")),
        ]);
        let html = render(values, BlockAttributes::default());
        assert!(html.contains("<a href=\"https://example.com\" class=\"sb-banner__button-link\">Read more</a>"));
    }

    #[test]
    fn attributes_shape_class_lists() {
        let attributes = BlockAttributes {
            align: Some("wide".into()),
            anchor: Some("intro".into()),
            class_name: Some("custom".into()),
        };
        let html = render(FieldValues::new(), attributes);
        assert!(html.contains("sb-banner-wrapper custom"));
        assert!(html.contains("sb-banner alignwide anchor-intro"));
    }

    #[test]
    fn text_is_paragraphed_and_filtered() {
        let values = FieldValues::from([("text", json!("first\n\n<script>x</script>second"))]);
        let html = render(values, BlockAttributes::default());
        assert!(html.contains("<p>first</p>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn user_text_is_escaped() {
        let values = FieldValues::from([("title", json!("A <b>bold</b> claim"))]);
        let html = render(values, BlockAttributes::default());
        assert!(html.contains("A &lt;b&gt;bold&lt;/b&gt; claim"));
    }
}
