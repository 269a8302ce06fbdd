//! Text and image block — a two column split with a configurable ratio, an
//! image on either side, and a nested-content text column.

use crate::classes::ClassList;
use crate::context::{BlockRenderer, RenderContext};
use crate::escape;
use crate::image::ImageTag;
use seedblocks_fields::{resolve, ImageValue};

const POSITION_CHOICES: &[&str] = &["left", "right"];
const RATIO_CHOICES: &[&str] = &["25-75", "30-70", "50-50", "70-30", "75-25"];
const ALIGN_CHOICES: &[&str] = &["left", "center", "right"];
const LAYOUT_CHOICES: &[&str] = &["normal", "cover"];

pub struct TextImageRenderer;

/// Split a `text-image` ratio into column percentages, `(50, 50)` when the
/// value does not parse.
fn ratio_widths(ratio: &str) -> (u32, u32) {
    let mut parts = ratio.splitn(2, '-');
    let text = parts.next().and_then(|p| p.parse().ok());
    let image = parts.next().and_then(|p| p.parse().ok());
    match (text, image) {
        (Some(text), Some(image)) => (text, image),
        _ => (50, 50),
    }
}

impl BlockRenderer for TextImageRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let values = ctx.values;
        let lead_text = resolve::text(values, "lead_text");
        let image = resolve::image(values, "image");
        let image_position = resolve::choice(values, "image_position", POSITION_CHOICES, "left");
        let layout_ratio = resolve::choice(values, "layout_ratio", RATIO_CHOICES, "50-50");
        let text_align = resolve::choice(values, "text_align", ALIGN_CHOICES, "center");
        let image_layout = resolve::choice(values, "image_layout", LAYOUT_CHOICES, "normal");
        let (text_width, image_width) = ratio_widths(&layout_ratio);

        let mut wrapper = ClassList::new("sb-text-image");
        wrapper.push_prefixed("align", ctx.attributes.align());
        wrapper.push_prefixed("anchor-", ctx.attributes.anchor());
        wrapper.push(format!("sb-text-image--position-{image_position}"));
        wrapper.push(format!("sb-text-image--layout-{layout_ratio}"));
        wrapper.push(ctx.attributes.class_name());

        let image_column = image.and_then(|image| {
            let tag = match image {
                ImageValue::Id(id) => {
                    let img = ImageTag::new(id, ctx.media);
                    if image_layout == "cover" {
                        img.cover("full", &[])
                    } else {
                        img.simple("full", &[])
                    }
                }
                ImageValue::Resolved { url, alt } => {
                    let url = escape::url(&url);
                    (!url.is_empty()).then(|| {
                        format!(
                            r#"<img class="sb-img" src="{url}" alt="{}" loading="lazy" decoding="async" />"#,
                            escape::attr(&alt)
                        )
                    })
                }
            }?;
            let mut classes = ClassList::new("sb-text-image__image");
            if image_layout == "cover" {
                classes.push("sb-text-image__image--cover");
            }
            Some(format!(
                "<div class=\"{}\" style=\"flex: 0 0 {image_width}%;\">\n{tag}\n</div>\n",
                classes.attr()
            ))
        });

        let mut text_column = String::new();
        text_column.push_str(&format!(
            "<div class=\"sb-text-image__text\" style=\"flex: 0 0 {text_width}%;\">\n"
        ));
        text_column.push_str(&format!(
            "<div class=\"sb-text-image__text-wrapper sb-text-image__text-wrapper--align-{text_align}\">\n"
        ));
        if !lead_text.is_empty() {
            text_column.push_str(&format!(
                "<div class=\"sb-text-image__lead-text\">{}</div>\n",
                escape::text(&lead_text)
            ));
        }
        text_column.push_str(&format!(
            "<div class=\"sb-text-image__content\">\n{}\n</div>\n",
            ctx.inner_content
        ));
        text_column.push_str("</div>\n</div>\n");

        let mut html = String::new();
        html.push_str(&format!("<div class=\"{}\">\n", wrapper.attr()));
        html.push_str("<div class=\"sb-text-image__container\">\n");
        match image_column {
            Some(column) if image_position == "left" => {
                html.push_str(&column);
                html.push_str(&text_column);
            }
            Some(column) => {
                html.push_str(&text_column);
                html.push_str(&column);
            }
            None => html.push_str(&text_column),
        }
        html.push_str("</div>\n</div>\n");
        html
    }
}
