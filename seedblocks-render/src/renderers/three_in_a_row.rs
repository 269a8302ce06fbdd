//! Three-in-a-row block — an optional intro plus a repeated row of
//! icon / title / text items.

use crate::classes::ClassList;
use crate::context::{BlockRenderer, RenderContext};
use crate::escape;
use seedblocks_fields::{rows, FieldDef, FieldType};

const ICON_CHOICES: &[&str] = &["box", "checkmark", "dialog"];

pub struct ThreeInARowRenderer;

fn sub_field(key: &str, name: &str, type_: FieldType) -> FieldDef {
    FieldDef {
        key: Some(key.to_string()),
        name: name.to_string(),
        label: None,
        type_,
        default: None,
        placeholder: None,
        instructions: None,
        required: false,
    }
}

/// The repeater schema the block's rows normalize against. Raw value maps
/// may key rows by either the sub-field name or this key.
fn items_def() -> FieldDef {
    sub_field(
        "field_three_in_a_row_items",
        "items",
        FieldType::Repeater {
            sub_fields: vec![
                sub_field(
                    "field_three_in_a_row_item_icon",
                    "icon",
                    FieldType::Select {
                        choices: ICON_CHOICES.iter().map(|c| c.to_string()).collect(),
                    },
                ),
                sub_field(
                    "field_three_in_a_row_item_title",
                    "item_title",
                    FieldType::Text,
                ),
                sub_field(
                    "field_three_in_a_row_item_text",
                    "item_text",
                    FieldType::Wysiwyg,
                ),
            ],
            button_label: None,
        },
    )
}

impl BlockRenderer for ThreeInARowRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let values = ctx.values;
        let title = seedblocks_fields::resolve::text(values, "title");
        let text = seedblocks_fields::resolve::text(values, "text");
        let items = rows::normalize(values, &items_def());

        let mut wrapper = ClassList::new("sb-three-in-a-row");
        wrapper.push_prefixed("align", ctx.attributes.align());
        wrapper.push_prefixed("anchor-", ctx.attributes.anchor());
        wrapper.push(ctx.attributes.class_name());

        let mut html = String::new();
        html.push_str(&format!("<div class=\"{}\">\n", wrapper.attr()));
        html.push_str("<div class=\"sb-three-in-a-row__container\">\n");

        if !title.is_empty() {
            html.push_str(&format!(
                "<h2 class=\"sb-three-in-a-row__title\">{}</h2>\n",
                escape::text(&title)
            ));
        }
        if !text.is_empty() {
            html.push_str(&format!(
                "<div class=\"sb-three-in-a-row__text\">\n{}\n</div>\n",
                escape::rich_text(&escape::autop(&text))
            ));
        }

        let rendered_items: Vec<String> = items
            .iter()
            .filter_map(|item| {
                let icon = seedblocks_fields::resolve::choice(item, "icon", ICON_CHOICES, "");
                let item_title = seedblocks_fields::resolve::text(item, "item_title");
                let item_text = seedblocks_fields::resolve::text(item, "item_text");
                if icon.is_empty() && item_title.is_empty() && item_text.is_empty() {
                    return None;
                }

                let mut out = String::from("<div class=\"sb-three-in-a-row__item\">\n");
                if !icon.is_empty() {
                    out.push_str(&format!(
                        "<div class=\"sb-three-in-a-row__icon sb-three-in-a-row__icon--{icon}\"></div>\n"
                    ));
                }
                if !item_title.is_empty() {
                    out.push_str(&format!(
                        "<h3 class=\"sb-three-in-a-row__item-title\">{}</h3>\n",
                        escape::text(&item_title)
                    ));
                }
                if !item_text.is_empty() {
                    out.push_str(&format!(
                        "<div class=\"sb-three-in-a-row__item-text\">\n{}\n</div>\n",
                        escape::rich_text(&item_text)
                    ));
                }
                out.push_str("</div>\n");
                Some(out)
            })
            .collect();

        if !rendered_items.is_empty() {
            html.push_str("<div class=\"sb-three-in-a-row__items\">\n");
            for item in &rendered_items {
                html.push_str(item);
            }
            html.push_str("</div>\n");
        }

        html.push_str("</div>\n</div>\n");
        html
    }
}
