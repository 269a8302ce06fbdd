//! Core field schema types.
//!
//! All types serialize to/from YAML via serde. A `fields.yaml` file
//! deserializes to one [`FieldGroup`]: a list of [`FieldDef`]s plus the
//! location predicate binding the group to a single block.

use serde::{Deserialize, Serialize};

/// How an image field value is handed to renderers.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ImageReturnFormat {
    /// The attachment identifier, resolved through the media store at render time.
    #[default]
    Id,
    /// A pre-resolved attributes object (`url`, `alt`, dimensions).
    Object,
}

/// The type of a field — determines what shape the value takes and which
/// constraints apply at render time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FieldType {
    Text,
    Textarea {
        #[serde(default = "default_textarea_rows")]
        rows: u32,
    },
    /// Rich text editing — values pass through the constrained-markup escape.
    Wysiwyg,
    Url,
    ColorPicker,
    Image {
        #[serde(default)]
        return_format: ImageReturnFormat,
    },
    Select {
        choices: Vec<String>,
    },
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        step: Option<i64>,
    },
    /// Repeatable group of sub-fields, one nesting level.
    Repeater {
        sub_fields: Vec<FieldDef>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        button_label: Option<String>,
    },
}

fn default_textarea_rows() -> u32 {
    4
}

/// A field definition — the complete schema for a single named input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldDef {
    /// Stable storage key. Raw value maps may use this instead of `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub type_: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default)]
    pub required: bool,
}

impl FieldDef {
    /// The enumerated choice set, for `select` fields.
    pub fn choices(&self) -> Option<&[String]> {
        match &self.type_ {
            FieldType::Select { choices } => Some(choices),
            _ => None,
        }
    }

    /// The declared sub-fields, for `repeater` fields.
    pub fn sub_fields(&self) -> Option<&[FieldDef]> {
        match &self.type_ {
            FieldType::Repeater { sub_fields, .. } => Some(sub_fields),
            _ => None,
        }
    }

    /// The declared default as a string, when it has one.
    pub fn default_str(&self) -> Option<&str> {
        self.default.as_ref().and_then(|v| v.as_str())
    }
}

/// Location predicate: a field group applies to exactly one block type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlockLocation {
    /// Qualified block name, e.g. `seedblocks/banner`.
    pub block: String,
}

impl BlockLocation {
    /// Whether this group is bound to the given qualified block name.
    pub fn matches(&self, qualified_name: &str) -> bool {
        self.block == qualified_name
    }
}

/// A field group — the full editable-field schema for one block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldGroup {
    pub key: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub fields: Vec<FieldDef>,
    pub location: BlockLocation,
}

impl FieldGroup {
    /// Look up a field definition by name.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}
