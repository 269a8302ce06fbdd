//! Field schema declarations and value resolution
//!
//! `seedblocks-fields` is a standalone, schema-only crate that manages block
//! field schemas. It knows nothing about rendering or discovery — a schema is
//! a `fields.yaml` file declaring named, typed fields with defaults and
//! constraints, scoped to one block via a location predicate.
//!
//! # Architecture
//!
//! - **Schema-only**: Owns field definitions, not field values — values come
//!   from the host's resolution layer at render time
//! - **YAML on disk**: One `fields.yaml` per block directory, loaded as part
//!   of block registration
//! - **Pure resolution**: The [`resolve`] and [`rows`] modules turn a raw
//!   value set into defaulted, validated values without touching the schema
//!   registry

pub mod error;
pub mod loader;
pub mod resolve;
pub mod rows;
pub mod types;
pub mod values;

pub use error::{FieldsError, Result};
pub use loader::{load_field_group, FIELDS_FILE};
pub use types::{BlockLocation, FieldDef, FieldGroup, FieldType, ImageReturnFormat};
pub use values::{FieldValues, ImageValue};
