//! Loads `fields.yaml` schema declarations from block directories.

use crate::error::Result;
use crate::types::FieldGroup;
use std::path::Path;

/// The per-block schema file name.
pub const FIELDS_FILE: &str = "fields.yaml";

/// Load the optional field schema from a block directory.
///
/// A missing file is absence, not an error — the block registers without
/// fields. A malformed file is an error the caller is expected to swallow
/// (with a diagnostic) so one broken schema does not block registration of
/// the other blocks.
pub fn load_field_group(dir: &Path) -> Result<Option<FieldGroup>> {
    let path = dir.join(FIELDS_FILE);
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)?;
    let group: FieldGroup = serde_yaml::from_str(&content)?;
    tracing::debug!(?path, key = %group.key, fields = group.fields.len(), "loaded field schema");
    Ok(Some(group))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const BANNER_FIELDS: &str = r#"
key: group_banner_block
title: Banner Block Fields
fields:
  - name: title
    type:
      kind: text
  - name: heading_type
    type:
      kind: select
      choices: [h1, h2, h3, h4]
    default: h2
location:
  block: seedblocks/banner
"#;

    #[test]
    fn missing_file_is_none() {
        let tmp = TempDir::new().unwrap();
        assert!(load_field_group(tmp.path()).unwrap().is_none());
    }

    #[test]
    fn loads_valid_schema() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(FIELDS_FILE), BANNER_FIELDS).unwrap();

        let group = load_field_group(tmp.path()).unwrap().unwrap();
        assert_eq!(group.key, "group_banner_block");
        assert_eq!(group.fields.len(), 2);
        assert!(group.location.matches("seedblocks/banner"));
    }

    #[test]
    fn malformed_schema_is_error() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(FIELDS_FILE), "fields: [unclosed").unwrap();
        assert!(load_field_group(tmp.path()).is_err());
    }
}
