//! Deterministic CSS class-list assembly.
//!
//! Renderers build class lists the same way everywhere: base class first,
//! then conditional modifiers in a fixed order, then the caller-supplied
//! extra class. Empty values never produce a class.

use std::fmt;

/// An ordered CSS class list.
#[derive(Debug, Clone)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    /// Start a list with the block's base class.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            classes: vec![base.into()],
        }
    }

    /// Append a class. No-op for empty strings.
    pub fn push(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !class.is_empty() {
            self.classes.push(class);
        }
    }

    /// Append `{prefix}{value}` when `value` is non-empty
    /// (e.g. `alignwide`, `anchor-intro`).
    pub fn push_prefixed(&mut self, prefix: &str, value: &str) {
        if !value.is_empty() {
            self.classes.push(format!("{prefix}{value}"));
        }
    }

    /// The list as an escaped `class` attribute value.
    pub fn attr(&self) -> String {
        crate::escape::attr(&self.to_string())
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.classes.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_class_only() {
        let classes = ClassList::new("sb-banner");
        assert_eq!(classes.to_string(), "sb-banner");
    }

    #[test]
    fn fixed_order_assembly() {
        let mut classes = ClassList::new("sb-banner");
        classes.push_prefixed("align", "wide");
        classes.push_prefixed("anchor-", "intro");
        classes.push("sb-banner--height-large");
        classes.push("custom-class");
        assert_eq!(
            classes.to_string(),
            "sb-banner alignwide anchor-intro sb-banner--height-large custom-class"
        );
    }

    #[test]
    fn empty_values_are_skipped() {
        let mut classes = ClassList::new("sb-banner");
        classes.push_prefixed("align", "");
        classes.push("");
        assert_eq!(classes.to_string(), "sb-banner");
    }

    #[test]
    fn attr_escapes() {
        let mut classes = ClassList::new("sb-banner");
        classes.push(r#"x"y"#);
        assert_eq!(classes.attr(), "sb-banner x&quot;y");
    }
}
