//! Option items for choice-based fields

/// A selectable option: stable value plus display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Look up the label for a stored value, falling back to the value itself
pub fn label_for<'a>(options: &'a [Choice], value: &'a str) -> &'a str {
    options
        .iter()
        .find(|c| c.value == value)
        .map_or(value, |c| c.label.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_label_for_known_value() {
        let options = vec![Choice::new("en", "English"), Choice::new("de", "German")];
        assert_eq!(label_for(&options, "de"), "German");
    }

    #[test]
    fn test_label_for_unknown_value_falls_back() {
        let options = vec![Choice::new("en", "English")];
        assert_eq!(label_for(&options, "xx"), "xx");
    }
}
