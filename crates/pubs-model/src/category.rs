use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Category identifier shared by a group and all of its records
/// (e.g. `journal`, `conference`, `book`).
///
/// Tags are compared exactly; only surrounding whitespace is removed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryTag(String);

impl CategoryTag {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidCategory(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Heading used when the source does not name the group, e.g.
    /// `journal` becomes `Journal`.
    pub fn default_heading(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CategoryTag {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategoryTag> for String {
    fn from(tag: CategoryTag) -> Self {
        tag.0
    }
}

impl AsRef<str> for CategoryTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let tag = CategoryTag::new("  journal ").unwrap();
        assert_eq!(tag.as_str(), "journal");
    }

    #[test]
    fn rejects_blank_tags() {
        assert_eq!(
            CategoryTag::new("   "),
            Err(ModelError::InvalidCategory("   ".to_string()))
        );
    }

    #[test]
    fn default_heading_capitalizes_first_letter() {
        let tag = CategoryTag::new("conference").unwrap();
        assert_eq!(tag.default_heading(), "Conference");
    }
}
