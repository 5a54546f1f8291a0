use crate::error::ConvertError;
use serde::{Deserialize, Serialize};

/// Tag names and character sets used while converting lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRules {
    /// Element name wrapped around the first `**` pair of a line
    pub bold_tag: String,

    /// Element name wrapped around the first `__` pair of a line
    pub italic_tag: String,

    /// Characters deleted from the inside of a `((...))` span
    pub removal_chars: String,

    /// Fragment emitted between two lines of the same paragraph
    pub line_break: String,
}

impl ConversionRules {
    /// Check that every rule can be turned into well-formed tags.
    pub fn validate(&self) -> Result<(), ConvertError> {
        validate_tag_name("bold_tag", &self.bold_tag)?;
        validate_tag_name("italic_tag", &self.italic_tag)?;
        if self.line_break.trim().is_empty() {
            return Err(ConvertError::InvalidRule(
                "line_break must not be blank".to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn bold_tags(&self) -> (String, String) {
        tag_pair(&self.bold_tag)
    }

    pub(crate) fn italic_tags(&self) -> (String, String) {
        tag_pair(&self.italic_tag)
    }
}

impl Default for ConversionRules {
    fn default() -> Self {
        Self {
            bold_tag: "b".to_string(),
            italic_tag: "em".to_string(),
            removal_chars: "Cc".to_string(),
            line_break: "<br/>".to_string(),
        }
    }
}

fn validate_tag_name(rule: &str, name: &str) -> Result<(), ConvertError> {
    if name.is_empty() {
        return Err(ConvertError::InvalidRule(format!(
            "{rule} must not be empty"
        )));
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ConvertError::InvalidRule(format!(
            "{rule} '{name}' is not a valid element name"
        )));
    }
    Ok(())
}

fn tag_pair(name: &str) -> (String, String) {
    (format!("<{name}>"), format!("</{name}>"))
}
