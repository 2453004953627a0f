/// Placeholder printed when a package ships no readable LICENSE file
pub const LICENSE_TEXT_NOT_FOUND: &str = "<license text not found>";

/// LicenseText value object holding the verbatim contents of a LICENSE file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseText(String);

impl LicenseText {
    /// Wraps file contents. An empty file counts as no license text.
    pub fn new(text: String) -> Option<Self> {
        if text.is_empty() {
            None
        } else {
            Some(Self(text))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Text to print in the report for an optional license
    pub fn or_placeholder(text: Option<&LicenseText>) -> &str {
        text.map(LicenseText::as_str).unwrap_or(LICENSE_TEXT_NOT_FOUND)
    }
}
