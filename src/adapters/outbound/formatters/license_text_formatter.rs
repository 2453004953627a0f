use crate::license_report::domain::LicenseText;
use crate::ports::outbound::{EnrichedPackage, ReportFormatter};

/// Literal written in the `License:` field; the license type is not detected
pub const LICENSE_FIELD_PLACEHOLDER: &str = "<license>";

/// Line closing every entry
const ENTRY_SEPARATOR: &str = "--------------------------------";

/// LicenseTextFormatter adapter producing the `LICENSEALL.md` entry layout:
///
/// ```text
/// Package: <name>
/// Version: <version>
/// License: <license>
/// License Text:
///
/// <license text or "<license text not found>">
/// --------------------------------
/// ```
pub struct LicenseTextFormatter;

impl LicenseTextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LicenseTextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for LicenseTextFormatter {
    fn format_entry(&self, package: &EnrichedPackage) -> String {
        format!(
            "Package: {}\nVersion: {}\nLicense: {}\nLicense Text:\n\n{}\n{}\n",
            package.package.name(),
            package.package.version(),
            LICENSE_FIELD_PLACEHOLDER,
            LicenseText::or_placeholder(package.license_text.as_ref()),
            ENTRY_SEPARATOR,
        )
    }
}
