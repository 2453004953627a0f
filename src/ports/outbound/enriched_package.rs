use crate::license_report::domain::{LicenseText, PackageRecord};

/// EnrichedPackage represents a package record with its license text
///
/// This is used to pass package data from the use case to the report formatter.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedPackage {
    pub package: PackageRecord,
    pub license_text: Option<LicenseText>,
}

impl EnrichedPackage {
    pub fn new(package: PackageRecord, license_text: Option<LicenseText>) -> Self {
        Self {
            package,
            license_text,
        }
    }

    pub fn has_license_text(&self) -> bool {
        self.license_text.is_some()
    }
}
