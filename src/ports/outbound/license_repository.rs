use crate::license_report::domain::LicenseText;
use crate::shared::Result;

/// LicenseRepository port for looking up the license text of an installed package
pub trait LicenseRepository {
    /// Loads the license text shipped with `package_name`
    ///
    /// # Returns
    /// - `Ok(Some(text))` when the package has a readable license file
    /// - `Ok(None)` when it has none; missing and unreadable files are
    ///   treated the same
    ///
    /// # Errors
    /// Returns an error only when the lookup itself is refused, e.g. a
    /// package name that would resolve outside the install directory.
    fn load_license_text(&self, package_name: &str) -> Result<Option<LicenseText>>;
}
