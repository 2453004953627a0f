use crate::ports::outbound::EnrichedPackage;
use crate::shared::Result;

/// ReportFormatter port for rendering the license report
pub trait ReportFormatter {
    /// Renders one report entry
    fn format_entry(&self, package: &EnrichedPackage) -> String;

    /// Renders the whole report: every entry, in order, with nothing in between
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn format(&self, packages: &[EnrichedPackage]) -> Result<String> {
        Ok(packages.iter().map(|p| self.format_entry(p)).collect())
    }
}
