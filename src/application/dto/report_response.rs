use crate::ports::outbound::EnrichedPackage;

/// A lockfile block that could not be parsed and was left out of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Position of the block in the lockfile (0 is the preamble)
    pub block_index: usize,
    pub reason: String,
}

/// ReportResponse - Internal response DTO from the license report use case
#[derive(Debug, Clone)]
pub struct ReportResponse {
    /// Packages in lockfile order, each with its license text if one was found
    pub enriched_packages: Vec<EnrichedPackage>,
    /// Malformed blocks that were skipped
    pub skipped_entries: Vec<SkippedEntry>,
}

impl ReportResponse {
    pub fn new(enriched_packages: Vec<EnrichedPackage>, skipped_entries: Vec<SkippedEntry>) -> Self {
        Self {
            enriched_packages,
            skipped_entries,
        }
    }

    pub fn license_texts_found(&self) -> usize {
        self.enriched_packages
            .iter()
            .filter(|p| p.has_license_text())
            .count()
    }
}
