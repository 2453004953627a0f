use crate::application::dto::{ReportRequest, ReportResponse, SkippedEntry};
use crate::license_report::domain::PackageRecord;
use crate::license_report::services::{EntryParser, LockfileSplitter, PackageFilter};
use crate::ports::outbound::{EnrichedPackage, LicenseRepository, LockfileReader, ProgressReporter};
use crate::shared::Result;


/// GenerateReportUseCase - Core use case for building the license report
///
/// Reads yarn.lock, turns every entry after the preamble into a package
/// record, and attaches the license text found on disk. Malformed entries
/// are skipped with a warning instead of aborting the run.
///
/// # Type Parameters
/// * `LR` - LockfileReader implementation
/// * `LREPO` - LicenseRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateReportUseCase<LR, LREPO, PR> {
    lockfile_reader: LR,
    license_repository: LREPO,
    progress_reporter: PR,
}

impl<LR, LREPO, PR> GenerateReportUseCase<LR, LREPO, PR>
where
    LR: LockfileReader,
    LREPO: LicenseRepository,
    PR: ProgressReporter,
{
    /// Creates a new GenerateReportUseCase with injected dependencies
    pub fn new(lockfile_reader: LR, license_repository: LREPO, progress_reporter: PR) -> Self {
        Self {
            lockfile_reader,
            license_repository,
            progress_reporter,
        }
    }

    pub fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        // Step 1: Read lockfile
        self.progress_reporter.report(&format!(
            "📖 Loading yarn.lock file from: {}",
            request.project_path.display()
        ));

        let content = self.lockfile_reader.read_lockfile(&request.project_path)?;

        // Step 2: Split and parse entries
        let (packages, skipped_entries) = self.parse_entries(&content);

        self.progress_reporter
            .report(&format!("✅ Detected {} package(s)", packages.len()));

        // Step 3: Apply exclusion filters
        let packages = self.apply_filters(packages, request.exclude_patterns)?;

        // Step 4: Attach license texts
        self.progress_reporter
            .report("🔍 Looking up license texts in node_modules...");

        let enriched_packages = self.enrich_packages_with_license_text(packages);

        Ok(ReportResponse::new(enriched_packages, skipped_entries))
    }

    fn parse_entries(&self, content: &str) -> (Vec<PackageRecord>, Vec<SkippedEntry>) {
        let normalized = LockfileSplitter::normalize(content);
        let mut packages = Vec::new();
        let mut skipped = Vec::new();

        for block in LockfileSplitter::entries(&normalized) {
            if block.is_blank() {
                continue;
            }

            match EntryParser::parse(&block) {
                Ok(record) => packages.push(record),
                Err(e) => {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: Skipping malformed yarn.lock entry: {}",
                        e
                    ));
                    skipped.push(SkippedEntry {
                        block_index: block.index(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        (packages, skipped)
    }

    fn apply_filters(
        &self,
        packages: Vec<PackageRecord>,
        exclude_patterns: Vec<String>,
    ) -> Result<Vec<PackageRecord>> {
        if exclude_patterns.is_empty() {
            return Ok(packages);
        }

        let filter = PackageFilter::new(exclude_patterns)?;
        let original_count = packages.len();
        let filtered = filter.filter_packages(packages);

        let excluded_count = original_count - filtered.len();
        if excluded_count > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Excluded {} package(s) based on filters",
                excluded_count
            ));
        }

        for pattern in filter.get_unmatched_patterns() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Exclude pattern '{}' did not match any dependencies.",
                pattern
            ));
        }

        Ok(filtered)
    }

    /// Looks up the license text of every package. A refused lookup is
    /// reported and treated like a missing file.
    fn enrich_packages_with_license_text(
        &self,
        packages: Vec<PackageRecord>,
    ) -> Vec<EnrichedPackage> {
        let total = packages.len();
        let mut enriched = Vec::with_capacity(total);
        let mut found = 0;

        for (idx, package) in packages.into_iter().enumerate() {
            self.progress_reporter
                .report_progress(idx + 1, total, Some(package.name()));

            let license_text = match self.license_repository.load_license_text(package.name()) {
                Ok(text) => text,
                Err(e) => {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: Failed to look up license text for {}: {}",
                        package, e
                    ));
                    None
                }
            };

            if license_text.is_some() {
                found += 1;
            }
            enriched.push(EnrichedPackage::new(package, license_text));
        }

        self.progress_reporter.report_completion(&format!(
            "✅ License text lookup complete: {} found out of {}, {} not found",
            found,
            total,
            total - found
        ));

        enriched
    }
}
