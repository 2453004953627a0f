/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the file system and the console.
pub mod enriched_package;
pub mod formatter;
pub mod license_repository;
pub mod lockfile_reader;
pub mod output_presenter;
pub mod progress_reporter;

pub use enriched_package::EnrichedPackage;
pub use formatter::ReportFormatter;
pub use license_repository::LicenseRepository;
pub use lockfile_reader::LockfileReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
