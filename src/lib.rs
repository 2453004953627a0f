//! license-gatherer - License report generator for Yarn projects
//!
//! Reads a project's `yarn.lock`, resolves each entry to a package name and
//! version, looks up `node_modules/<name>/LICENSE`, and renders everything
//! into a single plain-text report (`LICENSEALL.md` by default).
//!
//! # Architecture
//!
//! - **Domain Layer** (`license_report`): lockfile splitting, entry parsing, filtering
//! - **Application Layer** (`application`): the report use case and its DTOs
//! - **Ports** (`ports`): interfaces to the file system and console
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): error types, result alias, safety checks
//!
//! # Example
//!
//! ```no_run
//! use license_gatherer::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let project = PathBuf::from("./web");
//!
//! let use_case = GenerateReportUseCase::new(
//!     FileSystemReader::new(),
//!     NodeModulesLicenseRepository::for_project(&project),
//!     StderrProgressReporter::new(),
//! );
//!
//! let response = use_case.execute(ReportRequest::new(project, vec![]))?;
//! let report = LicenseTextFormatter::new().format(&response.enriched_packages)?;
//! FileSystemWriter::new(PathBuf::from("LICENSEALL.md")).present(&report)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod license_report;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, NodeModulesLicenseRepository, DEFAULT_OUTPUT_FILE,
    };
    pub use crate::adapters::outbound::formatters::LicenseTextFormatter;
    pub use crate::application::dto::{ReportRequest, ReportResponse, SkippedEntry};
    pub use crate::application::use_cases::GenerateReportUseCase;
    pub use crate::license_report::domain::{LicenseText, LockfileBlock, PackageRecord};
    pub use crate::license_report::services::{
        EntryParseError, EntryParser, LockfileSplitter, PackageFilter,
    };
    pub use crate::ports::outbound::{
        EnrichedPackage, LicenseRepository, LockfileReader, OutputPresenter, ProgressReporter,
        ReportFormatter,
    };
    pub use crate::shared::error::{ExitCode, GathererError};
    pub use crate::shared::Result;
}
