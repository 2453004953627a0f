mod cli;

use cli::Args;
use license_gatherer::adapters::outbound::filesystem::{LOCKFILE_NAME, NODE_MODULES_DIR};
use license_gatherer::config::{self, ConfigFile};
use license_gatherer::prelude::*;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn run() -> Result<()> {
    let args = Args::parse_args();
    let progress_reporter = StderrProgressReporter::new();

    let project_path = PathBuf::from(&args.project_path);
    validate_project_path(&project_path)?;

    let config = load_config(args.config.as_deref(), &project_path)?;
    if let Some(cfg) = config.as_ref() {
        config::warn_unknown_fields(cfg, &progress_reporter);
    }
    let settings = config::resolve_settings(args.output, args.exclude, config);

    let use_case = GenerateReportUseCase::new(
        FileSystemReader::new(),
        NodeModulesLicenseRepository::for_project(&project_path),
        &progress_reporter,
    );

    let response = use_case.execute(ReportRequest::new(
        project_path,
        settings.exclude_patterns,
    ))?;

    progress_reporter.report("📝 Writing license report...");
    let report = LicenseTextFormatter::new().format(&response.enriched_packages)?;

    let writer = FileSystemWriter::new(settings.output_path);
    writer.present(&report)?;

    if !response.skipped_entries.is_empty() {
        progress_reporter.report_error(&format!(
            "⚠️  Warning: {} malformed yarn.lock entr{} left out of the report",
            response.skipped_entries.len(),
            if response.skipped_entries.len() == 1 { "y was" } else { "ies were" }
        ));
    }
    progress_reporter.report(&format!(
        "✅ Output complete: {} ({} package(s))",
        writer.output_path().display(),
        response.enriched_packages.len()
    ));

    Ok(())
}

fn load_config(explicit: Option<&str>, project_path: &Path) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => config::load_config_from_path(Path::new(path)).map(Some),
        None => config::discover_config(project_path),
    }
}

/// Checks, in order, that the project path is a directory holding a
/// yarn.lock file and a node_modules directory.
fn validate_project_path(path: &Path) -> Result<()> {
    if !path.is_dir() {
        let reason = if path.exists() {
            "Not a directory"
        } else {
            "Directory does not exist"
        };
        return Err(GathererError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
        .into());
    }

    let lockfile_path = path.join(LOCKFILE_NAME);
    if !lockfile_path.is_file() {
        return Err(GathererError::LockfileNotFound {
            path: lockfile_path,
        }
        .into());
    }

    let node_modules_path = path.join(NODE_MODULES_DIR);
    if !node_modules_path.is_dir() {
        return Err(GathererError::NodeModulesNotFound {
            path: node_modules_path,
        }
        .into());
    }

    Ok(())
}
