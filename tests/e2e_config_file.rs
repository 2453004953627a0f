/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from a config file on disk through CLI
/// invocation to the written report, using `assert_cmd` and `tempfile`.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn create_test_project(dir: &Path) {
    let lockfile = r#"# yarn lockfile v1


"@types/node@*":
  version "20.11.0"

left-pad@^1.3.0:
  version "1.3.0"

react@^18.2.0:
  version "18.2.0"
"#;
    fs::write(dir.join("yarn.lock"), lockfile).unwrap();
    for name in ["@types/node", "left-pad", "react"] {
        fs::create_dir_all(dir.join("node_modules").join(name)).unwrap();
    }
}

fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

fn packages_in(report: &str) -> Vec<String> {
    report
        .lines()
        .filter_map(|l| l.strip_prefix("Package: "))
        .map(String::from)
        .collect()
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_exclude_packages() {
        let project = TempDir::new().unwrap();
        let cwd = TempDir::new().unwrap();
        create_test_project(project.path());
        write_config(
            &project.path().join("license-gatherer.config.yml"),
            "exclude_packages:\n  - \"@types/*\"\n",
        );

        cargo_bin_cmd!("license-gatherer")
            .current_dir(cwd.path())
            .arg(project.path())
            .assert()
            .success();

        let report = fs::read_to_string(cwd.path().join("LICENSEALL.md")).unwrap();
        assert_eq!(packages_in(&report), vec!["left-pad", "react"]);
    }

    #[test]
    fn test_auto_discovery_applies_output() {
        let project = TempDir::new().unwrap();
        let cwd = TempDir::new().unwrap();
        create_test_project(project.path());
        write_config(
            &project.path().join("license-gatherer.config.yml"),
            "output: THIRD_PARTY.md\n",
        );

        cargo_bin_cmd!("license-gatherer")
            .current_dir(cwd.path())
            .arg(project.path())
            .assert()
            .success();

        assert!(cwd.path().join("THIRD_PARTY.md").is_file());
        assert!(!cwd.path().join("LICENSEALL.md").exists());
    }

    #[test]
    fn test_no_config_uses_defaults() {
        let project = TempDir::new().unwrap();
        let cwd = TempDir::new().unwrap();
        create_test_project(project.path());

        cargo_bin_cmd!("license-gatherer")
            .current_dir(cwd.path())
            .arg(project.path())
            .assert()
            .success();

        let report = fs::read_to_string(cwd.path().join("LICENSEALL.md")).unwrap();
        assert_eq!(
            packages_in(&report),
            vec!["@types/node", "left-pad", "react"]
        );
    }
}

// ============================================================================
// Explicit --config Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path() {
        let project = TempDir::new().unwrap();
        let cwd = TempDir::new().unwrap();
        create_test_project(project.path());
        let config_path = cwd.path().join("ci.yml");
        write_config(&config_path, "exclude_packages:\n  - react\n");

        cargo_bin_cmd!("license-gatherer")
            .current_dir(cwd.path())
            .arg(project.path())
            .arg("--config")
            .arg(&config_path)
            .assert()
            .success();

        let report = fs::read_to_string(cwd.path().join("LICENSEALL.md")).unwrap();
        assert_eq!(packages_in(&report), vec!["@types/node", "left-pad"]);
    }

    #[test]
    fn test_explicit_config_missing_is_application_error() {
        let project = TempDir::new().unwrap();
        let cwd = TempDir::new().unwrap();
        create_test_project(project.path());

        cargo_bin_cmd!("license-gatherer")
            .current_dir(cwd.path())
            .arg(project.path())
            .args(["-c", "/nonexistent/config.yml"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read config file"));

        assert!(!cwd.path().join("LICENSEALL.md").exists());
    }

    #[test]
    fn test_invalid_yaml_is_application_error() {
        let project = TempDir::new().unwrap();
        let cwd = TempDir::new().unwrap();
        create_test_project(project.path());
        write_config(
            &project.path().join("license-gatherer.config.yml"),
            "exclude_packages: [[[broken",
        );

        cargo_bin_cmd!("license-gatherer")
            .current_dir(cwd.path())
            .arg(project.path())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse config file"));
    }

    #[test]
    fn test_unknown_field_warns() {
        let project = TempDir::new().unwrap();
        let cwd = TempDir::new().unwrap();
        create_test_project(project.path());
        write_config(
            &project.path().join("license-gatherer.config.yml"),
            "format: json\n",
        );

        cargo_bin_cmd!("license-gatherer")
            .current_dir(cwd.path())
            .arg(project.path())
            .assert()
            .success()
            .stderr(predicate::str::contains("Unknown config field 'format'"));
    }
}

// ============================================================================
// CLI / Config Merge Tests
// ============================================================================

mod merge_tests {
    use super::*;

    #[test]
    fn test_cli_output_overrides_config() {
        let project = TempDir::new().unwrap();
        let cwd = TempDir::new().unwrap();
        create_test_project(project.path());
        write_config(
            &project.path().join("license-gatherer.config.yml"),
            "output: FROM_CONFIG.md\n",
        );

        cargo_bin_cmd!("license-gatherer")
            .current_dir(cwd.path())
            .arg(project.path())
            .args(["-o", "FROM_CLI.md"])
            .assert()
            .success();

        assert!(cwd.path().join("FROM_CLI.md").is_file());
        assert!(!cwd.path().join("FROM_CONFIG.md").exists());
    }

    #[test]
    fn test_cli_and_config_excludes_combine() {
        let project = TempDir::new().unwrap();
        let cwd = TempDir::new().unwrap();
        create_test_project(project.path());
        write_config(
            &project.path().join("license-gatherer.config.yml"),
            "exclude_packages:\n  - \"@types/*\"\n",
        );

        cargo_bin_cmd!("license-gatherer")
            .current_dir(cwd.path())
            .arg(project.path())
            .args(["-e", "left-pad"])
            .assert()
            .success();

        let report = fs::read_to_string(cwd.path().join("LICENSEALL.md")).unwrap();
        assert_eq!(packages_in(&report), vec!["react"]);
    }
}
