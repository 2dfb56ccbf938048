//! End-to-end tests for the npmup CLI
//!
//! These tests verify:
//! - Exit codes for success and failure scenarios
//! - Usage output for conflicting flags
//! - The exact package manager invocations, using a fake executable

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn npmup() -> Command {
    Command::cargo_bin("npmup").expect("binary should be built")
}

/// Create a project directory with the given package.json
fn create_project(package_json: &str) -> TempDir {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    fs::write(temp_dir.path().join("package.json"), package_json).unwrap();
    temp_dir
}

/// Write a fake package manager that reports `latest` for every package
/// and appends "<cwd> <args>" to a log file for each invocation.
#[cfg(unix)]
fn create_fake_package_manager(dir: &Path, latest: &str) -> (PathBuf, PathBuf) {
    use std::os::unix::fs::PermissionsExt;

    let log = dir.join("calls.log");
    let script = dir.join("fake-npm");
    let body = format!(
        "#!/bin/sh\n\
         echo \"$(pwd -P) $*\" >> '{log}'\n\
         if [ \"$1\" = \"show\" ]; then\n  echo \"{latest}\"\nfi\n\
         exit 0\n",
        log = log.display(),
        latest = latest
    );
    fs::write(&script, body).unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    (script, log)
}

#[cfg(unix)]
fn read_calls(log: &Path) -> Vec<String> {
    fs::read_to_string(log)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

mod cli_tests {
    use super::*;

    #[test]
    fn test_help_shows_usage() {
        npmup()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"))
            .stdout(predicate::str::contains("--ignore-devDependencies"));
    }

    #[test]
    fn test_version_flag() {
        npmup()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Scenario D: both skip flags
    #[test]
    fn test_conflicting_flags_print_usage_and_fail() {
        let temp_dir = tempfile::tempdir().unwrap();

        npmup()
            .args(["--no-color", "--ignore-dependencies", "--ignore-devDependencies"])
            .arg("--path")
            .arg(temp_dir.path())
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("Usage:"))
            .stdout(predicate::str::contains("Reading package.json").not())
            .stderr(predicate::str::contains("at the same time"));
    }

    /// Scenario C: no manifest
    #[test]
    fn test_missing_manifest_fails() {
        let temp_dir = tempfile::tempdir().unwrap();

        npmup()
            .arg("--no-color")
            .arg("--path")
            .arg(temp_dir.path())
            .arg("--package-manager")
            .arg("npmup-definitely-not-installed")
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("Please wait. Reading package.json..."))
            .stderr(predicate::str::contains("Error updating dependencies"))
            .stderr(predicate::str::contains("package.json not found"));
    }

    #[test]
    fn test_malformed_manifest_fails() {
        let temp_dir = create_project("{ this is not json");

        npmup()
            .arg("--no-color")
            .arg("--path")
            .arg(temp_dir.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to parse JSON"));
    }

    #[test]
    fn test_empty_manifest_succeeds_without_package_manager() {
        let temp_dir = create_project(r#"{"name": "nothing-to-do"}"#);

        npmup()
            .current_dir(temp_dir.path())
            .args(["--no-color", "--package-manager", "npmup-definitely-not-installed"])
            .assert()
            .success()
            .stdout(predicate::str::contains("0 dependencies ignored."))
            .stdout(predicate::str::contains("Everything updated successfully."));
    }
}

#[cfg(unix)]
mod package_manager_tests {
    use super::*;

    /// Scenario A: registry reports the declared version
    #[test]
    fn test_up_to_date_dependency_is_not_installed() {
        let project = create_project(r#"{"dependencies": {"left-pad": "1.0.0"}}"#);
        let tools = tempfile::tempdir().unwrap();
        let (script, log) = create_fake_package_manager(tools.path(), "1.0.0");

        npmup()
            .arg("--no-color")
            .arg("--path")
            .arg(project.path())
            .arg("--package-manager")
            .arg(&script)
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "left-pad is already up to date (current version: 1.0.0)",
            ))
            .stdout(predicate::str::contains("Everything updated successfully."));

        let calls = read_calls(&log);
        assert_eq!(calls.len(), 1);
        assert!(calls[0].ends_with("show left-pad version"));
    }

    /// Scenario B: registry reports a newer version
    #[test]
    fn test_outdated_dependency_is_installed_once() {
        let project = create_project(r#"{"dependencies": {"left-pad": "1.0.0"}}"#);
        let tools = tempfile::tempdir().unwrap();
        let (script, log) = create_fake_package_manager(tools.path(), "1.3.0");

        npmup()
            .arg("--no-color")
            .arg("--path")
            .arg(project.path())
            .arg("--package-manager")
            .arg(&script)
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Updating left-pad to 1.3.0 (old version: 1.0.0) [minor]...",
            ));

        let calls = read_calls(&log);
        let installs: Vec<&String> = calls.iter().filter(|c| c.contains(" install ")).collect();
        assert_eq!(installs.len(), 1);

        let project_dir = project.path().canonicalize().unwrap();
        let expected = format!("{} install left-pad@1.3.0", project_dir.display());
        assert_eq!(installs[0], &expected);
    }

    #[test]
    fn test_verbose_prints_package_manager_commands() {
        let project = create_project(r#"{"dependencies": {"left-pad": "1.0.0"}}"#);
        let tools = tempfile::tempdir().unwrap();
        let (script, _log) = create_fake_package_manager(tools.path(), "1.3.0");

        npmup()
            .args(["--no-color", "--verbose"])
            .arg("--path")
            .arg(project.path())
            .arg("--package-manager")
            .arg(&script)
            .assert()
            .success()
            .stdout(predicate::str::contains(format!(
                "> Running {} show left-pad version",
                script.display()
            )))
            .stdout(predicate::str::contains(format!(
                "> Running {} install left-pad@1.3.0 in ",
                script.display()
            )));
    }

    #[test]
    fn test_ignore_dependencies_skips_runtime_category() {
        let project = create_project(
            r#"{
                "dependencies": {"left-pad": "1.0.0", "react": "18.0.0"},
                "devDependencies": {"jest": "29.7.0"}
            }"#,
        );
        let tools = tempfile::tempdir().unwrap();
        let (script, log) = create_fake_package_manager(tools.path(), "29.7.0");

        npmup()
            .args(["--no-color", "--ignore-dependencies"])
            .arg("--path")
            .arg(project.path())
            .arg("--package-manager")
            .arg(&script)
            .assert()
            .success()
            .stdout(predicate::str::contains("2 dependencies ignored."));

        let calls = read_calls(&log);
        assert_eq!(calls.len(), 1);
        assert!(calls[0].ends_with("show jest version"));
    }

    #[test]
    fn test_failing_query_aborts_run() {
        let project = create_project(r#"{"dependencies": {"a": "1.0.0", "b": "1.0.0"}}"#);

        npmup()
            .arg("--no-color")
            .arg("--path")
            .arg(project.path())
            .args(["--package-manager", "false"])
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("Everything updated successfully.").not())
            .stderr(predicate::str::contains("failed to check version for a"));
    }
}
