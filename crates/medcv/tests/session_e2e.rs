#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A `medcv` command isolated from the user's config and environment.
fn medcv_cmd(temp: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("medcv"));
    for var in [
        "MEDCV_TEMPLATE",
        "MEDCV_EXPORT_DIR",
        "MEDCV_PAGE_MARGIN",
        "MEDCV_PAGE_UNIT",
        "MEDCV_PAGE_FORMAT",
        "MEDCV_PAGE_ORIENTATION",
        "MEDCV_LOG",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd.arg("--config").arg(temp.join("medcv.toml"));
    cmd
}

const SCRIPT: &str = r#"
# Personal details
personal firstName Jane
personal lastName Doe
personal email jane.doe@example.org

draft medical institution "City Hospital"
draft medical degree MBBS
draft medical startDate 2010-06-01
submit medical

draft experience role "Senior Resident"
draft experience institution 'St. Mary''s'
draft experience startDate 2016-07-01
draft experience endDate 2019-06-30
submit experience

hobby add Chess
pubtext "Doe J. A letter. BMJ 2020."
preview
export
"#;

#[test]
fn script_builds_previews_and_exports() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("cv.txt");
    fs::write(&script, SCRIPT).unwrap();
    let out = temp.path().join("out");
    fs::create_dir_all(&out).unwrap();

    medcv_cmd(temp.path())
        .arg("run")
        .arg(&script)
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("2010-06-01 — Present"))
        .stdout(predicate::str::contains("2016-07-01 — 2019-06-30"))
        .stdout(predicate::str::contains("St. Marys"))
        .stdout(predicate::str::contains("Jane_Doe_Resume.html"));

    let html = fs::read_to_string(out.join("Jane_Doe_Resume.html")).unwrap();
    assert!(html.contains("template-professional"));
    assert!(html.contains("Doe J. A letter. BMJ 2020."));
}

#[test]
fn failing_script_line_stops_the_run() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("cv.txt");
    fs::write(&script, "hobby add Chess\nsubmit award\nhobby add Golf\n").unwrap();

    medcv_cmd(temp.path())
        .arg("run")
        .arg(&script)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Chess"))
        .stdout(predicate::str::contains("Golf").not())
        .stderr(predicate::str::contains("Error: line 2: submit award"))
        .stderr(predicate::str::contains("missing title"));
}

#[test]
fn missing_script_is_reported() {
    let temp = TempDir::new().unwrap();
    medcv_cmd(temp.path())
        .args(["run", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read does-not-exist.txt"));
}

#[test]
fn options_lists_enumerated_values() {
    let temp = TempDir::new().unwrap();
    medcv_cmd(temp.path())
        .arg("options")
        .assert()
        .success()
        .stdout(predicate::str::contains("MBBS"))
        .stdout(predicate::str::contains("Fellowship"))
        .stdout(predicate::str::contains("executive"));
}

#[test]
fn interactive_session_reports_errors_and_continues() {
    let temp = TempDir::new().unwrap();
    medcv_cmd(temp.path())
        .write_stdin("template classic\npersonal firstName Jane\npreview\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown template: classic"))
        .stdout(predicate::str::contains("Jane"));
}

#[test]
fn template_flag_overrides_config_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("medcv.toml"), "template = \"executive\"\n").unwrap();

    medcv_cmd(temp.path())
        .arg("session")
        .write_stdin("preview\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Template: executive"));

    medcv_cmd(temp.path())
        .args(["session", "--template", "professional"])
        .write_stdin("preview\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Template: professional"));
}

#[test]
fn legacy_modern_template_is_accepted() {
    let temp = TempDir::new().unwrap();
    medcv_cmd(temp.path())
        .args(["--template", "modern"])
        .write_stdin("preview\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Template: professional"));
}
