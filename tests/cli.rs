use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn opskit(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("opskit").unwrap();
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

fn generate(home: &Path, dest: &Path) -> Command {
    let mut cmd = opskit(home);
    cmd.args(["generate", "artifact_builder_pod", "--dest"])
        .arg(dest)
        .args(["--namespace", "ci", "--image", "registry.local/builder", "--tag", "1.4.0"]);
    cmd
}

#[test]
fn test_generate_writes_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("pod.json");

    generate(temp_dir.path(), &dest).assert().success();

    let contents = fs::read_to_string(&dest).unwrap();
    let pod: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(pod["kind"], "Pod");
    assert_eq!(pod["metadata"]["namespace"], "ci");
    assert_eq!(
        pod["spec"]["containers"][0]["image"],
        "registry.local/builder:1.4.0"
    );
}

#[test]
fn test_generate_overwrites_previous_output() {
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("pod.json");
    fs::write(&dest, "x".repeat(64 * 1024)).unwrap();

    generate(temp_dir.path(), &dest).assert().success();
    let first = fs::read(&dest).unwrap();
    assert!(first.len() < 64 * 1024);
    serde_json::from_slice::<serde_json::Value>(&first).unwrap();

    generate(temp_dir.path(), &dest).assert().success();
    assert_eq!(fs::read(&dest).unwrap(), first);
}

#[test]
fn test_missing_kind_fails_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("pod.json");

    opskit(temp_dir.path())
        .args(["generate", "--dest"])
        .arg(&dest)
        .args(["--namespace", "ci", "--image", "builder", "--tag", "1.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Kind of template not provided"));

    assert!(!dest.exists());
}

#[test]
fn test_too_many_args_fails_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("pod.json");
    fs::write(&dest, "previous").unwrap();

    opskit(temp_dir.path())
        .args(["generate", "artifact_builder_pod", "extra", "--dest"])
        .arg(&dest)
        .args(["--namespace", "ci", "--image", "builder", "--tag", "1.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Too many args"));

    assert_eq!(fs::read_to_string(&dest).unwrap(), "previous");
}

#[test]
fn test_unknown_kind_names_value() {
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("pod.json");

    opskit(temp_dir.path())
        .args(["generate", "config_map", "--dest"])
        .arg(&dest)
        .args(["--namespace", "ci", "--image", "builder", "--tag", "1.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'config_map'"))
        .stderr(predicate::str::contains("artifact_builder_pod"));

    assert!(!dest.exists());
}

#[test]
fn test_missing_dest_is_reported() {
    let temp_dir = TempDir::new().unwrap();

    opskit(temp_dir.path())
        .args(["generate", "artifact_builder_pod"])
        .args(["--namespace", "ci", "--image", "builder", "--tag", "1.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'--dest'"));
}

#[test]
fn test_generator_error_leaves_dest_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("pod.json");
    fs::write(&dest, "previous").unwrap();

    opskit(temp_dir.path())
        .args(["generate", "artifact_builder_pod", "--dest"])
        .arg(&dest)
        .args(["--namespace", "ci", "--image", "builder", "--tag", "1.0", "--port", "70000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid port 70000"));

    assert_eq!(fs::read_to_string(&dest).unwrap(), "previous");
}

#[test]
fn test_write_failure_exits_non_zero() {
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("no-such-dir").join("pod.json");

    generate(temp_dir.path(), &dest)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Write error"));
}

#[cfg(unix)]
#[test]
fn test_generate_to_device_file_succeeds() {
    let temp_dir = TempDir::new().unwrap();

    generate(temp_dir.path(), Path::new("/dev/null"))
        .assert()
        .success();
}

#[test]
fn test_dry_run_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("pod.json");
    let config = temp_dir.path().join("opskit.toml");
    fs::write(&config, "dry_run = true\n").unwrap();

    generate(temp_dir.path(), &dest)
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    assert!(!dest.exists());
}

#[test]
fn test_list_prints_kinds() {
    let temp_dir = TempDir::new().unwrap();

    opskit(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout("artifact_builder_pod\n");
}
