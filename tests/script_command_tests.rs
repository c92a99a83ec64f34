//! End-to-end tests for writing the removal script

mod common;

use common::{TestWorkspace, fixture, read_fixture};
use predicates::prelude::*;

#[test]
fn test_final_run_full_script() {
    let workspace = TestWorkspace::new();
    let output = workspace.path.join("kernel_remove");

    workspace
        .remok()
        .arg("--listing")
        .arg(fixture("test01.txt"))
        .arg("script")
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Removing 2 kernel(s): 5.0.0-62, 5.0.0-65"))
        .stdout(predicate::str::contains("Script written to"));

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        read_fixture("test01_output.txt")
    );
}

#[test]
fn test_final_scrambled_input() {
    let workspace = TestWorkspace::new();
    let output = workspace.path.join("kernel_remove");

    workspace
        .remok()
        .arg("--listing")
        .arg(fixture("test02.txt"))
        .arg("script")
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        read_fixture("test01_output.txt")
    );
}

#[test]
fn test_incomplete_kernel_not_in_script() {
    let workspace = TestWorkspace::new();
    let output = workspace.path.join("kernel_remove");

    workspace
        .remok()
        .arg("--listing")
        .arg(fixture("test03.txt"))
        .arg("script")
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let script = std::fs::read_to_string(&output).unwrap();
    assert_eq!(script, read_fixture("test03_output.txt"));
    assert!(!script.contains("5.15.0-91"));
    assert!(!script.contains("lowlatency"));
}

#[test]
fn test_script_creates_parent_directories() {
    let workspace = TestWorkspace::new();

    workspace
        .remok()
        .arg("--listing")
        .arg(fixture("test01.txt"))
        .args(["script", "-o", "nested/dir/kernel_remove"])
        .assert()
        .success();

    assert_eq!(
        workspace.read_file("nested/dir/kernel_remove"),
        read_fixture("test01_output.txt")
    );
}

#[test]
fn test_script_path_from_env() {
    let workspace = TestWorkspace::new();
    let output = workspace.path.join("from-env/kernel_remove");

    workspace
        .remok()
        .env("REMOK_OUTPUT", &output)
        .arg("--listing")
        .arg(fixture("test01.txt"))
        .args(["script", "--print-path"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{}\n", output.display())));

    assert!(output.exists());
}

#[test]
fn test_script_path_from_config() {
    let workspace = TestWorkspace::new();
    let output = workspace.path.join("configured/kernel_remove");
    let config = workspace.write_file(
        "remok.yaml",
        &format!("output: {}\nkeep: 3\n", output.display()),
    );

    workspace
        .remok()
        .arg("--config")
        .arg(config)
        .arg("--listing")
        .arg(fixture("test01.txt"))
        .arg("script")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removing 1 kernel(s): 5.0.0-62"));

    let script = std::fs::read_to_string(&output).unwrap();
    assert_eq!(script.lines().count(), 5);
    assert!(script.lines().all(|line| line.contains("5.0.0-62")));
}

#[test]
fn test_nothing_to_remove_writes_empty_script() {
    let workspace = TestWorkspace::new();
    let output = workspace.write_file("kernel_remove", "apt purge stale\n");

    workspace
        .remok()
        .arg("--listing")
        .arg(fixture("test01.txt"))
        .args(["script", "--keep", "4", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("No kernels to remove."));

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "");
}
