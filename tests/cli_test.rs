use assert_cmd::cargo;
use predicates::prelude::*;

#[tokio::test]
async fn test_cli_help() {
    let mut cmd = cargo::cargo_bin_cmd!("seolens");
    let assert = cmd.arg("--help").assert();

    // On Windows, the binary name in help might be "seolens.exe"
    let expected_pattern = if cfg!(windows) {
        "seolens.exe [OPTIONS] <URL>"
    } else {
        "seolens [OPTIONS] <URL>"
    };

    assert
        .success()
        .stderr(predicate::str::is_empty())
        .stdout(predicate::str::contains(expected_pattern));
}

#[tokio::test]
async fn test_cli_requires_a_url() {
    let mut cmd = cargo::cargo_bin_cmd!("seolens");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[tokio::test]
async fn test_cli_reports_invalid_urls_on_stderr() {
    let mut cmd = cargo::cargo_bin_cmd!("seolens");

    cmd.arg("ht tp://bad")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid URL"));
}
