use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("payflow"));
    cmd.arg("tests/fixtures/test.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("reference,outcome"))
        // Check both fixture requests resolved
        .stdout(predicate::str::contains("order-1001,completed"))
        .stdout(predicate::str::contains("order-1002,completed"));

    Ok(())
}

#[test]
fn test_cli_decline_mode() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("payflow"));
    cmd.arg("tests/fixtures/test.csv").arg("--decline");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("order-1001,not_completed"))
        .stdout(predicate::str::contains("order-1002,not_completed"));

    Ok(())
}

#[test]
fn test_cli_launch_failure_resolves_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("payflow"));
    cmd.arg("tests/fixtures/test.csv").arg("--fail-launch");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error processing request"))
        .stdout(predicate::str::contains("order-1001").not());

    Ok(())
}
