use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn test_cli_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = assert_cmd::cargo_bin_cmd!("cycleplan");
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("summary"))
        .stdout(predicate::str::contains("set-period-weeks"));
    Ok(())
}

#[test]
fn missing_subcommand_fails() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("cycleplan");
    cmd.assert().failure();
}
