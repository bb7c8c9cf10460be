use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn init_writes_sample_season() {
    let temp = assert_fs::TempDir::new().unwrap();
    let plan_file = temp.child("plan.yaml");

    let mut cmd = assert_cmd::cargo_bin_cmd!("cycleplan");
    cmd.args(["init", "-o", plan_file.path().to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Plan written to"));

    plan_file.assert(predicate::str::contains("2024-04-01"));
    plan_file.assert(predicate::str::contains("P. PREPARATORIO"));
    plan_file.assert(predicate::str::contains("Rapidez Especial"));
}

#[test]
fn init_is_deterministic_for_a_seed() {
    let temp = assert_fs::TempDir::new().unwrap();
    let first = temp.child("first.yaml");
    let second = temp.child("second.yaml");

    for file in [&first, &second] {
        let mut cmd = assert_cmd::cargo_bin_cmd!("cycleplan");
        cmd.args(["init", "-o", file.path().to_str().unwrap(), "--seed", "7"]);
        cmd.assert().success();
    }

    let first = std::fs::read_to_string(first.path()).unwrap();
    let second = std::fs::read_to_string(second.path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn init_empty_plan_uses_given_start_date() {
    let temp = assert_fs::TempDir::new().unwrap();
    let plan_file = temp.child("empty.yaml");

    let mut cmd = assert_cmd::cargo_bin_cmd!("cycleplan");
    cmd.args([
        "init",
        "-o",
        plan_file.path().to_str().unwrap(),
        "--empty",
        "--start-date",
        "2025-01-06",
    ]);
    cmd.assert().success();

    plan_file.assert(predicate::str::contains("2025-01-06"));
    plan_file.assert(predicate::str::contains("Rapidez").not());
}

#[test]
fn init_rejects_malformed_start_date() {
    let temp = assert_fs::TempDir::new().unwrap();
    let plan_file = temp.child("plan.yaml");

    let mut cmd = assert_cmd::cargo_bin_cmd!("cycleplan");
    cmd.args([
        "init",
        "-o",
        plan_file.path().to_str().unwrap(),
        "--start-date",
        "01/04/2024",
    ]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse start date"));

    plan_file.assert(predicate::path::missing());
}
