use assert_fs::prelude::*;
use predicates::prelude::*;

const PLAN_YAML: &str = r#"macrocycle:
  start_date: 2024-04-01
  periods:
    - name: P. PREPARATORIO
      percent_weight: 60
      weeks: 13
      color_tag: bg-blue-500
    - name: P. COMPETITIVO
      percent_weight: 40
      weeks: 13
      color_tag: bg-emerald-500
  stages:
    - name: E. GENERAL
      weeks: 26
capacities:
  - id: 1
    name: Coordinacion General
    exercises: 5
    reps: 15
    series: 2
    freq: 5
    type: Fisica
  - id: 2
    name: Juego Reducido
    exercises: 5
    reps: 5
    series: 2
    freq: 5
    type: Tactica
weekly_records:
  - week: 1
    volume: 100
    intensity: 50
    fatigue: 10
    performance: 40
    period: P. PREPARATORIO
    stage: E. GENERAL
    date: 2024-04-01
  - week: 2
    volume: 200
    intensity: 70
    fatigue: 20
    performance: 60
    period: P. PREPARATORIO
    stage: E. GENERAL
    date: 2024-04-08
"#;

fn write_plan(temp: &assert_fs::TempDir, contents: &str) -> String {
    let plan_file = temp.child("plan.yaml");
    plan_file.write_str(contents).unwrap();
    plan_file.path().to_str().unwrap().to_string()
}

#[test]
fn summary_prints_volumes_shares_and_averages() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = write_plan(&temp, PLAN_YAML);

    let mut cmd = assert_cmd::cargo_bin_cmd!("cycleplan");
    cmd.args(["summary", "-i", &input]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Total weeks: 26 (6 months)"))
        .stdout(predicate::str::contains("Total volume: 26000"))
        .stdout(predicate::str::contains("Average weekly volume: 1000"))
        .stdout(predicate::str::contains(
            "Coordinacion General | Física | 750 | 19500 | 75%",
        ))
        .stdout(predicate::str::contains("Juego Reducido | Táctica | 250 | 6500 | 25%"))
        .stdout(predicate::str::contains("P. PREPARATORIO | 2 | 150 | 60%"))
        .stdout(predicate::str::contains("P. COMPETITIVO | 0 | — | —"))
        .stdout(predicate::str::contains("Evaluations: 0"));
}

#[test]
fn summary_writes_report_file_when_requested() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = write_plan(&temp, PLAN_YAML);
    let report = temp.child("report.txt");

    let mut cmd = assert_cmd::cargo_bin_cmd!("cycleplan");
    cmd.args([
        "summary",
        "-i",
        &input,
        "-o",
        report.path().to_str().unwrap(),
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Report written to"));

    report.assert(predicate::str::contains("Training Plan Report"));
}

#[test]
fn summary_reports_undefined_shares_for_zero_week_plan() {
    let temp = assert_fs::TempDir::new().unwrap();
    let yaml = PLAN_YAML.replace("weeks: 13", "weeks: 0");
    let input = write_plan(&temp, &yaml);

    let mut cmd = assert_cmd::cargo_bin_cmd!("cycleplan");
    cmd.args(["summary", "-i", &input]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Average weekly volume: —"))
        .stdout(predicate::str::contains("Coordinacion General | Física | 750 | 0 | —"))
        .stdout(predicate::str::contains(
            "stages cover 26 weeks but periods cover 0 weeks",
        ));
}

#[test]
fn summary_rejects_negative_counts() {
    let temp = assert_fs::TempDir::new().unwrap();
    let yaml = PLAN_YAML.replace("reps: 15", "reps: -15");
    let input = write_plan(&temp, &yaml);

    let mut cmd = assert_cmd::cargo_bin_cmd!("cycleplan");
    cmd.args(["summary", "-i", &input]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load plan"))
        .stderr(predicate::str::contains("InvalidArgument"));
}

#[test]
fn summary_fails_for_missing_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let missing = temp.child("missing.yaml");

    let mut cmd = assert_cmd::cargo_bin_cmd!("cycleplan");
    cmd.args(["summary", "-i", missing.path().to_str().unwrap()]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load plan"));
}
