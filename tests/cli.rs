use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn single_query_runs_both_engines() {
    let mut cmd = cargo_bin_cmd!("bandpath");
    cmd.args(["-n", "8", "-s", "1", "-d", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[dijkstra]"))
        .stdout(predicate::str::contains("[astar]"))
        .stdout(predicate::str::contains("Shortest path from 1 to 8 is: [1, 2, 5, 8]"))
        .stdout(predicate::str::contains("Total cost is: 23"))
        .stdout(predicate::str::contains("Total repetition count: 92"));
}

#[test]
fn single_query_breakdown() {
    let mut cmd = cargo_bin_cmd!("bandpath");
    cmd.args(["-n", "8", "-s", "8", "-d", "1", "-a", "astar", "--breakdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[dijkstra]").not())
        .stdout(predicate::str::contains("Total repetition count: 79"))
        .stdout(predicate::str::contains("  extractions: 6"));
}

#[test]
fn out_of_range_node_fails() {
    let mut cmd = cargo_bin_cmd!("bandpath");
    cmd.args(["-n", "8", "-s", "1", "-d", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("node 9 is outside"));
}

#[test]
fn unknown_algorithm_fails() {
    let mut cmd = cargo_bin_cmd!("bandpath");
    cmd.args(["-n", "8", "-s", "1", "-d", "8", "-a", "bmssp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown search strategy"));
}

#[test]
fn comparison_report_and_csv() {
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("results.csv");

    let mut cmd = cargo_bin_cmd!("compare");
    cmd.args(["--sizes", "10,50", "--trials", "2", "--log-level", "warn", "--out"])
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Execution Time Analysis:"))
        .stdout(predicate::str::contains("N = 50: Cost = 835 (engines agree)"))
        .stdout(predicate::str::contains("Wrote 4 rows"));

    let written = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(written.lines().count(), 5);
    assert!(written.lines().any(|line| line.starts_with("50,astar,")));
}

#[test]
fn comparison_rejects_zero_trials() {
    let mut cmd = cargo_bin_cmd!("compare");
    cmd.args(["--sizes", "10", "--trials", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one timing trial"));
}
