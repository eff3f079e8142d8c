//! CLI integration tests for takt
//!
//! These tests run the binary against small on-disk datasets and verify
//! ranking, balancing, report, graph, and chart output end to end.

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command instance for the takt binary
fn takt_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("takt"))
}

fn write_dataset(dir: &TempDir, times: &str, names: &str, edges: &str, demand: &str) {
    fs::write(dir.path().join("tasktime.txt"), times).unwrap();
    fs::write(dir.path().join("tasknames.txt"), names).unwrap();
    fs::write(dir.path().join("edges_nodes.txt"), edges).unwrap();
    fs::write(dir.path().join("demand_worktime.txt"), demand).unwrap();
}

/// Three independent tasks with durations [4, 6, 2]; takt time 7 hrs
fn independent_dataset() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_dataset(&dir, "4\n6\n2\n", "drill\nweld\npolish\n", "", "1,7,1\n");
    dir
}

/// Two tasks where 2 precedes 1; durations [5, 3]; takt time 10 hrs
fn chain_dataset() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_dataset(&dir, "5\n3\n", "assemble\nprepare\n", "2,1\n", "1,10,1\n");
    dir
}

// =============================================================================
// Rank Tests
// =============================================================================

#[test]
fn test_rank_orders_by_weight() {
    let dir = independent_dataset();

    takt_cmd()
        .current_dir(dir.path())
        .arg("rank")
        .assert()
        .success()
        .stdout(predicate::str::contains("RPW ranking (3 tasks)"))
        .stdout(predicate::str::contains("weld"));
}

#[test]
fn test_rank_json_output() {
    let dir = independent_dataset();

    let output = takt_cmd()
        .current_dir(dir.path())
        .args(["rank", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let items: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 3);
    // heaviest first: task 2 (weld, 6.0)
    assert_eq!(items[0]["id"], "2");
    assert_eq!(items[0]["weight"], 6.0);
    assert_eq!(items[2]["id"], "3");
}

#[test]
fn test_rank_respects_precedence_weights() {
    let dir = chain_dataset();

    let output = takt_cmd()
        .current_dir(dir.path())
        .args(["rank", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let items: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    // RPW(2) = 3 + 5 = 8 ranks above RPW(1) = 5
    assert_eq!(items[0]["id"], "2");
    assert_eq!(items[0]["weight"], 8.0);
    assert_eq!(items[1]["id"], "1");
    assert_eq!(items[1]["weight"], 5.0);
}

// =============================================================================
// Balance Tests
// =============================================================================

#[test]
fn test_balance_by_takt() {
    let dir = independent_dataset();

    takt_cmd()
        .current_dir(dir.path())
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("takt bound, limit 7.00 hrs"))
        .stdout(predicate::str::contains("2 stations"));
}

#[test]
fn test_balance_json_station_grouping() {
    let dir = independent_dataset();

    let output = takt_cmd()
        .current_dir(dir.path())
        .args(["balance", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let stations = result["stations"].as_array().unwrap();
    assert_eq!(stations.len(), 2);
    // station 1: task 2 alone (6 + 4 would exceed 7)
    assert_eq!(stations[0]["tasks"], serde_json::json!(["2"]));
    assert_eq!(stations[0]["load"], 6.0);
    // station 2: tasks 1 and 3 (4 + 2 = 6)
    assert_eq!(stations[1]["tasks"], serde_json::json!(["1", "3"]));
    assert_eq!(stations[1]["load"], 6.0);
    // conservation: nothing lost or duplicated
    assert_eq!(result["total_load"], 12.0);
}

#[test]
fn test_balance_by_highest() {
    let dir = independent_dataset();

    let output = takt_cmd()
        .current_dir(dir.path())
        .args(["balance", "--by", "highest", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    // highest task time is 6
    assert_eq!(result["limit"], 6.0);
    assert_eq!(result["stations"].as_array().unwrap().len(), 2);
}

#[test]
fn test_balance_with_explicit_limit() {
    let dir = independent_dataset();

    let output = takt_cmd()
        .current_dir(dir.path())
        .args(["balance", "--limit", "5", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    // every task exceeds or blocks the next: three single-task stations
    assert_eq!(result["stations"].as_array().unwrap().len(), 3);
}

#[test]
fn test_balance_chain_single_station() {
    let dir = chain_dataset();

    let output = takt_cmd()
        .current_dir(dir.path())
        .args(["balance", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let stations = result["stations"].as_array().unwrap();
    assert_eq!(stations.len(), 1);
    assert_eq!(stations[0]["tasks"], serde_json::json!(["2", "1"]));
    assert_eq!(stations[0]["load"], 8.0);
}

#[test]
fn test_balance_zero_limit_fails() {
    let dir = independent_dataset();

    takt_cmd()
        .current_dir(dir.path())
        .args(["balance", "--limit", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive"));
}

// =============================================================================
// Unit Handling
// =============================================================================

#[test]
fn test_unit_override_scales_takt() {
    let dir = independent_dataset();

    takt_cmd()
        .current_dir(dir.path())
        .args(["balance", "--unit", "min"])
        .assert()
        .success()
        .stdout(predicate::str::contains("limit 420.00 min"));
}

#[test]
fn test_config_sets_default_unit() {
    let dir = independent_dataset();
    fs::write(dir.path().join("takt.toml"), "unit = \"minutes\"\n").unwrap();

    takt_cmd()
        .current_dir(dir.path())
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("min"));
}

#[test]
fn test_invalid_unit_rejected() {
    let dir = independent_dataset();

    takt_cmd()
        .current_dir(dir.path())
        .args(["balance", "--unit", "days"])
        .assert()
        .failure();
}

// =============================================================================
// Report Tests
// =============================================================================

#[test]
fn test_report_writes_default_file() {
    let dir = independent_dataset();

    takt_cmd()
        .current_dir(dir.path())
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote report to"));

    let report = fs::read_to_string(dir.path().join("Line_Balancing_Report.txt")).unwrap();
    assert!(report.contains("Unbalanced Line"));
    assert!(report.contains("Balanced Line (takt)"));
    assert!(report.contains("Balanced Line (highest)"));
    assert!(report.contains("drill"));
    assert!(report.contains("End of report"));
}

#[test]
fn test_report_to_stdout() {
    let dir = independent_dataset();

    takt_cmd()
        .current_dir(dir.path())
        .args(["report", "--out", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The takt time for this process"))
        .stdout(predicate::str::contains("7.00 hrs"));
}

#[test]
fn test_report_respects_configured_file_name() {
    let dir = independent_dataset();
    fs::write(dir.path().join("takt.toml"), "report_file = \"out.txt\"\n").unwrap();

    takt_cmd().current_dir(dir.path()).arg("report").assert().success();

    assert!(dir.path().join("out.txt").is_file());
}

// =============================================================================
// Graph Tests
// =============================================================================

#[test]
fn test_graph_writes_dot_files() {
    let dir = chain_dataset();

    takt_cmd()
        .current_dir(dir.path())
        .arg("graph")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 3 DOT files"));

    let unbalanced = fs::read_to_string(dir.path().join("rpw_out.dot")).unwrap();
    assert!(unbalanced.contains("digraph"));
    assert!(unbalanced.contains("\"2\" -> \"1\""));

    let takt = fs::read_to_string(dir.path().join("rpw_out_takt_balanced.dot")).unwrap();
    assert!(takt.contains("Balanced line using takt time"));

    assert!(dir.path().join("rpw_out_highest_balanced.dot").is_file());
}

#[test]
fn test_graph_out_dir() {
    let dir = chain_dataset();
    let out = TempDir::new().unwrap();

    takt_cmd()
        .current_dir(dir.path())
        .args(["graph", "--out-dir"])
        .arg(out.path())
        .assert()
        .success();

    assert!(out.path().join("rpw_out.dot").is_file());
}

// =============================================================================
// Chart Tests
// =============================================================================

#[test]
fn test_chart_unbalanced() {
    let dir = independent_dataset();

    takt_cmd()
        .current_dir(dir.path())
        .arg("chart")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unbalanced line"))
        .stdout(predicate::str::contains("cycle bound: 7.00 hrs"))
        .stdout(predicate::str::contains("#"));
}

#[test]
fn test_chart_balanced_by_takt() {
    let dir = independent_dataset();

    takt_cmd()
        .current_dir(dir.path())
        .args(["chart", "--by", "takt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balanced line (takt bound)"));
}

// =============================================================================
// Error Handling
// =============================================================================

#[test]
fn test_missing_data_files() {
    let dir = TempDir::new().unwrap();

    takt_cmd()
        .current_dir(dir.path())
        .arg("rank")
        .assert()
        .failure()
        .stderr(predicate::str::contains("tasktime.txt"));
}

#[test]
fn test_cyclic_precedence_rejected() {
    let dir = TempDir::new().unwrap();
    write_dataset(&dir, "4\n6\n", "a\nb\n", "1,2\n2,1\n", "1,7,1\n");

    takt_cmd()
        .current_dir(dir.path())
        .arg("rank")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cycle"));
}

#[test]
fn test_edge_to_unknown_task_rejected() {
    let dir = TempDir::new().unwrap();
    write_dataset(&dir, "4\n", "a\n", "1,9\n", "1,7,1\n");

    takt_cmd()
        .current_dir(dir.path())
        .arg("balance")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Task not found: 9"));
}

#[test]
fn test_name_count_mismatch_rejected() {
    let dir = TempDir::new().unwrap();
    write_dataset(&dir, "4\n6\n", "only one\n", "", "1,7,1\n");

    takt_cmd()
        .current_dir(dir.path())
        .arg("rank")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not match"));
}

#[test]
fn test_zero_demand_rejected() {
    let dir = TempDir::new().unwrap();
    write_dataset(&dir, "4\n", "a\n", "", "1,7,0\n");

    takt_cmd()
        .current_dir(dir.path())
        .arg("balance")
        .assert()
        .failure()
        .stderr(predicate::str::contains("demand"));
}

#[test]
fn test_dir_flag_instead_of_cwd() {
    let dir = independent_dataset();

    takt_cmd()
        .args(["rank", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("RPW ranking"));
}
