mod common;

use common::{ruta, write_network, ISLANDS, TRIANGLE};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_distances_json_on_triangle_network() {
    let dir = tempdir().unwrap();
    let network = write_network(dir.path(), TRIANGLE);

    let output = ruta()
        .arg("--network")
        .arg(&network)
        .args(["--format", "json", "distances", "0"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let table: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(table["start"], 0);
    assert_eq!(table["distances"], serde_json::json!([0, 5, 8]));
}

#[test]
fn test_mst_json_on_triangle_network() {
    let dir = tempdir().unwrap();
    let network = write_network(dir.path(), TRIANGLE);

    let output = ruta()
        .arg("--network")
        .arg(&network)
        .args(["--format", "json", "mst"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let tree: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(tree["total_weight"], 8);
    assert_eq!(
        tree["edges"],
        serde_json::json!([
            { "source": 1, "destination": 2, "weight": 3 },
            { "source": 0, "destination": 1, "weight": 5 }
        ])
    );
}

#[test]
fn test_mst_reports_forest_on_disconnected_network() {
    let dir = tempdir().unwrap();
    let network = write_network(dir.path(), ISLANDS);

    ruta()
        .arg("--network")
        .arg(&network)
        .arg("mst")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total weight: 16 km"))
        .stdout(predicate::str::contains("2 components"));
}

#[test]
fn test_path_not_found_is_success() {
    let dir = tempdir().unwrap();
    let network = write_network(dir.path(), ISLANDS);

    ruta()
        .arg("--network")
        .arg(&network)
        .args(["path", "0", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path found from 0 to 3"));
}

#[test]
fn test_path_to_self_is_singleton() {
    ruta()
        .args(["path", "4", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path from 4 to 4: 4"));
}

#[test]
fn test_demo_distances_human_output() {
    ruta()
        .args(["distances", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("to 3: 66 km"))
        .stdout(predicate::str::contains("to 13: 90 km"));
}

#[test]
fn test_out_of_range_vertex_exits_with_data_code() {
    ruta()
        .args(["distances", "99"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_out_of_range_vertex_json_error_envelope() {
    ruta()
        .args(["--format", "json", "distances", "99"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("vertex_out_of_range"));
}

#[test]
fn test_unknown_format_is_usage_error() {
    ruta()
        .args(["--format", "records", "mst"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_invalid_network_file_exits_with_data_code() {
    let dir = tempdir().unwrap();
    let network = write_network(dir.path(), "{ not json }");

    ruta()
        .arg("--network")
        .arg(&network)
        .arg("mst")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("invalid network"));
}

#[test]
fn test_repeated_invocations_are_deterministic() {
    let first = ruta().arg("mst").assert().success().get_output().stdout.clone();
    let second = ruta().arg("mst").assert().success().get_output().stdout.clone();
    assert_eq!(first, second);
}
