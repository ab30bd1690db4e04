use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::str::contains;

fn fixture_catalog() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/vehicles.csv")
        .canonicalize()
        .expect("vehicle fixture present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("voltpath");
    cmd.env("RUST_LOG", "error");
    cmd
}

#[test]
fn lists_bundled_vehicles() {
    let mut cmd = cli();
    cmd.arg("vehicles");

    cmd.assert()
        .success()
        .stdout(contains("Available vehicles ("))
        .stdout(contains("Id"))
        .stdout(contains("Battery (kWh)"))
        .stdout(contains("renault-zoe"))
        .stdout(contains("tesla-model-3"));
}

#[test]
fn lists_vehicles_from_catalog_file() {
    let mut cmd = cli();
    cmd.arg("vehicles").arg("--vehicles-file").arg(fixture_catalog());

    cmd.assert()
        .success()
        .stdout(contains("Available vehicles (4):"))
        .stdout(contains("demo-hatch"))
        .stdout(contains("Demo Roadster"));
}

#[test]
fn lists_vehicles_as_json() {
    let mut cmd = cli();
    cmd.arg("vehicles")
        .arg("--vehicles-file")
        .arg(fixture_catalog())
        .arg("--format")
        .arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let vehicles: serde_json::Value = serde_json::from_slice(&output).expect("stdout is JSON");
    let vehicles = vehicles.as_array().expect("vehicle array");

    assert_eq!(vehicles.len(), 4);
    assert_eq!(vehicles[0]["id"], "demo-hatch");
    assert_eq!(vehicles[3]["connector"], "chademo");
}

#[test]
fn missing_catalog_file_fails_with_context() {
    let mut cmd = cli();
    cmd.arg("vehicles")
        .arg("--vehicles-file")
        .arg("/does/not/exist.csv");

    cmd.assert()
        .failure()
        .stderr(contains("failed to load vehicle catalog"));
}
