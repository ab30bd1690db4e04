mod common;

use std::io::Write;

use tempfile::NamedTempFile;
use voltpath_lib::{load_network, load_stations, Error, Result, RoadCategory, RoadQuality};

#[test]
fn load_fixture_network() -> Result<()> {
    let network = load_network(common::fixtures_dir().join("network.json"))?;

    assert_eq!(network.node_count(), 10, "fixture has 10 nodes");
    assert_eq!(network.segments().len(), 10);
    assert_eq!(network.node_name(1), Some("Harbourton"));
    assert_eq!(network.node_name(8), Some("Capewick"));
    assert!(network.contains(10));
    assert!(!network.contains(11));

    let ferry = network
        .segments()
        .iter()
        .find(|segment| segment.category == RoadCategory::Ferry)
        .expect("ferry segment present");
    assert_eq!((ferry.from, ferry.to), (5, 10));

    let poor = network
        .segments()
        .iter()
        .find(|segment| segment.quality == RoadQuality::Poor)
        .expect("poor segment present");
    assert_eq!((poor.from, poor.to), (9, 5));

    Ok(())
}

#[test]
fn load_fixture_stations() -> Result<()> {
    let stations = load_stations(common::fixtures_dir().join("stations.json"))?;

    assert_eq!(stations.len(), 5);
    assert_eq!(stations[0].name, "Harbourton Plaza");
    assert!(stations[0].supports_connector("CCS"), "connector match ignores case");
    assert_eq!(stations[2].amenities.len(), 0, "amenities default to empty");
    assert_eq!(stations[3].power_kw, 120.0);

    Ok(())
}

#[test]
fn segment_attributes_default_when_absent() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"{{
            "nodes": [
                {{ "id": 1, "name": "A", "position": {{ "lat": 0.0, "lng": 0.0 }} }},
                {{ "id": 2, "name": "B", "position": {{ "lat": 0.0, "lng": 0.1 }} }}
            ],
            "segments": [ {{ "from": 1, "to": 2, "distance_km": 11.0 }} ]
        }}"#
    )?;

    let network = load_network(file.path())?;
    let segment = network.segments()[0];
    assert_eq!(segment.quality, RoadQuality::Normal);
    assert_eq!(segment.category, RoadCategory::Standard);

    Ok(())
}

#[test]
fn missing_file_surfaces_io_error() {
    let err = load_network(common::fixtures_dir().join("does_not_exist.json"))
        .expect_err("missing file fails");
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn malformed_json_surfaces_parse_error() {
    let mut file = NamedTempFile::new().expect("tempfile");
    write!(file, "{{ not valid json").expect("write");

    let err = load_network(file.path()).expect_err("parse should fail");
    assert!(matches!(err, Error::Json(_)));
}
