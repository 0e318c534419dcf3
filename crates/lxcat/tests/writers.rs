//! Integration tests for writing and re-reading data

use lxtools_lxcat::{
    read_cross_section_set, read_swarm_measurement, write_cross_section_set, write_json,
    write_swarm_json, write_table_csv, CrossSectionSet, Error, SwarmMeasurement,
};
use rstest::{fixture, rstest};
use std::path::PathBuf;

#[fixture]
fn phelps() -> CrossSectionSet {
    read_cross_section_set("./data/N2_Phelps.txt", None, None).unwrap()
}

/// Unique output path in the system temporary directory
fn output(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("lxtools_{}_{name}", std::process::id()))
}

#[rstest]
#[case("./data/N2_Phelps.txt")] // case 1
#[case("./data/N2_Phelps_different_order.txt")] // case 2
#[case("./data/mixed_species.txt")] // case 3
fn write_then_read(#[case] path: &str) {
    let set = CrossSectionSet::from_file(path).unwrap();

    let copy = output(&format!("copy_{}", path.rsplit('/').next().unwrap()));
    write_cross_section_set(&set, &copy).unwrap();
    let read = CrossSectionSet::from_file(&copy).unwrap();
    std::fs::remove_file(&copy).unwrap();

    assert_eq!(set, read);
}

#[rstest]
fn process_survives_round_trip(phelps: CrossSectionSet) {
    let text = phelps.to_lxcat_string();
    let path = output("process.txt");
    std::fs::write(&path, &text).unwrap();
    let read = CrossSectionSet::from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(
        read.records[0].get_metadata("PROCESS"),
        Some("E + N2 -> E + N2, Elastic")
    );
    assert_eq!(read.records[0].mass_ratio(), Some(1.95e-5));
    assert_eq!(read.records[4].threshold(), Some(15.6));
}

#[rstest]
fn json_set(phelps: CrossSectionSet) {
    let path = output("set.json");
    write_json(&phelps, &path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let read: CrossSectionSet = serde_json::from_str(&text).unwrap();
    assert_eq!(read, phelps);
}

#[rstest]
fn json_swarm() {
    let swarm = read_swarm_measurement("./data/Bhalla_1960_alphaN.txt").unwrap();
    let path = output("swarm.json");
    write_swarm_json(&swarm, &path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let read: SwarmMeasurement = serde_json::from_str(&text).unwrap();
    assert_eq!(read, swarm);
}

#[rstest]
fn csv_table(phelps: CrossSectionSet) {
    let table = &phelps.records[0].table;
    let path = output("elastic.csv");
    write_table_csv(table, ["Energy (eV)", "Cross section (m2)"], &path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let lines = text.lines().collect::<Vec<&str>>();
    assert_eq!(lines.len(), table.len() + 1);
    assert_eq!(lines[0], "Energy (eV),Cross section (m2)");

    let (energy, value) = lines[1].split_once(',').unwrap();
    assert_eq!(energy.parse::<f64>().unwrap(), 0.0);
    assert_eq!(value.parse::<f64>().unwrap(), 1.1e-20);
}

#[rstest]
fn unwritable_path(phelps: CrossSectionSet) {
    let path = output("missing_directory").join("set.txt");
    let err = write_cross_section_set(&phelps, &path).unwrap_err();
    assert!(matches!(err, Error::IOError(_)));

    let err = write_json(&phelps, &path).unwrap_err();
    assert!(matches!(err, Error::IOError(_)));
}
