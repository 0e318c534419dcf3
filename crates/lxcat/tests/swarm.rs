//! Integration tests for swarm parameter measurements

use lxtools_lxcat::{read_swarm_measurement, Error};
use rstest::rstest;

#[rstest]
fn read_bhalla() {
    let swarm = read_swarm_measurement("./data/Bhalla_1960_alphaN.txt").unwrap();
    assert_eq!(swarm.author, "Bhalla");
    assert_eq!(swarm.year, "1960");
    assert_eq!(swarm.parameter_name, "alphaN");
    assert_eq!(swarm.len(), 19);
    assert_eq!(swarm.reduced_field()[0], 100.0);
    assert_eq!(swarm.values()[0], 4.918e-22);
    assert_eq!(swarm.reduced_field()[18], 3000.0);
}

#[rstest]
fn name_without_separators() {
    let err = read_swarm_measurement("./data/Bhalla1960alphaN.txt").unwrap_err();
    assert!(matches!(err, Error::InvalidFileName(name) if name == "Bhalla1960alphaN"));
}

#[rstest]
#[case("./data/Bhalla_1960.txt")] // case 1
#[case("./data/_1960_alphaN.txt")] // case 2
fn name_missing_parts(#[case] path: &str) {
    let err = read_swarm_measurement(path).unwrap_err();
    assert!(matches!(err, Error::InvalidFileName(_)));
}
