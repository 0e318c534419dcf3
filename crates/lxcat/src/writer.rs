//! Write operations for cross section and swarm data

// crate modules
use crate::codec;
use crate::core::{CrossSection, CrossSectionSet, SwarmMeasurement, Table};
use crate::error::Result;

// lxtools modules
use lxtools_format::{f, FloatFormat};

// standard library
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// external crates
use log::info;

/// First line of every file written
const BANNER: &str = "LXCat cross section data written by lxtools";

/// Separator written around the body of the file
const SEPARATOR: &str =
    "xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx";

/// Serialise a [CrossSectionSet] to LXCat text
///
/// The output is a valid LXCat file that reads back to an equal set. Table
/// values are written to 7 significant figures, while the parameter line is
/// written exactly.
///
/// ```rust
/// # use lxtools_lxcat::{to_lxcat_string, CrossSection, CrossSectionSet, Process, Table};
/// let mut set = CrossSectionSet::new();
/// set.database = Some("Example".to_string());
/// set.records.push(CrossSection {
///     process: Process::Attachment,
///     species: "O2".to_string(),
///     metadata: Default::default(),
///     table: Table::from(vec![[5.0, 1.0e-22]]),
/// });
///
/// let text = to_lxcat_string(&set);
/// assert!(text.contains("DATABASE: Example\n\nATTACHMENT\nO2\n----"));
/// assert!(text.contains("5.000000e+00\t1.000000e-22\n"));
/// ```
pub fn to_lxcat_string(set: &CrossSectionSet) -> String {
    let mut s = f!("{BANNER}\n{SEPARATOR}\n");
    if let Some(database) = &set.database {
        s += &f!("DATABASE: {database}\n\n");
    }
    for record in set {
        s += &encode_record(record);
    }
    s += &f!("{SEPARATOR}\n");
    s
}

/// Write a [CrossSectionSet] to an LXCat text file
///
/// Any existing file at `path` is replaced.
///
/// ```no_run
/// # use lxtools_lxcat::{read_cross_section_set, write_cross_section_set};
/// let set = read_cross_section_set("./data/N2_Phelps.txt", None, None).unwrap();
/// write_cross_section_set(&set, "./N2_Phelps_copy.txt").unwrap();
/// ```
pub fn write_cross_section_set<P: AsRef<Path>>(set: &CrossSectionSet, path: P) -> Result<()> {
    let mut writer = init_writer(path)?;
    writer.write_all(to_lxcat_string(set).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Write a [CrossSectionSet] to a JSON file
///
/// This is a direct serialization of the set, with the metadata of each
/// record kept in file order.
///
/// ```no_run
/// # use lxtools_lxcat::{read_cross_section_set, write_json};
/// let set = read_cross_section_set("./data/N2_Phelps.txt", None, None).unwrap();
/// write_json(&set, "./N2_Phelps.json").unwrap();
/// ```
pub fn write_json<P: AsRef<Path>>(set: &CrossSectionSet, path: P) -> Result<()> {
    let writer = init_writer(path)?;
    serde_json::to_writer_pretty(writer, set)?;
    Ok(())
}

/// Write a [SwarmMeasurement] to a JSON file
///
/// ```no_run
/// # use lxtools_lxcat::{read_swarm_measurement, write_swarm_json};
/// let swarm = read_swarm_measurement("./data/Bhalla_1960_alphaN.txt").unwrap();
/// write_swarm_json(&swarm, "./Bhalla_1960_alphaN.json").unwrap();
/// ```
pub fn write_swarm_json<P: AsRef<Path>>(swarm: &SwarmMeasurement, path: P) -> Result<()> {
    let writer = init_writer(path)?;
    serde_json::to_writer_pretty(writer, swarm)?;
    Ok(())
}

/// Write a single [Table] to a CSV file
///
/// The `headers` are written as the first row, followed by one row per
/// energy/value pair at full precision.
///
/// ```no_run
/// # use lxtools_lxcat::{read_cross_section_set, write_table_csv};
/// let set = read_cross_section_set("./data/N2_Phelps.txt", None, None).unwrap();
/// write_table_csv(
///     &set.records[0].table,
///     ["Energy (eV)", "Cross section (m2)"],
///     "./elastic.csv",
/// )
/// .unwrap();
/// ```
pub fn write_table_csv<P: AsRef<Path>>(table: &Table, headers: [&str; 2], path: P) -> Result<()> {
    let mut writer = csv::Writer::from_writer(init_writer(path)?);
    writer.write_record(headers)?;
    for (energy, value) in table.iter() {
        writer.write_record([energy.to_string(), value.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Kind keyword through to the end of the table block
fn encode_record(record: &CrossSection) -> String {
    let mut s = f!("{}\n{}\n", record.kind(), record.species);
    if let Some(parameter) = record.parameter() {
        s += &f!("{}\n", parameter.shortest());
    }
    for (key, value) in &record.metadata {
        s += &f!("{key}: {value}\n");
    }
    s += &codec::encode(record.table.rows());
    s
}

/// Initialise a writer from anything that can be turned into a path
fn init_writer<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
    let path = path.as_ref();
    info!("Writing {:?}", path.file_name().unwrap_or(path.as_os_str()));
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Metadata, Process};
    use crate::reader::CrossSectionReader;

    fn elastic() -> CrossSection {
        let mut metadata = Metadata::new();
        metadata.insert("SPECIES".to_string(), "e / N2".to_string());
        metadata.insert(
            "PROCESS".to_string(),
            "E + N2 -> E + N2, Elastic".to_string(),
        );
        CrossSection {
            process: Process::Elastic { mass_ratio: 1.9e-5 },
            species: "N2".to_string(),
            metadata,
            table: Table::from(vec![[0.0, 1.1e-20], [1.5e-3, 1.42e-20]]),
        }
    }

    #[test]
    fn record_layout() {
        assert_eq!(
            encode_record(&elastic()),
            "ELASTIC
N2
1.9e-05
SPECIES: e / N2
PROCESS: E + N2 -> E + N2, Elastic
-----------------------------
0.000000e+00\t1.100000e-20
1.500000e-03\t1.420000e-20
-----------------------------

"
        );
    }

    #[test]
    fn attachment_has_no_parameter_line() {
        let record = CrossSection {
            process: Process::Attachment,
            species: "O2".to_string(),
            metadata: Metadata::new(),
            table: Table::from(vec![[5.0, 1.0e-22]]),
        };
        assert!(encode_record(&record).starts_with("ATTACHMENT\nO2\n-----"));
    }

    #[test]
    fn banner_and_database() {
        let set = CrossSectionSet {
            database: Some("Phelps database".to_string()),
            species: Some("N2".to_string()),
            records: vec![elastic()],
        };
        let text = to_lxcat_string(&set);
        assert!(text.starts_with(&f!("{BANNER}\n{SEPARATOR}\nDATABASE: Phelps database\n\nELASTIC\n")));
        assert!(text.ends_with(&f!("\n\n{SEPARATOR}\n")));

        let set = CrossSectionSet {
            database: None,
            ..set
        };
        assert!(!to_lxcat_string(&set).contains("DATABASE:"));
    }

    #[test]
    fn string_round_trip() {
        let mut ionization = elastic();
        ionization.process = Process::Ionization { threshold: 15.6 };
        ionization.metadata.clear();

        let set = CrossSectionSet {
            database: Some("Phelps database".to_string()),
            species: Some("N2".to_string()),
            records: vec![elastic(), ionization],
        };

        let text = to_lxcat_string(&set);
        let read = CrossSectionReader::new().parse_str(&text, "memory").unwrap();
        assert_eq!(read, set);
    }

    #[test]
    fn separator_is_not_a_delimiter() {
        assert!(!crate::parsers::is_delimiter(SEPARATOR));
    }
}
