// crate modules
use crate::codec;
use crate::core::{SwarmMeasurement, Table};
use crate::cursor::LineCursor;
use crate::error::{Error, Result};
use crate::reader::lxcat::read_to_string;

// standard library
use std::path::Path;

// external crates
use log::{debug, info, warn};

/// Read a swarm parameter measurement
///
/// The author, year and parameter come from the file name, which must follow
/// the `Author_Year_Parameter.ext` convention. A name that does not is
/// reported as [Error::InvalidFileName] before the file is opened.
///
/// The body is a delimited table of reduced field E/N against the parameter.
///
/// Example
/// ```rust, no_run
/// # use lxtools_lxcat::read_swarm_measurement;
/// let swarm = read_swarm_measurement("path/to/Bhalla_1960_alphaN.txt").unwrap();
///
/// assert_eq!(swarm.author, "Bhalla");
/// assert_eq!(swarm.year, "1960");
/// assert_eq!(swarm.parameter_name, "alphaN");
/// ```
pub fn read_swarm_measurement<P: AsRef<Path>>(path: P) -> Result<SwarmMeasurement> {
    let path = path.as_ref();
    let name = filename_from_path(&path.to_string_lossy());

    let (author, year, parameter_name) = match split_swarm_name(&name) {
        Some(parts) => parts,
        None => {
            warn!("Incorrect file name {name:?}, please use the format \"Author_Year_Parameter.txt\"");
            return Err(Error::InvalidFileName(name));
        }
    };

    info!("Reading {name:?}");
    let content = read_to_string(path)?;
    let rows = codec::decode::<2>(&mut LineCursor::new(&content))?;
    debug!("{author} ({year}) {parameter_name}: {} points", rows.len());

    Ok(SwarmMeasurement {
        author: author.to_string(),
        year: year.to_string(),
        parameter_name: parameter_name.to_string(),
        data: Table::from(rows),
    })
}

/// Name of a file without its directories or extension
///
/// Both `/` and `\` separators are understood regardless of platform, and
/// everything from the first `.` is dropped.
///
/// ```rust
/// # use lxtools_lxcat::filename_from_path;
/// assert_eq!(filename_from_path("data/Bhalla_1960_alphaN.txt"), "Bhalla_1960_alphaN");
/// assert_eq!(filename_from_path("C:\\data\\swarm\\file.tar.gz"), "file");
/// assert_eq!(filename_from_path("pa/t.test"), "t");
/// ```
pub fn filename_from_path(path: &str) -> String {
    let path = path.replace('\\', "/");
    let name = path.rsplit('/').next().unwrap_or_default();
    name.split('.').next().unwrap_or_default().to_string()
}

/// Split `Author_Year_Parameter` into its parts
///
/// Anything after a third underscore is ignored, but all three parts must be
/// present and non-empty.
fn split_swarm_name(name: &str) -> Option<(&str, &str, &str)> {
    let mut parts = name.split('_');
    let author = parts.next().filter(|s| !s.is_empty())?;
    let year = parts.next().filter(|s| !s.is_empty())?;
    let parameter = parts.next().filter(|s| !s.is_empty())?;
    Some((author, year, parameter))
}
