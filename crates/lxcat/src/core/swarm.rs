// crate modules
use crate::core::Table;

// lxtools modules
use lxtools_format::f;

// external crates
use serde::{Deserialize, Serialize};

/// Swarm parameter measurement from the LXCat data center
///
/// Swarm data downloads are named `Author_Year_Parameter.txt`, which is the
/// only place the author, year and parameter are recorded. The body holds a
/// delimited two column table of reduced electric field E/N (Td) against the
/// measured parameter.
///
/// For example, `Bhalla_1960_alphaN.txt` holds the reduced Townsend
/// ionization coefficient measured by Bhalla in 1960.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwarmMeasurement {
    /// First author of the measurement
    pub author: String,
    /// Year of publication, kept as written in the file name
    pub year: String,
    /// Name of the measured parameter, i.e. `alphaN`
    pub parameter_name: String,
    /// Reduced field and parameter value rows
    pub data: Table,
}

impl SwarmMeasurement {
    /// Reduced electric field E/N column (Td)
    pub fn reduced_field(&self) -> Vec<f64> {
        self.data.energies()
    }

    /// Measured parameter column
    pub fn values(&self) -> Vec<f64> {
        self.data.values()
    }

    /// Number of measured points
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if no points were measured
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl std::fmt::Display for SwarmMeasurement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = "SwarmMeasurement {\n".to_string();
        s += &f!("    author: {}\n", self.author);
        s += &f!("    year: {}\n", self.year);
        s += &f!("    parameter: {}\n", self.parameter_name);
        s += &f!("    points: {}\n}}", self.data.len());
        write!(f, "{}", s)
    }
}
