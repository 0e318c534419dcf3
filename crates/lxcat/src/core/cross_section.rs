// crate modules
use crate::core::{CrossSectionKind, Process, Table};

// lxtools modules
use lxtools_format::{f, FloatFormat, OptionFormat};

// external crates
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Free-form `KEY: value` lines of a record, in file order
///
/// Comparison between two [Metadata] maps ignores the order of the entries.
pub type Metadata = IndexMap<String, String>;

/// A single cross section record
///
/// Every record in an LXCat file follows the same layout:
///
/// ```text
/// EXCITATION                                  <- kind keyword
/// N2 -> N2(v1)                                <- species (first word)
///  2.900000e-1                                <- parameter line
/// PROCESS: E + N2 -> E + N2(v1), Excitation   <- zero or more metadata
/// COLUMNS: Energy (eV) | Cross section (m2)
/// -----------------------------
///  2.900000e-1    0.000000e+0                 <- energy/cross section
///  3.000000e-1    2.600000e-22
/// -----------------------------
/// ```
///
/// The parameter line is absent for attachment records, and its meaning
/// otherwise depends on the kind. See [Process].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossSection {
    /// Collision type and its parameter
    pub process: Process,
    /// Target species, i.e. `N2`
    pub species: String,
    /// Ordered `KEY: value` metadata
    pub metadata: Metadata,
    /// Energy (eV) and cross section (m2) rows
    pub table: Table,
}

impl CrossSection {
    /// Collision type of the record
    pub fn kind(&self) -> CrossSectionKind {
        self.process.kind()
    }

    /// Electron/target mass ratio, only for elastic and effective records
    pub fn mass_ratio(&self) -> Option<f64> {
        self.process.mass_ratio()
    }

    /// Threshold energy (eV), only for excitation and ionization records
    pub fn threshold(&self) -> Option<f64> {
        self.process.threshold()
    }

    /// Value of the parameter line, if the kind has one
    pub fn parameter(&self) -> Option<f64> {
        self.process.parameter()
    }

    /// Look up a metadata value by its key, i.e. `"PROCESS"`
    pub fn get_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

impl std::fmt::Display for CrossSection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = f!("{} {{\n", self.kind());
        s += &f!("    species: {}\n", self.species);
        s += &f!(
            "    parameter: {}\n",
            self.parameter().map(|p| p.shortest()).display()
        );
        s += &f!("    metadata: {} entries\n", self.metadata.len());
        s += &f!("    rows: {}\n}}", self.table.len());
        write!(f, "{}", s)
    }
}
