//! Parsers and logic for reading LXCat files
//!
//! All functions are re-exported to the crate root for easy access.
//!
//! # Quickstart
//!
//! The simplest methods for reading data are the convenience functions:
//!
//! ```rust, no_run
//! # use lxtools_lxcat::{read_cross_section_set, read_swarm_measurement};
//! // Read the first species/database found in a file
//! let set = read_cross_section_set("path/to/N2_Phelps.txt", None, None).unwrap();
//!
//! // Read only the N2 records of the Phelps database
//! let set = read_cross_section_set(
//!     "path/to/N2_Phelps.txt",
//!     Some("N2"),
//!     Some("Phelps database"),
//! )
//! .unwrap();
//!
//! // Read a swarm measurement, named as Author_Year_Parameter
//! let swarm = read_swarm_measurement("path/to/Bhalla_1960_alphaN.txt").unwrap();
//! ```
//!
//! Under the hood these initialise the [CrossSectionReader]. This is made
//! public for fine control, for example to collect every record in a file
//! regardless of species.
//!
//! ```rust, no_run
//! # use lxtools_lxcat::reader::{Adoption, CrossSectionReader};
//! let mut reader = CrossSectionReader::new();
//! reader.set_adoption(Adoption::Never);
//! let everything = reader.parse("path/to/mixed.txt").unwrap();
//! ```
//!
//! # File structure
//!
//! A cross section file is free text with records scattered through it. Each
//! record starts at a line holding only one of the keywords `ELASTIC`,
//! `EFFECTIVE`, `EXCITATION`, `ATTACHMENT` or `IONIZATION`:
//!
//! ```text
//! DATABASE:         Phelps database
//!
//! ELASTIC
//! N2
//!  1.900000e-5
//! SPECIES: e / N2
//! PROCESS: E + N2 -> E + N2, Elastic
//! -----------------------------
//!  0.000000e+0	1.100000e-20
//!  1.500000e-3	1.420000e-20
//! -----------------------------
//! ```
//!
//! - The line after the keyword names the species, only the first word counts
//! - All kinds except `ATTACHMENT` then have a parameter line, the mass ratio
//!   for `ELASTIC`/`EFFECTIVE` and the threshold energy in eV otherwise
//! - `KEY: value` metadata lines follow up to the table start marker
//! - The table is closed by a second line of dashes
//!
//! Anything outside of a record is ignored, except for `DATABASE:` lines which
//! set the database of all records that follow.

// reader modules
mod filter;
mod lxcat;
mod swarm;

// re-exports for clean API + documentation
#[doc(inline)]
pub use filter::Adoption;

#[doc(inline)]
pub use lxcat::CrossSectionReader;

#[doc(inline)]
pub use swarm::{filename_from_path, read_swarm_measurement};

// library imports
use crate::core::CrossSectionSet;
use crate::error::Result;
use std::path::Path;

/// Read the cross sections for one species and database
///
/// Returns a [CrossSectionSet] of every record in the file at `path` matching
/// both filters.
///
/// - `path` - Path to the LXCat file, can be [&str], [String], [Path], etc...
/// - `species` - Species of interest, or `None` to take the first one found
/// - `database` - Database of interest, or `None` to take the first one found
///
/// Example
/// ```rust, no_run
/// # use lxtools_lxcat::read_cross_section_set;
/// // Read only the N2 records, from whichever database comes first
/// let set = read_cross_section_set("path/to/N2_Phelps.txt", Some("N2"), None).unwrap();
/// ```
pub fn read_cross_section_set<P: AsRef<Path>>(
    path: P,
    species: Option<&str>,
    database: Option<&str>,
) -> Result<CrossSectionSet> {
    let mut reader = CrossSectionReader::new();
    if let Some(species) = species {
        reader.set_species(species);
    }
    if let Some(database) = database {
        reader.set_database(database);
    }
    reader.parse(path)
}
