// crate modules
use crate::core::{CrossSection, CrossSectionKind};
use crate::error::Result;
use crate::reader::CrossSectionReader;
use crate::writer;

// lxtools modules
use lxtools_format::{f, OptionFormat};

// standard library
use std::path::Path;

// external crates
use serde::{Deserialize, Serialize};

/// Collection of cross sections for one species from one database
///
/// This is the primary data structure returned by the reader. All records
/// share the same `species` and `database`, which are either the filters
/// given by the caller or the values adopted from the first record read.
///
/// Equality is exact on `database` and `species`, but the order of the
/// records is irrelevant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrossSectionSet {
    /// Name following the `DATABASE:` marker, if any
    pub database: Option<String>,
    /// Species filter in effect
    pub species: Option<String>,
    /// Cross section records in file order
    pub records: Vec<CrossSection>,
}

impl CrossSectionSet {
    /// Create a new empty [CrossSectionSet]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the first species/database found in a file
    ///
    /// Equivalent to [read_cross_section_set()](crate::read_cross_section_set)
    /// with no filters.
    ///
    /// ```rust, no_run
    /// # use lxtools_lxcat::CrossSectionSet;
    /// let set = CrossSectionSet::from_file("path/to/N2_Phelps.txt").unwrap();
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        CrossSectionReader::new().parse(path)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if there are no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records in file order
    pub fn iter(&self) -> std::slice::Iter<'_, CrossSection> {
        self.records.iter()
    }

    /// All records of a particular collision type
    ///
    /// ```rust
    /// # use lxtools_lxcat::{CrossSectionSet, CrossSectionKind};
    /// let set = CrossSectionSet::new();
    /// assert_eq!(set.records_of_kind(CrossSectionKind::Elastic).count(), 0);
    /// ```
    pub fn records_of_kind(
        &self,
        kind: CrossSectionKind,
    ) -> impl Iterator<Item = &CrossSection> + '_ {
        self.records.iter().filter(move |record| record.kind() == kind)
    }

    /// Find a record by its `PROCESS` metadata entry
    ///
    /// For example `"E + N2 -> E + N2, Elastic"`.
    pub fn find_process(&self, process: &str) -> Option<&CrossSection> {
        self.records
            .iter()
            .find(|record| record.get_metadata("PROCESS") == Some(process))
    }

    /// Serialise the set to LXCat formatted text
    pub fn to_lxcat_string(&self) -> String {
        writer::to_lxcat_string(self)
    }
}

impl PartialEq for CrossSectionSet {
    fn eq(&self, other: &Self) -> bool {
        if self.database != other.database
            || self.species != other.species
            || self.records.len() != other.records.len()
        {
            return false;
        }

        // every record must pair up with a distinct record on the other side
        let mut unmatched: Vec<&CrossSection> = other.records.iter().collect();
        for record in &self.records {
            match unmatched.iter().position(|candidate| *candidate == record) {
                Some(idx) => {
                    unmatched.swap_remove(idx);
                }
                None => return false,
            }
        }
        true
    }
}

impl<'a> IntoIterator for &'a CrossSectionSet {
    type Item = &'a CrossSection;
    type IntoIter = std::slice::Iter<'a, CrossSection>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl std::fmt::Display for CrossSectionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = "CrossSectionSet {\n".to_string();
        s += &f!("    database: {}\n", self.database.display());
        s += &f!("    species: {}\n", self.species.display());
        for kind in CrossSectionKind::ALL {
            let count = self.records_of_kind(kind).count();
            if count > 0 {
                s += &f!("    {kind}: {count}\n");
            }
        }
        s += &f!("    records: {}\n}}", self.records.len());
        write!(f, "{}", s)
    }
}
