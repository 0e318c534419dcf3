// crate modules
use crate::codec;
use crate::core::{CrossSection, CrossSectionKind, CrossSectionSet, Metadata, Process, Table};
use crate::cursor::LineCursor;
use crate::error::{Error, Result};
use crate::parsers::{
    database_name, first_f64, is_delimiter, is_new_record, key_value, kind_keyword,
};
use crate::reader::filter::{Adoption, Filter};

// standard library
use std::fs::File;
use std::io::Read;
use std::path::Path;

// external crates
use log::{debug, info, trace, warn};

/// A configurable reader for LXCat cross section files
///
/// The file is scanned once from top to bottom. Every record header is
/// checked against the species and database filters, and only the records
/// that pass are parsed into the [CrossSectionSet]. Records that fail are
/// still consumed so the scan stays aligned with the file structure.
///
/// Filters left unset are handled by the [Adoption] policy, which by default
/// binds them to the first record read.
///
/// Minimal Example:
/// ```rust, no_run
/// # use lxtools_lxcat::reader::CrossSectionReader;
/// let mut reader = CrossSectionReader::new();
/// reader.set_species("N2");
/// reader.set_database("Phelps database");
/// let set = reader.parse("path/to/N2_Phelps.txt").unwrap();
/// ```
#[derive(Debug, Default)]
pub struct CrossSectionReader {
    /// Only collect records for this species
    species: Option<String>,
    /// Only collect records from this database
    database: Option<String>,
    /// Policy for the filters left unset
    adoption: Adoption,
}

// ! ------------------------------------------------------------------------
// !                                Public API
// ! ------------------------------------------------------------------------

impl CrossSectionReader {
    /// Just calls Default::default(), nothing special to be initialised
    pub fn new() -> Self {
        Default::default()
    }

    /// Setter for the species filter, i.e. `"N2"`
    pub fn set_species(&mut self, species: &str) {
        self.species = Some(species.to_string());
    }

    /// Setter for the database filter, i.e. `"Phelps database"`
    pub fn set_database(&mut self, database: &str) {
        self.database = Some(database.to_string());
    }

    /// Setter for the policy applied to unset filters
    pub fn set_adoption(&mut self, adoption: Adoption) {
        self.adoption = adoption;
    }

    /// Parse the cross section file at `path`
    ///
    /// Fails with [Error::FileNotFound] before any scanning if the file can
    /// not be opened.
    pub fn parse<P: AsRef<Path>>(&self, path: P) -> Result<CrossSectionSet> {
        let path = path.as_ref();
        info!("Reading {:?}", path.file_name().unwrap_or(path.as_os_str()));

        let content = read_to_string(path)?;
        self.parse_str(&content, &path.display().to_string())
    }

    /// Parse cross sections from text already in memory
    ///
    /// The `source` name is only used for error reporting.
    ///
    /// ```rust
    /// # use lxtools_lxcat::reader::CrossSectionReader;
    /// let text = "DATABASE: Example\nATTACHMENT\nO2\n-----\n5.0 1.0e-22\n-----\n";
    /// let set = CrossSectionReader::new().parse_str(text, "example").unwrap();
    ///
    /// assert_eq!(set.species.as_deref(), Some("O2"));
    /// assert_eq!(set.records[0].table.len(), 1);
    /// ```
    pub fn parse_str(&self, content: &str, source: &str) -> Result<CrossSectionSet> {
        Scanner::new(self, content).run(source)
    }
}

// ! ------------------------------------------------------------------------
// !                             Internal scanner
// ! ------------------------------------------------------------------------

/// Scan state for a single parse call
struct Scanner<'a> {
    cursor: LineCursor<'a>,
    species: Filter,
    database: Filter,
    /// Most recent `DATABASE:` value seen in the file
    current_database: Option<String>,
    records: Vec<CrossSection>,
}

impl<'a> Scanner<'a> {
    fn new(reader: &CrossSectionReader, content: &'a str) -> Self {
        Self {
            cursor: LineCursor::new(content),
            species: Filter::new("species", reader.species.clone(), reader.adoption),
            database: Filter::new("database", reader.database.clone(), reader.adoption),
            current_database: None,
            records: Vec::new(),
        }
    }

    fn run(mut self, source: &str) -> Result<CrossSectionSet> {
        while let Some(line) = self.cursor.next_line() {
            if let Ok((_, name)) = database_name(line) {
                debug!("Database set to {name:?} at line {}", self.cursor.line_number());
                self.current_database = Some(name.to_string());
            } else if let Ok((_, kind)) = kind_keyword(line) {
                self.parse_record(kind)?;
            }
        }

        if self.records.is_empty() {
            return Err(Error::CrossSectionReadingError {
                species: self.species.into_value(),
                database: self.database.into_value(),
                file: source.to_string(),
            });
        }

        debug!(
            "Collected {} cross sections for {:?} from {:?}",
            self.records.len(),
            self.species.value(),
            self.database.value()
        );
        Ok(CrossSectionSet {
            database: self.database.into_value(),
            species: self.species.into_value(),
            records: self.records,
        })
    }

    /// Handle everything following a kind keyword up to the table end marker
    fn parse_record(&mut self, kind: CrossSectionKind) -> Result<()> {
        let header = self.cursor.line_number();
        let species = self.species_line()?;
        let database = self.current_database.clone();

        if !(self.species.admits(Some(species.as_str())) && self.database.admits(database.as_deref())) {
            debug!("Skipping {kind} {species} ({database:?}) at line {header}");
            return self.skip_record(kind);
        }
        debug!("Reading {kind} {species} at line {header}");

        let process = match kind {
            CrossSectionKind::Attachment => Process::Attachment,
            kind => Process::with_parameter(kind, self.parameter_line()?),
        };
        let metadata = self.metadata_lines()?;
        let table = Table::from(codec::decode::<2>(&mut self.cursor)?);
        debug!("  {} metadata entries, {} rows", metadata.len(), table.len());

        self.species.adopt(Some(species.as_str()));
        self.database.adopt(database.as_deref());

        let record = CrossSection {
            process,
            species,
            metadata,
            table,
        };
        trace!("{record:#?}");
        self.records.push(record);
        Ok(())
    }

    /// Consume a filtered out record without interpreting its table
    ///
    /// Everything up to the table is checked as for an accepted record.
    fn skip_record(&mut self, kind: CrossSectionKind) -> Result<()> {
        if kind.has_parameter() {
            self.required_line("parameter line missing")?;
        }
        self.metadata_lines()?;
        let rows = codec::skip(&mut self.cursor)?;
        trace!("  skipped {rows} rows");
        Ok(())
    }

    /// First word of the line following the kind keyword
    fn species_line(&mut self) -> Result<String> {
        let line = self.required_line("species line missing")?;
        line.split_whitespace()
            .next()
            .map(str::to_string)
            .ok_or_else(|| Error::MalformedRecord {
                line: self.cursor.line_number(),
                content: line.to_string(),
                reason: "species missing".to_string(),
            })
    }

    /// Mass ratio or threshold, the first value on the line
    fn parameter_line(&mut self) -> Result<f64> {
        let line = self.required_line("parameter line missing")?;
        match first_f64(line) {
            Ok((_, value)) => Ok(value),
            Err(_) => Err(Error::InvalidNumber {
                line: self.cursor.line_number(),
                content: line.to_string(),
            }),
        }
    }

    /// Collect `KEY: value` lines up to, but not including, the table marker
    fn metadata_lines(&mut self) -> Result<Metadata> {
        let mut metadata = Metadata::new();

        while let Some(line) = self.cursor.peek() {
            if is_delimiter(line) {
                break;
            }
            if is_new_record(line) {
                return Err(Error::MalformedRecord {
                    line: self.cursor.line_number() + 1,
                    content: line.to_string(),
                    reason: "table missing before the next record".to_string(),
                });
            }
            self.cursor.next_line();

            if line.trim().is_empty() {
                continue;
            }

            let (key, value) = match key_value(line) {
                Ok((_, pair)) => pair,
                Err(_) => {
                    return Err(Error::MalformedMetadata {
                        line: self.cursor.line_number(),
                        content: line.to_string(),
                    })
                }
            };

            if metadata
                .insert(key.to_string(), value.to_string())
                .is_some()
            {
                warn!(
                    "Duplicate metadata key {key:?} at line {}, keeping the last value",
                    self.cursor.line_number()
                );
            }
        }

        Ok(metadata)
    }

    /// Next line, where running out of input is a broken record
    fn required_line(&mut self, reason: &str) -> Result<&'a str> {
        self.cursor
            .next_line()
            .ok_or_else(|| Error::MalformedRecord {
                line: self.cursor.line_number(),
                content: String::new(),
                reason: reason.to_string(),
            })
    }
}

/// Read a whole file, separating failure to open from failure to read
pub(crate) fn read_to_string(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|source| Error::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(content)
}
