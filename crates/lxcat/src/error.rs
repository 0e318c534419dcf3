//! Result and Error types for lxtools-lxcat

// standard library
use std::path::PathBuf;

/// Type alias for `Result<T, lxcat::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `lxtools-lxcat` crate
///
/// Line numbers are 1-based positions in the source text.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The source file does not exist or could not be opened
    #[error("unable to open {path:?}")]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Any other failure reading or writing a file
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    /// The file was read but no record satisfied the species/database filters
    #[error("no cross sections found for species {species:?} and database {database:?} in {file:?}")]
    CrossSectionReadingError {
        species: Option<String>,
        database: Option<String>,
        file: String,
    },

    /// Structural violation of a delimiter bounded table
    #[error("malformed table at line {line} ({reason}): {content:?}")]
    MalformedTable {
        line: usize,
        content: String,
        reason: String,
    },

    /// A numeric token failed to parse as a float
    #[error("invalid number at line {line}: {content:?}")]
    InvalidNumber { line: usize, content: String },

    /// Metadata line with no `KEY: value` separator
    #[error("malformed metadata at line {line}: {content:?}")]
    MalformedMetadata { line: usize, content: String },

    /// Keyword is not one of the five LXCat collision types
    #[error("unknown cross section kind \"{0}\"")]
    UnknownKind(String),

    /// Structural violation of a record header
    #[error("malformed record at line {line} ({reason}): {content:?}")]
    MalformedRecord {
        line: usize,
        content: String,
        reason: String,
    },

    /// Swarm data file name does not follow `Author_Year_Parameter.ext`
    #[error("invalid swarm data file name \"{0}\", expected \"Author_Year_Parameter.ext\"")]
    InvalidFileName(String),

    /// Failure to serialise to a JSON string
    #[error("failed serde JSON operation")]
    Json(#[from] serde_json::Error),

    /// Failure to write CSV records
    #[error("failed CSV operation")]
    Csv(#[from] csv::Error),
}
