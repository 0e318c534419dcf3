//! Reading and writing LXCat cross section and swarm data
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod codec;
mod core;
mod cursor;
mod error;
mod parsers;
mod writer;

pub mod reader;

// inline important the reader functions for a nice public API
#[doc(inline)]
pub use reader::{
    filename_from_path, read_cross_section_set, read_swarm_measurement, Adoption,
};

#[doc(inline)]
pub use crate::core::{
    CrossSection, CrossSectionKind, CrossSectionSet, Metadata, Process, SwarmMeasurement, Table,
};

#[doc(inline)]
pub use writer::{
    to_lxcat_string, write_cross_section_set, write_json, write_swarm_json, write_table_csv,
};

#[doc(inline)]
pub use error::{Error, Result};
