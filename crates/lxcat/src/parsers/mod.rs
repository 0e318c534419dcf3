// All nom parsers split among files for organisation
mod marker;
mod metadata;
mod number;

// Internal re-exports for convenience
pub(crate) use marker::*;
pub(crate) use metadata::*;
pub(crate) use number::*;
