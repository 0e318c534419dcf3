//! `lxtools` is a small toolkit for working with LXCat electron scattering
//! data used in low-temperature plasma modelling
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use lxtools_format as format;

#[cfg(feature = "lxcat")]
#[cfg_attr(docsrs, doc(cfg(feature = "lxcat")))]
#[doc(inline)]
pub use lxtools_lxcat as lxcat;
