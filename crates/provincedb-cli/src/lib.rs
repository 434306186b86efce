//! provincedb-cli
//! ==============
//!
//! Command-line interface for the `provincedb-core` lookup library.
//!
//! This crate primarily provides a binary (`provincedb`). The small library
//! target exists so that docs.rs renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! provincedb --help
//! provincedb stats
//! provincedb zip 10200
//! provincedb district พระนคร
//! provincedb --locale en city " bangkok "
//! provincedb --input provinces.json.gz build provinces.bin
//! ```
//!
//! For programmatic access use the [`provincedb-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
