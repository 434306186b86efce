//! Umbrella crate for the provincedb workspace.
//!
//! Re-exports [`provincedb_core`] so the demos under `demos/` can be run with
//! `cargo run --example <name>` from the workspace root.

pub use provincedb_core::*;
