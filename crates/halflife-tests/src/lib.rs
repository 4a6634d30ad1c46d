//! Cross-crate scenario tests for halflife.
//!
//! The tests in `tests/` drive the catalog, engine and export crates together
//! the way the CLI does, and check the worked examples against known values.

pub mod helpers;
