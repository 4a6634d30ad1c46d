//! # halflife-core
//! Foundation types, constants and traits for the Halflife decay calculator.

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;
