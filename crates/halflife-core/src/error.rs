//! Error types for the Halflife calculator.
use thiserror::Error;

/// A caller-supplied value the engine or catalog cannot work with.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArgumentError {
    #[error("half-life must be positive: {0}")] NonPositiveHalfLife(f64),
    #[error("atomic weight must be positive: {0}")] NonPositiveAtomicWeight(f64),
    #[error("unknown time unit: {0}")] UnknownTimeUnit(String),
    #[error("step count must be positive")] ZeroSteps,
    #[error("isotope name is empty")] EmptyName,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("isotope not found: {0}")] NotFound(String),
    #[error("cannot remove {0}: catalog must keep at least one isotope")] WouldBeEmpty(String),
    #[error(transparent)] Argument(#[from] ArgumentError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("I/O: {0}")] Io(String),
    #[error("serialization: {0}")] Serialization(String),
    #[error("corrupted catalog: {0}")] Corrupted(String),
}

#[derive(Error, Debug)]
pub enum HalflifeError {
    #[error(transparent)] Argument(#[from] ArgumentError),
    #[error(transparent)] Catalog(#[from] CatalogError),
    #[error(transparent)] Storage(#[from] StorageError),
}
