//! Trait interfaces between Halflife crates.
//!
//! - [`DecayCalculator`]: decay law evaluation (halflife-engine implements)
//! - [`CatalogPersistence`]: durable isotope catalog storage (halflife-catalog implements)

use crate::error::{ArgumentError, StorageError};
use crate::types::{IsotopeMap, TimeSeries};

/// Pure evaluation of the exponential decay law.
///
/// Implementations carry no state; every call is an independent evaluation.
/// Decay constants are in years⁻¹ and times in years.
pub trait DecayCalculator: Send + Sync {
    /// Quantity remaining after `t_years`: `initial · exp(−λ · t)`.
    fn decay(&self, initial: f64, decay_constant: f64, t_years: f64) -> f64;

    /// Elementwise [`decay`](Self::decay) over a time vector.
    fn decay_all(&self, initial: f64, decay_constant: f64, times_years: &[f64]) -> Vec<f64> {
        times_years
            .iter()
            .map(|&t| self.decay(initial, decay_constant, t))
            .collect()
    }

    /// Sample the decay curve at `steps + 1` evenly spaced times over `[0, t_max_years]`.
    fn build_series(
        &self,
        initial: f64,
        decay_constant: f64,
        t_max_years: f64,
        steps: u32,
    ) -> Result<TimeSeries, ArgumentError>;
}

/// Durable storage for the isotope catalog.
///
/// The catalog never touches the storage medium itself; it hands a snapshot to
/// the implementation after each mutation.
pub trait CatalogPersistence: Send {
    /// Read the stored catalog. `Ok(None)` means nothing has been stored yet.
    fn load(&self) -> Result<Option<IsotopeMap>, StorageError>;

    /// Durably replace the stored catalog with `snapshot`.
    fn save(&mut self, snapshot: &IsotopeMap) -> Result<(), StorageError>;
}
