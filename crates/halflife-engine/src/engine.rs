//! Decay engine implementing the [`DecayCalculator`] trait.

use halflife_core::error::ArgumentError;
use halflife_core::traits::DecayCalculator;
use halflife_core::types::TimeSeries;

use crate::{law, series};

/// The production decay calculator: closed-form exponential decay in `f64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecayEngine;

impl DecayEngine {
    /// Create a new DecayEngine.
    pub fn new() -> Self {
        Self
    }
}

impl DecayCalculator for DecayEngine {
    fn decay(&self, initial: f64, decay_constant: f64, t_years: f64) -> f64 {
        law::decay(initial, decay_constant, t_years)
    }

    fn decay_all(&self, initial: f64, decay_constant: f64, times_years: &[f64]) -> Vec<f64> {
        law::decay_all(initial, decay_constant, times_years)
    }

    fn build_series(
        &self,
        initial: f64,
        decay_constant: f64,
        t_max_years: f64,
        steps: u32,
    ) -> Result<TimeSeries, ArgumentError> {
        series::build_series(initial, decay_constant, t_max_years, steps)
    }
}
