//! Calculator workflow: initial quantity + span in a display unit → labelled report.
//!
//! The time axis is laid out in the caller's display unit and each point is
//! converted to years for the decay law, so exported time values are exactly
//! the grid the user asked for. Mass inputs are converted to nuclides, decayed,
//! and converted back to grams.

use halflife_core::error::ArgumentError;
use halflife_core::traits::DecayCalculator;
use halflife_core::types::{
    quantity_column_label, time_column_label, Isotope, QuantityKind, TimeSeries, TimeUnit,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::law::{mass_to_nuclei, nuclei_to_mass};
use crate::series::{effective_span, time_grid};

/// Initial amount of the isotope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InitialQuantity {
    /// Grams.
    Mass(f64),
    /// Nuclide count (N0).
    Nuclei(f64),
}

impl InitialQuantity {
    pub fn kind(&self) -> QuantityKind {
        match self {
            Self::Mass(_) => QuantityKind::Mass,
            Self::Nuclei(_) => QuantityKind::Nuclei,
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            Self::Mass(v) | Self::Nuclei(v) => *v,
        }
    }

    /// Nuclide count represented by this quantity for an isotope of `atomic_weight`.
    pub fn to_nuclei(&self, atomic_weight: f64) -> f64 {
        match self {
            Self::Mass(grams) => mass_to_nuclei(*grams, atomic_weight),
            Self::Nuclei(count) => *count,
        }
    }
}

/// Parameters of one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub initial: InitialQuantity,
    /// λ in years⁻¹. May differ from the catalog value when the user overrides it.
    pub decay_constant: f64,
    /// Length of the time axis in `unit`. Non-positive spans fall back to the default.
    pub span: f64,
    pub unit: TimeUnit,
    pub steps: u32,
    /// Grams per mole, used for mass ↔ count conversion.
    pub atomic_weight: f64,
}

impl SimulationRequest {
    /// Request using the catalog's decay constant and atomic weight for `isotope`.
    pub fn for_isotope(
        isotope: &Isotope,
        initial: InitialQuantity,
        span: f64,
        unit: TimeUnit,
        steps: u32,
    ) -> Self {
        Self {
            initial,
            decay_constant: isotope.decay_constant,
            span,
            unit,
            steps,
            atomic_weight: isotope.atomic_weight,
        }
    }

    /// Replace the decay constant, keeping every other parameter.
    pub fn with_decay_constant(self, decay_constant: f64) -> Self {
        Self {
            decay_constant,
            ..self
        }
    }
}

/// Result of a simulation run, expressed in the caller's units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Time in `time_unit`, quantity in `quantity_kind`.
    pub series: TimeSeries,
    /// Quantity left after the requested span, which may differ from the
    /// plotted span when the request fell back to the default.
    pub final_quantity: f64,
    /// N0 after any mass conversion.
    pub initial_nuclei: f64,
    pub quantity_kind: QuantityKind,
    pub time_unit: TimeUnit,
    /// Span actually plotted, in `time_unit`.
    pub span: f64,
}

impl SimulationReport {
    pub fn time_label(&self) -> String {
        time_column_label(self.time_unit)
    }

    pub fn quantity_label(&self) -> String {
        quantity_column_label(self.quantity_kind)
    }
}

/// Run the calculator workflow with `calculator`.
///
/// # Examples
///
/// ```
/// use halflife_core::types::TimeUnit;
/// use halflife_engine::{simulate, DecayEngine, InitialQuantity, SimulationRequest};
///
/// let request = SimulationRequest {
///     initial: InitialQuantity::Nuclei(1.0e20),
///     decay_constant: 0.02298,
///     span: 30.17,
///     unit: TimeUnit::Years,
///     steps: 10,
///     atomic_weight: 136.907,
/// };
/// let report = simulate(&DecayEngine, &request).unwrap();
/// assert_eq!(report.series.len(), 11);
/// assert!((report.final_quantity / 5.0e19 - 1.0).abs() < 1e-3);
/// ```
pub fn simulate<D: DecayCalculator + ?Sized>(
    calculator: &D,
    request: &SimulationRequest,
) -> Result<SimulationReport, ArgumentError> {
    if request.steps == 0 {
        return Err(ArgumentError::ZeroSteps);
    }

    let span = effective_span(request.span);
    let times: Vec<f64> = time_grid(span, request.steps).collect();
    let times_years: Vec<f64> = times.iter().map(|&t| request.unit.to_years(t)).collect();

    let initial_nuclei = request.initial.to_nuclei(request.atomic_weight);
    let nuclei = calculator.decay_all(initial_nuclei, request.decay_constant, &times_years);
    let nuclei_series: TimeSeries = times.into_iter().zip(nuclei).collect();

    // The final value uses the requested span; only the plot falls back to the default.
    let final_span = if request.span.is_finite() { request.span } else { span };
    let final_nuclei = calculator.decay(
        initial_nuclei,
        request.decay_constant,
        request.unit.to_years(final_span),
    );

    let quantity_kind = request.initial.kind();
    let (series, final_quantity) = match quantity_kind {
        QuantityKind::Nuclei => (nuclei_series, final_nuclei),
        QuantityKind::Mass => {
            let to_mass = |n| nuclei_to_mass(n, request.atomic_weight);
            (nuclei_series.map_quantities(to_mass), to_mass(final_nuclei))
        }
    };

    debug!(
        kind = %quantity_kind,
        unit = %request.unit,
        span,
        steps = request.steps,
        final_quantity,
        "simulation complete"
    );

    Ok(SimulationReport {
        series,
        final_quantity,
        initial_nuclei,
        quantity_kind,
        time_unit: request.unit,
        span,
    })
}
