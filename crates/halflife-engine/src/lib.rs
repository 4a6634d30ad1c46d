//! # halflife-engine: Closed-form radioactive decay engine.
//!
//! Every function here is pure: no I/O, no shared state, O(steps) at most.
//!
//! - **Unit conversion**: spans in seconds through years, Julian year of 365.25 days.
//! - **Decay law**: `N(t) = N0 · exp(−λ · t)` for scalars and time vectors.
//! - **Mass ↔ count**: via Avogadro's number and the isotope's atomic weight.
//! - **Series**: evenly spaced samples of one decay curve, ready for plotting
//!   or export.
//! - **Simulation**: the calculator workflow, from an initial mass or count
//!   and a display unit to a labelled report.

pub mod engine;
pub mod law;
pub mod series;
pub mod simulation;
pub mod units;

pub use engine::DecayEngine;
pub use law::{decay, decay_all, mass_to_nuclei, nuclei_to_mass};
pub use series::{build_series, effective_span, time_grid};
pub use simulation::{simulate, InitialQuantity, SimulationReport, SimulationRequest};
pub use units::{from_years, to_years};
