//! Built-in reference isotopes.
//!
//! Decay constants are the reference values in years⁻¹, stored as-is rather
//! than derived from the half-lives.

use halflife_core::types::{Isotope, IsotopeMap, TimeUnit};

/// `(name, λ per year, half-life, unit, atomic weight)`.
const REFERENCE_DATA: [(&str, f64, f64, TimeUnit, f64); 7] = [
    ("Césio-137", 0.02298, 30.17, TimeUnit::Years, 136.907),
    ("Bário-137m", 236.6, 2.55, TimeUnit::Minutes, 136.9),
    ("Carbono-14", 1.20968e-4, 5730.0, TimeUnit::Years, 14.003),
    ("Tório-232", 4.95105e-11, 1.4e10, TimeUnit::Years, 232.038),
    ("Cobalto-60", 0.1315, 5.27, TimeUnit::Years, 59.933),
    ("Iodo-131", 31.55, 8.02, TimeUnit::Days, 130.906),
    ("Urânio-238", 1.551e-10, 4.468e9, TimeUnit::Years, 238.050),
];

/// Number of built-in isotopes.
pub const DEFAULT_ISOTOPE_COUNT: usize = REFERENCE_DATA.len();

/// The built-in catalog contents.
pub fn default_isotopes() -> IsotopeMap {
    REFERENCE_DATA
        .iter()
        .map(|&(name, decay_constant, half_life, half_life_unit, atomic_weight)| {
            (
                name.to_string(),
                Isotope {
                    decay_constant,
                    half_life,
                    half_life_unit,
                    atomic_weight,
                },
            )
        })
        .collect()
}
