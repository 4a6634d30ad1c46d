//! Exponential decay law and mass ↔ nuclide-count conversion.

use halflife_core::constants::AVOGADRO;
use num_traits::Float;

/// Quantity remaining after `t`: `initial · exp(−λ · t)`.
///
/// `decay_constant` and `t` must share a time base (years throughout this
/// workspace). No sign validation: a negative decay constant yields growth.
///
/// # Examples
///
/// ```
/// use halflife_engine::decay;
/// assert_eq!(decay(1.0e20_f64, 0.02298, 0.0), 1.0e20);
/// let after_one_half_life = decay(1.0e20_f64, 0.02298, 30.17);
/// assert!((after_one_half_life / 5.0e19 - 1.0).abs() < 1e-3);
/// ```
pub fn decay<F: Float>(initial: F, decay_constant: F, t: F) -> F {
    initial * (-(decay_constant * t)).exp()
}

/// Elementwise [`decay`] over a time vector.
pub fn decay_all<F: Float>(initial: F, decay_constant: F, times: &[F]) -> Vec<F> {
    times
        .iter()
        .map(|&t| decay(initial, decay_constant, t))
        .collect()
}

/// Number of nuclides in `mass_grams` of an isotope.
///
/// Returns 0 for a non-positive (or NaN) atomic weight, so malformed catalog
/// entries degrade to an empty sample instead of dividing by zero.
pub fn mass_to_nuclei(mass_grams: f64, atomic_weight: f64) -> f64 {
    if !(atomic_weight > 0.0) {
        return 0.0;
    }
    (mass_grams / atomic_weight) * AVOGADRO
}

/// Mass in grams of `count` nuclides.
pub fn nuclei_to_mass(count: f64, atomic_weight: f64) -> f64 {
    (count / AVOGADRO) * atomic_weight
}
