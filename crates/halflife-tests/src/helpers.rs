//! Shared test helpers.

use halflife_catalog::IsotopeCatalog;
use halflife_core::types::{Isotope, IsotopeMap, TimeUnit};

/// Relative difference between `a` and `b`, scaled by the larger magnitude.
pub fn rel_diff(a: f64, b: f64) -> f64 {
    let scale = a.abs().max(b.abs());
    if scale == 0.0 { 0.0 } else { (a - b).abs() / scale }
}

/// Catalog holding exactly one isotope.
pub fn single_entry_catalog(name: &str) -> IsotopeCatalog {
    let iso = Isotope::from_half_life(14.003, 5730.0, TimeUnit::Years)
        .expect("valid isotope");
    let mut map = IsotopeMap::new();
    map.insert(name.to_string(), iso);
    IsotopeCatalog::from_entries(map).expect("non-empty map")
}
