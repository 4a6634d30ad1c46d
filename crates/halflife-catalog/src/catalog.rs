//! In-memory isotope catalog.
//!
//! Rules:
//! 1. Names are unique; adding an existing name overwrites it.
//! 2. The catalog never becomes empty.
//! 3. Records added from a half-life get `λ = ln 2 / half-life (years)`;
//!    λ is never recomputed afterwards.

use halflife_core::constants::DEFAULT_ISOTOPE;
use halflife_core::error::{ArgumentError, CatalogError};
use halflife_core::types::{Isotope, IsotopeMap, TimeUnit};
use tracing::info;

use crate::defaults::default_isotopes;

/// Mapping from isotope name to its physical constants.
#[derive(Debug, Clone, PartialEq)]
pub struct IsotopeCatalog {
    entries: IsotopeMap,
}

impl Default for IsotopeCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl IsotopeCatalog {
    /// Catalog holding the built-in reference isotopes.
    pub fn with_defaults() -> Self {
        Self {
            entries: default_isotopes(),
        }
    }

    /// Catalog from previously stored entries. Returns `None` for an empty map.
    pub fn from_entries(entries: IsotopeMap) -> Option<Self> {
        if entries.is_empty() {
            None
        } else {
            Some(Self { entries })
        }
    }

    /// Look up an isotope by exact name.
    pub fn get(&self, name: &str) -> Result<Isotope, CatalogError> {
        self.entries
            .get(name)
            .copied()
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }

    /// Add (or overwrite) an isotope derived from its half-life.
    ///
    /// The name is trimmed. On error the catalog is unchanged.
    pub fn add(
        &mut self,
        name: &str,
        atomic_weight: f64,
        half_life: f64,
        half_life_unit: TimeUnit,
    ) -> Result<Isotope, CatalogError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ArgumentError::EmptyName.into());
        }

        let isotope = Isotope::from_half_life(atomic_weight, half_life, half_life_unit)?;
        let replaced = self.entries.insert(name.to_string(), isotope).is_some();
        info!(
            name,
            decay_constant = isotope.decay_constant,
            replaced,
            "isotope added"
        );
        Ok(isotope)
    }

    /// Remove an isotope, refusing to remove the last one.
    pub fn remove(&mut self, name: &str) -> Result<Isotope, CatalogError> {
        if !self.entries.contains_key(name) {
            return Err(CatalogError::NotFound(name.to_string()));
        }
        if self.entries.len() == 1 {
            return Err(CatalogError::WouldBeEmpty(name.to_string()));
        }

        let removed = self
            .entries
            .remove(name)
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))?;
        info!(name, remaining = self.entries.len(), "isotope removed");
        Ok(removed)
    }

    /// Replace every entry with the built-in reference set.
    pub fn reset_to_defaults(&mut self) {
        self.entries = default_isotopes();
        info!(count = self.entries.len(), "catalog reset to defaults");
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; kept for API symmetry with [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Isotope names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Isotope)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Current contents, for handing to a persistence collaborator.
    pub fn snapshot(&self) -> &IsotopeMap {
        &self.entries
    }

    /// Name front ends preselect: Césio-137 when present, else the first name.
    pub fn default_selection(&self) -> &str {
        if self.entries.contains_key(DEFAULT_ISOTOPE) {
            return DEFAULT_ISOTOPE;
        }
        // Non-empty by construction.
        self.names().next().unwrap_or(DEFAULT_ISOTOPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn single(name: &str) -> IsotopeCatalog {
        let mut map = IsotopeMap::new();
        map.insert(
            name.to_string(),
            Isotope::from_half_life(10.0, 1.0, TimeUnit::Years).unwrap(),
        );
        IsotopeCatalog::from_entries(map).unwrap()
    }

    // --- get ---

    #[test]
    fn get_default_isotope() {
        let c = IsotopeCatalog::with_defaults();
        assert_eq!(c.get("Cobalto-60").unwrap().decay_constant, 0.1315);
    }

    #[test]
    fn get_missing_isotope() {
        let c = IsotopeCatalog::with_defaults();
        assert_eq!(
            c.get("Plutônio-239").unwrap_err(),
            CatalogError::NotFound("Plutônio-239".into())
        );
    }

    // --- add ---

    #[test]
    fn add_derives_lambda() {
        let mut c = IsotopeCatalog::with_defaults();
        let iso = c.add("X", 10.0, 2.0, TimeUnit::Years).unwrap();
        assert!((iso.decay_constant - std::f64::consts::LN_2 / 2.0).abs() < 1e-15);
        assert_eq!(c.get("X").unwrap(), iso);
        assert_eq!(c.len(), 8);
    }

    #[test]
    fn add_converts_half_life_unit() {
        let mut c = IsotopeCatalog::with_defaults();
        let iso = c.add("Y", 10.0, 365.25, TimeUnit::Days).unwrap();
        assert!((iso.decay_constant - std::f64::consts::LN_2).abs() < 1e-12);
        assert_eq!(iso.half_life, 365.25);
        assert_eq!(iso.half_life_unit, TimeUnit::Days);
    }

    #[test]
    fn add_zero_half_life_leaves_catalog_unchanged() {
        let mut c = IsotopeCatalog::with_defaults();
        let before = c.clone();
        let err = c.add("X", 10.0, 0.0, TimeUnit::Years).unwrap_err();
        assert_eq!(err, CatalogError::Argument(ArgumentError::NonPositiveHalfLife(0.0)));
        assert_eq!(c, before);
    }

    #[test]
    fn add_rejects_blank_name() {
        let mut c = IsotopeCatalog::with_defaults();
        assert_eq!(
            c.add("   ", 10.0, 1.0, TimeUnit::Years).unwrap_err(),
            CatalogError::Argument(ArgumentError::EmptyName)
        );
    }

    #[test]
    fn add_rejects_non_positive_weight() {
        let mut c = IsotopeCatalog::with_defaults();
        assert!(matches!(
            c.add("X", -1.0, 1.0, TimeUnit::Years).unwrap_err(),
            CatalogError::Argument(ArgumentError::NonPositiveAtomicWeight(_))
        ));
    }

    #[test]
    fn add_overwrites_existing_name() {
        let mut c = IsotopeCatalog::with_defaults();
        let count = c.len();
        c.add("Césio-137", 137.0, 60.0, TimeUnit::Years).unwrap();
        assert_eq!(c.len(), count);
        assert_eq!(c.get("Césio-137").unwrap().atomic_weight, 137.0);
    }

    #[test]
    fn add_trims_name() {
        let mut c = IsotopeCatalog::with_defaults();
        c.add("  Rádio-226 ", 226.025, 1600.0, TimeUnit::Years).unwrap();
        assert!(c.contains("Rádio-226"));
    }

    // --- remove ---

    #[test]
    fn remove_existing() {
        let mut c = IsotopeCatalog::with_defaults();
        let removed = c.remove("Iodo-131").unwrap();
        assert_eq!(removed.half_life, 8.02);
        assert!(!c.contains("Iodo-131"));
        assert_eq!(c.len(), 6);
    }

    #[test]
    fn remove_missing() {
        let mut c = IsotopeCatalog::with_defaults();
        assert_eq!(c.remove("Nope").unwrap_err(), CatalogError::NotFound("Nope".into()));
        assert_eq!(c.len(), 7);
    }

    #[test]
    fn remove_last_entry_fails() {
        let mut c = single("Only");
        let before = c.clone();
        assert_eq!(
            c.remove("Only").unwrap_err(),
            CatalogError::WouldBeEmpty("Only".into())
        );
        assert_eq!(c, before);
    }

    #[test]
    fn remove_down_to_one() {
        let mut c = IsotopeCatalog::with_defaults();
        let names: Vec<String> = c.names().map(str::to_string).collect();
        for name in &names[1..] {
            c.remove(name).unwrap();
        }
        assert_eq!(c.len(), 1);
        assert!(c.remove(&names[0]).is_err());
    }

    // --- reset / accessors ---

    #[test]
    fn reset_restores_defaults() {
        let mut c = single("Only");
        c.reset_to_defaults();
        assert_eq!(c, IsotopeCatalog::with_defaults());
    }

    #[test]
    fn from_empty_entries_is_none() {
        assert!(IsotopeCatalog::from_entries(IsotopeMap::new()).is_none());
    }

    #[test]
    fn names_are_sorted() {
        let c = IsotopeCatalog::with_defaults();
        let names: Vec<&str> = c.names().collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn default_selection_prefers_cesium() {
        assert_eq!(IsotopeCatalog::with_defaults().default_selection(), "Césio-137");
        assert_eq!(single("Only").default_selection(), "Only");
    }

    proptest! {
        #[test]
        fn catalog_never_empties(removals in proptest::collection::vec(0usize..7, 0..20)) {
            let mut c = IsotopeCatalog::with_defaults();
            let names: Vec<String> = c.names().map(str::to_string).collect();
            for idx in removals {
                let _ = c.remove(&names[idx]);
                prop_assert!(c.len() >= 1);
            }
        }

        #[test]
        fn add_positive_half_life_inverts(hl in 1e-6f64..1e12, w in 0.1f64..300.0) {
            let mut c = IsotopeCatalog::with_defaults();
            let iso = c.add("P", w, hl, TimeUnit::Years).unwrap();
            let back = std::f64::consts::LN_2 / iso.decay_constant;
            prop_assert!((back - hl).abs() <= 1e-9 * hl);
        }
    }
}
