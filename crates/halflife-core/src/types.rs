//! Core data types: time units, isotope records and decay time series.
//!
//! Isotope records are persisted as JSON; their field names and unit labels
//! stay compatible with catalog files written by earlier versions of the tool
//! (`lambda`, `half_life`, `unit`, `atomic_weight`, Portuguese unit labels).

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DAYS_PER_YEAR, HOURS_PER_DAY, MINUTES_PER_DAY, SECONDS_PER_DAY};
use crate::error::ArgumentError;

/// Isotope catalog contents keyed by isotope name.
pub type IsotopeMap = BTreeMap<String, Isotope>;

/// Time unit accepted for half-lives and simulation spans.
///
/// The persisted and displayed label is the Portuguese name (`"anos"`);
/// parsing also accepts the English name, case-insensitively.
///
/// # Examples
///
/// ```
/// use halflife_core::types::TimeUnit;
/// let unit: TimeUnit = "dias".parse().unwrap();
/// assert_eq!(unit, TimeUnit::Days);
/// assert_eq!("Days".parse::<TimeUnit>().unwrap(), TimeUnit::Days);
/// assert_eq!(unit.label(), "dias");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    #[default]
    Years,
}

impl TimeUnit {
    /// Every unit, shortest first.
    pub const ALL: [TimeUnit; 5] = [
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
        TimeUnit::Years,
    ];

    /// Label used in persisted records, column headers and menus.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Seconds => "segundos",
            Self::Minutes => "minutos",
            Self::Hours => "horas",
            Self::Days => "dias",
            Self::Years => "anos",
        }
    }

    pub fn english_name(&self) -> &'static str {
        match self {
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::Days => "days",
            Self::Years => "years",
        }
    }

    /// Number of years in one of this unit (Julian year of 365.25 days).
    pub fn years_factor(&self) -> f64 {
        match self {
            Self::Seconds => 1.0 / (DAYS_PER_YEAR * SECONDS_PER_DAY),
            Self::Minutes => 1.0 / (DAYS_PER_YEAR * MINUTES_PER_DAY),
            Self::Hours => 1.0 / (DAYS_PER_YEAR * HOURS_PER_DAY),
            Self::Days => 1.0 / DAYS_PER_YEAR,
            Self::Years => 1.0,
        }
    }

    /// Convert `value` expressed in this unit to years.
    pub fn to_years(&self, value: f64) -> f64 {
        value * self.years_factor()
    }

    /// Convert a span in years to this unit.
    pub fn from_years(&self, years: f64) -> f64 {
        years / self.years_factor()
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeUnit {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|u| u.label() == needle || u.english_name() == needle)
            .ok_or_else(|| ArgumentError::UnknownTimeUnit(s.to_string()))
    }
}

impl TryFrom<String> for TimeUnit {
    type Error = ArgumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeUnit> for String {
    fn from(unit: TimeUnit) -> Self {
        unit.label().to_string()
    }
}

/// Physical constants of one isotope.
///
/// `decay_constant` is authoritative once the record exists: editing
/// `half_life` afterwards does not recompute it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Isotope {
    /// Decay constant λ in years⁻¹.
    #[serde(rename = "lambda")]
    pub decay_constant: f64,
    /// Half-life expressed in `half_life_unit`.
    pub half_life: f64,
    #[serde(rename = "unit")]
    pub half_life_unit: TimeUnit,
    /// Grams per mole.
    pub atomic_weight: f64,
}

impl Isotope {
    /// Build a record from its half-life, deriving `λ = ln 2 / half-life (years)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use halflife_core::types::{Isotope, TimeUnit};
    /// let iso = Isotope::from_half_life(14.003, 5730.0, TimeUnit::Years).unwrap();
    /// assert!((iso.decay_constant - 1.20968e-4).abs() < 1e-8);
    /// ```
    pub fn from_half_life(
        atomic_weight: f64,
        half_life: f64,
        half_life_unit: TimeUnit,
    ) -> Result<Self, ArgumentError> {
        if !(half_life > 0.0 && half_life.is_finite()) {
            return Err(ArgumentError::NonPositiveHalfLife(half_life));
        }
        if !(atomic_weight > 0.0 && atomic_weight.is_finite()) {
            return Err(ArgumentError::NonPositiveAtomicWeight(atomic_weight));
        }

        let half_life_years = half_life_unit.to_years(half_life);
        Ok(Self {
            decay_constant: std::f64::consts::LN_2 / half_life_years,
            half_life,
            half_life_unit,
            atomic_weight,
        })
    }

    /// Stored half-life converted to years.
    pub fn half_life_years(&self) -> f64 {
        self.half_life_unit.to_years(self.half_life)
    }
}

/// How an initial quantity is expressed and how results are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityKind {
    /// Grams.
    #[default]
    Mass,
    /// Number of radioactive nuclides.
    Nuclei,
}

impl QuantityKind {
    pub fn unit_label(&self) -> &'static str {
        match self {
            Self::Mass => "g",
            Self::Nuclei => "Núcleos",
        }
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.unit_label())
    }
}

/// Column header for the time axis, e.g. `"Tempo (anos)"`.
pub fn time_column_label(unit: TimeUnit) -> String {
    format!("Tempo ({})", unit.label())
}

/// Column header for a quantity axis, e.g. `"Quantidade (g)"`.
pub fn quantity_column_label(kind: QuantityKind) -> String {
    format!("Quantidade ({})", kind.unit_label())
}

/// Ordered `(time, quantity)` samples of one decay curve.
///
/// Times and quantities are stored as parallel columns so renderers can hand
/// them to plotting code without copying.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    times: Vec<f64>,
    quantities: Vec<f64>,
}

impl TimeSeries {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            times: Vec::with_capacity(capacity),
            quantities: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, time: f64, quantity: f64) {
        self.times.push(time);
        self.quantities.push(quantity);
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn quantities(&self) -> &[f64] {
        &self.quantities
    }

    pub fn first(&self) -> Option<(f64, f64)> {
        Some((*self.times.first()?, *self.quantities.first()?))
    }

    pub fn last(&self) -> Option<(f64, f64)> {
        Some((*self.times.last()?, *self.quantities.last()?))
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.quantities.iter().copied())
    }

    /// Apply `f` to every quantity, keeping the time axis.
    pub fn map_quantities(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            times: self.times.clone(),
            quantities: self.quantities.iter().map(|&q| f(q)).collect(),
        }
    }
}

impl FromIterator<(f64, f64)> for TimeSeries {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let (times, quantities) = iter.into_iter().unzip();
        Self { times, quantities }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // --- TimeUnit ---

    #[test]
    fn parse_portuguese_labels() {
        assert_eq!("segundos".parse::<TimeUnit>().unwrap(), TimeUnit::Seconds);
        assert_eq!("minutos".parse::<TimeUnit>().unwrap(), TimeUnit::Minutes);
        assert_eq!("horas".parse::<TimeUnit>().unwrap(), TimeUnit::Hours);
        assert_eq!("dias".parse::<TimeUnit>().unwrap(), TimeUnit::Days);
        assert_eq!("anos".parse::<TimeUnit>().unwrap(), TimeUnit::Years);
    }

    #[test]
    fn parse_english_names_case_insensitive() {
        assert_eq!(" Hours ".parse::<TimeUnit>().unwrap(), TimeUnit::Hours);
        assert_eq!("YEARS".parse::<TimeUnit>().unwrap(), TimeUnit::Years);
    }

    #[test]
    fn parse_unknown_unit_fails() {
        let err = "semanas".parse::<TimeUnit>().unwrap_err();
        assert_eq!(err, ArgumentError::UnknownTimeUnit("semanas".into()));
    }

    #[test]
    fn label_roundtrips_through_parse() {
        for unit in TimeUnit::ALL {
            assert_eq!(unit.label().parse::<TimeUnit>().unwrap(), unit);
            assert_eq!(unit.english_name().parse::<TimeUnit>().unwrap(), unit);
        }
    }

    #[test]
    fn factors_match_julian_year() {
        assert_eq!(TimeUnit::Years.years_factor(), 1.0);
        assert!((TimeUnit::Days.to_years(365.25) - 1.0).abs() < 1e-12);
        assert!((TimeUnit::Hours.to_years(8766.0) - 1.0).abs() < 1e-12);
        assert!((TimeUnit::Minutes.to_years(525_960.0) - 1.0).abs() < 1e-12);
        assert!((TimeUnit::Seconds.to_years(31_557_600.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn factors_strictly_increase() {
        for pair in TimeUnit::ALL.windows(2) {
            assert!(pair[0].years_factor() < pair[1].years_factor());
        }
    }

    #[test]
    fn unit_serializes_as_label() {
        let json = serde_json::to_string(&TimeUnit::Minutes).unwrap();
        assert_eq!(json, "\"minutos\"");
        let back: TimeUnit = serde_json::from_str("\"days\"").unwrap();
        assert_eq!(back, TimeUnit::Days);
        assert!(serde_json::from_str::<TimeUnit>("\"fortnights\"").is_err());
    }

    // --- Isotope ---

    #[test]
    fn from_half_life_derives_lambda() {
        let iso = Isotope::from_half_life(136.907, 30.17, TimeUnit::Years).unwrap();
        assert!((iso.decay_constant - 0.02298).abs() < 1e-5);
        assert_eq!(iso.half_life, 30.17);
        assert_eq!(iso.half_life_unit, TimeUnit::Years);
    }

    #[test]
    fn from_half_life_in_days() {
        let iso = Isotope::from_half_life(130.906, 8.02, TimeUnit::Days).unwrap();
        assert!((iso.decay_constant - 31.57).abs() < 0.05, "λ = {}", iso.decay_constant);
        assert!((iso.half_life_years() - 8.02 / 365.25).abs() < 1e-12);
    }

    #[test]
    fn from_half_life_rejects_zero_and_negative() {
        assert_eq!(
            Isotope::from_half_life(10.0, 0.0, TimeUnit::Years).unwrap_err(),
            ArgumentError::NonPositiveHalfLife(0.0)
        );
        assert_eq!(
            Isotope::from_half_life(10.0, -1.0, TimeUnit::Years).unwrap_err(),
            ArgumentError::NonPositiveHalfLife(-1.0)
        );
        assert!(Isotope::from_half_life(10.0, f64::NAN, TimeUnit::Years).is_err());
    }

    #[test]
    fn from_half_life_rejects_bad_atomic_weight() {
        assert_eq!(
            Isotope::from_half_life(0.0, 1.0, TimeUnit::Years).unwrap_err(),
            ArgumentError::NonPositiveAtomicWeight(0.0)
        );
    }

    #[test]
    fn isotope_json_field_names() {
        let iso = Isotope {
            decay_constant: 0.1315,
            half_life: 5.27,
            half_life_unit: TimeUnit::Years,
            atomic_weight: 59.933,
        };
        let value = serde_json::to_value(iso).unwrap();
        assert_eq!(value["lambda"], 0.1315);
        assert_eq!(value["half_life"], 5.27);
        assert_eq!(value["unit"], "anos");
        assert_eq!(value["atomic_weight"], 59.933);
    }

    // --- labels ---

    #[test]
    fn column_labels() {
        assert_eq!(time_column_label(TimeUnit::Days), "Tempo (dias)");
        assert_eq!(quantity_column_label(QuantityKind::Mass), "Quantidade (g)");
        assert_eq!(quantity_column_label(QuantityKind::Nuclei), "Quantidade (Núcleos)");
    }

    // --- TimeSeries ---

    #[test]
    fn series_push_and_iter() {
        let mut s = TimeSeries::with_capacity(2);
        s.push(0.0, 10.0);
        s.push(1.0, 5.0);
        assert_eq!(s.len(), 2);
        assert_eq!(s.first(), Some((0.0, 10.0)));
        assert_eq!(s.last(), Some((1.0, 5.0)));
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![(0.0, 10.0), (1.0, 5.0)]);
    }

    #[test]
    fn empty_series() {
        let s = TimeSeries::default();
        assert!(s.is_empty());
        assert_eq!(s.first(), None);
    }

    #[test]
    fn map_quantities_keeps_time_axis() {
        let s: TimeSeries = vec![(0.0, 4.0), (2.0, 2.0)].into_iter().collect();
        let halved = s.map_quantities(|q| q / 2.0);
        assert_eq!(halved.times(), s.times());
        assert_eq!(halved.quantities(), &[2.0, 1.0]);
    }

    proptest! {
        #[test]
        fn to_years_is_linear(v in 0.0f64..1e12, idx in 0usize..5) {
            let unit = TimeUnit::ALL[idx];
            let lhs = unit.to_years(2.0 * v);
            let rhs = 2.0 * unit.to_years(v);
            prop_assert!((lhs - rhs).abs() <= 1e-12 * rhs.abs().max(1.0));
        }

        #[test]
        fn from_years_inverts_to_years(v in 0.0f64..1e9, idx in 0usize..5) {
            let unit = TimeUnit::ALL[idx];
            let back = unit.from_years(unit.to_years(v));
            prop_assert!((back - v).abs() <= 1e-9 * v.max(1.0));
        }
    }
}
