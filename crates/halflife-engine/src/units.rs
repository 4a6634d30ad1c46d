//! Time-unit conversion.
//!
//! Unrecognised unit names are an error; there is no silent fallback to years.

use halflife_core::error::ArgumentError;
use halflife_core::types::TimeUnit;

/// Convert `value` given in the unit named `unit` to years.
///
/// Accepts the labels `segundos`, `minutos`, `horas`, `dias`, `anos` and
/// their English names.
///
/// # Examples
///
/// ```
/// use halflife_engine::to_years;
/// let years = to_years(730.5, "dias").unwrap();
/// assert!((years - 2.0).abs() < 1e-12);
/// assert!(to_years(1.0, "weeks").is_err());
/// ```
pub fn to_years(value: f64, unit: &str) -> Result<f64, ArgumentError> {
    let unit: TimeUnit = unit.parse()?;
    Ok(unit.to_years(value))
}

/// Express a span given in years in `unit`.
pub fn from_years(years: f64, unit: TimeUnit) -> f64 {
    unit.from_years(years)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn days_to_years() {
        let years = to_years(730.5, "dias").unwrap();
        assert!((years - 2.0).abs() < 1e-12, "got {years}");
    }

    #[test]
    fn years_are_identity() {
        assert_eq!(to_years(42.0, "anos").unwrap(), 42.0);
    }

    #[test]
    fn minutes_to_years() {
        // Ba-137m half-life
        let years = to_years(2.55, "minutos").unwrap();
        assert!((years - 2.55 / 525_960.0).abs() < 1e-18);
    }

    #[test]
    fn seconds_in_a_julian_year() {
        let years = to_years(31_557_600.0, "segundos").unwrap();
        assert!((years - 1.0).abs() < 1e-12);
    }

    #[test]
    fn unknown_unit_is_error() {
        assert_eq!(
            to_years(1.0, "semanas").unwrap_err(),
            ArgumentError::UnknownTimeUnit("semanas".into())
        );
        assert!(to_years(1.0, "").is_err());
    }

    #[test]
    fn from_years_to_hours() {
        assert!((from_years(1.0, TimeUnit::Hours) - 8766.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn to_years_linear(v in -1e9f64..1e9, idx in 0usize..5) {
            let label = TimeUnit::ALL[idx].label();
            let doubled = to_years(2.0 * v, label).unwrap();
            let single = to_years(v, label).unwrap();
            prop_assert_eq!(doubled, 2.0 * single);
        }
    }
}
