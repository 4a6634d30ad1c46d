//! Physical constants and operational defaults. All times are in years unless noted.

/// Avogadro constant, exact SI value (mol⁻¹).
pub const AVOGADRO: f64 = 6.02214076e23;

/// Julian year length used by every time-unit conversion.
pub const DAYS_PER_YEAR: f64 = 365.25;

pub const HOURS_PER_DAY: f64 = 24.0;
pub const MINUTES_PER_DAY: f64 = HOURS_PER_DAY * 60.0;
pub const SECONDS_PER_DAY: f64 = MINUTES_PER_DAY * 60.0;

/// Span substituted when a caller asks for a non-positive time span.
///
/// Keeps the plotted domain non-degenerate.
pub const DEFAULT_TIME_SPAN: f64 = 100.0;

/// Step count used when the caller does not choose one.
pub const DEFAULT_STEPS: u32 = 100;

/// Lower bound of the step-count range offered to users.
///
/// The engine itself accepts any positive count; front ends enforce
/// [`MIN_STEPS`]..=[`MAX_STEPS`].
pub const MIN_STEPS: u32 = 10;

/// Upper bound of the step-count range offered to users.
pub const MAX_STEPS: u32 = 500;

/// Isotope preselected by front ends when it exists in the catalog.
pub const DEFAULT_ISOTOPE: &str = "Césio-137";

/// Default initial mass in grams for mass-mode simulations.
pub const DEFAULT_INITIAL_MASS: f64 = 1.0;

/// Default initial nuclide count for count-mode simulations.
pub const DEFAULT_INITIAL_NUCLEI: f64 = 1.0e20;

/// File name of the persisted isotope catalog.
pub const CATALOG_FILE_NAME: &str = "isotopes.json";
