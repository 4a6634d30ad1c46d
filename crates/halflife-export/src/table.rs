//! Export table: a time column plus one or more quantity columns.

use halflife_core::types::{
    quantity_column_label, time_column_label, QuantityKind, TimeSeries, TimeUnit,
};
use halflife_engine::SimulationReport;
use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// One labelled column of values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub label: String,
    pub values: Vec<f64>,
}

/// Rows of `(time, quantity…)` with stable column labels.
///
/// The first column is always the time axis; every other column has exactly
/// one value per time point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportTable {
    title: String,
    columns: Vec<Column>,
}

impl ExportTable {
    /// Table holding only the time axis.
    pub fn new(title: impl Into<String>, time_unit: TimeUnit, times: &[f64]) -> Self {
        Self {
            title: title.into(),
            columns: vec![Column {
                label: time_column_label(time_unit),
                values: times.to_vec(),
            }],
        }
    }

    /// Table for one series: time in `time_unit`, quantity in `kind`.
    pub fn from_series(
        title: impl Into<String>,
        series: &TimeSeries,
        time_unit: TimeUnit,
        kind: QuantityKind,
    ) -> Self {
        let mut table = Self::new(title, time_unit, series.times());
        table.columns.push(Column {
            label: quantity_column_label(kind),
            values: series.quantities().to_vec(),
        });
        table
    }

    pub fn from_report(title: impl Into<String>, report: &SimulationReport) -> Self {
        Self::from_series(title, &report.series, report.time_unit, report.quantity_kind)
    }

    /// Append a quantity column. Fails if `values` does not match the time axis length.
    pub fn with_column(
        mut self,
        label: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<Self, ExportError> {
        let label = label.into();
        let expected = self.row_count();
        if values.len() != expected {
            return Err(ExportError::ColumnLength {
                label,
                expected,
                got: values.len(),
            });
        }
        self.columns.push(Column { label, values });
        Ok(self)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.label.as_str())
    }

    /// Number of time points.
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    /// Row `index` across all columns.
    pub fn row(&self, index: usize) -> Option<Vec<f64>> {
        self.columns
            .iter()
            .map(|c| c.values.get(index).copied())
            .collect()
    }

    /// Rows in time order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<f64>> + '_ {
        (0..self.row_count()).filter_map(|i| self.row(i))
    }
}
