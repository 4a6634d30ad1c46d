//! # halflife-export: Tabular output of decay series.
//!
//! Turns a [`SimulationReport`](halflife_engine::SimulationReport) into an
//! [`ExportTable`] with stable column labels (`Tempo (<unit>)`,
//! `Quantidade (<unit>)`), then writes it as CSV or as a paginated plain-text
//! report.

pub mod csv_export;
pub mod error;
pub mod report;
pub mod table;

pub use csv_export::{write_csv, write_csv_file, CSV_FILE_NAME};
pub use error::ExportError;
pub use report::{render_report, ReportOptions, REPORT_FILE_NAME};
pub use table::{Column, ExportTable};
