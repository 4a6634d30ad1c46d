//! CSV output: header row of column labels, then one row per time point.
//!
//! Numbers are written in shortest round-trip form (`100.0`, `4.3986e21`).

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::ExportError;
use crate::table::ExportTable;

/// Default file name offered for CSV downloads.
pub const CSV_FILE_NAME: &str = "dados_decaimento.csv";

/// Write `table` as CSV to `writer`.
pub fn write_csv<W: Write>(table: &ExportTable, writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(table.headers())?;
    for row in table.rows() {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `table` as CSV to a file at `path`, replacing it if present.
pub fn write_csv_file(table: &ExportTable, path: &Path) -> Result<(), ExportError> {
    let file = std::fs::File::create(path)?;
    write_csv(table, file)?;
    info!(path = %path.display(), rows = table.row_count(), "csv written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use halflife_core::types::{QuantityKind, TimeSeries, TimeUnit};

    fn table() -> ExportTable {
        let series: TimeSeries = vec![(0.0, 1.0e20), (50.0, 5.0e19), (100.0, 2.5e19)]
            .into_iter()
            .collect();
        ExportTable::from_series("Decaimento", &series, TimeUnit::Years, QuantityKind::Nuclei)
    }

    fn render(table: &ExportTable) -> String {
        let mut buf = Vec::new();
        write_csv(table, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn header_uses_stable_labels() {
        let out = render(&table());
        assert_eq!(out.lines().next().unwrap(), "Tempo (anos),Quantidade (Núcleos)");
    }

    #[test]
    fn one_line_per_time_point() {
        let out = render(&table());
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn values_parse_back() {
        let out = render(&table());
        let mut rdr = csv::Reader::from_reader(out.as_bytes());
        let rows: Vec<Vec<f64>> = rdr
            .records()
            .map(|r| r.unwrap().iter().map(|f| f.parse().unwrap()).collect())
            .collect();
        assert_eq!(rows, vec![vec![0.0, 1.0e20], vec![50.0, 5.0e19], vec![100.0, 2.5e19]]);
    }

    #[test]
    fn time_only_table() {
        let t = ExportTable::new("t", TimeUnit::Hours, &[0.0, 0.5]);
        let out = render(&t);
        assert_eq!(out.lines().next().unwrap(), "Tempo (horas)");
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CSV_FILE_NAME);
        write_csv_file(&table(), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Tempo (anos),"));
    }

    #[test]
    fn write_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(CSV_FILE_NAME);
        assert!(matches!(
            write_csv_file(&table(), &path).unwrap_err(),
            ExportError::Io(_)
        ));
    }
}
