//! Paginated plain-text report, laid out like a printed table.
//!
//! Each page carries the title, the column headers and up to
//! [`ReportOptions::rows_per_page`] rows; pages are separated by a form feed.
//! Cells use four-digit scientific notation with a signed, two-digit
//! exponent (`1.0000e+20`).

use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::table::ExportTable;

/// Default file name offered for report downloads.
pub const REPORT_FILE_NAME: &str = "relatorio_decaimento.txt";

/// Longest header text kept in a cell.
const MAX_HEADER_CHARS: usize = 20;

const MIN_CELL_WIDTH: usize = 12;

const PAGE_BREAK: char = '\u{000C}';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Data rows per page. Zero is treated as one.
    pub rows_per_page: usize,
    /// Date printed under the title, if any.
    pub generated_on: Option<NaiveDate>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            rows_per_page: 30,
            generated_on: None,
        }
    }
}

/// Header text as printed: parentheses dropped, truncated to 20 characters.
fn clean_header(label: &str) -> String {
    label
        .chars()
        .filter(|c| *c != '(' && *c != ')')
        .take(MAX_HEADER_CHARS)
        .collect()
}

fn format_cell(value: f64) -> String {
    let plain = format!("{value:.4e}");
    let Some((mantissa, exp)) = plain.split_once('e') else {
        return plain;
    };
    let (sign, digits) = match exp.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exp),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// Render `table` as a paginated text report.
pub fn render_report(table: &ExportTable, options: &ReportOptions) -> String {
    let headers: Vec<String> = table.headers().map(clean_header).collect();
    let rows: Vec<Vec<String>> = table
        .rows()
        .map(|row| row.into_iter().map(format_cell).collect())
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .map(|r| r[i].chars().count())
                .chain([h.chars().count(), MIN_CELL_WIDTH])
                .max()
                .unwrap_or(MIN_CELL_WIDTH)
        })
        .collect();

    let per_page = options.rows_per_page.max(1);
    let page_count = rows.len().div_ceil(per_page).max(1);
    let separator: String = widths
        .iter()
        .map(|w| "-".repeat(w + 2))
        .collect::<Vec<_>>()
        .join("+");

    let mut out = String::new();
    for page in 0..page_count {
        if page > 0 {
            out.push(PAGE_BREAK);
        }

        let _ = writeln!(out, "Relatorio: {}", table.title());
        if let Some(date) = options.generated_on {
            let _ = writeln!(out, "Gerado em: {}", date.format("%d/%m/%Y"));
        }
        out.push('\n');

        write_line(&mut out, &headers, &widths);
        let _ = writeln!(out, "{separator}");
        for row in rows.iter().skip(page * per_page).take(per_page) {
            write_line(&mut out, row, &widths);
        }

        let _ = writeln!(out, "\nPagina {}/{}", page + 1, page_count);
    }
    out
}

fn write_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!(" {cell:^w$} "))
        .collect::<Vec<_>>()
        .join("|");
    let _ = writeln!(out, "{}", line.trim_end());
}
