//! CSV reading operations.

use std::{fs::File, io::Cursor, path::Path};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerReader, prelude::CsvReadOptions};

/// Reads a CSV file from `path`, every column as text.
pub(crate) fn read_csv(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)
        .with_context(|| format!("[io::csv::read] Failed to open CSV file: {}", path.display()))?;
    text_csv_options()
        .into_reader_with_file_handle(file)
        .finish()
        .with_context(|| format!("[io::csv::read] Failed to read CSV from {:?}", path))
}

/// Reads a CSV from a string, every column as text.
pub(crate) fn read_csv_string(csv: &str) -> Result<DataFrame> {
    text_csv_options()
        .into_reader_with_file_handle(Cursor::new(csv.as_bytes()))
        .finish()
        .context("[io::csv::read] Failed to read CSV from string")
}

/// Header row required, no type inference (hand-exported numbers stay text until
/// the ingester decides how to treat them), short/long rows tolerated.
fn text_csv_options() -> CsvReadOptions {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|po| po.with_truncate_ragged_lines(true))
}

/// Header-keyed, row-addressable view over an all-text frame.
/// Cells are trimmed and stripped of one pair of surrounding quotes.
#[derive(Debug, Clone)]
pub(crate) struct StringTable {
    headers: Vec<String>,
    columns: Vec<Vec<Option<String>>>,
    height: usize,
}

impl StringTable {
    pub(crate) fn from_frame(df: &DataFrame) -> Result<Self> {
        let headers = df.get_column_names().iter()
            .map(|name| clean_cell(name.as_str()).to_string())
            .collect();

        let columns = df.get_columns().iter()
            .map(|column| {
                let values = column.str()
                    .with_context(|| format!("[io::csv::read] column {:?} is not text", column.name()))?;
                Ok(values.into_iter()
                    .map(|cell| cell.map(|s| clean_cell(s).to_string()))
                    .collect())
            })
            .collect::<Result<Vec<Vec<Option<String>>>>>()?;

        Ok(Self { headers, columns, height: df.height() })
    }

    #[inline] pub(crate) fn height(&self) -> usize { self.height }

    #[inline] pub(crate) fn headers(&self) -> &[String] { &self.headers }

    /// Index of the first header equal to any of `names`, tried in order.
    pub(crate) fn column_index(&self, names: &[&str]) -> Option<usize> {
        names.iter().find_map(|name| self.headers.iter().position(|h| h == name))
    }

    /// Cell text, or "" if the cell or column is missing.
    pub(crate) fn cell(&self, row: usize, col: Option<usize>) -> &str {
        col.and_then(|c| self.columns.get(c))
            .and_then(|values| values.get(row))
            .and_then(|cell| cell.as_deref())
            .unwrap_or("")
    }
}

fn clean_cell(s: &str) -> &str {
    let s = s.trim();
    let s = s.strip_prefix('"').unwrap_or(s);
    s.strip_suffix('"').unwrap_or(s).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_from_quoted_csv() {
        let df = read_csv_string("\"Position\",Precinct,BallotsCast\n\"Position 1\", 303 ,96\nPosition 2,304\n").unwrap();
        let table = StringTable::from_frame(&df).unwrap();

        assert_eq!(table.height(), 2);
        assert_eq!(table.headers(), &["Position", "Precinct", "BallotsCast"]);

        let position = table.column_index(&["Position", "position"]);
        let precinct = table.column_index(&["Precinct"]);
        let ballots = table.column_index(&["BallotsCast"]);
        assert_eq!(table.cell(0, position), "Position 1");
        assert_eq!(table.cell(0, precinct), "303");
        assert_eq!(table.cell(1, ballots), "");
        assert_eq!(table.cell(0, None), "");
        assert_eq!(table.cell(9, precinct), "");
    }

    #[test]
    fn clean_cell_strips_one_quote_pair() {
        assert_eq!(clean_cell("  \"W306\" "), "W306");
        assert_eq!(clean_cell("plain"), "plain");
        assert_eq!(clean_cell("\""), "");
    }
}
