use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{ConfgenError, Result};

/// A delimited table: header columns plus data rows, in file order.
///
/// The first column is the output-filename field; every other column is a
/// substitution variable named by its header. Field values are kept exactly
/// as they appear in the file (no trimming).
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<String>,
    records: Vec<Record>,
}

/// One data row. Values are index-aligned with the table's columns; the
/// reader rejects rows whose field count differs from the header.
#[derive(Debug, Clone)]
pub struct Record {
    values: Vec<String>,
}

impl Table {
    /// Read a delimited table with a header row.
    ///
    /// Row order and column order are preserved. A table with no columns or
    /// no data rows is an error, as is any structural problem (ragged rows,
    /// broken quoting, invalid UTF-8).
    pub fn load(path: &Path, delimiter: u8) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfgenError::TableNotFound {
                path: path.to_path_buf(),
                source: e,
            },
            _ => ConfgenError::TableRead {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .from_reader(BufReader::new(file));

        let columns: Vec<String> = reader
            .headers()
            .map_err(|e| ConfgenError::TableParse {
                path: path.to_path_buf(),
                source: e,
            })?
            .iter()
            .map(str::to_string)
            .collect();

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| ConfgenError::TableParse {
                path: path.to_path_buf(),
                source: e,
            })?;
            records.push(Record {
                values: record.iter().map(str::to_string).collect(),
            });
        }

        if columns.is_empty() || records.is_empty() {
            return Err(ConfgenError::EmptyTable {
                path: path.to_path_buf(),
            });
        }

        tracing::debug!("table loaded: {} row(s), {} column(s)", records.len(), columns.len());
        Ok(Self { columns, records })
    }

    /// All column names, in header order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All data rows, in file order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Name of the filename column (always the first).
    pub fn filename_column(&self) -> &str {
        &self.columns[0]
    }

    /// Names of the variable columns (everything after the first).
    pub fn variable_columns(&self) -> &[String] {
        &self.columns[1..]
    }

    /// The raw filename-field value of a record (untrimmed).
    pub fn filename_value<'a>(&self, record: &'a Record) -> &'a str {
        &record.values[0]
    }

    /// The record's variable mapping as ordered (name, value) pairs.
    ///
    /// Pairs follow column order and exclude the filename column. When the
    /// header repeats a name, the last column's value wins; the pair keeps
    /// the position of the first occurrence.
    pub fn variable_pairs<'a>(&'a self, record: &'a Record) -> Vec<(&'a str, &'a str)> {
        let mut pairs: Vec<(&str, &str)> =
            Vec::with_capacity(self.columns.len().saturating_sub(1));
        for (name, value) in self.columns.iter().zip(record.values.iter()).skip(1) {
            match pairs.iter_mut().find(|(n, _)| *n == name.as_str()) {
                Some(pair) => pair.1 = value.as_str(),
                None => pairs.push((name.as_str(), value.as_str())),
            }
        }
        pairs
    }
}
