//! CSV roster table with passthrough of unrelated columns.
//!
//! Only two columns matter to the engine: the identifier column and the
//! group label column. Everything else is carried through byte-for-byte so
//! the output keeps the input's full tabular shape.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use hb_core::{Group, GroupSet, Record};

use crate::{IoError, IoResult};

/// An in-memory roster: the header row, all data rows, and the indices of
/// the two required columns.
#[derive(Clone, Debug)]
pub struct Roster {
    headers: StringRecord,
    rows: Vec<StringRecord>,
    name_col: usize,
    group_col: usize,
}

impl Roster {
    /// Read a roster from `path`.
    ///
    /// The header row must contain `name_column` and `group_column` (exact
    /// header match); missing either is a fatal validation error reported
    /// before any balancing happens.
    pub fn read(path: &Path, name_column: &str, group_column: &str) -> IoResult<Self> {
        let file = File::open(path).map_err(|source| IoError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

        let headers = reader.headers()?.clone();
        let name_col = find_column(&headers, name_column)?;
        let group_col = find_column(&headers, group_column)?;

        let mut rows = Vec::new();
        for row in reader.records() {
            rows.push(row?);
        }

        Ok(Self {
            headers,
            rows,
            name_col,
            group_col,
        })
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Project rows into core records, classifying each raw group label
    /// against `groups`.
    pub fn records(&self, groups: &GroupSet) -> Vec<Record> {
        self.rows
            .iter()
            .map(|row| {
                let name = row.get(self.name_col).unwrap_or("");
                Record::from_raw(name, row.get(self.group_col), groups)
            })
            .collect()
    }

    /// Write balanced labels back into the group column, row-aligned.
    ///
    /// `records` must be the (mutated) result of [`Roster::records`] on this
    /// roster; a length mismatch is a shape violation.
    pub fn apply(&mut self, records: &[Record]) -> IoResult<()> {
        if records.len() != self.rows.len() {
            return Err(IoError::Invalid(format!(
                "{} records for {} rows",
                records.len(),
                self.rows.len()
            )));
        }
        let group_col = self.group_col;
        for (row, record) in self.rows.iter_mut().zip(records) {
            let label = record.group.as_ref().map(Group::as_str).unwrap_or("");
            *row = replace_field(row, group_col, label);
        }
        Ok(())
    }

    /// Serialize the roster (header + rows) to `path` as CSV.
    pub fn write(&self, path: &Path) -> IoResult<()> {
        let file = File::create(path).map_err(|source| IoError::Write {
            path: path.display().to_string(),
            source,
        })?;
        let mut writer = WriterBuilder::new().from_writer(file);
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush().map_err(|source| IoError::Write {
            path: path.display().to_string(),
            source,
        })?;
        Ok(())
    }
}

/// Output path for a balanced roster: `<stem>_sorted.<ext>` next to the
/// input. The input's extension is preserved; `csv` is assumed when absent.
pub fn sorted_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("roster");
    let ext = input.extension().and_then(|s| s.to_str()).unwrap_or("csv");
    input.with_file_name(format!("{stem}_sorted.{ext}"))
}

fn find_column(headers: &StringRecord, wanted: &str) -> IoResult<usize> {
    headers
        .iter()
        .position(|h| h == wanted)
        .ok_or_else(|| IoError::MissingColumn {
            column: wanted.to_string(),
            available: headers.iter().collect::<Vec<_>>().join(", "),
        })
}

fn replace_field(row: &StringRecord, index: usize, value: &str) -> StringRecord {
    row.iter()
        .enumerate()
        .map(|(i, field)| if i == index { value } else { field })
        .collect()
}
