//! Tab-separated table reader
//!
//! With a header, each line is decoded as a record of header name → cell
//! text. Missing trailing cells leave their columns absent, extra cells are
//! ignored. Without a header, a line decodes as a sequence of cells.
//!
//! Cells are never typed: every cell reaches the row's `Deserialize` impl
//! as a string. Row types read through here declare `String` (or
//! `Option<String>`) columns; a `bool` or integer column fails to decode and
//! the line is dropped like any other malformed record.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use wh3_core::{log_op_end, log_op_start};

use crate::errors::{io_error, Result};

const BOM: char = '\u{feff}';

/// How the first lines of a table are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TsvOptions {
    /// First line names the columns
    pub has_header: bool,
    /// Lines after the header discarded before data begins
    pub skip_rows_after_header: usize,
}

impl TsvOptions {
    /// Layout of the game's exported db tables: header, one metadata line, data
    pub fn leader_table() -> Self {
        Self {
            has_header: true,
            skip_rows_after_header: 1,
        }
    }
}

impl Default for TsvOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            skip_rows_after_header: 0,
        }
    }
}

/// Lazy sequence of decoded rows
pub struct TsvRows<T> {
    path: PathBuf,
    reader: BufReader<File>,
    header: Option<Vec<String>>,
    buf: Vec<u8>,
    read: u64,
    dropped: u64,
    started: Instant,
    done: bool,
    _row: PhantomData<T>,
}

impl<T> TsvRows<T> {
    pub fn read(&self) -> u64 {
        self.read
    }

    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Column names, when the table has a header
    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    /// Next raw line without its terminator; `Ok(None)` at end of file
    fn next_line(&mut self) -> std::io::Result<Option<Option<String>>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        let text = std::str::from_utf8(&self.buf)
            .ok()
            .map(|line| line.trim_end_matches(['\n', '\r']).to_string());
        Ok(Some(text))
    }

    fn record(&self, line: &str) -> Value {
        let cells = line.split('\t');
        match &self.header {
            Some(header) => {
                let map: Map<String, Value> = header
                    .iter()
                    .zip(cells)
                    .map(|(name, cell)| (name.clone(), Value::String(cell.to_string())))
                    .collect();
                Value::Object(map)
            }
            None => Value::Array(cells.map(|c| Value::String(c.to_string())).collect()),
        }
    }

    fn finish(&mut self) {
        if !self.done {
            self.done = true;
            log_op_end!(
                "read_tsv",
                duration_ms = self.started.elapsed().as_millis() as u64,
                path = %self.path.display(),
                rows_read = self.read,
                rows_dropped = self.dropped
            );
        }
    }
}

impl<T: DeserializeOwned> Iterator for TsvRows<T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let line = match self.next_line() {
                Ok(None) => {
                    self.finish();
                    return None;
                }
                Ok(Some(line)) => line,
                Err(err) => {
                    self.done = true;
                    return Some(Err(io_error("read_tsv", &self.path, err)));
                }
            };

            let Some(line) = line else {
                self.dropped += 1;
                continue;
            };
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_value::<T>(self.record(&line)) {
                Ok(row) => {
                    self.read += 1;
                    return Some(Ok(row));
                }
                Err(err) => {
                    self.dropped += 1;
                    tracing::debug!(
                        op = "read_tsv",
                        path = %self.path.display(),
                        error = %err,
                        "dropped malformed record"
                    );
                }
            }
        }
    }
}

/// Open a TSV file for lazy, tolerant decoding into `T`
///
/// The header and the skipped lines are consumed before this returns.
/// Every cell is handed to `T` as text, so `T` should only have string
/// columns.
///
/// # Errors
///
/// Returns an `ERR_IO` error naming the path when the file cannot be opened
/// or its leading lines cannot be read.
pub fn read_tsv<T: DeserializeOwned>(path: &Path, options: TsvOptions) -> Result<TsvRows<T>> {
    log_op_start!("read_tsv", path = %path.display());
    let file = File::open(path).map_err(|e| io_error("read_tsv", path, e))?;
    let mut rows = TsvRows {
        path: path.to_path_buf(),
        reader: BufReader::new(file),
        header: None,
        buf: Vec::new(),
        read: 0,
        dropped: 0,
        started: Instant::now(),
        done: false,
        _row: PhantomData,
    };

    if options.has_header {
        let header = rows
            .next_line()
            .map_err(|e| io_error("read_tsv", path, e))?
            .flatten()
            .unwrap_or_default();
        rows.header = Some(
            header
                .trim_start_matches(BOM)
                .split('\t')
                .map(|name| name.trim().to_string())
                .collect(),
        );
        for _ in 0..options.skip_rows_after_header {
            if rows
                .next_line()
                .map_err(|e| io_error("read_tsv", path, e))?
                .is_none()
            {
                break;
            }
        }
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Leader {
        agent_subtype_record: String,
        faction: String,
    }

    fn write_file(content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    fn collect(file: &tempfile::NamedTempFile, options: TsvOptions) -> Vec<Leader> {
        read_tsv(file.path(), options)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap()
    }

    #[test]
    fn test_skips_metadata_row_after_header() {
        let file = write_file(
            b"agent_subtype_record\tfaction\tkey\n#frontend_faction_leaders_tables;0;db\t\t\nwh_main_emp_karl_franz\twh_main_emp_empire\t1\n\n",
        );
        let rows = collect(&file, TsvOptions::leader_table());
        assert_eq!(
            rows,
            vec![Leader {
                agent_subtype_record: "wh_main_emp_karl_franz".to_string(),
                faction: "wh_main_emp_empire".to_string(),
            }]
        );
    }

    #[test]
    fn test_without_skip_metadata_row_is_data() {
        let file = write_file(b"agent_subtype_record\tfaction\nmeta\tmeta\na\tb\n");
        assert_eq!(collect(&file, TsvOptions::default()).len(), 2);
    }

    #[test]
    fn test_bom_and_crlf_are_stripped() {
        let file = write_file("\u{feff}agent_subtype_record\tfaction\r\na\tb\r\n".as_bytes());
        let rows = collect(&file, TsvOptions::default());
        assert_eq!(rows[0].agent_subtype_record, "a");
        assert_eq!(rows[0].faction, "b");
    }

    #[test]
    fn test_short_rows_are_dropped() {
        let file = write_file(b"agent_subtype_record\tfaction\nonly_one_cell\na\tb\n");
        let mut rows = read_tsv::<Leader>(file.path(), TsvOptions::default()).unwrap();
        assert_eq!(rows.by_ref().count(), 1);
        assert_eq!(rows.dropped(), 1);
    }

    #[test]
    fn test_headerless_rows_decode_as_sequences() {
        let file = write_file(b"a\tb\nc\td\n");
        let options = TsvOptions {
            has_header: false,
            skip_rows_after_header: 0,
        };
        let rows: Vec<(String, String)> = read_tsv(file.path(), options)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(rows[1], ("c".to_string(), "d".to_string()));
    }

    #[derive(Debug, Deserialize)]
    struct Flagged {
        #[allow(dead_code)]
        key: String,
        #[allow(dead_code)]
        enabled: bool,
    }

    #[derive(Debug, Deserialize)]
    struct FlaggedText {
        key: String,
        enabled: Option<String>,
    }

    #[test]
    fn test_cells_are_text_so_typed_columns_drop_the_row() {
        // Given: A table whose second column holds boolean-looking text
        let file = write_file(b"key\tenabled\nwh_main_emp_karl_franz\ttrue\n");

        // When: It is decoded into a row with a bool column
        let mut rows = read_tsv::<Flagged>(file.path(), TsvOptions::default()).unwrap();

        // Then: The cell arrives as a string, so the row is dropped
        assert_eq!(rows.by_ref().count(), 0);
        assert_eq!(rows.dropped(), 1);

        // And: The same table decodes when the column is declared as text
        let rows: Vec<FlaggedText> = read_tsv(file.path(), TsvOptions::default())
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(rows[0].key, "wh_main_emp_karl_franz");
        assert_eq!(rows[0].enabled.as_deref(), Some("true"));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = read_tsv::<Leader>(Path::new("/nope/data__.tsv"), TsvOptions::leader_table())
            .err()
            .unwrap();
        assert_eq!(err.code(), "ERR_IO");
    }
}
