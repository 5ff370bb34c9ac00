//! Newline-delimited JSON reader
//!
//! Every non-empty line is decoded on its own. A line that is not valid
//! JSON, is not valid UTF-8, or lacks a required column is dropped and
//! counted; only I/O failures surface as errors.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::de::DeserializeOwned;
use wh3_core::{log_op_end, log_op_start};

use crate::errors::{io_error, Result};

/// Lazy sequence of decoded rows
///
/// Yields `Err` only when the underlying file cannot be read; the sequence
/// ends after such an error.
pub struct NdjsonRows<T> {
    path: PathBuf,
    reader: BufReader<File>,
    buf: Vec<u8>,
    read: u64,
    dropped: u64,
    started: Instant,
    done: bool,
    _row: PhantomData<T>,
}

impl<T> NdjsonRows<T> {
    /// Rows decoded so far
    pub fn read(&self) -> u64 {
        self.read
    }

    /// Non-empty lines dropped so far
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    fn finish(&mut self) {
        if !self.done {
            self.done = true;
            log_op_end!(
                "read_ndjson",
                duration_ms = self.started.elapsed().as_millis() as u64,
                path = %self.path.display(),
                rows_read = self.read,
                rows_dropped = self.dropped
            );
        }
    }
}

impl<T: DeserializeOwned> Iterator for NdjsonRows<T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => {
                    self.finish();
                    return None;
                }
                Ok(_) => {}
                Err(err) => {
                    self.done = true;
                    return Some(Err(io_error("read_ndjson", &self.path, err)));
                }
            }

            let line = trim_line(&self.buf);
            if line.is_empty() {
                continue;
            }
            match serde_json::from_slice::<T>(line) {
                Ok(row) => {
                    self.read += 1;
                    return Some(Ok(row));
                }
                Err(err) => {
                    self.dropped += 1;
                    tracing::debug!(
                        op = "read_ndjson",
                        path = %self.path.display(),
                        error = %err,
                        "dropped malformed record"
                    );
                }
            }
        }
    }
}

fn trim_line(line: &[u8]) -> &[u8] {
    let start = line
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(line.len());
    let end = line
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    &line[start..end]
}

/// Open an NDJSON file for lazy, tolerant decoding into `T`
///
/// # Errors
///
/// Returns an `ERR_IO` error naming the path when the file cannot be opened.
pub fn read_ndjson<T: DeserializeOwned>(path: &Path) -> Result<NdjsonRows<T>> {
    log_op_start!("read_ndjson", path = %path.display());
    let file = File::open(path).map_err(|e| io_error("read_ndjson", path, e))?;
    Ok(NdjsonRows {
        path: path.to_path_buf(),
        reader: BufReader::new(file),
        buf: Vec::new(),
        read: 0,
        dropped: 0,
        started: Instant::now(),
        done: false,
        _row: PhantomData,
    })
}
