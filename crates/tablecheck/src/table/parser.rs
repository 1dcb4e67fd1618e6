//! CSV/TSV parser with delimiter detection and value classification.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Result, TableCheckError};
use crate::logging::check_log;
use crate::value::Value;

use super::source::DataTable;

/// Delimiters to try when auto-detecting, in order of preference.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Leading lines inspected when auto-detecting.
const SNIFF_RECORDS: usize = 10;

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Whether the file has a header row.
    pub has_header: bool,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
    /// Extra cell texts read as empty, on top of the built-in NA vocabulary.
    pub null_markers: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            has_header: true,
            max_rows: None,
            quote: b'"',
            null_markers: Vec::new(),
        }
    }
}

impl ParserConfig {
    /// Use a fixed delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Treat the first line as data.
    pub fn without_header(mut self) -> Self {
        self.has_header = false;
        self
    }

    /// Stop after this many data rows.
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = Some(max_rows);
        self
    }

    /// Read an extra text as the empty marker.
    pub fn with_null_marker(mut self, marker: impl Into<String>) -> Self {
        self.null_markers.push(marker.into());
        self
    }
}

/// Parses delimited text into a typed [`DataTable`].
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file into a table.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<DataTable> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| TableCheckError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents)
            .map_err(|e| TableCheckError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        self.parse_bytes(&contents)
    }

    /// Parse in-memory text into a table.
    pub fn parse_str(&self, text: &str) -> Result<DataTable> {
        self.parse_bytes(text.as_bytes())
    }

    fn parse_bytes(&self, bytes: &[u8]) -> Result<DataTable> {
        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(bytes)?,
        };

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(self.config.has_header)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let mut raw_rows: Vec<csv::StringRecord> = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }
            raw_rows.push(result?);
        }

        let headers: Vec<String> = if self.config.has_header {
            reader.headers()?.iter().map(|s| s.trim().to_string()).collect()
        } else {
            let width = raw_rows.iter().map(|r| r.len()).max().unwrap_or(0);
            (0..width).map(|i| format!("column_{}", i + 1)).collect()
        };

        if headers.is_empty() {
            return Err(TableCheckError::EmptyData("No columns found".to_string()));
        }

        let expected_cols = headers.len();
        let rows: Vec<Vec<Value>> = raw_rows
            .iter()
            .map(|record| {
                // Pad short rows with empties, drop overflow
                (0..expected_cols)
                    .map(|i| self.classify(record.get(i).unwrap_or("")))
                    .collect()
            })
            .collect();

        check_log!(
            log::Level::Debug,
            "table_parsed",
            "rows={} cols={} delimiter={:?}",
            rows.len(),
            expected_cols,
            delimiter as char
        );

        DataTable::new(headers, rows)
    }

    fn classify(&self, raw: &str) -> Value {
        let trimmed = raw.trim();
        if DataTable::is_null_value(trimmed) || self.config.null_markers.iter().any(|m| m == trimmed)
        {
            Value::Empty
        } else {
            Value::parse(trimmed)
        }
    }
}

/// Pick the candidate delimiter that splits the leading records most
/// consistently, falling back to a comma for single-column input.
///
/// Records are read with the csv reader itself, so quoted fields that
/// contain a candidate delimiter do not count as splits.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let sample = leading_records(bytes, SNIFF_RECORDS);
    if sample.iter().all(u8::is_ascii_whitespace) {
        return Err(TableCheckError::EmptyData("No lines to analyze".to_string()));
    }

    // Uniform width beats width; on a full tie the earlier candidate wins
    let best = DELIMITERS
        .iter()
        .rev()
        .filter_map(|&delim| record_width(sample, delim).map(|shape| (delim, shape)))
        .max_by_key(|&(_, shape)| shape);

    Ok(best.map_or(b',', |(delim, _)| delim))
}

/// The prefix of `bytes` holding at most `limit` lines.
fn leading_records(bytes: &[u8], limit: usize) -> &[u8] {
    let end = bytes
        .iter()
        .enumerate()
        .filter(|&(_, &b)| b == b'\n')
        .nth(limit.saturating_sub(1))
        .map_or(bytes.len(), |(idx, _)| idx + 1);
    &bytes[..end]
}

/// `(uniform, width)` of the sampled records split on `delimiter`, where
/// `width` is the field count of the first record. `None` when the first
/// record is not split at all.
fn record_width(sample: &[u8], delimiter: u8) -> Option<(bool, usize)> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(sample);

    let widths: Vec<usize> = reader
        .records()
        .map_while(|record| record.ok())
        .map(|record| record.len())
        .collect();

    let first = *widths.first()?;
    if first < 2 {
        return None;
    }
    Some((widths.iter().all(|&w| w == first), first))
}
