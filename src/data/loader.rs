use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use thiserror::Error;

use super::model::SampleSet;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} contains no sample row", path.display())]
    Empty { path: PathBuf },
    #[error("malformed CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{}, field {index}: '{token}' is not a floating-point number", path.display())]
    Parse {
        path: PathBuf,
        index: usize,
        token: String,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the first row of a comma-separated sample file.
///
/// Expected layout, no header row:
///
/// ```text
/// 0.12, 0.98, 0.45, ...
/// ```
///
/// Every field of the first record must be a float literal; one bad field
/// fails the whole load. The row is the first physical line, so a blank
/// first line is an empty file. Any further lines are ignored.
pub fn load_samples(path: &Path) -> Result<SampleSet, LoadError> {
    let io_error = |source: io::Error| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;

    // The first physical line is the row, even when it is blank.
    let mut line = String::new();
    BufReader::new(file).read_line(&mut line).map_err(io_error)?;

    if line.trim().is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(line.as_bytes());

    let record = match reader.records().next() {
        Some(Ok(record)) => record,
        Some(Err(source)) => {
            return Err(LoadError::Csv {
                path: path.to_path_buf(),
                source,
            })
        }
        None => {
            return Err(LoadError::Empty {
                path: path.to_path_buf(),
            })
        }
    };

    let values = record
        .iter()
        .enumerate()
        .map(|(index, token)| {
            parse_float(token).ok_or_else(|| LoadError::Parse {
                path: path.to_path_buf(),
                index,
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<f64>, LoadError>>()?;

    log::debug!("{}: parsed {} fields", path.display(), values.len());

    Ok(SampleSet::new(path, values))
}

// ---------------------------------------------------------------------------
// Float grammar
// ---------------------------------------------------------------------------

/// Parse a token under the strict literal grammar, returning `None` for
/// anything outside it or for values that overflow to infinity.
pub fn parse_float(token: &str) -> Option<f64> {
    if !is_float_literal(token) {
        return None;
    }
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`
///
/// Rejects the `inf` / `nan` spellings that `str::parse::<f64>` accepts.
pub fn is_float_literal(token: &str) -> bool {
    let bytes = token.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        frac_digits = count_digits(&bytes[pos..]);
        pos += frac_digits;
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_digits = count_digits(&bytes[pos..]);
        if exp_digits == 0 {
            return false;
        }
        pos += exp_digits;
    }

    pos == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
