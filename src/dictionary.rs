//! Dictionary file loading.
//!
//! A dictionary file starts with a line holding a positive word count N,
//! followed by N whitespace-delimited words. The loader is deliberately
//! lenient about the body: a file that ends early yields the words that were
//! read, and surplus words past N are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use thiserror::Error;
use tracing::warn;

/// Errors from reading a dictionary file.
#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("failed to read dictionary file: {0}")]
    Io(#[from] std::io::Error),

    #[error("dictionary file is missing the leading word count")]
    MissingCount,

    #[error("dictionary word count is not a positive integer: {0:?}")]
    InvalidCount(String),
}

/// Reads up to the declared number of words from the file at `path`.
pub fn read_dictionary<P: AsRef<Path>>(path: P) -> Result<Vec<String>, DictionaryError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let mut header = String::new();
    if reader.read_line(&mut header)? == 0 {
        return Err(DictionaryError::MissingCount);
    }
    let declared = match header.trim().parse::<i64>() {
        Ok(count) if count > 0 => count as usize,
        _ => return Err(DictionaryError::InvalidCount(header.trim().to_owned())),
    };

    let mut body = String::new();
    reader.read_to_string(&mut body)?;
    let words: Vec<String> = body
        .split_whitespace()
        .take(declared)
        .map(str::to_owned)
        .collect();

    if words.len() < declared {
        warn!(
            declared,
            read = words.len(),
            "dictionary file ended before the declared word count"
        );
    }

    Ok(words)
}
