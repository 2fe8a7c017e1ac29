use std::fmt;
use std::path::PathBuf;

use regex::Regex;

use crate::error::{Error, Result};

pub mod output;
pub mod parse;

pub const DEFAULT_SEPARATOR: &str = ",";

/// The fields of one input line, in order.
pub type Row = Vec<String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::Stdout => write!(f, "stdout"),
            OutputTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Settings for a single conversion run.
///
/// The separator is a regular expression, not a literal: `.` matches every
/// character (so `a.b` yields four empty fields) and a literal bar has to be
/// written `\|`. Groups captured by the separator are kept as fields, so
/// `(,)` turns `a,b` into `a`, `,` and `b`.
#[derive(Debug, Clone)]
pub struct TableConfig {
    pub separator: Regex,
    pub delimiter: Option<String>,
    pub output: OutputTarget,
}

impl TableConfig {
    /// Build a configuration from raw command line values. An empty
    /// `delimiter` disables quote stripping.
    pub fn new(separator: &str, delimiter: &str, output: OutputTarget) -> Result<Self> {
        if separator.is_empty() {
            return Err(Error::InvalidSeparator {
                separator: separator.to_string(),
                reason: "the separator must not be empty".to_string(),
            });
        }

        let separator = Regex::new(separator).map_err(|err| Error::InvalidSeparator {
            separator: separator.to_string(),
            reason: err.to_string(),
        })?;

        let delimiter = if delimiter.is_empty() {
            None
        } else {
            Some(delimiter.to_string())
        };

        Ok(TableConfig {
            separator,
            delimiter,
            output,
        })
    }
}
