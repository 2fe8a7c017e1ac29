use std::io::{BufRead, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

pub const OVERWRITE_QUESTION: &str =
    "The output file already exists. Would you like to overwrite it ? (y/n) ";

/// Ask whether `path` may be overwritten. Returns `true` straight away when
/// nothing exists at `path`; otherwise only an answer of exactly `y` agrees.
pub fn confirm_overwrite<R: BufRead, W: Write>(
    path: &Path,
    mut input: R,
    mut output: W,
) -> Result<bool> {
    debug!("Verifying that the output file does not already exist");
    if !path.exists() {
        return Ok(true);
    }

    output
        .write_all(OVERWRITE_QUESTION.as_bytes())
        .and_then(|_| output.flush())
        .map_err(Error::Prompt)?;

    let mut answer = String::new();
    input.read_line(&mut answer).map_err(Error::Prompt)?;
    let confirmed = answer.trim_end_matches(|c: char| c == '\n' || c == '\r') == "y";

    if confirmed {
        debug!("Received a positive answer, continuing");
    } else {
        debug!("Received a negative answer, stopping");
    }

    Ok(confirmed)
}
