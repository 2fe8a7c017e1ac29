use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::data::output;
use crate::data::parse::parse_line;
use crate::data::{OutputTarget, TableConfig};
use crate::error::{Error, Result};

/// Turns a line-oriented table into a LaTeX `tabular` block.
pub struct TableConverter<'a> {
    config: &'a TableConfig,
}

impl<'a> TableConverter<'a> {
    pub fn new(config: &'a TableConfig) -> Self {
        TableConverter { config }
    }

    /// Convert the table at `path` into the configured output target.
    ///
    /// The caller is responsible for making sure an existing output file may
    /// be overwritten. Returns the number of rows written.
    pub fn convert_file(&self, path: &Path) -> Result<usize> {
        let input = File::open(path).map_err(|source| Error::InputNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let input = BufReader::new(input);

        match &self.config.output {
            OutputTarget::Stdout => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                self.convert(input, &mut out)
            }
            OutputTarget::File(output_path) => {
                let file = File::create(output_path).map_err(Error::output)?;
                let mut out = BufWriter::new(file);
                let rows = self.convert(input, &mut out)?;
                out.into_inner()
                    .map_err(|err| Error::output(err.into_error()))?
                    .sync_all()
                    .map_err(Error::output)?;
                Ok(rows)
            }
        }
    }

    /// Stream `input` line by line into `out` as LaTeX.
    ///
    /// The preamble is written when the first line is seen, so an empty input
    /// produces only the closing markup.
    pub fn convert<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> Result<usize> {
        debug!("Converting the table using the following parameters:");
        debug!("\tcolumn separator: {}", self.config.separator);
        debug!(
            "\tstring delimiter: {}",
            self.config.delimiter.as_deref().unwrap_or("")
        );
        debug!("\toutput: {}", self.config.output);

        let mut rows = 0;
        for (idx, line) in input.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|source| Error::InputRead {
                line: line_no,
                source,
            })?;
            debug!("Processing line {}: {}", line_no, line);

            let row = parse_line(&line, self.config);

            if line_no == 1 {
                debug!("Writing the table opening markup ({} columns)", row.len());
                output::write_table_open(out, row.len()).map_err(Error::output)?;
            }

            output::write_row(out, &row).map_err(Error::output)?;
            rows = line_no;
        }

        debug!("Writing the table closing markup");
        output::write_table_close(out).map_err(Error::output)?;
        out.flush().map_err(Error::output)?;

        Ok(rows)
    }
}
