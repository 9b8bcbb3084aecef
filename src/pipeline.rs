//! File-to-file filtering pass.
//!
//! Reads the input line by line, feeds each line through a [`LineFilter`],
//! and writes kept lines to the output in input order. One sequential pass;
//! no atomic rename, so a mid-run failure leaves a partial output file.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::filter::{ExclusionPatterns, LineDecision, LineFilter};

/// Counters for one filtering run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub lines_read: usize,
    pub lines_written: usize,
    pub lines_suppressed: usize,
    pub lines_excluded: usize,
}

/// Filter `input` into `output` using the given exclusion patterns.
///
/// The output file is created or truncated. Kept lines are written
/// unmodified, `\n`-terminated, in input order.
pub fn filter_file(input: &Path, output: &Path, patterns: ExclusionPatterns) -> Result<FilterStats> {
    let reader = File::open(input).map_err(|e| Error::input_open(input, e))?;
    let writer = File::create(output).map_err(|e| Error::output_create(output, e))?;

    let reader = BufReader::new(reader);
    let mut writer = BufWriter::new(writer);

    debug!(
        input = %input.display(),
        output = %output.display(),
        date_filter = patterns.today(),
        "starting filter pass"
    );

    let mut filter = LineFilter::new(patterns);
    let mut stats = FilterStats::default();

    for line in reader.lines() {
        let line = line.map_err(|e| Error::input_open(input, e))?;
        stats.lines_read += 1;

        match filter.feed_line(&line) {
            LineDecision::Keep => {
                writer
                    .write_all(line.as_bytes())
                    .and_then(|_| writer.write_all(b"\n"))
                    .map_err(|e| Error::output_write(output, e))?;
                stats.lines_written += 1;
            }
            LineDecision::Suppressed => stats.lines_suppressed += 1,
            LineDecision::Excluded => stats.lines_excluded += 1,
        }
    }

    writer.flush().map_err(|e| Error::output_write(output, e))?;

    info!(
        lines_read = stats.lines_read,
        lines_written = stats.lines_written,
        lines_suppressed = stats.lines_suppressed,
        lines_excluded = stats.lines_excluded,
        "filter pass complete"
    );

    Ok(stats)
}
