//! Line-oriented trace parser.
//!
//! Grammar (one arrival per line):
//! ```text
//! <arrival_time> <src_addr> <src_port> <dst_addr> <dst_port> <length> [<weight>]
//! ```
//! All fields but `weight` are required. A line with fewer than six
//! whitespace-separated fields is a [`ParseWarning`]; the line is skipped
//! and the stream continues. Blank (all-whitespace) lines are skipped
//! without a warning, matching the trailing-newline tolerance of a
//! `fgets`/`sscanf` read loop.

use std::io::BufRead;

use thiserror::Error;
use wfq_core::{ArrivalEvent, FlowKey};

/// A non-fatal parse problem: the offending line was skipped.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("line {line_number}: {message}")]
pub struct ParseWarning {
    pub line_number: usize,
    pub message: String,
}

/// Parses a single trace line into an [`ArrivalEvent`].
///
/// Returns `Ok(None)` for a blank line (skipped silently), `Ok(Some(_))`
/// for a well-formed arrival, and `Err(_)` for anything else — too few
/// fields, an unparseable integer, or an address over
/// [`wfq_core::types::MAX_ADDR_LEN`] characters.
///
/// A present-but-non-positive `weight` field is *not* rejected here: it
/// is still a syntactically valid arrival. Whether it takes effect is
/// the scheduler's `InvalidWeight` policy, not the parser's.
pub fn parse_line(line: &str, line_number: usize) -> Result<Option<ArrivalEvent>, ParseWarning> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = trimmed.split_whitespace().collect();
    if fields.len() < 6 {
        return Err(ParseWarning {
            line_number,
            message: format!("expected at least 6 fields, got {}", fields.len()),
        });
    }

    let warn = |message: String| ParseWarning {
        line_number,
        message,
    };

    let arrival_time: i64 = fields[0]
        .parse()
        .map_err(|_| warn(format!("invalid arrival_time '{}'", fields[0])))?;
    let src_addr = fields[1];
    let src_port: i64 = fields[2]
        .parse()
        .map_err(|_| warn(format!("invalid src_port '{}'", fields[2])))?;
    let dst_addr = fields[3];
    let dst_port: i64 = fields[4]
        .parse()
        .map_err(|_| warn(format!("invalid dst_port '{}'", fields[4])))?;
    let length: i64 = fields[5]
        .parse()
        .map_err(|_| warn(format!("invalid length '{}'", fields[5])))?;

    let weight = match fields.get(6) {
        Some(raw) => Some(
            raw.parse::<f64>()
                .map_err(|_| warn(format!("invalid weight '{raw}'")))?,
        ),
        None => None,
    };

    let key = FlowKey::new(src_addr, src_port, dst_addr, dst_port).map_err(warn)?;

    Ok(Some(ArrivalEvent {
        arrival_time,
        key,
        length,
        weight,
    }))
}

/// Streams [`ArrivalEvent`]s out of a `BufRead`, one per well-formed line.
/// Malformed lines are logged via `tracing::warn!` and skipped; the
/// iterator never yields an `Err`, keeping the scheduler's input a plain
/// `Iterator<Item = ArrivalEvent>` as spec.md §1 scopes it.
pub struct ArrivalReader<R> {
    lines: std::io::Lines<R>,
    line_number: usize,
}

impl<R: BufRead> ArrivalReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
        }
    }
}

impl<R: BufRead> Iterator for ArrivalReader<R> {
    type Item = ArrivalEvent;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(err)) => {
                    tracing::warn!(error = %err, "stopping trace read after I/O error");
                    return None;
                }
                None => return None,
            };
            self.line_number += 1;

            match parse_line(&line, self.line_number) {
                Ok(Some(arrival)) => return Some(arrival),
                Ok(None) => continue,
                Err(warning) => {
                    tracing::warn!(%warning, "skipping malformed trace line");
                    continue;
                }
            }
        }
    }
}
