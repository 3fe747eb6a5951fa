//! # wfq-trace-io
//!
//! Line-oriented I/O for the WFQ scheduler: a streaming parser from
//! trace lines to [`wfq_core::ArrivalEvent`], and a formatter from
//! [`wfq_core::DepartureEvent`] back to a trace line. Neither module
//! touches the scheduler itself — this crate is the boundary, not the
//! engine.

pub mod formatter;
pub mod parser;

pub use formatter::{format_departure, write_departures};
pub use parser::{parse_line, ArrivalReader, ParseWarning};
