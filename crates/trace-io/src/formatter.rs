//! Departure line formatter.
//!
//! Renders a [`DepartureEvent`] back into the trace's line format:
//! ```text
//! <start_time>: <arrival_time> <src_addr> <src_port> <dst_addr> <dst_port> <length>[ <weight>]
//! ```
//! The trailing weight field is emitted only when the originating
//! arrival carried an explicit weight (`has_explicit_weight`); a flow
//! running under the implicit default weight prints no weight at all,
//! matching the original trace's own column count.

use std::io::{self, Write};

use wfq_core::DepartureEvent;

/// Formats a single departure as a trace line, without a trailing newline.
pub fn format_departure(event: &DepartureEvent) -> String {
    let key = &event.key;
    let mut line = format!(
        "{}: {} {} {} {} {} {}",
        event.start_time,
        event.arrival_time,
        key.src_addr(),
        key.src_port(),
        key.dst_addr(),
        key.dst_port(),
        event.length,
    );
    if event.has_explicit_weight {
        line.push_str(&format!(" {:.2}", event.weight_used));
    }
    line
}

/// Writes a stream of departures, one line per event, to `writer`.
pub fn write_departures<'a, W: Write>(
    writer: &mut W,
    departures: impl IntoIterator<Item = &'a DepartureEvent>,
) -> io::Result<()> {
    for event in departures {
        writeln!(writer, "{}", format_departure(event))?;
    }
    Ok(())
}
