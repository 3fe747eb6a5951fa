//! Parses a trace, drives the scheduler, and formats the departures —
//! the same three steps `wfq-sim` runs over stdin/stdout.

use wfq_core::ArrivalEvent;
use wfq_scheduler::schedule_all;
use wfq_trace_io::{format_departure, parse_line};

#[test]
fn full_pipeline_parses_schedules_and_formats() {
    let trace = "\
0 10.0.0.1 1000 10.0.0.2 2000 50
0 10.0.0.3 1000 10.0.0.4 2000 50 2.00
garbage line
";
    let arrivals: Vec<ArrivalEvent> = trace
        .lines()
        .enumerate()
        .filter_map(|(i, line)| parse_line(line, i + 1).ok().flatten())
        .collect();
    assert_eq!(arrivals.len(), 2);

    let departures = schedule_all(arrivals).unwrap();
    let rendered: Vec<String> = departures.iter().map(format_departure).collect();

    assert_eq!(rendered[0], "0: 0 10.0.0.3 1000 10.0.0.4 2000 50 2.00");
    assert_eq!(rendered[1], "50: 0 10.0.0.1 1000 10.0.0.2 2000 50");
}
