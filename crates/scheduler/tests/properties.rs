//! Property tests over randomly generated traces: causality, FIFO order
//! within a flow, and heap/queue integrity hold for any arrival stream
//! the scheduler is given, not just the handwritten scenarios.

use proptest::prelude::*;
use std::collections::HashMap;

use wfq_core::{ArrivalEvent, FlowKey};
use wfq_scheduler::schedule_all;

fn arrival_strategy() -> impl Strategy<Value = ArrivalEvent> {
    (0i64..50, 0u8..4, 1i64..200, prop::option::of(0.1f64..10.0)).prop_map(
        |(arrival_time, flow_id, length, weight)| ArrivalEvent {
            arrival_time,
            key: FlowKey::new(format!("src-{flow_id}"), flow_id as i64, "dst", 1).unwrap(),
            length,
            weight,
        },
    )
}

fn trace_strategy() -> impl Strategy<Value = Vec<ArrivalEvent>> {
    prop::collection::vec(arrival_strategy(), 1..40).prop_map(|mut arrivals| {
        arrivals.sort_by_key(|a| a.arrival_time);
        arrivals
    })
}

proptest! {
    #[test]
    fn departures_never_start_before_their_arrival(trace in trace_strategy()) {
        let departures = schedule_all(trace).unwrap();
        for d in &departures {
            prop_assert!(d.start_time >= d.arrival_time);
        }
    }

    #[test]
    fn global_start_times_are_nondecreasing(trace in trace_strategy()) {
        let departures = schedule_all(trace).unwrap();
        for pair in departures.windows(2) {
            prop_assert!(pair[1].start_time >= pair[0].start_time);
        }
    }

    #[test]
    fn per_flow_departures_preserve_fifo_arrival_order(trace in trace_strategy()) {
        let input_len = trace.len();
        let departures = schedule_all(trace).unwrap();
        prop_assert_eq!(departures.len(), input_len);

        let mut last_seen: HashMap<String, i64> = HashMap::new();
        for d in &departures {
            let flow = format!("{}", d.key);
            if let Some(&prev_start) = last_seen.get(&flow) {
                prop_assert!(d.start_time >= prev_start);
            }
            last_seen.insert(flow, d.start_time);
        }
    }

    #[test]
    fn every_arrival_yields_exactly_one_departure(trace in trace_strategy()) {
        let input_len = trace.len();
        let departures = schedule_all(trace).unwrap();
        prop_assert_eq!(departures.len(), input_len);
    }
}
