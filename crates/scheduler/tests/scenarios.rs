//! End-to-end scenarios for the weighted fair queueing scheduler,
//! driving the public `Scheduler` API exactly as the `wfq-sim` binary
//! does.

use wfq_core::{ArrivalEvent, FlowKey};
use wfq_scheduler::schedule_all;

fn arr(t: i64, src: &str, sp: i64, dst: &str, dp: i64, len: i64, weight: Option<f64>) -> ArrivalEvent {
    ArrivalEvent {
        arrival_time: t,
        key: FlowKey::new(src, sp, dst, dp).unwrap(),
        length: len,
        weight,
    }
}

#[test]
fn scenario_a_single_flow_fifo() {
    let out = schedule_all(vec![
        arr(0, "A", 1, "B", 1, 50, None),
        arr(0, "A", 1, "B", 1, 30, None),
        arr(0, "A", 1, "B", 1, 20, None),
    ])
    .unwrap();

    let starts: Vec<i64> = out.iter().map(|d| d.start_time).collect();
    assert_eq!(starts, vec![0, 50, 80]);
}

#[test]
fn scenario_b_equal_weight_simultaneous_arrival_breaks_tie_on_priority() {
    let out = schedule_all(vec![
        arr(0, "A", 1, "B", 1, 100, None),
        arr(0, "A", 2, "B", 2, 100, None),
        arr(0, "A", 3, "B", 3, 100, None),
    ])
    .unwrap();

    let order: Vec<i64> = out.iter().map(|d| d.key.src_port()).collect();
    assert_eq!(order, vec![1, 2, 3]);
}

#[test]
fn scenario_c_weighted_fairness_favors_heavier_flow() {
    let out = schedule_all(vec![
        arr(0, "A", 1, "B", 1, 90, Some(1.0)),
        arr(0, "A", 2, "B", 2, 90, Some(9.0)),
    ])
    .unwrap();

    assert_eq!(out[0].key.src_port(), 2);
    assert_eq!(out[1].key.src_port(), 1);
}

#[test]
fn scenario_d_arrival_during_transmission_waits_for_current_packet() {
    let out = schedule_all(vec![
        arr(0, "A", 1, "B", 1, 200, None),
        arr(50, "A", 2, "B", 2, 10, None),
    ])
    .unwrap();

    assert_eq!(out[0].start_time, 0);
    assert_eq!(out[1].start_time, 200);
}

#[test]
fn scenario_e_weight_overwrite_applies_to_next_packet_only() {
    let out = schedule_all(vec![
        arr(0, "A", 1, "B", 1, 100, Some(1.0)),
        arr(0, "A", 1, "B", 1, 100, Some(5.0)),
    ])
    .unwrap();

    assert_eq!(out[0].weight_used, 1.0);
    assert_eq!(out[1].weight_used, 5.0);
}

#[test]
fn in_service_packet_is_not_preempted_by_a_smaller_virtual_finish_arrival() {
    // Flow 2 arrives mid-transmission with a weight high enough to give
    // it a virtual finish time far smaller than flow 1's in-service
    // packet. WFQ is non-preemptive at the packet level: flow 1 must
    // still run to completion before flow 2 is ever considered.
    let out = schedule_all(vec![
        arr(0, "A", 1, "B", 1, 100, None),
        arr(10, "A", 2, "B", 2, 1, Some(100.0)),
    ])
    .unwrap();

    assert_eq!(out[0].key.src_port(), 1);
    assert_eq!(out[0].start_time, 0);
    assert_eq!(out[1].key.src_port(), 2);
    assert_eq!(out[1].start_time, 100);
    assert_eq!(out[1].arrival_time, 10);
}

#[test]
fn scenario_f_idle_gap_does_not_distort_future_fairness() {
    let out = schedule_all(vec![
        arr(0, "A", 1, "B", 1, 10, None),
        arr(500, "A", 2, "B", 2, 10, None),
        arr(500, "A", 3, "B", 3, 10, None),
    ])
    .unwrap();

    assert_eq!(out[0].start_time, 0);
    assert_eq!(out[1].start_time, 500);
    assert_eq!(out[2].start_time, 510);
}
