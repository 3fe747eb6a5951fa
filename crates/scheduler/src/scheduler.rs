//! The scheduler driver: merges the arrival stream with the internally
//! generated departure stream on a single real-time timeline.

use wfq_core::{ArrivalEvent, DepartureEvent, Error, Result};

use crate::clock::VirtualClock;
use crate::flow::FlowTable;
use crate::heap::{HeapEntry, ScheduleHeap, DEFAULT_TIE_TOLERANCE};
use crate::packet::Packet;

/// A packet selected to start transmission, removed from the schedule
/// heap so it cannot be preempted by a later arrival with a smaller
/// virtual finish time. WFQ is non-preemptive at the packet level: once
/// a packet starts, it runs to completion before the heap is consulted
/// again.
#[derive(Debug, Clone, Copy)]
struct InService {
    flow_index: usize,
    start: i64,
    finish_real: i64,
}

/// Weighted Fair Queueing scheduler: virtual-time bookkeeping, per-flow
/// FIFOs, the schedule heap, and the driver loop that interleaves
/// arrivals and departures.
pub struct Scheduler {
    flows: FlowTable,
    heap: ScheduleHeap,
    clock: VirtualClock,
    real_time: i64,
    next_sequence_id: u64,
    tie_tolerance: f64,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self::with_tie_tolerance(DEFAULT_TIE_TOLERANCE)
    }

    pub fn with_tie_tolerance(tie_tolerance: f64) -> Self {
        Self::with_config(tie_tolerance, crate::flow::DEFAULT_WEIGHT)
    }

    /// Full constructor, threading both `wfq-cli-config` knobs through to
    /// the heap's tie-break tolerance and the flow table's starting
    /// weight for newly created flows.
    pub fn with_config(tie_tolerance: f64, default_weight: f64) -> Self {
        Self {
            flows: FlowTable::new(default_weight),
            heap: ScheduleHeap::new(),
            clock: VirtualClock::new(0),
            real_time: 0,
            next_sequence_id: 0,
            tie_tolerance,
        }
    }

    pub fn real_time(&self) -> i64 {
        self.real_time
    }

    pub fn virtual_time(&self) -> f64 {
        self.clock.virtual_time()
    }

    /// Drives the scheduler to completion, consuming `arrivals` (assumed
    /// nondecreasing in `arrival_time`; ties are consumed in iterator
    /// order) and invoking `emit` once per departure, in nondecreasing
    /// `start_time` order.
    pub fn drive<I>(&mut self, arrivals: I, mut emit: impl FnMut(DepartureEvent)) -> Result<()>
    where
        I: IntoIterator<Item = ArrivalEvent>,
    {
        let mut arrivals = arrivals.into_iter().peekable();
        let mut in_service: Option<InService> = None;

        loop {
            let next_arrival_time = arrivals.peek().map(|a| a.arrival_time);

            if in_service.is_none() && self.heap.is_empty() && next_arrival_time.is_none() {
                return Ok(());
            }

            // A packet is already locked into transmission: the only thing
            // that can happen before it finishes is an earlier arrival
            // being enqueued (at its own correct virtual time); the locked
            // packet itself is never reconsidered against the heap.
            if let Some(service) = in_service {
                if next_arrival_time.is_some_and(|t| t < service.finish_real) {
                    let t = next_arrival_time.expect("checked above");
                    self.clock.advance_to(t);
                    self.real_time = t;
                    let arrival = arrivals.next().expect("peeked above");
                    self.enqueue(arrival)?;
                    continue;
                }

                self.clock.advance_to(service.finish_real);
                self.commit_departure(service.start, service.finish_real, service.flow_index, &mut emit)?;
                in_service = None;
                continue;
            }

            let arrival_is_next = match next_arrival_time {
                None => false,
                Some(t) => self.heap.is_empty() || t <= self.real_time,
            };

            if arrival_is_next {
                let t = next_arrival_time.expect("checked above");
                self.clock.advance_to(t);
                self.real_time = t;
                let arrival = arrivals.next().expect("peeked above");
                self.enqueue(arrival)?;
                continue;
            }

            let head = *self
                .heap
                .peek()
                .ok_or_else(|| Error::InvariantViolation("heap empty with no arrival pending".into()))?;

            let start = self.real_time.max(head.arrival_time);

            if start > self.real_time && next_arrival_time.is_some_and(|t| t < start) {
                let t = next_arrival_time.expect("checked above");
                self.clock.advance_to(t);
                self.real_time = t;
                let arrival = arrivals.next().expect("peeked above");
                self.enqueue(arrival)?;
                continue;
            }

            // The head packet starts transmission now. Lock it out of the
            // heap immediately so a later arrival with a smaller virtual
            // finish time cannot be selected ahead of a packet already in
            // service.
            let _ = self.heap.pop();
            let flow = self.flows.get_mut(head.flow_index);
            flow.in_heap = false;
            let head_packet = flow
                .queue
                .front()
                .ok_or_else(|| Error::InvariantViolation("heap entry for empty flow queue".into()))?;
            let finish_real = start + head_packet.length;

            in_service = Some(InService {
                flow_index: head.flow_index,
                start,
                finish_real,
            });
        }
    }

    /// Implements the packet-enqueue steps of the arrival handler: resolve
    /// or create the flow, apply an explicit weight override, compute
    /// virtual start/finish, append to the FIFO, and — if the flow was
    /// previously idle — activate it in the schedule heap.
    fn enqueue(&mut self, arrival: ArrivalEvent) -> Result<()> {
        let idx = self.flows.resolve_or_create(&arrival.key);
        let flow = self.flows.get_mut(idx);

        if let Some(weight) = arrival.weight {
            if weight > 0.0 {
                flow.weight = weight;
            } else {
                tracing::debug!(
                    flow = %flow.key,
                    weight,
                    "ignoring non-positive explicit weight, keeping current flow weight"
                );
            }
        }

        let weight_used = flow.weight;
        let has_explicit_weight = arrival.weight.is_some();
        let sequence_id = self.next_sequence_id;
        self.next_sequence_id += 1;

        let virtual_start = flow.virtual_time.max(self.clock.virtual_time());
        let virtual_finish = virtual_start + arrival.length as f64 / weight_used;
        flow.virtual_time = virtual_finish;

        let was_empty = flow.is_empty();
        flow.queue.push_back(Packet {
            arrival_time: arrival.arrival_time,
            length: arrival.length,
            has_explicit_weight,
            weight_used,
            virtual_start,
            virtual_finish,
            sequence_id,
        });

        if was_empty {
            if flow.in_heap {
                return Err(Error::InvariantViolation(format!(
                    "flow {} already has a heap entry while its queue was empty",
                    flow.key
                )));
            }
            self.clock.add_active_weight(weight_used);
            self.heap.push(HeapEntry::new(
                virtual_finish,
                arrival.arrival_time,
                sequence_id,
                flow.priority,
                idx,
                self.tie_tolerance,
            ));
            flow.in_heap = true;
        }

        Ok(())
    }

    /// Pops the packet locked in `flow_index`'s FIFO (already removed from
    /// the heap when it was selected to start transmission, see `drive`),
    /// re-arms the heap entry for the flow's new head if one remains, and
    /// emits the `DepartureEvent`.
    fn commit_departure(
        &mut self,
        start: i64,
        finish_real: i64,
        flow_index: usize,
        emit: &mut impl FnMut(DepartureEvent),
    ) -> Result<()> {
        let flow = self.flows.get_mut(flow_index);
        let departed = flow
            .queue
            .pop_front()
            .ok_or_else(|| Error::InvariantViolation("flow queue empty at departure commit".into()))?;

        if departed.arrival_time > start {
            return Err(Error::InvariantViolation(format!(
                "departure for flow {} started at {start} before its arrival at {}",
                flow.key, departed.arrival_time
            )));
        }

        emit(DepartureEvent {
            start_time: start,
            arrival_time: departed.arrival_time,
            key: flow.key.clone(),
            length: departed.length,
            weight_used: departed.weight_used,
            has_explicit_weight: departed.has_explicit_weight,
        });

        self.real_time = finish_real;

        if let Some(next_packet) = flow.queue.front() {
            self.clock
                .add_active_weight(next_packet.weight_used - departed.weight_used);
            self.heap.push(HeapEntry::new(
                next_packet.virtual_finish,
                next_packet.arrival_time,
                next_packet.sequence_id,
                flow.priority,
                flow_index,
                self.tie_tolerance,
            ));
            flow.in_heap = true;
        } else {
            self.clock.remove_active_weight(departed.weight_used);
        }

        Ok(())
    }
}

/// Convenience wrapper for callers that want the full departure sequence
/// collected rather than streamed through a callback.
pub fn schedule_all(arrivals: impl IntoIterator<Item = ArrivalEvent>) -> Result<Vec<DepartureEvent>> {
    let mut scheduler = Scheduler::new();
    let mut out = Vec::new();
    scheduler.drive(arrivals, |d| out.push(d))?;
    Ok(out)
}
