//! Virtual-finish-time min-heap.
//!
//! One entry per currently active flow, ordered by the tuple
//! `(virtual_finish, arrival_time, sequence_id, flow_priority)` with
//! `virtual_finish` compared within a fixed tolerance before falling
//! through to the remaining tie-breaks. Built on `std::collections::BinaryHeap`
//! (a max-heap), with comparisons reversed to get min-heap pop semantics.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Default tolerance for treating two virtual finish times as equal.
pub const DEFAULT_TIE_TOLERANCE: f64 = 1e-9;

/// One schedulable flow's head-of-line descriptor.
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub virtual_finish: f64,
    pub arrival_time: i64,
    pub sequence_id: u64,
    pub flow_priority: u32,
    pub flow_index: usize,
    tie_tolerance: f64,
}

impl HeapEntry {
    pub fn new(
        virtual_finish: f64,
        arrival_time: i64,
        sequence_id: u64,
        flow_priority: u32,
        flow_index: usize,
        tie_tolerance: f64,
    ) -> Self {
        Self {
            virtual_finish,
            arrival_time,
            sequence_id,
            flow_priority,
            flow_index,
            tie_tolerance,
        }
    }

    /// Ascending (natural) comparison on the full tie-break tuple.
    fn natural_cmp(&self, other: &Self) -> Ordering {
        cmp_f64_eps(self.virtual_finish, other.virtual_finish, self.tie_tolerance)
            .then_with(|| self.arrival_time.cmp(&other.arrival_time))
            .then_with(|| self.sequence_id.cmp(&other.sequence_id))
            .then_with(|| self.flow_priority.cmp(&other.flow_priority))
    }
}

/// Compares two floats as equal when within `tolerance` of each other,
/// ordered otherwise.
fn cmp_f64_eps(a: f64, b: f64, tolerance: f64) -> Ordering {
    if (a - b).abs() <= tolerance {
        Ordering::Equal
    } else {
        a.partial_cmp(&b).unwrap_or(Ordering::Equal)
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.natural_cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want the smallest
        // tie-break tuple to pop first.
        other.natural_cmp(self)
    }
}

/// Min-priority structure over [`HeapEntry`] values, at most one per
/// active flow.
#[derive(Debug, Default)]
pub struct ScheduleHeap {
    inner: BinaryHeap<HeapEntry>,
}

impl ScheduleHeap {
    pub fn new() -> Self {
        Self {
            inner: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, entry: HeapEntry) {
        self.inner.push(entry);
    }

    pub fn pop(&mut self) -> Option<HeapEntry> {
        self.inner.pop()
    }

    pub fn peek(&self) -> Option<&HeapEntry> {
        self.inner.peek()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
