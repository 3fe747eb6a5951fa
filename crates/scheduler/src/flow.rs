//! Per-flow state and the flow table mapping a [`FlowKey`] to it.

use std::collections::{HashMap, VecDeque};

use wfq_core::FlowKey;

use crate::packet::Packet;

/// Per-flow state: identity, weight, virtual time, and its FIFO of
/// not-yet-transmitted packets.
#[derive(Debug)]
pub struct Flow {
    pub key: FlowKey,
    /// Creation ordinal, assigned monotonically at first sight of the key.
    /// Used only as the final tie-break in the schedule heap.
    pub priority: u32,
    pub weight: f64,
    /// Virtual finish time of the most recently enqueued packet; the
    /// virtual-start floor for the next one.
    pub virtual_time: f64,
    pub queue: VecDeque<Packet>,
    /// True iff this flow currently has a live entry in the schedule
    /// heap. Kept as an explicit flag (rather than re-derived) so the
    /// driver can assert the "at most one heap entry per flow" invariant.
    pub in_heap: bool,
}

/// Default weight assigned to a flow until an arrival overwrites it.
pub const DEFAULT_WEIGHT: f64 = 1.0;

impl Flow {
    fn new(key: FlowKey, priority: u32, default_weight: f64) -> Self {
        Self {
            key,
            priority,
            weight: default_weight,
            virtual_time: 0.0,
            queue: VecDeque::new(),
            in_heap: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Maps a [`FlowKey`] to its `Flow`, by index into a stable `Vec`.
/// Flows are created lazily and never destroyed.
#[derive(Debug)]
pub struct FlowTable {
    flows: Vec<Flow>,
    index: HashMap<FlowKey, usize>,
    /// Weight newly created flows start with, until an arrival overwrites
    /// it with an explicit value (spec default: [`DEFAULT_WEIGHT`],
    /// overridable via `wfq-cli-config`'s `default_weight` knob).
    default_weight: f64,
}

impl Default for FlowTable {
    fn default() -> Self {
        Self::new(DEFAULT_WEIGHT)
    }
}

impl FlowTable {
    pub fn new(default_weight: f64) -> Self {
        Self {
            flows: Vec::new(),
            index: HashMap::new(),
            default_weight,
        }
    }

    /// Returns the index of the flow for `key`, creating it (with the
    /// next monotonic priority) if this is the first arrival for it.
    pub fn resolve_or_create(&mut self, key: &FlowKey) -> usize {
        if let Some(&idx) = self.index.get(key) {
            return idx;
        }
        let priority = self.flows.len() as u32;
        let idx = self.flows.len();
        self.flows
            .push(Flow::new(key.clone(), priority, self.default_weight));
        self.index.insert(key.clone(), idx);
        idx
    }

    pub fn get(&self, idx: usize) -> &Flow {
        &self.flows[idx]
    }

    pub fn get_mut(&mut self, idx: usize) -> &mut Flow {
        &mut self.flows[idx]
    }

    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }
}
