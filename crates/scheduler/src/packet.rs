//! Internal packet representation: an enqueued arrival with its assigned
//! virtual times. Mutated exactly once, at enqueue.

/// An enqueued packet, owned by its flow's FIFO.
#[derive(Debug, Clone)]
pub struct Packet {
    pub arrival_time: i64,
    pub length: i64,
    pub has_explicit_weight: bool,
    pub weight_used: f64,
    pub virtual_start: f64,
    pub virtual_finish: f64,
    pub sequence_id: u64,
}
