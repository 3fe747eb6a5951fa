//! # wfq-scheduler
//!
//! Weighted Fair Queueing scheduler core: virtual-time bookkeeping,
//! per-flow FIFOs, the virtual-finish-time heap, and the driver loop that
//! merges an arrival stream with the departure stream it generates.
//!
//! Parsing of the trace format and formatting of output lines live in
//! `wfq-trace-io`; this crate only knows about [`wfq_core::ArrivalEvent`]
//! and [`wfq_core::DepartureEvent`].
//!
//! ## Module Structure
//!
//! - `heap`: the virtual-finish-time min-heap
//! - `flow`: per-flow state and the flow table
//! - `clock`: the global virtual clock
//! - `packet`: the internal enqueued-packet representation
//! - `scheduler`: the aggregate `Scheduler` and its driver loop
//! - `logging`: tracing subscriber initialization for consuming binaries

pub mod clock;
pub mod flow;
pub mod heap;
pub mod logging;
pub mod packet;
pub mod scheduler;

pub use heap::DEFAULT_TIE_TOLERANCE;
pub use scheduler::{schedule_all, Scheduler};
