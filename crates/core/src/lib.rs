//! # wfq-core
//!
//! Shared types and error definitions used across the WFQ trace scheduler
//! workspace: the flow identity and event record types that form the
//! boundary between the scheduler engine and its parser/formatter
//! collaborators, plus the unified error type.
//!
//! ## Module Structure
//!
//! - `types`: `FlowKey` and the external event record types
//! - `error`: unified error type

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{ArrivalEvent, DepartureEvent, FlowKey};
