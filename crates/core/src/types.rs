//! Core type definitions: flow identity and the external event records
//! that cross the boundary between the scheduler engine and the
//! parser/formatter crates.

use std::fmt;

/// Address fields are opaque strings up to this many bytes, matching the
/// `%15s` field width of the trace format's C origin.
pub const MAX_ADDR_LEN: usize = 15;

/// Identity of a logical flow: the (src_addr, src_port, dst_addr, dst_port)
/// quadruple. Equality is structural on all four fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlowKey {
    src_addr: String,
    src_port: i64,
    dst_addr: String,
    dst_port: i64,
}

impl FlowKey {
    /// Build a flow key, rejecting addresses longer than [`MAX_ADDR_LEN`].
    pub fn new(
        src_addr: impl Into<String>,
        src_port: i64,
        dst_addr: impl Into<String>,
        dst_port: i64,
    ) -> Result<Self, String> {
        let src_addr = src_addr.into();
        let dst_addr = dst_addr.into();
        if src_addr.len() > MAX_ADDR_LEN {
            return Err(format!(
                "src_addr '{src_addr}' exceeds {MAX_ADDR_LEN} characters"
            ));
        }
        if dst_addr.len() > MAX_ADDR_LEN {
            return Err(format!(
                "dst_addr '{dst_addr}' exceeds {MAX_ADDR_LEN} characters"
            ));
        }
        Ok(Self {
            src_addr,
            src_port,
            dst_addr,
            dst_port,
        })
    }

    pub fn src_addr(&self) -> &str {
        &self.src_addr
    }

    pub fn src_port(&self) -> i64 {
        self.src_port
    }

    pub fn dst_addr(&self) -> &str {
        &self.dst_addr
    }

    pub fn dst_port(&self) -> i64 {
        self.dst_port
    }
}

impl fmt::Display for FlowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.src_addr, self.src_port, self.dst_addr, self.dst_port
        )
    }
}

/// A packet arrival as read from the trace, before the scheduler assigns
/// virtual times or a sequence id.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrivalEvent {
    pub arrival_time: i64,
    pub key: FlowKey,
    pub length: i64,
    /// Explicit weight carried by this arrival, if any. A present value
    /// that is not strictly positive is handled by the scheduler's
    /// enqueue policy (treated as absent), not here.
    pub weight: Option<f64>,
}

/// A packet departure as emitted by the scheduler, ready for formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartureEvent {
    pub start_time: i64,
    pub arrival_time: i64,
    pub key: FlowKey,
    pub length: i64,
    pub weight_used: f64,
    /// Whether the *originating arrival* carried an explicit weight.
    /// Governs whether the formatter prints the trailing weight field.
    pub has_explicit_weight: bool,
}
