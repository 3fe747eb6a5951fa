//! The global virtual clock: models the progress of the fluid-model
//! server that WFQ approximates.

/// Tracks global virtual time, lazily advanced from real time by the sum
/// of the weights of currently backlogged flows.
#[derive(Debug, Clone)]
pub struct VirtualClock {
    virtual_time: f64,
    last_update: i64,
    /// Sum of `weight_used` over all currently backlogged head-of-line
    /// packets. Clamped to a minimum of 1.0 when computing the advance,
    /// never mutated to be negative.
    active_weight_sum: f64,
}

impl VirtualClock {
    pub fn new(start_real_time: i64) -> Self {
        Self {
            virtual_time: 0.0,
            last_update: start_real_time,
            active_weight_sum: 0.0,
        }
    }

    pub fn virtual_time(&self) -> f64 {
        self.virtual_time
    }

    pub fn active_weight_sum(&self) -> f64 {
        self.active_weight_sum
    }

    /// Brings the virtual clock current to `real_time_now`. A no-op if
    /// called again with the same (or an earlier) timestamp, and during
    /// idle periods (`active_weight_sum == 0`) it still advances, using
    /// the clamped denominator, matching the design's "freeze during
    /// idle" allowance only in the sense that an all-idle clamp of 1.0
    /// keeps the advance bounded rather than undefined.
    pub fn advance_to(&mut self, real_time_now: i64) {
        let delta = real_time_now - self.last_update;
        if delta > 0 {
            self.virtual_time += delta as f64 / self.active_weight_sum.max(1.0);
        }
        if real_time_now > self.last_update {
            self.last_update = real_time_now;
        }
    }

    /// Adds `delta` to the active weight sum (a flow just became
    /// backlogged, or its head-of-line packet's weight changed).
    pub fn add_active_weight(&mut self, delta: f64) {
        self.active_weight_sum += delta;
    }

    /// Subtracts `delta` from the active weight sum (a flow just became
    /// idle, or its head-of-line packet's weight changed). Clamped at
    /// zero to absorb floating-point drift; a result meaningfully below
    /// zero is an invariant violation the caller should check for.
    pub fn remove_active_weight(&mut self, delta: f64) {
        self.active_weight_sum = (self.active_weight_sum - delta).max(0.0);
    }
}
