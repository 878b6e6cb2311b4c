//! Sinewave behavior — a periodic function of absolute wall-clock time.

use pv_core::{ChannelRng, Value};

use crate::{Behavior, BehaviorResult, Params, UpdateContext};

/// Produces `constant + amp * sin(t * freq + phase)` where `t` is the
/// clock's current Unix time in seconds.
///
/// No time origin is stored: the wave is evaluated against absolute time,
/// so two instances with identical parameters constructed at different real
/// times read the same value at the same instant.  All four parameters are
/// fixed at construction.
pub struct SinewaveBehavior {
    constant: f64,
    amp:      f64,
    freq:     f64,
    phase:    f64,
    value:    Value,
}

impl SinewaveBehavior {
    pub const KIND: &'static str = "sinewave";

    pub fn new(constant: f64, amp: f64, freq: f64, phase: f64) -> Self {
        Self {
            constant,
            amp,
            freq,
            phase,
            value: Value::default(),
        }
    }

    /// Construct from positional parameters `[constant, amp, freq, phase]`.
    pub fn from_params(params: &Params) -> BehaviorResult<Self> {
        params.expect_len(4)?;
        Ok(Self::new(
            params.number(0, "constant")?,
            params.number(1, "amp")?,
            params.number(2, "freq")?,
            params.number(3, "phase")?,
        ))
    }
}

impl Behavior for SinewaveBehavior {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn update_value(
        &mut self,
        ctx:  &UpdateContext<'_>,
        _rng: &mut ChannelRng,
    ) -> BehaviorResult<()> {
        let t = ctx.clock.now_seconds();
        self.value = Value::Float(self.constant + self.amp * (t * self.freq + self.phase).sin());
        Ok(())
    }

    fn value(&self) -> Value {
        self.value
    }

    /// Parameters are immutable after construction; this writes the stored
    /// value directly, and the write survives only until the next update.
    fn set_value(&mut self, target: f64) {
        self.value = Value::Float(target);
    }
}
