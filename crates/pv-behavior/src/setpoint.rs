//! Setpoint behavior — a constant target with uniform random jitter.

use pv_core::{ChannelRng, Value};

use crate::{Behavior, BehaviorError, BehaviorResult, Params, UpdateContext};

/// Produces `constant ± range`, uniformly at random, on every update.
///
/// `set_value` reassigns `constant` (the target) and leaves both `range`
/// and the stored output untouched: the new target only shows up in the
/// reading after the next update.
pub struct SetpointBehavior {
    constant: f64,
    range:    f64,
    value:    Value,
}

impl SetpointBehavior {
    pub const KIND: &'static str = "setpoint";

    /// Create a setpoint around `constant` with jitter half-width `range`.
    pub fn new(constant: f64, range: f64) -> BehaviorResult<Self> {
        if range < 0.0 {
            return Err(BehaviorError::NegativeRange(range));
        }
        Ok(Self {
            constant,
            range,
            value: Value::default(),
        })
    }

    /// Construct from positional parameters `[constant, range]`.
    pub fn from_params(params: &Params) -> BehaviorResult<Self> {
        params.expect_len(2)?;
        let constant = params.number(0, "constant")?;
        let range = params.number(1, "range")?;
        Self::new(constant, range)
    }

    /// Current target.
    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// Jitter half-width, fixed at construction.
    pub fn range(&self) -> f64 {
        self.range
    }
}

impl Behavior for SetpointBehavior {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn update_value(
        &mut self,
        _ctx: &UpdateContext<'_>,
        rng:  &mut ChannelRng,
    ) -> BehaviorResult<()> {
        // Inclusive bounds keep range == 0 valid (a jitter-free constant).
        let jitter = rng.gen_range(-self.range..=self.range);
        self.value = Value::Float(self.constant + jitter);
        Ok(())
    }

    fn value(&self) -> Value {
        self.value
    }

    fn set_value(&mut self, target: f64) {
        self.constant = target;
    }
}
