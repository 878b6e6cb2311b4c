//! The `Behavior` trait — the main extension point for user code.

use pv_core::{ChannelRng, Value};

use crate::{BehaviorResult, UpdateContext};

/// Pluggable value generation for one channel.
///
/// A channel owns exactly one `Behavior` and drives it on the host's own
/// schedule; the host never branches on the concrete variant — it only calls
/// the operations below (plus construction, usually through
/// [`BehaviorFactory`][crate::BehaviorFactory]).
///
/// # Contract
///
/// - [`update_value`][Self::update_value] recomputes and stores the value.
///   Calling it twice in immediate succession is legal and simply recomputes
///   (possibly yielding a different result when the source is random or
///   time-based).
/// - [`value`][Self::value] reads the stored value.  It must not recompute,
///   resolve, or fail.
/// - [`set_value`][Self::set_value] interprets its argument as an adjustment
///   to the behavior's *target parameter*, not a write of the output
///   reading: a set followed by a read, with no update between, observes
///   the old reading.  It never fails.
///
/// # Example
///
/// ```rust
/// use pv_behavior::{Behavior, BehaviorResult, UpdateContext};
/// use pv_core::{ChannelRng, Value};
///
/// /// Counts its own updates.
/// struct UpdateCounter(u64);
///
/// impl Behavior for UpdateCounter {
///     fn kind(&self) -> &'static str {
///         "counter"
///     }
///
///     fn update_value(
///         &mut self,
///         _ctx: &UpdateContext<'_>,
///         _rng: &mut ChannelRng,
///     ) -> BehaviorResult<()> {
///         self.0 += 1;
///         Ok(())
///     }
///
///     fn value(&self) -> Value {
///         Value::Float(self.0 as f64)
///     }
///
///     fn set_value(&mut self, target: f64) {
///         self.0 = target as u64;
///     }
/// }
/// ```
pub trait Behavior: Send + 'static {
    /// Stable tag identifying the variant ("setpoint", "copy", …), used for
    /// diagnostics and channel tables.
    fn kind(&self) -> &'static str;

    /// Recompute and store the current value from the behavior's parameters,
    /// the clock, or a referenced channel.
    ///
    /// The only built-in failure is an unresolved channel reference, which
    /// is retryable — see [`BehaviorError::is_retryable`][crate::BehaviorError::is_retryable].
    fn update_value(
        &mut self,
        ctx: &UpdateContext<'_>,
        rng: &mut ChannelRng,
    ) -> BehaviorResult<()>;

    /// The last computed value.  Read-only.
    fn value(&self) -> Value;

    /// Adjust the behavior's target parameter.
    ///
    /// Variant-specific; variants without a meaningful target fall back to
    /// writing the stored value directly, which the next update overwrites.
    fn set_value(&mut self, target: f64);
}
