//! `pv-behavior` — the channel behavior trait and its built-in variants.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`model`]    | The [`Behavior`] trait                                        |
//! | [`context`]  | [`UpdateContext`] — capabilities passed to every update       |
//! | [`lookup`]   | [`ChannelLookup`] — narrow name-resolution capability         |
//! | [`params`]   | [`Params`] / [`ParamValue`] — positional construction params  |
//! | [`setpoint`] | [`SetpointBehavior`] — constant target with uniform jitter    |
//! | [`copy`]     | [`CopyBehavior`] — mirrors another channel's last value       |
//! | [`sinewave`] | [`SinewaveBehavior`] — periodic function of wall-clock time   |
//! | [`factory`]  | [`BehaviorFactory`] — kind tag → constructor registry         |
//! | [`error`]    | [`BehaviorError`], [`BehaviorResult`]                         |
//!
//! # Design notes
//!
//! The update/read split is the load-bearing contract here:
//!
//! 1. **`update_value`** recomputes and stores the value from current inputs
//!    (parameters, the clock, or another channel).  It is the only operation
//!    that may fail, and only for unresolved channel references.
//!
//! 2. **`value`** reads the stored value.  It never recomputes, never
//!    resolves, never fails — callers that skip the update simply read a
//!    stale value.
//!
//! 3. **`set_value`** adjusts the behavior's *target parameter*, not the
//!    stored output, so a set followed by a read (with no update between)
//!    observes the old reading.  The name models a setpoint-style control
//!    input, not a write of the output.
//!
//! Behaviors never own their channel or its registry: everything they may
//! touch during an update arrives borrowed through [`UpdateContext`].

pub mod context;
pub mod copy;
pub mod error;
pub mod factory;
pub mod lookup;
pub mod model;
pub mod params;
pub mod setpoint;
pub mod sinewave;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use context::UpdateContext;
pub use copy::CopyBehavior;
pub use error::{BehaviorError, BehaviorResult};
pub use factory::BehaviorFactory;
pub use lookup::ChannelLookup;
pub use model::Behavior;
pub use params::{ParamValue, Params};
pub use setpoint::SetpointBehavior;
pub use sinewave::SinewaveBehavior;
