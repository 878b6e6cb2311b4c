//! Copy behavior — mirrors another channel's last computed value.
//!
//! # Resolution protocol
//!
//! The referenced channel is named at construction but looked up lazily, on
//! the first update — the target may not exist yet when this behavior is
//! built.  The lookup result is cached asymmetrically:
//!
//! - **Failure is not cached.**  A not-found lookup returns
//!   [`BehaviorError::ChannelNotFound`] and leaves the reference unresolved,
//!   so every subsequent update retries until the target appears.
//! - **Success is cached permanently.**  Once bound, the handle is stable
//!   for the behavior's lifetime and the name is never looked up again —
//!   a registry that later stops answering for that name cannot break an
//!   already-bound instance.

use pv_core::{ChannelId, ChannelRng, Value};

use crate::{Behavior, BehaviorError, BehaviorResult, Params, UpdateContext};

/// Mirrors the last computed value of the channel named at construction.
///
/// The mirrored reading is the remote behavior's *stored* value, not a
/// freshly recomputed one: how fresh it is depends entirely on how recently
/// the remote channel's own update ran.
pub struct CopyBehavior {
    source_name: String,
    resolved:    Option<ChannelId>,
    value:       Value,
}

impl CopyBehavior {
    pub const KIND: &'static str = "copy";

    /// Create a mirror of the channel named `source_name`.
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            resolved:    None,
            value:       Value::default(),
        }
    }

    /// Construct from positional parameters `[source_channel_name]`.
    pub fn from_params(params: &Params) -> BehaviorResult<Self> {
        params.expect_len(1)?;
        let name = params.text(0, "source_channel_name")?;
        Ok(Self::new(name))
    }

    /// The referenced channel's name, fixed at construction.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// `true` once the name has been bound to a handle.
    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }
}

impl Behavior for CopyBehavior {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn update_value(
        &mut self,
        ctx:  &UpdateContext<'_>,
        _rng: &mut ChannelRng,
    ) -> BehaviorResult<()> {
        let id = match self.resolved {
            Some(id) => id,
            None => {
                let id = ctx.channels.find_by_name(&self.source_name).ok_or_else(|| {
                    BehaviorError::ChannelNotFound {
                        name: self.source_name.clone(),
                    }
                })?;
                self.resolved = Some(id);
                id
            }
        };

        // A bound handle stays bound even if this read fails: only the
        // lookup above retries, never the binding.
        match ctx.channels.last_value(id) {
            Some(v) => {
                self.value = v;
                Ok(())
            }
            None => Err(BehaviorError::ChannelNotFound {
                name: self.source_name.clone(),
            }),
        }
    }

    fn value(&self) -> Value {
        self.value
    }

    /// A mirror has no meaningful target; this writes the stored value
    /// directly, and the write survives only until the next update brings
    /// the remote reading back.
    fn set_value(&mut self, target: f64) {
        self.value = Value::Float(target);
    }
}
