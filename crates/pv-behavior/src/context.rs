//! Capabilities passed to every behavior update.

use pv_core::Clock;

use crate::ChannelLookup;

/// Borrowed capabilities a behavior may use while recomputing its value.
///
/// A behavior holds no reference back to its owning channel or the registry;
/// everything it may touch during an update arrives here, borrowed for the
/// duration of that one call.  The registry view is the narrow
/// [`ChannelLookup`] capability, never the registry itself, so a behavior
/// cannot outlive, mutate, or take ownership of any channel.
pub struct UpdateContext<'a> {
    /// Wall-clock source for time-driven behaviors.
    pub clock: &'a dyn Clock,

    /// Name-resolution capability for behaviors that reference other
    /// channels.
    pub channels: &'a dyn ChannelLookup,
}

impl<'a> UpdateContext<'a> {
    /// Bundle the capabilities for one update call.
    #[inline]
    pub fn new(clock: &'a dyn Clock, channels: &'a dyn ChannelLookup) -> Self {
        Self { clock, channels }
    }
}
