//! The narrow name-resolution capability behaviors consume.

use pv_core::{ChannelId, Value};

/// Resolve channel names and read channels' last computed values.
///
/// This is the only view of the channel registry a behavior ever sees: a
/// behavior can find a channel by name and read its published reading, and
/// nothing else.  The registry (`pv-channel`'s `ChannelSet`) implements it
/// over its published value rows; tests implement it over a plain map.
pub trait ChannelLookup {
    /// Resolve a channel name to its handle.
    ///
    /// Returns `None` when no channel is registered under `name`.  Behaviors
    /// that cache the returned handle must keep it cached even if a later
    /// call for the same name returns `None` — success binds permanently.
    fn find_by_name(&self, name: &str) -> Option<ChannelId>;

    /// The last computed value of the channel `id`.
    ///
    /// This is the reading as of that channel's most recent update — reading
    /// it never recomputes anything, so its freshness depends entirely on
    /// how recently the remote channel's own update ran.
    fn last_value(&self, id: ChannelId) -> Option<Value>;
}
