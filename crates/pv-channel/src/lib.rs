//! `pv-channel` — the channel registry and its update driver.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`set`]     | `ChannelSet` — SoA channel rows, sweep, passthroughs      |
//! | [`builder`] | `ChannelSetBuilder`, `ChannelSpec`                        |
//! | [`loader`]  | CSV channel-table loading                                 |
//! | [`error`]   | `ChannelError`, `ChannelResult<T>`                        |
//!
//! # Design notes
//!
//! A channel is a named row in a [`ChannelSet`]: one boxed
//! [`Behavior`][pv_behavior::Behavior], one published value, one RNG stream.
//! The set decides nothing about *when* updates run — the host drives
//! [`update_channel`][set::ChannelSet::update_channel] (or the whole-table
//! [`update_all`][set::ChannelSet::update_all] sweep) on its own schedule.
//!
//! During an update, cross-channel reads go through the set's published
//! value rows, which are republished after every operation that can change a
//! behavior's stored value.  A mirror therefore observes exactly the remote
//! channel's last computed value: same-sweep for a source that updated
//! earlier in insertion order, previous-sweep for one that updates later.
//!
//! A failing update never blocks the rest of a sweep: the failure is logged
//! at `warn`, collected into the [`SweepReport`][set::SweepReport], and the
//! sweep moves on.

pub mod builder;
pub mod error;
pub mod loader;
pub mod set;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::{ChannelSetBuilder, ChannelSpec};
pub use error::{ChannelError, ChannelResult};
pub use loader::{load_channels_csv, load_channels_reader};
pub use set::{ChannelSet, SweepReport};
