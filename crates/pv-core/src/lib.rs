//! `pv-core` — foundational types for the `rust_pv` channel engine.
//!
//! This crate is a dependency of every other `pv-*` crate.  It intentionally
//! has no `pv-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                          |
//! |-----------|---------------------------------------------------|
//! | [`ids`]   | `ChannelId`                                       |
//! | [`value`] | `Value` — a channel's published reading           |
//! | [`clock`] | `Clock` capability, `SystemClock`, `FixedClock`   |
//! | [`rng`]   | `ChannelRng` (per-channel deterministic RNG)      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod clock;
pub mod ids;
pub mod rng;
pub mod value;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use clock::{Clock, FixedClock, SystemClock};
pub use ids::ChannelId;
pub use rng::ChannelRng;
pub use value::Value;
