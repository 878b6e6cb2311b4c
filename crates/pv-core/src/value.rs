//! A channel's published reading.
//!
//! Channels carry either an analog reading (`Float`) or a digital one
//! (`Bool`).  Behaviors store the reading they computed most recently; the
//! stored value only changes when the behavior's update runs (or its target
//! write falls through to the stored value — see the behavior docs).

use std::fmt;

/// The last computed output of a channel's behavior.
///
/// Defaults to `Float(0.0)` — a freshly constructed behavior reads as zero
/// until its first update.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// An analog reading.
    Float(f64),
    /// A digital reading.
    Bool(bool),
}

impl Value {
    /// Numeric view of the reading.  `Bool` maps to `1.0` / `0.0`.
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Value::Float(v) => v,
            Value::Bool(true) => 1.0,
            Value::Bool(false) => 0.0,
        }
    }

    /// Digital view of the reading.  `Float` is `true` when nonzero.
    #[inline]
    pub fn as_bool(self) -> bool {
        match self {
            Value::Float(v) => v != 0.0,
            Value::Bool(b) => b,
        }
    }
}

impl Default for Value {
    #[inline]
    fn default() -> Self {
        Value::Float(0.0)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Float(v) => write!(f, "{v}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}
