//! Positional construction parameters.
//!
//! Behaviors are constructed from an ordered sequence of primitive values
//! (numbers, text, booleans), interpreted positionally per variant.  The
//! accessors here validate count and type up front so a bad channel table
//! fails at construction, not at first update.
//!
//! Text that parses as a number coerces where a number is required
//! (channel tables arrive as strings); nothing else coerces.

use std::fmt;

use crate::{BehaviorError, BehaviorResult};

// ── ParamValue ────────────────────────────────────────────────────────────────

/// One construction parameter.
#[derive(Clone, PartialEq, Debug)]
pub enum ParamValue {
    Number(f64),
    Text(String),
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Number(v) => write!(f, "{v}"),
            ParamValue::Text(s) => write!(f, "{s}"),
            ParamValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Number(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Number(v as f64)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

/// Build a [`Params`] list from mixed literals:
///
/// ```rust
/// use pv_behavior::{params, Params};
///
/// let p: Params = params![21.5, 0.5];
/// assert_eq!(p.len(), 2);
/// ```
#[macro_export]
macro_rules! params {
    () => { $crate::Params::new(vec![]) };
    ($($item:expr),+ $(,)?) => {
        $crate::Params::new(vec![$($crate::ParamValue::from($item)),+])
    };
}

// ── Params ────────────────────────────────────────────────────────────────────

/// An ordered parameter list with validating positional accessors.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Params(Vec<ParamValue>);

impl Params {
    pub fn new(values: Vec<ParamValue>) -> Self {
        Params(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fail unless exactly `expected` parameters were supplied.
    pub fn expect_len(&self, expected: usize) -> BehaviorResult<()> {
        if self.0.len() == expected {
            Ok(())
        } else {
            Err(BehaviorError::ParamCount {
                expected,
                got: self.0.len(),
            })
        }
    }

    /// The number at `index`.  Text that parses as `f64` coerces.
    pub fn number(&self, index: usize, name: &'static str) -> BehaviorResult<f64> {
        match self.0.get(index) {
            None => Err(BehaviorError::MissingParam { name, index }),
            Some(ParamValue::Number(v)) => Ok(*v),
            Some(ParamValue::Text(s)) => {
                s.trim().parse::<f64>().map_err(|_| BehaviorError::NonNumericParam {
                    name,
                    index,
                    found: s.clone(),
                })
            }
            Some(other) => Err(BehaviorError::NonNumericParam {
                name,
                index,
                found: other.to_string(),
            }),
        }
    }

    /// The text at `index`.  No coercion: a channel name is not a number.
    pub fn text(&self, index: usize, name: &'static str) -> BehaviorResult<&str> {
        match self.0.get(index) {
            None => Err(BehaviorError::MissingParam { name, index }),
            Some(ParamValue::Text(s)) => Ok(s),
            Some(other) => Err(BehaviorError::TextParam {
                name,
                index,
                found: other.to_string(),
            }),
        }
    }
}

impl From<Vec<ParamValue>> for Params {
    fn from(values: Vec<ParamValue>) -> Self {
        Params(values)
    }
}
