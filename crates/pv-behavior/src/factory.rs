//! Kind-tag → constructor registry.
//!
//! Channel tables name behaviors by tag ("setpoint", "copy", "sinewave");
//! the factory maps each tag to a constructor so hosts build behaviors
//! without branching on concrete types.  Hosts register their own variants
//! alongside (or over) the built-ins.

use std::collections::HashMap;

use crate::{
    Behavior, BehaviorError, BehaviorResult, CopyBehavior, Params, SetpointBehavior,
    SinewaveBehavior,
};

/// A behavior constructor: positional parameters in, boxed behavior out.
///
/// Constructors validate their parameters and fail fast — a behavior that
/// reaches the host is fully valid.
pub type Constructor = fn(&Params) -> BehaviorResult<Box<dyn Behavior>>;

/// Registry of behavior constructors keyed by kind tag.
///
/// # Example
///
/// ```rust
/// use pv_behavior::{params, BehaviorFactory};
///
/// let factory = BehaviorFactory::with_defaults();
/// let behavior = factory.construct("setpoint", &params![21.5, 0.5]).unwrap();
/// assert_eq!(behavior.kind(), "setpoint");
/// ```
pub struct BehaviorFactory {
    constructors: HashMap<String, Constructor>,
}

impl BehaviorFactory {
    /// An empty registry with no constructors.
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// A registry with the three built-in variants registered.
    pub fn with_defaults() -> Self {
        let mut factory = Self::new();
        factory.register(SetpointBehavior::KIND, |p| {
            Ok(Box::new(SetpointBehavior::from_params(p)?))
        });
        factory.register(CopyBehavior::KIND, |p| {
            Ok(Box::new(CopyBehavior::from_params(p)?))
        });
        factory.register(SinewaveBehavior::KIND, |p| {
            Ok(Box::new(SinewaveBehavior::from_params(p)?))
        });
        factory
    }

    /// Register `ctor` under `kind`.  Later registrations win, so hosts can
    /// override a built-in.
    pub fn register(&mut self, kind: &str, ctor: Constructor) {
        self.constructors.insert(kind.to_owned(), ctor);
    }

    /// `true` if a constructor is registered under `kind`.
    pub fn knows(&self, kind: &str) -> bool {
        self.constructors.contains_key(kind)
    }

    /// Construct a behavior of the given kind from `params`.
    pub fn construct(&self, kind: &str, params: &Params) -> BehaviorResult<Box<dyn Behavior>> {
        match self.constructors.get(kind) {
            Some(ctor) => ctor(params),
            None => Err(BehaviorError::UnknownKind(kind.to_owned())),
        }
    }
}

impl Default for BehaviorFactory {
    fn default() -> Self {
        Self::with_defaults()
    }
}
