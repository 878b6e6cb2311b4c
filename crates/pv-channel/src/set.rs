//! Channel storage: SoA rows, the update sweep, and host passthroughs.
//!
//! # Why published value rows?
//!
//! An updating behavior may read other channels (that is the whole point of
//! a mirror), but the sweep holds that behavior mutably.  Instead of handing
//! behaviors a re-entrant borrow of the set, every behavior's stored value
//! is *published* into a plain `values` row after each operation that can
//! change it; lookups during an update read the rows:
//!
//! ```ignore
//! // sweep (simplified):
//! let view = SetView { index: &self.index, values: &self.values };
//! let ctx  = UpdateContext::new(self.clock.as_ref(), &view);
//! let result = self.behaviors[i].update_value(&ctx, &mut self.rngs[i]);
//! self.values[i] = self.behaviors[i].value();   // republish
//! ```
//!
//! The borrows are disjoint fields, so the sweep needs no interior
//! mutability, and the rows always equal each behavior's stored value
//! between operations — a mirror reads exactly the remote's last computed
//! value, including a channel's own previous value if it mirrors itself.

use pv_behavior::{
    Behavior, BehaviorError, BehaviorFactory, BehaviorResult, ChannelLookup, Params,
    UpdateContext,
};
use pv_core::{ChannelId, ChannelRng, Clock, Value};

use crate::{ChannelError, ChannelResult};

#[cfg(not(feature = "fx-hash"))]
type NameIndex = std::collections::HashMap<String, ChannelId>;
#[cfg(feature = "fx-hash")]
type NameIndex = rustc_hash::FxHashMap<String, ChannelId>;

// ── SweepReport ───────────────────────────────────────────────────────────────

/// Outcome of one [`ChannelSet::update_all`] sweep.
#[derive(Debug)]
pub struct SweepReport {
    /// Channels whose update succeeded this sweep.
    pub updated: usize,

    /// Channels whose update failed, with the failure.  Failures here are
    /// per-channel and never abort the sweep; retryable ones (unresolved
    /// mirrors) typically clear on a later sweep.
    pub failures: Vec<(ChannelId, BehaviorError)>,
}

impl SweepReport {
    /// `true` if every channel updated.
    pub fn all_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

// ── SetView ───────────────────────────────────────────────────────────────────

/// The lookup surface handed to updating behaviors: name index plus
/// published value rows, nothing else.
struct SetView<'a> {
    index:  &'a NameIndex,
    values: &'a [Value],
}

impl ChannelLookup for SetView<'_> {
    fn find_by_name(&self, name: &str) -> Option<ChannelId> {
        self.index.get(name).copied()
    }

    fn last_value(&self, id: ChannelId) -> Option<Value> {
        self.values.get(id.index()).copied()
    }
}

// ── ChannelSet ────────────────────────────────────────────────────────────────

/// The channel registry: every row is one named channel owning one behavior.
///
/// Rows are stored structure-of-arrays and indexed by [`ChannelId`]; ids are
/// assigned in registration order and never reused (channels live as long as
/// the set).  Create via [`ChannelSetBuilder`][crate::ChannelSetBuilder],
/// then drive updates from the host's own schedule.
pub struct ChannelSet {
    factory:   BehaviorFactory,
    clock:     Box<dyn Clock>,
    root_seed: u64,

    names:     Vec<String>,
    behaviors: Vec<Box<dyn Behavior>>,
    /// Published copy of each behavior's stored value; see the module docs.
    values:    Vec<Value>,
    rngs:      Vec<ChannelRng>,
    index:     NameIndex,
}

impl std::fmt::Debug for ChannelSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelSet")
            .field("root_seed", &self.root_seed)
            .field("names", &self.names)
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}

impl ChannelSet {
    pub(crate) fn new(factory: BehaviorFactory, clock: Box<dyn Clock>, root_seed: u64) -> Self {
        Self {
            factory,
            clock,
            root_seed,
            names:     Vec::new(),
            behaviors: Vec::new(),
            values:    Vec::new(),
            rngs:      Vec::new(),
            index:     NameIndex::default(),
        }
    }

    // ── Registration ──────────────────────────────────────────────────────

    /// Register a new channel.
    ///
    /// The behavior is constructed through the set's factory and validated
    /// immediately — a channel with bad parameters is never added.  The new
    /// channel's RNG stream is derived from the set's root seed and the new
    /// id, so registering channels never perturbs existing streams.
    pub fn add_channel(
        &mut self,
        name:   impl Into<String>,
        kind:   &str,
        params: &Params,
    ) -> ChannelResult<ChannelId> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(ChannelError::DuplicateName(name));
        }

        let behavior = self
            .factory
            .construct(kind, params)
            .map_err(|source| ChannelError::Behavior {
                name: name.clone(),
                source,
            })?;

        let id = ChannelId(self.names.len() as u32);
        self.values.push(behavior.value());
        self.rngs.push(ChannelRng::new(self.root_seed, id));
        self.behaviors.push(behavior);
        self.index.insert(name.clone(), id);
        self.names.push(name);
        Ok(id)
    }

    // ── Updates ───────────────────────────────────────────────────────────

    /// Drive one channel's behavior update and republish its value.
    ///
    /// On failure the row keeps the behavior's previous value and the error
    /// is returned to the caller; retryable failures may clear on a later
    /// update (a mirror's target can be registered after the mirror).
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a row of this set.
    pub fn update_channel(&mut self, id: ChannelId) -> BehaviorResult<()> {
        let i = id.index();
        let view = SetView {
            index:  &self.index,
            values: &self.values,
        };
        let ctx = UpdateContext::new(self.clock.as_ref(), &view);
        let result = self.behaviors[i].update_value(&ctx, &mut self.rngs[i]);
        self.values[i] = self.behaviors[i].value();
        result
    }

    /// Update every channel once, in registration order.
    ///
    /// One channel's failure never blocks the others: failures are logged at
    /// `warn`, collected into the report, and the sweep continues.
    pub fn update_all(&mut self) -> SweepReport {
        let mut failures = Vec::new();
        for i in 0..self.behaviors.len() {
            let id = ChannelId(i as u32);
            if let Err(err) = self.update_channel(id) {
                log::warn!("channel `{}` update failed: {err}", self.names[i]);
                failures.push((id, err));
            }
        }
        SweepReport {
            updated: self.behaviors.len() - failures.len(),
            failures,
        }
    }

    // ── Passthroughs ──────────────────────────────────────────────────────

    /// The channel's last computed value.  Read-only; never recomputes.
    pub fn value(&self, id: ChannelId) -> Value {
        self.behaviors[id.index()].value()
    }

    /// Adjust the channel behavior's target parameter.
    ///
    /// The behavior decides what the target means (a setpoint retargets its
    /// constant; variants without a target write the stored value, which the
    /// next update overwrites).  Never fails.
    pub fn set_value(&mut self, id: ChannelId, target: f64) {
        let i = id.index();
        self.behaviors[i].set_value(target);
        self.values[i] = self.behaviors[i].value();
    }

    /// The channel's name.
    pub fn name(&self, id: ChannelId) -> &str {
        &self.names[id.index()]
    }

    /// The channel behavior's kind tag.
    pub fn kind(&self, id: ChannelId) -> &'static str {
        self.behaviors[id.index()].kind()
    }

    /// Resolve a channel name to its id.
    pub fn id_by_name(&self, name: &str) -> Option<ChannelId> {
        self.index.get(name).copied()
    }

    /// Number of channels.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// `true` if there are no channels.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterator over all `ChannelId`s in registration order.
    pub fn channel_ids(&self) -> impl Iterator<Item = ChannelId> + '_ {
        (0..self.names.len() as u32).map(ChannelId)
    }

    /// The root seed channel RNG streams derive from.  Reported so an
    /// entropy-seeded run can be reproduced.
    pub fn root_seed(&self) -> u64 {
        self.root_seed
    }
}

/// The set itself answers lookups over its published rows, so hosts (and
/// out-of-set behaviors under test) can use it as a registry view directly.
impl ChannelLookup for ChannelSet {
    fn find_by_name(&self, name: &str) -> Option<ChannelId> {
        self.index.get(name).copied()
    }

    fn last_value(&self, id: ChannelId) -> Option<Value> {
        self.values.get(id.index()).copied()
    }
}
