//! Unit tests for pv-behavior.

use std::collections::HashMap;

use pv_core::{ChannelId, ChannelRng, FixedClock, Value};

use crate::{
    params, Behavior, BehaviorError, BehaviorFactory, ChannelLookup, CopyBehavior,
    SetpointBehavior, SinewaveBehavior, UpdateContext,
};

// ── Fakes and helpers ─────────────────────────────────────────────────────────

/// In-memory channel registry: a name index plus published readings.
#[derive(Default)]
struct TableLookup {
    names:  HashMap<String, ChannelId>,
    values: HashMap<ChannelId, Value>,
}

impl TableLookup {
    /// Register a channel under `name` with a published reading.
    fn insert(&mut self, name: &str, id: ChannelId, value: Value) {
        self.names.insert(name.to_owned(), id);
        self.values.insert(id, value);
    }

    /// Change a channel's published reading without touching the name index.
    fn publish(&mut self, id: ChannelId, value: Value) {
        self.values.insert(id, value);
    }

    /// Drop the name mapping but keep the channel readable by id.
    fn forget_name(&mut self, name: &str) {
        self.names.remove(name);
    }
}

impl ChannelLookup for TableLookup {
    fn find_by_name(&self, name: &str) -> Option<ChannelId> {
        self.names.get(name).copied()
    }

    fn last_value(&self, id: ChannelId) -> Option<Value> {
        self.values.get(&id).copied()
    }
}

fn make_rng() -> ChannelRng {
    ChannelRng::new(0, ChannelId(0))
}

// ── Params ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod params_tests {
    use super::*;
    use crate::{ParamValue, Params};

    #[test]
    fn number_accessor() {
        let p = params![1.5, "x"];
        assert_eq!(p.number(0, "a").unwrap(), 1.5);
    }

    #[test]
    fn text_coerces_to_number() {
        let p = params!["21.5"];
        assert_eq!(p.number(0, "a").unwrap(), 21.5);
    }

    #[test]
    fn non_numeric_text_is_rejected() {
        let p = params!["warm"];
        assert!(matches!(
            p.number(0, "a"),
            Err(BehaviorError::NonNumericParam { index: 0, .. })
        ));
    }

    #[test]
    fn bool_is_not_a_number() {
        let p = params![true];
        assert!(matches!(
            p.number(0, "a"),
            Err(BehaviorError::NonNumericParam { .. })
        ));
    }

    #[test]
    fn missing_param() {
        let p = params![1.0];
        assert!(matches!(
            p.number(1, "b"),
            Err(BehaviorError::MissingParam { name: "b", index: 1 })
        ));
    }

    #[test]
    fn text_accessor_does_not_coerce_numbers() {
        let p = params![3.0];
        assert!(matches!(p.text(0, "name"), Err(BehaviorError::TextParam { .. })));
    }

    #[test]
    fn expect_len() {
        let p = params![1.0, 2.0];
        assert!(p.expect_len(2).is_ok());
        assert!(matches!(
            p.expect_len(3),
            Err(BehaviorError::ParamCount { expected: 3, got: 2 })
        ));
    }

    #[test]
    fn params_macro_builds_mixed_values() {
        let p = params![1.0, "temperature", true];
        assert_eq!(p.len(), 3);
        assert_eq!(p.text(1, "n").unwrap(), "temperature");
    }

    #[test]
    fn param_value_from_impls() {
        assert_eq!(ParamValue::from(2), ParamValue::Number(2.0));
        assert_eq!(ParamValue::from("x"), ParamValue::Text("x".into()));
        assert_eq!(ParamValue::from(false), ParamValue::Bool(false));
        assert!(Params::default().is_empty());
    }
}

// ── Setpoint ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod setpoint_tests {
    use super::*;

    fn ctx<'a>(clock: &'a FixedClock, lookup: &'a TableLookup) -> UpdateContext<'a> {
        UpdateContext::new(clock, lookup)
    }

    #[test]
    fn values_stay_within_jitter_bounds() {
        let clock = FixedClock::new(0.0);
        let lookup = TableLookup::default();
        let mut rng = make_rng();
        let mut sp = SetpointBehavior::new(10.0, 2.0).unwrap();

        for _ in 0..500 {
            sp.update_value(&ctx(&clock, &lookup), &mut rng).unwrap();
            let v = sp.value().as_f64();
            assert!((8.0..=12.0).contains(&v), "out of bounds: {v}");
        }
    }

    #[test]
    fn zero_range_is_a_jitter_free_constant() {
        let clock = FixedClock::new(0.0);
        let lookup = TableLookup::default();
        let mut rng = make_rng();
        let mut sp = SetpointBehavior::new(5.0, 0.0).unwrap();

        sp.update_value(&ctx(&clock, &lookup), &mut rng).unwrap();
        assert_eq!(sp.value(), Value::Float(5.0));
    }

    #[test]
    fn set_value_retargets_without_touching_the_reading() {
        let clock = FixedClock::new(0.0);
        let lookup = TableLookup::default();
        let mut rng = make_rng();
        let mut sp = SetpointBehavior::new(10.0, 1.0).unwrap();

        sp.update_value(&ctx(&clock, &lookup), &mut rng).unwrap();
        let before = sp.value();

        sp.set_value(100.0);
        // The reading stays stale until the next update.
        assert_eq!(sp.value(), before);
        assert_eq!(sp.constant(), 100.0);
        assert_eq!(sp.range(), 1.0);

        sp.update_value(&ctx(&clock, &lookup), &mut rng).unwrap();
        let after = sp.value().as_f64();
        assert!((99.0..=101.0).contains(&after), "got {after}");
    }

    #[test]
    fn reading_is_zero_before_first_update() {
        let sp = SetpointBehavior::new(10.0, 1.0).unwrap();
        assert_eq!(sp.value(), Value::default());
    }

    #[test]
    fn negative_range_fails_at_construction() {
        assert!(matches!(
            SetpointBehavior::new(10.0, -1.0),
            Err(BehaviorError::NegativeRange(_))
        ));
    }

    #[test]
    fn from_params_coerces_text() {
        let sp = SetpointBehavior::from_params(&params!["21.5", "0.5"]).unwrap();
        assert_eq!(sp.constant(), 21.5);
        assert_eq!(sp.range(), 0.5);
    }

    #[test]
    fn from_params_validates_count() {
        assert!(matches!(
            SetpointBehavior::from_params(&params![21.5]),
            Err(BehaviorError::ParamCount { expected: 2, got: 1 })
        ));
    }
}

// ── Copy ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod copy_tests {
    use super::*;

    const SRC: ChannelId = ChannelId(3);

    #[test]
    fn unresolved_lookup_fails_and_stays_unresolved() {
        let clock = FixedClock::new(0.0);
        let lookup = TableLookup::default();
        let mut rng = make_rng();
        let mut copy = CopyBehavior::new("boiler_temp");

        let err = copy
            .update_value(&UpdateContext::new(&clock, &lookup), &mut rng)
            .unwrap_err();
        assert!(matches!(err, BehaviorError::ChannelNotFound { ref name } if name == "boiler_temp"));
        assert!(err.is_retryable());
        assert!(!copy.is_resolved());
        assert_eq!(copy.value(), Value::default());
    }

    #[test]
    fn retries_until_the_target_appears() {
        let clock = FixedClock::new(0.0);
        let mut lookup = TableLookup::default();
        let mut rng = make_rng();
        let mut copy = CopyBehavior::new("boiler_temp");

        assert!(copy
            .update_value(&UpdateContext::new(&clock, &lookup), &mut rng)
            .is_err());

        // The target channel gets registered later; the next update binds.
        lookup.insert("boiler_temp", SRC, Value::Float(42.0));
        copy.update_value(&UpdateContext::new(&clock, &lookup), &mut rng)
            .unwrap();
        assert!(copy.is_resolved());
        assert_eq!(copy.value(), Value::Float(42.0));
    }

    #[test]
    fn mirrors_only_on_its_own_update() {
        let clock = FixedClock::new(0.0);
        let mut lookup = TableLookup::default();
        let mut rng = make_rng();
        let mut copy = CopyBehavior::new("src");

        lookup.insert("src", SRC, Value::Float(42.0));
        copy.update_value(&UpdateContext::new(&clock, &lookup), &mut rng)
            .unwrap();
        assert_eq!(copy.value(), Value::Float(42.0));

        // Remote moves twice; the mirror holds its last-read value until it
        // updates again.
        lookup.publish(SRC, Value::Float(43.0));
        lookup.publish(SRC, Value::Float(44.0));
        assert_eq!(copy.value(), Value::Float(42.0));

        copy.update_value(&UpdateContext::new(&clock, &lookup), &mut rng)
            .unwrap();
        assert_eq!(copy.value(), Value::Float(44.0));
    }

    #[test]
    fn bound_handle_survives_registry_forgetting_the_name() {
        let clock = FixedClock::new(0.0);
        let mut lookup = TableLookup::default();
        let mut rng = make_rng();
        let mut copy = CopyBehavior::new("src");

        lookup.insert("src", SRC, Value::Float(1.0));
        copy.update_value(&UpdateContext::new(&clock, &lookup), &mut rng)
            .unwrap();

        // The registry no longer answers for the name, but the binding is
        // permanent: updates keep reading through the cached handle.
        lookup.forget_name("src");
        lookup.publish(SRC, Value::Float(2.0));
        copy.update_value(&UpdateContext::new(&clock, &lookup), &mut rng)
            .unwrap();
        assert_eq!(copy.value(), Value::Float(2.0));
    }

    #[test]
    fn mirrors_digital_readings() {
        let clock = FixedClock::new(0.0);
        let mut lookup = TableLookup::default();
        let mut rng = make_rng();
        let mut copy = CopyBehavior::new("pump_on");

        lookup.insert("pump_on", SRC, Value::Bool(true));
        copy.update_value(&UpdateContext::new(&clock, &lookup), &mut rng)
            .unwrap();
        assert_eq!(copy.value(), Value::Bool(true));
    }

    #[test]
    fn set_value_writes_through_until_the_next_update() {
        let clock = FixedClock::new(0.0);
        let mut lookup = TableLookup::default();
        let mut rng = make_rng();
        let mut copy = CopyBehavior::new("src");
        lookup.insert("src", SRC, Value::Float(42.0));

        copy.set_value(7.0);
        assert_eq!(copy.value(), Value::Float(7.0));

        // The direct write is overwritten by the mirrored reading.
        copy.update_value(&UpdateContext::new(&clock, &lookup), &mut rng)
            .unwrap();
        assert_eq!(copy.value(), Value::Float(42.0));
    }

    #[test]
    fn from_params_requires_a_name() {
        assert!(matches!(
            CopyBehavior::from_params(&params![]),
            Err(BehaviorError::ParamCount { expected: 1, got: 0 })
        ));
        assert!(matches!(
            CopyBehavior::from_params(&params![3.0]),
            Err(BehaviorError::TextParam { .. })
        ));
        let copy = CopyBehavior::from_params(&params!["src"]).unwrap();
        assert_eq!(copy.source_name(), "src");
    }
}

// ── Sinewave ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sinewave_tests {
    use super::*;

    /// (constant, amp, freq, phase, t) tuples covering negative amplitude
    /// and nonzero phase.
    const CASES: [(f64, f64, f64, f64, f64); 4] = [
        (0.0, 1.0, 1.0, 0.0, 0.0),
        (2.0, -3.0, 0.5, 1.2, 10.0),
        (1.0, 0.5, 0.25, -0.7, 123.456),
        (-4.0, 2.0, 2.0, 3.1, 0.5),
    ];

    #[test]
    fn deterministic_at_a_fixed_instant() {
        let lookup = TableLookup::default();
        let mut rng = make_rng();

        for (constant, amp, freq, phase, t) in CASES {
            let clock = FixedClock::new(t);
            let mut wave = SinewaveBehavior::new(constant, amp, freq, phase);
            wave.update_value(&UpdateContext::new(&clock, &lookup), &mut rng)
                .unwrap();

            let expected = constant + amp * (t * freq + phase).sin();
            let got = wave.value().as_f64();
            assert!(
                (got - expected).abs() < 1e-12,
                "case ({constant}, {amp}, {freq}, {phase}, {t}): got {got}, expected {expected}"
            );
        }
    }

    #[test]
    fn instances_agree_at_the_same_instant() {
        // No per-instance time origin: construction time is irrelevant.
        let clock = FixedClock::new(777.25);
        let lookup = TableLookup::default();
        let mut rng = make_rng();

        let mut a = SinewaveBehavior::new(1.0, 2.0, 0.5, 0.3);
        a.update_value(&UpdateContext::new(&clock, &lookup), &mut rng)
            .unwrap();
        let mut b = SinewaveBehavior::new(1.0, 2.0, 0.5, 0.3);
        b.update_value(&UpdateContext::new(&clock, &lookup), &mut rng)
            .unwrap();

        assert_eq!(a.value(), b.value());
    }

    #[test]
    fn reading_tracks_the_clock() {
        let clock = FixedClock::new(0.0);
        let lookup = TableLookup::default();
        let mut rng = make_rng();
        let mut wave = SinewaveBehavior::new(0.0, 1.0, 1.0, 0.0);

        wave.update_value(&UpdateContext::new(&clock, &lookup), &mut rng)
            .unwrap();
        assert!((wave.value().as_f64() - 0.0).abs() < 1e-12);

        clock.set(std::f64::consts::FRAC_PI_2);
        wave.update_value(&UpdateContext::new(&clock, &lookup), &mut rng)
            .unwrap();
        assert!((wave.value().as_f64() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn set_value_is_overwritten_by_the_next_update() {
        let clock = FixedClock::new(0.0);
        let lookup = TableLookup::default();
        let mut rng = make_rng();
        let mut wave = SinewaveBehavior::new(0.0, 1.0, 1.0, 0.0);

        wave.set_value(99.0);
        assert_eq!(wave.value(), Value::Float(99.0));
        wave.update_value(&UpdateContext::new(&clock, &lookup), &mut rng)
            .unwrap();
        assert!((wave.value().as_f64()).abs() < 1e-12);
    }

    #[test]
    fn from_params_validates_all_four_numbers() {
        assert!(SinewaveBehavior::from_params(&params![1.0, 2.0, 3.0, 4.0]).is_ok());
        assert!(matches!(
            SinewaveBehavior::from_params(&params![1.0, 2.0, 3.0]),
            Err(BehaviorError::ParamCount { expected: 4, got: 3 })
        ));
        assert!(matches!(
            SinewaveBehavior::from_params(&params![1.0, "fast", 3.0, 4.0]),
            Err(BehaviorError::NonNumericParam { index: 1, .. })
        ));
    }
}

// ── Factory ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod factory_tests {
    use super::*;

    #[test]
    fn constructs_the_builtin_kinds() {
        let factory = BehaviorFactory::with_defaults();
        assert_eq!(
            factory.construct("setpoint", &params![10.0, 1.0]).unwrap().kind(),
            "setpoint"
        );
        assert_eq!(factory.construct("copy", &params!["src"]).unwrap().kind(), "copy");
        assert_eq!(
            factory
                .construct("sinewave", &params![0.0, 1.0, 1.0, 0.0])
                .unwrap()
                .kind(),
            "sinewave"
        );
    }

    #[test]
    fn unknown_kind() {
        let factory = BehaviorFactory::with_defaults();
        assert!(matches!(
            factory.construct("sawtooth", &params![]),
            Err(BehaviorError::UnknownKind(ref k)) if k == "sawtooth"
        ));
        assert!(!factory.knows("sawtooth"));
        assert!(factory.knows("copy"));
    }

    #[test]
    fn configuration_errors_surface_before_any_update() {
        let factory = BehaviorFactory::with_defaults();
        // No behavior instance exists after these — the host cannot hold a
        // partially-valid one.
        assert!(factory.construct("setpoint", &params![10.0]).is_err());
        assert!(factory.construct("setpoint", &params![10.0, "wide"]).is_err());
        assert!(factory.construct("sinewave", &params![]).is_err());
    }

    #[test]
    fn hosts_can_register_and_override() {
        let mut factory = BehaviorFactory::new();
        assert!(matches!(
            factory.construct("setpoint", &params![1.0, 0.0]),
            Err(BehaviorError::UnknownKind(_))
        ));

        factory.register("setpoint", |p| Ok(Box::new(SetpointBehavior::from_params(p)?)));
        assert!(factory.construct("setpoint", &params![1.0, 0.0]).is_ok());

        // Later registration wins.
        factory.register("setpoint", |_| Ok(Box::new(CopyBehavior::new("elsewhere"))));
        assert_eq!(
            factory.construct("setpoint", &params![1.0, 0.0]).unwrap().kind(),
            "copy"
        );
    }
}

// ── Custom behaviors / trait objects ──────────────────────────────────────────

#[cfg(test)]
mod custom_behavior_tests {
    use super::*;
    use crate::BehaviorResult;

    /// A behavior that ramps by a fixed step on every update.
    struct Ramp {
        step:  f64,
        value: Value,
    }

    impl Behavior for Ramp {
        fn kind(&self) -> &'static str {
            "ramp"
        }

        fn update_value(
            &mut self,
            _ctx: &UpdateContext<'_>,
            _rng: &mut ChannelRng,
        ) -> BehaviorResult<()> {
            self.value = Value::Float(self.value.as_f64() + self.step);
            Ok(())
        }

        fn value(&self) -> Value {
            self.value
        }

        fn set_value(&mut self, target: f64) {
            self.step = target;
        }
    }

    #[test]
    fn behaviors_are_usable_as_trait_objects() {
        let clock = FixedClock::new(0.0);
        let lookup = TableLookup::default();
        let mut rng = make_rng();

        let mut behavior: Box<dyn Behavior> = Box::new(Ramp {
            step:  2.0,
            value: Value::default(),
        });
        behavior
            .update_value(&UpdateContext::new(&clock, &lookup), &mut rng)
            .unwrap();
        behavior
            .update_value(&UpdateContext::new(&clock, &lookup), &mut rng)
            .unwrap();
        assert_eq!(behavior.value(), Value::Float(4.0));
        assert_eq!(behavior.kind(), "ramp");
    }

    #[test]
    fn repeated_updates_are_legal() {
        // Idempotent-safe: back-to-back updates simply recompute.
        let clock = FixedClock::new(1.0);
        let lookup = TableLookup::default();
        let mut rng = make_rng();
        let mut wave = SinewaveBehavior::new(0.0, 1.0, 1.0, 0.0);

        wave.update_value(&UpdateContext::new(&clock, &lookup), &mut rng)
            .unwrap();
        let first = wave.value();
        wave.update_value(&UpdateContext::new(&clock, &lookup), &mut rng)
            .unwrap();
        assert_eq!(wave.value(), first);
    }
}
