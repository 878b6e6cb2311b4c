//! Wall-clock capability.
//!
//! # Design
//!
//! Time-driven behaviors evaluate against *absolute* wall-clock time: no time
//! origin is stored per behavior, so two instances constructed at different
//! real times agree whenever they are read at the same real time.  Threading
//! the clock through as a capability (instead of calling the system clock
//! directly) keeps those behaviors testable — production wiring uses
//! [`SystemClock`], tests pin a [`FixedClock`] to an exact instant.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// A source of the current wall-clock time.
pub trait Clock: Send + Sync {
    /// Seconds since the Unix epoch, fractional.
    fn now_seconds(&self) -> f64;
}

// ── SystemClock ───────────────────────────────────────────────────────────────

/// The real system clock.  Default production wiring.
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_seconds(&self) -> f64 {
        // A host clock set before the epoch reads as zero.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0)
    }
}

// ── FixedClock ────────────────────────────────────────────────────────────────

/// A clock pinned to a settable instant.
///
/// Intended for tests and demos that need exact, reproducible readings from
/// time-driven behaviors.  The instant is stored as `f64` bits in an atomic
/// so the clock stays `Sync` and can be repositioned through a shared
/// reference.
pub struct FixedClock(AtomicU64);

impl FixedClock {
    /// Create a clock pinned at `secs` (Unix seconds).
    pub fn new(secs: f64) -> Self {
        FixedClock(AtomicU64::new(secs.to_bits()))
    }

    /// Reposition the clock to `secs`.
    pub fn set(&self, secs: f64) {
        self.0.store(secs.to_bits(), Ordering::Relaxed);
    }

    /// Move the clock forward by `secs`.
    pub fn advance(&self, secs: f64) {
        self.set(self.now_seconds() + secs);
    }
}

impl Clock for FixedClock {
    fn now_seconds(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Relaxed))
    }
}
