//! Wall-clock guard for in-flight searches.
//!
//! The harness hands every `choose_move` call a `DeadlineClock`; the search
//! side adds its safety margin and checks the clock once per recursion
//! entry, unwinding the whole search with `SearchInterrupt::TimeExpired`
//! when the budget is nearly gone.

use std::fmt;
use std::time::{Duration, Instant};

/// Safety margin applied by search agents before the hard deadline, in
/// milliseconds. Covers the worst-case overshoot of one ply of enumeration
/// between clock checks.
pub const DEFAULT_TIMER_MARGIN_MS: u64 = 10;

/// Cancellation signal threaded through every search frame.
///
/// Expected control flow, not a bug: the driver and agents absorb it and
/// fall back to the best previously completed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchInterrupt {
    TimeExpired,
}

impl fmt::Display for SearchInterrupt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchInterrupt::TimeExpired => write!(f, "search deadline expired"),
        }
    }
}

impl std::error::Error for SearchInterrupt {}

pub type SearchStep<T> = Result<T, SearchInterrupt>;

/// Read-only handle on the remaining per-move budget.
///
/// The search never mutates the clock; `guarded` returns a copy with a
/// different margin so the harness keeps the raw deadline while the agent
/// trips early.
#[derive(Debug, Clone, Copy)]
pub struct DeadlineClock {
    deadline: Instant,
    margin: Duration,
}

impl DeadlineClock {
    /// Clock expiring `budget` from now, with no safety margin.
    pub fn start(budget: Duration) -> Self {
        Self {
            deadline: Instant::now() + budget,
            margin: Duration::ZERO,
        }
    }

    /// Same deadline, different margin.
    #[inline]
    pub fn guarded(self, margin: Duration) -> Self {
        Self { margin, ..self }
    }

    /// Time left before the hard deadline, saturating at zero.
    #[inline]
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    /// True once the remaining time is inside the margin.
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.remaining() <= self.margin
    }

    /// Per-node guard: `Err(TimeExpired)` once the budget is nearly gone.
    #[inline]
    pub fn check(&self) -> SearchStep<()> {
        if self.is_expired() {
            Err(SearchInterrupt::TimeExpired)
        } else {
            Ok(())
        }
    }
}
