//! In-process game counters.
//! Nothing is exported yet; the counters feed log lines and tests.
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, OnceLock, PoisonError};

static SUBMISSIONS_ACCEPTED: AtomicU64 = AtomicU64::new(0);
static SUBMISSIONS_REJECTED: AtomicU64 = AtomicU64::new(0);
static WORDS_COMPLETED: AtomicU64 = AtomicU64::new(0);

static GAME_COUNTERS: OnceLock<Mutex<HashMap<String, GameCounter>>> = OnceLock::new();

pub fn inc_submission_accepted() {
    SUBMISSIONS_ACCEPTED.fetch_add(1, Ordering::Relaxed);
}

pub fn inc_submission_rejected() {
    SUBMISSIONS_REJECTED.fetch_add(1, Ordering::Relaxed);
}

pub fn inc_word_completed() {
    WORDS_COMPLETED.fetch_add(1, Ordering::Relaxed);
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionCounters {
    pub accepted: u64,
    pub rejected: u64,
    pub words_completed: u64,
}

pub fn submission_snapshot() -> SubmissionCounters {
    SubmissionCounters {
        accepted: SUBMISSIONS_ACCEPTED.load(Ordering::Relaxed),
        rejected: SUBMISSIONS_REJECTED.load(Ordering::Relaxed),
        words_completed: WORDS_COMPLETED.load(Ordering::Relaxed),
    }
}

/// Per-mode start/stop tallies.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GameCounter {
    pub started: u64,
    pub stopped: u64,
    pub currently_active: u64,
    pub concurrent_peak: u64,
}

fn game_counter_lock() -> &'static Mutex<HashMap<String, GameCounter>> {
    GAME_COUNTERS.get_or_init(|| Mutex::new(HashMap::new()))
}

pub fn record_game_started(mode: &str) -> GameCounter {
    let mut guard = game_counter_lock()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    let counter = guard.entry(mode.to_string()).or_default();
    counter.started = counter.started.saturating_add(1);
    counter.currently_active = counter.currently_active.saturating_add(1);
    if counter.currently_active > counter.concurrent_peak {
        counter.concurrent_peak = counter.currently_active;
    }
    *counter
}

pub fn record_game_stopped(mode: &str) -> GameCounter {
    let mut guard = game_counter_lock()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    let counter = guard.entry(mode.to_string()).or_default();
    counter.stopped = counter.stopped.saturating_add(1);
    counter.currently_active = counter.currently_active.saturating_sub(1);
    *counter
}

pub fn game_counters_snapshot() -> HashMap<String, GameCounter> {
    game_counter_lock()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Counters are process-wide and other tests start games in parallel, so
    // these tests use their own keys or compare deltas.

    #[test]
    fn start_stop_updates_counters() {
        let started = record_game_started("metrics-test-mode");
        assert_eq!(started.started, 1);
        assert_eq!(started.currently_active, 1);
        assert_eq!(started.concurrent_peak, 1);
        assert_eq!(started.stopped, 0);

        record_game_started("metrics-test-mode");
        let stopped = record_game_stopped("metrics-test-mode");
        assert_eq!(stopped.stopped, 1);
        assert_eq!(stopped.currently_active, 1);
        assert_eq!(stopped.concurrent_peak, 2);

        let snapshot = game_counters_snapshot();
        assert_eq!(snapshot.get("metrics-test-mode"), Some(&stopped));
    }

    #[test]
    fn stop_without_start_does_not_underflow() {
        let counter = record_game_stopped("metrics-never-started");
        assert_eq!(counter.currently_active, 0);
        assert_eq!(counter.stopped, 1);
    }

    #[test]
    fn submission_counters_only_grow() {
        let before = submission_snapshot();
        inc_submission_accepted();
        inc_submission_rejected();
        inc_word_completed();
        let after = submission_snapshot();
        assert!(after.accepted > before.accepted);
        assert!(after.rejected > before.rejected);
        assert!(after.words_completed > before.words_completed);
    }
}
