//! Pure functions for calculating wake-up deadlines.
//!
//! These functions are I/O-free and deterministic, suitable for use in the app layer.
//! The event loop sleeps until the returned deadline when no input arrives.

use std::time::{Duration, Instant};

use crate::state::AppState;

/// Interval for spinner animation updates
const SPINNER_INTERVAL: Duration = Duration::from_millis(150);

/// Calculates the next deadline the event loop must wake up for.
///
/// Returns `None` when nothing is pending (caller can wait indefinitely for input).
///
/// # Sources
/// 1. Spinner: any listing, detail panel, query or statistics in flight
/// 2. Toast expiry
/// 3. Debounce timers
pub fn next_deadline(state: &AppState, now: Instant) -> Option<Instant> {
    let mut earliest: Option<Instant> = None;

    if has_active_spinner(state) {
        earliest = min_instant(earliest, Some(now + SPINNER_INTERVAL));
    }

    earliest = min_instant(earliest, state.toasts.next_expiry());
    earliest = min_instant(earliest, state.debouncer.next_deadline());

    earliest
}

fn has_active_spinner(state: &AppState) -> bool {
    state.connection.is_checking()
        || state.refreshing
        || state.catalog.namespaces_status.is_loading()
        || state.catalog.tables_status.is_loading()
        || state.detail.info.is_loading()
        || state.detail.preview.is_loading()
        || state.detail.query.running
        || state.detail.statistics.loading
}

fn min_instant(a: Option<Instant>, b: Option<Instant>) -> Option<Instant> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(a), None) => Some(a),
        (None, b) => b,
    }
}
