//! When the main loop has to redraw without new input.
//!
//! Two things change on screen by themselves: spinner frames while a CouchDB
//! request is in flight, and status messages reaching their expiry.

use std::time::{Duration, Instant};

use crate::database_list::LoadStatus;
use crate::state::AppState;

/// Spinner frame length, kept in step with the UI spinner atom.
pub const SPINNER_FRAME: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wakeup {
    SpinnerFrame(Instant),
    MessageExpiry(Instant),
}

impl Wakeup {
    pub const fn at(self) -> Instant {
        match self {
            Self::SpinnerFrame(at) | Self::MessageExpiry(at) => at,
        }
    }
}

/// The earliest pending wake-up, or `None` when the loop can wait for input.
pub fn next_wakeup(state: &AppState, now: Instant) -> Option<Wakeup> {
    let spinner = is_request_in_flight(state).then(|| Wakeup::SpinnerFrame(now + SPINNER_FRAME));
    let expiry = state.messages.expires_at().map(Wakeup::MessageExpiry);

    spinner.into_iter().chain(expiry).min_by_key(|w| w.at())
}

pub fn next_animation_deadline(state: &AppState, now: Instant) -> Option<Instant> {
    next_wakeup(state, now).map(Wakeup::at)
}

pub fn is_request_in_flight(state: &AppState) -> bool {
    state.databases.status == LoadStatus::Loading
        || state.activity.status == LoadStatus::Loading
        || state.filters_loading()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_mode::InputMode;

    mod next_wakeup {
        use super::*;

        #[test]
        fn idle_state_sleeps() {
            let state = AppState::default();

            assert_eq!(next_wakeup(&state, Instant::now()), None);
        }

        #[test]
        fn editing_alone_does_not_wake() {
            let mut state = AppState::default();
            state.input_mode = InputMode::Editing;

            assert_eq!(next_wakeup(&state, Instant::now()), None);
        }

        #[test]
        fn database_listing_ticks_spinner() {
            let mut state = AppState::default();
            state.databases.status = LoadStatus::Loading;
            let now = Instant::now();

            assert_eq!(
                next_wakeup(&state, now),
                Some(Wakeup::SpinnerFrame(now + SPINNER_FRAME))
            );
        }

        #[test]
        fn pending_filter_discovery_is_in_flight() {
            let mut state = AppState::default();
            state.advanced.job.source.database = "orders".to_string();
            state.filter_catalog.mark_pending("orders");

            assert!(is_request_in_flight(&state));
        }

        #[test]
        fn message_expiry_wakes_at_expiration() {
            let mut state = AppState::default();
            let now = Instant::now();
            state.messages.set_success_at("Saved".to_string(), now);
            let expires_at = now + Duration::from_secs(4);

            assert_eq!(
                next_wakeup(&state, now),
                Some(Wakeup::MessageExpiry(expires_at))
            );
        }

        #[test]
        fn earlier_wakeup_wins() {
            let mut state = AppState::default();
            let shown = Instant::now();
            state.activity.status = LoadStatus::Loading;
            state.messages.set_success_at("Saved".to_string(), shown);
            let now = shown + Duration::from_millis(3900);

            assert_eq!(
                next_animation_deadline(&state, now),
                Some(now + Duration::from_millis(100))
            );
        }
    }
}
