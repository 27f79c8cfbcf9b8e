//! Single-writer store around [`AppState`].
//!
//! Every mutation goes through [`Store::dispatch`]. Subscribers run after the
//! reducer when the state revision moved, in subscription order.

use std::time::Instant;

use crate::action::Action;
use crate::effect::Effect;
use crate::reducer::reduce;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&AppState) + Send>;

pub struct Store {
    state: AppState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&AppState) + Send + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn dispatch(&mut self, action: Action, now: Instant) -> Vec<Effect> {
        let revision = self.state.revision;
        let effects = reduce(&mut self.state, action, now);
        if self.state.revision != revision {
            for (_, listener) in &mut self.listeners {
                listener(&self.state);
            }
        }
        effects
    }

    /// Called once the frame for the current revision has been drawn.
    pub fn clear_dirty(&mut self) {
        self.state.clear_dirty();
    }
}
