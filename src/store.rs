//! Thin state holder around a reducer.
//!
//! The store owns the current state value, runs every intent through the
//! reducer and tells subscribers when the state actually changed. It does no
//! locking: dispatch happens on one thread and runs to completion.

use crate::ui::mvi::Reducer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<S> = Box<dyn FnMut(&S) + Send>;

pub struct Store<R: Reducer> {
    state: R::State,
    listeners: Vec<(SubscriptionId, Listener<R::State>)>,
    next_subscription: u64,
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            state: initial,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Run `intent` through the reducer. Returns true when the state changed.
    pub fn dispatch(&mut self, intent: R::Intent) -> bool {
        let previous = self.state.clone();
        self.state = R::reduce(std::mem::take(&mut self.state), intent);
        let changed = self.state != previous;
        if changed {
            for (_, listener) in self.listeners.iter_mut() {
                listener(&self.state);
            }
        }
        changed
    }

    /// Register a listener called after every changing dispatch.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&R::State) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}
