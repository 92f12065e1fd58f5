//! Observer pattern for fetch diagnostics.
//!
//! Orchestrators report progress and failures through a `FetchObserver`
//! instead of logging directly, so diagnostics stay out of control flow.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::event::FetchEvent;

/// Observer trait for receiving fetch events.
pub trait FetchObserver: Send + Sync {
    /// Receive one event.
    fn on_event(&self, event: &FetchEvent);
}

/// Subject that fans events out to a collection of observers.
pub struct EventSubject {
    observers: RwLock<Vec<Arc<dyn FetchObserver>>>,
}

impl EventSubject {
    /// Create a new subject with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Register an observer.
    pub fn register(&self, observer: Arc<dyn FetchObserver>) {
        self.observers.write().push(observer);
    }

    /// Notify all observers of an event.
    pub fn notify(&self, event: &FetchEvent) {
        let observers = self.observers.read();
        for observer in observers.iter() {
            observer.on_event(event);
        }
    }

    /// Get the number of registered observers.
    #[must_use]
    pub fn count(&self) -> usize {
        self.observers.read().len()
    }
}

impl Default for EventSubject {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchObserver for EventSubject {
    fn on_event(&self, event: &FetchEvent) {
        self.notify(event);
    }
}
