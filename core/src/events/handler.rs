use std::sync::{Arc, Mutex};

use super::HostEvent;

/// Receives host events from an [`EventBus`](super::EventBus).
pub trait EventSubscriber {
    fn handle_event(&mut self, event: &HostEvent);

    fn handle_events(&mut self, events: &[HostEvent]) {
        for event in events {
            self.handle_event(event);
        }
    }
}

/// Lets a subscriber stay reachable by other owners (scheduler, render
/// thread) while registered on the bus.
impl<S: EventSubscriber> EventSubscriber for Arc<Mutex<S>> {
    fn handle_event(&mut self, event: &HostEvent) {
        let mut guard = self.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.handle_event(event);
    }
}
