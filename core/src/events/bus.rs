use super::{EventSubscriber, HostEvent};

/// Explicit handler registration in place of annotation-driven dispatch.
///
/// Subscribers receive every posted event in registration order.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<Box<dyn EventSubscriber + Send>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, subscriber: Box<dyn EventSubscriber + Send>) {
        self.subscribers.push(subscriber);
    }

    pub fn post(&mut self, event: &HostEvent) {
        tracing::trace!(kind = event.kind(), "posting host event");
        for subscriber in &mut self.subscribers {
            subscriber.handle_event(event);
        }
    }

    pub fn post_all(&mut self, events: &[HostEvent]) {
        for subscriber in &mut self.subscribers {
            subscriber.handle_events(events);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
