mod bus;
mod events;

pub use bus::EventBus;
pub use events::DocumentEvent;

/// Receives document change notifications, in mutation order.
pub trait EventHandler {
    fn handle_event(&mut self, event: &DocumentEvent);
}

impl<F: FnMut(&DocumentEvent)> EventHandler for F {
    fn handle_event(&mut self, event: &DocumentEvent) {
        self(event);
    }
}
