use crate::domain::events::BotEvent;

/// Sink for core notifications. The dashboard's toast/alert layer
/// implements this; the core only ever pushes events through it and never
/// learns how they are displayed.
pub trait Notifier: Send + Sync {
    fn notify(&self, event: BotEvent);
}

/// Notifier that drops every event. Useful for headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _event: BotEvent) {}
}
