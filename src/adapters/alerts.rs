//! Alert Adapter
//!
//! Forwards core events to `tracing`. Stands in for the dashboard's toast
//! layer when running headless.

use crate::domain::events::BotEvent;
use crate::domain::transaction::TxStatus;
use crate::ports::notifier::Notifier;

/// Notifier that logs every event through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for LogNotifier {
    fn notify(&self, event: BotEvent) {
        match &event {
            BotEvent::TransactionResolved {
                status: TxStatus::Failed,
                ..
            } => tracing::warn!("{}", event),
            _ => tracing::info!("{}", event),
        }
    }
}
