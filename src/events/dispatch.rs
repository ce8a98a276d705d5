//! Best-effort notification dispatch
//!
//! Delivery belongs to an external collaborator. A failed delivery is logged
//! and counted here; it never fails or rolls back the ledger mutation that
//! produced the event. Failed events are handed back so the caller can retry
//! them independently.

use std::sync::Mutex;

use super::event::DomainEvent;

/// Delivers notifications to users
pub trait NotificationSink: Send + Sync {
    /// Get the sink name (for logging)
    fn name(&self) -> &str;

    /// Persist or deliver one event
    fn deliver(&self, event: &DomainEvent) -> anyhow::Result<()>;
}

/// Outcome of a dispatch round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub delivered: usize,
    /// Events whose delivery failed, in dispatch order
    pub failed: Vec<DomainEvent>,
}

impl DispatchReport {
    pub fn all_delivered(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Deliver every event, continuing past failures
pub fn dispatch(sink: &dyn NotificationSink, events: &[DomainEvent]) -> DispatchReport {
    let mut report = DispatchReport::default();

    for event in events {
        match sink.deliver(event) {
            Ok(()) => {
                tracing::debug!(
                    sink = sink.name(),
                    kind = %event.kind,
                    target = %event.target_user_id,
                    "Notification delivered"
                );
                report.delivered += 1;
            }
            Err(e) => {
                tracing::warn!(
                    sink = sink.name(),
                    kind = %event.kind,
                    target = %event.target_user_id,
                    error = %e,
                    "Notification delivery failed"
                );
                report.failed.push(event.clone());
            }
        }
    }

    report
}

/// In-memory sink that keeps every delivered event
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<DomainEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of delivered events
    pub fn events(&self) -> Vec<DomainEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl NotificationSink for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }

    fn deliver(&self, event: &DomainEvent) -> anyhow::Result<()> {
        self.events
            .lock()
            .map_err(|_| anyhow::anyhow!("notification store lock poisoned"))?
            .push(event.clone());
        Ok(())
    }
}
