//! Domain events for the notification side channel
//!
//! Record operations describe what changed as `Transition`s. The emitter
//! turns each into at most one `DomainEvent`, and `dispatch` hands events to
//! an external `NotificationSink` on a best-effort basis.

mod dispatch;
mod emitter;
mod event;
mod transition;

pub use dispatch::{dispatch, DispatchReport, MemorySink, NotificationSink};
pub use emitter::{emit, emit_all};
pub use event::{DomainEvent, NotificationKind};
pub use transition::Transition;
