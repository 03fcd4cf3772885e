//! Notification events, template rendering, and dispatch.
//!
//! The dispatcher decides whether an event produces an email at all, renders
//! the branded message, and hands it to the injected `EmailSender`. There is
//! no queue and no retry: each inbound event yields zero, one, or two
//! deliveries within the request, then nothing survives.

mod dispatcher;
mod event;
mod templates;

pub use dispatcher::{DispatchOutcome, NotificationDispatcher};
pub use event::{ReservationRequest, StatusUpdateRequest, WaitlistRequest};
pub use templates::{RenderedMessage, TemplateConfig};
