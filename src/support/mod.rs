//! Support-ticket core: lifecycle state, merged message timelines, suggested
//! replies, and the registry serving filtered views.
//!
//! The engine is backend-agnostic: it owns in-memory entities and validation,
//! while transport, persistence, and notification delivery belong to external
//! collaborators reached through [`service::TicketNotifier`] and the router.

pub mod domain;
pub mod lifecycle;
pub mod registry;
pub mod router;
pub mod service;
pub mod suggestions;
pub mod timeline;

#[cfg(test)]
mod tests;

pub use domain::{
    Message, Ticket, TicketCategory, TicketId, TicketOrigin, TicketPriority, TicketStatus,
    TicketSummary, AGENT_SENDER,
};
pub use lifecycle::{TicketError, MAX_REPLY_CHARS};
pub use registry::{NewTicket, TicketFilter, TicketRegistry};
pub use router::support_router;
pub use service::{
    NotifyError, SupportDesk, SupportError, TicketDetail, TicketEvent, TicketNotifier,
    TracingNotifier,
};
pub use suggestions::suggestions_for;
pub use timeline::merge;
