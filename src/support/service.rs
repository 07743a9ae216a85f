use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::info;

use super::domain::{Message, Ticket, TicketId, TicketStatus, TicketSummary};
use super::lifecycle::TicketError;
use super::registry::{NewTicket, TicketFilter, TicketRegistry};
use super::suggestions;

/// Event handed to the notification/audit collaborator on every mutation:
/// the ticket, its status after the change, and the appended message if the
/// mutation was a reply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketEvent {
    pub ticket_id: TicketId,
    pub status: TicketStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}

/// Outbound hook consumed by the external notification collaborator.
pub trait TicketNotifier: Send + Sync {
    fn notify(&self, event: &TicketEvent) -> Result<(), NotifyError>;
}

/// Notification dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}

/// Error raised by the desk facade.
#[derive(Debug, thiserror::Error)]
pub enum SupportError {
    #[error(transparent)]
    Ticket(#[from] TicketError),
    #[error(transparent)]
    Notify(#[from] NotifyError),
}

/// Full ticket payload for the detail interface: the ticket, its merged
/// timeline, and the suggestion list for its category.
#[derive(Debug, Clone, Serialize)]
pub struct TicketDetail {
    #[serde(flatten)]
    pub ticket: Ticket,
    pub timeline: Vec<Message>,
    pub suggested_replies: Vec<&'static str>,
}

/// Facade composing the registry with the notification hook. All writes fan
/// out an event after the state change commits; a failed notification is
/// reported but never rolls the change back.
pub struct SupportDesk<N> {
    registry: TicketRegistry,
    notifier: Arc<N>,
}

impl<N> SupportDesk<N>
where
    N: TicketNotifier + 'static,
{
    pub fn new(notifier: Arc<N>) -> Self {
        Self {
            registry: TicketRegistry::default(),
            notifier,
        }
    }

    pub fn registry(&self) -> &TicketRegistry {
        &self.registry
    }

    /// Open a ticket from an inbound report or on a user's behalf.
    pub fn create_ticket(&self, intake: NewTicket) -> Result<Ticket, SupportError> {
        let ticket = self.registry.create(intake)?;
        self.notifier.notify(&TicketEvent {
            ticket_id: ticket.id.clone(),
            status: ticket.status,
            message: ticket.thread.first().cloned(),
        })?;
        Ok(ticket)
    }

    pub fn list(&self, filter: &TicketFilter) -> Vec<TicketSummary> {
        self.registry.list(filter)
    }

    /// Detail view: ticket, merged timeline, category suggestions.
    pub fn get(&self, id: &TicketId) -> Result<TicketDetail, SupportError> {
        let ticket = self.registry.get(id)?;
        let timeline = ticket.timeline();
        let suggested_replies = suggestions::suggestions_for(ticket.category).to_vec();
        Ok(TicketDetail {
            ticket,
            timeline,
            suggested_replies,
        })
    }

    /// Set the ticket's status and notify the audit collaborator.
    pub fn set_status(
        &self,
        id: &TicketId,
        next: TicketStatus,
    ) -> Result<TicketSummary, SupportError> {
        let (ticket, _) = self.registry.update_with(id, |ticket| {
            ticket.set_status(next, Utc::now());
            Ok(())
        })?;
        self.notifier.notify(&TicketEvent {
            ticket_id: ticket.id.clone(),
            status: ticket.status,
            message: None,
        })?;
        Ok(ticket.summary())
    }

    /// Append an agent reply, applying the first-response status convention.
    pub fn append_reply(&self, id: &TicketId, text: &str) -> Result<Message, SupportError> {
        let (ticket, message) = self
            .registry
            .update_with(id, |ticket| ticket.append_agent_reply(text, Utc::now()))?;
        self.notifier.notify(&TicketEvent {
            ticket_id: ticket.id.clone(),
            status: ticket.status,
            message: Some(message.clone()),
        })?;
        Ok(message)
    }

    /// Raise the ticket's priority one rung and signal the routing hook.
    pub fn escalate(&self, id: &TicketId) -> Result<TicketSummary, SupportError> {
        let (ticket, _) = self.registry.update_with(id, |ticket| {
            ticket.escalate(Utc::now());
            Ok(())
        })?;
        self.notifier.notify(&TicketEvent {
            ticket_id: ticket.id.clone(),
            status: ticket.status,
            message: None,
        })?;
        Ok(ticket.summary())
    }
}

/// Default production notifier: structured log lines for the audit trail.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl TicketNotifier for TracingNotifier {
    fn notify(&self, event: &TicketEvent) -> Result<(), NotifyError> {
        match &event.message {
            Some(message) => info!(
                ticket = %event.ticket_id.0,
                status = event.status.label(),
                sender = %message.sender,
                "ticket updated with new message"
            ),
            None => info!(
                ticket = %event.ticket_id.0,
                status = event.status.label(),
                "ticket updated"
            ),
        }
        Ok(())
    }
}
