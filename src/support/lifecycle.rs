use chrono::{DateTime, Utc};

use super::domain::{Message, Ticket, TicketStatus, AGENT_SENDER};
use super::timeline;

/// Upper bound on a single agent reply, counted in characters. Enforced at
/// the input boundary; accepted text is stored untruncated.
pub const MAX_REPLY_CHARS: usize = 500;

/// Validation failures surfaced to the caller. None of these leave partial
/// state behind; a rejected operation changes nothing on the ticket.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TicketError {
    #[error("'{0}' is not a recognized ticket status")]
    InvalidStatus(String),
    #[error("reply text must not be blank")]
    EmptyReply,
    #[error("reply text exceeds {MAX_REPLY_CHARS} characters")]
    ReplyTooLong,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("ticket not found")]
    NotFound,
}

impl Ticket {
    /// Move the ticket to `next`, stamping `updated_at`.
    ///
    /// Which transitions are admissible is decided by
    /// [`TicketStatus::can_transition_to`]; today that admits every pair, so
    /// agents may freely reopen resolved or closed tickets.
    pub fn set_status(&mut self, next: TicketStatus, now: DateTime<Utc>) {
        if self.status.can_transition_to(next) {
            self.status = next;
            self.updated_at = now;
        }
    }

    /// Append an agent reply to the ticket and return the stored message.
    ///
    /// A first reply on an `Open` ticket moves it to `InProgress`; any other
    /// current status is left as-is.
    pub fn append_agent_reply(
        &mut self,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<Message, TicketError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(TicketError::EmptyReply);
        }
        if trimmed.chars().count() > MAX_REPLY_CHARS {
            return Err(TicketError::ReplyTooLong);
        }

        let message = Message {
            sender: AGENT_SENDER.to_string(),
            body: trimmed.to_string(),
            sent_at: now,
        };
        self.agent_replies.push(message.clone());

        if self.status == TicketStatus::Open {
            self.status = TicketStatus::InProgress;
        }
        self.updated_at = now;

        Ok(message)
    }

    /// Raise the priority one rung (saturating at critical). Routing and
    /// paging on escalation belong to the notification collaborator.
    pub fn escalate(&mut self, now: DateTime<Utc>) {
        self.priority = self.priority.escalated();
        self.updated_at = now;
    }

    /// The merged chronological view over the requester thread and the desk's
    /// replies.
    pub fn timeline(&self) -> Vec<Message> {
        timeline::merge(&self.thread, &self.agent_replies)
    }
}
