use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use chrono::Utc;

use super::domain::{
    Message, Ticket, TicketCategory, TicketId, TicketOrigin, TicketPriority, TicketStatus,
    TicketSummary,
};
use super::lifecycle::TicketError;

/// Intake payload for opening a ticket, whether the requester reported it or
/// an agent opened it on their behalf.
#[derive(Debug, Clone)]
pub struct NewTicket {
    pub subject: String,
    pub requester_contact: String,
    pub initial_message: Option<String>,
    pub priority: TicketPriority,
    pub category: TicketCategory,
    pub created_by: TicketOrigin,
}

/// Listing filter; `None` on status or priority means "all", an empty search
/// string matches everything.
#[derive(Debug, Clone, Default)]
pub struct TicketFilter {
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
    pub search: String,
}

impl TicketFilter {
    fn matches(&self, ticket: &Ticket) -> bool {
        if let Some(status) = self.status {
            if ticket.status != status {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if ticket.priority != priority {
                return false;
            }
        }
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        ticket.subject.to_lowercase().contains(&needle)
            || ticket.requester_contact.to_lowercase().contains(&needle)
    }
}

/// In-memory ticket collection.
///
/// All mutation runs under the write lock, so concurrent agents acting on the
/// same ticket are serialized and appends are never dropped. Reads clone out
/// of the read lock and never observe a half-applied update. Ids come from a
/// monotonic counter, not the collection size, so concurrent creates cannot
/// collide.
pub struct TicketRegistry {
    tickets: RwLock<Vec<Ticket>>,
    sequence: AtomicU64,
}

impl Default for TicketRegistry {
    fn default() -> Self {
        Self {
            tickets: RwLock::new(Vec::new()),
            sequence: AtomicU64::new(1),
        }
    }
}

impl TicketRegistry {
    fn next_id(&self) -> TicketId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        TicketId(format!("TCK-{id:03}"))
    }

    /// Register a new ticket, newest first. The initial message, when
    /// provided, seeds the requester thread.
    pub fn create(&self, intake: NewTicket) -> Result<Ticket, TicketError> {
        let subject = intake.subject.trim().to_string();
        if subject.is_empty() {
            return Err(TicketError::MissingField("subject"));
        }
        let requester_contact = intake.requester_contact.trim().to_string();
        if requester_contact.is_empty() {
            return Err(TicketError::MissingField("requester contact"));
        }

        let now = Utc::now();
        let thread = intake
            .initial_message
            .as_deref()
            .map(str::trim)
            .filter(|body| !body.is_empty())
            .map(|body| {
                vec![Message {
                    sender: requester_contact.clone(),
                    body: body.to_string(),
                    sent_at: now,
                }]
            })
            .unwrap_or_default();

        let ticket = Ticket {
            id: self.next_id(),
            subject,
            requester_contact,
            status: TicketStatus::Open,
            priority: intake.priority,
            category: intake.category,
            created_by: intake.created_by,
            created_at: now,
            updated_at: now,
            thread,
            agent_replies: Vec::new(),
        };

        let mut tickets = self.tickets.write().expect("ticket registry poisoned");
        tickets.insert(0, ticket.clone());
        Ok(ticket)
    }

    /// Filtered listing in registry order (newest-created first).
    pub fn list(&self, filter: &TicketFilter) -> Vec<TicketSummary> {
        let tickets = self.tickets.read().expect("ticket registry poisoned");
        tickets
            .iter()
            .filter(|ticket| filter.matches(ticket))
            .map(Ticket::summary)
            .collect()
    }

    /// Snapshot of a single ticket.
    pub fn get(&self, id: &TicketId) -> Result<Ticket, TicketError> {
        let tickets = self.tickets.read().expect("ticket registry poisoned");
        tickets
            .iter()
            .find(|ticket| &ticket.id == id)
            .cloned()
            .ok_or(TicketError::NotFound)
    }

    /// Apply a mutation to one ticket under the write lock and return a
    /// snapshot of the result. The closure's error leaves the ticket untouched
    /// only if the closure itself made no changes before failing; lifecycle
    /// operations are written to validate before mutating.
    pub fn update_with<T>(
        &self,
        id: &TicketId,
        apply: impl FnOnce(&mut Ticket) -> Result<T, TicketError>,
    ) -> Result<(Ticket, T), TicketError> {
        let mut tickets = self.tickets.write().expect("ticket registry poisoned");
        let ticket = tickets
            .iter_mut()
            .find(|ticket| &ticket.id == id)
            .ok_or(TicketError::NotFound)?;
        let value = apply(ticket)?;
        Ok((ticket.clone(), value))
    }

    pub fn len(&self) -> usize {
        self.tickets.read().expect("ticket registry poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
