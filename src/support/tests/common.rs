use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::support::domain::{Message, Ticket, TicketCategory, TicketOrigin, TicketPriority};
use crate::support::registry::NewTicket;
use crate::support::service::{NotifyError, SupportDesk, TicketEvent, TicketNotifier};

pub(super) fn at_minute(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 26, 9, minute, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn message(sender: &str, body: &str, minute: u32) -> Message {
    Message {
        sender: sender.to_string(),
        body: body.to_string(),
        sent_at: at_minute(minute),
    }
}

pub(super) fn login_intake() -> NewTicket {
    NewTicket {
        subject: "Login issues".to_string(),
        requester_contact: "john@example.com".to_string(),
        initial_message: Some("I can't sign in.".to_string()),
        priority: TicketPriority::High,
        category: TicketCategory::AccountIssues,
        created_by: TicketOrigin::User,
    }
}

pub(super) fn billing_intake() -> NewTicket {
    NewTicket {
        subject: "Payment problem".to_string(),
        requester_contact: "sarah@example.com".to_string(),
        initial_message: None,
        priority: TicketPriority::Medium,
        category: TicketCategory::BillingQuestions,
        created_by: TicketOrigin::Admin,
    }
}

pub(super) fn open_ticket(desk: &SupportDesk<MemoryNotifier>) -> Ticket {
    desk.create_ticket(login_intake()).expect("ticket creates")
}

pub(super) fn build_desk() -> (SupportDesk<MemoryNotifier>, Arc<MemoryNotifier>) {
    let notifier = Arc::new(MemoryNotifier::default());
    (SupportDesk::new(notifier.clone()), notifier)
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    events: Arc<Mutex<Vec<TicketEvent>>>,
}

impl MemoryNotifier {
    pub(super) fn events(&self) -> Vec<TicketEvent> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }
}

impl TicketNotifier for MemoryNotifier {
    fn notify(&self, event: &TicketEvent) -> Result<(), NotifyError> {
        self.events
            .lock()
            .expect("notifier mutex poisoned")
            .push(event.clone());
        Ok(())
    }
}

pub(super) struct OfflineNotifier;

impl TicketNotifier for OfflineNotifier {
    fn notify(&self, _event: &TicketEvent) -> Result<(), NotifyError> {
        Err(NotifyError::Transport("webhook offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
