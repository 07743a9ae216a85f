use super::common::*;
use crate::support::domain::{
    Ticket, TicketCategory, TicketId, TicketOrigin, TicketPriority, TicketStatus, AGENT_SENDER,
};
use crate::support::lifecycle::{TicketError, MAX_REPLY_CHARS};

fn ticket_with_status(status: TicketStatus) -> Ticket {
    Ticket {
        id: TicketId("TCK-001".to_string()),
        subject: "Login issues".to_string(),
        requester_contact: "john@example.com".to_string(),
        status,
        priority: TicketPriority::High,
        category: TicketCategory::AccountIssues,
        created_by: TicketOrigin::User,
        created_at: at_minute(0),
        updated_at: at_minute(0),
        thread: vec![message("john@example.com", "I can't sign in.", 0)],
        agent_replies: Vec::new(),
    }
}

#[test]
fn first_reply_moves_open_ticket_to_in_progress() {
    let mut ticket = ticket_with_status(TicketStatus::Open);

    let reply = ticket
        .append_agent_reply("We're on it.", at_minute(5))
        .expect("reply accepted");

    assert_eq!(reply.sender, AGENT_SENDER);
    assert_eq!(reply.body, "We're on it.");
    assert_eq!(ticket.status, TicketStatus::InProgress);
    assert_eq!(ticket.updated_at, at_minute(5));
    assert_eq!(ticket.timeline().len(), 2);
}

#[test]
fn subsequent_replies_leave_status_unchanged() {
    let mut ticket = ticket_with_status(TicketStatus::Open);
    ticket
        .append_agent_reply("First response", at_minute(5))
        .expect("reply accepted");
    ticket
        .append_agent_reply("Second response", at_minute(6))
        .expect("reply accepted");

    assert_eq!(ticket.status, TicketStatus::InProgress);
    assert_eq!(ticket.timeline().len(), 3);
}

#[test]
fn replies_on_resolved_tickets_do_not_reopen_them() {
    let mut ticket = ticket_with_status(TicketStatus::Resolved);
    ticket
        .append_agent_reply("One more note", at_minute(5))
        .expect("reply accepted");

    assert_eq!(ticket.status, TicketStatus::Resolved);
}

#[test]
fn blank_replies_are_rejected_without_side_effects() {
    let mut ticket = ticket_with_status(TicketStatus::Open);
    let before = ticket.clone();

    assert_eq!(
        ticket.append_agent_reply("", at_minute(5)),
        Err(TicketError::EmptyReply)
    );
    assert_eq!(
        ticket.append_agent_reply("   ", at_minute(5)),
        Err(TicketError::EmptyReply)
    );
    assert_eq!(ticket, before);
}

#[test]
fn overlong_replies_are_rejected_without_side_effects() {
    let mut ticket = ticket_with_status(TicketStatus::Open);
    let before = ticket.clone();

    let too_long = "x".repeat(MAX_REPLY_CHARS + 1);
    assert_eq!(
        ticket.append_agent_reply(&too_long, at_minute(5)),
        Err(TicketError::ReplyTooLong)
    );
    assert_eq!(ticket, before);

    let at_limit = "x".repeat(MAX_REPLY_CHARS);
    assert!(ticket.append_agent_reply(&at_limit, at_minute(5)).is_ok());
}

#[test]
fn reply_text_is_trimmed_but_never_truncated() {
    let mut ticket = ticket_with_status(TicketStatus::Open);

    let reply = ticket
        .append_agent_reply("  padded reply  ", at_minute(5))
        .expect("reply accepted");

    assert_eq!(reply.body, "padded reply");
}

#[test]
fn any_status_may_move_to_any_other() {
    let statuses = [
        TicketStatus::Open,
        TicketStatus::InProgress,
        TicketStatus::Resolved,
        TicketStatus::Closed,
    ];

    for from in statuses {
        for to in statuses {
            let mut ticket = ticket_with_status(from);
            ticket.set_status(to, at_minute(1));
            assert_eq!(ticket.status, to);
            assert_eq!(ticket.updated_at, at_minute(1));
        }
    }
}

#[test]
fn escalation_raises_priority_and_saturates_at_critical() {
    let mut ticket = ticket_with_status(TicketStatus::Open);
    assert_eq!(ticket.priority, TicketPriority::High);

    ticket.escalate(at_minute(2));
    assert_eq!(ticket.priority, TicketPriority::Critical);
    assert_eq!(ticket.updated_at, at_minute(2));

    ticket.escalate(at_minute(3));
    assert_eq!(ticket.priority, TicketPriority::Critical);
}

#[test]
fn timeline_interleaves_thread_and_replies() {
    let mut ticket = ticket_with_status(TicketStatus::Open);
    ticket.thread.push(message("john@example.com", "any update?", 10));
    ticket
        .append_agent_reply("Checking now", at_minute(5))
        .expect("reply accepted");

    let bodies: Vec<_> = ticket
        .timeline()
        .into_iter()
        .map(|message| message.body)
        .collect();
    assert_eq!(bodies, ["I can't sign in.", "Checking now", "any update?"]);
}
