use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for registered tickets (`TCK-001` style).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketId(pub String);

/// Sender marker recorded on replies written by the help desk.
pub const AGENT_SENDER: &str = "support-agent";

/// Lifecycle status tracked on every ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub const fn label(self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in-progress",
            TicketStatus::Resolved => "resolved",
            TicketStatus::Closed => "closed",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "open" => Some(TicketStatus::Open),
            "in-progress" => Some(TicketStatus::InProgress),
            "resolved" => Some(TicketStatus::Resolved),
            "closed" => Some(TicketStatus::Closed),
            _ => None,
        }
    }

    /// Transition policy for agent-driven status changes. The desk currently
    /// allows any status to move to any other, including reopening a closed
    /// ticket; a stricter workflow replaces this one function.
    pub const fn can_transition_to(self, _next: TicketStatus) -> bool {
        true
    }
}

/// Agent-assigned urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl TicketPriority {
    pub const fn label(self) -> &'static str {
        match self {
            TicketPriority::Low => "low",
            TicketPriority::Medium => "medium",
            TicketPriority::High => "high",
            TicketPriority::Critical => "critical",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Some(TicketPriority::Low),
            "medium" => Some(TicketPriority::Medium),
            "high" => Some(TicketPriority::High),
            "critical" => Some(TicketPriority::Critical),
            _ => None,
        }
    }

    /// The next rung up, saturating at `Critical`.
    pub const fn escalated(self) -> Self {
        match self {
            TicketPriority::Low => TicketPriority::Medium,
            TicketPriority::Medium => TicketPriority::High,
            TicketPriority::High | TicketPriority::Critical => TicketPriority::Critical,
        }
    }
}

/// Topic bucket driving suggested-reply selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TicketCategory {
    AccountIssues,
    JobPostingHelp,
    CandidateSearch,
    BillingQuestions,
    TechnicalSupport,
    General,
}

impl TicketCategory {
    pub const fn label(self) -> &'static str {
        match self {
            TicketCategory::AccountIssues => "accountIssues",
            TicketCategory::JobPostingHelp => "jobPostingHelp",
            TicketCategory::CandidateSearch => "candidateSearch",
            TicketCategory::BillingQuestions => "billingQuestions",
            TicketCategory::TechnicalSupport => "technicalSupport",
            TicketCategory::General => "general",
        }
    }

    /// Category labels arrive as free strings from collaborators; anything
    /// unrecognized lands in `General` rather than failing.
    pub fn from_label(value: &str) -> Self {
        match value.trim() {
            "accountIssues" => TicketCategory::AccountIssues,
            "jobPostingHelp" => TicketCategory::JobPostingHelp,
            "candidateSearch" => TicketCategory::CandidateSearch,
            "billingQuestions" => TicketCategory::BillingQuestions,
            "technicalSupport" => TicketCategory::TechnicalSupport,
            _ => TicketCategory::General,
        }
    }
}

/// Provenance of a ticket, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketOrigin {
    /// Reported by the requester through the portal intake.
    User,
    /// Opened by an agent on a user's behalf.
    Admin,
}

impl TicketOrigin {
    pub const fn label(self) -> &'static str {
        match self {
            TicketOrigin::User => "user",
            TicketOrigin::Admin => "admin",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "user" => Some(TicketOrigin::User),
            "admin" => Some(TicketOrigin::Admin),
            _ => None,
        }
    }
}

/// A single timestamped utterance inside a ticket's thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

/// A support request with its lifecycle state and owned message thread.
///
/// Messages live in two sources: `thread` holds what arrived with the ticket
/// (the requester's side), `agent_replies` holds what the desk appended after
/// load. The visible timeline is the stable merge of both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub subject: String,
    pub requester_contact: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub category: TicketCategory,
    pub created_by: TicketOrigin,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub thread: Vec<Message>,
    pub agent_replies: Vec<Message>,
}

impl Ticket {
    pub fn summary(&self) -> TicketSummary {
        TicketSummary {
            id: self.id.clone(),
            subject: self.subject.clone(),
            requester_contact: self.requester_contact.clone(),
            status: self.status,
            priority: self.priority,
            created_by: self.created_by,
            created_at: self.created_at,
        }
    }
}

/// Listing row exposed to the presentation collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketSummary {
    pub id: TicketId,
    pub subject: String,
    pub requester_contact: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub created_by: TicketOrigin,
    pub created_at: DateTime<Utc>,
}
