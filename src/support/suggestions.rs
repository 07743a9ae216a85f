//! Canned reply templates keyed by ticket category.
//!
//! The catalog is compiled-in, immutable configuration shared freely across
//! concurrent readers. Picking a suggestion only pre-fills an agent's draft;
//! sending it goes through the reply operation on the ticket.

use super::domain::TicketCategory;

const ACCOUNT_ISSUES: [&str; 3] = [
    "Thanks for reaching out. Could you confirm the email address on the account so we can look into it?",
    "We've reset the account lock on our side. Please try signing in again and let us know if the issue persists.",
    "For security we'll need to verify ownership first. Please reply from the email address registered on the account.",
];

const JOB_POSTING_HELP: [&str; 3] = [
    "Happy to help with your posting. Could you share the job listing ID or title you're working on?",
    "Your posting is saved as a draft. Use the Publish button on the listing page to make it visible to candidates.",
    "Edits to a live posting go live immediately. If you still see stale content, a hard refresh usually resolves it.",
];

const CANDIDATE_SEARCH: [&str; 3] = [
    "Candidate search filters combine with AND logic. Try removing one filter at a time to widen the results.",
    "Saved searches refresh overnight. New candidates matching your criteria will appear in tomorrow's digest.",
    "Contact details unlock once a candidate accepts your connection request. We'll notify you when that happens.",
];

const BILLING_QUESTIONS: [&str; 3] = [
    "Thanks for the billing question. Could you share the invoice number so we can pull up the charge?",
    "Refunds are issued to the original payment method and typically settle within 5-7 business days.",
    "Your plan renews on the date shown under Billing Settings. Cancelling before then avoids the next charge.",
];

const TECHNICAL_SUPPORT: [&str; 3] = [
    "Sorry for the trouble. Which browser and version are you on, and does the issue reproduce in a private window?",
    "We've identified the problem and a fix is rolling out. Please try again in about an hour.",
    "Could you attach a screenshot of the error? That helps us trace the exact request that failed.",
];

const GENERAL: [&str; 3] = [
    "Thanks for contacting support. We're looking into your request and will follow up shortly.",
    "Could you share a bit more detail about what you were trying to do when the problem occurred?",
    "We've logged your request with our team. You'll hear back from us within one business day.",
];

/// Ordered reply templates an agent may choose from for the given category.
/// Always exactly three entries; unknown category labels resolve to `General`
/// upstream via [`TicketCategory::from_label`].
pub fn suggestions_for(category: TicketCategory) -> &'static [&'static str] {
    match category {
        TicketCategory::AccountIssues => &ACCOUNT_ISSUES,
        TicketCategory::JobPostingHelp => &JOB_POSTING_HELP,
        TicketCategory::CandidateSearch => &CANDIDATE_SEARCH,
        TicketCategory::BillingQuestions => &BILLING_QUESTIONS,
        TicketCategory::TechnicalSupport => &TECHNICAL_SUPPORT,
        TicketCategory::General => &GENERAL,
    }
}
