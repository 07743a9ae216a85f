use super::domain::Message;

/// Merge the requester thread and the desk's appended replies into one
/// chronological view, ascending by send time.
///
/// The sort is stable, so equal timestamps keep original-before-addition order
/// and insertion order within each source. Neither input is mutated.
pub fn merge(original: &[Message], additions: &[Message]) -> Vec<Message> {
    let mut merged = Vec::with_capacity(original.len() + additions.len());
    merged.extend_from_slice(original);
    merged.extend_from_slice(additions);
    merged.sort_by_key(|message| message.sent_at);
    merged
}
