use std::collections::HashMap;

use crate::api::CommentId;

/// Reply-composition state for one post's comment tree.
///
/// At most one comment is the active reply target at a time, but the text
/// typed under every node is retained in a per-node buffer: switching the
/// target away and back restores what was typed.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ReplyDrafts {
    active: Option<CommentId>,
    drafts: HashMap<CommentId, String>,
}

impl ReplyDrafts {
    pub fn new() -> ReplyDrafts {
        ReplyDrafts::default()
    }

    pub fn active(&self) -> Option<CommentId> {
        self.active
    }

    /// Makes `id` the single active reply target. Any other node's
    /// in-progress text stays buffered.
    pub fn start_reply(&mut self, id: CommentId) {
        self.active = Some(id);
    }

    /// Deactivates the reply input without discarding any buffer.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    pub fn draft(&self, id: CommentId) -> &str {
        self.drafts.get(&id).map(|s| s as &str).unwrap_or("")
    }

    pub fn set_draft(&mut self, id: CommentId, text: String) {
        self.drafts.insert(id, text);
    }

    /// Takes the buffer of the node just submitted, clearing only that
    /// buffer and resetting the active target to none.
    pub fn submit(&mut self, id: CommentId) -> String {
        self.active = None;
        self.drafts.remove(&id).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_targets_retains_buffers() {
        let mut drafts = ReplyDrafts::new();
        drafts.start_reply(CommentId(1));
        drafts.set_draft(CommentId(1), String::from("half-written"));

        drafts.start_reply(CommentId(2));
        assert_eq!(drafts.active(), Some(CommentId(2)));
        drafts.set_draft(CommentId(2), String::from("other"));

        drafts.start_reply(CommentId(1));
        assert_eq!(drafts.draft(CommentId(1)), "half-written");
        assert_eq!(drafts.draft(CommentId(2)), "other");
    }

    #[test]
    fn submit_clears_only_the_submitted_buffer() {
        let mut drafts = ReplyDrafts::new();
        drafts.set_draft(CommentId(1), String::from("one"));
        drafts.set_draft(CommentId(2), String::from("two"));
        drafts.start_reply(CommentId(1));

        assert_eq!(drafts.submit(CommentId(1)), "one");
        assert_eq!(drafts.active(), None);
        assert_eq!(drafts.draft(CommentId(1)), "");
        assert_eq!(drafts.draft(CommentId(2)), "two");
    }

    #[test]
    fn cancel_keeps_the_buffer() {
        let mut drafts = ReplyDrafts::new();
        drafts.start_reply(CommentId(3));
        drafts.set_draft(CommentId(3), String::from("kept"));
        drafts.cancel();
        assert_eq!(drafts.active(), None);
        assert_eq!(drafts.draft(CommentId(3)), "kept");
    }
}
