use crate::{Time, UserId};

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct CommentId(pub u64);

/// One node of a post's comment tree.
///
/// Ids must be unique across the whole tree of a post (siblings and
/// descendants included): reply insertion is addressed purely by id. The
/// `Feed` enforces this by allocating ids from a monotonic counter.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub id: CommentId,
    pub author_id: UserId,
    pub date: Time,
    pub text: String,

    /// Child comments, in insertion order
    pub replies: Vec<Comment>,
}

impl Comment {
    pub fn new(id: CommentId, author_id: UserId, date: Time, text: String) -> Comment {
        Comment {
            id,
            author_id,
            date,
            text,
            replies: Vec::new(),
        }
    }
}
