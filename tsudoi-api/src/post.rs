use std::collections::HashSet;

use crate::{Attachment, Comment, Time, UserId};

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct PostId(pub u64);

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Post {
    pub id: PostId,
    pub author_id: UserId,
    pub date: Time,

    pub content: String,
    pub attachment: Option<Attachment>,

    /// Set of users who liked this post
    pub likes: HashSet<UserId>,

    /// Top-level comments, in insertion order
    pub comments: Vec<Comment>,
}

impl Post {
    pub fn is_liked_by(&self, user: UserId) -> bool {
        self.likes.contains(&user)
    }
}
