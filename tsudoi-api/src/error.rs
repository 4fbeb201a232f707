use crate::{CommentId, PostId};

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Refusing to create a post with neither text nor attachment")]
    EmptyPost,

    #[error("Refusing to add an empty comment")]
    EmptyComment,

    #[error("No post with id {0:?}")]
    UnknownPost(PostId),

    #[error("No comment with id {0:?}")]
    UnknownComment(CommentId),

    #[error("Could not read the selected file: {0}")]
    AttachmentUnreadable(String),
}
