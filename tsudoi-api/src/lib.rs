use chrono::Utc;

pub type Time = chrono::DateTime<Utc>;

mod attachment;
pub use attachment::{Attachment, AttachmentKind};

mod comment;
pub use comment::{Comment, CommentId};

mod error;
pub use error::Error;

mod post;
pub use post::{Post, PostId};

mod user;
pub use user::{Roster, User, UserId};
