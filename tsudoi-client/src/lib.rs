mod drafts;
pub use drafts::ReplyDrafts;

mod feed;
pub use feed::Feed;

pub mod forest;

mod session;
pub use session::{login, Session};

pub mod api {
    pub use tsudoi_api::*;
}
