mod app;
pub use app::{App, AppMsg};

mod comment_node;
pub use comment_node::CommentNode;

mod feed_view;
pub use feed_view::FeedView;

mod login;
pub use login::Login;

mod post_card;
pub use post_card::PostCard;

mod post_composer;
pub use post_composer::PostComposer;
