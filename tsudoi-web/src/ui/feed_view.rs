use std::rc::Rc;

use tsudoi_client::api::{Attachment, CommentId, Post, PostId, Roster, User};
use yew::prelude::*;

use crate::ui;

#[derive(Clone, PartialEq, Properties)]
pub struct FeedViewProps {
    pub current_user: User,
    pub roster: Rc<Roster>,
    pub posts: Rc<Vec<Post>>,
    pub on_logout: Callback<()>,
    pub on_post: Callback<(String, Option<Attachment>)>,
    pub on_like: Callback<PostId>,
    pub on_comment: Callback<(PostId, Option<CommentId>, String)>,
}

#[function_component(FeedView)]
pub fn feed_view(p: &FeedViewProps) -> Html {
    html! {
        <div class="feed">
            <div class="d-flex justify-content-between align-items-center my-3">
                <div class="d-flex align-items-center">
                    <img class="avatar me-2" src={ p.current_user.avatar.clone() } alt="You" />
                    <span>{ &p.current_user.name }</span>
                </div>
                <button class="btn btn-outline-secondary" onclick={ p.on_logout.reform(|_| ()) }>
                    { "Logout" }
                </button>
            </div>

            <ui::PostComposer
                current_user={ p.current_user.clone() }
                on_post={ p.on_post.clone() }
            />

            <div class="post-list mt-4">
                { for p.posts.iter().map(|post| html! {
                    <ui::PostCard
                        key={ post.id.0 }
                        post={ post.clone() }
                        current_user={ p.current_user.id }
                        roster={ p.roster.clone() }
                        on_like={ p.on_like.clone() }
                        on_comment={ p.on_comment.clone() }
                    />
                }) }
            </div>
        </div>
    }
}
