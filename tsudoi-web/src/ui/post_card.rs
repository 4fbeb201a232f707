use std::rc::Rc;

use tsudoi_client::{
    api::{AttachmentKind, CommentId, Post, PostId, Roster, UserId},
    forest, ReplyDrafts,
};
use yew::prelude::*;

use crate::ui;

#[derive(Clone, PartialEq, Properties)]
pub struct PostCardProps {
    pub post: Post,
    pub current_user: UserId,
    pub roster: Rc<Roster>,
    pub on_like: Callback<PostId>,
    pub on_comment: Callback<(PostId, Option<CommentId>, String)>,
}

/// One post in the feed, together with its comment tree and the reply
/// composition state for that tree.
pub struct PostCard {
    show_comments: bool,
    comment_text: String,
    drafts: ReplyDrafts,
}

pub enum PostCardMsg {
    LikeClicked,
    ToggleComments,
    CommentTextChanged(String),
    SubmitTopLevel,
    StartReply(CommentId),
    DraftChanged(CommentId, String),
    SubmitReply(CommentId),
}

impl Component for PostCard {
    type Message = PostCardMsg;
    type Properties = PostCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            show_comments: false,
            comment_text: String::new(),
            drafts: ReplyDrafts::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            PostCardMsg::LikeClicked => {
                ctx.props().on_like.emit(ctx.props().post.id);
                return false;
            }
            PostCardMsg::ToggleComments => self.show_comments = !self.show_comments,
            PostCardMsg::CommentTextChanged(t) => self.comment_text = t,
            PostCardMsg::SubmitTopLevel => {
                if self.comment_text.trim().is_empty() {
                    return false;
                }
                ctx.props().on_comment.emit((
                    ctx.props().post.id,
                    None,
                    std::mem::take(&mut self.comment_text),
                ));
            }
            PostCardMsg::StartReply(id) => self.drafts.start_reply(id),
            PostCardMsg::DraftChanged(id, text) => self.drafts.set_draft(id, text),
            PostCardMsg::SubmitReply(id) => {
                if self.drafts.draft(id).trim().is_empty() {
                    return false;
                }
                let text = self.drafts.submit(id);
                ctx.props().on_comment.emit((ctx.props().post.id, Some(id), text));
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let p = ctx.props();
        let author = p
            .roster
            .get(p.post.author_id)
            .expect("got a post authored by a user that is not in the roster");
        let liked = p.post.is_liked_by(p.current_user);
        let comment_count = forest::count_all(&p.post.comments);

        let attachment = p.post.attachment.as_ref().map(|att| match att.kind {
            AttachmentKind::Image => html! {
                <img class="post-image" src={ att.locator.clone() } alt="Post" />
            },
            AttachmentKind::File => html! {
                <div class="attachment-chip">{ format!("\u{1F4CE} {}", att.locator) }</div>
            },
            AttachmentKind::Audio => html! {
                <div class="attachment-chip">{ format!("\u{1F3A4} {}", att.locator) }</div>
            },
        });

        let comments = self.show_comments.then(|| html! {
            <div class="comments mt-2">
                { for p.post.comments.iter().map(|comment| html! {
                    <ui::CommentNode
                        key={ comment.id.0 }
                        comment={ comment.clone() }
                        roster={ p.roster.clone() }
                        drafts={ self.drafts.clone() }
                        on_start_reply={ ctx.link().callback(PostCardMsg::StartReply) }
                        on_draft_change={ ctx.link().callback(|(id, text)| {
                            PostCardMsg::DraftChanged(id, text)
                        }) }
                        on_submit_reply={ ctx.link().callback(PostCardMsg::SubmitReply) }
                    />
                }) }

                <div class="d-flex align-items-center mt-2">
                    <input
                        type="text"
                        class="form-control me-2"
                        placeholder="Add a comment..."
                        value={ self.comment_text.clone() }
                        oninput={ ctx.link().callback(|e: web_sys::InputEvent| {
                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                            PostCardMsg::CommentTextChanged(input.value())
                        }) }
                    />
                    <button
                        type="button"
                        class="btn btn-primary"
                        disabled={ self.comment_text.trim().is_empty() }
                        onclick={ ctx.link().callback(|_| PostCardMsg::SubmitTopLevel) }
                    >
                        { "Add Comment" }
                    </button>
                </div>
            </div>
        });

        html! {
            <div class="post-card card p-3 mb-3">
                <div class="d-flex align-items-center mb-2">
                    <img class="avatar me-2" src={ author.avatar.clone() } alt={ author.name.clone() } />
                    <strong>{ &author.name }</strong>
                </div>
                <p>{ &p.post.content }</p>
                { for attachment }

                <div class="d-flex justify-content-between mt-2">
                    <button
                        type="button"
                        class={ classes!("btn", if liked { "btn-danger" } else { "btn-light" }) }
                        onclick={ ctx.link().callback(|_| PostCardMsg::LikeClicked) }
                    >
                        { format!("\u{2764} {}", p.post.likes.len()) }
                    </button>
                    <button
                        type="button"
                        class="btn btn-light"
                        onclick={ ctx.link().callback(|_| PostCardMsg::ToggleComments) }
                    >
                        { format!("\u{1F4AC} {comment_count}") }
                    </button>
                </div>

                { for comments }
            </div>
        }
    }
}
