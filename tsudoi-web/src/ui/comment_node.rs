use std::rc::Rc;

use tsudoi_client::{
    api::{Comment, CommentId, Roster},
    ReplyDrafts,
};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentNodeProps {
    pub comment: Comment,
    pub roster: Rc<Roster>,
    pub drafts: ReplyDrafts,
    pub on_start_reply: Callback<CommentId>,
    pub on_draft_change: Callback<(CommentId, String)>,
    pub on_submit_reply: Callback<CommentId>,
}

/// One node of a comment tree, rendered recursively. Expansion is local to
/// each node; the reply target and draft buffers live in the owning
/// `PostCard` and come down through props.
#[function_component(CommentNode)]
pub fn comment_node(p: &CommentNodeProps) -> Html {
    let expanded = use_state(|| false);
    let id = p.comment.id;
    let author = p
        .roster
        .get(p.comment.author_id)
        .expect("got a comment authored by a user that is not in the roster");

    let reply_box = (p.drafts.active() == Some(id)).then(|| {
        let draft = p.drafts.draft(id).to_string();
        html! {
            <div class="d-flex align-items-center mt-1">
                <input
                    type="text"
                    class="form-control form-control-sm me-2"
                    placeholder="Reply..."
                    value={ draft.clone() }
                    oninput={ p.on_draft_change.reform(move |e: web_sys::InputEvent| {
                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                        (id, input.value())
                    }) }
                />
                <button
                    type="button"
                    class="btn btn-primary btn-sm"
                    disabled={ draft.trim().is_empty() }
                    onclick={ p.on_submit_reply.reform(move |_| id) }
                >
                    { "Post" }
                </button>
            </div>
        }
    });

    let replies = (*expanded).then(|| {
        html! {
            <>
                { for p.comment.replies.iter().map(|reply| html! {
                    <CommentNode
                        key={ reply.id.0 }
                        comment={ reply.clone() }
                        roster={ p.roster.clone() }
                        drafts={ p.drafts.clone() }
                        on_start_reply={ p.on_start_reply.clone() }
                        on_draft_change={ p.on_draft_change.clone() }
                        on_submit_reply={ p.on_submit_reply.clone() }
                    />
                }) }
            </>
        }
    });

    html! {
        <div class="comment ps-3 mt-2 border-start">
            <div class="d-flex align-items-center">
                <img class="avatar avatar-sm me-2" src={ author.avatar.clone() } alt={ author.name.clone() } />
                <strong>{ &author.name }</strong>
            </div>
            <div>{ &p.comment.text }</div>
            <div class="d-flex align-items-center">
                <button
                    type="button"
                    class="btn btn-link btn-sm"
                    onclick={ p.on_start_reply.reform(move |_| id) }
                >
                    { "Reply" }
                </button>
                <button
                    type="button"
                    class="btn btn-light btn-sm"
                    onclick={ Callback::from({
                        let expanded = expanded.clone();
                        move |_| expanded.set(!*expanded)
                    }) }
                >
                    { if *expanded { "\u{25B4}" } else { "\u{25BE}" } }
                </button>
            </div>
            { for reply_box }
            { for replies }
        </div>
    }
}
