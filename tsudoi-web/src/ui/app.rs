use std::rc::Rc;

use tsudoi_client::{
    api::{Attachment, CommentId, Error, PostId, Roster},
    login, Feed, Session,
};
use yew::prelude::*;

use crate::ui;

pub enum AppMsg {
    LoginSubmitted { username: String, password: String },
    Logout,
    NewPost { content: String, attachment: Option<Attachment> },
    LikeToggled(PostId),
    CommentSubmitted {
        post: PostId,
        parent: Option<CommentId>,
        text: String,
    },
}

/// Root component: the single owner of all application state. Child views
/// are read-only and send intents back up as `AppMsg`.
pub struct App {
    roster: Rc<Roster>,
    feed: Feed,
    session: Option<Session>,
    login_error: Option<Error>,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let roster = Rc::new(Roster::builtin());
        let feed = Feed::with_demo_posts(&roster);
        App {
            roster,
            feed,
            session: None,
            login_error: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::LoginSubmitted { username, password } => {
                match login(&self.roster, &username, &password) {
                    Ok(session) => {
                        self.session = Some(session);
                        self.login_error = None;
                    }
                    // stay unauthenticated, keep the error visible
                    Err(e) => self.login_error = Some(e),
                }
            }
            AppMsg::Logout => {
                self.session = None;
                self.login_error = None;
            }
            AppMsg::NewPost {
                content,
                attachment,
            } => {
                let author = match &self.session {
                    Some(s) => s.user.id,
                    None => {
                        tracing::warn!("got a post intent without a session");
                        return false;
                    }
                };
                if let Err(e) = self.feed.create_post(author, content, attachment) {
                    // the composer disables its button on empty input
                    tracing::warn!(%e, "post intent rejected");
                    return false;
                }
            }
            AppMsg::LikeToggled(post) => {
                let user = match &self.session {
                    Some(s) => s.user.id,
                    None => {
                        tracing::warn!("got a like intent without a session");
                        return false;
                    }
                };
                if let Err(e) = self.feed.toggle_like(post, user) {
                    tracing::warn!(%e, "like intent rejected");
                    return false;
                }
            }
            AppMsg::CommentSubmitted { post, parent, text } => {
                let author = match &self.session {
                    Some(s) => s.user.id,
                    None => {
                        tracing::warn!("got a comment intent without a session");
                        return false;
                    }
                };
                if let Err(e) = self.feed.add_comment(post, parent, author, &text) {
                    // submit buttons are disabled on blank text
                    tracing::warn!(%e, "comment intent rejected");
                    return false;
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let session = match &self.session {
            None => {
                return html! {
                    <div class="container">
                        <ui::Login
                            error={ self.login_error.as_ref().map(|e| e.to_string()) }
                            on_submit={ ctx.link().callback(|(username, password)| {
                                AppMsg::LoginSubmitted { username, password }
                            }) }
                        />
                    </div>
                }
            }
            Some(s) => s,
        };
        let posts = Rc::new(self.feed.posts().to_vec());
        html! {
            <div class="container">
                <ui::FeedView
                    current_user={ session.user.clone() }
                    roster={ self.roster.clone() }
                    { posts }
                    on_logout={ ctx.link().callback(|_| AppMsg::Logout) }
                    on_post={ ctx.link().callback(|(content, attachment)| {
                        AppMsg::NewPost { content, attachment }
                    }) }
                    on_like={ ctx.link().callback(AppMsg::LikeToggled) }
                    on_comment={ ctx.link().callback(|(post, parent, text)| {
                        AppMsg::CommentSubmitted { post, parent, text }
                    }) }
                />
            </div>
        }
    }
}
