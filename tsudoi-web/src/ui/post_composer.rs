use tsudoi_client::api::{Attachment, AttachmentKind, User};
use yew::prelude::*;

use crate::util;

#[derive(Clone, PartialEq, Properties)]
pub struct PostComposerProps {
    pub current_user: User,
    pub on_post: Callback<(String, Option<Attachment>)>,
}

/// The "what's on your mind?" box. Transient input only: a successful post
/// clears everything here, and nothing survives a reload.
pub struct PostComposer {
    content: String,
    attachment: Option<Attachment>,
    error: Option<String>,
}

pub enum PostComposerMsg {
    ContentChanged(String),
    ImagePicked(web_sys::File),
    ImageLoaded(String),
    ImageFailed(String),
    FilePicked(web_sys::File),
    AudioPicked(web_sys::File),
    SubmitClicked,
}

impl PostComposer {
    fn can_post(&self) -> bool {
        !self.content.trim().is_empty() || self.attachment.is_some()
    }
}

impl Component for PostComposer {
    type Message = PostComposerMsg;
    type Properties = PostComposerProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            content: String::new(),
            attachment: None,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            PostComposerMsg::ContentChanged(c) => self.content = c,
            PostComposerMsg::ImagePicked(file) => {
                // suspend until the browser has read the file, then resume
                // with either a preview-able data URL or a visible failure
                ctx.link().send_future(async move {
                    match util::read_as_data_url(file).await {
                        Ok(url) => PostComposerMsg::ImageLoaded(url),
                        Err(e) => PostComposerMsg::ImageFailed(e.to_string()),
                    }
                });
                return false;
            }
            PostComposerMsg::ImageLoaded(url) => {
                self.attachment = Some(Attachment::image(url));
                self.error = None;
            }
            PostComposerMsg::ImageFailed(e) => {
                tracing::warn!(%e, "failed reading selected image");
                self.error = Some(e);
            }
            PostComposerMsg::FilePicked(file) => {
                self.attachment = Some(Attachment::file(file.name()));
                self.error = None;
            }
            PostComposerMsg::AudioPicked(file) => {
                self.attachment = Some(Attachment::audio(file.name()));
                self.error = None;
            }
            PostComposerMsg::SubmitClicked => {
                if !self.can_post() {
                    return false;
                }
                ctx.props().on_post.emit((
                    std::mem::take(&mut self.content),
                    self.attachment.take(),
                ));
                self.error = None;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        macro_rules! picker_for {
            ($msg:ident) => {
                ctx.link().batch_callback(|e: web_sys::Event| {
                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                    input
                        .files()
                        .and_then(|files| files.get(0))
                        .map(PostComposerMsg::$msg)
                })
            };
        }
        let preview = self.attachment.as_ref().map(|att| match att.kind {
            AttachmentKind::Image => html! {
                <img class="preview-image" src={ att.locator.clone() } alt="Preview" />
            },
            AttachmentKind::File => html! {
                <div class="attachment-chip">{ format!("\u{1F4CE} {}", att.locator) }</div>
            },
            AttachmentKind::Audio => html! {
                <div class="attachment-chip">{ format!("\u{1F3A4} {}", att.locator) }</div>
            },
        });
        let error_line = self.error.as_ref().map(|e| {
            html! {
                <div class="alert alert-warning" role="alert">
                    { format!("Attachment failed: {e}") }
                </div>
            }
        });
        html! {
            <div class="post-composer card p-3">
                <div class="d-flex align-items-start">
                    <img class="avatar me-2" src={ ctx.props().current_user.avatar.clone() } alt="You" />
                    <textarea
                        class="form-control"
                        rows="2"
                        placeholder="What's on your mind?"
                        value={ self.content.clone() }
                        oninput={ ctx.link().callback(|e: web_sys::InputEvent| {
                            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                            PostComposerMsg::ContentChanged(input.value())
                        }) }
                    />
                </div>

                { for preview }
                { for error_line }

                <div class="d-flex justify-content-between align-items-center mt-2">
                    <input type="file" id="image-upload" hidden={true} accept="image/*" onchange={ picker_for!(ImagePicked) } />
                    <label class="btn btn-light" for="image-upload">{ "Photo" }</label>

                    <input type="file" id="file-upload" hidden={true} onchange={ picker_for!(FilePicked) } />
                    <label class="btn btn-light" for="file-upload">{ "Attach" }</label>

                    <input type="file" id="audio-upload" hidden={true} accept="audio/*" onchange={ picker_for!(AudioPicked) } />
                    <label class="btn btn-light" for="audio-upload">{ "Audio" }</label>

                    <button
                        type="button"
                        class="btn btn-primary"
                        disabled={ !self.can_post() }
                        onclick={ ctx.link().callback(|_| PostComposerMsg::SubmitClicked) }
                    >
                        { "Post" }
                    </button>
                </div>
            </div>
        }
    }
}
