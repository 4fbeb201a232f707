use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct LoginProps {
    /// Message of the last failed attempt, if any
    pub error: Option<String>,
    pub on_submit: Callback<(String, String)>,
}

pub struct Login {
    username: String,
    password: String,
}

pub enum LoginMsg {
    UserChanged(String),
    PassChanged(String),
    SubmitClicked,
}

impl Component for Login {
    type Message = LoginMsg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            username: String::new(),
            password: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LoginMsg::UserChanged(u) => self.username = u,
            LoginMsg::PassChanged(p) => self.password = p,
            LoginMsg::SubmitClicked => {
                ctx.props()
                    .on_submit
                    .emit((self.username.clone(), self.password.clone()));
                return false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        macro_rules! callback_for {
            ($msg:ident) => {
                ctx.link().callback(|e: web_sys::Event| {
                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                    LoginMsg::$msg(input.value())
                })
            };
        }
        let error_line = ctx.props().error.as_ref().map(|e| {
            html! {
                <div class="alert alert-danger" role="alert">{ e }</div>
            }
        });
        html! {<>
            <div class="text-center my-4">
                <h1>{ "Login" }</h1>
            </div>
            <form class="login-form">
                { for error_line }
                <div class="input-group mb-3">
                    <label class="input-group-text col-xl-1" for="user">{ "Username" }</label>
                    <input
                        type="text"
                        class="form-control form-control-lg"
                        id="user"
                        placeholder="user"
                        value={self.username.clone()}
                        onchange={callback_for!(UserChanged)}
                    />
                </div>
                <div class="input-group mb-3">
                    <label class="input-group-text col-xl-1" for="pass">{ "Password" }</label>
                    <input
                        type="password"
                        class="form-control form-control-lg"
                        id="pass"
                        placeholder="pass"
                        value={self.password.clone()}
                        onchange={callback_for!(PassChanged)}
                    />
                </div>
                <button
                    type="submit"
                    class="btn btn-primary"
                    onclick={ctx.link().callback(|e: web_sys::MouseEvent| {
                        e.prevent_default();
                        LoginMsg::SubmitClicked
                    })}
                >
                    { "Login" }
                </button>
            </form>
        </>}
    }
}
