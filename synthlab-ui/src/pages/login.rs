//! Login Page

use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};
use std::rc::Rc;
use synthlab::{Credentials, LoginOutcome, SessionHandler};

use crate::components::LoadingOverlay;
use crate::state::{GlobalState, SignalPage};

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let credentials = Credentials::new(username.get(), password.get());
        set_submitting.set(true);

        let state = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let handler = SessionHandler::new(state.backend());
            let go: Rc<dyn Fn(&str)> =
                Rc::new(move |route: &str| navigate(route, NavigateOptions::default()));
            let mut page = SignalPage::new(state.clone()).with_navigation(go);

            match handler.login(&credentials, &mut page).await {
                Ok(LoginOutcome::Success { token, .. }) => state.token.set(token),
                Ok(LoginOutcome::Rejected { .. }) => {}
                Err(e) => {
                    web_sys::console::error_1(&format!("Login failed: {}", e).into());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto space-y-6">
            <h1 class="text-3xl font-bold">"Login"</h1>

            <LoadingOverlay loading=submitting>
                <form on:submit=on_submit class="bg-gray-800 rounded-xl p-6 space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Username"</label>
                        <input
                            id="username"
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <button
                        type="submit"
                        class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-3
                               font-semibold transition-colors"
                    >
                        "Login"
                    </button>
                </form>
            </LoadingOverlay>
        </div>
    }
}
