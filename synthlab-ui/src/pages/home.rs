//! Home Page
//!
//! Synthetic row generation form and backend connection settings.

use leptos::*;
use synthlab::{GenerationRequest, SessionHandler};

use crate::api;
use crate::components::InlineLoading;
use crate::state::{GlobalState, SignalPage};

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Synthetic Data Generator"</h1>
                <p class="text-gray-400 mt-1">"Generate synthetic rows from the uploaded dataset"</p>
            </div>

            <GenerateForm />

            <ApiSettings />
        </div>
    }
}

/// The "generate synthetic rows" form
#[component]
fn GenerateForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (rows, set_rows) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let request = GenerationRequest::new(rows.get());
        set_submitting.set(true);

        let state = state_for_submit.clone();
        spawn_local(async move {
            let handler = SessionHandler::new(state.backend());
            let mut page = SignalPage::new(state.clone());

            if let Err(e) = handler.generate(&request, &mut page).await {
                web_sys::console::error_1(&format!("Generate failed: {}", e).into());
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <form id="dataForm" on:submit=on_submit class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Number of rows"</label>
                    <input
                        id="rowsInput"
                        type="text"
                        prop:value=move || rows.get()
                        on:input=move |ev| set_rows.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg py-3 font-semibold transition-colors
                           flex items-center justify-center space-x-2"
                >
                    {move || if submitting.get() {
                        view! { <InlineLoading /> <span>"Generating..."</span> }.into_view()
                    } else {
                        view! { <span>"Generate"</span> }.into_view()
                    }}
                </button>
            </form>

            <p id="responseMessage" class="mt-4 text-green-400">
                {move || state.status_message.get()}
            </p>
        </section>
    }
}

/// Backend URL setting
#[component]
fn ApiSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (api_url, set_api_url) = create_signal(state.api_base.get_untracked());

    let save_url = move |_| {
        let url = api_url.get().trim_end_matches('/').to_string();
        api::set_api_base(&url);
        state.api_base.set(url);
        state.show_success("Backend URL saved");
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Backend"</h2>
            <div class="flex space-x-2">
                <input
                    type="text"
                    prop:value=move || api_url.get()
                    on:input=move |ev| set_api_url.set(event_target_value(&ev))
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <button
                    on:click=save_url
                    class="px-4 py-3 bg-primary-600 hover:bg-primary-700
                           rounded-lg font-medium transition-colors"
                >
                    "Save"
                </button>
            </div>
        </section>
    }
}
