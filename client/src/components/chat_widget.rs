//! Floating chat widget: toggle button plus the chat panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the widget's `WidgetState` signal. User events call the state
//! transitions; the one network call per turn runs in `spawn_local` and feeds
//! its outcome back through `complete_submit`.

#[cfg(test)]
#[path = "chat_widget_test.rs"]
mod chat_widget_test;

use leptos::prelude::*;

use crate::components::icons::{ChatIcon, CloseIcon, SendIcon};
use crate::components::transcript::Transcript;
use crate::config::WidgetConfig;
use crate::state::widget::WidgetState;

/// Accessible label for the toggle button.
pub fn toggle_label(is_open: bool) -> &'static str {
    if is_open { "Close chat" } else { "Open chat" }
}

/// Whether a keydown in the input should submit the draft.
pub fn is_submit_key(key: &str, composing: bool) -> bool {
    key == "Enter" && !composing
}

/// The chat widget. Reads its endpoint and labels from the `WidgetConfig` context.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let config = use_context::<WidgetConfig>().unwrap_or_default();
    let endpoint_url = StoredValue::new(config.endpoint_url);
    let header = StoredValue::new(config.header_title);
    let placeholder = StoredValue::new(config.input_placeholder);
    let tooltip = config.toggle_tooltip;

    let state = RwSignal::new(WidgetState::default());
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let is_open = move || state.with(|s| s.is_open);

    Effect::new(move || {
        if is_open() {
            #[cfg(feature = "hydrate")]
            {
                if let Some(input_el) = input_ref.get() {
                    let _ = input_el.focus();
                }
            }
        }
    });

    let do_send = move || {
        let Some(query) = state.try_update(WidgetState::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let endpoint = endpoint_url.get_value();
            log::debug!("chat query submitted ({} chars)", query.len());
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::send_query(&endpoint, &query).await;
                if let Err(err) = &outcome {
                    log::warn!("chat request to {endpoint} failed: {err}");
                }
                state.update(|s| s.complete_submit(outcome));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (query, endpoint_url);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key(), ev.is_composing()) {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <button
            type="button"
            class="chat-icon"
            title=tooltip
            aria-label=move || toggle_label(is_open())
            aria-expanded=move || is_open().to_string()
            on:click=move |_| state.update(WidgetState::toggle_open)
        >
            {move || {
                if is_open() { view! { <CloseIcon/> }.into_any() } else { view! { <ChatIcon/> }.into_any() }
            }}
        </button>

        <Show when=is_open>
            <div class="chatbox" role="dialog" aria-label=header.get_value()>
                <div class="chat-header">{header.get_value()}</div>

                <Transcript state=state/>

                <div class="chat-input">
                    <input
                        type="text"
                        placeholder=placeholder.get_value()
                        node_ref=input_ref
                        prop:value=move || state.with(|s| s.draft_input.clone())
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            state.update(|s| s.set_draft_input(text));
                        }
                        on:keydown=on_keydown
                    />
                    <button
                        type="button"
                        aria-label="Send"
                        disabled=move || state.with(|s| s.is_loading)
                        on:click=move |_| do_send()
                    >
                        <SendIcon/>
                    </button>
                </div>
            </div>
        </Show>
    }
}
