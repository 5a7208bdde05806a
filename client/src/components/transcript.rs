//! Transcript rendering: message bubbles, source citations, loading row.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `WidgetState` only. Assistant bodies go through the markdown
//! renderer; user bodies are shown as escaped text.

use leptos::prelude::*;

use crate::net::types::SourceRef;
use crate::state::widget::{Message, Role, WidgetState};
use crate::util::format::{source_entry_text, source_percent_suffix};
use crate::util::markdown::{render_markdown_html, safe_href};

pub const LOADING_TEXT: &str = "🤔 Thinking...";

/// Scrolling list of messages followed by the loading indicator.
#[component]
pub fn Transcript(state: RwSignal<WidgetState>) -> impl IntoView {
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = state.with(|s| (s.transcript.len(), s.is_loading));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    view! {
        <div class="chat-messages" node_ref=messages_ref aria-live="polite">
            <For
                each=move || state.with(|s| s.transcript.clone())
                key=|msg: &Message| msg.id.clone()
                children=move |msg: Message| view! { <MessageBubble message=msg/> }
            />
            {move || {
                state
                    .with(|s| s.is_loading)
                    .then(|| view! { <div class="loading">{LOADING_TEXT}</div> })
            }}
        </div>
    }
}

#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let class = format!("message {}", message.role.as_str());
    let sources = message.has_sources().then(|| message.sources.clone());

    let body = match message.role {
        Role::Assistant => {
            let rendered = render_markdown_html(&message.content);
            view! { <div class="markdown" inner_html=rendered></div> }.into_any()
        }
        Role::User => view! {
            <div class="markdown">
                <span>{message.content}</span>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class=class>
            {body}
            {sources.map(|sources| view! { <SourceList sources=sources/> })}
        </div>
    }
}

#[component]
fn SourceList(sources: Vec<SourceRef>) -> impl IntoView {
    view! {
        <div class="sources">
            <strong>"Sources:"</strong>
            <ul>
                {sources
                    .into_iter()
                    .map(|src| {
                        let entry = source_entry_text(&src);
                        let suffix = source_percent_suffix(&src);
                        let href = safe_href(&src.url).map(str::to_owned);
                        view! {
                            <li title=entry>
                                <a href=href target="_blank" rel="noopener noreferrer">
                                    {src.url}
                                </a>
                                {suffix}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
