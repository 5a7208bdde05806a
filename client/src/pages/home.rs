//! Host page: static heading and subtitle with the chat widget mounted.

use leptos::prelude::*;

use crate::components::chat_widget::ChatWidget;
use crate::config::WidgetConfig;

#[component]
pub fn HomePage() -> impl IntoView {
    let config = use_context::<WidgetConfig>().unwrap_or_default();

    view! {
        <div class="host-page">
            <h1 class="host-page__title">{config.page_title}</h1>
            <p class="host-page__subtitle">{config.page_subtitle}</p>
            <ChatWidget/>
        </div>
    }
}
