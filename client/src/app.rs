//! Root application component and the server-rendered HTML shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{CONFIG_ELEMENT_ID, WidgetConfig};
use crate::pages::home::HomePage;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `config` is embedded as JSON so the hydrated app renders with the same
/// values the server used.
pub fn shell(options: LeptosOptions, config: WidgetConfig) -> impl IntoView {
    let embedded = config.to_embedded_json();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script type="application/json" id=CONFIG_ELEMENT_ID inner_html=embedded></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Uses the `WidgetConfig` context when the server provides one, otherwise
/// the config embedded in the page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<WidgetConfig>().unwrap_or_else(WidgetConfig::from_page);
    let title = config.page_title.clone();
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/chat-widget.css"/>
        <Title text=title/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
