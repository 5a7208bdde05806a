//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! widget config is fixed at startup and shared read-only.

use std::sync::Arc;

use chat_widget::config::WidgetConfig;

#[derive(Clone, Debug)]
pub struct AppState {
    pub widget: Arc<WidgetConfig>,
}

impl AppState {
    pub fn new(widget: WidgetConfig) -> Self {
        Self { widget: Arc::new(widget) }
    }
}
