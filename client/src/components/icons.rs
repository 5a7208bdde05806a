//! Inline SVG icons for the toggle and send buttons.

use leptos::prelude::*;

/// Speech bubble with dots; shown while the panel is closed.
#[component]
pub fn ChatIcon() -> impl IntoView {
    view! {
        <svg class="icon" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
            <path d="M12 3C6.48 3 2 6.58 2 11c0 2.13 1.05 4.06 2.75 5.49L4 21l4.7-2.35c1.02.23 2.13.35 3.3.35 5.52 0 10-3.58 10-8s-4.48-8-10-8z"/>
            <circle cx="8" cy="11" r="1.25" fill="#fff"/>
            <circle cx="12" cy="11" r="1.25" fill="#fff"/>
            <circle cx="16" cy="11" r="1.25" fill="#fff"/>
        </svg>
    }
}

/// Cross; shown while the panel is open.
#[component]
pub fn CloseIcon() -> impl IntoView {
    view! {
        <svg
            class="icon"
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2.5"
            stroke-linecap="round"
            aria-hidden="true"
        >
            <line x1="6" y1="6" x2="18" y2="18"/>
            <line x1="18" y1="6" x2="6" y2="18"/>
        </svg>
    }
}

/// Paper plane.
#[component]
pub fn SendIcon() -> impl IntoView {
    view! {
        <svg
            class="icon"
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <line x1="22" y1="2" x2="11" y2="13"/>
            <polygon points="22 2 15 22 11 13 2 9 22 2"/>
        </svg>
    }
}
