//! Drag Indicator Component
//!
//! Horizontal line marking where the dragged card would land.

use leptos::prelude::*;

use crate::context::use_app_context;

/// Positioned relative to the card list container
#[component]
pub fn DragIndicator() -> impl IntoView {
    let ctx = use_app_context();
    let geometry = Memo::new(move |_| ctx.dnd.target().map(|t| t.geometry));

    view! {
        <Show when=move || geometry.get().is_some()>
            <div
                class="drag-indicator"
                style=move || {
                    geometry
                        .get()
                        .map(|g| format!("top: {}px; left: {}px; width: {}px;", g.top, g.left, g.width))
                        .unwrap_or_default()
                }
            />
        </Show>
    }
}
