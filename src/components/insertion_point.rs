//! Insertion Point Component
//!
//! Thin strip between cards. Resting on it reveals a line and a "+" after the
//! hover delay; nothing is revealed while a card is being dragged.

use leptos::prelude::*;
use leptos_dragdrop::{GlooTimers, HoverReveal};

use crate::context::use_app_context;
use crate::models::ListId;

#[component]
pub fn InsertionPoint(
    /// List the new card would go into
    list: ListId,
    /// Position the new card would take
    index: usize,
) -> impl IntoView {
    let ctx = use_app_context();
    let (revealed, set_revealed) = signal(false);

    // Dropped with this component's owner, which cancels a pending timer
    let hover = StoredValue::new_local(HoverReveal::new(
        GlooTimers,
        ctx.config().hover_delay(),
        move |visible| set_revealed.set(visible),
    ));

    Effect::new(move |_| {
        let dragging = ctx.is_dragging();
        hover.update_value(|h| h.set_drag_active(dragging));
    });

    let label = list.unwrap_or_else(|| "ungrouped".to_string());
    let on_click = move |_| {
        tracing::info!(list = %label, index, "add new item here");
    };

    view! {
        <div
            class=move || {
                if revealed.get() && !ctx.is_dragging() { "insertion-point visible" } else { "insertion-point" }
            }
            on:mouseenter=move |_| hover.update_value(|h| h.enter())
            on:mouseleave=move |_| hover.update_value(|h| h.leave())
            on:click=on_click
        >
            <div class="insertion-line"></div>
            <div class="insertion-plus">"+"</div>
        </div>
    }
}
