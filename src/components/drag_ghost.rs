//! Drag Ghost Component
//!
//! Lifted copy of the dragged card that follows the pointer.

use leptos::prelude::*;

use crate::components::CardItem;
use crate::context::use_app_context;

#[component]
pub fn DragGhost() -> impl IntoView {
    let ctx = use_app_context();
    let offset = ctx.config().ghost_offset;

    // Keyed on the item so pointer moves don't rebuild the card
    let dragged = Memo::new(move |_| ctx.dnd.dragged());

    let transform = move || {
        ctx.dnd
            .pointer()
            .map(|p| format!("transform: translate({}px, {}px);", p.x - offset.x, p.y - offset.y))
            .unwrap_or_default()
    };

    view! {
        <Show when=move || dragged.with(Option::is_some)>
            <div class="drag-ghost" style=transform>
                {move || dragged.get().map(|item| view! { <CardItem item=item follower=true /> })}
            </div>
        </Show>
    }
}
