//! Link Cards App
//!
//! Page shell around the draggable card list.

use leptos::prelude::*;

use crate::components::DraggableCardList;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::Board;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let board = RwSignal::new(Board::seed());
    tracing::info!(
        groups = board.with_untracked(|b| b.groups.len()),
        items = board.with_untracked(Board::item_count),
        "board loaded"
    );

    // Provide context to all children
    provide_context(AppContext::new(config));

    view! {
        <main class="page">
            <div class="page-inner">
                <h1 class="page-title">"Links"</h1>
                <p class="page-blurb">
                    "Drag cards to reorder them or move them between groups. "
                    "Rest on the gap between two cards to add a link there."
                </p>
                <DraggableCardList board=board />
            </div>
        </main>
    }
}
