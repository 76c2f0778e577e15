//! Card Group Component
//!
//! Group box with header and link count.

use leptos::prelude::*;

#[component]
pub fn CardGroup(
    title: String,
    count: usize,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="card-group-box">
            <header class="card-group-header">
                <h2 class="card-group-title">{title}</h2>
                <span class="card-group-count">{format!("{} links", count)}</span>
            </header>
            <div class="card-group-items">
                {children()}
            </div>
        </section>
    }
}
