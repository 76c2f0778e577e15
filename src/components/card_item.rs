//! Card Item Component
//!
//! A single link card: gradient thumbnail, title, subtitle.

use leptos::prelude::*;

use crate::models::Item;

/// Link card. `follower` renders the lifted copy that tracks the pointer.
#[component]
pub fn CardItem(
    item: Item,
    #[prop(optional)] follower: bool,
) -> impl IntoView {
    let Item { title, subtitle, image, gradient, .. } = item;
    let alt = title.clone();
    let thumb = (!image.is_empty()).then(|| view! { <img class="card-image" src=image alt=alt /> });

    view! {
        <div class=if follower { "card card-follower" } else { "card" }>
            <div class="card-thumb" style=format!("background: {};", gradient)>
                {thumb}
            </div>
            <div class="card-body">
                <h3 class="card-title">{title}</h3>
                <p class="card-subtitle">{subtitle}</p>
            </div>
            <span class="card-chevron">"›"</span>
        </div>
    }
}
