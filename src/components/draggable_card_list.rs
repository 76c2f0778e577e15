//! Draggable Card List Component
//!
//! Groups and ungrouped cards on one drag surface. The container owns the
//! move/up/leave handlers; each card starts a drag on mousedown.
//!
//! Every measurable element carries a `data-dnd-key` attribute. Resolving a
//! pointer position re-measures all of them first, so the registry always
//! reflects the layout of the current event turn.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::{CardGroup, CardItem, DragGhost, DragIndicator, InsertionPoint};
use crate::context::{use_app_context, CardDnd};
use crate::layout::LayoutKey;
use crate::models::{Item, ItemId, ListId};
use crate::store::Board;

#[component]
pub fn DraggableCardList(board: RwSignal<Board>) -> impl IntoView {
    let ctx = use_app_context();
    let dnd = ctx.dnd;
    let indicator = ctx.config().indicator;
    let resolver = InsertionResolver::new(indicator);

    let container = NodeRef::<Div>::new();
    let registry = StoredValue::new(PositionRegistry::<LayoutKey>::new());

    let resolve = move |session: &DragSession<Item, ListId>| {
        let root = container.get_untracked()?;
        let origin = rect_of(&root);
        let dragged = LayoutKey::Item(session.item.id.clone());
        let lists = board.with_untracked(|b| b.tracked_lists(indicator.group_header_offset));

        registry
            .try_update_value(|registry| {
                let measured = measure_tracked(&root, registry);
                tracing::trace!(measured, frame = registry.frame(), "layout measured");
                resolver.resolve(session.pointer, Some(&dragged), &lists, registry, &origin)
            })
            .flatten()
    };

    let dragged_id = Memo::new(move |_| dnd.dragged_id());
    let ungrouped = Memo::new(move |_| board.with(|b| b.ungrouped.clone()));

    view! {
        <div
            class="card-list"
            node_ref=container
            on:mousemove=make_on_mousemove(dnd, resolve)
            on:mouseup=make_on_mouseup(dnd, board)
            on:mouseleave=make_on_mouseleave(dnd, board)
        >
            <For
                each=move || board.get().groups
                key=|group| {
                    (
                        group.id.clone(),
                        group.title.clone(),
                        group.items.iter().map(|i| i.id.clone()).collect::<Vec<_>>(),
                    )
                }
                children=move |group| {
                    let region = LayoutKey::Group(group.id.clone()).to_string();
                    let count = group.items.len();
                    let list = Some(group.id);
                    let title = group.title;
                    let items = group.items;
                    view! {
                        <div class="card-group" data-dnd-key=region>
                            <CardGroup title=title count=count>
                                {render_cards(items, list, dnd, dragged_id, resolve)}
                            </CardGroup>
                        </div>
                    }
                }
            />

            <div class="card-ungrouped" data-dnd-key=LayoutKey::Ungrouped.to_string()>
                {move || render_cards(ungrouped.get(), None, dnd, dragged_id, resolve)}
            </div>

            <DragIndicator />
            <DragGhost />
        </div>
    }
}

/// Insertion point, then each card followed by another insertion point
fn render_cards<R>(
    items: Vec<Item>,
    list: ListId,
    dnd: CardDnd,
    dragged_id: Memo<Option<ItemId>>,
    resolve: R,
) -> impl IntoView
where
    R: Fn(&DragSession<Item, ListId>) -> Option<InsertionTarget<ListId>> + Copy + Send + Sync + 'static,
{
    let cards = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let id = item.id.clone();
            let key = LayoutKey::Item(id.clone()).to_string();
            let on_mousedown = make_on_mousedown(dnd, item.clone(), list.clone(), resolve);
            let style = move || {
                if dragged_id.with(|d| d.as_deref() == Some(id.as_str())) {
                    "opacity: 0.5;"
                } else {
                    "opacity: 1;"
                }
            };

            view! {
                <div class="card-slot" data-dnd-key=key style=style on:mousedown=on_mousedown>
                    <CardItem item=item />
                </div>
                <InsertionPoint list=list.clone() index=index + 1 />
            }
        })
        .collect_view();

    view! {
        <InsertionPoint list=list.clone() index=0 />
        {cards}
    }
}
