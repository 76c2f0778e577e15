//! UI Components
//!
//! Leptos components for the link card list.

mod card_group;
mod card_item;
mod drag_ghost;
mod drag_indicator;
mod draggable_card_list;
mod insertion_point;

pub use card_group::CardGroup;
pub use card_item::CardItem;
pub use drag_ghost::DragGhost;
pub use drag_indicator::DragIndicator;
pub use draggable_card_list::DraggableCardList;
pub use insertion_point::InsertionPoint;
