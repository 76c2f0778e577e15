//! Leptos DragDrop Utilities
//!
//! Pointer-driven reordering of items between ordered lists.
//!
//! The core is DOM-free: [`PositionRegistry`] holds measured rectangles,
//! [`InsertionResolver`] turns a pointer position into an [`InsertionTarget`],
//! and [`DragController`] runs the drag session and commits through a
//! [`ListStore`]. [`DndSignals`] wraps the controller in a Leptos signal and
//! the `make_on_*` helpers bind it to mouse events.

mod dom;
mod geometry;
mod hover;
mod registry;
mod resolver;
mod session;

pub use dom::{measure_tracked, pointer_of, rect_of, LAYOUT_KEY_ATTR};
pub use geometry::{Point, Rect};
pub use hover::{GlooTimers, HoverReveal, TimerHost};
pub use registry::PositionRegistry;
pub use resolver::{IndicatorConfig, IndicatorGeometry, InsertionResolver, InsertionTarget, TrackedList};
pub use session::{DragController, DragPhase, DragSession, Draggable, DropOutcome, ListStore, ReorderError};

use std::fmt::Debug;

use leptos::prelude::*;

/// Reactive drag state shared by every handler of one drag surface
pub struct DndSignals<T, L> {
    controller: RwSignal<DragController<T, L>>,
}

impl<T, L> Clone for DndSignals<T, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, L> Copy for DndSignals<T, L> {}

pub fn create_dnd_signals<T, L>() -> DndSignals<T, L>
where
    T: Send + Sync + 'static,
    L: Send + Sync + 'static,
{
    DndSignals {
        controller: RwSignal::new(DragController::default()),
    }
}

impl<T, L> DndSignals<T, L>
where
    T: Draggable + Send + Sync + 'static,
    L: Clone + PartialEq + Debug + Send + Sync + 'static,
{
    pub fn is_dragging(&self) -> bool {
        self.controller.with(|c| c.is_dragging())
    }

    pub fn is_dragging_untracked(&self) -> bool {
        self.controller.with_untracked(|c| c.is_dragging())
    }

    pub fn dragged(&self) -> Option<T> {
        self.controller.with(|c| c.dragged().cloned())
    }

    pub fn dragged_id(&self) -> Option<T::Id> {
        self.controller.with(|c| c.dragged().map(Draggable::drag_id))
    }

    pub fn target(&self) -> Option<InsertionTarget<L>> {
        self.controller.with(|c| c.target().cloned())
    }

    pub fn pointer(&self) -> Option<Point> {
        self.controller.with(|c| c.pointer())
    }

    pub fn begin<R>(&self, item: T, source: L, pointer: Point, resolve: R) -> bool
    where
        R: FnOnce(&DragSession<T, L>) -> Option<InsertionTarget<L>>,
    {
        self.controller
            .try_update(|c| c.begin(item, source, pointer, resolve))
            .unwrap_or(false)
    }

    pub fn pointer_move<R>(&self, pointer: Point, resolve: R) -> bool
    where
        R: FnOnce(&DragSession<T, L>) -> Option<InsertionTarget<L>>,
    {
        self.controller
            .try_update(|c| c.pointer_move(pointer, resolve))
            .unwrap_or(false)
    }

    pub fn release<S: ListStore<T, L>>(&self, store: &mut S) -> DropOutcome<L> {
        self.controller
            .try_update(|c| c.release(store))
            .unwrap_or(DropOutcome::Idle)
    }

    pub fn leave<S: ListStore<T, L>>(&self, store: &mut S) -> DropOutcome<L> {
        self.controller
            .try_update(|c| c.leave(store))
            .unwrap_or(DropOutcome::Idle)
    }

    pub fn cancel(&self) -> bool {
        self.controller.try_update(|c| c.cancel()).unwrap_or(false)
    }
}

/// Create mousedown handler for a draggable item.
/// Primary button only; the browser's own drag/selection is suppressed.
pub fn make_on_mousedown<T, L, R>(
    dnd: DndSignals<T, L>,
    item: T,
    source: L,
    resolve: R,
) -> impl Fn(web_sys::MouseEvent) + 'static
where
    T: Draggable + Send + Sync + 'static,
    L: Clone + PartialEq + Debug + Send + Sync + 'static,
    R: Fn(&DragSession<T, L>) -> Option<InsertionTarget<L>> + Clone + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        dnd.begin(item.clone(), source.clone(), pointer_of(&ev), resolve.clone());
    }
}

/// Create mousemove handler for the drag surface
pub fn make_on_mousemove<T, L, R>(dnd: DndSignals<T, L>, resolve: R) -> impl Fn(web_sys::MouseEvent) + 'static
where
    T: Draggable + Send + Sync + 'static,
    L: Clone + PartialEq + Debug + Send + Sync + 'static,
    R: Fn(&DragSession<T, L>) -> Option<InsertionTarget<L>> + Clone + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if !dnd.is_dragging_untracked() {
            return;
        }
        dnd.pointer_move(pointer_of(&ev), resolve.clone());
    }
}

/// Create mouseup handler committing into `store`
pub fn make_on_mouseup<T, L, S>(dnd: DndSignals<T, L>, store: RwSignal<S>) -> impl Fn(web_sys::MouseEvent) + 'static
where
    T: Draggable + Send + Sync + 'static,
    L: Clone + PartialEq + Debug + Send + Sync + 'static,
    S: ListStore<T, L> + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        finish_into(dnd, store, |dnd, s| dnd.release(s));
    }
}

/// Create mouseleave handler for the drag surface.
/// Leaving commits the last target, same as releasing.
pub fn make_on_mouseleave<T, L, S>(dnd: DndSignals<T, L>, store: RwSignal<S>) -> impl Fn(web_sys::MouseEvent) + 'static
where
    T: Draggable + Send + Sync + 'static,
    L: Clone + PartialEq + Debug + Send + Sync + 'static,
    S: ListStore<T, L> + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        finish_into(dnd, store, |dnd, s| dnd.leave(s));
    }
}

fn finish_into<T, L, S>(
    dnd: DndSignals<T, L>,
    store: RwSignal<S>,
    finish: impl FnOnce(&DndSignals<T, L>, &mut S) -> DropOutcome<L>,
) where
    T: Draggable + Send + Sync + 'static,
    L: Clone + PartialEq + Debug + Send + Sync + 'static,
    S: ListStore<T, L> + Send + Sync + 'static,
{
    if !dnd.is_dragging_untracked() {
        return;
    }
    // Only notify list subscribers when something actually moved
    store.maybe_update(|s| matches!(finish(&dnd, s), DropOutcome::Moved { .. }));
}
