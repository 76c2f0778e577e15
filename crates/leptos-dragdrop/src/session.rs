//! Drag Session Controller
//!
//! Two-state machine (Idle / Dragging). On release the captured item is moved
//! through [`ListStore::transfer`], which must validate before mutating so a
//! rejected move leaves every list untouched.

use std::fmt::Debug;

use thiserror::Error;

use crate::geometry::Point;
use crate::resolver::InsertionTarget;

/// Anything that can be picked up and carried between lists
pub trait Draggable: Clone {
    type Id: Clone + Eq + Debug;

    fn drag_id(&self) -> Self::Id;
}

/// Reasons a commit was refused. The store is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReorderError {
    #[error("list {0} is not tracked")]
    UnknownList(String),
    #[error("item {item} is not in list {list}")]
    MissingItem { item: String, list: String },
    #[error("index {index} is out of bounds for a list of {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Ordered lists addressed by `L` holding items of type `T`
pub trait ListStore<T: Draggable, L> {
    /// Move the item `id` out of `from` and into `to` at `index`.
    ///
    /// `index` is relative to `to` with the moved item already removed.
    /// Returns the final position of the item.
    fn transfer(&mut self, id: &T::Id, from: &L, to: &L, index: usize) -> Result<usize, ReorderError>;
}

/// State captured between pointer-down and pointer-up
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession<T, L> {
    /// Value copy; the source list may change independently
    pub item: T,
    pub source: L,
    pub pointer: Point,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DragPhase<T, L> {
    Idle,
    Dragging(DragSession<T, L>),
}

/// Result of ending a session
#[derive(Clone, Debug, PartialEq)]
pub enum DropOutcome<L> {
    /// Nothing was being dragged
    Idle,
    /// No target at release time; the item stays where it was
    Kept,
    Moved { list: L, index: usize },
    Rejected(ReorderError),
}

#[derive(Clone, Debug, PartialEq)]
pub struct DragController<T, L> {
    phase: DragPhase<T, L>,
    target: Option<InsertionTarget<L>>,
}

impl<T, L> Default for DragController<T, L> {
    fn default() -> Self {
        Self {
            phase: DragPhase::Idle,
            target: None,
        }
    }
}

impl<T, L> DragController<T, L>
where
    T: Draggable,
    L: Clone + PartialEq + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &DragPhase<T, L> {
        &self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession<T, L>> {
        match &self.phase {
            DragPhase::Dragging(session) => Some(session),
            DragPhase::Idle => None,
        }
    }

    pub fn dragged(&self) -> Option<&T> {
        self.session().map(|session| &session.item)
    }

    pub fn pointer(&self) -> Option<Point> {
        self.session().map(|session| session.pointer)
    }

    pub fn target(&self) -> Option<&InsertionTarget<L>> {
        self.target.as_ref()
    }

    /// Start dragging `item` out of `source`.
    ///
    /// Resolves once right away so the indicator shows before the first
    /// move. Ignored while another session is active.
    pub fn begin<R>(&mut self, item: T, source: L, pointer: Point, resolve: R) -> bool
    where
        R: FnOnce(&DragSession<T, L>) -> Option<InsertionTarget<L>>,
    {
        if let DragPhase::Dragging(active) = &self.phase {
            tracing::debug!(active = ?active.item.drag_id(), "drag already in progress, ignoring pointer-down");
            return false;
        }

        tracing::debug!(item = ?item.drag_id(), source = ?source, "drag started");
        let session = DragSession { item, source, pointer };
        self.target = resolve(&session);
        self.phase = DragPhase::Dragging(session);
        true
    }

    /// Track the pointer and replace (or clear) the current target
    pub fn pointer_move<R>(&mut self, pointer: Point, resolve: R) -> bool
    where
        R: FnOnce(&DragSession<T, L>) -> Option<InsertionTarget<L>>,
    {
        let DragPhase::Dragging(session) = &mut self.phase else {
            return false;
        };
        session.pointer = pointer;
        self.target = resolve(session);
        true
    }

    /// Pointer released: commit to the current target if there is one
    pub fn release<S: ListStore<T, L>>(&mut self, store: &mut S) -> DropOutcome<L> {
        self.finish(store, "pointer-up")
    }

    /// Pointer left the container.
    ///
    /// Commits the last computed target exactly like [`Self::release`]; a drag
    /// that wanders out keeps its last valid insertion point.
    pub fn leave<S: ListStore<T, L>>(&mut self, store: &mut S) -> DropOutcome<L> {
        self.finish(store, "pointer-leave")
    }

    /// Discard the session without touching any list
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.reset();
        was_dragging
    }

    fn finish<S: ListStore<T, L>>(&mut self, store: &mut S, trigger: &str) -> DropOutcome<L> {
        let phase = std::mem::replace(&mut self.phase, DragPhase::Idle);
        let target = self.target.take();

        let DragPhase::Dragging(session) = phase else {
            return DropOutcome::Idle;
        };
        let id = session.item.drag_id();

        let Some(target) = target else {
            tracing::debug!(item = ?id, trigger, "drop outside every list, item kept in place");
            return DropOutcome::Kept;
        };

        match store.transfer(&id, &session.source, &target.list, target.index) {
            Ok(index) => {
                tracing::debug!(item = ?id, from = ?session.source, to = ?target.list, index, trigger, "item moved");
                DropOutcome::Moved {
                    list: target.list,
                    index,
                }
            }
            Err(err) => {
                tracing::warn!(item = ?id, trigger, error = %err, "drop rejected");
                DropOutcome::Rejected(err)
            }
        }
    }

    fn reset(&mut self) {
        self.phase = DragPhase::Idle;
        self.target = None;
    }
}
