//! Delayed Hover Reveal
//!
//! Reveals an affordance only after the pointer has rested on it for a fixed
//! delay. At most one timer is pending per hover session; leaving, a drag
//! starting, or dropping the [`HoverReveal`] cancels it.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;

/// Schedules deferred callbacks. Dropping the returned handle cancels the
/// callback if it has not fired yet.
pub trait TimerHost {
    type Pending;

    fn defer(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Pending;
}

/// Browser timers via `setTimeout`
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTimers;

impl TimerHost for GlooTimers {
    type Pending = Timeout;

    fn defer(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, callback)
    }
}

pub struct HoverReveal<H: TimerHost> {
    host: H,
    delay: Duration,
    pending: Option<H::Pending>,
    /// Token of the live timer; 0 when nothing is pending
    armed: Rc<Cell<u64>>,
    next_token: u64,
    revealed: Rc<Cell<bool>>,
    drag_active: bool,
    on_change: Rc<dyn Fn(bool)>,
}

impl<H: TimerHost> HoverReveal<H> {
    /// `on_change` is called with the new visibility whenever it flips
    pub fn new(host: H, delay: Duration, on_change: impl Fn(bool) + 'static) -> Self {
        Self {
            host,
            delay,
            pending: None,
            armed: Rc::new(Cell::new(0)),
            next_token: 0,
            revealed: Rc::new(Cell::new(false)),
            drag_active: false,
            on_change: Rc::new(on_change),
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed.get()
    }

    pub fn is_pending(&self) -> bool {
        self.armed.get() != 0
    }

    /// Pointer entered: (re)start the delay unless a drag is running
    pub fn enter(&mut self) {
        if self.drag_active {
            return;
        }
        self.cancel_pending();

        self.next_token += 1;
        let token = self.next_token;
        self.armed.set(token);

        let armed = Rc::clone(&self.armed);
        let revealed = Rc::clone(&self.revealed);
        let on_change = Rc::clone(&self.on_change);
        let callback = Box::new(move || {
            // A cancelled or superseded timer must never reveal
            if armed.get() != token {
                return;
            }
            armed.set(0);
            if !revealed.replace(true) {
                on_change(true);
            }
        });
        self.pending = Some(self.host.defer(self.delay, callback));
    }

    /// Pointer left: cancel any pending reveal and hide
    pub fn leave(&mut self) {
        self.cancel_pending();
        self.hide();
    }

    /// A drag starting suppresses the affordance until it ends
    pub fn set_drag_active(&mut self, active: bool) {
        self.drag_active = active;
        if active {
            self.cancel_pending();
            self.hide();
        }
    }

    fn cancel_pending(&mut self) {
        self.armed.set(0);
        self.pending = None;
    }

    fn hide(&self) {
        if self.revealed.replace(false) {
            (self.on_change)(false);
        }
    }
}

impl<H: TimerHost> Drop for HoverReveal<H> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
