//! Observer contract between the engine and a presentation layer.
//!
//! The controller never owns its observers. It keeps [`Weak`] handles, so an
//! observer lives exactly as long as whoever created it keeps the [`Rc`].
//! Notification is synchronous and follows registration order.
//!
//! Observers must not call back into the controller while being notified.
//! With `&mut` access this cannot happen in safe code; a controller shared
//! through a `RefCell` panics on such re-entry. Likewise, an observer that
//! is already borrowed when a notification arrives causes a panic rather
//! than a silently lost event.

use crate::action::GameEvent;
use crate::types::{Coord, GameState, Symbol};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::trace;

/// Receives board and state notifications from a game controller.
///
/// Delivery borrows the observer's `RefCell` mutably. Holding a borrow of
/// a registered observer across `play` or `reset` panics.
pub trait GameObserver {
    /// A mark was placed. Fired once per accepted move, before the state
    /// notification of the same move.
    fn on_board_change(&mut self, coords: Coord, symbol: Symbol);

    /// The round state after a move or reset. `next_turn` is `Some` only
    /// while the round is in progress.
    fn on_state_change(&mut self, state: GameState, next_turn: Option<Symbol>);
}

/// Ordered, non-owning collection of observers.
#[derive(Default)]
pub struct ObserverList {
    handles: Vec<Weak<RefCell<dyn GameObserver>>>,
}

impl ObserverList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an observer; it only sees events from now on.
    pub fn register<O: GameObserver + 'static>(&mut self, observer: &Rc<RefCell<O>>) {
        let handle: Rc<RefCell<dyn GameObserver>> = observer.clone();
        self.handles.push(Rc::downgrade(&handle));
    }

    /// Number of observers still alive.
    pub fn len(&self) -> usize {
        self.handles.iter().filter(|h| h.strong_count() > 0).count()
    }

    /// Returns true if no live observer is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Delivers a board change to every live observer.
    pub fn notify_board_change(&mut self, coords: Coord, symbol: Symbol) {
        self.each(|observer| observer.on_board_change(coords, symbol));
    }

    /// Delivers a state change to every live observer.
    pub fn notify_state_change(&mut self, state: GameState, next_turn: Option<Symbol>) {
        self.each(|observer| observer.on_state_change(state, next_turn));
    }

    fn each(&mut self, mut deliver: impl FnMut(&mut (dyn GameObserver + 'static))) {
        self.handles.retain(|handle| handle.strong_count() > 0);
        for (slot, handle) in self.handles.iter().enumerate() {
            let Some(cell) = handle.upgrade() else {
                continue;
            };
            trace!(slot, "Notifying observer");
            deliver(&mut *cell.borrow_mut());
        }
    }
}

impl std::fmt::Debug for ObserverList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverList")
            .field("live", &self.len())
            .field("registered", &self.handles.len())
            .finish()
    }
}

/// Observer that records every notification it receives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a log already wrapped for registration.
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Events in the order they arrived.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Removes and returns all recorded events.
    pub fn take(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl GameObserver for EventLog {
    fn on_board_change(&mut self, coords: Coord, symbol: Symbol) {
        self.events.push(GameEvent::BoardChanged { coords, symbol });
    }

    fn on_state_change(&mut self, state: GameState, next_turn: Option<Symbol>) {
        self.events.push(GameEvent::StateChanged { state, next_turn });
    }
}
