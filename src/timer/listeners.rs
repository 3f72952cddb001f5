use std::{
    cell::Cell,
    rc::Rc,
    sync::mpsc::{self, Receiver, Sender},
};

use super::Tick;

type TickCallback = Box<dyn FnMut(Tick)>;

enum Sink {
    Callback(TickCallback),
    Channel(Sender<Tick>),
}

struct Listener {
    active: Rc<Cell<bool>>,
    sink: Sink,
}

/// Handle returned when registering a tick listener.
///
/// Dropping the handle leaves the listener registered; call
/// [`TickSubscription::unsubscribe`] to detach it.
#[derive(Debug)]
pub struct TickSubscription {
    active: Rc<Cell<bool>>,
}

impl TickSubscription {
    /// Detach the listener. It receives no further ticks, including ticks
    /// still being dispatched when this is called from another listener.
    pub fn unsubscribe(self) {
        self.active.set(false);
    }

    /// Whether the listener is still attached.
    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

/// Registered tick listeners, dispatched in registration order.
#[derive(Default)]
pub(super) struct TickListeners {
    entries: Vec<Listener>,
}

impl TickListeners {
    pub(super) fn subscribe(&mut self, callback: TickCallback) -> TickSubscription {
        let active = Rc::new(Cell::new(true));
        self.entries.push(Listener {
            active: Rc::clone(&active),
            sink: Sink::Callback(callback),
        });
        TickSubscription { active }
    }

    pub(super) fn channel(&mut self) -> Receiver<Tick> {
        let (tx, rx) = mpsc::channel();
        self.entries.push(Listener {
            active: Rc::new(Cell::new(true)),
            sink: Sink::Channel(tx),
        });
        rx
    }

    pub(super) fn emit(&mut self, tick: Tick) {
        self.entries.retain_mut(|listener| {
            if !listener.active.get() {
                return false;
            }
            match &mut listener.sink {
                Sink::Callback(callback) => {
                    callback(tick);
                    listener.active.get()
                }
                // A closed receiver means the consumer went away.
                Sink::Channel(tx) => tx.send(tick).is_ok(),
            }
        });
    }

    pub(super) fn len(&self) -> usize {
        self.entries
            .iter()
            .filter(|listener| listener.active.get())
            .count()
    }
}
