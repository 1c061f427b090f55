use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use super::{event::Event, observer::AnyObserver, observer::Observer};

pub(crate) type ObserverId = u64;

struct Entry<T> {
    id: ObserverId,
    observer: AnyObserver<T>,
    is_active: Cell<bool>,
}

/// Ordered broadcast list shared by every broadcaster in this crate.
///
/// A broadcast iterates a snapshot of the entries, so observers may subscribe,
/// dispose or push re-entrantly. Entries added mid-broadcast miss the in-flight
/// value, entries removed mid-broadcast are skipped if not reached yet.
pub(crate) struct ObserverList<T> {
    entries: RefCell<Vec<Rc<Entry<T>>>>,
    next_id: Cell<ObserverId>,
}

impl<T> ObserverList<T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    pub(crate) fn add(&self, observer: AnyObserver<T>) -> ObserverId {
        let id = self.next_id.get();

        self.next_id.set(id + 1);
        self.entries.borrow_mut().push(Rc::new(Entry {
            id,
            observer,
            is_active: Cell::new(true),
        }));

        id
    }

    pub(crate) fn remove(&self, id: ObserverId) -> bool {
        let mut entries = self.entries.borrow_mut();

        match entries.iter().position(|it| it.id == id) {
            Some(index) => {
                entries.remove(index).is_active.set(false);
                true
            }
            None => false,
        }
    }

    pub(crate) fn contains(&self, id: ObserverId) -> bool {
        self.entries.borrow().iter().any(|it| it.id == id)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}

impl<T: Clone> ObserverList<T> {
    pub(crate) fn broadcast(&self, value: &T) {
        let snapshot = self.entries.borrow().clone();

        for entry in snapshot.iter().filter(|it| it.is_active.get()) {
            entry.observer.receive(Event::Next(value.clone()));
        }
    }
}
