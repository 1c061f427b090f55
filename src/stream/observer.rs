use std::{fmt, rc::Rc};

use super::event::Event;

/// Something that can receive the events of an observable.
///
/// Implement [`receive`](Observer::receive) directly to build a reusable observer type,
/// or use [`AnonymousObserver`] to wrap a closure.
pub trait Observer<T> {
    fn receive(&self, event: Event<T>);

    fn notify(&self, value: T) {
        self.receive(Event::Next(value))
    }
}

/// Observer backed by a closure.
pub struct AnonymousObserver<T> {
    handler: Box<dyn Fn(Event<T>)>,
}

impl<T> AnonymousObserver<T> {
    pub fn new<F: Fn(Event<T>) + 'static>(handler: F) -> Self {
        Self {
            handler: Box::new(handler),
        }
    }

    /// Adapts a handler that only cares about the unwrapped value.
    pub fn on_next<F: Fn(T) + 'static>(on_next: F) -> Self
    where
        T: 'static,
    {
        Self::new(move |event: Event<T>| match event {
            Event::Next(value) => on_next(value),
        })
    }
}

impl<T> Observer<T> for AnonymousObserver<T> {
    fn receive(&self, event: Event<T>) {
        (self.handler)(event)
    }
}

impl<T> fmt::Debug for AnonymousObserver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnonymousObserver").finish_non_exhaustive()
    }
}

/// Type-erased observer.
///
/// Broadcasters store a homogeneous list of these, whatever the concrete
/// observer type was at subscribe time. Clones forward to the same observer.
pub struct AnyObserver<T> {
    observer: Rc<dyn Fn(Event<T>)>,
}

impl<T> AnyObserver<T> {
    pub fn new<O: Observer<T> + 'static>(observer: O) -> Self
    where
        T: 'static,
    {
        Self {
            observer: Rc::new(move |event: Event<T>| observer.receive(event)),
        }
    }

    pub fn from_fn<F: Fn(Event<T>) + 'static>(handler: F) -> Self {
        Self {
            observer: Rc::new(handler),
        }
    }
}

impl<T> Observer<T> for AnyObserver<T> {
    fn receive(&self, event: Event<T>) {
        (self.observer)(event)
    }
}

impl<T> Clone for AnyObserver<T> {
    fn clone(&self) -> Self {
        Self {
            observer: Rc::clone(&self.observer),
        }
    }
}

impl<T> fmt::Debug for AnyObserver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyObserver").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod test {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    struct Recorder {
        seen: Rc<RefCell<Vec<usize>>>,
    }

    impl Observer<usize> for Recorder {
        fn receive(&self, event: Event<usize>) {
            self.seen.borrow_mut().push(*event);
        }
    }

    #[test]
    fn smoke() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let observer = AnyObserver::new(Recorder {
            seen: Rc::clone(&seen),
        });

        observer.notify(1);
        observer.clone().notify(2);

        assert_eq!(*seen.borrow(), [1, 2]);
    }

    #[test]
    fn anonymous_on_next() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let observer = AnonymousObserver::on_next(move |it: &'static str| {
            sink.borrow_mut().push(it);
        });

        observer.notify("a");
        observer.receive(Event::Next("b"));

        assert_eq!(*seen.borrow(), ["a", "b"]);
    }

    #[test]
    fn erased_closure() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let observer = AnyObserver::from_fn(move |event: Event<i32>| {
            sink.borrow_mut().push(event.into_value() * 2);
        });

        observer.notify(21);

        assert_eq!(*seen.borrow(), [42]);
    }
}
