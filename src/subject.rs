pub mod feed;

use std::{cell::RefCell, fmt, rc::Rc};

use futures::Stream;

use crate::stream::{
    event::Event,
    observable::{Observable, ObservableType},
    observer::{AnyObserver, Observer},
    observer_list::{ObserverId, ObserverList},
    subscription::Subscription,
};

use self::feed::Feed;

struct State<T> {
    last_value: RefCell<T>,
    observers: Rc<ObserverList<T>>,
}

/// Holds a current value and broadcasts every pushed value to its subscribers.
///
/// New subscribers only receive values pushed after they subscribed; the value
/// held at subscribe time is not replayed. Clones share the same state.
pub struct Subject<T> {
    state: Rc<State<T>>,
}

impl<T> Subject<T> {
    pub fn new(value: T) -> Self {
        Self {
            state: Rc::new(State {
                last_value: RefCell::new(value),
                observers: Rc::new(ObserverList::new()),
            }),
        }
    }

    pub fn observer_count(&self) -> usize {
        self.state.observers.len()
    }
}

impl<T: Clone + 'static> Subject<T> {
    /// Stores `value` as the latest value, then delivers it to every subscriber
    /// in subscription order.
    pub fn push(&self, value: T) {
        *self.state.last_value.borrow_mut() = value.clone();

        tracing::trace!(observers = self.state.observers.len(), "subject push");

        self.state.observers.broadcast(&value);
    }

    pub fn last_value(&self) -> T {
        self.state.last_value.borrow().clone()
    }

    /// Same as [`subscribe`](ObservableType::subscribe), returning a disposal token.
    pub fn subscribe_disposable<O: Observer<T> + 'static>(&self, observer: O) -> Subscription {
        let id = self.add_observer(AnyObserver::new(observer));

        Subscription::new(Rc::downgrade(&self.state.observers), id)
    }

    fn add_observer(&self, observer: AnyObserver<T>) -> ObserverId {
        let id = self.state.observers.add(observer);

        tracing::trace!(
            observers = self.state.observers.len(),
            "subject subscribe"
        );

        id
    }

    /// Returns a future pushing every element of `stream` into this subject.
    ///
    /// The future resolves with the number of pushed elements once `stream` ends.
    pub fn feed<S: Stream<Item = T>>(&self, stream: S) -> Feed<S> {
        Feed::new(stream, self.clone())
    }
}

impl<T: Clone + 'static> ObservableType for Subject<T> {
    type Item = T;

    fn subscribe_any(&self, observer: AnyObserver<T>) {
        self.add_observer(observer);
    }

    fn as_observable(&self) -> Observable<T> {
        Observable::new(self.clone())
    }
}

impl<T: Clone + 'static> Observer<T> for Subject<T> {
    fn receive(&self, event: Event<T>) {
        self.push(event.into_value())
    }
}

impl<T> Clone for Subject<T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T: Default> Default for Subject<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Subject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject")
            .field("last_value", &*self.state.last_value.borrow())
            .field("observers", &self.state.observers.len())
            .finish()
    }
}
