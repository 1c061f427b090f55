use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

use crate::stream::{
    observable::{Observable, ObservableType},
    observer::{AnonymousObserver, AnyObserver, Observer},
    observer_list::{ObserverId, ObserverList},
    subscription::Subscription,
};

struct State<E1, E2, R> {
    source_1: Observable<E1>,
    source_2: Observable<E2>,
    latest_value_1: RefCell<Option<E1>>,
    latest_value_2: RefCell<Option<E2>>,
    selector: Box<dyn Fn(&E1, &E2) -> R>,
    observers: Rc<ObserverList<R>>,
}

impl<E1: Clone, E2: Clone, R: Clone> State<E1, E2, R> {
    fn on_next_current(&self) {
        let latest_value_1 = self.latest_value_1.borrow().clone();
        let latest_value_2 = self.latest_value_2.borrow().clone();

        if let (Some(value_1), Some(value_2)) = (latest_value_1, latest_value_2) {
            let result = (self.selector)(&value_1, &value_2);

            tracing::trace!(observers = self.observers.len(), "combine_latest emit");

            self.observers.broadcast(&result);
        }
    }
}

/// Observable of a value derived from the latest element of two upstreams.
///
/// Nothing is emitted until both upstreams have pushed at least once. After that,
/// every upstream element recomputes the value with the cached element of the
/// other side. Subscribing recomputes the current value, if any, and re-delivers it
/// to every subscriber, not only to the one that just joined.
///
/// The upstream subscriptions only hold a weak reference to this combinator:
/// once every handle is dropped, upstream elements are ignored.
pub struct CombineLatest2<E1, E2, R> {
    state: Rc<State<E1, E2, R>>,
}

impl<E1, E2, R> CombineLatest2<E1, E2, R>
where
    E1: Clone + 'static,
    E2: Clone + 'static,
    R: Clone + 'static,
{
    pub fn new<F>(source_1: Observable<E1>, source_2: Observable<E2>, selector: F) -> Self
    where
        F: Fn(&E1, &E2) -> R + 'static,
    {
        let state = Rc::new(State {
            source_1,
            source_2,
            latest_value_1: RefCell::new(None),
            latest_value_2: RefCell::new(None),
            selector: Box::new(selector),
            observers: Rc::new(ObserverList::new()),
        });

        let weak = Rc::downgrade(&state);

        state
            .source_1
            .subscribe(AnonymousObserver::on_next(move |value: E1| {
                with_state(&weak, |state| {
                    *state.latest_value_1.borrow_mut() = Some(value);
                    state.on_next_current();
                })
            }));

        let weak = Rc::downgrade(&state);

        state
            .source_2
            .subscribe(AnonymousObserver::on_next(move |value: E2| {
                with_state(&weak, |state| {
                    *state.latest_value_2.borrow_mut() = Some(value);
                    state.on_next_current();
                })
            }));

        Self { state }
    }

    /// Same as [`subscribe`](ObservableType::subscribe), returning a disposal token.
    pub fn subscribe_disposable<O: Observer<R> + 'static>(&self, observer: O) -> Subscription {
        let id = self.add_observer(AnyObserver::new(observer));

        Subscription::new(Rc::downgrade(&self.state.observers), id)
    }

    fn add_observer(&self, observer: AnyObserver<R>) -> ObserverId {
        let id = self.state.observers.add(observer);

        tracing::trace!(
            observers = self.state.observers.len(),
            "combine_latest subscribe"
        );

        self.state.on_next_current();

        id
    }

    pub fn observer_count(&self) -> usize {
        self.state.observers.len()
    }
}

fn with_state<E1, E2, R>(weak: &Weak<State<E1, E2, R>>, f: impl FnOnce(&State<E1, E2, R>)) {
    match weak.upgrade() {
        Some(state) => f(&state),
        None => tracing::debug!("combine_latest dropped, ignoring upstream element"),
    }
}

impl<E1, E2, R> ObservableType for CombineLatest2<E1, E2, R>
where
    E1: Clone + 'static,
    E2: Clone + 'static,
    R: Clone + 'static,
{
    type Item = R;

    fn subscribe_any(&self, observer: AnyObserver<R>) {
        self.add_observer(observer);
    }

    fn as_observable(&self) -> Observable<R> {
        Observable::new(self.clone())
    }
}

impl<E1, E2, R> Clone for CombineLatest2<E1, E2, R> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<E1, E2, R> fmt::Debug for CombineLatest2<E1, E2, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CombineLatest2")
            .field("observers", &self.state.observers.len())
            .finish_non_exhaustive()
    }
}

/// Combines the latest elements of two observables with `selector`.
pub fn combine_latest<S1, S2, R, F>(source_1: &S1, source_2: &S2, selector: F) -> Observable<R>
where
    S1: ObservableType,
    S2: ObservableType,
    S1::Item: Clone + 'static,
    S2::Item: Clone + 'static,
    R: Clone + 'static,
    F: Fn(&S1::Item, &S2::Item) -> R + 'static,
{
    Observable::combine_latest(source_1, source_2, selector)
}
