use std::{fmt, rc::Rc};

use super::{
    observer::{AnonymousObserver, AnyObserver, Observer},
    rx::combine_latest::CombineLatest2,
};

/// Something that pushes elements to its subscribers over time.
pub trait ObservableType {
    type Item;

    /// Registers an already erased observer.
    fn subscribe_any(&self, observer: AnyObserver<Self::Item>);

    /// Erases the concrete type, for composing observables generically.
    fn as_observable(&self) -> Observable<Self::Item>;

    fn subscribe<O>(&self, observer: O)
    where
        Self: Sized,
        Self::Item: 'static,
        O: Observer<Self::Item> + 'static,
    {
        self.subscribe_any(AnyObserver::new(observer))
    }

    fn subscribe_next<F>(&self, on_next: F)
    where
        Self: Sized,
        Self::Item: 'static,
        F: Fn(Self::Item) + 'static,
    {
        self.subscribe(AnonymousObserver::on_next(on_next))
    }
}

/// Erased handle over any [`ObservableType`].
pub struct Observable<T> {
    source: Rc<dyn ObservableType<Item = T>>,
}

impl<T> Observable<T> {
    pub fn new<O: ObservableType<Item = T> + 'static>(source: O) -> Self {
        Self {
            source: Rc::new(source),
        }
    }
}

impl<T: Clone + 'static> Observable<T> {
    /// See [`combine_latest`](crate::stream::rx::combine_latest::combine_latest).
    pub fn combine_latest<S1, S2, F>(source1: &S1, source2: &S2, selector: F) -> Self
    where
        S1: ObservableType,
        S2: ObservableType,
        S1::Item: Clone + 'static,
        S2::Item: Clone + 'static,
        F: Fn(&S1::Item, &S2::Item) -> T + 'static,
    {
        CombineLatest2::new(source1.as_observable(), source2.as_observable(), selector)
            .as_observable()
    }
}

impl<T> ObservableType for Observable<T> {
    type Item = T;

    fn subscribe_any(&self, observer: AnyObserver<T>) {
        self.source.subscribe_any(observer)
    }

    fn as_observable(&self) -> Observable<T> {
        self.clone()
    }
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
        }
    }
}

impl<T> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod test {
    use std::{cell::RefCell, rc::Rc};

    use crate::prelude::*;

    #[test]
    fn smoke() {
        let subject = Subject::new(0);
        let observable = subject.as_observable();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        observable.as_observable().subscribe_next(move |it| sink.borrow_mut().push(it));

        subject.push(1);
        subject.push(2);

        assert_eq!(*seen.borrow(), [1, 2]);
    }

    #[test]
    fn static_combine_latest() {
        let a = Subject::new(1);
        let b = Subject::new(10);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let sum = Observable::combine_latest(&a, &b, |a, b| a + b);

        sum.subscribe_next(move |it| sink.borrow_mut().push(it));

        a.push(2);
        b.push(20);

        assert_eq!(*seen.borrow(), [22]);
    }
}
