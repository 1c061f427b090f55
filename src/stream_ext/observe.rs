use std::{
    cell::RefCell,
    fmt,
    pin::Pin,
    rc::Rc,
    task::{Context, Poll},
};

use futures::Stream;

use crate::stream::{
    controller::Controller,
    observable::ObservableType,
    observer::AnonymousObserver,
};

/// Stream for the [`to_stream`](crate::RxObservableExt::to_stream) method.
#[must_use = "streams do nothing unless polled"]
pub struct ObserveStream<T> {
    controller: Rc<RefCell<Controller<T>>>,
}

impl<T: 'static> ObserveStream<T> {
    pub(crate) fn new<O: ObservableType<Item = T>>(source: &O) -> Self {
        let controller = Rc::new(RefCell::new(Controller::new()));
        let weak = Rc::downgrade(&controller);

        source.subscribe(AnonymousObserver::on_next(move |value: T| {
            if let Some(controller) = weak.upgrade() {
                controller.borrow_mut().push(value);
            }
        }));

        Self { controller }
    }
}

impl<T> Stream for ObserveStream<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.controller.borrow_mut().pop(cx.waker()).map(Some)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.controller.borrow().len(), None)
    }
}

impl<T> fmt::Debug for ObserveStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserveStream")
            .field("buffered", &self.controller.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use std::rc::Rc;

    use futures::{executor::block_on, StreamExt};

    use crate::prelude::*;

    #[test]
    fn smoke() {
        let subject = Subject::new(0);
        let stream = subject.to_stream();

        subject.push(1);
        subject.push(2);
        subject.push(3);

        block_on(async {
            let all_events = stream.take(3).collect::<Vec<_>>().await;

            assert_eq!(all_events, [1, 2, 3]);
        });
    }

    #[test]
    fn combined() {
        let password = Subject::new(String::new());
        let confirm = Subject::new(String::new());
        let matches = combine_latest(&password, &confirm, |a, b| !a.is_empty() && a == b);
        let stream = matches.to_stream();

        password.push("ab".to_owned());
        confirm.push("ab".to_owned());
        confirm.push("abc".to_owned());

        block_on(async {
            let all_events = stream.take(2).collect::<Vec<_>>().await;

            assert_eq!(all_events, [true, false]);
        });
    }

    #[test]
    fn dropped_stream_stops_buffering() {
        let subject = Subject::new(0);
        let stream = subject.to_stream();
        let controller = Rc::downgrade(&stream.controller);

        subject.push(1);
        assert_eq!(controller.upgrade().map(|it| it.borrow().len()), Some(1));

        drop(stream);
        subject.push(2);

        assert!(controller.upgrade().is_none());
        assert_eq!(subject.observer_count(), 1);
    }
}
