use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use futures::{
    stream::{Fuse, FusedStream},
    Stream, StreamExt,
};
use pin_project_lite::pin_project;

use super::Subject;

pin_project! {
    /// Future for the [`feed`](Subject::feed) method.
    #[must_use = "futures do nothing unless polled"]
    pub struct Feed<S: Stream> {
        #[pin]
        stream: Fuse<S>,
        subject: Subject<S::Item>,
        count: usize,
    }
}

impl<S: Stream> Feed<S> {
    pub(crate) fn new(stream: S, subject: Subject<S::Item>) -> Self {
        Self {
            stream: stream.fuse(),
            subject,
            count: 0,
        }
    }

    pub fn is_terminated(&self) -> bool {
        self.stream.is_terminated()
    }
}

impl<S> Future for Feed<S>
where
    S: Stream,
    S::Item: Clone + 'static,
{
    type Output = usize;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        loop {
            match this.stream.as_mut().poll_next(cx) {
                Poll::Ready(Some(value)) => {
                    this.subject.push(value);
                    *this.count += 1;
                }
                Poll::Ready(None) => {
                    tracing::debug!(count = *this.count, "feed done");

                    return Poll::Ready(*this.count);
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

#[cfg(test)]
mod test {
    use std::{cell::RefCell, rc::Rc};

    use futures::{executor::block_on, stream, StreamExt};
    use futures_time::time::Duration;

    use crate::prelude::*;

    #[test]
    fn smoke() {
        let subject = Subject::new(0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        subject.subscribe_next(move |it| sink.borrow_mut().push(it));

        let count = block_on(subject.feed(stream::iter(1..=3)));

        assert_eq!(count, 3);
        assert_eq!(*seen.borrow(), [1, 2, 3]);
        assert_eq!(subject.last_value(), 3);
    }

    #[test]
    fn timed() {
        let subject = Subject::new(0usize);
        let ticks = futures_time::stream::interval(Duration::from_millis(5))
            .take(4)
            .enumerate()
            .map(|(index, _)| index + 1);

        let count = block_on(subject.feed(ticks));

        assert_eq!(count, 4);
        assert_eq!(subject.last_value(), 4);
    }
}
