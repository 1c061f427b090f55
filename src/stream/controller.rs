use std::{
    collections::VecDeque,
    task::{Poll, Waker},
};

/// Buffer between a push-based observer and a polled stream.
pub(crate) struct Controller<T> {
    buffer: VecDeque<T>,
    waker: Option<Waker>,
}

impl<T> Controller<T> {
    pub(crate) fn new() -> Self {
        Self {
            buffer: VecDeque::new(),
            waker: None,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.buffer.len()
    }

    pub(crate) fn push(&mut self, value: T) {
        self.buffer.push_back(value);

        if let Some(waker) = self.waker.take() {
            waker.wake();
        }
    }

    /// There is no completion signal, so an empty buffer is always pending.
    pub(crate) fn pop(&mut self, waker: &Waker) -> Poll<T> {
        match self.buffer.pop_front() {
            Some(it) => Poll::Ready(it),
            None => {
                self.waker = Some(waker.clone());

                Poll::Pending
            }
        }
    }
}
