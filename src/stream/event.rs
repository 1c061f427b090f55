use std::ops::Deref;

/// A single element pushed through an observable.
///
/// There is no error or completion variant: a sequence of events is unbounded.
#[derive(Debug)]
pub enum Event<T> {
    Next(T),
}

impl<T> Event<T> {
    pub fn value(&self) -> &T {
        match self {
            Event::Next(it) => it,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Event::Next(it) => it,
        }
    }
}

impl<T> Deref for Event<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.value()
    }
}

impl<T: Clone> Clone for Event<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Next(it) => Self::Next(it.clone()),
        }
    }
}

impl<T: PartialEq> PartialEq for Event<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl<T> From<T> for Event<T> {
    fn from(value: T) -> Self {
        Event::Next(value)
    }
}
