use observe::ObserveStream;

use crate::stream::observable::ObservableType;

pub mod observe;

impl<T: ?Sized> RxObservableExt for T where T: ObservableType {}
pub trait RxObservableExt: ObservableType {
    /// Subscribes a buffering observer and exposes the pushed values as a [`Stream`](futures::Stream).
    ///
    /// The returned stream never terminates, as observables have no completion signal.
    fn to_stream(&self) -> ObserveStream<Self::Item>
    where
        Self: Sized,
        Self::Item: 'static,
    {
        ObserveStream::new(self)
    }
}
