//! A small push-based reactive core.
//!
//! [`Subject`](subject::Subject) holds a value and broadcasts every pushed value to its
//! subscribers, [`CombineLatest2`](stream::rx::combine_latest::CombineLatest2) derives a
//! value from the latest elements of two observables. Delivery is synchronous and
//! happens in subscription order on the pushing thread. Handles are `Rc` based, so an
//! observable graph is confined to the thread that built it.
pub mod stream;
pub mod stream_ext;
pub mod subject;

pub use stream_ext::RxObservableExt;

pub mod prelude {
    pub use crate::stream::event::*;
    pub use crate::stream::observable::*;
    pub use crate::stream::observer::*;
    pub use crate::stream::rx::combine_latest::*;
    pub use crate::stream::subscription::*;
    pub use crate::stream_ext::RxObservableExt;
    pub use crate::subject::feed::*;
    pub use crate::subject::*;
}
