use std::{fmt, rc::Weak};

use super::observer_list::{ObserverId, ObserverList};

/// Disposal token returned by the `subscribe_disposable` family.
///
/// Dropping the token does not unsubscribe; call [`dispose`](Subscription::dispose).
#[must_use = "dropping a Subscription keeps the observer subscribed"]
pub struct Subscription {
    entry: Box<dyn SubscriptionEntry>,
}

trait SubscriptionEntry {
    fn remove(&self) -> bool;
    fn is_live(&self) -> bool;
}

struct ListEntry<T> {
    list: Weak<ObserverList<T>>,
    id: ObserverId,
}

impl<T> SubscriptionEntry for ListEntry<T> {
    fn remove(&self) -> bool {
        self.list
            .upgrade()
            .map(|list| list.remove(self.id))
            .unwrap_or(false)
    }

    fn is_live(&self) -> bool {
        self.list
            .upgrade()
            .map(|list| list.contains(self.id))
            .unwrap_or(false)
    }
}

impl Subscription {
    pub(crate) fn new<T: 'static>(list: Weak<ObserverList<T>>, id: ObserverId) -> Self {
        Self {
            entry: Box::new(ListEntry { list, id }),
        }
    }

    /// Removes the observer from its broadcaster.
    ///
    /// A no-op if the broadcaster has already been dropped.
    pub fn dispose(self) {
        let removed = self.entry.remove();

        tracing::debug!(removed, "subscription disposed");
    }

    pub fn is_disposed(&self) -> bool {
        !self.entry.is_live()
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("is_disposed", &self.is_disposed())
            .finish()
    }
}
