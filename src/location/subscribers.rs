use std::any::Any;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use hashbrown::HashMap as FastHashMap;
use parking_lot::Mutex;

use crate::location::source::LocationCallback;

type SharedCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Fan-out helper a location back-end embeds to manage its subscriber set.
///
/// Notification iterates over a snapshot, so a callback may subscribe or
/// unsubscribe (including itself) without corrupting the in-progress
/// fan-out. A panicking subscriber is isolated and reported; co-subscribers
/// are still notified. Invocation order is unspecified.
#[derive(Default)]
pub struct SubscriberSet {
    inner: Arc<SubscriberInner>,
}

impl fmt::Debug for SubscriberSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriberSet")
            .field("subscribers", &self.len())
            .finish()
    }
}

#[derive(Default)]
struct SubscriberInner {
    next_id: AtomicU64,
    entries: Mutex<FastHashMap<u64, SharedCallback>>,
}

impl SubscriberSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, callback: LocationCallback) -> Subscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.entries.lock().insert(id, Arc::from(callback));

        Subscription {
            id,
            set: Arc::downgrade(&self.inner),
            removed: AtomicBool::new(false),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.entries.lock().is_empty()
    }

    pub fn notify(&self, path: &str) {
        let snapshot: Vec<(u64, SharedCallback)> = self
            .inner
            .entries
            .lock()
            .iter()
            .map(|(id, callback)| (*id, callback.clone()))
            .collect();

        for (id, callback) in snapshot {
            // Skip entries unsubscribed earlier in this same fan-out.
            if !self.inner.entries.lock().contains_key(&id) {
                continue;
            }

            if let Err(payload) = catch_unwind(AssertUnwindSafe(|| callback(path))) {
                tracing::error!(
                    subscriber = id,
                    path,
                    panic = panic_message(payload.as_ref()),
                    "location subscriber panicked during fan-out"
                );
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "non-string panic payload"
    }
}

/// Handle for one registration with a [`SubscriberSet`]. `unsubscribe`
/// removes exactly that registration and is idempotent.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    set: Weak<SubscriberInner>,
    removed: AtomicBool,
}

impl Subscription {
    pub fn unsubscribe(&self) {
        if self.removed.swap(true, Ordering::AcqRel) {
            return;
        }
        if let Some(inner) = self.set.upgrade() {
            inner.entries.lock().remove(&self.id);
        }
    }

    pub fn is_active(&self) -> bool {
        !self.removed.load(Ordering::Acquire)
    }
}
