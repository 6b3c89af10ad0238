use parking_lot::Mutex;

use crate::location::source::{LocationCallback, LocationSource, NavigateOptions};
use crate::location::subscribers::{SubscriberSet, Subscription};

/// In-memory location back-end. Keeps a flat list of visited entries so
/// push-versus-replace is observable; the last entry is the current path.
#[derive(Debug)]
pub struct MemoryLocation {
    entries: Mutex<Vec<String>>,
    subscribers: SubscriberSet,
}

impl MemoryLocation {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: Mutex::new(vec![initial.to_string()]),
            subscribers: SubscriberSet::new(),
        }
    }

    /// Every entry navigated to so far, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new("/")
    }
}

impl LocationSource for MemoryLocation {
    fn path(&self) -> String {
        self.entries
            .lock()
            .last()
            .cloned()
            .unwrap_or_else(|| "/".to_string())
    }

    fn navigate(&self, path: &str, options: NavigateOptions) {
        {
            let mut entries = self.entries.lock();

            // No-op navigation: the path is already current, nobody renotifies.
            if entries.last().is_some_and(|current| current == path) {
                return;
            }

            if options.replace {
                match entries.last_mut() {
                    Some(current) => *current = path.to_string(),
                    None => entries.push(path.to_string()),
                }
            } else {
                entries.push(path.to_string());
            }
        }

        tracing::debug!(path, replace = options.replace, "location changed");

        // The lock is released first: subscribers may read `path()` or
        // navigate again from inside the callback.
        self.subscribers.notify(path);
    }

    fn subscribe(&self, callback: LocationCallback) -> Subscription {
        self.subscribers.subscribe(callback)
    }
}
