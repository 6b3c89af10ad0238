use std::hash::{DefaultHasher, Hash, Hasher};

use parking_lot::Mutex;

use crate::location::NavigateOptions;
use crate::router::service::Router;

/// Navigation requests queued during a resolution pass, executed when the
/// host commits ([`Router::settle`]).
#[derive(Debug, Default)]
pub(crate) struct DeferredNavigations {
    queue: Mutex<Vec<PendingNavigation>>,
}

#[derive(Debug)]
pub(crate) struct PendingNavigation {
    pub path: String,
    pub options: NavigateOptions,
}

impl DeferredNavigations {
    pub fn push(&self, path: &str, options: NavigateOptions) {
        self.queue.lock().push(PendingNavigation {
            path: path.to_string(),
            options,
        });
    }

    pub fn drain(&self) -> Vec<PendingNavigation> {
        std::mem::take(&mut *self.queue.lock())
    }
}

/// At-most-once guard keyed by a dependency fingerprint. The task runs again
/// only when the fingerprint changes.
#[derive(Debug, Default)]
pub struct OneShot {
    last: Mutex<Option<u64>>,
}

impl OneShot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `task` unless it already ran for this `fingerprint`. Returns
    /// whether the task ran.
    pub fn run(&self, fingerprint: u64, task: impl FnOnce()) -> bool {
        let mut last = self.last.lock();
        if *last == Some(fingerprint) {
            return false;
        }
        *last = Some(fingerprint);
        task();
        true
    }
}

/// A redirect modeled as a deferred one-shot effect: queued on mount, run
/// once after the resolution pass settles, re-armed only when its inputs
/// change.
#[derive(Debug)]
pub struct RedirectTask {
    target: String,
    options: NavigateOptions,
    guard: OneShot,
}

impl RedirectTask {
    pub fn new(target: &str, options: NavigateOptions) -> Self {
        Self {
            target: target.to_string(),
            options,
            guard: OneShot::new(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Called on every render; queues the navigation at most once per
    /// distinct (target, options) input set. Returns whether it queued.
    pub fn mount(&self, router: &Router) -> bool {
        let fingerprint = self.fingerprint();
        self.guard.run(fingerprint, || {
            router.schedule_navigate(&self.target, self.options);
        })
    }

    fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.target.hash(&mut hasher);
        self.options.replace.hash(&mut hasher);
        hasher.finish()
    }
}
