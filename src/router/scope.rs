use std::sync::{Arc, OnceLock};

use crate::router::service::Router;

/// Per-scope memoization slot for the shared router. The first acquisition
/// within a scope constructs the router; every later acquisition returns the
/// same instance, so all consumers in the scope observe one canonical
/// location and matching policy. Separate scopes hold independent routers.
#[derive(Debug, Default)]
pub struct RouterScope {
    slot: OnceLock<Arc<Router>>,
}

impl RouterScope {
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    /// Returns the scope's router, constructing it with `init` on first use.
    pub fn acquire(&self, init: impl FnOnce() -> Router) -> Arc<Router> {
        self.slot.get_or_init(|| Arc::new(init())).clone()
    }

    /// The router, if one has been acquired in this scope already.
    pub fn get(&self) -> Option<Arc<Router>> {
        self.slot.get().cloned()
    }
}
