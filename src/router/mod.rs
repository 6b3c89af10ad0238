mod deferred;
mod options;
mod scope;
mod service;

pub use deferred::{OneShot, RedirectTask};
pub use options::RouterOptions;
pub use scope::RouterScope;
pub use service::{Navigator, ResolvedRoute, Router};
