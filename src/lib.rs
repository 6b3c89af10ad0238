//! Client-side route matching and location subscription for component-based
//! UIs: compile route patterns once, test them against the current path, and
//! get notified when the path changes.

pub mod link;
pub mod location;
pub mod path;
pub mod pattern;
pub mod router;

pub use link::{ClickModifiers, LinkHandler, MouseButton, NodeProps, PointerClick, click_navigates, decorate};
pub use location::{LocationCallback, LocationSource, MemoryLocation, NavigateOptions, SubscriberSet, Subscription};
pub use pattern::{CompiledPattern, MatchResult, PatternCache, PatternError, RouteParams, WILDCARD_KEY};
pub use router::{Navigator, OneShot, RedirectTask, ResolvedRoute, Router, RouterOptions, RouterScope};
