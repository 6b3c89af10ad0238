mod memory;
mod source;
mod subscribers;

pub use memory::MemoryLocation;
pub use source::{LocationCallback, LocationSource, NavigateOptions};
pub use subscribers::{SubscriberSet, Subscription};
