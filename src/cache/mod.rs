// Cache module for in-memory response caching.
// Bounds GitHub API traffic by memoizing results for a fixed TTL.

pub mod clock;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use store::{Cache, CachedData};
