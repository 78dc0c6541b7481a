//! Grouped membership cache for domain blocklists.
//!
//! A cache maps group names (one per list source) to immutable pattern stores. Lookups ask
//! which of a set of groups contain a pattern matching a candidate name. Groups are
//! replaced wholesale: a [`GroupFactory`] stages new contents off to the side and
//! publishes them with a single atomic swap, so concurrent lookups always see either the
//! old or the new contents of a group.
//!
//! Three matching disciplines are available, one per cache:
//! - [`ExactMatcher`]: literal equality, hash-set backed.
//! - [`RegexMatcher`]: `/expr/` entries, unanchored search.
//! - [`WildcardMatcher`]: glob entries such as `*.example.com`, whole-name match.
//!
//! [`ChainedMatcher`] combines all three, routing each entry by its shape.

pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod init;
pub mod loader;

pub use cache::{
    ChainedGroupedCache, GroupFactory, GroupMatches, GroupedCache, InMemoryGroupFactory,
    InMemoryGroupedCache,
};
pub use engine::{ChainedMatcher, ExactMatcher, PatternMatcher, RegexMatcher, WildcardMatcher};
pub use error::{CacheError, PatternError};
