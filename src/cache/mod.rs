mod factory;
mod grouped;
mod traits;

pub use self::factory::InMemoryGroupFactory;
pub use self::grouped::InMemoryGroupedCache;
pub use self::traits::{GroupFactory, GroupMatches, GroupedCache};

/// Regex, wildcard and exact entries behind one set of group names.
pub type ChainedGroupedCache = InMemoryGroupedCache<crate::engine::ChainedMatcher>;
