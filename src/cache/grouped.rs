use super::factory::InMemoryGroupFactory;
use super::traits::{GroupFactory, GroupMatches, GroupedCache};
use crate::engine::{
    ChainedMatcher, ExactMatcher, GroupStore, PatternMatcher, RegexMatcher, StoreBuilder,
    WildcardMatcher,
};
use arc_swap::ArcSwap;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::info;

pub(crate) type StoreOf<M> = <<M as PatternMatcher>::Builder as StoreBuilder>::Store;
type GroupMap<M> = FxHashMap<Arc<str>, Arc<StoreOf<M>>>;

pub(crate) struct Shared<M: PatternMatcher> {
    pub(crate) matcher: M,
    pub(crate) trim_entries: bool,
    groups: ArcSwap<GroupMap<M>>,
}

impl<M: PatternMatcher> Shared<M> {
    /// Swaps `store` in as the group's contents. Readers holding the old map keep it until
    /// they drop their guard.
    pub(crate) fn publish(&self, group: &Arc<str>, store: Arc<StoreOf<M>>) {
        let count = store.len();
        self.groups.rcu(|current| {
            let mut next: GroupMap<M> = (**current).clone();
            next.insert(group.clone(), store.clone());
            next
        });
        info!(
            "Published group '{}' ({} matcher) with {} entries",
            group,
            self.matcher.name(),
            count
        );
    }
}

/// In-memory cache of named groups, all matched with one discipline `M`.
///
/// Cloning is cheap and yields another handle to the same groups.
pub struct InMemoryGroupedCache<M: PatternMatcher> {
    shared: Arc<Shared<M>>,
}

impl<M: PatternMatcher> Clone for InMemoryGroupedCache<M> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl InMemoryGroupedCache<ExactMatcher> {
    pub fn exact() -> Self {
        Self::new(ExactMatcher::new())
    }
}

impl InMemoryGroupedCache<RegexMatcher> {
    pub fn regex() -> Self {
        Self::new(RegexMatcher::new())
    }
}

impl InMemoryGroupedCache<WildcardMatcher> {
    pub fn wildcard() -> Self {
        Self::new(WildcardMatcher::new())
    }
}

impl InMemoryGroupedCache<ChainedMatcher> {
    pub fn chained(lowercase: bool, trim_entries: bool) -> Self {
        let matcher = if lowercase {
            ChainedMatcher::case_insensitive()
        } else {
            ChainedMatcher::new()
        };
        Self::with_trim(matcher, trim_entries)
    }
}

impl<M: PatternMatcher> InMemoryGroupedCache<M> {
    /// Entries are trimmed of surrounding whitespace before they reach the matcher.
    pub fn new(matcher: M) -> Self {
        Self::with_trim(matcher, true)
    }

    pub fn with_trim(matcher: M, trim_entries: bool) -> Self {
        Self {
            shared: Arc::new(Shared {
                matcher,
                trim_entries,
                groups: ArcSwap::from_pointee(GroupMap::<M>::default()),
            }),
        }
    }

    pub fn matcher(&self) -> &M {
        &self.shared.matcher
    }

    /// Starts staging new contents for `group`. The published contents are untouched
    /// until the returned factory finishes.
    pub fn refresh(&self, group: &str) -> InMemoryGroupFactory<M> {
        InMemoryGroupFactory::new(self.shared.clone(), Arc::from(group))
    }

    pub fn element_count(&self, group: &str) -> usize {
        self.shared
            .groups
            .load()
            .get(group)
            .map_or(0, |store| store.len())
    }

    /// Tests `candidate` against each named group. Unknown groups and groups without a
    /// matching pattern are left out of the result.
    pub fn contains<S: AsRef<str>>(&self, candidate: &str, groups: &[S]) -> GroupMatches {
        let mut matches = GroupMatches::default();
        if groups.is_empty() {
            return matches;
        }

        let candidate = self.shared.matcher.normalize_candidate(candidate);
        let published = self.shared.groups.load();

        for group in groups {
            let group = group.as_ref();
            if let Some(pattern) = published.get(group).and_then(|s| s.find(&candidate)) {
                matches.insert(group.to_string(), pattern.to_string());
            }
        }

        matches
    }

    pub fn group_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .shared
            .groups
            .load()
            .keys()
            .map(|name| name.to_string())
            .collect();
        names.sort();
        names
    }

    pub fn total_count(&self) -> usize {
        self.shared.groups.load().values().map(|s| s.len()).sum()
    }
}

impl<M: PatternMatcher> GroupedCache for InMemoryGroupedCache<M> {
    fn refresh(&self, group: &str) -> Box<dyn GroupFactory> {
        Box::new(InMemoryGroupedCache::refresh(self, group))
    }

    fn element_count(&self, group: &str) -> usize {
        InMemoryGroupedCache::element_count(self, group)
    }

    fn contains(&self, candidate: &str, groups: &[&str]) -> GroupMatches {
        InMemoryGroupedCache::contains(self, candidate, groups)
    }

    fn group_names(&self) -> Vec<String> {
        InMemoryGroupedCache::group_names(self)
    }

    fn total_count(&self) -> usize {
        InMemoryGroupedCache::total_count(self)
    }
}
