use crate::error::Result;
use rustc_hash::FxHashMap;

/// Group name -> source text of the pattern that matched in that group.
pub type GroupMatches = FxHashMap<String, String>;

/// Staging area for one group. Nothing added here is visible until [`finish`](Self::finish).
pub trait GroupFactory: Send {
    /// `Ok(false)` when the entry has the wrong shape for the cache's discipline.
    fn add_entry(&mut self, raw: &str) -> Result<bool>;

    /// Distinct entries accepted so far. Duplicate literals are accepted but counted once.
    fn count(&self) -> usize;

    /// Publishes the staged entries, replacing the group's current contents.
    fn finish(&mut self);
}

/// Read side and refresh entry point of a grouped cache.
pub trait GroupedCache: Send + Sync {
    fn refresh(&self, group: &str) -> Box<dyn GroupFactory>;

    fn element_count(&self, group: &str) -> usize;

    fn contains(&self, candidate: &str, groups: &[&str]) -> GroupMatches;

    /// Names of all published groups, sorted.
    fn group_names(&self) -> Vec<String>;

    fn total_count(&self) -> usize {
        self.group_names()
            .iter()
            .map(|group| self.element_count(group))
            .sum()
    }
}
