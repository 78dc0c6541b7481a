use super::grouped::{Shared, StoreOf};
use super::traits::GroupFactory;
use crate::engine::{GroupStore, PatternMatcher, StoreBuilder};
use crate::error::{CacheError, Result};
use std::sync::Arc;
use tracing::trace;

/// Stages entries for one group of one [`InMemoryGroupedCache`](super::InMemoryGroupedCache).
///
/// Dropping a factory without finishing it discards everything it staged.
pub struct InMemoryGroupFactory<M: PatternMatcher> {
    cache: Arc<Shared<M>>,
    group: Arc<str>,
    staging: Option<M::Builder>,
    // Set by the first finish; the buffer is frozen from then on.
    published: Option<Arc<StoreOf<M>>>,
}

impl<M: PatternMatcher> InMemoryGroupFactory<M> {
    pub(crate) fn new(cache: Arc<Shared<M>>, group: Arc<str>) -> Self {
        let staging = cache.matcher.new_builder();
        Self {
            cache,
            group,
            staging: Some(staging),
            published: None,
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn is_finished(&self) -> bool {
        self.published.is_some()
    }

    /// Offers `raw` to the cache's matcher.
    ///
    /// Returns `Ok(false)` when the matcher rejects the entry's shape and an error when the
    /// entry has the right shape but does not compile. Neither changes the staged contents.
    /// An accepted entry equal to one already staged returns `Ok(true)` without growing
    /// [`count`](Self::count).
    pub fn add_entry(&mut self, raw: &str) -> Result<bool> {
        let Some(staging) = self.staging.as_mut() else {
            return Err(CacheError::FactoryFinished {
                group: self.group.to_string(),
            });
        };

        let entry = if self.cache.trim_entries {
            raw.trim()
        } else {
            raw
        };

        match self.cache.matcher.try_accept(entry)? {
            Some(pattern) => {
                staging.push(pattern);
                Ok(true)
            }
            None => {
                trace!(
                    "Entry '{}' rejected by {} matcher for group '{}'",
                    entry,
                    self.cache.matcher.name(),
                    self.group
                );
                Ok(false)
            }
        }
    }

    /// Distinct entries staged so far; after `finish`, the size of the published store.
    pub fn count(&self) -> usize {
        match (&self.staging, &self.published) {
            (Some(staging), _) => staging.len(),
            (None, Some(store)) => store.len(),
            (None, None) => 0,
        }
    }

    /// Builds the staged entries into a store and publishes it under the bound group.
    /// Finishing again republishes the same store.
    pub fn finish(&mut self) {
        let store = match (&self.published, self.staging.take()) {
            (Some(store), _) => store.clone(),
            (None, staging) => {
                let staging = staging.unwrap_or_else(|| self.cache.matcher.new_builder());
                Arc::new(staging.build())
            }
        };
        self.cache.publish(&self.group, store.clone());
        self.published = Some(store);
    }
}

impl<M: PatternMatcher> GroupFactory for InMemoryGroupFactory<M> {
    fn add_entry(&mut self, raw: &str) -> Result<bool> {
        InMemoryGroupFactory::add_entry(self, raw)
    }

    fn count(&self) -> usize {
        InMemoryGroupFactory::count(self)
    }

    fn finish(&mut self) {
        InMemoryGroupFactory::finish(self)
    }
}
