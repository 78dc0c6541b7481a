use crate::error::PatternError;
use std::borrow::Cow;

/// A matcher-normalized entry, owning its compiled form.
pub trait CompiledPattern: Send + Sync + 'static {
    /// Text reported back when this pattern matches.
    fn source(&self) -> &str;

    fn matches(&self, candidate: &str) -> bool;
}

/// The immutable contents of one published group.
pub trait GroupStore: Send + Sync + 'static {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the source text of a stored pattern matching `candidate`.
    fn find(&self, candidate: &str) -> Option<&str>;
}

/// Staging buffer that freezes into a [`GroupStore`].
pub trait StoreBuilder: Default + Send + 'static {
    type Pattern: CompiledPattern;
    type Store: GroupStore;

    fn push(&mut self, pattern: Self::Pattern);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn build(self) -> Self::Store;
}

/// One matching discipline. A cache is bound to exactly one of these for its lifetime.
pub trait PatternMatcher: Send + Sync + 'static {
    type Pattern: CompiledPattern;
    type Builder: StoreBuilder<Pattern = Self::Pattern>;

    /// Short discipline name, used in logs.
    fn name(&self) -> &'static str;

    /// `Ok(None)` means the entry has the wrong shape for this discipline.
    /// `Err` means it had the right shape but did not compile.
    fn try_accept(&self, raw: &str) -> Result<Option<Self::Pattern>, PatternError>;

    /// Empty staging buffer for one refresh.
    fn new_builder(&self) -> Self::Builder {
        Self::Builder::default()
    }

    fn is_match(&self, candidate: &str, pattern: &Self::Pattern) -> bool {
        pattern.matches(candidate)
    }

    /// Applied to every candidate before it reaches a store.
    fn normalize_candidate<'a>(&self, candidate: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(candidate)
    }
}
