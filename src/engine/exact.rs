use super::fold_case;
use super::traits::{CompiledPattern, GroupStore, PatternMatcher, StoreBuilder};
use crate::error::PatternError;
use rustc_hash::FxHashSet;
use std::borrow::Cow;

/// Literal equality. Entries are kept in a hash set so a lookup costs one probe per group.
#[derive(Debug, Clone, Default)]
pub struct ExactMatcher {
    lowercase: bool,
}

impl ExactMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds entries and candidates to lowercase.
    pub fn case_insensitive() -> Self {
        Self { lowercase: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal(Box<str>);

impl CompiledPattern for Literal {
    fn source(&self) -> &str {
        &self.0
    }

    fn matches(&self, candidate: &str) -> bool {
        *self.0 == *candidate
    }
}

impl PatternMatcher for ExactMatcher {
    type Pattern = Literal;
    type Builder = HashedBuilder;

    fn name(&self) -> &'static str {
        "exact"
    }

    fn try_accept(&self, raw: &str) -> Result<Option<Literal>, PatternError> {
        if raw.is_empty() {
            return Ok(None);
        }
        let literal: Box<str> = if self.lowercase {
            fold_case(raw).into()
        } else {
            raw.into()
        };
        Ok(Some(Literal(literal)))
    }

    fn normalize_candidate<'a>(&self, candidate: &'a str) -> Cow<'a, str> {
        if self.lowercase {
            fold_case(candidate)
        } else {
            Cow::Borrowed(candidate)
        }
    }
}

/// Staging set for literals; duplicates collapse as they arrive.
#[derive(Debug, Default)]
pub struct HashedBuilder {
    literals: FxHashSet<Box<str>>,
}

impl StoreBuilder for HashedBuilder {
    type Pattern = Literal;
    type Store = HashedStore;

    fn push(&mut self, pattern: Literal) {
        self.literals.insert(pattern.0);
    }

    fn len(&self) -> usize {
        self.literals.len()
    }

    fn build(mut self) -> HashedStore {
        self.literals.shrink_to_fit();
        HashedStore {
            literals: self.literals,
        }
    }
}

#[derive(Debug, Default)]
pub struct HashedStore {
    literals: FxHashSet<Box<str>>,
}

impl GroupStore for HashedStore {
    fn len(&self) -> usize {
        self.literals.len()
    }

    fn find(&self, candidate: &str) -> Option<&str> {
        self.literals.get(candidate).map(|s| &**s)
    }
}
