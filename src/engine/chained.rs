use super::exact::{ExactMatcher, HashedBuilder, HashedStore, Literal};
use super::fold_case;
use super::regexp::{RegexMatcher, RegexPattern};
use super::store::{ListBuilder, PatternList};
use super::traits::{CompiledPattern, GroupStore, PatternMatcher, StoreBuilder};
use super::wildcard::{WildcardMatcher, WildcardPattern};
use crate::error::PatternError;
use std::borrow::Cow;

/// Regex, wildcard and exact entries in one group.
///
/// Each entry goes to the first discipline that accepts it: `/expr/` to regex, globs to
/// wildcard, anything else non-empty to exact. All three parts of a group are built into a
/// single [`ChainedStore`], so a refresh publishes them together.
#[derive(Debug, Clone, Default)]
pub struct ChainedMatcher {
    regex: RegexMatcher,
    wildcard: WildcardMatcher,
    exact: ExactMatcher,
    lowercase: bool,
}

impl ChainedMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds literals, globs and the candidates they are tested against. Regex entries and
    /// the candidates they see are left as written.
    pub fn case_insensitive() -> Self {
        Self {
            regex: RegexMatcher::new(),
            wildcard: WildcardMatcher::case_insensitive(),
            exact: ExactMatcher::case_insensitive(),
            lowercase: true,
        }
    }
}

#[derive(Debug, Clone)]
pub enum ChainedPattern {
    Regex(RegexPattern),
    Wildcard(WildcardPattern),
    Exact(Literal),
}

impl CompiledPattern for ChainedPattern {
    fn source(&self) -> &str {
        match self {
            Self::Regex(p) => p.source(),
            Self::Wildcard(p) => p.source(),
            Self::Exact(p) => p.source(),
        }
    }

    fn matches(&self, candidate: &str) -> bool {
        match self {
            Self::Regex(p) => p.matches(candidate),
            Self::Wildcard(p) => p.matches(candidate),
            Self::Exact(p) => p.matches(candidate),
        }
    }
}

impl PatternMatcher for ChainedMatcher {
    type Pattern = ChainedPattern;
    type Builder = ChainedBuilder;

    fn name(&self) -> &'static str {
        "chained"
    }

    fn try_accept(&self, raw: &str) -> Result<Option<ChainedPattern>, PatternError> {
        if let Some(pattern) = self.regex.try_accept(raw)? {
            return Ok(Some(ChainedPattern::Regex(pattern)));
        }
        if let Some(pattern) = self.wildcard.try_accept(raw)? {
            return Ok(Some(ChainedPattern::Wildcard(pattern)));
        }
        Ok(self.exact.try_accept(raw)?.map(ChainedPattern::Exact))
    }

    fn new_builder(&self) -> ChainedBuilder {
        ChainedBuilder {
            lowercase: self.lowercase,
            ..ChainedBuilder::default()
        }
    }

    fn is_match(&self, candidate: &str, pattern: &ChainedPattern) -> bool {
        match pattern {
            ChainedPattern::Regex(p) => p.matches(candidate),
            ChainedPattern::Wildcard(p) => {
                let candidate = self.wildcard.normalize_candidate(candidate);
                self.wildcard.is_match(&candidate, p)
            }
            ChainedPattern::Exact(p) => {
                let candidate = self.exact.normalize_candidate(candidate);
                self.exact.is_match(&candidate, p)
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct ChainedBuilder {
    lowercase: bool,
    regex: ListBuilder<RegexPattern>,
    wildcard: ListBuilder<WildcardPattern>,
    exact: HashedBuilder,
}

impl StoreBuilder for ChainedBuilder {
    type Pattern = ChainedPattern;
    type Store = ChainedStore;

    fn push(&mut self, pattern: ChainedPattern) {
        match pattern {
            ChainedPattern::Regex(p) => self.regex.push(p),
            ChainedPattern::Wildcard(p) => self.wildcard.push(p),
            ChainedPattern::Exact(p) => self.exact.push(p),
        }
    }

    fn len(&self) -> usize {
        self.regex.len() + self.wildcard.len() + self.exact.len()
    }

    fn build(self) -> ChainedStore {
        ChainedStore {
            lowercase: self.lowercase,
            regex: self.regex.build(),
            wildcard: self.wildcard.build(),
            exact: self.exact.build(),
        }
    }
}

/// One group's regex, wildcard and exact parts, published as a unit.
#[derive(Debug)]
pub struct ChainedStore {
    lowercase: bool,
    regex: PatternList<RegexPattern>,
    wildcard: PatternList<WildcardPattern>,
    exact: HashedStore,
}

impl GroupStore for ChainedStore {
    fn len(&self) -> usize {
        self.regex.len() + self.wildcard.len() + self.exact.len()
    }

    // Regex first, then wildcard, then exact: the first part that matches reports.
    fn find(&self, candidate: &str) -> Option<&str> {
        if let Some(source) = self.regex.find(candidate) {
            return Some(source);
        }

        let folded = if self.lowercase {
            fold_case(candidate)
        } else {
            Cow::Borrowed(candidate)
        };
        self.wildcard
            .find(&folded)
            .or_else(|| self.exact.find(&folded))
    }
}
