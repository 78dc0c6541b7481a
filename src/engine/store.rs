use super::traits::{CompiledPattern, GroupStore, StoreBuilder};

/// Ordered pattern list, scanned front to back on lookup.
///
/// Used by the disciplines whose patterns can't be keyed: every stored pattern is a
/// candidate for every lookup.
#[derive(Debug)]
pub struct PatternList<P> {
    patterns: Box<[P]>,
}

impl<P> Default for PatternList<P> {
    fn default() -> Self {
        Self {
            patterns: Box::default(),
        }
    }
}

impl<P: CompiledPattern> GroupStore for PatternList<P> {
    fn len(&self) -> usize {
        self.patterns.len()
    }

    fn find(&self, candidate: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|p| p.matches(candidate))
            .map(|p| p.source())
    }
}

#[derive(Debug)]
pub struct ListBuilder<P> {
    patterns: Vec<P>,
}

impl<P> Default for ListBuilder<P> {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }
}

impl<P: CompiledPattern> StoreBuilder for ListBuilder<P> {
    type Pattern = P;
    type Store = PatternList<P>;

    fn push(&mut self, pattern: P) {
        self.patterns.push(pattern);
    }

    fn len(&self) -> usize {
        self.patterns.len()
    }

    fn build(self) -> PatternList<P> {
        PatternList {
            patterns: self.patterns.into_boxed_slice(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Prefix(&'static str);

    impl CompiledPattern for Prefix {
        fn source(&self) -> &str {
            self.0
        }

        fn matches(&self, candidate: &str) -> bool {
            candidate.starts_with(self.0)
        }
    }

    #[test]
    fn test_first_matching_pattern_is_reported() {
        let mut builder = ListBuilder::default();
        builder.push(Prefix("ad"));
        builder.push(Prefix("ads"));
        builder.push(Prefix("track"));
        assert_eq!(builder.len(), 3);

        let store = builder.build();
        assert_eq!(store.len(), 3);
        assert_eq!(store.find("ads.example.com"), Some("ad"));
        assert_eq!(store.find("tracker.net"), Some("track"));
        assert_eq!(store.find("example.com"), None);
    }

    #[test]
    fn test_empty_list_matches_nothing() {
        let store = ListBuilder::<Prefix>::default().build();
        assert!(store.is_empty());
        assert_eq!(store.find(""), None);
    }
}
