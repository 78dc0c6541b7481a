use super::fold_case;
use super::regexp::regex_body;
use super::store::ListBuilder;
use super::traits::{CompiledPattern, PatternMatcher};
use crate::error::PatternError;
use regex::Regex;
use std::borrow::Cow;

/// Glob entries containing `*`, matched against the whole candidate.
///
/// A leading `*.` covers the bare suffix as well as any number of labels in front of it,
/// so `*.example.com` matches `example.com` and `a.b.example.com`. Every other `*` stands
/// for any run of characters, dots included.
#[derive(Debug, Clone, Default)]
pub struct WildcardMatcher {
    lowercase: bool,
}

impl WildcardMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds globs and candidates to lowercase.
    pub fn case_insensitive() -> Self {
        Self { lowercase: true }
    }
}

#[derive(Debug, Clone)]
pub struct WildcardPattern {
    source: Box<str>,
    regex: Regex,
}

impl CompiledPattern for WildcardPattern {
    fn source(&self) -> &str {
        &self.source
    }

    fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}

/// Translates a glob into an expression anchored at both ends.
pub(crate) fn glob_to_regex(glob: &str) -> String {
    let mut expr = String::with_capacity(glob.len() * 2 + 12);
    expr.push('^');

    let rest = match glob.strip_prefix("*.") {
        Some(rest) => {
            expr.push_str(r"(?:.+\.)?");
            rest
        }
        None => glob,
    };

    for (i, literal) in rest.split('*').enumerate() {
        if i > 0 {
            expr.push_str(".*");
        }
        expr.push_str(&regex::escape(literal));
    }

    expr.push('$');
    expr
}

impl PatternMatcher for WildcardMatcher {
    type Pattern = WildcardPattern;
    type Builder = ListBuilder<WildcardPattern>;

    fn name(&self) -> &'static str {
        "wildcard"
    }

    fn try_accept(&self, raw: &str) -> Result<Option<WildcardPattern>, PatternError> {
        if !raw.contains('*') || regex_body(raw).is_some() {
            return Ok(None);
        }

        let glob = if self.lowercase {
            fold_case(raw)
        } else {
            Cow::Borrowed(raw)
        };

        let literal_part = glob.strip_prefix("*.").unwrap_or(&*glob);
        if literal_part.chars().all(|c| c == '*') {
            return Err(PatternError::MatchesEverything {
                entry: raw.to_string(),
            });
        }

        let regex =
            Regex::new(&glob_to_regex(&glob)).map_err(|source| PatternError::InvalidWildcard {
                entry: raw.to_string(),
                source,
            })?;

        Ok(Some(WildcardPattern {
            source: glob.into(),
            regex,
        }))
    }

    fn normalize_candidate<'a>(&self, candidate: &'a str) -> Cow<'a, str> {
        if self.lowercase {
            fold_case(candidate)
        } else {
            Cow::Borrowed(candidate)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(raw: &str) -> WildcardPattern {
        WildcardMatcher::new().try_accept(raw).unwrap().unwrap()
    }

    #[test]
    fn test_rejects_plain_and_regex_entries() {
        let matcher = WildcardMatcher::new();
        assert!(matcher.try_accept("plain").unwrap().is_none());
        assert!(matcher.try_accept("/x/").unwrap().is_none());
        assert!(matcher.try_accept("/ads.*/").unwrap().is_none());
        assert!(matcher.try_accept("*.string3").unwrap().is_some());
    }

    #[test]
    fn test_leading_star_dot_covers_suffix_and_subdomains() {
        let pattern = compile("*.string3");
        assert!(pattern.matches("string3"));
        assert!(pattern.matches("shouldalsomatch.string3"));
        assert!(pattern.matches("a.b.c.string3"));

        assert!(!pattern.matches("notstring3"));
        assert!(!pattern.matches(".string3"));
        assert!(!pattern.matches("string3.com"));
    }

    #[test]
    fn test_inner_stars_are_generic() {
        let pattern = compile("ads.*.example.com");
        assert!(pattern.matches("ads.eu.example.com"));
        assert!(pattern.matches("ads.eu.west.example.com"));
        assert!(!pattern.matches("ads.example.com"));

        let pattern = compile("*tracker*");
        assert!(pattern.matches("tracker"));
        assert!(pattern.matches("my-tracker.net"));
        assert!(!pattern.matches("trackr.net"));
    }

    #[test]
    fn test_dots_are_literal() {
        let pattern = compile("*.a.com");
        assert!(!pattern.matches("xaxcom"));
        assert!(!pattern.matches("b.axcom"));
    }

    #[test]
    fn test_translation() {
        assert_eq!(glob_to_regex("*.example.com"), r"^(?:.+\.)?example\.com$");
        assert_eq!(glob_to_regex("ad*.net"), r"^ad.*\.net$");
    }

    #[test]
    fn test_match_everything_globs_are_errors() {
        let matcher = WildcardMatcher::new();
        for raw in ["*", "**", "*.", "*.*"] {
            let err = matcher.try_accept(raw).unwrap_err();
            assert!(matches!(err, PatternError::MatchesEverything { .. }), "{raw}");
            assert_eq!(err.entry(), raw);
        }
    }

    #[test]
    fn test_case_insensitive_mode() {
        let matcher = WildcardMatcher::case_insensitive();
        let pattern = matcher.try_accept("*.Example.COM").unwrap().unwrap();
        assert_eq!(pattern.source(), "*.example.com");

        let candidate = matcher.normalize_candidate("WWW.EXAMPLE.com");
        assert!(matcher.is_match(&candidate, &pattern));
    }
}
