use super::store::ListBuilder;
use super::traits::{CompiledPattern, PatternMatcher};
use crate::error::PatternError;
use regex::Regex;

/// Entries written as `/expr/`, matched anywhere inside the candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexMatcher;

impl RegexMatcher {
    pub fn new() -> Self {
        Self
    }
}

/// Returns the text between the slashes of a `/expr/` entry.
pub(crate) fn regex_body(raw: &str) -> Option<&str> {
    raw.strip_prefix('/')?
        .strip_suffix('/')
        .filter(|body| !body.is_empty())
}

#[derive(Debug, Clone)]
pub struct RegexPattern {
    source: Box<str>,
    regex: Regex,
}

impl CompiledPattern for RegexPattern {
    fn source(&self) -> &str {
        &self.source
    }

    fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}

impl PatternMatcher for RegexMatcher {
    type Pattern = RegexPattern;
    type Builder = ListBuilder<RegexPattern>;

    fn name(&self) -> &'static str {
        "regex"
    }

    fn try_accept(&self, raw: &str) -> Result<Option<RegexPattern>, PatternError> {
        let Some(body) = regex_body(raw) else {
            return Ok(None);
        };

        let regex = Regex::new(body).map_err(|source| PatternError::InvalidRegex {
            entry: raw.to_string(),
            source,
        })?;

        Ok(Some(RegexPattern {
            source: raw.into(),
            regex,
        }))
    }
}
