//! Startup helpers: logging and cache construction.

use crate::cache::{ChainedGroupedCache, GroupedCache, InMemoryGroupedCache};
use crate::config::{CacheConfig, Config, MatchMode};
use crate::engine::{ExactMatcher, RegexMatcher, WildcardMatcher};
use std::sync::Arc;
use tracing::{debug, info};

/// Sets up the tracing subscriber. `RUST_LOG` wins over the configured level.
pub fn setup_logging(config: &Config) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    // A subscriber may already be installed (tests, embedding services).
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init()
    {
        debug!("Keeping existing tracing subscriber: {}", e);
    }
}

/// Builds an empty cache for the configured discipline.
pub fn build_cache(config: &CacheConfig) -> Arc<dyn GroupedCache> {
    info!(
        "Creating {:?} grouped cache (lowercase: {}, trim: {})",
        config.mode, config.lowercase, config.trim_entries
    );

    let trim = config.trim_entries;
    match config.mode {
        MatchMode::Exact => {
            let matcher = if config.lowercase {
                ExactMatcher::case_insensitive()
            } else {
                ExactMatcher::new()
            };
            Arc::new(InMemoryGroupedCache::with_trim(matcher, trim))
        }
        MatchMode::Regex => Arc::new(InMemoryGroupedCache::with_trim(RegexMatcher::new(), trim)),
        MatchMode::Wildcard => {
            let matcher = if config.lowercase {
                WildcardMatcher::case_insensitive()
            } else {
                WildcardMatcher::new()
            };
            Arc::new(InMemoryGroupedCache::with_trim(matcher, trim))
        }
        MatchMode::Chained => Arc::new(ChainedGroupedCache::chained(config.lowercase, trim)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepts(mode: MatchMode, raw: &str) -> bool {
        let cache = build_cache(&CacheConfig {
            mode,
            ..CacheConfig::default()
        });
        cache.refresh("g").add_entry(raw).unwrap()
    }

    #[test]
    fn test_mode_selects_discipline() {
        assert!(accepts(MatchMode::Exact, "plain.com"));
        assert!(!accepts(MatchMode::Regex, "plain.com"));
        assert!(!accepts(MatchMode::Wildcard, "plain.com"));
        assert!(accepts(MatchMode::Chained, "plain.com"));

        assert!(accepts(MatchMode::Regex, "/ads/"));
        assert!(accepts(MatchMode::Wildcard, "*.ads.com"));
        assert!(accepts(MatchMode::Chained, "*.ads.com"));
    }

    #[test]
    fn test_setup_logging_twice_is_harmless() {
        let config = Config::default();
        setup_logging(&config);
        setup_logging(&config);
    }
}
