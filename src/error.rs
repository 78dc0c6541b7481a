/// An entry had the right shape for its discipline but failed to compile.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("invalid regex entry '{entry}': {source}")]
    InvalidRegex {
        entry: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid wildcard entry '{entry}': {source}")]
    InvalidWildcard {
        entry: String,
        #[source]
        source: regex::Error,
    },

    /// A glob with no literal part, such as `*` or `*.`.
    #[error("wildcard entry '{entry}' would match every name")]
    MatchesEverything { entry: String },
}

impl PatternError {
    /// The raw entry that failed to compile.
    pub fn entry(&self) -> &str {
        match self {
            Self::InvalidRegex { entry, .. }
            | Self::InvalidWildcard { entry, .. }
            | Self::MatchesEverything { entry } => entry,
        }
    }
}

/// Errors surfaced while staging a group.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// The factory already published its buffer; it no longer takes entries.
    #[error("factory for group '{group}' is already finished")]
    FactoryFinished { group: String },
}

pub type Result<T> = std::result::Result<T, CacheError>;
