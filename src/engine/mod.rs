//! Matching disciplines and the group stores they publish into.

mod chained;
mod exact;
mod regexp;
mod store;
mod traits;
mod wildcard;

pub use self::chained::{ChainedBuilder, ChainedMatcher, ChainedPattern, ChainedStore};
pub use self::exact::{ExactMatcher, HashedBuilder, HashedStore, Literal};
pub use self::regexp::{RegexMatcher, RegexPattern};
pub use self::store::{ListBuilder, PatternList};
pub use self::traits::{CompiledPattern, GroupStore, PatternMatcher, StoreBuilder};
pub use self::wildcard::{WildcardMatcher, WildcardPattern};

use std::borrow::Cow;

/// Lowercases `s`, borrowing when it has nothing to fold.
pub(crate) fn fold_case(s: &str) -> Cow<'_, str> {
    if s.chars().any(char::is_uppercase) {
        Cow::Owned(s.to_lowercase())
    } else {
        Cow::Borrowed(s)
    }
}
