//! Search configuration.
//!
//! Two independent axes control a search:
//!
//! - **Scope** of implicit member discovery: [`SearchMode::Strict`] (settable
//!   public string members only) or [`SearchMode::All`] (every public
//!   non-collection member).
//! - **Case sensitivity**: off by default.
//!
//! Both can be given either as a [`SearchMode`] or as a [`SearchFlags`] bit
//! set; each converts into the resolved [`SearchOptions`].

use std::ops::{BitOr, BitOrAssign};

/// Scope of implicit member discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SearchMode {
    /// Only public, writable string members. Safe for stores that cannot
    /// stringify arbitrary columns.
    #[default]
    Strict,
    /// All public members except collections. Useful in memory.
    All,
}

impl SearchMode {
    /// Returns the display name of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            SearchMode::Strict => "strict",
            SearchMode::All => "all",
        }
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bit set of search flags.
///
/// ```
/// use standout_search::SearchFlags;
///
/// let flags = SearchFlags::LAX_MODE | SearchFlags::IGNORE_CASE;
/// assert!(flags.contains(SearchFlags::IGNORE_CASE));
/// assert!(!SearchFlags::NONE.contains(SearchFlags::LAX_MODE));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SearchFlags(u8);

impl SearchFlags {
    /// Strict scope, case-sensitive.
    pub const NONE: SearchFlags = SearchFlags(0);
    /// Widen discovery to all non-collection members.
    pub const LAX_MODE: SearchFlags = SearchFlags(1);
    /// Case-fold both values and terms.
    pub const IGNORE_CASE: SearchFlags = SearchFlags(2);

    /// Raw bits.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns `true` if every flag in `other` is set.
    pub const fn contains(self, other: SearchFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Sets the flags in `other`.
    pub fn insert(&mut self, other: SearchFlags) {
        self.0 |= other.0;
    }

    /// Returns `true` if no flag is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for SearchFlags {
    type Output = SearchFlags;

    fn bitor(self, rhs: SearchFlags) -> SearchFlags {
        SearchFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for SearchFlags {
    fn bitor_assign(&mut self, rhs: SearchFlags) {
        self.insert(rhs);
    }
}

/// Resolved search configuration.
///
/// The default is strict scope, case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchOptions {
    /// Scope of implicit discovery.
    pub mode: SearchMode,
    /// Case-fold values and terms before matching.
    pub ignore_case: bool,
}

impl SearchOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        SearchOptions::default()
    }

    /// Uses strict scope.
    pub fn strict(mut self) -> Self {
        self.mode = SearchMode::Strict;
        self
    }

    /// Uses all scope.
    pub fn all(mut self) -> Self {
        self.mode = SearchMode::All;
        self
    }

    /// Sets case-insensitive matching.
    pub fn ignore_case(mut self, ignore: bool) -> Self {
        self.ignore_case = ignore;
        self
    }

    /// Converts back into the flag representation.
    pub fn flags(&self) -> SearchFlags {
        let mut flags = SearchFlags::NONE;
        if self.mode == SearchMode::All {
            flags |= SearchFlags::LAX_MODE;
        }
        if self.ignore_case {
            flags |= SearchFlags::IGNORE_CASE;
        }
        flags
    }
}

impl From<SearchMode> for SearchOptions {
    fn from(mode: SearchMode) -> Self {
        SearchOptions {
            mode,
            ignore_case: false,
        }
    }
}

impl From<SearchFlags> for SearchOptions {
    fn from(flags: SearchFlags) -> Self {
        SearchOptions {
            mode: if flags.contains(SearchFlags::LAX_MODE) {
                SearchMode::All
            } else {
                SearchMode::Strict
            },
            ignore_case: flags.contains(SearchFlags::IGNORE_CASE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_strict_and_case_sensitive() {
        let options = SearchOptions::default();
        assert_eq!(options.mode, SearchMode::Strict);
        assert!(!options.ignore_case);
        assert_eq!(options.flags(), SearchFlags::NONE);
    }

    #[test]
    fn flags_resolve_independently() {
        let lax: SearchOptions = SearchFlags::LAX_MODE.into();
        assert_eq!(lax.mode, SearchMode::All);
        assert!(!lax.ignore_case);

        let folded: SearchOptions = SearchFlags::IGNORE_CASE.into();
        assert_eq!(folded.mode, SearchMode::Strict);
        assert!(folded.ignore_case);
    }

    #[test]
    fn flags_round_trip_through_options() {
        let flags = SearchFlags::LAX_MODE | SearchFlags::IGNORE_CASE;
        assert_eq!(SearchOptions::from(flags).flags(), flags);
    }

    #[test]
    fn mode_converts_case_sensitive() {
        let options = SearchOptions::from(SearchMode::All);
        assert_eq!(options, SearchOptions::new().all());
    }

    #[test]
    fn builder_methods() {
        let options = SearchOptions::new().all().ignore_case(true).strict();
        assert_eq!(options.mode, SearchMode::Strict);
        assert!(options.ignore_case);
    }

    #[test]
    fn flag_set_operations() {
        let mut flags = SearchFlags::NONE;
        assert!(flags.is_empty());
        flags.insert(SearchFlags::IGNORE_CASE);
        assert!(flags.contains(SearchFlags::IGNORE_CASE));
        assert!(!flags.contains(SearchFlags::LAX_MODE | SearchFlags::IGNORE_CASE));
        assert_eq!(flags.bits(), 2);
    }

    #[test]
    fn mode_display() {
        assert_eq!(SearchMode::Strict.to_string(), "strict");
        assert_eq!(SearchMode::All.to_string(), "all");
    }
}
