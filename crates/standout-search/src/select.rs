//! Member selection for implicit search.
//!
//! Decides which members of a record type are searched when the caller does
//! not name fields explicitly. Selection is a pure function of the member
//! table and the mode, and preserves declaration order.

use crate::member::Member;
use crate::options::SearchMode;
use crate::traits::Searchable;

/// Selects the members eligible for implicit search under `mode`.
///
/// - [`SearchMode::Strict`]: public, writable, string-typed members.
/// - [`SearchMode::All`]: public members that are not collections.
///
/// An empty result is valid; the predicate builder decides whether that is
/// an error.
pub fn select(members: &[Member], mode: SearchMode) -> Vec<&Member> {
    members
        .iter()
        .filter(|member| match mode {
            SearchMode::Strict => member.is_eligible_strict(),
            SearchMode::All => member.is_eligible_all(),
        })
        .collect()
}

/// Selects the eligible members of `T`.
pub fn select_members<T: Searchable>(mode: SearchMode) -> Vec<&'static Member> {
    select(T::members(), mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::MemberType;

    fn publisher() -> &'static [Member] {
        static MEMBERS: &[Member] = &[Member::new("name", MemberType::String)];
        MEMBERS
    }

    // Mirrors a typical entity: mixed fields, read-only and computed members.
    static BOOK: &[Member] = &[
        Member::new("id", MemberType::Number),
        Member::new("title", MemberType::String).readonly(),
        Member::new("subtitle", MemberType::String),
        Member::new("author", MemberType::String).readonly(),
        Member::new("year", MemberType::Number),
        Member::new("isbn", MemberType::String).nullable(),
        Member::new("dance", MemberType::String).readonly(),
        Member::new("price", MemberType::Text),
        Member::new("publisher", MemberType::Record(publisher)).nullable(),
        Member::new("chapters", MemberType::Collection),
        Member::new("orders", MemberType::Collection),
        Member::new("status", MemberType::Text),
        Member::new("notes", MemberType::String).private(),
    ];

    fn names(members: Vec<&Member>) -> Vec<&'static str> {
        members.into_iter().map(|m| m.name).collect()
    }

    #[test]
    fn strict_selects_writable_public_strings() {
        assert_eq!(names(select(BOOK, SearchMode::Strict)), ["subtitle", "isbn"]);
    }

    #[test]
    fn all_excludes_collections_and_private() {
        assert_eq!(
            names(select(BOOK, SearchMode::All)),
            [
                "id",
                "title",
                "subtitle",
                "author",
                "year",
                "isbn",
                "dance",
                "price",
                "publisher",
                "status"
            ]
        );
    }

    #[test]
    fn selection_is_stable() {
        assert_eq!(
            names(select(BOOK, SearchMode::All)),
            names(select(BOOK, SearchMode::All))
        );
    }

    #[test]
    fn empty_result_is_valid() {
        static NUMBERS: &[Member] = &[Member::new("n", MemberType::Number)];
        assert!(select(NUMBERS, SearchMode::Strict).is_empty());
        assert!(select(&[], SearchMode::All).is_empty());
    }
}
