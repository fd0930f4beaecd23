//! Property-based tests for search using proptest.

use proptest::prelude::*;
use standout_search::{
    Field, Member, MemberType, Memory, Number, SearchExt, SearchFlags, SearchMode, Searchable,
    Value,
};

// ============================================================================
// Test helpers
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct TestItem {
    name: String,
    note: Option<String>,
    count: u32,
}

impl Searchable for TestItem {
    fn members() -> &'static [Member] {
        static MEMBERS: &[Member] = &[
            Member::new("name", MemberType::String),
            Member::new("note", MemberType::String).nullable(),
            Member::new("count", MemberType::Number),
        ];
        MEMBERS
    }

    fn field_value(&self, name: &str) -> Value<'_> {
        match name {
            "name" => Value::String(&self.name),
            "note" => self.note.as_deref().map_or(Value::None, Value::String),
            "count" => Value::Number(Number::from(self.count)),
            _ => Value::None,
        }
    }
}

// Strategy to generate test items
fn test_item_strategy() -> impl Strategy<Value = TestItem> {
    (
        "[a-zA-Z ]{0,16}",
        prop::option::of("[a-zA-Z ]{0,16}"),
        any::<u32>(),
    )
        .prop_map(|(name, note, count)| TestItem { name, note, count })
}

fn items_strategy() -> impl Strategy<Value = Vec<TestItem>> {
    prop::collection::vec(test_item_strategy(), 0..40)
}

fn query_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,3}( [a-zA-Z]{1,3}){0,2}"
}

// Reference semantics: every term is contained in some strict member.
fn naive_match(item: &TestItem, query: &str) -> bool {
    query.split_whitespace().all(|term| {
        item.name.contains(term) || item.note.as_deref().is_some_and(|n| n.contains(term))
    })
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Blank queries leave the source unchanged.
    #[test]
    fn blank_query_is_identity(
        items in items_strategy(),
        query in "[ \t\n]{0,5}",
    ) {
        let found = Memory::new(&items).search(query.as_str()).unwrap();
        prop_assert!(found.is_identity());
        prop_assert_eq!(found.to_owned_vec(), items);
    }

    /// Search agrees with a direct per-term substring check.
    #[test]
    fn search_matches_reference_semantics(
        items in items_strategy(),
        query in query_strategy(),
    ) {
        let found = Memory::new(&items).search(query.as_str()).unwrap().to_owned_vec();
        let expected: Vec<_> = items.iter().filter(|i| naive_match(i, &query)).cloned().collect();
        prop_assert_eq!(found, expected);
    }

    /// With case folding, the case of the query does not matter.
    #[test]
    fn case_insensitive_invariance(
        items in items_strategy(),
        query in query_strategy(),
    ) {
        let run = |q: &str| {
            Memory::new(&items)
                .search_with(q, SearchFlags::IGNORE_CASE)
                .unwrap()
                .to_owned_vec()
        };
        let original = run(&query);
        prop_assert_eq!(&original, &run(&query.to_uppercase()));
        prop_assert_eq!(&original, &run(&query.to_lowercase()));
    }

    /// Adding a term never grows the result.
    #[test]
    fn more_terms_never_grow_results(
        items in items_strategy(),
        a in "[a-zA-Z]{1,3}",
        b in "[a-zA-Z]{1,3}",
    ) {
        let one = Memory::new(&items).search(a.as_str()).unwrap().count();
        let two = Memory::new(&items).search(format!("{} {}", a, b).as_str()).unwrap().count();
        prop_assert!(two <= one);
    }

    /// Restricting to a subset of discovered members never grows the result.
    #[test]
    fn field_restriction_never_grows_results(
        items in items_strategy(),
        query in query_strategy(),
    ) {
        let implicit = Memory::new(&items).search(query.as_str()).unwrap().count();
        let restricted = Memory::new(&items)
            .search_fields(query.as_str(), &[Field::new("name")])
            .unwrap()
            .count();
        prop_assert!(restricted <= implicit);
    }

    /// Numbers are invisible in strict scope and visible in all scope.
    #[test]
    fn strict_scope_ignores_numbers(
        items in items_strategy(),
        digits in "[0-9]{1,4}",
    ) {
        let strict = Memory::new(&items).search(digits.as_str()).unwrap();
        prop_assert_eq!(strict.count(), 0);

        let all = Memory::new(&items).search_with(digits.as_str(), SearchMode::All).unwrap();
        for item in all.iter() {
            prop_assert!(item.count.to_string().contains(digits.as_str()));
        }
    }

    /// Lazy views and eager vectors agree.
    #[test]
    fn memory_and_vec_agree(
        items in items_strategy(),
        query in query_strategy(),
    ) {
        let lazy = Memory::new(&items).search(query.as_str()).unwrap().to_owned_vec();
        let eager = items.clone().search(query.as_str()).unwrap();
        prop_assert_eq!(lazy, eager);
    }
}
