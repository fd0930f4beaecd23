//! Queryable sources.
//!
//! A [`Source`] is anything that can be narrowed by a [`Predicate`]. The
//! search compiler only ever calls [`Source::narrow`], once per term, so a
//! source decides for itself whether narrowing is evaluated immediately,
//! deferred, or translated for an external store.

use crate::error::SearchError;
use crate::predicate::Predicate;
use crate::traits::Searchable;

/// A collection that can be narrowed by predicates.
pub trait Source: Sized {
    /// Record type held by the source.
    type Item: Searchable;

    /// Error raised by narrowing. Search errors must convert into it so
    /// that both propagate through [`SearchExt`](crate::SearchExt).
    type Error: From<SearchError>;

    /// Returns the source restricted to records matching `predicate`.
    fn narrow(self, predicate: Predicate) -> Result<Self, Self::Error>;
}

/// Lazy in-memory view over a slice.
///
/// Narrowing only records the predicate; records are tested when the view
/// is enumerated, in the original order.
///
/// ```
/// use standout_search::{Member, MemberType, Memory, SearchExt, Searchable, Value};
///
/// struct Tag(&'static str);
///
/// impl Searchable for Tag {
///     fn members() -> &'static [Member] {
///         static MEMBERS: &[Member] = &[Member::new("name", MemberType::String)];
///         MEMBERS
///     }
///
///     fn field_value(&self, name: &str) -> Value<'_> {
///         match name {
///             "name" => Value::String(self.0),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let tags = [Tag("rust"), Tag("rustdoc"), Tag("docs")];
/// let view = Memory::new(&tags).search("rust doc").unwrap();
/// let names: Vec<_> = view.iter().map(|t| t.0).collect();
/// assert_eq!(names, ["rustdoc"]);
/// ```
#[derive(Debug, Clone)]
pub struct Memory<'a, T> {
    items: &'a [T],
    predicates: Vec<Predicate>,
}

impl<'a, T: Searchable> Memory<'a, T> {
    /// Creates an unfiltered view.
    pub fn new(items: &'a [T]) -> Self {
        Memory {
            items,
            predicates: Vec::new(),
        }
    }

    /// Predicates applied so far, one per narrowing.
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Returns `true` if no predicate has been applied.
    pub fn is_identity(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Tests a single record against every predicate.
    pub fn matches(&self, item: &T) -> bool {
        self.predicates.iter().all(|p| p.matches(item))
    }

    /// Iterates matching records in their original order.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.items.iter().filter(move |item| self.matches(item))
    }

    /// Collects matching records.
    pub fn to_vec(&self) -> Vec<&'a T> {
        self.iter().collect()
    }

    /// Collects clones of matching records.
    pub fn to_owned_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Counts matching records.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Collects matching records, testing them in parallel.
    ///
    /// Predicates are pure, so the result is identical to [`Memory::to_vec`].
    #[cfg(feature = "parallel")]
    pub fn par_collect(&self) -> Vec<&'a T>
    where
        T: Sync,
    {
        use rayon::prelude::*;

        self.items
            .par_iter()
            .filter(|item| self.matches(item))
            .collect()
    }
}

impl<'a, T: Searchable> Source for Memory<'a, T> {
    type Item = T;
    type Error = SearchError;

    fn narrow(mut self, predicate: Predicate) -> Result<Self, SearchError> {
        self.predicates.push(predicate);
        Ok(self)
    }
}

/// Owned vectors narrow eagerly, keeping matching records in order.
impl<T: Searchable> Source for Vec<T> {
    type Item = T;
    type Error = SearchError;

    fn narrow(mut self, predicate: Predicate) -> Result<Self, SearchError> {
        self.retain(|item| predicate.matches(item));
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::Param;
    use crate::member::{Member, MemberType};
    use crate::value::Value;

    #[derive(Debug, Clone, PartialEq)]
    struct Word(String);

    impl Searchable for Word {
        fn members() -> &'static [Member] {
            static MEMBERS: &[Member] = &[Member::new("text", MemberType::String)];
            MEMBERS
        }

        fn field_value(&self, name: &str) -> Value<'_> {
            match name {
                "text" => Value::String(&self.0),
                _ => Value::None,
            }
        }
    }

    fn words() -> Vec<Word> {
        ["apple", "grape", "pineapple", "plum"]
            .into_iter()
            .map(|w| Word(w.to_string()))
            .collect()
    }

    fn containing(needle: &str) -> Predicate {
        let c = Param::new("c");
        Predicate::new(c.clone(), c.expr().member("text").contains(needle))
    }

    #[test]
    fn memory_starts_as_identity() {
        let words = words();
        let view = Memory::new(&words);
        assert!(view.is_identity());
        assert_eq!(view.count(), 4);
    }

    #[test]
    fn memory_narrowing_is_lazy_and_ordered() {
        let words = words();
        let view = Memory::new(&words)
            .narrow(containing("p"))
            .unwrap()
            .narrow(containing("le"))
            .unwrap();
        assert_eq!(view.predicates().len(), 2);
        let found: Vec<_> = view.iter().map(|w| w.0.as_str()).collect();
        assert_eq!(found, ["apple", "pineapple"]);
    }

    #[test]
    fn memory_to_owned_vec() {
        let words = words();
        let view = Memory::new(&words).narrow(containing("plum")).unwrap();
        assert_eq!(view.to_owned_vec(), vec![Word("plum".to_string())]);
    }

    #[test]
    fn vec_narrows_eagerly() {
        let narrowed = words().narrow(containing("ape")).unwrap();
        assert_eq!(narrowed, vec![Word("grape".to_string())]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_sequential() {
        let words = words();
        let view = Memory::new(&words).narrow(containing("p")).unwrap();
        assert_eq!(view.par_collect(), view.to_vec());
    }
}
