//! Traits for derive macro support.
//!
//! This module provides the [`Searchable`] trait which is implemented by
//! the `#[derive(Searchable)]` macro to describe which members a record
//! type exposes and how to read them.

use std::fmt;

use crate::member::Member;
use crate::value::Value;

/// Trait for record types that can be searched.
///
/// This trait is typically derived using `#[derive(Searchable)]` from the
/// `standout-search-macros` crate, but can also be implemented manually.
///
/// # Derive Usage
///
/// ```ignore
/// use standout_search::{Searchable, SearchExt, Memory};
///
/// #[derive(Searchable)]
/// struct Book {
///     pub title: String,
///     pub author: String,
///     pub year: u16,
///     pub isbn: Option<String>,
/// }
///
/// let books = vec![/* ... */];
/// let found = Memory::new(&books).search("Shakespeare")?.to_vec();
/// ```
///
/// # Manual Implementation
///
/// ```
/// use standout_search::{Member, MemberType, Number, Searchable, Value};
///
/// struct Book {
///     title: String,
///     year: u16,
/// }
///
/// impl Searchable for Book {
///     fn members() -> &'static [Member] {
///         static MEMBERS: &[Member] = &[
///             Member::new("title", MemberType::String),
///             Member::new("year", MemberType::Number),
///         ];
///         MEMBERS
///     }
///
///     fn field_value(&self, name: &str) -> Value<'_> {
///         match name {
///             "title" => Value::String(&self.title),
///             "year" => Value::Number(Number::from(self.year)),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait Searchable {
    /// Returns the members of this type in declaration order.
    ///
    /// The order is part of the contract: implicit discovery visits
    /// members in exactly this order.
    fn members() -> &'static [Member]
    where
        Self: Sized;

    /// Returns the value of a member for matching.
    ///
    /// Returns [`Value::None`] for absent values and for names that are
    /// not members.
    fn field_value(&self, name: &str) -> Value<'_>;
}

/// A searchable record nested inside another one.
///
/// Blanket-implemented for every `Searchable + Display` type; the derive
/// macro produces [`Value::Record`] for members marked `#[search(Record)]`.
pub trait NestedRecord: Searchable + fmt::Display {}

impl<T: Searchable + fmt::Display> NestedRecord for T {}
