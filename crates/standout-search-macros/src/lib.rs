//! Proc macros for Standout Search.
//!
//! - [`Searchable`] - Generate member metadata and a by-name accessor
//!
//! # Examples
//!
//! For working examples, see `standout-search/tests/searchable_derive.rs`.

mod attrs;
mod derive;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `Searchable` trait for record structs.
///
/// Every named field becomes a member unless marked `#[search(skip)]`. The
/// member type is inferred from the field type:
///
/// | Field type | Member type |
/// |------------|-------------|
/// | `String`, `&str`, `Cow<str>` | `String` |
/// | integer primitives | `Number` |
/// | `f32`, `f64` | `Float` |
/// | `bool` | `Bool` |
/// | `Vec`, maps, sets, arrays, slices | `Collection` |
/// | anything else | `Text` (requires `Display`) |
///
/// `Option<T>` fields are nullable members of `T`'s type. Fields that are
/// not `pub` are recorded as private and are never searched implicitly.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `String`, `Number`, `Float`, `Bool`, `Text`, `Collection` | Override the inferred type |
/// | `Record` | Nested record; the field type must be `Searchable + Display` |
/// | `readonly` | Not writable: excluded from strict scope |
/// | `skip` | Leave the field out entirely |
/// | `rename = "..."` | Use a custom member name |
/// | `ty = "..."` | Type override as a string |
///
/// # Generated Code
///
/// 1. Member name constants (e.g., `Book::TITLE`, `Book::PUBLISHER`)
/// 2. `Searchable::members()` backed by a static table
/// 3. `Searchable::field_value()`
///
/// # Example
///
/// ```ignore
/// use std::fmt;
///
/// use standout_search::{Field, Memory, SearchExt, SearchMode, Searchable};
///
/// #[derive(Searchable)]
/// pub struct Publisher {
///     pub name: String,
/// }
///
/// impl fmt::Display for Publisher {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str(&self.name)
///     }
/// }
///
/// #[derive(Searchable)]
/// pub struct Book {
///     #[search(readonly)]
///     pub title: String,
///     pub author: String,
///     pub year: u16,
///     pub isbn: Option<String>,
///     #[search(Record)]
///     pub publisher: Option<Publisher>,
///     #[search(skip)]
///     pub id: u64,
/// }
///
/// let books: Vec<Book> = load();
///
/// let by_publisher = Memory::new(&books)
///     .search_fields("Penguin", &[Field::path([Book::PUBLISHER, Publisher::NAME])])?;
///
/// let anywhere = Memory::new(&books).search_with("1597", SearchMode::All)?;
/// ```
#[proc_macro_derive(Searchable, attributes(search))]
pub fn searchable_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::searchable_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
