//! Standout Search - Free-text search over Rust record collections.
//!
//! Compiles a free-text query such as `"william 1597"` into null-safe
//! predicates over a record type and applies them to any queryable
//! [`Source`]. It supports:
//!
//! - Implicit member discovery in two scopes (strict and all)
//! - Explicit field lists, including nested records
//! - Case-insensitive matching through invariant uppercasing
//! - In-memory views, owned vectors, and SQL translation
//!
//! # Quick Start
//!
//! ```rust
//! use standout_search::{Member, MemberType, Memory, Number, SearchExt, SearchFlags, Searchable, Value};
//!
//! struct Book {
//!     title: String,
//!     author: String,
//!     year: u16,
//! }
//!
//! impl Searchable for Book {
//!     fn members() -> &'static [Member] {
//!         static MEMBERS: &[Member] = &[
//!             Member::new("title", MemberType::String),
//!             Member::new("author", MemberType::String),
//!             Member::new("year", MemberType::Number),
//!         ];
//!         MEMBERS
//!     }
//!
//!     fn field_value(&self, name: &str) -> Value<'_> {
//!         match name {
//!             "title" => Value::String(&self.title),
//!             "author" => Value::String(&self.author),
//!             "year" => Value::Number(Number::from(self.year)),
//!             _ => Value::None,
//!         }
//!     }
//! }
//!
//! let books = vec![
//!     Book { title: "Romeo && Juliet".into(), author: "William Shakespeare".into(), year: 1597 },
//!     Book { title: "Othello".into(), author: "William Shakespeare".into(), year: 1603 },
//!     Book { title: "The Will To Live".into(), author: "Invented Person".into(), year: 1523 },
//! ];
//!
//! // Strict scope: strings only, case-sensitive.
//! let found = Memory::new(&books).search("Will").unwrap();
//! assert_eq!(found.count(), 3);
//!
//! // Every term must match somewhere; numbers need the lax scope.
//! let found = Memory::new(&books)
//!     .search_with("william 1597", SearchFlags::LAX_MODE | SearchFlags::IGNORE_CASE)
//!     .unwrap();
//! assert_eq!(found.to_vec()[0].title, "Romeo && Juliet");
//! assert_eq!(found.count(), 1);
//! ```
//!
//! # Query Semantics
//!
//! ```text
//! match = for every term t in the query:
//!             at least one candidate member m has text(m) containing t
//! ```
//!
//! - A missing or blank query leaves the source unchanged
//! - Absent members never match and never fail
//! - An empty explicit field list leaves the source unchanged
//! - No candidate members for a non-empty query is an error
//!
//! # Member Scopes
//!
//! | Mode | Candidates |
//! |------|------------|
//! | `Strict` | public, writable, string members |
//! | `All` | public members except collections, stringified |

mod error;
mod expr;
mod field;
mod member;
mod options;
mod predicate;
mod rebind;
mod search;
mod select;
mod source;
mod sql;
mod traits;
mod value;

// Re-export public API
pub use error::{Result, SearchError, SqlError};
pub use expr::{Expr, Param};
pub use field::Field;
pub use member::{find_member, Member, MemberType};
pub use options::{SearchFlags, SearchMode, SearchOptions};
pub use predicate::{Predicate, PredicateBuilder};
pub use rebind::Rebinder;
pub use search::{split_terms, SearchExt};
pub use select::{select, select_members};
pub use source::{Memory, Source};
pub use sql::SqlQuery;
pub use traits::{NestedRecord, Searchable};
pub use value::{Number, Value};

#[cfg(feature = "derive")]
pub use standout_search_macros::Searchable;
