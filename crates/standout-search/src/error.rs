//! Error types for the search crate.

use thiserror::Error;

/// Errors raised while compiling a search into predicates.
///
/// All of these are caller or schema mistakes detected at build time.
/// Absent values and blank queries are never errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Implicit discovery found nothing to test for a non-empty term.
    #[error("could not determine searchable fields for {type_name}")]
    NoSearchableFields { type_name: &'static str },

    /// An explicit field names a member the record does not declare.
    #[error("{owner} has no member named '{name}'")]
    UnknownMember { owner: String, name: String },

    /// An explicit field navigates through a member that is not a record.
    #[error("member '{name}' is not a nested record")]
    NotARecord { name: String },

    /// An explicit field does not evaluate to text.
    #[error("field `{field}` evaluates to {found}, expected text (use `into_text`)")]
    FieldNotText { field: String, found: &'static str },

    /// An explicit field converts the record itself rather than a member.
    #[error("`{expr}` has no text form; name a member of the record")]
    RecordNotText { expr: String },

    /// An explicit field refers to a placeholder it does not own.
    #[error("unbound parameter '{name}'")]
    UnboundParameter { name: String },
}

/// Result type for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors raised while translating predicates to SQL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqlError {
    /// The predicate could not be built in the first place.
    #[error("search failed: {0}")]
    Search(#[from] SearchError),

    /// The predicate uses something SQL cannot express.
    #[error("cannot translate `{expr}` to SQL: {reason}")]
    Unsupported { expr: String, reason: &'static str },
}
