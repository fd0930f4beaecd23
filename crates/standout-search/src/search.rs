//! Query compilation.
//!
//! Turns a free-text query into one predicate per term and narrows a
//! [`Source`] once per term. Terms are ANDed, candidate members within a term
//! are ORed:
//!
//! ```text
//! "william 1597"  =>  source
//!                       .narrow(c => c.title.contains("william") || c.author.contains("william") || ...)
//!                       .narrow(c => c.title.contains("1597") || c.author.contains("1597") || ...)
//! ```

use tracing::{debug, trace};

use crate::field::Field;
use crate::options::SearchOptions;
use crate::predicate::PredicateBuilder;
use crate::source::Source;

/// Splits a query into normalized search terms.
///
/// The query is uppercased when case folding is requested, split on
/// whitespace, and empty fragments are discarded. Term order follows the
/// query.
///
/// ```
/// use standout_search::{split_terms, SearchOptions};
///
/// assert_eq!(split_terms("  romeo   juliet ", &SearchOptions::new()), ["romeo", "juliet"]);
/// assert_eq!(split_terms("Romeo", &SearchOptions::new().ignore_case(true)), ["ROMEO"]);
/// assert!(split_terms("   ", &SearchOptions::new()).is_empty());
/// ```
pub fn split_terms(query: &str, options: &SearchOptions) -> Vec<String> {
    let query = if options.ignore_case {
        query.to_uppercase()
    } else {
        query.to_string()
    };
    query.split_whitespace().map(str::to_string).collect()
}

/// Search operations available on every [`Source`].
///
/// Queries are `impl Into<Option<&str>>`, so `None` stands for a missing
/// query. A missing or blank query returns the source unchanged, as does an
/// empty explicit field list.
pub trait SearchExt: Source {
    /// Implicit search with default options (strict scope, case-sensitive).
    fn search<'q>(self, query: impl Into<Option<&'q str>>) -> Result<Self, Self::Error> {
        compile(self, query.into(), SearchOptions::default(), None)
    }

    /// Implicit search with explicit mode or flags.
    fn search_with<'q>(
        self,
        query: impl Into<Option<&'q str>>,
        options: impl Into<SearchOptions>,
    ) -> Result<Self, Self::Error> {
        compile(self, query.into(), options.into(), None)
    }

    /// Search restricted to the given fields, bypassing discovery.
    fn search_fields<'q>(
        self,
        query: impl Into<Option<&'q str>>,
        fields: &[Field],
    ) -> Result<Self, Self::Error> {
        compile(self, query.into(), SearchOptions::default(), Some(fields))
    }

    /// Search restricted to the given fields, with explicit options.
    fn search_fields_with<'q>(
        self,
        query: impl Into<Option<&'q str>>,
        options: impl Into<SearchOptions>,
        fields: &[Field],
    ) -> Result<Self, Self::Error> {
        compile(self, query.into(), options.into(), Some(fields))
    }
}

impl<S: Source> SearchExt for S {}

fn compile<S: Source>(
    source: S,
    query: Option<&str>,
    options: SearchOptions,
    fields: Option<&[Field]>,
) -> Result<S, S::Error> {
    let query = match query {
        Some(q) if !q.trim().is_empty() => q,
        _ => return Ok(source),
    };

    // Fields were asked for but none given: same as no query.
    if fields.is_some_and(|f| f.is_empty()) {
        return Ok(source);
    }

    let terms = split_terms(query, &options);
    let builder = PredicateBuilder::<S::Item>::new(options).fields(fields.unwrap_or_default());

    debug!(
        terms = terms.len(),
        mode = %options.mode,
        ignore_case = options.ignore_case,
        fields = fields.map_or(0, <[Field]>::len),
        "compiling search"
    );

    terms.iter().try_fold(source, |narrowed, term| {
        let predicate = builder.build(term)?;
        trace!(%predicate, "narrowing by term");
        narrowed.narrow(predicate)
    })
}
