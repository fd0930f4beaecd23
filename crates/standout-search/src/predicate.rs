//! Per-term predicate construction.
//!
//! For one search term, [`PredicateBuilder`] produces a single test that
//! matches a record iff at least one candidate member's text form contains
//! the term. Candidates are either discovered through the member selector
//! or supplied by the caller as [`Field`]s.

use std::fmt;
use std::marker::PhantomData;

use crate::error::{Result, SearchError};
use crate::expr::{resolve, Expr, Param};
use crate::field::Field;
use crate::member::MemberType;
use crate::options::SearchOptions;
use crate::select::select_members;
use crate::traits::Searchable;

/// A compiled, side-effect-free test over one record.
///
/// ```text
/// c => c.title.contains("Romeo") || c.author.contains("Romeo")
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    param: Param,
    body: Expr,
}

impl Predicate {
    /// Creates a predicate from a placeholder and a body over it.
    pub fn new(param: Param, body: Expr) -> Self {
        Predicate { param, body }
    }

    /// The placeholder bound to the record under test.
    pub fn param(&self) -> &Param {
        &self.param
    }

    /// The boolean body.
    pub fn body(&self) -> &Expr {
        &self.body
    }

    /// Tests a record.
    pub fn matches<T: Searchable>(&self, record: &T) -> bool {
        self.body.test(&self.param, record)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.param, self.body)
    }
}

/// Builds predicates for record type `T`.
///
/// # Example
///
/// ```
/// use standout_search::{Member, MemberType, PredicateBuilder, SearchOptions, Searchable, Value};
///
/// struct Note {
///     body: String,
/// }
///
/// impl Searchable for Note {
///     fn members() -> &'static [Member] {
///         static MEMBERS: &[Member] = &[Member::new("body", MemberType::String)];
///         MEMBERS
///     }
///
///     fn field_value(&self, name: &str) -> Value<'_> {
///         match name {
///             "body" => Value::String(&self.body),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let predicate = PredicateBuilder::<Note>::new(SearchOptions::new().ignore_case(true))
///     .build("milk")
///     .unwrap();
///
/// assert_eq!(predicate.to_string(), r#"c => c.body.to_uppercase().contains("MILK")"#);
/// assert!(predicate.matches(&Note { body: "Buy Milk".into() }));
/// ```
#[derive(Debug)]
pub struct PredicateBuilder<'f, T> {
    options: SearchOptions,
    fields: &'f [Field],
    _record: PhantomData<fn(&T)>,
}

impl<'f, T: Searchable> PredicateBuilder<'f, T> {
    /// Name of the builder's placeholder.
    pub const PARAM: &'static str = "c";

    /// Creates a builder using implicit member discovery.
    pub fn new(options: impl Into<SearchOptions>) -> Self {
        PredicateBuilder {
            options: options.into(),
            fields: &[],
            _record: PhantomData,
        }
    }

    /// Tests exactly these fields instead of discovered members.
    ///
    /// An empty slice means implicit discovery.
    pub fn fields(mut self, fields: &'f [Field]) -> Self {
        self.fields = fields;
        self
    }

    /// Builds the predicate for one term.
    ///
    /// With case folding enabled the term is uppercased here as well, so
    /// callers may pass it in any case.
    pub fn build(&self, term: &str) -> Result<Predicate> {
        let param = Param::new(Self::PARAM);
        let term = if self.options.ignore_case {
            term.to_uppercase()
        } else {
            term.to_string()
        };

        let candidates = if self.fields.is_empty() {
            self.discovered(&param)
        } else {
            self.explicit(&param)?
        };

        let body = candidates
            .into_iter()
            .map(|(value, nullable)| self.comparison(value, nullable, &term))
            .reduce(Expr::or)
            .ok_or(SearchError::NoSearchableFields {
                type_name: std::any::type_name::<T>(),
            })?;

        Ok(Predicate::new(param, body))
    }

    // Selector members, stringified unless already text.
    fn discovered(&self, param: &Param) -> Vec<(Expr, bool)> {
        select_members::<T>(self.options.mode)
            .into_iter()
            .map(|member| {
                let value = param.expr().member(member.name);
                let value = match member.ty {
                    MemberType::String => value,
                    _ => value.into_text(),
                };
                (value, member.nullable)
            })
            .collect()
    }

    // Caller fields, re-targeted onto our placeholder. No implicit
    // stringification: each field must already evaluate to text.
    fn explicit(&self, param: &Param) -> Result<Vec<(Expr, bool)>> {
        self.fields
            .iter()
            .map(|field| {
                let value = field.bind(param);
                let resolved = resolve::<T>(&value, param)?;
                if !resolved.ty.is_string() {
                    return Err(SearchError::FieldNotText {
                        field: field.to_string(),
                        found: resolved.ty.as_str(),
                    });
                }
                Ok((value, resolved.nullable))
            })
            .collect()
    }

    fn comparison(&self, value: Expr, nullable: bool, term: &str) -> Expr {
        let guard = nullable.then(|| value.clone().not_null());
        let value = if self.options.ignore_case {
            value.upper()
        } else {
            value
        };
        let test = value.contains(term);
        match guard {
            Some(guard) => guard.and(test),
            None => test,
        }
    }
}
