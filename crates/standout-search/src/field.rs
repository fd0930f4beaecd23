//! Caller-supplied field accessors.
//!
//! A [`Field`] names exactly what to test, bypassing member discovery. It is
//! a small lambda: a placeholder plus an expression over it.

use std::fmt;

use crate::expr::{Expr, Param};
use crate::rebind::Rebinder;

/// An explicit field accessor, `x => <body>`.
///
/// ```
/// use standout_search::Field;
///
/// let title = Field::new("title");
/// let publisher = Field::path(["publisher", "name"]);
/// let year = Field::new("year").into_text();
/// let custom = Field::with(|x| x.member("author"));
///
/// assert_eq!(title.to_string(), "x => x.title");
/// assert_eq!(publisher.to_string(), "x => x.publisher.name");
/// assert_eq!(year.to_string(), "x => x.year.to_string()");
/// assert_eq!(custom.to_string(), "x => x.author");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    param: Param,
    body: Expr,
}

impl Field {
    /// Default placeholder name for fields built by this type.
    pub const PARAM: &'static str = "x";

    /// A single member: `x => x.name`.
    pub fn new(name: impl Into<String>) -> Self {
        Field::with(|x| x.member(name))
    }

    /// A member path through nested records: `x => x.a.b`.
    pub fn path<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Field::with(|x| segments.into_iter().fold(x, |expr, s| expr.member(s)))
    }

    /// An arbitrary body over the default placeholder.
    pub fn with(body: impl FnOnce(Expr) -> Expr) -> Self {
        let param = Param::new(Field::PARAM);
        let body = body(param.expr());
        Field { param, body }
    }

    /// A body written against a caller-chosen placeholder.
    pub fn lambda(param: Param, body: Expr) -> Self {
        Field { param, body }
    }

    /// Opts into stringification: `x => <body>.to_string()`.
    pub fn into_text(self) -> Self {
        Field {
            param: self.param,
            body: self.body.into_text(),
        }
    }

    /// The field's own placeholder.
    pub fn param(&self) -> &Param {
        &self.param
    }

    /// The field's body.
    pub fn body(&self) -> &Expr {
        &self.body
    }

    /// The body re-targeted onto `param`.
    pub fn bind(&self, param: &Param) -> Expr {
        Rebinder::new(&self.param, param).rebind(&self.body)
    }
}

impl From<&str> for Field {
    fn from(name: &str) -> Self {
        Field::new(name)
    }
}

impl From<String> for Field {
    fn from(name: String) -> Self {
        Field::new(name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.param, self.body)
    }
}
