//! SQL translation source.
//!
//! [`SqlQuery`] narrows by translating each predicate into a parameterized
//! SQL boolean fragment instead of evaluating it. The rendered statement
//! targets SQLite:
//!
//! | Expression | SQL |
//! |------------|-----|
//! | `c.title` | `"title"` |
//! | `c.publisher.name` | `"publisher"."name"` |
//! | `x.to_string()` | `CAST(x AS TEXT)` |
//! | `x.to_uppercase()` | `UPPER(x)` |
//! | `x != null` | `x IS NOT NULL` |
//! | `x.contains("t")` | `instr(x, ?) > 0` |
//!
//! Nested members are qualified with the member's name, so the statement
//! expects a joined table (or alias) of that name. Use [`SqlQuery::join`].
//!
//! Stringifying a [`MemberType::Float`] member is rejected: SQLite writes
//! `10.0` and `1.0e+20` where Rust writes `10` and `100000000000000000000`.

use std::fmt;
use std::marker::PhantomData;

use tracing::debug;

use crate::error::SqlError;
use crate::expr::{resolve, Expr, Param, StaticType};
use crate::member::MemberType;
use crate::predicate::Predicate;
use crate::source::Source;
use crate::traits::Searchable;

const NO_TEXT_FORM: &str = "nested records have no SQL text form";

/// A `SELECT` over one table, narrowed by translated predicates.
///
/// SQLite's `UPPER` folds ASCII letters only, while in-memory evaluation
/// uses [`str::to_uppercase`]. With [`SearchFlags::IGNORE_CASE`] a term such
/// as `"café"` finds `Café` in memory but not through SQL. Terms made of
/// ASCII letters select the same rows on both paths.
///
/// [`SearchFlags::IGNORE_CASE`]: crate::SearchFlags::IGNORE_CASE
///
/// ```
/// use standout_search::{Member, MemberType, SearchExt, Searchable, SqlQuery, Value};
///
/// struct Song {
///     title: String,
/// }
///
/// impl Searchable for Song {
///     fn members() -> &'static [Member] {
///         static MEMBERS: &[Member] = &[Member::new("title", MemberType::String)];
///         MEMBERS
///     }
///
///     fn field_value(&self, name: &str) -> Value<'_> {
///         match name {
///             "title" => Value::String(&self.title),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let (sql, params) = SqlQuery::<Song>::new("songs").search("blue moon").unwrap().to_sql();
/// assert_eq!(
///     sql,
///     r#"SELECT * FROM "songs" WHERE (instr("title", ?) > 0) AND (instr("title", ?) > 0)"#
/// );
/// assert_eq!(params, ["blue", "moon"]);
/// ```
pub struct SqlQuery<T> {
    table: String,
    joins: Vec<String>,
    clauses: Vec<String>,
    params: Vec<String>,
    _record: PhantomData<fn(&T)>,
}

impl<T> SqlQuery<T> {
    /// Selects every row of `table`.
    pub fn new(table: impl Into<String>) -> Self {
        SqlQuery {
            table: table.into(),
            joins: Vec::new(),
            clauses: Vec::new(),
            params: Vec::new(),
            _record: PhantomData,
        }
    }

    /// Appends a join clause, verbatim. Only the main table's columns are
    /// selected once a join is present.
    pub fn join(mut self, clause: impl Into<String>) -> Self {
        self.joins.push(clause.into());
        self
    }

    /// One translated fragment per narrowing.
    pub fn clauses(&self) -> &[String] {
        &self.clauses
    }

    /// Bound parameters, in placeholder order.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Returns `true` if nothing has narrowed the query.
    pub fn is_identity(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Renders the statement and its parameters.
    pub fn to_sql(&self) -> (String, Vec<String>) {
        (self.to_string(), self.params.clone())
    }
}

impl<T> fmt::Display for SqlQuery<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = quote(&self.table);
        if self.joins.is_empty() {
            write!(f, "SELECT * FROM {}", table)?;
        } else {
            write!(f, "SELECT {}.* FROM {}", table, table)?;
            for join in &self.joins {
                write!(f, " {}", join)?;
            }
        }
        for (i, clause) in self.clauses.iter().enumerate() {
            let keyword = if i == 0 { "WHERE" } else { "AND" };
            write!(f, " {} ({})", keyword, clause)?;
        }
        Ok(())
    }
}

impl<T> fmt::Debug for SqlQuery<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqlQuery")
            .field("sql", &self.to_string())
            .field("params", &self.params)
            .finish()
    }
}

impl<T: Searchable> Source for SqlQuery<T> {
    type Item = T;
    type Error = SqlError;

    fn narrow(mut self, predicate: Predicate) -> Result<Self, SqlError> {
        let mut params = Vec::new();
        let clause = Translator::<T>::new(predicate.param(), &mut params).expr(predicate.body())?;
        debug!(table = %self.table, %clause, params = params.len(), "translated predicate");
        self.clauses.push(clause);
        self.params.extend(params);
        Ok(self)
    }
}

struct Translator<'a, T> {
    param: &'a Param,
    params: &'a mut Vec<String>,
    _record: PhantomData<fn(&T)>,
}

impl<'a, T: Searchable> Translator<'a, T> {
    fn new(param: &'a Param, params: &'a mut Vec<String>) -> Self {
        Translator {
            param,
            params,
            _record: PhantomData,
        }
    }

    fn expr(&mut self, expr: &Expr) -> Result<String, SqlError> {
        match expr {
            Expr::Param(_) => Err(unsupported(expr, NO_TEXT_FORM)),
            Expr::Member { .. } => self.column(expr),
            Expr::ToText(inner) => {
                let ty = resolve::<T>(inner, self.param)?.ty;
                match ty {
                    StaticType::Scalar(MemberType::String) => self.expr(inner),
                    StaticType::Scalar(MemberType::Number | MemberType::Text) => {
                        Ok(format!("CAST({} AS TEXT)", self.expr(inner)?))
                    }
                    // Match the in-memory text form of booleans.
                    StaticType::Scalar(MemberType::Bool) | StaticType::Bool => Ok(format!(
                        "CASE WHEN {} THEN 'true' ELSE 'false' END",
                        self.expr(inner)?
                    )),
                    StaticType::Scalar(MemberType::Float) => Err(unsupported(
                        expr,
                        "SQLite renders floats differently (`10.0`, `1.0e+20`)",
                    )),
                    StaticType::Scalar(MemberType::Collection) => {
                        Err(unsupported(expr, "collections have no SQL text form"))
                    }
                    StaticType::Record(_) | StaticType::Scalar(MemberType::Record(_)) => {
                        Err(unsupported(expr, NO_TEXT_FORM))
                    }
                }
            }
            Expr::Upper(inner) => Ok(format!("UPPER({})", self.expr(inner)?)),
            Expr::IsPresent(inner) => Ok(format!("{} IS NOT NULL", self.expr(inner)?)),
            Expr::Contains { haystack, needle } => {
                let haystack = self.expr(haystack)?;
                self.params.push(needle.clone());
                Ok(format!("instr({}, ?) > 0", haystack))
            }
            Expr::And(a, b) => {
                let a = self.operand_of_and(a)?;
                let b = self.operand_of_and(b)?;
                Ok(format!("{} AND {}", a, b))
            }
            Expr::Or(a, b) => Ok(format!("{} OR {}", self.expr(a)?, self.expr(b)?)),
        }
    }

    fn operand_of_and(&mut self, expr: &Expr) -> Result<String, SqlError> {
        let sql = self.expr(expr)?;
        Ok(match expr {
            Expr::Or(..) => format!("({})", sql),
            _ => sql,
        })
    }

    fn column(&self, expr: &Expr) -> Result<String, SqlError> {
        if let StaticType::Record(_) = resolve::<T>(expr, self.param)?.ty {
            return Err(unsupported(expr, NO_TEXT_FORM));
        }

        let mut path = Vec::new();
        let mut node = expr;
        while let Expr::Member { target, name } = node {
            path.push(name.as_str());
            node = target;
        }
        // resolve() has already rejected foreign placeholders.
        match path.as_slice() {
            [column] => Ok(quote(column)),
            [column, table, ..] => Ok(format!("{}.{}", quote(table), quote(column))),
            [] => Err(unsupported(expr, NO_TEXT_FORM)),
        }
    }
}

fn unsupported(expr: &Expr, reason: &'static str) -> SqlError {
    SqlError::Unsupported {
        expr: expr.to_string(),
        reason,
    }
}

fn quote(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}
