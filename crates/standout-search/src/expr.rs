//! Unevaluated predicate expressions.
//!
//! Search predicates are built as a small expression tree rather than as
//! closures, so the same predicate can be evaluated in memory or translated
//! into a store's native filter language. An expression refers to the record
//! under test through a [`Param`] placeholder.
//!
//! ```text
//! c => c.isbn != null && c.isbn.contains("1234") || c.year.to_string().contains("1234")
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::error::{Result, SearchError};
use crate::member::{find_member, Member, MemberType};
use crate::traits::Searchable;
use crate::value::Value;

/// Placeholder standing for "the record" inside an expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Param(Cow<'static, str>);

impl Param {
    /// Creates a placeholder with the given name.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Param(name.into())
    }

    /// The placeholder's name.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// An expression referring to this placeholder.
    pub fn expr(&self) -> Expr {
        Expr::Param(self.clone())
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// The record placeholder.
    Param(Param),
    /// Member access on a record.
    Member { target: Box<Expr>, name: String },
    /// Canonical text form of a value.
    ToText(Box<Expr>),
    /// Invariant uppercase of a text value.
    Upper(Box<Expr>),
    /// The value is not absent.
    IsPresent(Box<Expr>),
    /// Substring test against a constant.
    Contains { haystack: Box<Expr>, needle: String },
    /// Short-circuit conjunction.
    And(Box<Expr>, Box<Expr>),
    /// Short-circuit disjunction.
    Or(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Member access: `self.name`.
    pub fn member(self, name: impl Into<String>) -> Expr {
        Expr::Member {
            target: Box::new(self),
            name: name.into(),
        }
    }

    /// Text form: `self.to_string()`.
    pub fn into_text(self) -> Expr {
        Expr::ToText(Box::new(self))
    }

    /// Uppercase: `self.to_uppercase()`.
    pub fn upper(self) -> Expr {
        Expr::Upper(Box::new(self))
    }

    /// Presence guard: `self != null`.
    pub fn not_null(self) -> Expr {
        Expr::IsPresent(Box::new(self))
    }

    /// Substring test: `self.contains(needle)`.
    pub fn contains(self, needle: impl Into<String>) -> Expr {
        Expr::Contains {
            haystack: Box::new(self),
            needle: needle.into(),
        }
    }

    /// `self && other`.
    pub fn and(self, other: Expr) -> Expr {
        Expr::And(Box::new(self), Box::new(other))
    }

    /// `self || other`.
    pub fn or(self, other: Expr) -> Expr {
        Expr::Or(Box::new(self), Box::new(other))
    }

    /// Evaluates this expression as a test over `record`, with `param`
    /// bound to it.
    ///
    /// Absent values propagate silently: member access on an absent record
    /// is absent, and an absent value never contains anything.
    pub fn test<T: Searchable>(&self, param: &Param, record: &T) -> bool {
        self.eval(param, record).truthy()
    }

    fn eval<'a, T: Searchable>(&self, param: &Param, record: &'a T) -> Operand<'a> {
        match self {
            Expr::Param(p) if p == param => Operand::Root,
            Expr::Param(_) => Operand::Value(Value::None),
            Expr::Member { target, name } => match target.eval(param, record) {
                Operand::Root => Operand::Value(record.field_value(name)),
                Operand::Value(Value::Record(nested)) => Operand::Value(nested.field_value(name)),
                _ => Operand::Value(Value::None),
            },
            Expr::ToText(inner) => match inner.eval(param, record) {
                Operand::Value(value) => value
                    .to_text()
                    .map_or(Operand::Value(Value::None), Operand::Text),
                Operand::Text(text) => Operand::Text(text),
                Operand::Bool(b) => Operand::Text(Cow::Owned(b.to_string())),
                Operand::Root => Operand::Value(Value::None),
            },
            Expr::Upper(inner) => match inner.eval(param, record).into_text() {
                Some(text) => Operand::Text(Cow::Owned(text.to_uppercase())),
                None => Operand::Value(Value::None),
            },
            Expr::IsPresent(inner) => Operand::Bool(!inner.eval(param, record).is_absent()),
            Expr::Contains { haystack, needle } => Operand::Bool(
                haystack
                    .eval(param, record)
                    .into_text()
                    .is_some_and(|text| text.contains(needle.as_str())),
            ),
            Expr::And(a, b) => Operand::Bool(a.test(param, record) && b.test(param, record)),
            Expr::Or(a, b) => Operand::Bool(a.test(param, record) || b.test(param, record)),
        }
    }

    fn needs_parens_in_and(&self) -> bool {
        matches!(self, Expr::Or(..))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Param(p) => write!(f, "{}", p),
            Expr::Member { target, name } => write!(f, "{}.{}", target, name),
            Expr::ToText(inner) => write!(f, "{}.to_string()", inner),
            Expr::Upper(inner) => write!(f, "{}.to_uppercase()", inner),
            Expr::IsPresent(inner) => write!(f, "{} != null", inner),
            Expr::Contains { haystack, needle } => write!(f, "{}.contains({:?})", haystack, needle),
            Expr::And(a, b) => {
                for (i, side) in [a, b].into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(" && ")?;
                    }
                    if side.needs_parens_in_and() {
                        write!(f, "({})", side)?;
                    } else {
                        write!(f, "{}", side)?;
                    }
                }
                Ok(())
            }
            Expr::Or(a, b) => write!(f, "{} || {}", a, b),
        }
    }
}

/// Intermediate evaluation result.
enum Operand<'a> {
    Root,
    Value(Value<'a>),
    Text(Cow<'a, str>),
    Bool(bool),
}

impl<'a> Operand<'a> {
    fn truthy(&self) -> bool {
        matches!(self, Operand::Bool(true) | Operand::Value(Value::Bool(true)))
    }

    fn is_absent(&self) -> bool {
        matches!(self, Operand::Value(Value::None))
    }

    // Only string-typed operands take part in text operations.
    fn into_text(self) -> Option<Cow<'a, str>> {
        match self {
            Operand::Text(text) => Some(text),
            Operand::Value(Value::String(s)) => Some(Cow::Borrowed(s)),
            _ => None,
        }
    }
}

/// Statically resolved type of an expression.
#[derive(Debug, Clone, Copy)]
pub(crate) enum StaticType {
    Record(&'static [Member]),
    Scalar(MemberType),
    Bool,
}

impl StaticType {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            StaticType::Record(_) => "record",
            StaticType::Scalar(ty) => ty.as_str(),
            StaticType::Bool => "bool",
        }
    }

    pub(crate) fn is_string(&self) -> bool {
        matches!(self, StaticType::Scalar(MemberType::String))
    }
}

/// Type and nullability of an expression.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Resolved {
    pub(crate) ty: StaticType,
    pub(crate) nullable: bool,
}

/// Resolves the static type of `expr` with `param` bound to a `T` record.
pub(crate) fn resolve<T: Searchable>(expr: &Expr, param: &Param) -> Result<Resolved> {
    resolve_in(expr, param, T::members(), std::any::type_name::<T>())
}

fn resolve_in(
    expr: &Expr,
    param: &Param,
    root: &'static [Member],
    root_name: &str,
) -> Result<Resolved> {
    match expr {
        Expr::Param(p) if p == param => Ok(Resolved {
            ty: StaticType::Record(root),
            nullable: false,
        }),
        Expr::Param(p) => Err(SearchError::UnboundParameter {
            name: p.name().to_string(),
        }),
        Expr::Member { target, name } => {
            let parent = resolve_in(target, param, root, root_name)?;
            let members = match parent.ty {
                StaticType::Record(members) => members,
                _ => {
                    return Err(SearchError::NotARecord {
                        name: target.to_string(),
                    })
                }
            };
            let member = find_member(members, name).ok_or_else(|| SearchError::UnknownMember {
                owner: match target.as_ref() {
                    Expr::Param(_) => root_name.to_string(),
                    other => other.to_string(),
                },
                name: name.clone(),
            })?;
            let ty = match member.ty.record_members() {
                Some(nested) => StaticType::Record(nested),
                None => StaticType::Scalar(member.ty),
            };
            Ok(Resolved {
                ty,
                nullable: parent.nullable || member.nullable,
            })
        }
        Expr::ToText(inner) | Expr::Upper(inner) => {
            if matches!(inner.as_ref(), Expr::Param(p) if p == param) {
                return Err(SearchError::RecordNotText {
                    expr: expr.to_string(),
                });
            }
            let inner = resolve_in(inner, param, root, root_name)?;
            Ok(Resolved {
                ty: StaticType::Scalar(MemberType::String),
                nullable: inner.nullable,
            })
        }
        Expr::IsPresent(inner) => {
            resolve_in(inner, param, root, root_name)?;
            Ok(Resolved {
                ty: StaticType::Bool,
                nullable: false,
            })
        }
        Expr::Contains { haystack, .. } => {
            resolve_in(haystack, param, root, root_name)?;
            Ok(Resolved {
                ty: StaticType::Bool,
                nullable: false,
            })
        }
        Expr::And(a, b) | Expr::Or(a, b) => {
            resolve_in(a, param, root, root_name)?;
            resolve_in(b, param, root, root_name)?;
            Ok(Resolved {
                ty: StaticType::Bool,
                nullable: false,
            })
        }
    }
}
