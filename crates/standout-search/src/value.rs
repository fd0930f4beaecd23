//! Runtime value types for member access.
//!
//! The [`Value`] enum represents the runtime value of a member extracted from
//! a record. Every value has a canonical text form, which is what search terms
//! are matched against.

use std::borrow::Cow;
use std::fmt;

use crate::traits::NestedRecord;

/// Runtime value of a member, borrowed from the source record.
///
/// # Example
///
/// ```
/// use standout_search::{Value, Number};
///
/// struct Book {
///     title: String,
///     year: u16,
///     isbn: Option<String>,
/// }
///
/// fn value<'a>(book: &'a Book, member: &str) -> Value<'a> {
///     match member {
///         "title" => Value::String(&book.title),
///         "year" => Value::Number(Number::from(book.year)),
///         "isbn" => book.isbn.as_deref().map_or(Value::None, Value::String),
///         _ => Value::None,
///     }
/// }
/// ```
#[derive(Clone, Copy)]
pub enum Value<'a> {
    /// String value (borrowed).
    String(&'a str),
    /// Numeric value.
    Number(Number),
    /// Boolean value.
    Bool(bool),
    /// Opaque scalar searched through its `Display` form (enums, dates, ...).
    Text(&'a dyn fmt::Display),
    /// Nested record. Navigable by explicit fields, searched implicitly
    /// through its `Display` form.
    Record(&'a dyn NestedRecord),
    /// Member absent, null, or not readable.
    None,
}

impl<'a> Value<'a> {
    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Returns `true` if this is a `String` value.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if this is a `Record` value.
    pub fn is_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the nested record, if present.
    pub fn as_record(&self) -> Option<&'a dyn NestedRecord> {
        match self {
            Value::Record(r) => Some(*r),
            _ => None,
        }
    }

    /// Canonical text form used for matching.
    ///
    /// Strings are returned as-is, numbers in decimal, everything else
    /// through `Display`. Absent values have no text form.
    pub fn to_text(&self) -> Option<Cow<'a, str>> {
        match self {
            Value::String(s) => Some(Cow::Borrowed(s)),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            Value::Text(d) => Some(Cow::Owned(d.to_string())),
            Value::Record(r) => Some(Cow::Owned(r.to_string())),
            Value::None => None,
        }
    }

    /// Returns the display name of this value's kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Number(_) => "number",
            Value::Bool(_) => "bool",
            Value::Text(_) => "text",
            Value::Record(_) => "record",
            Value::None => "none",
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Text(d) => f.debug_tuple("Text").field(&d.to_string()).finish(),
            Value::Record(r) => f.debug_tuple("Record").field(&r.to_string()).finish(),
            Value::None => f.write_str("None"),
        }
    }
}

// Opaque values compare by their text form.
impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a.to_string() == b.to_string(),
            (Value::Record(a), Value::Record(b)) => a.to_string() == b.to_string(),
            (Value::None, Value::None) => true,
            _ => false,
        }
    }
}

/// Numeric value supporting all common numeric types.
///
/// Numbers are stored in one of three variants to preserve precision:
/// - `I64` for signed integers
/// - `U64` for unsigned integers
/// - `F64` for floating point
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{}", n),
            Number::U64(n) => write!(f, "{}", n),
            Number::F64(n) => write!(f, "{}", n),
        }
    }
}

macro_rules! number_from {
    ($variant:ident, $wide:ty: $($ty:ty),+) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self {
                    Number::$variant(n as $wide)
                }
            }
        )+
    };
}

number_from!(I64, i64: i8, i16, i32, i64, isize);
number_from!(U64, u64: u8, u16, u32, u64, usize);
number_from!(F64, f64: f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum Status {
        Sold,
    }

    impl fmt::Display for Status {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt::Debug::fmt(self, f)
        }
    }

    #[test]
    fn value_type_checks() {
        assert!(Value::String("test").is_string());
        assert!(Value::None.is_none());
        assert!(!Value::Number(Number::I64(1)).is_string());
        assert_eq!(Value::Bool(true).kind(), "bool");
    }

    #[test]
    fn text_form_of_scalars() {
        assert_eq!(Value::String("Othello").to_text().as_deref(), Some("Othello"));
        assert_eq!(Value::Number(Number::from(1597u16)).to_text().as_deref(), Some("1597"));
        assert_eq!(Value::Number(Number::from(-3i32)).to_text().as_deref(), Some("-3"));
        assert_eq!(Value::Number(Number::from(99.99f64)).to_text().as_deref(), Some("99.99"));
        assert_eq!(Value::Bool(false).to_text().as_deref(), Some("false"));
        assert_eq!(Value::Text(&Status::Sold).to_text().as_deref(), Some("Sold"));
    }

    #[test]
    fn absent_value_has_no_text() {
        assert_eq!(Value::None.to_text(), None);
    }

    #[test]
    fn string_text_is_borrowed() {
        let text = Value::String("raw").to_text();
        assert!(matches!(text, Some(Cow::Borrowed("raw"))));
    }

    #[test]
    fn opaque_values_compare_by_text() {
        assert_eq!(Value::Text(&Status::Sold), Value::Text(&"Sold"));
        assert_ne!(Value::Text(&Status::Sold), Value::String("Sold"));
    }

    #[test]
    fn number_conversions() {
        assert_eq!(Number::from(42i32), Number::I64(42));
        assert_eq!(Number::from(42u32), Number::U64(42));
        assert_eq!(Number::from(42.5f64), Number::F64(42.5));
    }
}
