//! Member metadata.
//!
//! A [`Member`] describes one searchable member of a record type: its name,
//! declared type, and how it may be accessed. Record types publish their
//! members through [`Searchable::members`](crate::Searchable::members),
//! normally generated by `#[derive(Searchable)]`.

use std::fmt;

/// Declared type of a member, as far as search is concerned.
#[derive(Clone, Copy)]
pub enum MemberType {
    /// Text. The only type eligible in strict scope.
    String,
    /// Integer types and exact decimals.
    Number,
    /// Floating-point types. Their text form has no SQL counterpart.
    Float,
    /// Boolean.
    Bool,
    /// Opaque scalar with a `Display` form (enums, dates, decimals, ...).
    Text,
    /// Nested record; the function returns the nested type's members.
    Record(fn() -> &'static [Member]),
    /// Sequence or map. Never searched implicitly.
    Collection,
}

impl MemberType {
    /// Returns `true` for [`MemberType::String`].
    pub fn is_string(&self) -> bool {
        matches!(self, MemberType::String)
    }

    /// Returns `true` for [`MemberType::Collection`].
    pub fn is_collection(&self) -> bool {
        matches!(self, MemberType::Collection)
    }

    /// Members of the nested record, if this is a record type.
    pub fn record_members(&self) -> Option<&'static [Member]> {
        match self {
            MemberType::Record(members) => Some(members()),
            _ => None,
        }
    }

    /// Returns the display name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberType::String => "string",
            MemberType::Number => "number",
            MemberType::Float => "float",
            MemberType::Bool => "bool",
            MemberType::Text => "text",
            MemberType::Record(_) => "record",
            MemberType::Collection => "collection",
        }
    }
}

impl fmt::Debug for MemberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MemberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One member of a record type.
///
/// Built with const methods so that member tables can live in statics:
///
/// ```
/// use standout_search::{Member, MemberType};
///
/// static MEMBERS: &[Member] = &[
///     Member::new("title", MemberType::String),
///     Member::new("author", MemberType::String).readonly(),
///     Member::new("isbn", MemberType::String).nullable(),
///     Member::new("year", MemberType::Number),
///     Member::new("chapters", MemberType::Collection),
///     Member::new("secret", MemberType::String).private(),
/// ];
///
/// assert!(MEMBERS[0].is_eligible_strict());
/// assert!(!MEMBERS[1].is_eligible_strict());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Member {
    /// Member name as used by [`Searchable::field_value`](crate::Searchable::field_value).
    pub name: &'static str,
    /// Declared type.
    pub ty: MemberType,
    /// Publicly accessible.
    pub public: bool,
    /// Publicly readable and writable (a settable property).
    pub writable: bool,
    /// May be absent at evaluation time.
    pub nullable: bool,
}

impl Member {
    /// A public, writable, non-nullable member.
    pub const fn new(name: &'static str, ty: MemberType) -> Self {
        Member {
            name,
            ty,
            public: true,
            writable: true,
            nullable: false,
        }
    }

    /// Marks the member as read-only.
    pub const fn readonly(mut self) -> Self {
        self.writable = false;
        self
    }

    /// Marks the member as not publicly accessible.
    pub const fn private(mut self) -> Self {
        self.public = false;
        self
    }

    /// Marks the member as possibly absent.
    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Eligible for implicit discovery in strict scope.
    pub fn is_eligible_strict(&self) -> bool {
        self.public && self.writable && self.ty.is_string()
    }

    /// Eligible for implicit discovery in all scope.
    pub fn is_eligible_all(&self) -> bool {
        self.public && !self.ty.is_collection()
    }
}

/// Looks up a member by name.
pub fn find_member<'m>(members: &'m [Member], name: &str) -> Option<&'m Member> {
    members.iter().find(|m| m.name == name)
}
