//! Attribute parsing for the Searchable derive macro.
//!
//! This module provides parsers for the `#[search(...)]` field attributes
//! used by the `Searchable` derive macro.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Ident, Lit, Meta, Result, Token,
};

/// Declared search type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Text field: `#[search(String)]`
    String,
    /// Integer or exact numeric field: `#[search(Number)]`
    Number,
    /// Floating-point field: `#[search(Float)]`
    Float,
    /// Boolean field: `#[search(Bool)]`
    Bool,
    /// Opaque field searched through `Display`: `#[search(Text)]`
    Text,
    /// Nested searchable record: `#[search(Record)]`
    Record,
    /// Sequence or map, never searched implicitly: `#[search(Collection)]`
    Collection,
}

const EXPECTED: &str = "String, Number, Float, Bool, Text, Record, Collection";

impl SearchType {
    /// Parse a search type from an identifier.
    pub fn from_ident(ident: &Ident) -> Result<Self> {
        SearchType::from_str(&ident.to_string(), ident.span())
    }

    /// Parse a search type from a name.
    pub fn from_str(s: &str, span: Span) -> Result<Self> {
        match s {
            "String" | "string" => Ok(SearchType::String),
            "Number" | "number" => Ok(SearchType::Number),
            "Float" | "float" => Ok(SearchType::Float),
            "Bool" | "bool" | "boolean" => Ok(SearchType::Bool),
            "Text" | "text" | "display" => Ok(SearchType::Text),
            "Record" | "record" | "nested" => Ok(SearchType::Record),
            "Collection" | "collection" => Ok(SearchType::Collection),
            other => Err(Error::new(
                span,
                format!(
                    "unknown search type: '{}'. Expected one of: {}",
                    other, EXPECTED
                ),
            )),
        }
    }
}

/// Field-level attributes from `#[search(...)]`.
#[derive(Debug, Clone)]
pub struct SearchAttr {
    /// Explicit type; inferred from the field type when absent.
    pub search_type: Option<SearchType>,
    /// Leave the field out of the member table.
    pub skip: bool,
    /// Record the member as not writable (ineligible in strict scope).
    pub readonly: bool,
    /// Member name (default: field name).
    pub rename: Option<String>,
    /// The span for error reporting.
    pub span: Span,
}

impl Default for SearchAttr {
    fn default() -> Self {
        SearchAttr {
            search_type: None,
            skip: false,
            readonly: false,
            rename: None,
            span: Span::call_site(),
        }
    }
}

impl Parse for SearchAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = SearchAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                // Flags and type identifiers: search(skip), search(Number), ...
                Meta::Path(p) => {
                    if p.is_ident("skip") {
                        attr.skip = true;
                    } else if p.is_ident("readonly") {
                        attr.readonly = true;
                    } else if let Some(ident) = p.get_ident() {
                        if attr.search_type.is_some() {
                            return Err(Error::new(ident.span(), "search type given twice"));
                        }
                        attr.search_type = Some(SearchType::from_ident(ident)?);
                        attr.span = ident.span();
                    } else {
                        return Err(Error::new(
                            p.span(),
                            format!("expected search type ({}), skip, or readonly", EXPECTED),
                        ));
                    }
                }

                // rename = "name" or ty = "record"
                Meta::NameValue(nv) => {
                    let value = match &nv.value {
                        syn::Expr::Lit(syn::ExprLit {
                            lit: Lit::Str(s), ..
                        }) => s,
                        other => {
                            return Err(Error::new(other.span(), "expected a string literal"));
                        }
                    };
                    if nv.path.is_ident("rename") {
                        attr.rename = Some(value.value());
                    } else if nv.path.is_ident("ty") {
                        attr.search_type = Some(SearchType::from_str(&value.value(), value.span())?);
                        attr.span = value.span();
                    } else {
                        return Err(Error::new(
                            nv.path.span(),
                            "unknown attribute. Expected: rename or ty",
                        ));
                    }
                }

                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown search attribute. Expected a search type, skip, readonly, rename = \"...\", or ty = \"...\"",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

/// Extract `#[search(...)]` attributes from a field's attributes.
pub fn parse_search_attrs(attrs: &[Attribute]) -> Result<SearchAttr> {
    for attr in attrs {
        if attr.path().is_ident("search") {
            return attr.parse_args::<SearchAttr>();
        }
    }
    Ok(SearchAttr::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_search(tokens: &str) -> Result<SearchAttr> {
        syn::parse_str::<SearchAttr>(tokens)
    }

    #[test]
    fn test_search_string() {
        let attr = parse_search("String").unwrap();
        assert_eq!(attr.search_type, Some(SearchType::String));
        assert!(!attr.skip);
        assert!(!attr.readonly);
    }

    #[test]
    fn test_search_lowercase_aliases() {
        assert_eq!(
            parse_search("number").unwrap().search_type,
            Some(SearchType::Number)
        );
        assert_eq!(
            parse_search("float").unwrap().search_type,
            Some(SearchType::Float)
        );
        assert_eq!(
            parse_search("boolean").unwrap().search_type,
            Some(SearchType::Bool)
        );
        assert_eq!(
            parse_search("display").unwrap().search_type,
            Some(SearchType::Text)
        );
    }

    #[test]
    fn test_search_record() {
        let attr = parse_search("Record").unwrap();
        assert_eq!(attr.search_type, Some(SearchType::Record));
    }

    #[test]
    fn test_search_collection() {
        let attr = parse_search("Collection").unwrap();
        assert_eq!(attr.search_type, Some(SearchType::Collection));
    }

    #[test]
    fn test_search_skip() {
        let attr = parse_search("skip").unwrap();
        assert!(attr.skip);
        assert_eq!(attr.search_type, None);
    }

    #[test]
    fn test_search_readonly_with_type() {
        let attr = parse_search("readonly, Text").unwrap();
        assert!(attr.readonly);
        assert_eq!(attr.search_type, Some(SearchType::Text));
    }

    #[test]
    fn test_search_rename() {
        let attr = parse_search(r#"rename = "book_title""#).unwrap();
        assert_eq!(attr.rename, Some("book_title".to_string()));
        assert_eq!(attr.search_type, None);
    }

    #[test]
    fn test_search_ty_with_rename() {
        let attr = parse_search(r#"ty = "record", rename = "publisher""#).unwrap();
        assert_eq!(attr.search_type, Some(SearchType::Record));
        assert_eq!(attr.rename, Some("publisher".to_string()));
    }

    #[test]
    fn test_search_invalid_type() {
        let result = parse_search("Timestamp");
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("unknown search type"));
    }

    #[test]
    fn test_search_type_given_twice() {
        assert!(parse_search("String, Number").is_err());
    }

    #[test]
    fn test_search_rename_requires_string() {
        assert!(parse_search("rename = 3").is_err());
    }
}
