//! Implementation of the `#[derive(Searchable)]` macro.
//!
//! This macro generates an implementation of the `Searchable` trait (a
//! static member table plus a by-name accessor) and member name constants.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    ext::IdentExt, spanned::Spanned, Data, DeriveInput, Error, Fields, GenericArgument,
    PathArguments, Result, Type, Visibility,
};

use crate::attrs::{parse_search_attrs, SearchType};

/// Main implementation of the Searchable derive macro.
pub fn searchable_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;

    // Member tables live in statics, which cannot mention generic parameters.
    if !input.generics.params.is_empty() {
        return Err(Error::new(
            input.generics.span(),
            "Searchable cannot be derived for generic structs; implement it manually",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Searchable can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Searchable can only be derived for structs",
            ))
        }
    };

    let mut members: Vec<TokenStream> = Vec::new();
    let mut value_arms: Vec<TokenStream> = Vec::new();
    let mut member_constants: Vec<TokenStream> = Vec::new();

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let attrs = parse_search_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }

        let (inner_ty, nullable) = match option_inner(&field.ty) {
            Some(inner) => (inner, true),
            None => (&field.ty, false),
        };
        let search_type = match attrs.search_type {
            Some(t) => t,
            None => infer_search_type(inner_ty)?,
        };

        let member_name = attrs
            .rename
            .unwrap_or_else(|| field_name.unraw().to_string());

        let const_name = format_ident!("{}", to_screaming_snake_case(&member_name));
        member_constants.push(quote! {
            /// Member name constant for explicit fields.
            pub const #const_name: &'static str = #member_name;
        });

        let member_type = match search_type {
            SearchType::String => quote! { ::standout_search::MemberType::String },
            SearchType::Number => quote! { ::standout_search::MemberType::Number },
            SearchType::Float => quote! { ::standout_search::MemberType::Float },
            SearchType::Bool => quote! { ::standout_search::MemberType::Bool },
            SearchType::Text => quote! { ::standout_search::MemberType::Text },
            SearchType::Record => quote! {
                ::standout_search::MemberType::Record(
                    <#inner_ty as ::standout_search::Searchable>::members
                )
            },
            SearchType::Collection => quote! { ::standout_search::MemberType::Collection },
        };

        let mut member = quote! { ::standout_search::Member::new(#member_name, #member_type) };
        if attrs.readonly {
            member.extend(quote! { .readonly() });
        }
        if !matches!(field.vis, Visibility::Public(_)) {
            member.extend(quote! { .private() });
        }
        if nullable {
            member.extend(quote! { .nullable() });
        }
        members.push(member);

        // Collections always read as absent; the wildcard arm covers them.
        if search_type == SearchType::Collection {
            continue;
        }

        let value = quote! { __search_value };
        let value_expr = match search_type {
            SearchType::String => quote! { ::standout_search::Value::String(#value) },
            SearchType::Number | SearchType::Float => quote! {
                ::standout_search::Value::Number(::standout_search::Number::from(*#value))
            },
            SearchType::Bool => quote! { ::standout_search::Value::Bool(*#value) },
            SearchType::Text => quote! { ::standout_search::Value::Text(#value) },
            SearchType::Record => quote! { ::standout_search::Value::Record(#value) },
            SearchType::Collection => quote! { ::standout_search::Value::None },
        };

        let arm = if nullable {
            quote! {
                #member_name => match &self.#field_name {
                    ::std::option::Option::Some(#value) => #value_expr,
                    ::std::option::Option::None => ::standout_search::Value::None,
                },
            }
        } else {
            quote! {
                #member_name => {
                    let #value = &self.#field_name;
                    #value_expr
                }
            }
        };
        value_arms.push(arm);
    }

    let expanded = quote! {
        impl #struct_name {
            #(#member_constants)*
        }

        impl ::standout_search::Searchable for #struct_name {
            fn members() -> &'static [::standout_search::Member] {
                static MEMBERS: &[::standout_search::Member] = &[#(#members),*];
                MEMBERS
            }

            fn field_value(&self, name: &str) -> ::standout_search::Value<'_> {
                match name {
                    #(#value_arms)*
                    _ => ::standout_search::Value::None,
                }
            }
        }
    };

    Ok(expanded)
}

/// Returns `T` for a field typed `Option<T>`.
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    match &segment.arguments {
        PathArguments::AngleBracketed(args) => match args.args.first()? {
            GenericArgument::Type(inner) => Some(inner),
            _ => None,
        },
        _ => None,
    }
}

/// Infers the search type from the field's syntax.
///
/// Nested records cannot be told apart from other structs here and need an
/// explicit `#[search(Record)]`; unknown named types fall back to `Text`.
fn infer_search_type(ty: &Type) -> Result<SearchType> {
    match ty {
        Type::Reference(r) => infer_search_type(&r.elem),
        Type::Paren(p) => infer_search_type(&p.elem),
        Type::Group(g) => infer_search_type(&g.elem),
        Type::Array(_) | Type::Slice(_) => Ok(SearchType::Collection),
        Type::Path(path) => {
            let ident = match path.path.segments.last() {
                Some(segment) => segment.ident.to_string(),
                None => return Ok(SearchType::Text),
            };
            Ok(match ident.as_str() {
                "String" | "str" | "Cow" => SearchType::String,
                "i8" | "i16" | "i32" | "i64" | "isize" | "u8" | "u16" | "u32" | "u64"
                | "usize" => SearchType::Number,
                "f32" | "f64" => SearchType::Float,
                "bool" => SearchType::Bool,
                "Vec" | "VecDeque" | "LinkedList" | "HashMap" | "HashSet" | "BTreeMap"
                | "BTreeSet" | "BinaryHeap" => SearchType::Collection,
                _ => SearchType::Text,
            })
        }
        other => Err(Error::new(
            other.span(),
            "cannot infer a search type for this field; add #[search(<type>)] or #[search(skip)]",
        )),
    }
}

/// Convert a string to SCREAMING_SNAKE_CASE.
fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_was_lower = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev_was_lower {
                result.push('_');
            }
            result.push(c);
            prev_was_lower = false;
        } else if c == '_' || c == '-' || c == ' ' {
            result.push('_');
            prev_was_lower = false;
        } else {
            result.push(c.to_ascii_uppercase());
            prev_was_lower = c.is_alphanumeric();
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_screaming_snake_case() {
        assert_eq!(to_screaming_snake_case("title"), "TITLE");
        assert_eq!(to_screaming_snake_case("published_at"), "PUBLISHED_AT");
        assert_eq!(to_screaming_snake_case("publishedAt"), "PUBLISHED_AT");
        assert_eq!(to_screaming_snake_case("my-field"), "MY_FIELD");
    }

    #[test]
    fn test_option_inner() {
        let ty: Type = parse_quote!(Option<String>);
        let inner = option_inner(&ty).map(|t| quote!(#t).to_string());
        assert_eq!(inner.as_deref(), Some("String"));

        let ty: Type = parse_quote!(std::option::Option<u32>);
        assert!(option_inner(&ty).is_some());

        let ty: Type = parse_quote!(Vec<String>);
        assert!(option_inner(&ty).is_none());
    }

    #[test]
    fn test_infer_search_type() {
        let cases: Vec<(Type, SearchType)> = vec![
            (parse_quote!(String), SearchType::String),
            (parse_quote!(&'static str), SearchType::String),
            (parse_quote!(Cow<'static, str>), SearchType::String),
            (parse_quote!(u16), SearchType::Number),
            (parse_quote!(f64), SearchType::Float),
            (parse_quote!(bool), SearchType::Bool),
            (parse_quote!(Vec<String>), SearchType::Collection),
            (parse_quote!(std::collections::HashMap<String, u8>), SearchType::Collection),
            (parse_quote!([u8; 4]), SearchType::Collection),
            (parse_quote!(Genre), SearchType::Text),
        ];
        for (ty, expected) in cases {
            assert_eq!(infer_search_type(&ty).unwrap(), expected);
        }
    }

    #[test]
    fn test_tuple_field_needs_attribute() {
        let ty: Type = parse_quote!((u8, u8));
        assert!(infer_search_type(&ty).is_err());
    }

    #[test]
    fn test_generic_structs_are_rejected() {
        let input: DeriveInput = parse_quote! {
            struct Wrapper<T> {
                pub inner: T,
            }
        };
        let err = searchable_derive_impl(input).unwrap_err();
        assert!(err.to_string().contains("generic"));
    }

    #[test]
    fn test_tuple_structs_are_rejected() {
        let input: DeriveInput = parse_quote! {
            struct Pair(String, String);
        };
        assert!(searchable_derive_impl(input).is_err());
    }

    #[test]
    fn test_generated_member_table() {
        let input: DeriveInput = parse_quote! {
            struct Book {
                pub title: String,
                #[search(readonly)]
                pub author: String,
                pub isbn: Option<String>,
                year: u16,
                #[search(skip)]
                pub id: u64,
            }
        };
        let output = searchable_derive_impl(input).unwrap().to_string();
        assert!(output.contains("pub const TITLE"));
        assert!(!output.contains("\"id\""));
        assert!(output.contains("readonly"));
        assert!(output.contains("private"));
        assert!(output.contains("nullable"));
    }
}
