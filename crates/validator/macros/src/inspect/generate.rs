//! Code generation for the Inspect derive
//!
//! The generated `shape()` builds one `structval::Field` per listed struct
//! field, in declaration order, and splices in the fields of flattened
//! members. Values are borrowed only for exported fields that carry a spec.

use super::parse::FieldAttrs;
use crate::shared::validation;
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::ext::IdentExt;
use syn::{DeriveInput, Index, Member};

/// Generate the `Inspect` implementation for a struct.
///
/// # Errors
///
/// Returns an error if:
/// - Input is not a struct
/// - Field attributes are invalid
pub(super) fn generate_inspect(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let fields = validation::require_struct(input)?;

    let mut entries = Vec::with_capacity(fields.len());
    let mut listed = 0usize;

    for (index, field) in fields.iter().enumerate() {
        let attrs = FieldAttrs::from_attributes(&field.attrs)?;
        if attrs.skip {
            continue;
        }

        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index::from(index)),
        };

        if attrs.flatten {
            entries.push(generate_flattened(&member));
            continue;
        }

        let reported = match (&attrs.rename, &field.ident) {
            (Some(rename), _) => rename.value(),
            (None, Some(ident)) => ident.unraw().to_string(),
            (None, None) => index.to_string(),
        };

        listed += 1;
        entries.push(generate_entry(
            &member,
            &reported,
            validation::is_exported(&field.vis),
            &attrs,
        ));
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::structval::Inspect for #name #ty_generics #where_clause {
            fn shape(&self) -> ::structval::Shape<'_> {
                #[allow(unused_mut)]
                let mut fields = ::std::vec::Vec::with_capacity(#listed);
                #(#entries)*
                ::structval::Shape::Record(fields)
            }
        }
    })
}

/// Generate the push of a single field entry.
fn generate_entry(
    member: &Member,
    reported: &str,
    exported: bool,
    attrs: &FieldAttrs,
) -> TokenStream {
    let visibility = if exported {
        quote!(::structval::Visibility::Exported)
    } else {
        quote!(::structval::Visibility::Unexported)
    };

    let mut entry = quote! {
        ::structval::Field::new(#reported, #visibility)
    };

    if let Some(spec) = &attrs.spec {
        entry = quote!(#entry.with_spec(#spec));

        // Private values are never read, so they are never borrowed either.
        if exported {
            let member = member.to_token_stream();
            entry = quote!(#entry.with_value(&self.#member));
        }
    }

    quote! {
        fields.push(#entry);
    }
}

/// Generate the splice of an embedded record's fields.
fn generate_flattened(member: &Member) -> TokenStream {
    quote! {
        fields.extend(
            ::structval::Shape::into_fields(::structval::Inspect::shape(&self.#member))
                .unwrap_or_default(),
        );
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn expand(input: DeriveInput) -> String {
        generate_inspect(&input).unwrap().to_string()
    }

    #[test]
    fn test_exported_field_with_spec_borrows_value() {
        let code = expand(parse_quote! {
            struct Signup {
                #[validate("min:18")]
                pub age: i64,
            }
        });

        assert!(code.contains("impl :: structval :: Inspect for Signup"));
        assert!(code.contains("\"age\""));
        assert!(code.contains(":: structval :: Visibility :: Exported"));
        assert!(code.contains("with_spec (\"min:18\")"));
        assert!(code.contains("with_value (& self . age)"));
    }

    #[test]
    fn test_private_field_is_never_borrowed() {
        let code = expand(parse_quote! {
            struct Signup {
                #[validate("len:3")]
                secret: String,
            }
        });

        assert!(code.contains(":: structval :: Visibility :: Unexported"));
        assert!(code.contains("with_spec (\"len:3\")"));
        assert!(!code.contains("with_value"));
    }

    #[test]
    fn test_untagged_field_is_listed_without_spec() {
        let code = expand(parse_quote! {
            struct Note {
                pub body: String,
            }
        });

        assert!(code.contains("\"body\""));
        assert!(!code.contains("with_spec"));
        assert!(!code.contains("with_value"));
    }

    #[test]
    fn test_rename_and_raw_identifiers() {
        let code = expand(parse_quote! {
            struct Item {
                #[validate("len:4", rename = "Code")]
                pub code: String,
                #[validate("min:1")]
                pub r#type: i32,
            }
        });

        assert!(code.contains("\"Code\""));
        assert!(!code.contains("\"code\""));
        assert!(code.contains("\"type\""));
        assert!(code.contains("with_value (& self . r#type)"));
    }

    #[test]
    fn test_flatten_and_skip() {
        let code = expand(parse_quote! {
            struct Outer {
                #[validate(flatten)]
                pub inner: Inner,
                #[validate(skip)]
                pub cache: Vec<u8>,
            }
        });

        assert!(code.contains("fields . extend"));
        assert!(code.contains(":: structval :: Inspect :: shape (& self . inner)"));
        assert!(!code.contains("cache"));
    }

    #[test]
    fn test_tuple_struct_uses_indices() {
        let code = expand(parse_quote! {
            struct Pair(#[validate("min:0")] pub i64, String);
        });

        assert!(code.contains("\"0\""));
        assert!(code.contains("\"1\""));
        assert!(code.contains("with_value (& self . 0)"));
    }

    #[test]
    fn test_unit_struct_is_empty_record() {
        let code = expand(parse_quote! {
            struct Marker;
        });

        assert!(code.contains("with_capacity (0usize)"));
        assert!(code.contains(":: structval :: Shape :: Record (fields)"));
    }

    #[test]
    fn test_generics_are_forwarded() {
        let code = expand(parse_quote! {
            struct Wrapper<T: Clone> where T: Default {
                pub inner: T,
            }
        });

        assert!(code.contains("impl < T : Clone > :: structval :: Inspect for Wrapper < T >"));
        assert!(code.contains("where T : Default"));
    }

    #[test]
    fn test_rejects_enum() {
        let input: DeriveInput = parse_quote! {
            enum Choice { A, B }
        };
        assert!(generate_inspect(&input).is_err());
    }

    #[test]
    fn test_reports_bad_attribute() {
        let input: DeriveInput = parse_quote! {
            struct Broken {
                #[validate(bogus)]
                pub field: i32,
            }
        };
        let err = generate_inspect(&input).unwrap_err();
        assert!(err.to_string().contains("bogus"));
    }
}
