//! Parsing of #[validate(...)] attributes

use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ExprLit, Ident, Lit, LitStr, Meta, Token};

/// Inspect attributes for a field.
#[derive(Debug, Default, Clone)]
pub(super) struct FieldAttrs {
    /// Constraint spec, kept verbatim; it is parsed at validation time.
    pub spec: Option<LitStr>,
    pub rename: Option<LitStr>,
    pub flatten: bool,
    pub skip: bool,
}

/// One comma-separated option inside `#[validate(...)]`.
enum ValidateArg {
    Spec(LitStr),
    Rename(LitStr),
    Flatten(Ident),
    Skip(Ident),
}

impl Parse for ValidateArg {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        if input.peek(LitStr) {
            return Ok(Self::Spec(input.parse()?));
        }

        let ident: Ident = input.parse()?;
        match ident.to_string().as_str() {
            "spec" => {
                input.parse::<Token![=]>()?;
                Ok(Self::Spec(input.parse()?))
            }
            "rename" => {
                input.parse::<Token![=]>()?;
                Ok(Self::Rename(input.parse()?))
            }
            "flatten" => Ok(Self::Flatten(ident)),
            "skip" => Ok(Self::Skip(ident)),
            other => Err(syn::Error::new(
                ident.span(),
                format!(
                    "unknown validate option `{other}`; expected a spec string, \
                     `spec = \"...\"`, `rename = \"...\"`, `flatten` or `skip`"
                ),
            )),
        }
    }
}

impl FieldAttrs {
    /// Parse inspect attributes from a list of attributes.
    ///
    /// Several `#[validate]` attributes on one field are merged; giving the
    /// same option twice is an error.
    pub(super) fn from_attributes(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("validate") {
                continue;
            }

            match &attr.meta {
                // #[validate = "min:1"]
                Meta::NameValue(meta) => match &meta.value {
                    Expr::Lit(ExprLit {
                        lit: Lit::Str(spec),
                        ..
                    }) => result.set_spec(spec.clone())?,
                    other => {
                        return Err(syn::Error::new_spanned(
                            other,
                            "expected a string literal spec, e.g. #[validate = \"min:1\"]",
                        ));
                    }
                },
                Meta::List(_) => {
                    let args = attr.parse_args_with(
                        Punctuated::<ValidateArg, Token![,]>::parse_terminated,
                    )?;
                    for arg in args {
                        result.apply(arg)?;
                    }
                }
                Meta::Path(path) => {
                    return Err(syn::Error::new_spanned(
                        path,
                        "#[validate] needs arguments, e.g. #[validate(\"min:1\")]",
                    ));
                }
            }
        }

        result.check_combination(attrs)?;
        Ok(result)
    }

    fn apply(&mut self, arg: ValidateArg) -> syn::Result<()> {
        match arg {
            ValidateArg::Spec(spec) => self.set_spec(spec),
            ValidateArg::Rename(name) => {
                if self.rename.is_some() {
                    return Err(syn::Error::new_spanned(name, "duplicate `rename` option"));
                }
                if name.value().is_empty() {
                    return Err(syn::Error::new_spanned(name, "`rename` cannot be empty"));
                }
                self.rename = Some(name);
                Ok(())
            }
            ValidateArg::Flatten(ident) => {
                if self.flatten {
                    return Err(syn::Error::new(ident.span(), "duplicate `flatten` option"));
                }
                self.flatten = true;
                Ok(())
            }
            ValidateArg::Skip(ident) => {
                if self.skip {
                    return Err(syn::Error::new(ident.span(), "duplicate `skip` option"));
                }
                self.skip = true;
                Ok(())
            }
        }
    }

    fn set_spec(&mut self, spec: LitStr) -> syn::Result<()> {
        if self.spec.is_some() {
            return Err(syn::Error::new_spanned(
                spec,
                "duplicate spec; join clauses with `;` in one string instead",
            ));
        }
        self.spec = Some(spec);
        Ok(())
    }

    fn check_combination(&self, attrs: &[Attribute]) -> syn::Result<()> {
        let span_of = || {
            attrs
                .iter()
                .find(|attr| attr.path().is_ident("validate"))
                .map_or_else(proc_macro2::Span::call_site, |attr| {
                    syn::spanned::Spanned::span(attr)
                })
        };

        if self.flatten && self.skip {
            return Err(syn::Error::new(
                span_of(),
                "`flatten` and `skip` cannot be combined",
            ));
        }
        if self.flatten && (self.spec.is_some() || self.rename.is_some()) {
            return Err(syn::Error::new(
                span_of(),
                "a flattened field has no entry of its own; \
                 put specs on the embedded struct's fields",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
