//! Input validation for derive macros

use syn::{Data, DeriveInput, Fields};

// ============================================================================
// STRUCT VALIDATION
// ============================================================================

/// Validate that input is a struct.
///
/// Named, tuple and unit structs are all accepted; a unit struct simply has
/// an empty field list.
///
/// # Errors
///
/// Returns an error if:
/// - Input is an enum (not a struct)
/// - Input is a union (not supported)
pub(crate) fn require_struct(input: &DeriveInput) -> syn::Result<&Fields> {
    match &input.data {
        Data::Struct(data) => Ok(&data.fields),
        Data::Enum(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "This derive macro can only be applied to structs.\n\
             \n\
             Enums have no fixed field list to inspect.",
        )),
        Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "This derive macro cannot be applied to unions.\n\
             \n\
             Reading a union field requires unsafe code.",
        )),
    }
}

/// Whether a field counts as exported: plain `pub` only.
///
/// Restricted visibilities like `pub(crate)` are treated as private.
pub(crate) fn is_exported(vis: &syn::Visibility) -> bool {
    matches!(vis, syn::Visibility::Public(_))
}

// ============================================================================
// TESTS
// ============================================================================
