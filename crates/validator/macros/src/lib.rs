//! Procedural macros for structval
//!
//! - **`#[derive(Inspect)]`** - generates the field table `structval`
//!   validates against
//!
//! # Architecture
//!
//! - `inspect/` - attribute parsing and code generation for `Inspect`
//! - `shared/` - input checks shared by derives

use proc_macro::TokenStream;

mod inspect;
mod shared;

// ============================================================================
// INSPECT DERIVE
// ============================================================================

/// Derives `structval::Inspect` for a struct.
///
/// Every field becomes one entry of the record's field table, in declaration
/// order. `pub` fields are exported; any other visibility (including
/// `pub(crate)`) is unexported, and the value of an unexported field is never
/// read.
///
/// # Attributes
///
/// - `#[validate("len:4;in:AAAA,BBBB")]` - the field's constraint spec
///   (also accepted as `#[validate = "..."]` or `#[validate(spec = "...")]`)
/// - `#[validate(rename = "Code")]` - name reported in failures
/// - `#[validate(flatten)]` - splice the fields of an embedded record here
/// - `#[validate(skip)]` - leave the field out of the table
///
/// Options can be combined: `#[validate("min:18", rename = "Age")]`.
///
/// Exported fields with a spec must implement `structval::AsFieldValue`
/// (integers, text, and arrays, vectors or slices of them; floats and `bool`
/// are accepted but never checked).
///
/// # Examples
///
/// ```rust,ignore
/// use structval::Inspect;
///
/// #[derive(Inspect)]
/// struct Audit {
///     #[validate("len:8")]
///     pub actor: String,
/// }
///
/// #[derive(Inspect)]
/// struct Signup {
///     #[validate(flatten)]
///     pub audit: Audit,
///
///     #[validate("min:18", rename = "Age")]
///     pub age: i64,
///
///     #[validate("in:1,2,3")]
///     pub tiers: Vec<u8>,
///
///     secret: String,
/// }
/// ```
#[proc_macro_derive(Inspect, attributes(validate))]
pub fn derive_inspect(input: TokenStream) -> TokenStream {
    inspect::derive_inspect_impl(input)
}
