//! Registration macros for `vc_introspect`.
//!
//! See following macros:
//!
//! - [`declare_record`]
//! - [`declare_record_aliased`]
//! - [`Record`](derive_record)
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static RECORD_ATTRIBUTE_NAME: &str = "record";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

use derive_data::RecordDef;

// -----------------------------------------------------------------------------
// Macros

/// # Declare And Register A Struct
///
/// Emits the struct exactly as written and registers every field, in
/// declaration order, under its source spelling.
///
/// ```rust, ignore
/// declare_record! {
///     #[derive(Debug, Clone)]
///     pub struct Person {
///         pub name: String,
///         age: i32,
///         pet: Pet,
///     }
/// }
/// ```
///
/// The struct display name is the struct identifier, each field is displayed
/// with its identifier and its declared type. Type spelling is kept as
/// written with spacing normalized, so `std :: string :: String` shows as
/// `std::string::String` and `Vec < u8 >` as `Vec<u8>`.
///
/// The display strings can be overridden with the same attributes
/// [`derive Record`](derive_record) accepts:
///
/// ```rust, ignore
/// declare_record! {
///     #[record(name = "Player")]
///     struct Person {
///         #[record(type_name = "text", name = "full name")]
///         name: String,
///     }
/// }
/// ```
///
/// ## Errors
///
/// - Generic parameters and `where` clauses.
/// - Two fields with the same identifier.
/// - Unknown or repeated `record(...)` keys.
/// - More than 100 fields. Field indices are types nested one level per
///   field, and deeper nesting overflows the default `recursion_limit`.
///
/// Registering the type does not make it reflectable; that takes a separate
/// `mark_reflectable!`.
#[proc_macro]
pub fn declare_record(input: TokenStream) -> TokenStream {
    let def = parse_macro_input!(input with RecordDef::parse_plain);

    impls::impl_record(&def, true).into()
}

/// # Declare And Register A Struct With Display Aliases
///
/// Same as [`declare_record`], but the struct and every field carry explicit
/// display strings:
///
/// ```rust, ignore
/// declare_record_aliased! {
///     pub struct Pet as "HoomansPet" {
///         name: String as ("std:stringy", "petsname"),
///         species: String as ("std:stringy_t", "speciesname"),
///     }
/// }
/// ```
///
/// The first alias of a field replaces its declared type display string, the
/// second its display name. The Rust identifiers stay untouched, so
/// `pet.name` still compiles.
///
/// ## Errors
///
/// Everything [`declare_record`] rejects, plus a missing alias on the struct
/// or on any field. `record(...)` attributes are not accepted here.
#[proc_macro]
pub fn declare_record_aliased(input: TokenStream) -> TokenStream {
    let def = parse_macro_input!(input with RecordDef::parse_aliased);

    impls::impl_record(&def, true).into()
}

/// # Register A Struct Declared With Ordinary Syntax
///
/// Only structs with named fields are supported.
///
/// ```rust, ignore
/// #[derive(Record)]
/// #[record(name = "Player")]
/// struct Person {
///     #[record(name = "full name")]
///     name: String,
///     #[record(type_name = "int32")]
///     age: i32,
/// }
/// ```
///
/// Available keys:
///
/// - `name = "..."` on the struct: struct display name.
/// - `name = "..."` on a field: field display name.
/// - `type_name = "..."` on a field: declared type display string.
///
/// ## Errors
///
/// Everything [`declare_record`] rejects, plus tuple structs, unit
/// structs, enums and unions.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match RecordDef::from_derive(ast) {
        Ok(def) => impls::impl_record(&def, false).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
