use std::collections::BTreeMap;

use syn::ext::IdentExt;
use syn::parse::ParseStream;
use syn::spanned::Spanned;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, LitStr, Token, Type, Visibility};
use syn::{braced, parenthesized};

use super::attributes::{FieldAttributes, TypeAttributes, is_record_attr};
use crate::utils::type_display;

const GENERICS_ERROR: &str = "generic records are not supported, \
    field capabilities are resolved on concrete types";

/// Field indices are nested `S<S<..Z>>` types, each level is one step of
/// trait resolution under the default `recursion_limit`.
pub(crate) const MAX_FIELDS: usize = 100;

/// Which registration syntax is being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Syntax {
    /// `struct Name { field: Type }`
    Plain,
    /// `struct Name as "Display" { field: Type as ("type", "name") }`
    Aliased,
}

// -----------------------------------------------------------------------------
// Field

/// One registered field with its display strings resolved.
pub(crate) struct FieldDef {
    /// Attributes passed through to the emitted field, `record(...)` removed.
    pub attrs: Vec<Attribute>,
    pub vis: Visibility,
    pub ident: Ident,
    pub ty: Type,
    pub type_name: LitStr,
    pub name: LitStr,
}

impl FieldDef {
    fn new(
        attrs: Vec<Attribute>,
        vis: Visibility,
        ident: Ident,
        ty: Type,
        aliases: Option<(LitStr, LitStr)>,
    ) -> syn::Result<Self> {
        let field_attrs = FieldAttributes::parse_attrs(&attrs)?;

        let (type_name, name) = match aliases {
            Some(aliases) => aliases,
            None => (
                field_attrs
                    .type_name
                    .unwrap_or_else(|| LitStr::new(&type_display(&ty), ty.span())),
                field_attrs
                    .name
                    .unwrap_or_else(|| LitStr::new(&ident.unraw().to_string(), ident.span())),
            ),
        };

        Ok(Self {
            attrs: attrs.into_iter().filter(|attr| !is_record_attr(attr)).collect(),
            vis,
            ident,
            ty,
            type_name,
            name,
        })
    }

    /// Format: `#[attrs] vis ident: Type` or, aliased,
    /// `#[attrs] vis ident: Type as ("type display", "field display")`.
    fn parse(input: ParseStream, syntax: Syntax) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis: Visibility = input.parse()?;
        let ident: Ident = input.parse()?;
        input.parse::<Token![:]>()?;
        let ty: Type = input.parse()?;

        let aliases = match syntax {
            Syntax::Plain => None,
            Syntax::Aliased => {
                if let Some(attr) = attrs.iter().find(|attr| is_record_attr(attr)) {
                    return Err(syn::Error::new_spanned(
                        attr,
                        "`record(...)` attributes are not accepted by aliased registration",
                    ));
                }
                if !input.peek(Token![as]) {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!(
                            "field `{ident}` is missing its aliases, \
                            expected `as (\"type display\", \"field display\")`"
                        ),
                    ));
                }
                input.parse::<Token![as]>()?;

                let inner;
                parenthesized!(inner in input);
                let type_name: LitStr = inner.parse()?;
                inner.parse::<Token![,]>()?;
                let name: LitStr = inner.parse()?;
                // Optional trailing comma.
                if !inner.is_empty() {
                    inner.parse::<Token![,]>()?;
                }
                Some((type_name, name))
            }
        };

        Self::new(attrs, vis, ident, ty, aliases)
    }
}

// -----------------------------------------------------------------------------
// Record

/// A registered struct: its emitted shape and all display strings.
pub(crate) struct RecordDef {
    /// Attributes passed through to the emitted struct, `record(...)` removed.
    pub attrs: Vec<Attribute>,
    pub vis: Visibility,
    pub ident: Ident,
    pub name: LitStr,
    pub fields: Vec<FieldDef>,
}

impl RecordDef {
    /// Parse the input stream of [`declare_record`](crate::declare_record).
    ///
    /// Format: `#[attrs] vis struct Name { #[attrs] vis field: Type, ... }`
    pub fn parse_plain(input: ParseStream) -> syn::Result<Self> {
        Self::parse(input, Syntax::Plain)
    }

    /// Parse the input stream of
    /// [`declare_record_aliased`](crate::declare_record_aliased).
    ///
    /// Format: `#[attrs] vis struct Name as "Display" { vis field: Type as ("type", "name"), ... }`
    pub fn parse_aliased(input: ParseStream) -> syn::Result<Self> {
        Self::parse(input, Syntax::Aliased)
    }

    fn parse(input: ParseStream, syntax: Syntax) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis: Visibility = input.parse()?;
        input.parse::<Token![struct]>()?;
        let ident: Ident = input.parse()?;

        if input.peek(Token![<]) || input.peek(Token![where]) {
            return Err(input.error(GENERICS_ERROR));
        }

        let type_attrs = TypeAttributes::parse_attrs(&attrs)?;

        let name = match syntax {
            Syntax::Plain => type_attrs.name,
            Syntax::Aliased => {
                if !type_attrs.is_empty() {
                    return Err(input.error(
                        "`record(...)` attributes are not accepted by aliased registration",
                    ));
                }
                if !input.peek(Token![as]) {
                    return Err(input.error(format!(
                        "struct `{ident}` is missing its alias, expected `as \"DisplayName\"`"
                    )));
                }
                input.parse::<Token![as]>()?;
                Some(input.parse::<LitStr>()?)
            }
        };

        if input.peek(Token![<]) || input.peek(Token![where]) {
            return Err(input.error(GENERICS_ERROR));
        }

        let content;
        braced!(content in input);

        let mut fields = Vec::new();
        while !content.is_empty() {
            fields.push(FieldDef::parse(&content, syntax)?);
            if content.is_empty() {
                break;
            }
            content.parse::<Token![,]>()?;
        }

        Self::new(attrs, vis, ident, name, fields)
    }

    /// Build from the input of [`derive Record`](crate::derive_record).
    pub fn from_derive(ast: DeriveInput) -> syn::Result<Self> {
        if !ast.generics.params.is_empty() || ast.generics.where_clause.is_some() {
            return Err(syn::Error::new_spanned(&ast.generics, GENERICS_ERROR));
        }

        let named = match ast.data {
            Data::Struct(data) => match data.fields {
                Fields::Named(named) => named.named,
                Fields::Unnamed(_) | Fields::Unit => {
                    return Err(syn::Error::new(
                        ast.ident.span(),
                        "`Record` can only be derived for structs with named fields",
                    ));
                }
            },
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "`Record` can only be derived for structs",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "`Record` can only be derived for structs",
                ));
            }
        };

        let type_attrs = TypeAttributes::parse_attrs(&ast.attrs)?;

        let fields = named
            .into_iter()
            .map(|field| {
                // Named fields always carry an identifier.
                let ident = field.ident.ok_or_else(|| {
                    syn::Error::new(field.ty.span(), "expected a named field")
                })?;
                FieldDef::new(field.attrs, field.vis, ident, field.ty, None)
            })
            .collect::<syn::Result<Vec<_>>>()?;

        Self::new(ast.attrs, ast.vis, ast.ident, type_attrs.name, fields)
    }

    fn new(
        attrs: Vec<Attribute>,
        vis: Visibility,
        ident: Ident,
        name: Option<LitStr>,
        fields: Vec<FieldDef>,
    ) -> syn::Result<Self> {
        if fields.len() > MAX_FIELDS {
            return Err(syn::Error::new(
                ident.span(),
                format!(
                    "struct `{ident}` has {} fields, records support at most {MAX_FIELDS}",
                    fields.len()
                ),
            ));
        }

        check_duplicates(&fields)?;

        let name = name.unwrap_or_else(|| LitStr::new(&ident.unraw().to_string(), ident.span()));

        Ok(Self {
            attrs: attrs.into_iter().filter(|attr| !is_record_attr(attr)).collect(),
            vis,
            ident,
            name,
            fields,
        })
    }
}

/// Rejects two fields declared with the same identifier.
fn check_duplicates(fields: &[FieldDef]) -> syn::Result<()> {
    let mut seen = BTreeMap::new();

    for field in fields {
        let key = field.ident.unraw().to_string();
        if let Some(first) = seen.insert(key, field.ident.span()) {
            let mut err = syn::Error::new(
                field.ident.span(),
                format!("duplicate field `{}`", field.ident),
            );
            err.combine(syn::Error::new(first, "first declared here"));
            return Err(err);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use syn::parse::Parser;

    use super::{MAX_FIELDS, RecordDef};

    fn plain(src: &str) -> syn::Result<RecordDef> {
        RecordDef::parse_plain.parse_str(src)
    }

    fn aliased(src: &str) -> syn::Result<RecordDef> {
        RecordDef::parse_aliased.parse_str(src)
    }

    fn derived(src: &str) -> syn::Result<RecordDef> {
        RecordDef::from_derive(syn::parse_str(src)?)
    }

    fn names(def: &RecordDef) -> Vec<(String, String)> {
        def.fields
            .iter()
            .map(|field| (field.type_name.value(), field.name.value()))
            .collect()
    }

    #[test]
    fn plain_fields() {
        let def = plain(
            "#[derive(Debug)] pub struct Person { pub name: String, age: i32, tags: Vec<u8>, }",
        )
        .unwrap();

        assert_eq!(def.ident, "Person");
        assert_eq!(def.name.value(), "Person");
        assert_eq!(def.attrs.len(), 1);
        assert_eq!(
            names(&def),
            [
                ("String".to_owned(), "name".to_owned()),
                ("i32".to_owned(), "age".to_owned()),
                ("Vec<u8>".to_owned(), "tags".to_owned()),
            ]
        );
    }

    #[test]
    fn plain_with_record_attributes() {
        let def = plain(
            r#"#[record(name = "Player")] struct Person {
                #[record(type_name = "text", name = "full name")] name: String,
                r#type: u8
            }"#,
        )
        .unwrap();

        assert_eq!(def.name.value(), "Player");
        assert!(def.attrs.is_empty());
        assert!(def.fields[0].attrs.is_empty());
        assert_eq!(
            names(&def),
            [
                ("text".to_owned(), "full name".to_owned()),
                ("u8".to_owned(), "type".to_owned()),
            ]
        );
    }

    #[test]
    fn empty_struct() {
        let def = plain("struct Nothing {}").unwrap();
        assert!(def.fields.is_empty());
    }

    #[test]
    fn aliased_fields() {
        let def = aliased(
            r#"struct Pet as "HoomansPet" {
                name: String as ("std:stringy", "petsname"),
                species: String as ("std:stringy_t", "speciesname"),
            }"#,
        )
        .unwrap();

        assert_eq!(def.ident, "Pet");
        assert_eq!(def.name.value(), "HoomansPet");
        assert_eq!(
            names(&def),
            [
                ("std:stringy".to_owned(), "petsname".to_owned()),
                ("std:stringy_t".to_owned(), "speciesname".to_owned()),
            ]
        );
    }

    #[test]
    fn missing_aliases() {
        assert!(aliased(r#"struct Pet { name: String as ("a", "b") }"#).is_err());
        assert!(aliased(r#"struct Pet as "P" { name: String }"#).is_err());
        assert!(aliased(r#"struct Pet as "P" { name: String as ("a") }"#).is_err());
    }

    #[test]
    fn rejects_duplicates() {
        let err = plain("struct Twice { a: u8, b: u8, a: u16 }").err().unwrap();
        assert!(err.to_string().contains("duplicate field `a`"));
    }

    #[test]
    fn rejects_generics() {
        assert!(plain("struct Wrapper<T> { value: T }").is_err());
        assert!(aliased(r#"struct Wrapper<T> as "W" { value: T as ("T", "v") }"#).is_err());
        assert!(derived("struct Wrapper<T> { value: T }").is_err());
        assert!(derived("struct Bounded where u8: Copy { value: u8 }").is_err());
    }

    #[test]
    fn field_limit() {
        let wide = |len: usize| {
            let fields: String = (0..len).map(|i| format!("f{i}: u8, ")).collect();
            format!("struct Wide {{ {fields} }}")
        };

        let def = plain(&wide(MAX_FIELDS)).unwrap();
        assert_eq!(def.fields.len(), MAX_FIELDS);
        assert_eq!(def.fields[MAX_FIELDS - 1].name.value(), "f99");

        let err = plain(&wide(MAX_FIELDS + 1)).err().unwrap();
        assert!(err.to_string().contains("at most 100"));

        let err = derived(&wide(MAX_FIELDS + 1)).err().unwrap();
        assert!(err.to_string().contains("has 101 fields"));
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(plain(r#"#[record(title = "x")] struct A {}"#).is_err());
        assert!(plain(r#"struct A { #[record(label = "x")] a: u8 }"#).is_err());
        assert!(derived(r#"#[record(name = "x", name = "y")] struct A {}"#).is_err());
    }

    #[test]
    fn derive_shapes() {
        let def = derived(
            r#"#[record(name = "Label")] struct A { #[record(name = "alias")] count: usize }"#,
        )
        .unwrap();
        assert_eq!(def.name.value(), "Label");
        assert_eq!(names(&def), [("usize".to_owned(), "alias".to_owned())]);

        assert!(derived("struct Tuple(u8, u8);").is_err());
        assert!(derived("struct Unit;").is_err());
        assert!(derived("enum Choice { A, B }").is_err());
        assert!(derived("union Bits { a: u8, b: i8 }").is_err());
    }
}
