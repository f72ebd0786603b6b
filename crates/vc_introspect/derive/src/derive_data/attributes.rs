//! `#[record(...)]` attributes.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, LitStr};

use crate::RECORD_ATTRIBUTE_NAME;

#[inline]
pub(crate) fn is_record_attr(attr: &Attribute) -> bool {
    attr.path().is_ident(RECORD_ATTRIBUTE_NAME)
}

/// Reads a `key = "..."` value, rejecting a second occurrence of the key.
fn set_once(slot: &mut Option<LitStr>, meta: &ParseNestedMeta) -> syn::Result<()> {
    let value: LitStr = meta.value()?.parse()?;
    if slot.replace(value).is_some() {
        return Err(meta.error("duplicate record attribute"));
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// Type Attributes

/// Struct level: `#[record(name = "...")]`.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    pub name: Option<LitStr>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs.iter().filter(|attr| is_record_attr(attr)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    set_once(&mut this.name, &meta)
                } else {
                    Err(meta.error("unknown record attribute, expected `name`"))
                }
            })?;
        }

        Ok(this)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

// -----------------------------------------------------------------------------
// Field Attributes

/// Field level: `#[record(type_name = "...", name = "...")]`.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    pub type_name: Option<LitStr>,
    pub name: Option<LitStr>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs.iter().filter(|attr| is_record_attr(attr)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    set_once(&mut this.name, &meta)
                } else if meta.path.is_ident("type_name") {
                    set_once(&mut this.type_name, &meta)
                } else {
                    Err(meta.error("unknown record attribute, expected `name` or `type_name`"))
                }
            })?;
        }

        Ok(this)
    }
}
