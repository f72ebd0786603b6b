use alloc::vec::Vec;

use crate::range::Nat;
use crate::record::{Descriptor, Field, FieldAt, FieldMut};
use crate::visit::{Visitor, VisitorMut};

/// Counts visited fields; every field contributes `1`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CountFields;

impl<A> Visitor<A> for CountFields {
    #[inline(always)]
    fn visit<R, I>(&mut self, _field: Field<'_, R, I>, _args: A) -> i32
    where
        R: FieldAt<I>,
        I: Nat,
    {
        1
    }
}

impl<A> VisitorMut<A> for CountFields {
    #[inline(always)]
    fn visit_mut<R, I>(&mut self, _field: FieldMut<'_, R, I>, _args: A) -> i32
    where
        R: FieldAt<I>,
        I: Nat,
    {
        1
    }
}

/// Collects field display names in visiting order.
#[derive(Debug, Default, Clone)]
pub struct CollectNames {
    names: Vec<&'static str>,
}

impl CollectNames {
    /// The names collected so far.
    #[inline]
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    /// Takes the collected names.
    #[inline]
    pub fn into_names(self) -> Vec<&'static str> {
        self.names
    }
}

impl<A> Visitor<A> for CollectNames {
    fn visit<R, I>(&mut self, field: Field<'_, R, I>, _args: A) -> i32
    where
        R: FieldAt<I>,
        I: Nat,
    {
        self.names.push(field.field_name());
        1
    }
}
