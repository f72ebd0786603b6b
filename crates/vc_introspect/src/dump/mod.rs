//! Indented, brace-delimited textual dump of a record tree.
//!
//! [`TreeDump`] is a [`Dispatch`] handler: reflectable fields open a nested
//! block, primitive and fallback fields print their value, anything else
//! prints a `???` placeholder. One tab of indentation per nesting level.
//!
//! ```text
//! Person	aatp;	// is_reflectable
//! {
//! 	String	name= "Jerry";	// String
//! 	i32	age= 81;	// is_fundamental
//! 	HoomansPet	pet;	// is_reflectable
//! 	{
//! 		std:stringy	petsname= "Ruff";	// String
//! 		std:stringy_t	speciesname= "Dog";	// String
//! 	};
//! };
//! ```
//!
//! Every leaf field counts `1`, a nested record counts its own total plus
//! `1`; the tree above reports `5`.

// -----------------------------------------------------------------------------
// Modules

mod error;

// -----------------------------------------------------------------------------
// Exports

pub use error::DumpError;

use core::fmt::{self, Write};

use crate::dispatch::{Dispatch, Fallback, Primitive, dispatch_each};
use crate::record::Descriptor;
use crate::reflectable::Reflectable;

// -----------------------------------------------------------------------------
// TreeDump

/// Writes a record tree into a [`fmt::Write`] sink.
///
/// The extra visitation argument is the nesting depth. After the first
/// failed write the dump stops writing and keeps the error for
/// [`finish`](TreeDump::finish).
pub struct TreeDump<'w, W> {
    out: &'w mut W,
    error: Option<fmt::Error>,
}

impl<'w, W: Write> TreeDump<'w, W> {
    /// Creates a dump writing into `out`.
    #[inline]
    pub fn new(out: &'w mut W) -> Self {
        Self { out, error: None }
    }

    /// Writes `record` under `name` at `depth` and returns the number of
    /// visited fields, nested ones included.
    pub fn record<T: Reflectable>(&mut self, record: &T, name: &str, depth: usize) -> i32 {
        let struct_name = record.struct_name();
        self.line(depth, |out| write!(out, "{struct_name}\t{name};\t// is_reflectable"));
        self.line(depth, |out| out.write_char('{'));
        let count = dispatch_each(record, self, depth + 1);
        self.line(depth, |out| out.write_str("};"));
        count
    }

    /// Returns the first write error, if any.
    pub fn finish(self) -> Result<(), DumpError> {
        match self.error {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    fn line(&mut self, depth: usize, body: impl FnOnce(&mut W) -> fmt::Result) {
        if self.error.is_some() {
            return;
        }

        let result = (0..depth)
            .try_for_each(|_| self.out.write_char('\t'))
            .and_then(|()| body(self.out))
            .and_then(|()| self.out.write_char('\n'));

        if let Err(err) = result {
            log::warn!("field tree sink rejected a write, dump truncated");
            self.error = Some(err);
        }
    }
}

impl<W: Write> Dispatch<usize> for TreeDump<'_, W> {
    fn reflectable<D>(&mut self, field: D, depth: usize) -> i32
    where
        D: Descriptor,
        D::Value: Reflectable,
    {
        self.record(field.value(), field.field_name(), depth) + 1
    }

    fn primitive<D>(&mut self, field: D, depth: usize) -> i32
    where
        D: Descriptor,
        D::Value: Primitive,
    {
        let (ty, name, value) = (field.declared_type_name(), field.field_name(), field.value());
        self.line(depth, |out| write!(out, "{ty}\t{name}= {value};\t// is_fundamental"));
        1
    }

    fn fallback<D>(&mut self, field: D, depth: usize) -> i32
    where
        D: Descriptor,
        D::Value: Fallback,
    {
        let (ty, name, value) = (field.declared_type_name(), field.field_name(), field.value());
        let kind = <D::Value as Fallback>::KIND;
        self.line(depth, |out| {
            write!(out, "{ty}\t{name}= ")?;
            value.render(out)?;
            write!(out, ";\t// {kind}")
        });
        1
    }

    fn unknown<D>(&mut self, field: D, depth: usize) -> i32
    where
        D: Descriptor,
    {
        let (ty, name) = (field.declared_type_name(), field.field_name());
        log::debug!(
            "no handling rule for `{}::{name}` of type `{ty}`, writing a placeholder",
            field.owner_name(),
        );
        self.line(depth, |out| write!(out, "{ty}\t{name};\t// ???"));
        1
    }
}

// -----------------------------------------------------------------------------
// Entry points

/// Dumps `record` under `name` into `out` and returns the visited field
/// count.
///
/// # Examples
///
/// ```
/// use vc_introspect::{derive::declare_record, dump::dump, mark_reflectable};
///
/// declare_record! {
///     struct Point {
///         x: i32,
///         y: i32,
///     }
/// }
///
/// mark_reflectable!(Point);
///
/// let mut text = String::new();
/// let count = dump(&Point { x: 1, y: -2 }, "origin", &mut text).unwrap();
///
/// assert_eq!(count, 2);
/// assert_eq!(
///     text,
///     "Point\torigin;\t// is_reflectable\n{\n\ti32\tx= 1;\t// is_fundamental\n\ti32\ty= -2;\t// is_fundamental\n};\n",
/// );
/// ```
pub fn dump<T, W>(record: &T, name: &str, out: &mut W) -> Result<i32, DumpError>
where
    T: Reflectable,
    W: Write,
{
    let mut tree = TreeDump::new(out);
    let count = tree.record(record, name, 0);
    tree.finish().map(|()| count)
}

/// Dumps `record` into an [`std::io::Write`] sink.
#[cfg(feature = "std")]
pub fn dump_io<T, W>(record: &T, name: &str, out: &mut W) -> Result<i32, DumpError>
where
    T: Reflectable,
    W: std::io::Write,
{
    let mut text = alloc::string::String::new();
    let count = dump(record, name, &mut text)?;
    out.write_all(text.as_bytes())?;
    Ok(count)
}
