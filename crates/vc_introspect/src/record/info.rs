use core::fmt;

// -----------------------------------------------------------------------------
// FieldInfo

/// Static metadata of one registered field.
///
/// # Examples
///
/// ```
/// use vc_introspect::{Record, derive::declare_record};
///
/// declare_record! {
///     struct Point {
///         x: f32,
///         y: f32,
///     }
/// }
///
/// let y = Point::INFO.field_at(1).unwrap();
/// assert_eq!(y.index(), 1);
/// assert_eq!(y.type_name(), "f32");
/// assert_eq!(y.name(), "y");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldInfo {
    index: usize,
    type_name: &'static str,
    name: &'static str,
}

impl FieldInfo {
    /// Creates the metadata for the field at `index`.
    #[inline]
    pub const fn new(index: usize, type_name: &'static str, name: &'static str) -> Self {
        Self {
            index,
            type_name,
            name,
        }
    }

    /// Position of the field in declaration order.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Declared type display string.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Field display name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for FieldInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.type_name)
    }
}

// -----------------------------------------------------------------------------
// RecordInfo

/// Static metadata of a registered record: its display name and the
/// table of its fields, indexed by declaration order.
///
/// One table exists per type and is shared by every instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RecordInfo {
    name: &'static str,
    fields: &'static [FieldInfo],
}

impl RecordInfo {
    /// Creates a metadata table.
    #[inline]
    pub const fn new(name: &'static str, fields: &'static [FieldInfo]) -> Self {
        Self { name, fields }
    }

    /// Struct display name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// All fields in declaration order.
    #[inline]
    pub const fn fields(&self) -> &'static [FieldInfo] {
        self.fields
    }

    /// Number of fields.
    #[inline]
    pub const fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the field at `index`, if any.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&'static FieldInfo> {
        self.fields.get(index)
    }

    /// Returns the first field whose display name is `name`.
    pub fn field_named(&self, name: &str) -> Option<&'static FieldInfo> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Iterates over the display names of all fields.
    pub fn field_names(&self) -> impl ExactSizeIterator<Item = &'static str> + use<> {
        self.fields.iter().map(FieldInfo::name)
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec::Vec};

    use super::{FieldInfo, RecordInfo};

    const FIELDS: &[FieldInfo] = &[
        FieldInfo::new(0, "u8", "red"),
        FieldInfo::new(1, "u8", "green"),
        FieldInfo::new(2, "u8", "blue"),
    ];

    const COLOR: RecordInfo = RecordInfo::new("Color", FIELDS);

    #[test]
    fn lookups() {
        assert_eq!(COLOR.name(), "Color");
        assert_eq!(COLOR.field_len(), 3);
        assert_eq!(COLOR.field_at(2).map(FieldInfo::name), Some("blue"));
        assert_eq!(COLOR.field_at(3), None);
        assert_eq!(COLOR.field_named("green").map(FieldInfo::index), Some(1));
        assert_eq!(COLOR.field_named("alpha"), None);
        assert_eq!(
            COLOR.field_names().collect::<Vec<_>>(),
            ["red", "green", "blue"]
        );
    }

    #[test]
    fn display() {
        assert_eq!(FIELDS[0].to_string(), "red: u8");
    }
}
