//! Field descriptors for command definitions.

/// The declared type of a command field (representation only).
///
/// Typed descriptors are catalog metadata: they document the intended
/// packing of a field and feed the catalog digest. Generic type-directed
/// packing is not performed in this version; commands with hand-written
/// layouts consume their fields by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldType {
    /// Unsigned 8-bit integer.
    #[cfg_attr(feature = "serde", serde(rename = "uint8"))]
    U8,

    /// Unsigned 16-bit integer, big-endian.
    #[cfg_attr(feature = "serde", serde(rename = "uint16"))]
    U16,

    /// Unsigned 32-bit integer, big-endian.
    #[cfg_attr(feature = "serde", serde(rename = "uint32"))]
    U32,
}

impl FieldType {
    /// Returns the boundary name for this type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::U8 => "uint8",
            Self::U16 => "uint16",
            Self::U32 => "uint32",
        }
    }
}

/// A field descriptor within a command definition.
///
/// Untyped descriptors document commands whose encoding is hand-written;
/// they carry no generic packing semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldDef {
    /// Field name, the key operators supply values under.
    pub name: String,
    /// Declared type, if any.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "type", default, skip_serializing_if = "Option::is_none")
    )]
    pub ty: Option<FieldType>,
}

impl FieldDef {
    /// Creates an untyped field descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
        }
    }

    /// Creates a typed field descriptor.
    #[must_use]
    pub fn typed(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty),
        }
    }
}
