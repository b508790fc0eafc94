use std::fmt;

/// Bit width of an integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
    /// Pointer-sized (`isize` / `usize`).
    Size,
}

/// Bit width of a floating point field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatWidth {
    W32,
    W64,
}

/// Semantic kind of a bindable field.
///
/// The set is closed: every kind has exactly one conversion rule in
/// [`crate::convert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Bool,
    Int(IntWidth),
    UInt(IntWidth),
    Float(FloatWidth),
    Text,
}

impl FieldKind {
    /// Resolve a declared type name into a kind.
    ///
    /// Accepts Rust primitive names (`i32`, `u8`, `f64`, `String`, ...) and a
    /// few config-friendly aliases (`int`, `uint`, `float`, `text`, ...).
    /// Aliases without an explicit width map to 64 bits.
    pub fn from_type_name(name: &str) -> Option<Self> {
        let kind = match name {
            "bool" | "boolean" => Self::Bool,
            "i8" => Self::Int(IntWidth::W8),
            "i16" => Self::Int(IntWidth::W16),
            "i32" => Self::Int(IntWidth::W32),
            "i64" | "int" | "integer" => Self::Int(IntWidth::W64),
            "isize" => Self::Int(IntWidth::Size),
            "u8" => Self::UInt(IntWidth::W8),
            "u16" => Self::UInt(IntWidth::W16),
            "u32" => Self::UInt(IntWidth::W32),
            "u64" | "uint" => Self::UInt(IntWidth::W64),
            "usize" => Self::UInt(IntWidth::Size),
            "f32" => Self::Float(FloatWidth::W32),
            "f64" | "float" | "double" => Self::Float(FloatWidth::W64),
            "String" | "string" | "str" | "text" => Self::Text,
            _ => return None,
        };
        Some(kind)
    }

    /// Rust type name of the field storage for this kind.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int(IntWidth::W8) => "i8",
            Self::Int(IntWidth::W16) => "i16",
            Self::Int(IntWidth::W32) => "i32",
            Self::Int(IntWidth::W64) => "i64",
            Self::Int(IntWidth::Size) => "isize",
            Self::UInt(IntWidth::W8) => "u8",
            Self::UInt(IntWidth::W16) => "u16",
            Self::UInt(IntWidth::W32) => "u32",
            Self::UInt(IntWidth::W64) => "u64",
            Self::UInt(IntWidth::Size) => "usize",
            Self::Float(FloatWidth::W32) => "f32",
            Self::Float(FloatWidth::W64) => "f64",
            Self::Text => "String",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
