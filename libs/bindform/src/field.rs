use crate::kind::{FieldKind, FloatWidth, IntWidth};

/// Writable handle to the storage of one record field.
///
/// One variant per concrete field type, so the converter can write the
/// parsed value at its exact width. `Unsupported` is only produced by
/// records whose shape is declared at runtime ([`crate::schema`]); compiled
/// records cannot name an unsupported type.
#[derive(Debug)]
pub enum FieldSlot<'a> {
    Bool(&'a mut bool),
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    Isize(&'a mut isize),
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    Usize(&'a mut usize),
    F32(&'a mut f32),
    F64(&'a mut f64),
    Text(&'a mut String),
    /// Declared type name outside the supported set.
    Unsupported(&'a str),
}

impl FieldSlot<'_> {
    /// `None` for [`FieldSlot::Unsupported`].
    pub fn kind(&self) -> Option<FieldKind> {
        let kind = match self {
            Self::Bool(_) => FieldKind::Bool,
            Self::I8(_) => FieldKind::Int(IntWidth::W8),
            Self::I16(_) => FieldKind::Int(IntWidth::W16),
            Self::I32(_) => FieldKind::Int(IntWidth::W32),
            Self::I64(_) => FieldKind::Int(IntWidth::W64),
            Self::Isize(_) => FieldKind::Int(IntWidth::Size),
            Self::U8(_) => FieldKind::UInt(IntWidth::W8),
            Self::U16(_) => FieldKind::UInt(IntWidth::W16),
            Self::U32(_) => FieldKind::UInt(IntWidth::W32),
            Self::U64(_) => FieldKind::UInt(IntWidth::W64),
            Self::Usize(_) => FieldKind::UInt(IntWidth::Size),
            Self::F32(_) => FieldKind::Float(FloatWidth::W32),
            Self::F64(_) => FieldKind::Float(FloatWidth::W64),
            Self::Text(_) => FieldKind::Text,
            Self::Unsupported(_) => return None,
        };
        Some(kind)
    }
}

/// Pairing of an external key with one field's storage.
#[derive(Debug)]
pub struct FieldDescriptor<'a> {
    /// External key looked up in the input source. Empty when the field
    /// declares no key.
    pub key: &'a str,
    pub slot: FieldSlot<'a>,
}

impl<'a> FieldDescriptor<'a> {
    pub fn new(key: &'a str, slot: FieldSlot<'a>) -> Self {
        Self { key, slot }
    }
}

/// A record whose fields can be bound from textual input.
///
/// Usually derived:
///
/// ```ignore
/// #[derive(Form, Default)]
/// pub struct ContactForm {
///     #[form("name")]
///     pub name: String,
///     #[form(key = "age")]
///     pub age: u8,
/// }
/// ```
pub trait Form {
    /// Field descriptors in declaration order.
    fn descriptors(&mut self) -> Vec<FieldDescriptor<'_>>;
}

/// Field storage types a record may declare.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be bound from form input",
    note = "supported field types: bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, String"
)]
pub trait FormField {
    fn slot(&mut self) -> FieldSlot<'_>;
}

macro_rules! impl_form_field {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl FormField for $ty {
                fn slot(&mut self) -> FieldSlot<'_> {
                    FieldSlot::$variant(self)
                }
            }
        )*
    };
}

impl_form_field! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    String => Text,
}
