use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::field::{FieldDescriptor, FieldSlot, Form};
use crate::kind::{FieldKind, FloatWidth, IntWidth};

/// One field of a record declared at load time.
///
/// ```toml
/// [[fields]]
/// name = "age"
/// key = "a"
/// type = "u8"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FieldSpec {
    pub name: String,
    /// External key. Missing → the field is looked up under `""`.
    #[serde(default)]
    pub key: Option<String>,
    /// Declared type name, resolved with [`FieldKind::from_type_name`].
    #[serde(rename = "type")]
    pub type_name: String,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, key: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: Some(key.into()),
            type_name: type_name.into(),
        }
    }

    pub fn key(&self) -> &str {
        self.key.as_deref().unwrap_or_default()
    }

    pub fn kind(&self) -> Option<FieldKind> {
        FieldKind::from_type_name(&self.type_name)
    }
}

/// Ordered field declarations of a runtime-shaped record.
///
/// Field order is binding order.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FormSchema {
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl FormSchema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// Fields whose declared type has no conversion rule.
    ///
    /// A schema with such fields still loads; binding fails when it reaches
    /// the first of them.
    pub fn unsupported_fields(&self) -> Vec<&FieldSpec> {
        self.fields.iter().filter(|f| f.kind().is_none()).collect()
    }
}

// ═══════════════════════════════════════════════════════════════
//  Values
// ═══════════════════════════════════════════════════════════════

/// Typed storage of one runtime-declared field.
#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    Text(String),
    /// Holds the declared type name; never receives a value.
    Unsupported(String),
}

impl FormValue {
    /// Zero value of `kind`.
    pub fn zero(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Bool => Self::Bool(false),
            FieldKind::Int(IntWidth::W8) => Self::I8(0),
            FieldKind::Int(IntWidth::W16) => Self::I16(0),
            FieldKind::Int(IntWidth::W32) => Self::I32(0),
            FieldKind::Int(IntWidth::W64) => Self::I64(0),
            FieldKind::Int(IntWidth::Size) => Self::Isize(0),
            FieldKind::UInt(IntWidth::W8) => Self::U8(0),
            FieldKind::UInt(IntWidth::W16) => Self::U16(0),
            FieldKind::UInt(IntWidth::W32) => Self::U32(0),
            FieldKind::UInt(IntWidth::W64) => Self::U64(0),
            FieldKind::UInt(IntWidth::Size) => Self::Usize(0),
            FieldKind::Float(FloatWidth::W32) => Self::F32(0.0),
            FieldKind::Float(FloatWidth::W64) => Self::F64(0.0),
            FieldKind::Text => Self::Text(String::new()),
        }
    }

    fn for_spec(spec: &FieldSpec) -> Self {
        match spec.kind() {
            Some(kind) => Self::zero(kind),
            None => Self::Unsupported(spec.type_name.clone()),
        }
    }

    pub fn slot(&mut self) -> FieldSlot<'_> {
        match self {
            Self::Bool(v) => FieldSlot::Bool(v),
            Self::I8(v) => FieldSlot::I8(v),
            Self::I16(v) => FieldSlot::I16(v),
            Self::I32(v) => FieldSlot::I32(v),
            Self::I64(v) => FieldSlot::I64(v),
            Self::Isize(v) => FieldSlot::Isize(v),
            Self::U8(v) => FieldSlot::U8(v),
            Self::U16(v) => FieldSlot::U16(v),
            Self::U32(v) => FieldSlot::U32(v),
            Self::U64(v) => FieldSlot::U64(v),
            Self::Usize(v) => FieldSlot::Usize(v),
            Self::F32(v) => FieldSlot::F32(v),
            Self::F64(v) => FieldSlot::F64(v),
            Self::Text(v) => FieldSlot::Text(v),
            Self::Unsupported(type_name) => FieldSlot::Unsupported(type_name.as_str()),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Any signed or unsigned integer that fits `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::I8(v) => Some(v.into()),
            Self::I16(v) => Some(v.into()),
            Self::I32(v) => Some(v.into()),
            Self::I64(v) => Some(v),
            Self::Isize(v) => i64::try_from(v).ok(),
            Self::U8(v) => Some(v.into()),
            Self::U16(v) => Some(v.into()),
            Self::U32(v) => Some(v.into()),
            Self::U64(v) => i64::try_from(v).ok(),
            Self::Usize(v) => i64::try_from(v).ok(),
            _ => None,
        }
    }
}

impl Serialize for FormValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::I8(v) => serializer.serialize_i8(*v),
            Self::I16(v) => serializer.serialize_i16(*v),
            Self::I32(v) => serializer.serialize_i32(*v),
            Self::I64(v) => serializer.serialize_i64(*v),
            Self::Isize(v) => serializer.serialize_i64(*v as i64),
            Self::U8(v) => serializer.serialize_u8(*v),
            Self::U16(v) => serializer.serialize_u16(*v),
            Self::U32(v) => serializer.serialize_u32(*v),
            Self::U64(v) => serializer.serialize_u64(*v),
            Self::Usize(v) => serializer.serialize_u64(*v as u64),
            Self::F32(v) => serializer.serialize_f32(*v),
            Self::F64(v) => serializer.serialize_f64(*v),
            Self::Text(v) => serializer.serialize_str(v),
            Self::Unsupported(_) => serializer.serialize_none(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════
//  DynamicForm
// ═══════════════════════════════════════════════════════════════

/// Record whose shape comes from a [`FormSchema`] instead of a Rust struct.
///
/// Serializes as a JSON object keyed by field name, in declaration order.
#[derive(Debug, Clone)]
pub struct DynamicForm {
    schema: Arc<FormSchema>,
    values: Vec<FormValue>,
}

impl DynamicForm {
    /// Every field starts at its kind's zero value.
    pub fn new(schema: Arc<FormSchema>) -> Self {
        let values = schema.fields.iter().map(FormValue::for_spec).collect();
        Self { schema, values }
    }

    /// Value of the field named `name`.
    pub fn get(&self, name: &str) -> Option<&FormValue> {
        self.schema
            .fields
            .iter()
            .position(|f| f.name == name)
            .map(|i| &self.values[i])
    }

    /// Overwrite the initial value of field `name`. Returns `false` when no
    /// such field exists or `value` has a different kind.
    pub fn set(&mut self, name: &str, value: FormValue) -> bool {
        let Some(i) = self.schema.fields.iter().position(|f| f.name == name) else {
            return false;
        };
        if std::mem::discriminant(&self.values[i]) != std::mem::discriminant(&value) {
            return false;
        }
        self.values[i] = value;
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormValue)> {
        self.schema
            .fields
            .iter()
            .zip(&self.values)
            .map(|(spec, value)| (spec.name.as_str(), value))
    }
}

impl Form for DynamicForm {
    fn descriptors(&mut self) -> Vec<FieldDescriptor<'_>> {
        self.schema
            .fields
            .iter()
            .zip(self.values.iter_mut())
            .map(|(spec, value)| FieldDescriptor::new(spec.key(), value.slot()))
            .collect()
    }
}

impl Serialize for DynamicForm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
