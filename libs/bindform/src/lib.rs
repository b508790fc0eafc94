//! Bind URL query and form values into the fields of a record.
//!
//! A record exposes its fields as [`FieldDescriptor`]s (external key plus a
//! typed storage slot), usually through `#[derive(Form)]`. The binder looks
//! each key up in a [`Source`] and converts the raw string to the field's
//! kind. Parsing the HTTP request itself is left to the caller.

pub mod bind;
pub mod convert;
pub mod error;
pub mod field;
pub mod kind;
pub mod schema;
pub mod source;

pub use bindform_derive::Form;

pub use bind::{bind, bind_form, bind_post_form};
pub use convert::convert;
pub use error::{BindError, ConvertError};
pub use field::{FieldDescriptor, FieldSlot, Form, FormField};
pub use kind::{FieldKind, FloatWidth, IntWidth};
pub use schema::{DynamicForm, FieldSpec, FormSchema, FormValue};
pub use source::{BodyOnly, Combined, FormValues, RequestValues, Source};
