use crate::convert::convert;
use crate::error::BindError;
use crate::field::Form;
use crate::source::{RequestValues, Source};

/// Bind every field of `record` from `source`, in declaration order.
///
/// Stops at the first field that fails to convert. Fields bound before it
/// keep their new values; it and every later field keep their old ones.
pub fn bind<S, F>(source: &S, record: &mut F) -> Result<(), BindError>
where
    S: Source + ?Sized,
    F: Form + ?Sized,
{
    for descriptor in record.descriptors() {
        let raw = source.value(descriptor.key);
        tracing::trace!(
            key = descriptor.key,
            kind = ?descriptor.slot.kind(),
            empty = raw.is_empty(),
            "binding field"
        );
        convert(descriptor.slot, raw).map_err(|e| BindError::new(descriptor.key, e))?;
    }
    Ok(())
}

/// Bind from body values, falling back to the query string per key.
pub fn bind_form<F: Form + ?Sized>(values: &RequestValues, record: &mut F) -> Result<(), BindError> {
    bind(&values.combined(), record)
}

/// Bind from submitted body values only.
pub fn bind_post_form<F: Form + ?Sized>(values: &RequestValues, record: &mut F) -> Result<(), BindError> {
    bind(&values.body_only(), record)
}
