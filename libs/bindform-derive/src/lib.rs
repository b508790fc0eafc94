use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields, LitStr};

/// Derive macro for records bound from query / form values.
///
/// Implements `bindform::Form` on the annotated struct: one field
/// descriptor per field, in declaration order.
///
/// # Example
///
/// ```ignore
/// #[derive(Form, Default)]
/// pub struct ContactForm {
///     #[form("name")]
///     pub name: String,
///
///     #[form(key = "age")]
///     pub age: u8,
///
///     #[form(skip)]
///     pub internal: Vec<u8>,
/// }
/// ```
///
/// A field without `#[form(...)]` is bound under the empty key.
/// Supported field types: `bool`, `i8`..`i64`, `isize`, `u8`..`u64`,
/// `usize`, `f32`, `f64`, `String`. Any other type fails to compile.
#[proc_macro_derive(Form, attributes(form))]
pub fn derive_form(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match derive_impl(&input) {
        Ok(tokens) => tokens,
        Err(e) => e.to_compile_error().into(),
    }
}

/// Parsed `#[form(...)]` attribute of one field.
#[derive(Default)]
struct FieldAttr {
    key: Option<LitStr>,
    skip: bool,
}

fn derive_impl(input: &DeriveInput) -> Result<TokenStream, syn::Error> {
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Form only supports structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Form only supports structs",
            ))
        }
    };

    let mut descriptor_tokens = Vec::new();

    for field in fields {
        let field_name = field.ident.as_ref().ok_or_else(|| {
            syn::Error::new_spanned(field, "expected named field")
        })?;
        let field_ty = &field.ty;

        let attr = parse_field_attr(field)?;
        if attr.skip {
            continue;
        }

        // Several fields may share a key; each reads the same raw value.
        let key = attr.key.map(|k| k.value()).unwrap_or_default();

        descriptor_tokens.push(quote! {
            ::bindform::FieldDescriptor::new(
                #key,
                <#field_ty as ::bindform::FormField>::slot(&mut self.#field_name),
            )
        });
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::bindform::Form for #name #ty_generics #where_clause {
            fn descriptors(&mut self) -> ::std::vec::Vec<::bindform::FieldDescriptor<'_>> {
                ::std::vec![
                    #(#descriptor_tokens),*
                ]
            }
        }
    };

    Ok(TokenStream::from(expanded))
}

/// Parse `#[form("key")]`, `#[form(key = "key")]` and `#[form(skip)]`.
fn parse_field_attr(field: &Field) -> Result<FieldAttr, syn::Error> {
    let mut parsed = FieldAttr::default();

    for attr in &field.attrs {
        if !attr.path().is_ident("form") {
            continue;
        }

        // Shorthand: #[form("key")]
        if let Ok(lit) = attr.parse_args::<LitStr>() {
            parsed.key = Some(lit);
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("key") {
                let value: LitStr = meta.value()?.parse()?;
                parsed.key = Some(value);
            } else if meta.path.is_ident("skip") {
                parsed.skip = true;
            } else {
                return Err(meta.error("unknown form attribute (expected `key = \"...\"` or `skip`)"));
            }
            Ok(())
        })?;
    }

    Ok(parsed)
}
