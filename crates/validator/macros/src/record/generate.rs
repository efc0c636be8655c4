//! Code generation for `#[derive(Record)]`
//!
//! Each field turns into one `Field` descriptor: the reported name, the
//! `AsFieldValue` view of the field, and a `const` constraint table.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::{DeriveInput, Ident, WherePredicate, parse_quote};

use super::parse::{FieldAttrs, RawConstraint};
use crate::support::validation;

/// Generate the `Record` impl for a struct.
///
/// # Errors
///
/// Returns an error if the input is not a struct with named fields, or if a
/// field attribute is malformed.
pub(super) fn generate_record(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let fields = validation::require_named_struct(input)?;

    let type_params: Vec<&Ident> = input.generics.type_params().map(|p| &p.ident).collect();
    let mut generics = input.generics.clone();
    let mut descriptors = Vec::with_capacity(fields.named.len());

    for field in &fields.named {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
        let attrs = FieldAttrs::from_attributes(&field.attrs)?;

        let reported = attrs
            .rename
            .clone()
            .unwrap_or_else(|| ident.unraw().to_string());
        let table = constraint_table(&attrs.constraints);

        descriptors.push(quote! {
            {
                const CONSTRAINTS: &[::fieldguard::Constraint] = &[#(#table),*];
                ::fieldguard::Field::new(
                    #reported,
                    ::fieldguard::AsFieldValue::as_field_value(&self.#ident),
                    CONSTRAINTS,
                )
            }
        });

        let ty = &field.ty;
        if validation::mentions_type_param(ty, &type_params) {
            let predicate: WherePredicate = parse_quote!(#ty: ::fieldguard::AsFieldValue);
            generics.make_where_clause().predicates.push(predicate);
        }
    }

    let record_name = name.unraw().to_string();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::fieldguard::Record for #name #ty_generics #where_clause {
            fn fields(&self) -> ::std::vec::Vec<::fieldguard::Field<'_>> {
                ::std::vec![#(#descriptors),*]
            }

            fn record_name(&self) -> ::std::borrow::Cow<'_, str> {
                ::std::borrow::Cow::Borrowed(#record_name)
            }
        }
    })
}

fn constraint_table(constraints: &[RawConstraint]) -> Vec<TokenStream> {
    constraints
        .iter()
        .map(|c| {
            let variant = Ident::new(c.tag.variant(), Span::call_site());
            let raw = &c.raw;
            quote! {
                ::fieldguard::Constraint::new(::fieldguard::Tag::#variant, #raw)
            }
        })
        .collect()
}
