//! Input shape checks for derive macros.

use proc_macro2::{TokenStream, TokenTree};
use quote::ToTokens;
use syn::{Data, DeriveInput, Fields, FieldsNamed, Ident, Type};

use super::diag;

/// Returns the named fields of `input`, or an error explaining why the
/// input is not a record.
pub fn require_named_struct(input: &DeriveInput) -> syn::Result<&FieldsNamed> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(fields),
            Fields::Unnamed(_) => Err(diag::error_spanned(
                &input.ident,
                "`Record` requires a struct with named fields.\n\
                 \n\
                 Tuple structs have no field names to report.",
            )),
            Fields::Unit => Err(diag::error_spanned(
                &input.ident,
                "`Record` cannot be derived for unit structs.\n\
                 \n\
                 Unit structs have no fields to validate.",
            )),
        },
        Data::Enum(_) => Err(diag::error_spanned(
            &input.ident,
            "`Record` can only be derived for structs with named fields, not enums.",
        )),
        Data::Union(_) => Err(diag::error_spanned(
            &input.ident,
            "`Record` cannot be derived for unions.",
        )),
    }
}

/// Whether `ty` mentions any of the type parameters in `params`.
pub fn mentions_type_param(ty: &Type, params: &[&Ident]) -> bool {
    fn walk(tokens: TokenStream, params: &[&Ident]) -> bool {
        tokens.into_iter().any(|tt| match tt {
            TokenTree::Ident(ident) => params.iter().any(|p| **p == ident),
            TokenTree::Group(group) => walk(group.stream(), params),
            _ => false,
        })
    }

    !params.is_empty() && walk(ty.to_token_stream(), params)
}
