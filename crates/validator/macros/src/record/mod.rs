//! `#[derive(Record)]` implementation

mod generate;
mod parse;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

use crate::support::diag;

pub(crate) fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate::generate_record(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => diag::to_compile_error(err),
    }
}
