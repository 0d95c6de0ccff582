//! Input of the translatable! macro: a phrase literal followed by any
//! number of extra function names.

use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Ident, LitStr, Token};

pub struct MacroInput {
    pub phrase: LitStr,
    /// Application-registered bracket functions the phrase may call.
    pub functions: Vec<Ident>,
}

impl Parse for MacroInput {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let phrase: LitStr = input.parse()?;
        let mut functions = Vec::new();
        if input.parse::<Option<Token![,]>>()?.is_some() {
            let names = Punctuated::<Ident, Token![,]>::parse_terminated(input)?;
            functions.extend(names);
        }
        Ok(Self { phrase, functions })
    }
}
