use proc_macro::TokenStream;
use quote::quote;

mod input;
mod validate;

/// The translatable! macro for marking phrases.
///
/// Checks the bracket notation of a phrase at compile time and expands to
/// the phrase itself, a `&'static str`. Phrase harvesters look for this
/// macro to find the strings that need translating.
///
/// Bracket functions must be built-ins unless named after the phrase:
///
/// ```ignore
/// let phrase = translatable!("You have [quant,_1,file,files].");
/// let custom = translatable!("[shout,_1]", shout);
/// ```
///
/// Malformed brackets, `[...]` groups that are not `_N` references, bad
/// `_` argument references and unknown function names are compile errors.
#[proc_macro]
pub fn translatable(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as input::MacroInput);

    if let Err(e) = validate::validate(&input) {
        return e.to_compile_error().into();
    }

    let phrase = &input.phrase;
    quote!(#phrase).into()
}
