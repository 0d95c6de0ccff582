// Test basic macro usage compiles and expands to the phrase itself
use maketext::{Locale, args, translatable};

const GREETING: &str = translatable!("Hello, [_1]!");

fn main() {
    let locale = Locale::new();
    let files = translatable!("You have [quant,_1,file,files].");
    assert_eq!(files, "You have [quant,_1,file,files].");

    let text = locale.maketext(GREETING, &args!["Alice"]).unwrap();
    assert_eq!(text, "Hello, Alice!");
}
