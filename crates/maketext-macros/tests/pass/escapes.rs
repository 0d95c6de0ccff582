// Test tilde escapes and escaped commas are accepted
use maketext::translatable;

fn main() {
    let _literal = translatable!("Use ~[brackets~] and ~~tildes.");
    let _comma = translatable!("[join,~,,_*]");
    let _aliases = translatable!("[#,_1] [*,_2,item,items]");
}
