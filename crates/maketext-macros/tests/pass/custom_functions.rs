// Test phrases may call application functions named in the invocation
use maketext::translatable;

fn main() {
    let _one = translatable!("[shout,_1]", shout);
    let _two = translatable!("[shout,_1] [whisper,_2]", shout, whisper,);
}
