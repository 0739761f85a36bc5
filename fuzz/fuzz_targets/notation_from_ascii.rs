#![no_main]

use libfuzzer_sys::fuzz_target;
use sanspell::notation::Notation;

fuzz_target!(|data: &[u8]| {
    if let Ok(notation) = Notation::from_ascii(data) {
        let roundtripped =
            Notation::from_ascii(notation.as_str().as_bytes()).expect("roundtrip");
        assert_eq!(notation, roundtripped);
    }
});
