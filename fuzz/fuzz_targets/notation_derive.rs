#![no_main]

use libfuzzer_sys::fuzz_target;
use sanspell::{notation::Notation, File, Rank};

fuzz_target!(|data: (&[u8], File, Rank)| {
    let (san, file, rank) = data;
    if let Ok(notation) = Notation::from_ascii(san) {
        if let Ok(derived) = notation.with_target_file(file) {
            // The derived token is always a plain pawn move to the square.
            assert_eq!(derived.to_file(), Some(file));
            assert_eq!(derived.to_rank(), notation.to_rank());
            assert!(!derived.is_capture());
        }
        if let Ok(derived) = notation.with_target_rank(rank) {
            assert_eq!(derived.to_rank(), Some(rank));
            assert_eq!(derived.to_file(), notation.to_file());
        }
    }
});
