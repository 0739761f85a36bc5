//! Read Standard Algebraic Notation.
//!
//! # Examples
//!
//! Parse a SAN token into its syntactic parts:
//!
//! ```
//! use sanspell::{notation::Notation, File, Rank, Role};
//!
//! let notation: Notation = "exd8=Q+".parse()?;
//!
//! assert_eq!(notation.role(), Some(Role::Pawn));
//! assert_eq!(notation.from_file(), Some(File::E));
//! assert_eq!(notation.to_file(), Some(File::D));
//! assert_eq!(notation.to_rank(), Some(Rank::Eighth));
//! assert!(notation.is_capture());
//! assert_eq!(notation.promotion(), Some(Role::Queen));
//! assert!(notation.is_check());
//! # Ok::<_, sanspell::notation::ParseNotationError>(())
//! ```
//!
//! Derive a notation for a neighbouring square. Note that derivation is
//! deliberately lossy: the synthesized token is always a plain pawn move,
//! whatever the original was (see [`Notation::with_target_file`]).
//!
//! ```
//! use sanspell::{notation::Notation, File, Role};
//!
//! let notation: Notation = "e4".parse()?;
//! let shifted = notation.with_target_file(File::new(3))?;
//!
//! assert_eq!(shifted.to_string(), "d4");
//! assert_eq!(shifted.role(), Some(Role::Pawn));
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

use core::{fmt, str::FromStr};

use alloc::string::String;

use crate::{Annotation, CastlingSide, File, Rank, Role};

/// Error when parsing a syntactically invalid SAN token.
///
/// Carries the rejected input for diagnostics.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseNotationError {
    san: String,
}

impl ParseNotationError {
    /// The rejected input.
    pub fn san(&self) -> &str {
        &self.san
    }
}

impl fmt::Display for ParseNotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid san `{}`", self.san)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseNotationError {}

/// Error when deriving a notation from one that lacks the required
/// target coordinate.
///
/// This is a contract violation by the caller, not a data error: the
/// receiving notation never had the coordinate to begin with (castling
/// notations have neither).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DeriveNotationError {
    /// [`Notation::with_target_file`] was called on a notation without a
    /// target rank.
    MissingTargetRank,
    /// [`Notation::with_target_rank`] was called on a notation without a
    /// target file.
    MissingTargetFile,
}

impl fmt::Display for DeriveNotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            DeriveNotationError::MissingTargetRank => "notation has no target rank",
            DeriveNotationError::MissingTargetFile => "notation has no target file",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DeriveNotationError {}

/// Check (`+`) or checkmate (`#`) suffix.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Suffix {
    Check,
    Checkmate,
}

impl Suffix {
    pub const fn char(self) -> char {
        match self {
            Suffix::Check => '+',
            Suffix::Checkmate => '#',
        }
    }

    pub const fn from_char(ch: char) -> Option<Suffix> {
        match ch {
            '+' => Some(Suffix::Check),
            '#' => Some(Suffix::Checkmate),
            _ => None,
        }
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

/// The fields extracted by a single grammar alternative.
#[derive(Default)]
struct Fields {
    castling: Option<CastlingSide>,
    role: Option<Role>,
    from_file: Option<File>,
    from_rank: Option<Rank>,
    capture: bool,
    to_file: Option<File>,
    to_rank: Option<Rank>,
    promotion: Option<Role>,
    long_form: bool,
}

impl Fields {
    fn castle(side: CastlingSide) -> Fields {
        Fields {
            castling: Some(side),
            ..Fields::default()
        }
    }

    fn to(role: Role, to_file: File, to_rank: Rank) -> Fields {
        Fields {
            role: Some(role),
            to_file: Some(to_file),
            to_rank: Some(to_rank),
            ..Fields::default()
        }
    }
}

fn file(ch: u8) -> Option<File> {
    File::from_char(char::from(ch))
}

fn rank(ch: u8) -> Option<Rank> {
    Rank::from_char(char::from(ch))
}

fn piece(ch: u8) -> Option<Role> {
    match ch {
        b'K' | b'Q' | b'B' | b'N' | b'R' => Role::from_char(char::from(ch)),
        _ => None,
    }
}

fn promotion_piece(ch: u8) -> Option<Role> {
    match ch {
        b'Q' | b'R' | b'B' | b'N' => Role::from_char(char::from(ch)),
        _ => None,
    }
}

/// Matches an optional promotion at the end of a pawn alternative. The
/// `=` separator may be spelled or left out. The outer `None` rejects the
/// whole alternative; the inner `None` means no promotion was given.
fn promotion_tail(tail: &[u8]) -> Option<Option<Role>> {
    match *tail {
        [] => Some(None),
        [p] | [b'=', p] => Some(Some(promotion_piece(p)?)),
        _ => None,
    }
}

fn castle_letter(body: &[u8]) -> Option<Fields> {
    match body {
        b"O-O" => Some(Fields::castle(CastlingSide::KingSide)),
        b"O-O-O" => Some(Fields::castle(CastlingSide::QueenSide)),
        _ => None,
    }
}

fn castle_zero(body: &[u8]) -> Option<Fields> {
    match body {
        b"0-0" => Some(Fields::castle(CastlingSide::KingSide)),
        b"0-0-0" => Some(Fields::castle(CastlingSide::QueenSide)),
        _ => None,
    }
}

fn pawn_move(body: &[u8]) -> Option<Fields> {
    match *body {
        [tf, tr] => Some(Fields::to(Role::Pawn, file(tf)?, rank(tr)?)),
        _ => None,
    }
}

fn pawn_move_long(body: &[u8]) -> Option<Fields> {
    match *body {
        [ff, fr, tf, tr] => {
            let mut fields = Fields::to(Role::Pawn, file(tf)?, rank(tr)?);
            fields.from_file = Some(file(ff)?);
            fields.from_rank = Some(rank(fr)?);
            fields.long_form = true;
            Some(fields)
        }
        _ => None,
    }
}

fn piece_move(body: &[u8]) -> Option<Fields> {
    match *body {
        [p, tf, tr] => Some(Fields::to(piece(p)?, file(tf)?, rank(tr)?)),
        _ => None,
    }
}

fn piece_move_file(body: &[u8]) -> Option<Fields> {
    match *body {
        [p, df, tf, tr] => {
            let mut fields = Fields::to(piece(p)?, file(tf)?, rank(tr)?);
            fields.from_file = Some(file(df)?);
            Some(fields)
        }
        _ => None,
    }
}

fn piece_move_rank(body: &[u8]) -> Option<Fields> {
    match *body {
        [p, dr, tf, tr] => {
            let mut fields = Fields::to(piece(p)?, file(tf)?, rank(tr)?);
            fields.from_rank = Some(rank(dr)?);
            Some(fields)
        }
        _ => None,
    }
}

fn piece_move_long(body: &[u8]) -> Option<Fields> {
    match *body {
        [p, df, dr, tf, tr] => {
            let mut fields = Fields::to(piece(p)?, file(tf)?, rank(tr)?);
            fields.from_file = Some(file(df)?);
            fields.from_rank = Some(rank(dr)?);
            fields.long_form = true;
            Some(fields)
        }
        _ => None,
    }
}

fn pawn_capture(body: &[u8]) -> Option<Fields> {
    match *body {
        [ff, b'x', tf, tr, ref tail @ ..] => {
            let mut fields = Fields::to(Role::Pawn, file(tf)?, rank(tr)?);
            fields.from_file = Some(file(ff)?);
            fields.capture = true;
            fields.promotion = promotion_tail(tail)?;
            Some(fields)
        }
        _ => None,
    }
}

fn pawn_capture_long(body: &[u8]) -> Option<Fields> {
    match *body {
        [ff, fr, b'x', tf, tr, ref tail @ ..] => {
            let mut fields = Fields::to(Role::Pawn, file(tf)?, rank(tr)?);
            fields.from_file = Some(file(ff)?);
            fields.from_rank = Some(rank(fr)?);
            fields.capture = true;
            fields.promotion = promotion_tail(tail)?;
            fields.long_form = true;
            Some(fields)
        }
        _ => None,
    }
}

fn piece_capture(body: &[u8]) -> Option<Fields> {
    match *body {
        [p, b'x', tf, tr] => {
            let mut fields = Fields::to(piece(p)?, file(tf)?, rank(tr)?);
            fields.capture = true;
            Some(fields)
        }
        _ => None,
    }
}

fn piece_capture_file(body: &[u8]) -> Option<Fields> {
    match *body {
        [p, df, b'x', tf, tr] => {
            let mut fields = Fields::to(piece(p)?, file(tf)?, rank(tr)?);
            fields.from_file = Some(file(df)?);
            fields.capture = true;
            Some(fields)
        }
        _ => None,
    }
}

fn piece_capture_rank(body: &[u8]) -> Option<Fields> {
    match *body {
        [p, dr, b'x', tf, tr] => {
            let mut fields = Fields::to(piece(p)?, file(tf)?, rank(tr)?);
            fields.from_rank = Some(rank(dr)?);
            fields.capture = true;
            Some(fields)
        }
        _ => None,
    }
}

fn piece_capture_long(body: &[u8]) -> Option<Fields> {
    match *body {
        [p, df, dr, b'x', tf, tr] => {
            let mut fields = Fields::to(piece(p)?, file(tf)?, rank(tr)?);
            fields.from_file = Some(file(df)?);
            fields.from_rank = Some(rank(dr)?);
            fields.capture = true;
            fields.long_form = true;
            Some(fields)
        }
        _ => None,
    }
}

fn pawn_promotion(body: &[u8]) -> Option<Fields> {
    match *body {
        [tf, tr, ref tail @ ..] if !tail.is_empty() => {
            let mut fields = Fields::to(Role::Pawn, file(tf)?, rank(tr)?);
            fields.promotion = Some(promotion_tail(tail)??);
            Some(fields)
        }
        _ => None,
    }
}

/// The grammar, as an ordered list of anchored alternatives. Each
/// alternative must match the entire body (check/checkmate suffix and
/// annotation already split off). The first match wins, and the order is
/// load-bearing: some forms are textual subsets of others, so reordering
/// the list changes which alternative claims an input.
const GRAMMAR: [fn(&[u8]) -> Option<Fields>; 15] = [
    castle_letter,
    castle_zero,
    pawn_move,
    pawn_move_long,
    piece_move,
    piece_move_file,
    piece_move_rank,
    piece_move_long,
    pawn_capture,
    pawn_capture_long,
    piece_capture,
    piece_capture_file,
    piece_capture_rank,
    piece_capture_long,
    pawn_promotion,
];

/// Splits a trailing annotation off the token. Two-character suffixes
/// take precedence, otherwise `e4!!` would lose its second `!`.
fn split_annotation(san: &[u8]) -> (&[u8], Option<Annotation>) {
    let (head, annotation) = match san {
        [head @ .., b'!', b'!'] => (head, Annotation::Brilliant),
        [head @ .., b'?', b'?'] => (head, Annotation::Blunder),
        [head @ .., b'?', b'!'] => (head, Annotation::Interesting),
        [head @ .., b'!'] => (head, Annotation::Good),
        [head @ .., b'?'] => (head, Annotation::Mistake),
        _ => return (san, None),
    };
    (head, Some(annotation))
}

fn split_suffix(san: &[u8]) -> (&[u8], Option<Suffix>) {
    match san {
        [head @ .., b'+'] => (head, Some(Suffix::Check)),
        [head @ .., b'#'] => (head, Some(Suffix::Checkmate)),
        _ => (san, None),
    }
}

/// A fully parsed move in Standard Algebraic Notation.
///
/// A `Notation` is created atomically by parsing: either every field
/// implied by the matched grammar alternative is filled in consistently,
/// or parsing fails and no value is produced. The original token is kept
/// and echoed verbatim by [`Display`](fmt::Display) and
/// [`as_str`](Notation::as_str); parsed fields are never re-serialized
/// into canonical SAN.
///
/// The only mutation allowed after construction is overwriting the
/// disambiguation fields with [`set_from_file`](Notation::set_from_file)
/// and [`set_from_rank`](Notation::set_from_rank), which deliberately do
/// not touch the stored raw text.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct Notation {
    raw: String,
    castling: Option<CastlingSide>,
    role: Option<Role>,
    from_file: Option<File>,
    from_rank: Option<Rank>,
    capture: bool,
    to_file: Option<File>,
    to_rank: Option<Rank>,
    promotion: Option<Role>,
    suffix: Option<Suffix>,
    annotation: Option<Annotation>,
    long_form: bool,
}

impl Notation {
    /// Parses a SAN token, including a possible check or checkmate suffix
    /// and a possible trailing annotation.
    ///
    /// # Errors
    ///
    /// Returns [`ParseNotationError`] if `san` does not match any grammar
    /// alternative.
    pub fn from_ascii(san: &[u8]) -> Result<Notation, ParseNotationError> {
        let (body, annotation) = split_annotation(san);
        let (body, suffix) = split_suffix(body);

        for alternative in GRAMMAR {
            if let Some(fields) = alternative(body) {
                // A match implies the input was pure ASCII, so the lossy
                // conversion is in fact lossless here.
                return Ok(Notation {
                    raw: String::from_utf8_lossy(san).into_owned(),
                    castling: fields.castling,
                    role: fields.role,
                    from_file: fields.from_file,
                    from_rank: fields.from_rank,
                    capture: fields.capture,
                    to_file: fields.to_file,
                    to_rank: fields.to_rank,
                    promotion: fields.promotion,
                    suffix,
                    annotation,
                    long_form: fields.long_form,
                });
            }
        }

        Err(ParseNotationError {
            san: String::from_utf8_lossy(san).into_owned(),
        })
    }

    /// The original token, unchanged.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The castling side, or `None` for a non-castling move.
    pub fn castling(&self) -> Option<CastlingSide> {
        self.castling
    }

    /// The moved piece. `None` only for castling notations; a move without
    /// a piece letter is a pawn move.
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// The file of the destination square. Set for every non-castling
    /// move.
    pub fn to_file(&self) -> Option<File> {
        self.to_file
    }

    /// The rank of the destination square. Set for every non-castling
    /// move.
    pub fn to_rank(&self) -> Option<Rank> {
        self.to_rank
    }

    /// The explicitly stated file of the origin square, if any.
    pub fn from_file(&self) -> Option<File> {
        self.from_file
    }

    /// The explicitly stated rank of the origin square, if any.
    pub fn from_rank(&self) -> Option<Rank> {
        self.from_rank
    }

    /// The promotion piece, if the token carried a promotion.
    pub fn promotion(&self) -> Option<Role> {
        self.promotion
    }

    /// Whether an `x` capture marker was present.
    pub fn is_capture(&self) -> bool {
        self.capture
    }

    /// The check or checkmate suffix, if any.
    pub fn suffix(&self) -> Option<Suffix> {
        self.suffix
    }

    /// Whether the token ended with a `+` check marker (before any
    /// annotation).
    pub fn is_check(&self) -> bool {
        self.suffix == Some(Suffix::Check)
    }

    /// Whether the token ended with a `#` checkmate marker (before any
    /// annotation).
    pub fn is_checkmate(&self) -> bool {
        self.suffix == Some(Suffix::Checkmate)
    }

    /// The trailing move quality annotation, if any.
    pub fn annotation(&self) -> Option<Annotation> {
        self.annotation
    }

    /// Whether the full origin square was stated, i.e. both the
    /// disambiguation file and rank matched in a single alternative.
    ///
    /// This is a classification of the matched grammar alternative, not an
    /// independent fact: the setters below never change it.
    pub fn is_long_form(&self) -> bool {
        self.long_form
    }

    /// Overwrites the disambiguation file.
    ///
    /// The stored raw text is *not* updated, and [`is_long_form`](Notation::is_long_form)
    /// keeps describing the originally matched token. Callers using this
    /// escape hatch are responsible for any consistency they expect.
    pub fn set_from_file(&mut self, from_file: Option<File>) {
        self.from_file = from_file;
    }

    /// Overwrites the disambiguation rank.
    ///
    /// Same caveats as [`set_from_file`](Notation::set_from_file).
    pub fn set_from_rank(&mut self, from_rank: Option<Rank>) {
        self.from_rank = from_rank;
    }

    /// Derives a new notation by replacing the file of the destination
    /// square and reparsing the synthesized token.
    ///
    /// The synthesized token is just `<file><rank>`, so the result is
    /// always a *plain pawn move*: any piece letter, disambiguation,
    /// capture, promotion, suffix or annotation of the receiver is
    /// deliberately dropped. The receiver itself is never modified.
    ///
    /// # Errors
    ///
    /// Returns [`DeriveNotationError::MissingTargetRank`] if the receiver
    /// has no target rank (for example a castling notation).
    ///
    /// # Examples
    ///
    /// ```
    /// use sanspell::{notation::Notation, File};
    ///
    /// let notation: Notation = "Nxe4".parse()?;
    /// let shifted = notation.with_target_file(File::D)?;
    ///
    /// // Piece and capture context is not carried over.
    /// assert_eq!(shifted.to_string(), "d4");
    /// assert!(!shifted.is_capture());
    /// # Ok::<_, Box<dyn std::error::Error>>(())
    /// ```
    pub fn with_target_file(&self, to_file: File) -> Result<Notation, DeriveNotationError> {
        let to_rank = self.to_rank.ok_or(DeriveNotationError::MissingTargetRank)?;
        Ok(Notation::from_ascii(&[to_file.char() as u8, to_rank.char() as u8])
            .expect("square is a valid pawn move"))
    }

    /// Derives a new notation by replacing the rank of the destination
    /// square and reparsing the synthesized token.
    ///
    /// Lossy in the same way as [`with_target_file`](Notation::with_target_file).
    ///
    /// # Errors
    ///
    /// Returns [`DeriveNotationError::MissingTargetFile`] if the receiver
    /// has no target file (for example a castling notation).
    pub fn with_target_rank(&self, to_rank: Rank) -> Result<Notation, DeriveNotationError> {
        let to_file = self.to_file.ok_or(DeriveNotationError::MissingTargetFile)?;
        Ok(Notation::from_ascii(&[to_file.char() as u8, to_rank.char() as u8])
            .expect("square is a valid pawn move"))
    }
}

impl FromStr for Notation {
    type Err = ParseNotationError;

    fn from_str(san: &str) -> Result<Notation, ParseNotationError> {
        Notation::from_ascii(san.as_bytes())
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Notation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Notation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct NotationVisitor;

        impl serde::de::Visitor<'_> for NotationVisitor {
            type Value = Notation;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a san token")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(NotationVisitor)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn test_raw_echo() {
        for san in &[
            "e4", "e2e4", "Nf3", "Ngf3", "N5f3", "Ng5f3", "exd5", "exd8=Q", "e4xd5", "Nxf3",
            "Ngxf3", "N5xf3", "Ng5xf3", "e8=Q", "e8Q", "O-O", "O-O-O", "0-0", "0-0-0", "Qh4#",
            "Rad1+", "e4!", "e4!!", "e4?", "e4??", "e4?!", "O-O-O+!", "bxa8=R+?!",
        ] {
            let notation = san.parse::<Notation>().expect("valid san");
            assert_eq!(notation.to_string(), *san, "echo of {san}");
            assert_eq!(notation.as_str(), *san);
        }
    }

    #[test]
    fn test_castling() {
        for san in &["O-O", "0-0"] {
            let notation = san.parse::<Notation>().expect("valid san");
            assert_eq!(notation.castling(), Some(CastlingSide::KingSide));
            assert_eq!(notation.role(), None);
            assert_eq!(notation.to_file(), None);
            assert_eq!(notation.to_rank(), None);
            assert!(!notation.is_capture());
            assert!(!notation.is_long_form());
        }
        for san in &["O-O-O", "0-0-0"] {
            let notation = san.parse::<Notation>().expect("valid san");
            assert_eq!(notation.castling(), Some(CastlingSide::QueenSide));
        }
    }

    #[test]
    fn test_suffix_and_annotation_order() {
        let notation = "O-O-O+!".parse::<Notation>().expect("valid san");
        assert_eq!(notation.castling(), Some(CastlingSide::QueenSide));
        assert!(notation.is_check());
        assert!(!notation.is_checkmate());
        assert_eq!(notation.annotation(), Some(Annotation::Good));

        // The annotation must come last.
        assert!("O-O-O!+".parse::<Notation>().is_err());
        // At most one of `+` and `#`.
        assert!("e4+#".parse::<Notation>().is_err());
        assert!("e4++".parse::<Notation>().is_err());
    }

    #[test]
    fn test_promotion_separator_optional() {
        let explicit = "e8=Q".parse::<Notation>().expect("valid san");
        let implicit = "e8Q".parse::<Notation>().expect("valid san");
        assert_eq!(explicit.promotion(), Some(Role::Queen));
        assert_eq!(implicit.promotion(), Some(Role::Queen));
        assert_eq!(explicit.to_file(), implicit.to_file());
        assert_eq!(explicit.to_rank(), implicit.to_rank());

        // Only Q, R, B and N can be promoted to.
        assert!("e8=K".parse::<Notation>().is_err());
        assert!("e8=P".parse::<Notation>().is_err());
        assert!("e8=".parse::<Notation>().is_err());
    }

    #[test]
    fn test_unset_fields_stay_unset() {
        let notation = "e4".parse::<Notation>().expect("valid san");
        assert_eq!(notation.castling(), None);
        assert_eq!(notation.from_file(), None);
        assert_eq!(notation.from_rank(), None);
        assert_eq!(notation.promotion(), None);
        assert_eq!(notation.suffix(), None);
        assert_eq!(notation.annotation(), None);
        assert!(!notation.is_capture());
        assert!(!notation.is_long_form());
    }

    #[test]
    fn test_long_form_is_derived() {
        assert!("e2e4".parse::<Notation>().expect("valid san").is_long_form());
        assert!("Ng5f3".parse::<Notation>().expect("valid san").is_long_form());
        assert!("e4xd5".parse::<Notation>().expect("valid san").is_long_form());
        assert!("Ng5xf3".parse::<Notation>().expect("valid san").is_long_form());
        assert!(!"Ngf3".parse::<Notation>().expect("valid san").is_long_form());
        assert!(!"N5f3".parse::<Notation>().expect("valid san").is_long_form());
    }

    #[test]
    fn test_setters_leave_raw_alone() {
        let mut notation = "Nf3".parse::<Notation>().expect("valid san");
        notation.set_from_file(Some(File::G));
        notation.set_from_rank(Some(Rank::First));
        assert_eq!(notation.from_file(), Some(File::G));
        assert_eq!(notation.from_rank(), Some(Rank::First));
        assert_eq!(notation.to_string(), "Nf3");
        assert!(!notation.is_long_form());
    }

    #[test]
    fn test_with_target_file() {
        let notation = "e4".parse::<Notation>().expect("valid san");
        let shifted = notation.with_target_file(File::new(3)).expect("has rank");
        assert_eq!(shifted.to_string(), "d4");
        assert_eq!(shifted.role(), Some(Role::Pawn));
        assert_eq!(shifted.to_file(), Some(File::D));
        assert_eq!(shifted.to_rank(), Some(Rank::Fourth));
        // The receiver is untouched.
        assert_eq!(notation.to_file(), Some(File::E));
    }

    #[test]
    fn test_with_target_is_idempotent() {
        let notation = "exd5".parse::<Notation>().expect("valid san");
        let once = notation.with_target_file(File::C).expect("has rank");
        let twice = once.with_target_file(File::C).expect("has rank");
        assert_eq!(once, twice);

        let once = notation.with_target_rank(Rank::Sixth).expect("has file");
        let twice = once.with_target_rank(Rank::Sixth).expect("has file");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_derivation_is_lossy() {
        let notation = "Ngxf3+".parse::<Notation>().expect("valid san");
        let shifted = notation.with_target_rank(Rank::Fifth).expect("has file");
        assert_eq!(shifted.to_string(), "f5");
        assert_eq!(shifted.role(), Some(Role::Pawn));
        assert!(!shifted.is_capture());
        assert_eq!(shifted.from_file(), None);
        assert_eq!(shifted.suffix(), None);
    }

    #[test]
    fn test_derivation_precondition() {
        let castle = "O-O".parse::<Notation>().expect("valid san");
        assert_eq!(
            castle.with_target_file(File::A),
            Err(DeriveNotationError::MissingTargetRank)
        );
        assert_eq!(
            castle.with_target_rank(Rank::First),
            Err(DeriveNotationError::MissingTargetFile)
        );
    }

    #[test]
    fn test_parse_error_carries_input() {
        let err = "Z9".parse::<Notation>().expect_err("invalid san");
        assert_eq!(err.san(), "Z9");
        assert_eq!(err.to_string(), "invalid san `Z9`");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_via_raw_text() {
        let notation = "exd8=Q+".parse::<Notation>().expect("valid san");
        let json = serde_json::to_string(&notation).expect("serialize");
        assert_eq!(json, "\"exd8=Q+\"");
        let back: Notation = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, notation);
        assert!(serde_json::from_str::<Notation>("\"Z9\"").is_err());
    }
}
