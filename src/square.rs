use core::{fmt, num};

use crate::util::out_of_range_error;

/// A file (column) of the chessboard: `a` to `h`.
///
/// # Examples
///
/// ```
/// use sanspell::File;
///
/// // Files are indexed from 0 to 7.
/// assert_eq!(u32::from(File::A), 0);
/// assert_eq!(u32::from(File::H), 7);
/// ```
#[allow(missing_docs)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// Gets the file with the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range `0..=7`.
    #[track_caller]
    pub const fn new(index: u32) -> File {
        match index {
            0 => File::A,
            1 => File::B,
            2 => File::C,
            3 => File::D,
            4 => File::E,
            5 => File::F,
            6 => File::G,
            7 => File::H,
            _ => panic!("file index out of range"),
        }
    }

    /// Gets the file from its lowercase letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanspell::File;
    ///
    /// assert_eq!(File::from_char('d'), Some(File::D));
    /// assert_eq!(File::from_char('D'), None);
    /// ```
    pub const fn from_char(ch: char) -> Option<File> {
        if 'a' <= ch && ch <= 'h' {
            Some(File::new(ch as u32 - 'a' as u32))
        } else {
            None
        }
    }

    /// Gets the lowercase letter for the file.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanspell::File;
    ///
    /// assert_eq!(File::D.char(), 'd');
    /// ```
    pub const fn char(self) -> char {
        (b'a' + self as u8) as char
    }

    /// `A`, ..., `H`, in this order.
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

/// A rank (row) of the chessboard: `1` to `8`.
///
/// # Examples
///
/// ```
/// use sanspell::Rank;
///
/// // Ranks are indexed from 0 to 7.
/// assert_eq!(u32::from(Rank::First), 0);
/// assert_eq!(u32::from(Rank::Eighth), 7);
/// ```
#[allow(missing_docs)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Rank {
    First = 0,
    Second = 1,
    Third = 2,
    Fourth = 3,
    Fifth = 4,
    Sixth = 5,
    Seventh = 6,
    Eighth = 7,
}

impl Rank {
    /// Gets the rank with the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range `0..=7`.
    #[track_caller]
    pub const fn new(index: u32) -> Rank {
        match index {
            0 => Rank::First,
            1 => Rank::Second,
            2 => Rank::Third,
            3 => Rank::Fourth,
            4 => Rank::Fifth,
            5 => Rank::Sixth,
            6 => Rank::Seventh,
            7 => Rank::Eighth,
            _ => panic!("rank index out of range"),
        }
    }

    /// Gets the rank from its digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanspell::Rank;
    ///
    /// assert_eq!(Rank::from_char('4'), Some(Rank::Fourth));
    /// assert_eq!(Rank::from_char('9'), None);
    /// ```
    pub const fn from_char(ch: char) -> Option<Rank> {
        if '1' <= ch && ch <= '8' {
            Some(Rank::new(ch as u32 - '1' as u32))
        } else {
            None
        }
    }

    /// Gets the digit for the rank.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanspell::Rank;
    ///
    /// assert_eq!(Rank::Fourth.char(), '4');
    /// ```
    pub const fn char(self) -> char {
        (b'1' + self as u8) as char
    }

    /// The rank number, `1` to `8`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanspell::Rank;
    ///
    /// assert_eq!(Rank::Fourth.number(), 4);
    /// ```
    pub const fn number(self) -> u32 {
        self as u32 + 1
    }

    /// `First`, ..., `Eighth`, in this order.
    pub const ALL: [Rank; 8] = [
        Rank::First,
        Rank::Second,
        Rank::Third,
        Rank::Fourth,
        Rank::Fifth,
        Rank::Sixth,
        Rank::Seventh,
        Rank::Eighth,
    ];
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

macro_rules! int_from_coord_impl {
    ($coord:ty, $($t:ty)+) => {
        $(impl From<$coord> for $t {
            #[inline]
            fn from(coord: $coord) -> Self {
                coord as Self
            }
        })+
    }
}

int_from_coord_impl! { File, u8 i8 u16 i16 u32 i32 u64 i64 usize isize }
int_from_coord_impl! { Rank, u8 i8 u16 i16 u32 i32 u64 i64 usize isize }

macro_rules! try_coord_from_int_impl {
    ($coord:ty, $($t:ty)+) => {
        $(impl core::convert::TryFrom<$t> for $coord {
            type Error = num::TryFromIntError;

            #[inline]
            fn try_from(value: $t) -> Result<Self, Self::Error> {
                let index = u32::try_from(value)?;
                if index < 8 {
                    Ok(<$coord>::new(index))
                } else {
                    Err(out_of_range_error())
                }
            }
        })+
    }
}

try_coord_from_int_impl! { File, u8 i8 u16 i16 u32 i32 u64 i64 usize isize }
try_coord_from_int_impl! { Rank, u8 i8 u16 i16 u32 i32 u64 i64 usize isize }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_char_roundtrip() {
        for file in File::ALL {
            assert_eq!(File::from_char(file.char()), Some(file));
        }
    }

    #[test]
    fn test_rank_char_roundtrip() {
        for rank in Rank::ALL {
            assert_eq!(Rank::from_char(rank.char()), Some(rank));
        }
    }

    #[test]
    fn test_try_from_int() {
        assert_eq!(File::try_from(3_i32), Ok(File::D));
        assert!(File::try_from(8_i32).is_err());
        assert!(File::try_from(-1_i32).is_err());
        assert_eq!(Rank::try_from(7_u64), Ok(Rank::Eighth));
        assert!(Rank::try_from(8_u64).is_err());
    }

    #[test]
    fn test_rank_number() {
        assert_eq!(Rank::First.number(), 1);
        assert_eq!(Rank::Eighth.number(), 8);
    }
}
