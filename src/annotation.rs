use core::{fmt, str::FromStr};

/// A move quality annotation: `!`, `!!`, `?`, `??` or `?!`.
///
/// Annotations trail every other marker of a SAN token, including a check
/// or checkmate suffix. They are purely descriptive and say nothing about
/// the legality of the move.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Annotation {
    /// `!`
    Good,
    /// `!!`
    Brilliant,
    /// `?`
    Mistake,
    /// `??`
    Blunder,
    /// `?!`
    Interesting,
}

impl Annotation {
    /// Gets the suffix string for the annotation.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanspell::Annotation;
    ///
    /// assert_eq!(Annotation::Interesting.as_str(), "?!");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            Annotation::Good => "!",
            Annotation::Brilliant => "!!",
            Annotation::Mistake => "?",
            Annotation::Blunder => "??",
            Annotation::Interesting => "?!",
        }
    }

    /// `Good`, `Brilliant`, `Mistake`, `Blunder` and `Interesting`, in this
    /// order.
    pub const ALL: [Annotation; 5] = [
        Annotation::Good,
        Annotation::Brilliant,
        Annotation::Mistake,
        Annotation::Blunder,
        Annotation::Interesting,
    ];
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing an invalid annotation suffix.
#[derive(Clone, Debug)]
pub struct ParseAnnotationError;

impl fmt::Display for ParseAnnotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid annotation")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseAnnotationError {}

impl FromStr for Annotation {
    type Err = ParseAnnotationError;

    fn from_str(s: &str) -> Result<Annotation, ParseAnnotationError> {
        Ok(match s {
            "!" => Annotation::Good,
            "!!" => Annotation::Brilliant,
            "?" => Annotation::Mistake,
            "??" => Annotation::Blunder,
            "?!" => Annotation::Interesting,
            _ => return Err(ParseAnnotationError),
        })
    }
}
