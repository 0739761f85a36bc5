//! A library for reading chess moves in Standard Algebraic Notation.
//!
//! This crate deals with the *text* of a move only. It recognizes a SAN
//! token, splits it into its syntactic parts (moved piece, disambiguation,
//! destination, capture, promotion, check or checkmate marker, quality
//! annotation) and makes them available through a structured value. It does
//! not know the rules of chess: no legality checking, no board state, and
//! no re-serialization of parsed fields back into canonical SAN.
//!
//! # Examples
//!
//! Parse a SAN token:
//!
//! ```
//! use sanspell::{notation::Notation, Annotation, File, Rank, Role};
//!
//! let notation: Notation = "Nbd7?!".parse()?;
//!
//! assert_eq!(notation.role(), Some(Role::Knight));
//! assert_eq!(notation.from_file(), Some(File::B));
//! assert_eq!(notation.to_file(), Some(File::D));
//! assert_eq!(notation.to_rank(), Some(Rank::Seventh));
//! assert_eq!(notation.annotation(), Some(Annotation::Interesting));
//! # Ok::<_, sanspell::notation::ParseNotationError>(())
//! ```
//!
//! The original token is always echoed back verbatim:
//!
//! ```
//! use sanspell::notation::Notation;
//!
//! let notation: Notation = "exd8=Q+".parse()?;
//! assert_eq!(notation.to_string(), "exd8=Q+");
//! # Ok::<_, sanspell::notation::ParseNotationError>(())
//! ```
//!
//! # Feature flags
//!
//! * `std`: Implements [`std::error::Error`](https://doc.rust-lang.org/std/error/trait.Error.html)
//!   for the error types. Enabled by default. For `no_std` environments,
//!   this must be disabled with `default-features = false`. The
//!   [`alloc`](https://doc.rust-lang.org/stable/alloc/index.html) crate is
//!   always required, because a parsed notation owns its raw text.
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html)
//!   for [`notation::Notation`] via its raw text.
//! * `arbitrary`: Implements
//!   [`arbitrary::Arbitrary`](https://docs.rs/arbitrary/1/arbitrary/trait.Arbitrary.html)
//!   for the vocabulary enums.

#![no_std]
#![doc(html_root_url = "https://docs.rs/sanspell/0.1.0")]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod annotation;
mod castling_side;
mod role;
mod square;
mod util;

pub mod notation;

pub use annotation::{Annotation, ParseAnnotationError};
pub use castling_side::CastlingSide;
pub use role::Role;
pub use square::{File, Rank};
