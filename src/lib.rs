//! A Rust implementation of UUID version 4 that never touches the heap
//!
//! ```rust
//! use uuid4::uuid4;
//!
//! let uuid = uuid4()?;
//! println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//! # Ok::<(), uuid4::GenerateError>(())
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! This implementation produces identifiers with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            rand_a                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |            rand_a             |  ver  |        rand_b         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                        rand_c                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            rand_c                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 4-bit `ver` field is set at `0100`.
//! - The 2-bit `var` field is set at `10`.
//! - The remaining 122 bits are filled with a cryptographically strong random number.
//!
//! # String representation
//!
//! [`Uuid`] is rendered as and parsed from the 8-4-4-4-12 hexadecimal form only. Formatting
//! always produces lowercase digits into a stack buffer, while parsing accepts either case and
//! reports exactly why an input was rejected:
//!
//! ```rust
//! use uuid4::{ParseError, Uuid};
//!
//! let x: Uuid = "2CA4B2CE-6C13-40D4-BCCF-37D222820F6F".parse()?;
//! assert_eq!(&x.encode() as &str, "2ca4b2ce-6c13-40d4-bccf-37d222820f6f");
//!
//! assert_eq!("2ca4b2ce".parse::<Uuid>(), Err(ParseError::InvalidLength));
//! assert_eq!(
//!     "2ca4b2ce-6c13-40d4-bccf_37d222820f6f".parse::<Uuid>(),
//!     Err(ParseError::InvalidFormat)
//! );
//! assert_eq!(
//!     "2ca4b2ce-6c13-40d4-bccf-37d222820f6g".parse::<Uuid>(),
//!     Err(ParseError::InvalidCharacter)
//! );
//! # Ok::<(), ParseError>(())
//! ```
//!
//! # Crate features
//!
//! Default features:
//!
//! - `std` enables integration with `std` library.
//! - `global_gen` (implies `std`) enables the process-wide default generator behind [`uuid4()`].
//!
//! Optional features:
//!
//! - `serde` enables serialization and deserialization of [`Uuid`] objects.
//! - `uuid` enables conversion from/to the `uuid::Uuid` type.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::{FormatError, ParseError, Uuid, Variant};

pub mod generator;
pub use generator::{GenerateError, RandSource, V4Generator};

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::uuid4;
