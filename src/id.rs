#[cfg(not(feature = "std"))]
use core as std;

use fstr::FStr;
use std::{fmt, str};

/// Represents a Universally Unique IDentifier.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

/// Indices of the hyphens in the 8-4-4-4-12 string representation.
const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// Maps an ASCII byte to its hexadecimal digit value, or `0xff` if it is not a hex digit.
const HEX_DECODE: [u8; 256] = {
    let mut table = [0xff; 256];
    let mut i = 0;
    while i < 10 {
        table[b'0' as usize + i] = i as u8;
        i += 1;
    }
    let mut i = 0;
    while i < 6 {
        table[b'a' as usize + i] = 10 + i as u8;
        table[b'A' as usize + i] = 10 + i as u8;
        i += 1;
    }
    table
};

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// The only format specifier accepted by [`Uuid::write_formatted()`]: the empty specifier,
    /// as in `{}`, standing for the lowercase 8-4-4-4-12 canonical form.
    pub const CANONICAL_FORMAT: &'static str = "";

    /// Creates an object from a 16-byte big-endian array as is.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Creates a UUIDv4 object from 16 random bytes, overwriting the version and variant bits
    /// while keeping the rest of the random bits.
    pub const fn from_random_bytes_v4(mut bytes: [u8; 16]) -> Self {
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        Self(bytes)
    }

    /// Returns true if `self` is the Nil UUID.
    pub const fn is_nil(&self) -> bool {
        u128::from_be_bytes(self.0) == 0
    }

    /// Reports the variant field value of the UUID.
    pub const fn variant(&self) -> Variant {
        match self.0[8] >> 4 {
            0x0..=0x7 => Variant::Var0,
            0x8..=0xb => Variant::Var10,
            0xc..=0xd => Variant::Var110,
            _ => Variant::VarReserved,
        }
    }

    /// Returns the version field value of the UUID or `None` if `self` does not have the variant
    /// field value of `0b10`.
    pub const fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some(self.0[6] >> 4),
            _ => None,
        }
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// string type that can be dereferenced as `str`.
    ///
    /// This method is primarily for `no_std` environments where heap-allocated string types are
    /// not readily available. Use the [`fmt::Display`] trait usually to get the 8-4-4-4-12
    /// canonical hexadecimal string representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4::Uuid;
    ///
    /// let x = "2ca4b2ce-6c13-40d4-bccf-37d222820f6f".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "2ca4b2ce-6c13-40d4-bccf-37d222820f6f");
    /// assert_eq!(format!("{}", y), "2ca4b2ce-6c13-40d4-bccf-37d222820f6f");
    /// # Ok::<(), uuid4::ParseError>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut pos = 0;
        for (i, e) in self.0.iter().enumerate() {
            buffer[pos] = DIGITS[(e >> 4) as usize];
            buffer[pos + 1] = DIGITS[(e & 15) as usize];
            pos += 2;
            if i == 3 || i == 5 || i == 7 || i == 9 {
                buffer[pos] = b'-';
                pos += 1;
            }
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: ok because buffer consists of ASCII bytes
        unsafe { FStr::from_bytes_unchecked(buffer) }
    }

    /// Writes the string representation selected by `specifier` to `sink`.
    ///
    /// [`Uuid::CANONICAL_FORMAT`] is the only supported specifier; any other is rejected with
    /// [`FormatError::UnsupportedFormatSpecifier`] before anything is written.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4::{FormatError, Uuid};
    ///
    /// let mut sink = String::new();
    /// Uuid::NIL.write_formatted(Uuid::CANONICAL_FORMAT, &mut sink)?;
    /// assert_eq!(sink, "00000000-0000-0000-0000-000000000000");
    ///
    /// let err = Uuid::NIL.write_formatted("X", &mut sink).unwrap_err();
    /// assert_eq!(err, FormatError::UnsupportedFormatSpecifier);
    /// # Ok::<(), FormatError>(())
    /// ```
    pub fn write_formatted<W: fmt::Write + ?Sized>(
        &self,
        specifier: &str,
        sink: &mut W,
    ) -> Result<(), FormatError> {
        if specifier != Self::CANONICAL_FORMAT {
            return Err(FormatError::UnsupportedFormatSpecifier);
        }
        sink.write_str(&self.encode())?;
        Ok(())
    }

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    ///
    /// Both lowercase and uppercase digits are accepted. The version and variant bits are not
    /// validated, so any 128-bit value, including [`Uuid::NIL`], can be restored.
    pub fn parse_str(src: &str) -> Result<Self, ParseError> {
        let result = Self::scan(src.as_bytes());
        if let Err(err) = &result {
            tracing::trace!(error = %err, len = src.len(), "rejected UUID string");
        }
        result
    }

    /// Checks length, then hyphen positions, then decodes hex digit pairs, so that the reported
    /// error kind does not depend on where the first defect appears.
    fn scan(src: &[u8]) -> Result<Self, ParseError> {
        // the 32-digit form without hyphens is a layout defect rather than a length one
        if src.len() == 32 && src.iter().all(u8::is_ascii_hexdigit) {
            return Err(ParseError::InvalidFormat);
        }
        if src.len() != 36 {
            return Err(ParseError::InvalidLength);
        }
        if HYPHEN_POSITIONS.iter().any(|&i| src[i] != b'-') {
            return Err(ParseError::InvalidFormat);
        }

        let mut dst = [0u8; 16];
        let mut pos = 0;
        for e in dst.iter_mut() {
            while src.get(pos) == Some(&b'-') {
                pos += 1;
            }
            let (Some(&hi), Some(&lo)) = (src.get(pos), src.get(pos + 1)) else {
                return Err(ParseError::InvalidFormat);
            };
            *e = (decode_hex_digit(hi)? << 4) | decode_hex_digit(lo)?;
            pos += 2;
        }

        if pos == src.len() {
            Ok(Self(dst))
        } else {
            Err(ParseError::InvalidFormat)
        }
    }
}

fn decode_hex_digit(c: u8) -> Result<u8, ParseError> {
    match HEX_DECODE[c as usize] {
        0xff => Err(ParseError::InvalidCharacter),
        n => Ok(n),
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::parse_str(src)
    }
}

impl TryFrom<&str> for Uuid {
    type Error = ParseError;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        Self::parse_str(src)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

/// UUID variants defined by RFC 4122.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// Variant 0 (`0b0xxx`), reserved for NCS backward compatibility.
    Var0,
    /// Variant 10 (`0b10xx`), the variant specified by RFC 4122.
    Var10,
    /// Variant 110 (`0b110x`), reserved for Microsoft backward compatibility.
    Var110,
    /// Reserved for future definition (`0b111x`).
    VarReserved,
}

/// Error parsing an invalid string representation of UUID.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum ParseError {
    /// The input is not exactly 36 characters long.
    #[error("invalid string length: expected 36 characters")]
    InvalidLength,

    /// Hyphens are missing or misplaced, or the input ends in the middle of a byte.
    #[error("invalid string format: expected 8-4-4-4-12 hyphenated groups")]
    InvalidFormat,

    /// A character in place of a hexadecimal digit is not one.
    #[error("invalid character: expected hexadecimal digit")]
    InvalidCharacter,
}

/// Error writing a string representation of UUID with [`Uuid::write_formatted()`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum FormatError {
    /// The requested format specifier is not [`Uuid::CANONICAL_FORMAT`].
    #[error("unsupported format specifier")]
    UnsupportedFormatSpecifier,

    /// The sink refused the output.
    #[error("could not write to sink")]
    Write(#[from] fmt::Error),
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{ParseError, Uuid};

    impl From<Uuid> for String {
        fn from(src: Uuid) -> Self {
            src.to_string()
        }
    }

    impl TryFrom<String> for Uuid {
        type Error = ParseError;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Self::Value::parse_str(value).map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::{FormatError, ParseError, Uuid, Variant};

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [(&'static str, [u8; 16])] {
        &[
            ("00000000-0000-0000-0000-000000000000", [0x00; 16]),
            ("ffffffff-ffff-ffff-ffff-ffffffffffff", [0xff; 16]),
            (
                "2ca4b2ce-6c13-40d4-bccf-37d222820f6f",
                [
                    44, 164, 178, 206, 108, 19, 64, 212, 188, 207, 55, 210, 34, 130, 15, 111,
                ],
            ),
            (
                "123e4567-e89b-42d3-a456-426614174000",
                [
                    18, 62, 69, 103, 232, 155, 66, 211, 164, 86, 66, 102, 20, 23, 64, 0,
                ],
            ),
            (
                "f81d4fae-7dec-41d0-a765-00a0c91e6bf6",
                [
                    248, 29, 79, 174, 125, 236, 65, 208, 167, 101, 0, 160, 201, 30, 107, 246,
                ],
            ),
            (
                "9b2e3c1a-0d47-4f8e-b1c2-3d4e5f60718a",
                [
                    155, 46, 60, 26, 13, 71, 79, 142, 177, 194, 61, 78, 95, 96, 113, 138,
                ],
            ),
        ]
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        for (text, bytes) in prepare_cases() {
            let from_bytes = Uuid::from_bytes(*bytes);
            assert_eq!(Ok(from_bytes), text.parse());
            #[cfg(feature = "std")]
            assert_eq!(Ok(from_bytes), text.to_uppercase().parse());
            assert_eq!(&from_bytes.encode() as &str, *text);
            #[cfg(feature = "std")]
            assert_eq!(&from_bytes.to_string(), text);
            #[cfg(feature = "std")]
            assert_eq!(&from_bytes.encode().to_string(), text);
            #[cfg(all(feature = "std", feature = "uuid"))]
            assert_eq!(&uuid::Uuid::from(from_bytes).to_string(), text);
        }
    }

    /// Places lowercase digits and hyphens at fixed positions
    #[test]
    fn places_lowercase_digits_and_hyphens_at_fixed_positions() {
        for (_, bytes) in prepare_cases() {
            let text = Uuid::from_bytes(*bytes).encode();
            assert_eq!(text.len(), 36);
            for (i, c) in text.char_indices() {
                if [8, 13, 18, 23].contains(&i) {
                    assert_eq!(c, '-');
                } else {
                    assert!(matches!(c, '0'..='9' | 'a'..='f'), "{} at {}", c, i);
                }
            }
        }
    }

    /// Returns error kind according to length, format, and character precedence
    #[test]
    fn returns_error_kind_according_to_precedence() {
        use ParseError::*;

        let cases = [
            ("", InvalidLength),
            ("2ca4b2ce-6c13-40d4-bccf-37d222820f6", InvalidLength),
            ("2ca4b2ce-6c13-40d4-bccf-37d222820f6f0", InvalidLength),
            (" 2ca4b2ce-6c13-40d4-bccf-37d222820f6f", InvalidLength),
            ("2ca4b2ce-6c13-40d4-bccf-37d222820f6f ", InvalidLength),
            ("{2ca4b2ce-6c13-40d4-bccf-37d222820f6f}", InvalidLength),
            ("urn:uuid:2ca4b2ce-6c13-40d4-bccf-37d222820f6f", InvalidLength),
            ("123e4567e89b12d3a456426614174000", InvalidFormat),
            ("123E4567E89B12D3A456426614174000", InvalidFormat),
            ("                                ", InvalidLength),
            ("zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz", InvalidLength),
            ("123e4567e89b12d3a45642661417400g", InvalidLength),
            ("------------------------------------", InvalidFormat),
            ("123e4567-e89b-12d3-a456_426614174000", InvalidFormat),
            ("123e4567-e89b12d3-a456-4266141740000", InvalidFormat),
            ("123e4567+e89b-12d3-a456-42661417400g", InvalidFormat),
            ("g23e4567-e89b-12d3-a456-426614174000", InvalidCharacter),
            ("123e4567-e89b-12d3-a456-42661417400g", InvalidCharacter),
            (" 23e4567-e89b-12d3-a456-426614174000", InvalidCharacter),
            ("{23e4567-e89b-12d3-a456-42661417400}", InvalidCharacter),
            ("+23e4567-e89b-12d3-a456-426614174000", InvalidCharacter),
            ("123e4567-e89b-12 3-a456-426614174000", InvalidCharacter),
            ("0123456--e89b-12d3-a456-426614174000", InvalidCharacter),
            ("-1234567-e89b-12d3-a456-426614174000", InvalidCharacter),
            ("123e45é-e89b-12d3-a456-426614174000", InvalidCharacter),
        ];

        for (text, kind) in cases {
            assert_eq!(text.parse::<Uuid>(), Err(kind), "{:?}", text);
            assert_eq!(Uuid::try_from(text), Err(kind), "{:?}", text);
        }
    }

    /// Accepts any syntactically valid string regardless of version and variant bits
    #[test]
    fn accepts_any_syntactically_valid_string() {
        let x: Uuid = "123e4567-e89b-12d3-a456-426614174000".parse().unwrap();
        assert_eq!(x.version(), Some(1));

        let y: Uuid = "AbCdEf01-2345-6789-cDeF-0123456789aB".parse().unwrap();
        assert_eq!(&y.encode() as &str, "abcdef01-2345-6789-cdef-0123456789ab");
        assert_eq!(y.variant(), Variant::Var110);
    }

    /// Returns Nil and Max UUIDs
    #[test]
    fn returns_nil_and_max_uuids() {
        assert_eq!(
            &Uuid::NIL.encode() as &str,
            "00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(
            "00000000-0000-0000-0000-000000000000".parse(),
            Ok(Uuid::NIL)
        );
        assert!(Uuid::NIL.is_nil());
        assert_eq!(Uuid::NIL, Uuid::default());

        assert_eq!(
            &Uuid::MAX.encode() as &str,
            "ffffffff-ffff-ffff-ffff-ffffffffffff"
        );
        assert!(!Uuid::MAX.is_nil());
    }

    /// Compares byte by byte
    #[test]
    fn compares_byte_by_byte() {
        for (_, bytes) in prepare_cases() {
            let e = Uuid::from_bytes(*bytes);
            assert_eq!(e, e);
            assert_eq!(e, Uuid::from_bytes(*bytes));

            for i in 0..16 {
                let mut other = *bytes;
                other[i] ^= 1;
                assert_ne!(e, Uuid::from_bytes(other));
            }
        }
    }

    /// Stamps version and variant bits onto random bytes
    #[test]
    fn stamps_version_and_variant_bits_onto_random_bytes() {
        let e = Uuid::from_random_bytes_v4([0x00; 16]);
        assert_eq!(&e.encode() as &str, "00000000-0000-4000-8000-000000000000");

        let e = Uuid::from_random_bytes_v4([0xff; 16]);
        assert_eq!(&e.encode() as &str, "ffffffff-ffff-4fff-bfff-ffffffffffff");

        for (_, bytes) in prepare_cases() {
            let e = Uuid::from_random_bytes_v4(*bytes);
            assert_eq!(e.version(), Some(4));
            assert_eq!(e.variant(), Variant::Var10);
            assert_eq!(e.as_bytes()[6] & 0x0f, bytes[6] & 0x0f);
            assert_eq!(e.as_bytes()[8] & 0x3f, bytes[8] & 0x3f);
        }
    }

    /// Reports variant and version
    #[test]
    fn reports_variant_and_version() {
        assert_eq!(Uuid::NIL.variant(), Variant::Var0);
        assert_eq!(Uuid::NIL.version(), None);
        assert_eq!(Uuid::MAX.variant(), Variant::VarReserved);
        assert_eq!(Uuid::MAX.version(), None);

        let e: Uuid = "2ca4b2ce-6c13-40d4-bccf-37d222820f6f".parse().unwrap();
        assert_eq!(e.variant(), Variant::Var10);
        assert_eq!(e.version(), Some(4));
    }

    /// A fixed-capacity sink that works without heap-allocated string types.
    struct StackSink {
        buffer: [u8; 64],
        len: usize,
    }

    impl StackSink {
        fn new() -> Self {
            Self {
                buffer: [0u8; 64],
                len: 0,
            }
        }

        fn as_str(&self) -> &str {
            core::str::from_utf8(&self.buffer[..self.len]).unwrap()
        }
    }

    impl core::fmt::Write for StackSink {
        fn write_str(&mut self, s: &str) -> core::fmt::Result {
            let end = self.len + s.len();
            self.buffer
                .get_mut(self.len..end)
                .ok_or(core::fmt::Error)?
                .copy_from_slice(s.as_bytes());
            self.len = end;
            Ok(())
        }
    }

    /// Writes canonical form only for canonical specifier
    #[test]
    fn writes_canonical_form_only_for_canonical_specifier() {
        for (text, bytes) in prepare_cases() {
            let e = Uuid::from_bytes(*bytes);
            let mut sink = StackSink::new();
            assert_eq!(e.write_formatted(Uuid::CANONICAL_FORMAT, &mut sink), Ok(()));
            assert_eq!(sink.as_str(), *text);

            for specifier in ["s", "x", "X", "b", "u", " "] {
                let mut sink = StackSink::new();
                assert_eq!(
                    e.write_formatted(specifier, &mut sink),
                    Err(FormatError::UnsupportedFormatSpecifier)
                );
                assert!(sink.as_str().is_empty());
            }
        }

        #[cfg(feature = "std")]
        {
            let mut sink = String::new();
            assert_eq!(Uuid::MAX.write_formatted("", &mut sink), Ok(()));
            assert_eq!(sink, "ffffffff-ffff-ffff-ffff-ffffffffffff");
        }
    }

    /// Reports sink failure
    #[test]
    fn reports_sink_failure() {
        use core::fmt;

        struct RefusingSink;

        impl fmt::Write for RefusingSink {
            fn write_str(&mut self, _: &str) -> fmt::Result {
                Err(fmt::Error)
            }
        }

        assert_eq!(
            Uuid::NIL.write_formatted(Uuid::CANONICAL_FORMAT, &mut RefusingSink),
            Err(FormatError::Write(fmt::Error))
        );
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for (_, bytes) in prepare_cases() {
            let e = Uuid::from_bytes(*bytes);
            assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Uuid::from(u128::from(e)), e);
            assert_eq!(AsRef::<[u8]>::as_ref(&e), bytes.as_slice());
            assert_eq!(e.encode().parse(), Ok(e));
            #[cfg(feature = "std")]
            assert_eq!(e.encode().to_uppercase().parse(), Ok(e));
            #[cfg(feature = "std")]
            assert_eq!(Uuid::try_from(e.to_string()), Ok(e));
            #[cfg(feature = "std")]
            assert_eq!(Uuid::try_from(String::from(e).to_uppercase()), Ok(e));
            #[cfg(feature = "uuid")]
            assert_eq!(Uuid::from(<uuid::Uuid>::from(e)), e);

            #[cfg(feature = "uuid")]
            assert_eq!(uuid::Uuid::from(e).as_bytes(), &<[u8; 16]>::from(e));
            #[cfg(feature = "uuid")]
            assert_eq!(uuid::Uuid::from(e).as_u128(), u128::from(e));
        }
    }
}
