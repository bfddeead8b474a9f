//! The `Uuid` value type.
//!
//! This module provides a 128-bit identifier stored as 16 raw bytes, with
//! version 4 (random) generation, lenient text parsing that never fails, and
//! a total ordering keyed on the identifier's trailing fields.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use quid_random::GenericRng;

const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

const fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// A 128-bit universally unique identifier (UUID).
///
/// The identifier is 16 raw bytes. Freshly generated values carry RFC 4122
/// version 4 (random) version and variant bits. Text parsing is lenient and
/// total, so constructing an identifier from a string cannot fail; see
/// [`Uuid::parse_lossy`] for the exact rules.
///
/// # Examples
///
/// ```
/// use quid::Uuid;
///
/// let id = Uuid::parse_lossy("550e8400-e29b-41d4-a716-446655440000");
/// assert_eq!(id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
///
/// # #[cfg(any(feature = "rand", feature = "simulator"))] {
/// let generated = Uuid::new_v4();
/// assert_eq!(generated.get_version_num(), 4);
/// # }
/// ```
///
/// # Ordering
///
/// Identifiers are ordered by a fixed decomposition of the byte array rather
/// than plain lexicographic byte order. The trailing fields are compared
/// first, each read little-endian:
///
/// 1. octets 12-15 as a `u32` (octet 15 most significant)
/// 2. octets 10-11 as a `u16`
/// 3. octets 8-9 as a `u16`
/// 4. octets 0-7 as bytes, in index order
///
/// ```
/// use quid::Uuid;
///
/// let a = Uuid::from_bytes([0xff, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
/// let b = Uuid::from_bytes([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]);
///
/// // The trailing field is compared first, so `b` sorts above `a`.
/// assert!(b > a);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// The number of bytes in a UUID.
    pub const SIZE: usize = 16;

    /// Creates a nil UUID (all zeros).
    ///
    /// # Examples
    ///
    /// ```
    /// use quid::Uuid;
    ///
    /// let nil = Uuid::nil();
    /// assert!(nil.is_nil());
    /// ```
    #[must_use]
    pub const fn nil() -> Self {
        Self([0; 16])
    }

    /// Returns `true` if this is a nil UUID (all zeros).
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        self.as_u128() == 0
    }

    /// Creates a max UUID (all ones).
    #[must_use]
    pub const fn max() -> Self {
        Self([0xff; 16])
    }

    /// Returns `true` if this is a max UUID (all ones).
    #[must_use]
    pub const fn is_max(&self) -> bool {
        self.as_u128() == u128::MAX
    }

    /// Creates a UUID from 16 bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use quid::Uuid;
    ///
    /// let bytes = [0x55, 0x0e, 0x84, 0x00, 0xe2, 0x9b, 0x41, 0xd4,
    ///              0xa7, 0x16, 0x44, 0x66, 0x55, 0x44, 0x00, 0x00];
    /// let uuid = Uuid::from_bytes(bytes);
    /// assert_eq!(uuid.as_bytes(), &bytes);
    /// ```
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Creates a UUID from random bytes, forcing the RFC 4122 version 4 and
    /// variant bits.
    ///
    /// Octet 6 keeps its low nibble and takes `0x40` in the high nibble, and
    /// octet 8 keeps its low six bits and takes `0b10` in the top two bits.
    /// All other octets pass through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use quid::Uuid;
    ///
    /// let id = Uuid::from_random_bytes([0x00; 16]);
    /// assert_eq!(id.get_version_num(), 4);
    /// assert_eq!(id.as_bytes()[8] & 0xc0, 0x80);
    /// ```
    #[must_use]
    pub const fn from_random_bytes(mut bytes: [u8; 16]) -> Self {
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        Self(bytes)
    }

    /// Generates a version 4 UUID by drawing 16 bytes from `rng`.
    ///
    /// This is the injection point for custom randomness. The feature-selected
    /// [`new_v4`](Self::new_v4) constructor routes through it, and tests can
    /// pass a seeded generator for reproducible values.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(any(feature = "rand", feature = "simulator"))] {
    /// use quid::Uuid;
    /// use quid_random::Rng;
    ///
    /// let a = Uuid::new_v4_with(&Rng::from_seed(12345));
    /// let b = Uuid::new_v4_with(&Rng::from_seed(12345));
    /// assert_eq!(a, b);
    /// # }
    /// ```
    #[must_use]
    pub fn new_v4_with(rng: &impl GenericRng) -> Self {
        let mut bytes = [0_u8; 16];
        rng.fill_bytes(&mut bytes);
        Self::from_random_bytes(bytes)
    }

    /// Creates a UUID from a byte slice, padding or truncating as needed.
    ///
    /// Short slices fill the leading bytes and leave the rest zero. Slices
    /// longer than 16 bytes are cut off after the first 16.
    ///
    /// # Examples
    ///
    /// ```
    /// use quid::Uuid;
    ///
    /// let id = Uuid::from_slice_lossy(&[0xab, 0xcd]);
    /// assert_eq!(&id.as_bytes()[..3], &[0xab, 0xcd, 0x00]);
    /// ```
    #[must_use]
    pub fn from_slice_lossy(slice: &[u8]) -> Self {
        let mut bytes = [0_u8; 16];
        let len = slice.len().min(Self::SIZE);
        bytes[..len].copy_from_slice(&slice[..len]);
        Self(bytes)
    }

    /// Parses a UUID from a string, ignoring everything that is not a hex
    /// digit.
    ///
    /// Parsing is total: any input produces a value. Hex digits (`0-9`,
    /// `a-f`, `A-F`) are collected in order and paired into bytes; all other
    /// characters are skipped. A trailing unpaired digit is dropped. Fewer
    /// than 32 digits pad the remaining bytes with zeros, and digits past the
    /// first 32 are ignored, so the empty string parses to the nil UUID.
    ///
    /// # Accepted formats
    ///
    /// * Simple: `550e8400e29b41d4a716446655440000`
    /// * Hyphenated: `550e8400-e29b-41d4-a716-446655440000`
    /// * Braced: `{550e8400-e29b-41d4-a716-446655440000}`
    /// * Anything else: best effort over whatever hex digits appear
    ///
    /// # Examples
    ///
    /// ```
    /// use quid::Uuid;
    ///
    /// let dashed = Uuid::parse_lossy("550e8400-e29b-41d4-a716-446655440000");
    /// let plain = Uuid::parse_lossy("550e8400e29b41d4a716446655440000");
    /// assert_eq!(dashed, plain);
    /// ```
    ///
    /// ```
    /// use quid::Uuid;
    ///
    /// let id = Uuid::parse_lossy("12-34");
    /// assert_eq!(&id.as_bytes()[..3], &[0x12, 0x34, 0x00]);
    /// assert!(Uuid::parse_lossy("").is_nil());
    /// ```
    #[must_use]
    pub fn parse_lossy(input: &str) -> Self {
        let mut bytes = [0_u8; 16];
        let mut index = 0;
        let mut high: Option<u8> = None;

        for digit in input.bytes().filter_map(hex_digit) {
            match high.take() {
                None => high = Some(digit),
                Some(h) => {
                    bytes[index] = (h << 4) | digit;
                    index += 1;
                    if index == Self::SIZE {
                        break;
                    }
                }
            }
        }

        Self(bytes)
    }

    /// Creates a UUID from a 128-bit value in big-endian byte order.
    ///
    /// # Examples
    ///
    /// ```
    /// use quid::Uuid;
    ///
    /// let uuid = Uuid::from_u128(0x550e8400_e29b_41d4_a716_446655440000);
    /// assert_eq!(uuid.hyphenated(), "550e8400-e29b-41d4-a716-446655440000");
    /// ```
    #[must_use]
    pub const fn from_u128(v: u128) -> Self {
        Self(v.to_be_bytes())
    }

    /// Returns the UUID as a 128-bit value in big-endian byte order.
    #[must_use]
    pub const fn as_u128(&self) -> u128 {
        u128::from_be_bytes(self.0)
    }

    /// Returns the bytes of the UUID.
    ///
    /// # Examples
    ///
    /// ```
    /// use quid::Uuid;
    ///
    /// let uuid = Uuid::nil();
    /// assert_eq!(uuid.as_bytes(), &[0u8; 16]);
    /// ```
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns the bytes of the UUID as an owned array.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Returns the version number held in the high nibble of octet 6.
    ///
    /// Generated UUIDs report `4`.
    #[must_use]
    pub const fn get_version_num(&self) -> usize {
        (self.0[6] >> 4) as usize
    }

    /// Returns the UUID as a simple (non-hyphenated) lowercase hex string.
    ///
    /// # Examples
    ///
    /// ```
    /// use quid::Uuid;
    ///
    /// let uuid = Uuid::nil();
    /// assert_eq!(uuid.simple(), "00000000000000000000000000000000");
    /// ```
    #[must_use]
    pub fn simple(&self) -> String {
        let mut out = String::with_capacity(32);
        self.push_hex(&mut out, 0, 16);
        out
    }

    /// Returns the UUID as a hyphenated lowercase hex string.
    ///
    /// # Examples
    ///
    /// ```
    /// use quid::Uuid;
    ///
    /// let uuid = Uuid::nil();
    /// assert_eq!(uuid.hyphenated(), "00000000-0000-0000-0000-000000000000");
    /// ```
    #[must_use]
    pub fn hyphenated(&self) -> String {
        let mut out = String::with_capacity(36);
        self.push_hex(&mut out, 0, 4);
        out.push('-');
        self.push_hex(&mut out, 4, 2);
        out.push('-');
        self.push_hex(&mut out, 6, 2);
        out.push('-');
        self.push_hex(&mut out, 8, 2);
        out.push('-');
        self.push_hex(&mut out, 10, 6);
        out
    }

    /// Returns the UUID as a braced hyphenated string.
    ///
    /// # Examples
    ///
    /// ```
    /// use quid::Uuid;
    ///
    /// let uuid = Uuid::nil();
    /// assert_eq!(uuid.braced(), "{00000000-0000-0000-0000-000000000000}");
    /// ```
    #[must_use]
    pub fn braced(&self) -> String {
        format!("{{{}}}", self.hyphenated())
    }

    fn push_hex(&self, out: &mut String, start: usize, len: usize) {
        for &byte in &self.0[start..start + len] {
            out.push(char::from(HEX_CHARS[usize::from(byte >> 4)]));
            out.push(char::from(HEX_CHARS[usize::from(byte & 0x0f)]));
        }
    }

    /// The comparison key: trailing fields first, each little-endian, then
    /// the leading eight octets in index order.
    const fn ord_key(&self) -> (u32, u16, u16, [u8; 8]) {
        let b = &self.0;
        (
            u32::from_le_bytes([b[12], b[13], b[14], b[15]]),
            u16::from_le_bytes([b[10], b[11]]),
            u16::from_le_bytes([b[8], b[9]]),
            [b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]],
        )
    }
}

impl Ord for Uuid {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ord_key().cmp(&other.ord_key())
    }
}

impl PartialOrd for Uuid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hyphenated())
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Uuid {
    type Err = Infallible;

    /// Parses leniently via [`Uuid::parse_lossy`], so this never returns an
    /// error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lossy(s))
    }
}

impl Default for Uuid {
    fn default() -> Self {
        Self::nil()
    }
}

impl From<&str> for Uuid {
    fn from(s: &str) -> Self {
        Self::parse_lossy(s)
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(bytes: [u8; 16]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(uuid: Uuid) -> Self {
        uuid.into_bytes()
    }
}

impl From<u128> for Uuid {
    fn from(v: u128) -> Self {
        Self::from_u128(v)
    }
}

impl From<Uuid> for u128 {
    fn from(uuid: Uuid) -> Self {
        uuid.as_u128()
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(feature = "uuid")]
mod uuid_interop {
    use super::Uuid;

    impl From<::uuid::Uuid> for Uuid {
        fn from(uuid: ::uuid::Uuid) -> Self {
            Self::from_bytes(uuid.into_bytes())
        }
    }

    impl From<Uuid> for ::uuid::Uuid {
        fn from(uuid: Uuid) -> Self {
            Self::from_bytes(uuid.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    //! Human-readable formats carry the hyphenated string; binary formats
    //! carry the 16 raw bytes. Both directions reuse the lossy constructors,
    //! so deserializing malformed input yields a value instead of an error.

    use std::fmt;

    use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

    use super::Uuid;

    impl Serialize for Uuid {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.hyphenated())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    struct UuidVisitor;

    impl de::Visitor<'_> for UuidVisitor {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a UUID string or 16 raw bytes")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Uuid::parse_lossy(value))
        }

        fn visit_bytes<E>(self, value: &[u8]) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Uuid::from_slice_lossy(value))
        }
    }

    impl<'de> Deserialize<'de> for Uuid {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(UuidVisitor)
            } else {
                deserializer.deserialize_bytes(UuidVisitor)
            }
        }
    }
}
