use core::fmt;
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign};
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

#[cfg(feature = "num-bigint")]
use num_bigint::{BigInt, BigUint, Sign};

use crate::Uint128Error;
use ethnum::{I256, U256};

/// Unsigned integer bounded to the range `[0, 2^128 - 1]`.
///
/// Every value of this type is in range. Inputs that can fall outside it
/// (signed integers, decimal strings, wide integers) are validated on the way
/// in, and arithmetic reports an error instead of wrapping.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Uint128 {
    value: u128,
}

// ============================================================================
// Constants
// ============================================================================

impl Uint128 {
    /// Size of the canonical encoding in bytes.
    pub const BYTES: usize = 16;

    /// Width of the value range in bits.
    pub const BITS: u32 = 128;

    /// Zero
    pub const ZERO: Self = Self { value: 0 };

    /// One
    pub const ONE: Self = Self { value: 1 };

    /// Largest representable value: 2^128 - 1
    pub const MAX: Self = Self { value: u128::MAX };
}

// ============================================================================
// Constructors and Raw Access
// ============================================================================

impl Default for Uint128 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Uint128 {
    /// Returns zero.
    #[inline(always)]
    pub const fn new() -> Self {
        Self::ZERO
    }

    #[inline(always)]
    pub const fn from_u64(value: u64) -> Self {
        Self {
            value: value as u128,
        }
    }

    #[inline(always)]
    pub const fn from_u128(value: u128) -> Self {
        Self { value }
    }

    /// Returns the wrapped native integer.
    #[inline(always)]
    pub const fn to_u128(self) -> u128 {
        self.value
    }

    /// Creates a value from a signed 64-bit integer. Negative input is an
    /// `Underflow`.
    #[inline(always)]
    pub const fn try_from_i64(value: i64) -> crate::Result<Self> {
        Self::try_from_i128(value as i128)
    }

    #[inline(always)]
    pub const fn try_from_i128(value: i128) -> crate::Result<Self> {
        if value < 0 {
            Err(Uint128Error::Underflow)
        } else {
            Ok(Self {
                value: value as u128,
            })
        }
    }

    /// Creates a value from a 256-bit signed integer.
    ///
    /// This is the range gate for every wide input: the sign is checked first
    /// (`Underflow`), then the bit length (`Overflow`).
    pub fn validate(value: I256) -> crate::Result<Self> {
        let (high, low) = value.into_words();
        if high < 0 {
            return Err(Uint128Error::Underflow);
        }
        if high != 0 {
            return Err(Uint128Error::Overflow);
        }
        Ok(Self { value: low as u128 })
    }

    /// Creates a value from a 256-bit unsigned integer. Anything wider than
    /// 128 bits is an `Overflow`.
    pub fn try_from_u256(value: U256) -> crate::Result<Self> {
        let (high, low) = value.into_words();
        if high != 0 {
            return Err(Uint128Error::Overflow);
        }
        Ok(Self { value: low })
    }

    #[inline(always)]
    pub fn to_i256(self) -> I256 {
        I256::from_words(0, self.value as i128)
    }

    #[inline(always)]
    pub fn to_u256(self) -> U256 {
        U256::from_words(0, self.value)
    }

    /// Number of significant bits. Zero has a bit length of 0.
    #[inline(always)]
    pub const fn bits(self) -> u32 {
        Self::BITS - self.value.leading_zeros()
    }

    #[inline(always)]
    pub const fn is_zero(self) -> bool {
        self.value == 0
    }
}

// ============================================================================
// Arithmetic Operations - Addition
// ============================================================================

impl Uint128 {
    /// Checked addition. Returns `None` if the sum exceeds `MAX`.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.value.checked_add(rhs.value) {
            Some(value) => Some(Self { value }),
            None => None,
        }
    }

    /// Checked addition. Returns `Overflow` if the sum exceeds `MAX`.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn try_add(self, rhs: Self) -> crate::Result<Self> {
        match self.checked_add(rhs) {
            Some(result) => Ok(result),
            None => Err(Uint128Error::Overflow),
        }
    }
}

// ============================================================================
// Arithmetic Operations - Subtraction
// ============================================================================

impl Uint128 {
    /// Checked subtraction. Returns `None` if the difference is negative.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.value.checked_sub(rhs.value) {
            Some(value) => Some(Self { value }),
            None => None,
        }
    }

    /// Checked subtraction. Returns `Underflow` if the difference is negative.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn try_sub(self, rhs: Self) -> crate::Result<Self> {
        match self.checked_sub(rhs) {
            Some(result) => Ok(result),
            None => Err(Uint128Error::Underflow),
        }
    }
}

// ============================================================================
// Arithmetic Operations - Multiplication
// ============================================================================

impl Uint128 {
    /// Checked multiplication. Returns `None` if the product exceeds `MAX`.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn checked_mul(self, rhs: Self) -> Option<Self> {
        match self.value.checked_mul(rhs.value) {
            Some(value) => Some(Self { value }),
            None => None,
        }
    }

    /// Checked multiplication. Returns `Overflow` if the product exceeds `MAX`.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn try_mul(self, rhs: Self) -> crate::Result<Self> {
        match self.checked_mul(rhs) {
            Some(result) => Ok(result),
            None => Err(Uint128Error::Overflow),
        }
    }
}

// ============================================================================
// Arithmetic Operations - Division
// ============================================================================

impl Uint128 {
    /// Truncating division. Returns `None` if `rhs` is zero.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn checked_div(self, rhs: Self) -> Option<Self> {
        match self.value.checked_div(rhs.value) {
            Some(value) => Some(Self { value }),
            None => None,
        }
    }

    /// Truncating division. Returns `DivisionByZero` if `rhs` is zero.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn try_div(self, rhs: Self) -> crate::Result<Self> {
        match self.checked_div(rhs) {
            Some(result) => Ok(result),
            None => Err(Uint128Error::DivisionByZero),
        }
    }

    /// Remainder of truncating division. Returns `None` if `rhs` is zero.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn checked_rem(self, rhs: Self) -> Option<Self> {
        match self.value.checked_rem(rhs.value) {
            Some(value) => Some(Self { value }),
            None => None,
        }
    }

    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn try_rem(self, rhs: Self) -> crate::Result<Self> {
        match self.checked_rem(rhs) {
            Some(result) => Ok(result),
            None => Err(Uint128Error::DivisionByZero),
        }
    }
}

// ============================================================================
// Exponentiation
// ============================================================================

impl Uint128 {
    /// Raises `self` to the power `exp`. Returns `None` if the result exceeds
    /// `MAX`. `0^0` is 1.
    ///
    /// Square-and-multiply stops at the first intermediate that leaves the
    /// range, so the cost is bounded no matter how large `exp` is.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn checked_pow(self, exp: Self) -> Option<Self> {
        if exp.value > u32::MAX as u128 {
            // Only 0 and 1 survive an exponent this large.
            return match self.value {
                0 | 1 => Some(self),
                _ => None,
            };
        }
        match self.value.checked_pow(exp.value as u32) {
            Some(value) => Some(Self { value }),
            None => None,
        }
    }

    /// Raises `self` to the power `exp`. Returns `Overflow` if the result
    /// exceeds `MAX`.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn try_pow(self, exp: Self) -> crate::Result<Self> {
        match self.checked_pow(exp) {
            Some(result) => Ok(result),
            None => Err(Uint128Error::Overflow),
        }
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl Uint128 {
    /// Parses a base-10 integer literal.
    ///
    /// Accepts one optional leading `+` or `-` followed by ASCII digits.
    /// Leading zeros are allowed and `"-0"` is zero. The whole literal is
    /// syntax-checked before its range, so a malformed string is always
    /// `InvalidString`; a negative non-zero literal is `Underflow` and one
    /// above `MAX` is `Overflow`.
    pub fn from_str_exact(s: &str) -> crate::Result<Self> {
        let bytes = s.as_bytes();

        let (is_negative, digits) = match bytes.first() {
            Some(b'-') => (true, &bytes[1..]),
            Some(b'+') => (false, &bytes[1..]),
            _ => (false, bytes),
        };

        if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
            return Err(Uint128Error::InvalidString);
        }

        if is_negative {
            return if digits.iter().all(|&b| b == b'0') {
                Ok(Self::ZERO)
            } else {
                Err(Uint128Error::Underflow)
            };
        }

        let mut value: u128 = 0;
        for &b in digits {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add((b - b'0') as u128))
                .ok_or(Uint128Error::Overflow)?;
        }

        Ok(Self { value })
    }

    /// Parses a base-10 integer literal from UTF-8 bytes.
    pub fn from_utf8_bytes(bytes: &[u8]) -> crate::Result<Self> {
        let s = core::str::from_utf8(bytes).map_err(|_| Uint128Error::InvalidString)?;
        Self::from_str_exact(s)
    }
}

impl FromStr for Uint128 {
    type Err = Uint128Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_exact(s)
    }
}

// ============================================================================
// Fixed-Size Bytes Codec
// ============================================================================

impl Uint128 {
    /// Decodes the canonical big-endian encoding. Every 16-byte pattern is a
    /// valid value; all zero bytes decode to zero.
    #[inline(always)]
    pub const fn from_fixed_size_bytes(bytes: [u8; 16]) -> Self {
        Self {
            value: u128::from_be_bytes(bytes),
        }
    }

    /// Decodes the canonical big-endian encoding from a slice that must be
    /// exactly 16 bytes long.
    pub fn from_fixed_size_byte_slice(bytes: &[u8]) -> crate::Result<Self> {
        let bytes: [u8; 16] = bytes
            .try_into()
            .map_err(|_| Uint128Error::InvalidBytesSize)?;
        Ok(Self::from_fixed_size_bytes(bytes))
    }

    /// Encodes as 16 big-endian bytes, zero-padded at the most significant end.
    #[inline(always)]
    pub const fn to_fixed_size_bytes(self) -> [u8; 16] {
        self.value.to_be_bytes()
    }

    /// Encodes as 16 big-endian bytes in a `Vec`.
    #[cfg(feature = "alloc")]
    pub fn to_fixed_size_byte_slice(self) -> alloc::vec::Vec<u8> {
        self.to_fixed_size_bytes().to_vec()
    }

    /// Writes the canonical encoding into the first 16 bytes of `buf`.
    pub fn write_fixed_size_bytes(&self, buf: &mut [u8]) -> crate::Result<()> {
        let head = buf
            .get_mut(..Self::BYTES)
            .ok_or(Uint128Error::InvalidBytesSize)?;
        head.copy_from_slice(&self.to_fixed_size_bytes());
        Ok(())
    }
}

// ============================================================================
// Operator Overloading
// ============================================================================

impl Add for Uint128 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("attempt to add with overflow")
    }
}

impl Sub for Uint128 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs)
            .expect("attempt to subtract with underflow")
    }
}

impl Mul for Uint128 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs)
            .expect("attempt to multiply with overflow")
    }
}

impl Div for Uint128 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).expect("attempt to divide by zero")
    }
}

impl Rem for Uint128 {
    type Output = Self;

    #[inline(always)]
    fn rem(self, rhs: Self) -> Self::Output {
        self.checked_rem(rhs)
            .expect("attempt to calculate the remainder with a divisor of zero")
    }
}

impl AddAssign for Uint128 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Uint128 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Uint128 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Uint128 {
    #[inline(always)]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl RemAssign for Uint128 {
    #[inline(always)]
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

// ============================================================================
// Standard Library Trait Implementations
// ============================================================================

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Uint128 {
                #[inline(always)]
                fn from(value: $t) -> Self {
                    Self { value: value as u128 }
                }
            }
        )*
    };
}

macro_rules! impl_try_from_signed {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for Uint128 {
                type Error = Uint128Error;

                #[inline(always)]
                fn try_from(value: $t) -> crate::Result<Self> {
                    Self::try_from_i128(value as i128)
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128);
impl_try_from_signed!(i8, i16, i32, i64, i128);

impl From<[u8; 16]> for Uint128 {
    #[inline(always)]
    fn from(bytes: [u8; 16]) -> Self {
        Self::from_fixed_size_bytes(bytes)
    }
}

impl TryFrom<&[u8]> for Uint128 {
    type Error = Uint128Error;

    #[inline(always)]
    fn try_from(bytes: &[u8]) -> crate::Result<Self> {
        Self::from_fixed_size_byte_slice(bytes)
    }
}

impl TryFrom<I256> for Uint128 {
    type Error = Uint128Error;

    #[inline(always)]
    fn try_from(value: I256) -> crate::Result<Self> {
        Self::validate(value)
    }
}

impl TryFrom<U256> for Uint128 {
    type Error = Uint128Error;

    #[inline(always)]
    fn try_from(value: U256) -> crate::Result<Self> {
        Self::try_from_u256(value)
    }
}

impl From<Uint128> for u128 {
    #[inline(always)]
    fn from(value: Uint128) -> Self {
        value.value
    }
}

impl From<Uint128> for I256 {
    #[inline(always)]
    fn from(value: Uint128) -> Self {
        value.to_i256()
    }
}

impl From<Uint128> for U256 {
    #[inline(always)]
    fn from(value: Uint128) -> Self {
        value.to_u256()
    }
}

impl From<Uint128> for [u8; 16] {
    #[inline(always)]
    fn from(value: Uint128) -> Self {
        value.to_fixed_size_bytes()
    }
}

// ============================================================================
// Arbitrary-Precision Interop
// ============================================================================

#[cfg(feature = "num-bigint")]
impl TryFrom<&BigUint> for Uint128 {
    type Error = Uint128Error;

    fn try_from(value: &BigUint) -> crate::Result<Self> {
        if value.bits() > u64::from(Self::BITS) {
            return Err(Uint128Error::Overflow);
        }

        let digits = value.to_bytes_be();
        let mut bytes = [0u8; 16];
        bytes[Self::BYTES - digits.len()..].copy_from_slice(&digits);
        Ok(Self::from_fixed_size_bytes(bytes))
    }
}

#[cfg(feature = "num-bigint")]
impl TryFrom<BigUint> for Uint128 {
    type Error = Uint128Error;

    #[inline(always)]
    fn try_from(value: BigUint) -> crate::Result<Self> {
        Self::try_from(&value)
    }
}

#[cfg(feature = "num-bigint")]
impl TryFrom<&BigInt> for Uint128 {
    type Error = Uint128Error;

    fn try_from(value: &BigInt) -> crate::Result<Self> {
        if value.sign() == Sign::Minus {
            return Err(Uint128Error::Underflow);
        }
        Self::try_from(value.magnitude())
    }
}

#[cfg(feature = "num-bigint")]
impl TryFrom<BigInt> for Uint128 {
    type Error = Uint128Error;

    #[inline(always)]
    fn try_from(value: BigInt) -> crate::Result<Self> {
        Self::try_from(&value)
    }
}

#[cfg(feature = "num-bigint")]
impl From<Uint128> for BigUint {
    fn from(value: Uint128) -> Self {
        BigUint::from_bytes_be(&value.to_fixed_size_bytes())
    }
}

#[cfg(feature = "num-bigint")]
impl From<Uint128> for BigInt {
    fn from(value: Uint128) -> Self {
        BigInt::from(BigUint::from(value))
    }
}

// ============================================================================
// Formatting
// ============================================================================

impl fmt::Display for Uint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl fmt::Debug for Uint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_struct("Uint128")
                .field("value", &self.value)
                .finish()
        } else {
            write!(f, "Uint128({})", self)
        }
    }
}

// ============================================================================
// Iterator Trait Implementations
// ============================================================================

impl Sum for Uint128 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Uint128> for Uint128 {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + *x)
    }
}

impl Product for Uint128 {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl<'a> Product<&'a Uint128> for Uint128 {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * *x)
    }
}

// ============================================================================
// Serde Support
// ============================================================================

#[cfg(feature = "serde")]
impl Serialize for Uint128 {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            // JSON, TOML, etc. - decimal string, no precision loss in JS clients
            serializer.collect_str(self)
        } else {
            // Bincode, MessagePack, etc. - canonical 16-byte encoding
            self.to_fixed_size_bytes().serialize(serializer)
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Uint128 {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let s = alloc::string::String::deserialize(deserializer)?;
            Self::from_str_exact(&s).map_err(de::Error::custom)
        } else {
            let bytes = <[u8; 16]>::deserialize(deserializer)?;
            Ok(Self::from_fixed_size_bytes(bytes))
        }
    }
}




#[cfg(test)]
mod conversion_tests {
    use super::*;

    #[test]
    fn test_from_i64() {
        assert_eq!(Uint128::try_from_i64(0), Ok(Uint128::ZERO));
        assert_eq!(
            Uint128::try_from_i64(i64::MAX),
            Ok(Uint128::from_u64(i64::MAX as u64))
        );
        assert_eq!(Uint128::try_from_i64(-1), Err(Uint128Error::Underflow));
        assert_eq!(
            Uint128::try_from_i64(i64::MIN),
            Err(Uint128Error::Underflow)
        );
        assert_eq!(Uint128::try_from(7i64), Ok(Uint128::from_u64(7)));
    }

    #[test]
    fn test_signed_try_from() {
        assert_eq!(Uint128::try_from(-1i8), Err(Uint128Error::Underflow));
        assert_eq!(Uint128::try_from(300i16), Ok(Uint128::from_u64(300)));
        assert_eq!(Uint128::try_from(-5i32), Err(Uint128Error::Underflow));
        assert_eq!(
            Uint128::try_from(i128::MAX),
            Ok(Uint128::from_u128(i128::MAX as u128))
        );
    }

    #[test]
    fn test_unsigned_from() {
        assert_eq!(Uint128::from(255u8), Uint128::from_u64(255));
        assert_eq!(Uint128::from(u64::MAX), Uint128::from_u64(u64::MAX));
        assert_eq!(Uint128::from(u128::MAX), Uint128::MAX);
        assert_eq!(u128::from(Uint128::MAX), u128::MAX);
    }

    #[test]
    fn test_validate_range_guard() {
        assert_eq!(
            Uint128::validate(I256::new(-1)),
            Err(Uint128Error::Underflow)
        );
        // 2^128
        assert_eq!(
            Uint128::validate(I256::from_words(1, 0)),
            Err(Uint128Error::Overflow)
        );
        // 2^128 - 1
        assert_eq!(
            Uint128::validate(I256::from_words(0, -1)),
            Ok(Uint128::MAX)
        );
        assert_eq!(Uint128::validate(I256::new(0)), Ok(Uint128::ZERO));
        assert_eq!(Uint128::validate(I256::MIN), Err(Uint128Error::Underflow));
        assert_eq!(Uint128::validate(I256::MAX), Err(Uint128Error::Overflow));
    }

    #[test]
    fn test_u256_range_guard() {
        assert_eq!(
            Uint128::try_from(U256::from_words(0, u128::MAX)),
            Ok(Uint128::MAX)
        );
        assert_eq!(
            Uint128::try_from(U256::from_words(1, 0)),
            Err(Uint128Error::Overflow)
        );
        assert_eq!(Uint128::try_from(U256::MAX), Err(Uint128Error::Overflow));
    }

    #[test]
    fn test_wide_round_trip() {
        let v = Uint128::from_u128(0x0123456789ABCDEF_FEDCBA9876543210);
        assert_eq!(Uint128::try_from(I256::from(v)), Ok(v));
        assert_eq!(Uint128::try_from(U256::from(v)), Ok(v));
        assert_eq!(Uint128::try_from(Uint128::MAX.to_i256()), Ok(Uint128::MAX));
        assert!(!Uint128::MAX.to_i256().is_negative());
    }
}


#[cfg(test)]
mod comparison_tests {
    use core::cmp::Ordering;

    use super::*;

    #[test]
    fn test_cmp() {
        let five = Uint128::from_u64(5);

        assert_eq!(five.cmp(&Uint128::from_u64(5)), Ordering::Equal);
        assert_eq!(Uint128::from_u64(4).cmp(&five), Ordering::Less);
        assert_eq!(Uint128::from_u64(6).cmp(&five), Ordering::Greater);
    }

    #[test]
    fn test_ordering_matches_numeric_value() {
        let values = [0u128, 1, 255, 256, u64::MAX as u128, 1 << 64, u128::MAX - 1, u128::MAX];

        for &a in &values {
            for &b in &values {
                assert_eq!(
                    Uint128::from_u128(a).cmp(&Uint128::from_u128(b)),
                    a.cmp(&b)
                );
            }
        }
    }

    #[test]
    fn test_min_max() {
        let a = Uint128::from_u64(3);
        let b = Uint128::from_u64(9);

        assert_eq!(a.min(b), a);
        assert_eq!(a.max(b), b);
    }

    #[test]
    fn test_copy_is_independent() {
        let mut original = Uint128::from_u64(100);
        let copy = original;

        original = original.try_add(Uint128::ONE).unwrap();
        assert_eq!(copy, Uint128::from_u64(100));
        assert_eq!(original, Uint128::from_u64(101));

        original = Uint128::ZERO;
        assert_eq!(copy, Uint128::from_u64(100));
        assert!(original.is_zero());
    }
}

#[cfg(test)]
mod string_tests {
    use super::*;

    const MAX_STR: &str = "340282366920938463463374607431768211455";
    const MAX_PLUS_ONE_STR: &str = "340282366920938463463374607431768211456";

    #[test]
    fn test_parse_basic() {
        assert_eq!(Uint128::from_str("0"), Ok(Uint128::ZERO));
        assert_eq!(Uint128::from_str("42"), Ok(Uint128::from_u64(42)));
        assert_eq!(Uint128::from_str("+42"), Ok(Uint128::from_u64(42)));
        assert_eq!(Uint128::from_str("007"), Ok(Uint128::from_u64(7)));
        assert_eq!(Uint128::from_str(MAX_STR), Ok(Uint128::MAX));
    }

    #[test]
    fn test_parse_negative() {
        assert_eq!(Uint128::from_str("-1"), Err(Uint128Error::Underflow));
        assert_eq!(Uint128::from_str("-0"), Ok(Uint128::ZERO));
        assert_eq!(Uint128::from_str("-000"), Ok(Uint128::ZERO));
        // Sign is judged before magnitude.
        assert_eq!(
            Uint128::from_str("-999999999999999999999999999999999999999999"),
            Err(Uint128Error::Underflow)
        );
    }

    #[test]
    fn test_parse_overflow() {
        assert_eq!(
            Uint128::from_str(MAX_PLUS_ONE_STR),
            Err(Uint128Error::Overflow)
        );
        assert_eq!(
            Uint128::from_str("1000000000000000000000000000000000000000000000000"),
            Err(Uint128Error::Overflow)
        );
    }

    #[test]
    fn test_parse_invalid() {
        for s in ["", "-", "+", "--1", "+-1", "1.5", " 1", "1 ", "1_000", "0x10", "abc", "١٢"] {
            assert_eq!(
                Uint128::from_str(s),
                Err(Uint128Error::InvalidString),
                "input: {:?}",
                s
            );
        }
        // Syntax errors win over range errors.
        assert_eq!(
            Uint128::from_str("99999999999999999999999999999999999999999x"),
            Err(Uint128Error::InvalidString)
        );
    }

    #[test]
    fn test_from_utf8_bytes() {
        assert_eq!(
            Uint128::from_utf8_bytes(b"123456"),
            Ok(Uint128::from_u64(123_456))
        );
        assert_eq!(
            Uint128::from_utf8_bytes(&[0xff, 0xfe]),
            Err(Uint128Error::InvalidString)
        );
    }
}
