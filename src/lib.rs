//! Bounded 128-bit unsigned integer for protocol and ledger values
//!
//! This library provides one value type, [`Uint128`], for quantities that need
//! exact precision wider than a machine word but must round-trip through a
//! fixed-size wire format:
//!
//! - **Range**: 0 to 340,282,366,920,938,463,463,374,607,431,768,211,455 (2^128 − 1)
//! - **Wire format**: exactly 16 bytes, big-endian, zero-padded on the left
//! - **Text format**: base-10 digits, no sign, no leading zeros
//!
//! ## Features
//!
//! - **Checked arithmetic**: every operation reports `Overflow`, `Underflow` or
//!   `DivisionByZero` instead of clamping or wrapping
//! - **Validated construction**: decimal strings, signed integers, 256-bit and
//!   arbitrary-precision integers all pass through the same range check
//! - **Canonical codec**: one 16-byte representation per value
//! - **no_std compatible**: `alloc` only for the `Vec` helpers and serde
//! - **Serde support**: decimal strings for JSON, 16 raw bytes for binary formats
//!
//! ## Example
//!
//! ```rust
//! use core::str::FromStr;
//! use fixuint::{Uint128, Uint128Error};
//!
//! let balance = Uint128::from_str("1000000000000000000000").unwrap();
//! let fee = Uint128::from_u64(2_500);
//! let remaining = balance.try_sub(fee).unwrap();
//!
//! let wire = remaining.to_fixed_size_bytes();
//! assert_eq!(wire.len(), 16);
//! assert_eq!(Uint128::from_fixed_size_bytes(wire), remaining);
//!
//! assert_eq!(Uint128::MAX.try_add(Uint128::ONE), Err(Uint128Error::Overflow));
//! assert_eq!(Uint128::ZERO.try_sub(Uint128::ONE), Err(Uint128Error::Underflow));
//! ```

#![no_std]
#![cfg_attr(test, allow(unused_imports))]

#[cfg(test)]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

mod uint128;

pub use uint128::Uint128;

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Uint128Error {
    #[error("uint128: overflow")]
    Overflow,

    #[error("uint128: underflow")]
    Underflow,

    #[error("uint128: invalid bytes")]
    InvalidBytesSize,

    #[error("uint128: invalid string to uint128")]
    InvalidString,

    #[error("uint128: division by zero")]
    DivisionByZero,
}

pub type Result<T> = core::result::Result<T, Uint128Error>;
