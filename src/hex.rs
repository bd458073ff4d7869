//! Zero-padded hexadecimal formatting of integers
//!
//! Only primitive integers are accepted:
//!
//! ```compile_fail
//! dyreco::hex::int_to_hex(1.5f64);
//! ```
use std::fmt::LowerHex;

use crate::error::{Error, Result};

mod sealed {
    pub trait Sealed {}
}

/// Primitive integer types that can be written as hexadecimal
pub trait HexInt: sealed::Sealed + Copy + LowerHex {
    /// Default number of digits, two per byte
    const HEX_WIDTH: usize;

    #[doc(hidden)]
    fn from_hex_digits(digits: &str) -> std::result::Result<Self, std::num::ParseIntError>;
}

macro_rules! impl_hex_int {
    ($($t:ty => $bits:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl HexInt for $t {
                const HEX_WIDTH: usize = 2 * std::mem::size_of::<$t>();

                fn from_hex_digits(digits: &str) -> std::result::Result<Self, std::num::ParseIntError> {
                    // signed types are read as their two's complement bit pattern
                    <$bits>::from_str_radix(digits, 16).map(|bits| bits as $t)
                }
            }
        )*
    };
}

impl_hex_int!(
    i8 => u8,
    u8 => u8,
    i16 => u16,
    u16 => u16,
    i32 => u32,
    u32 => u32,
    i64 => u64,
    u64 => u64,
    i128 => u128,
    u128 => u128,
    isize => usize,
    usize => usize,
);

/// Lowercase hexadecimal with two digits per byte of `T`
///
/// Negative numbers are written as their two's complement.
pub fn int_to_hex<T: HexInt>(val: T) -> String {
    format!("{val:0width$x}", width = T::HEX_WIDTH)
}

/// Largest padding width accepted by [int_to_hex_width]
pub const MAX_HEX_WIDTH: usize = u16::MAX as usize;

/// Lowercase hexadecimal, padded with zeros to at least `width` digits
///
/// Fails for `width > MAX_HEX_WIDTH`.
pub fn int_to_hex_width<T: HexInt>(val: T, width: usize) -> Result<String> {
    if width > MAX_HEX_WIDTH {
        return Err(Error::InvalidArgument(format!(
            "hexadecimal width {width} exceeds the maximum of {MAX_HEX_WIDTH}"
        )));
    }
    Ok(format!("{val:0width$x}"))
}

/// Inverse of [int_to_hex]
///
/// Accepts an optional `0x` prefix. Fails if the digits do not fit into
/// `T`.
pub fn parse_hex<T: HexInt>(s: &str) -> Result<T> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    T::from_hex_digits(digits)
        .map_err(|err| Error::InvalidArgument(format!("invalid hexadecimal number {s:?}: {err}")))
}
