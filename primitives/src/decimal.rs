//! Decimal text codec for 18-place fixed-point rates.
//!
//! Persisted rates are stored as decimal text and read back as
//! `FixedI128`/`FixedU128`, both of which carry exactly [`DECIMAL_PLACES`]
//! fractional digits. Parsing is strict so that every node accepts and rejects
//! the same strings:
//!
//! - an optional leading `-` or `+`;
//! - at least one integer digit;
//! - optionally a `.` followed by one to [`DECIMAL_PLACES`] digits.
//!
//! [`format_decimal`] always emits the canonical form (`0.100000000000000000`)
//! which parses back to the identical value.

use alloc::{format, vec::Vec};
use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_arithmetic::{FixedI128, FixedPointNumber, FixedU128};

/// Number of fractional digits carried by the fixed-point rate types.
pub const DECIMAL_PLACES: usize = 18;

/// Reasons a decimal string can be rejected.
#[derive(
  Clone, Copy, Debug, Decode, DecodeWithMemTracking, Encode, Eq, MaxEncodedLen, PartialEq, TypeInfo,
)]
pub enum DecimalError {
  /// The input is empty.
  Empty,
  /// The integer or fractional part has no digits (`".5"`, `"5."`, `"-"`, `"+"`).
  MissingDigits,
  /// A byte other than an ASCII digit, a single `.` or a leading sign.
  InvalidCharacter,
  /// More than [`DECIMAL_PLACES`] fractional digits.
  TooManyDecimalPlaces,
  /// The value does not fit into the fixed-point range.
  Overflow,
}

/// Parse decimal text into a signed fixed-point value.
pub fn parse_decimal(text: &[u8]) -> Result<FixedI128, DecimalError> {
  let (negative, body) = match text.split_first() {
    None => return Err(DecimalError::Empty),
    Some((b'-', rest)) => (true, rest),
    Some((b'+', rest)) => (false, rest),
    Some(_) => (false, text),
  };

  let (integer, fraction) = match body.iter().position(|byte| *byte == b'.') {
    Some(dot) => (&body[..dot], Some(&body[dot + 1..])),
    None => (body, None),
  };
  if integer.is_empty() || fraction.is_some_and(|digits| digits.is_empty()) {
    return Err(DecimalError::MissingDigits);
  }
  let fraction = fraction.unwrap_or_default();
  if fraction.len() > DECIMAL_PLACES {
    return Err(DecimalError::TooManyDecimalPlaces);
  }

  let mut magnitude: u128 = 0;
  for byte in integer.iter().chain(fraction.iter()) {
    if !byte.is_ascii_digit() {
      return Err(DecimalError::InvalidCharacter);
    }
    magnitude = magnitude
      .checked_mul(10)
      .and_then(|value| value.checked_add(u128::from(byte - b'0')))
      .ok_or(DecimalError::Overflow)?;
  }

  // Shift the digits so exactly DECIMAL_PLACES of them sit after the point.
  let scale = 10u128.pow((DECIMAL_PLACES - fraction.len()) as u32);
  let magnitude = magnitude
    .checked_mul(scale)
    .ok_or(DecimalError::Overflow)?;
  let inner = i128::try_from(magnitude).map_err(|_| DecimalError::Overflow)?;

  Ok(FixedI128::from_inner(if negative { -inner } else { inner }))
}

/// Render an unsigned rate in canonical 18-place form.
pub fn format_decimal(value: FixedU128) -> Vec<u8> {
  let inner = value.into_inner();
  let integer = inner / FixedU128::DIV;
  let fraction = inner % FixedU128::DIV;
  format!("{integer}.{fraction:0width$}", width = DECIMAL_PLACES).into_bytes()
}
