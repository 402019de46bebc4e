//! Persisted monetary-policy state, policy parameters and per-block output.

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use core::time::Duration;
use frame::deps::frame_support::{BoundedVec, traits::ConstU32};
use primitives::{Balance, DecimalError, Moment, ecosystem::params, format_decimal, parse_decimal};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};
use sp_arithmetic::{
  FixedI128, FixedPointNumber, FixedU128,
  traits::{One, Zero},
};

/// Longest decimal text accepted for a stored inflation rate.
pub const MAX_DECIMAL_LEN: u32 = 64;

/// Decimal text of a rate as it is kept in storage.
pub type DecimalText = BoundedVec<u8, ConstU32<MAX_DECIMAL_LEN>>;

/// Genesis/JSON form of [`DecimalText`]: a plain string such as `"0.5"`.
mod decimal_text {
  use super::DecimalText;
  use alloc::string::String;
  use serde::{Deserialize, Deserializer, Serializer, de::Error as _, ser::Error as _};

  pub fn serialize<S: Serializer>(text: &DecimalText, serializer: S) -> Result<S::Ok, S::Error> {
    let text = core::str::from_utf8(text.as_slice()).map_err(S::Error::custom)?;
    serializer.serialize_str(text)
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DecimalText, D::Error> {
    let text = String::deserialize(deserializer)?;
    DecimalText::try_from(text.into_bytes())
      .map_err(|_| D::Error::custom("decimal text is too long"))
  }
}

/// Monetary-policy parameters.
///
/// Rates and ratios are 18-place fixed-point values. `inflation_change` is
/// applied per nanosecond of elapsed block time.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Encode,
  Eq,
  MaxEncodedLen,
  PartialEq,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub struct MintParams {
  /// Lowest inflation rate the controller may settle on
  pub min_inflation: FixedU128,
  /// Highest inflation rate the controller may settle on
  pub max_inflation: FixedU128,
  /// Bonded ratio below which inflation rises
  pub min_bonded: FixedU128,
  /// Bonded ratio above which inflation falls
  pub max_bonded: FixedU128,
  /// Inflation movement per nanosecond of elapsed time
  pub inflation_change: FixedU128,
  /// Upper bound, in nanoseconds, on the time a single block accounts for
  pub max_block_duration: u64,
}

impl Default for MintParams {
  fn default() -> Self {
    Self {
      min_inflation: params::MIN_INFLATION,
      max_inflation: params::MAX_INFLATION,
      min_bonded: params::MIN_BONDED,
      max_bonded: params::MAX_BONDED,
      inflation_change: params::INFLATION_CHANGE,
      max_block_duration: params::MAX_BLOCK_DURATION,
    }
  }
}

/// Reasons a parameter set is refused.
#[derive(Clone, Copy, Debug, Decode, Encode, Eq, PartialEq, TypeInfo)]
pub enum ParamsError {
  /// `min_inflation` is zero, which no stored rate may take
  ZeroMinInflation,
  /// `min_inflation` is greater than `max_inflation`
  InflationBoundsInverted,
  /// `max_inflation` is greater than one
  InflationAboveOne,
  /// `min_bonded` is greater than `max_bonded`
  BondedBandInverted,
  /// `max_bonded` is greater than one
  BondedAboveOne,
  /// `max_block_duration` is zero
  ZeroBlockDuration,
}

impl MintParams {
  /// Check the ordering and range invariants the controller relies on.
  pub fn validate(&self) -> Result<(), ParamsError> {
    let one = FixedU128::one();
    if self.min_inflation.is_zero() {
      return Err(ParamsError::ZeroMinInflation);
    }
    if self.min_inflation > self.max_inflation {
      return Err(ParamsError::InflationBoundsInverted);
    }
    if self.max_inflation > one {
      return Err(ParamsError::InflationAboveOne);
    }
    if self.min_bonded > self.max_bonded {
      return Err(ParamsError::BondedBandInverted);
    }
    if self.max_bonded > one {
      return Err(ParamsError::BondedAboveOne);
    }
    if self.max_block_duration == 0 {
      return Err(ParamsError::ZeroBlockDuration);
    }
    Ok(())
  }

  pub fn max_block_duration(&self) -> Duration {
    Duration::from_nanos(self.max_block_duration)
  }
}

/// Reasons a stored or candidate [`LastBlockInfo`] is refused.
#[derive(Clone, Copy, Debug, Decode, Encode, Eq, PartialEq, TypeInfo)]
pub enum LastBlockInfoError {
  /// The inflation text is not a decimal number
  MalformedDecimal(DecimalError),
  /// The inflation rate is unparsable or outside the accepted range
  InvalidInflation,
  /// No timestamp has been recorded
  MissingTimestamp,
  /// The rate lies outside `[min_inflation, max_inflation]`
  OutsidePolicyRange,
}

/// Which end points of the `[0, 1]` interval a stored rate may take.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InflationBounds {
  pub zero_allowed: bool,
  pub one_allowed: bool,
}

impl Default for InflationBounds {
  /// `0 < inflation <= 1`
  fn default() -> Self {
    Self {
      zero_allowed: false,
      one_allowed: true,
    }
  }
}

impl InflationBounds {
  pub fn contains(&self, rate: FixedI128) -> bool {
    let one = FixedI128::one();
    let above_floor = rate > FixedI128::zero() || (self.zero_allowed && rate.is_zero());
    let below_ceiling = rate < one || (self.one_allowed && rate == one);
    above_floor && below_ceiling
  }
}

/// Inflation rate and block time recorded by the most recent mint.
#[derive(
  Clone,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Encode,
  Eq,
  MaxEncodedLen,
  PartialEq,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub struct LastBlockInfo {
  /// Inflation rate as decimal text
  #[serde(with = "decimal_text")]
  pub inflation: DecimalText,
  /// Block time of the mint, in nanoseconds since the Unix epoch
  pub time: Option<Moment>,
}

impl LastBlockInfo {
  pub fn new(inflation: FixedU128, time: Moment) -> Self {
    Self {
      inflation: DecimalText::truncate_from(format_decimal(inflation)),
      time: Some(time),
    }
  }

  /// Parse the stored text into a signed rate.
  pub fn parse_inflation(&self) -> Result<FixedI128, LastBlockInfoError> {
    parse_decimal(&self.inflation).map_err(LastBlockInfoError::MalformedDecimal)
  }

  /// Parse the stored text into a non-negative rate.
  pub fn rate(&self) -> Result<FixedU128, LastBlockInfoError> {
    let signed = self.parse_inflation()?;
    let inner =
      u128::try_from(signed.into_inner()).map_err(|_| LastBlockInfoError::InvalidInflation)?;
    Ok(FixedU128::from_inner(inner))
  }

  /// Accept only `0 < inflation <= 1` with a recorded timestamp.
  pub fn validate(&self) -> Result<(), LastBlockInfoError> {
    self.validate_with(InflationBounds::default())
  }

  pub fn validate_with(&self, bounds: InflationBounds) -> Result<(), LastBlockInfoError> {
    let rate = self
      .parse_inflation()
      .map_err(|_| LastBlockInfoError::InvalidInflation)?;
    if !bounds.contains(rate) {
      return Err(LastBlockInfoError::InvalidInflation);
    }
    if self.time.is_none() {
      return Err(LastBlockInfoError::MissingTimestamp);
    }
    Ok(())
  }

  /// [`Self::validate`], then require the rate to lie within the inflation
  /// bounds of `params`.
  pub fn validate_for(&self, params: &MintParams) -> Result<FixedU128, LastBlockInfoError> {
    self.validate()?;
    let rate = self.rate()?;
    if rate < params.min_inflation || rate > params.max_inflation {
      return Err(LastBlockInfoError::OutsidePolicyRange);
    }
    Ok(rate)
  }
}

/// An amount of a single denomination.
#[derive(Clone, Copy, Debug, Decode, Encode, Eq, PartialEq, TypeInfo)]
pub struct Coin<Denom> {
  pub denom: Denom,
  pub amount: Balance,
}

/// Outcome of one provisioning step.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BlockProvision<Denom> {
  /// Tokens to mint for this block
  pub coin: Coin<Denom>,
  /// Inflation rate after this block
  pub inflation: FixedU128,
  /// Block time the provision was computed for
  pub time: Moment,
  /// Block time of the previous mint (equal to `time` on bootstrap)
  pub previous_time: Moment,
  /// Time span accounted for, after capping
  pub elapsed: Duration,
}

impl<Denom> BlockProvision<Denom> {
  /// State to persist once the provision has been applied.
  pub fn last_block_info(&self) -> LastBlockInfo {
    LastBlockInfo::new(self.inflation, self.time)
  }

  /// The block time went backwards since the previous mint.
  pub fn clock_regressed(&self) -> bool {
    self.time < self.previous_time
  }
}
