//! Inflation controller.
//!
//! Nudges the inflation rate toward the target bonded-ratio band: below the
//! band inflation rises to reward staking, above it inflation falls, inside it
//! the rate is left untouched. The result is always clamped to
//! `[min_inflation, max_inflation]`.

use crate::types::MintParams;
use core::time::Duration;
use sp_arithmetic::{FixedPointNumber, FixedU128, traits::Saturating};

/// Rate movement for `elapsed` time: `inflation_change * elapsed_nanos`.
///
/// Multiplies the fixed-point inner value by an integer, so the product is
/// exact up to saturation.
pub fn inflation_delta(params: &MintParams, elapsed: Duration) -> FixedU128 {
  FixedU128::from_inner(
    params
      .inflation_change
      .into_inner()
      .saturating_mul(elapsed.as_nanos()),
  )
}

/// Next inflation rate given the previous one and the current bonded ratio.
pub fn next_inflation(
  previous: FixedU128,
  bonded_ratio: FixedU128,
  params: &MintParams,
  elapsed: Duration,
) -> FixedU128 {
  let next = if bonded_ratio < params.min_bonded {
    previous.saturating_add(inflation_delta(params, elapsed))
  } else if bonded_ratio > params.max_bonded {
    previous.saturating_sub(inflation_delta(params, elapsed))
  } else {
    previous
  };

  if next > params.max_inflation {
    params.max_inflation
  } else if next < params.min_inflation {
    params.min_inflation
  } else {
    next
  }
}
