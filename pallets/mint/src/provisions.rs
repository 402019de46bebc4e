//! Provisioning calculator.
//!
//! Resolves the previous inflation state (bootstrapping it on the first call),
//! runs the inflation controller over the capped elapsed time and converts the
//! resulting rate into an integral amount of the bond denomination:
//!
//! `amount = floor(inflation * bonded_supply * elapsed / YEAR)`

use crate::{
  inflation::next_inflation,
  types::{BlockProvision, Coin, LastBlockInfo, LastBlockInfoError, MintParams},
};
use core::time::Duration;
use frame::deps::sp_core::U256;
use primitives::{Balance, Moment, ecosystem::time::NANOS_PER_YEAR};
use sp_arithmetic::{FixedPointNumber, FixedU128};

/// Inflation and time of the previous mint, or the bootstrap defaults.
fn previous_state(
  now: Moment,
  params: &MintParams,
  last: Option<&LastBlockInfo>,
) -> Result<(FixedU128, Moment), LastBlockInfoError> {
  match last {
    // First mint: a zero-length, non-minting step at the lowest rate.
    None => Ok((params.min_inflation, now)),
    Some(info) => {
      let rate = info.rate()?;
      let time = info.time.ok_or(LastBlockInfoError::MissingTimestamp)?;
      Ok((rate, time))
    }
  }
}

/// Time since the previous mint, capped at `max_block_duration`.
///
/// A block time earlier than the recorded one counts as zero elapsed time.
pub fn elapsed_since(previous: Moment, now: Moment, params: &MintParams) -> Duration {
  let elapsed = Duration::from_nanos(now.saturating_sub(previous));
  elapsed.min(params.max_block_duration())
}

/// `floor(inflation * bonded_supply * elapsed / YEAR)` with one truncation.
pub fn provision_amount(inflation: FixedU128, bonded_supply: Balance, elapsed: Duration) -> Balance {
  let numerator = U256::from(bonded_supply)
    .saturating_mul(U256::from(inflation.into_inner()))
    .saturating_mul(U256::from(elapsed.as_nanos()));
  let denominator = U256::from(FixedU128::DIV).saturating_mul(U256::from(NANOS_PER_YEAR));
  let amount = numerator / denominator;

  if amount > U256::from(Balance::MAX) {
    Balance::MAX
  } else {
    amount.as_u128()
  }
}

/// Compute the tokens to mint for the block at `now` and the new inflation.
///
/// Never fails on a missing previous state. A stored record that cannot be
/// read is reported as an error and must not be replaced by defaults.
pub fn compute_block_provisions<Denom>(
  now: Moment,
  params: &MintParams,
  last: Option<&LastBlockInfo>,
  bonded_ratio: FixedU128,
  bonded_supply: Balance,
  bond_denom: Denom,
) -> Result<BlockProvision<Denom>, LastBlockInfoError> {
  let (previous_inflation, previous_time) = previous_state(now, params, last)?;
  let elapsed = elapsed_since(previous_time, now, params);

  let inflation = next_inflation(previous_inflation, bonded_ratio, params, elapsed);
  let amount = provision_amount(inflation, bonded_supply, elapsed);

  Ok(BlockProvision {
    coin: Coin {
      denom: bond_denom,
      amount,
    },
    inflation,
    time: now,
    previous_time,
    elapsed,
  })
}
