//! Ecosystem Constants for the staking mint
//!
//! Centralizes the account identifiers, time units and default monetary-policy
//! parameters shared by the mint pallet and its runtime configuration.

/// Balance type alias for consistency across ecosystem
pub type Balance = u128;

/// Logical block timestamp in nanoseconds since the Unix epoch.
pub type Moment = u64;

/// Pallet identifiers for deriving pallet-owned accounts.
pub mod pallet_ids {
  /// Mint pallet ID (holding account for freshly minted block provisions)
  pub const MINT_PALLET_ID: &[u8; 8] = b"py/mint0";
}

/// Time units, all in nanoseconds.
pub mod time {
  pub const NANOS_PER_SECOND: u64 = 1_000_000_000;
  pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

  /// A year for provisioning purposes is fixed at 365 days.
  pub const NANOS_PER_YEAR: u64 = 365 * SECONDS_PER_DAY * NANOS_PER_SECOND;
}

/// Default monetary-policy parameters.
///
/// Rates are 18-place fixed-point values; the raw constants below are their
/// inner representation (`1.0 == 10^18`).
pub mod params {
  use super::time::{NANOS_PER_SECOND, NANOS_PER_YEAR};
  use sp_arithmetic::FixedU128;

  const ONE: u128 = 1_000_000_000_000_000_000;

  /// Lower bound of the inflation rate (7%).
  pub const MIN_INFLATION: FixedU128 = FixedU128::from_inner(ONE / 100 * 7);

  /// Upper bound of the inflation rate (20%).
  pub const MAX_INFLATION: FixedU128 = FixedU128::from_inner(ONE / 100 * 20);

  /// Lower edge of the target bonded-ratio band (66%).
  pub const MIN_BONDED: FixedU128 = FixedU128::from_inner(ONE / 100 * 66);

  /// Upper edge of the target bonded-ratio band (70%).
  pub const MAX_BONDED: FixedU128 = FixedU128::from_inner(ONE / 100 * 70);

  /// Maximum yearly movement of the inflation rate (13%).
  pub const ANNUAL_INFLATION_CHANGE: FixedU128 = FixedU128::from_inner(ONE / 100 * 13);

  /// Per-nanosecond inflation change derived from [`ANNUAL_INFLATION_CHANGE`].
  ///
  /// Truncated to the 18-place grid, which makes it ~12.6% per year.
  pub const INFLATION_CHANGE: FixedU128 =
    FixedU128::from_inner(ONE / 100 * 13 / NANOS_PER_YEAR as u128);

  /// Longest time span a single block may account for (60 seconds).
  pub const MAX_BLOCK_DURATION: u64 = 60 * NANOS_PER_SECOND;
}
