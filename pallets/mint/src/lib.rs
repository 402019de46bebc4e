//! Mint Pallet
//!
//! Mints block provisions of the bond denomination once per block. The target
//! inflation rate follows the bonded ratio: it rises while too little of the
//! supply is staked, falls while too much is, and holds inside the target band.
//!
//! The computation itself lives in [`inflation`] and [`provisions`] as pure
//! functions over explicit inputs; this pallet wires them to storage, the
//! staking figures, the block timestamp and the token ledger.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod inflation;
pub mod provisions;
pub mod types;
pub use types::{
  BlockProvision, Coin, InflationBounds, LastBlockInfo, LastBlockInfoError, MintParams,
  ParamsError,
};

#[cfg(test)]
pub mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

use frame::prelude::*;

use frame::deps::{
  frame_support::{
    PalletId,
    traits::{
      UnixTime,
      fungible::{Inspect as NativeInspect, Mutate as NativeMutate},
      fungibles::Mutate,
    },
  },
  sp_runtime::traits::{AccountIdConversion, UniqueSaturatedInto, Zero},
};
use primitives::{AssetKind, Balance, Moment};
use sp_arithmetic::FixedU128;

pub(crate) const LOG_TARGET: &str = "runtime::mint";

/// Staking figures the mint reads every block
pub trait StakingInfo {
  /// Fraction of the total supply currently bonded, in `[0, 1]`
  fn bonded_ratio() -> FixedU128;

  /// Amount of the bond denomination currently bonded
  fn bonded_token_supply() -> Balance;
}

/// Benchmark setup for the staking figures read by the mint
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper {
  /// Make [`StakingInfo`] report the given figures
  fn set_staking(bonded_ratio: FixedU128, bonded_supply: Balance);
}

#[cfg(feature = "runtime-benchmarks")]
impl BenchmarkHelper for () {
  fn set_staking(_bonded_ratio: FixedU128, _bonded_supply: Balance) {}
}

impl StakingInfo for () {
  fn bonded_ratio() -> FixedU128 {
    FixedU128::zero()
  }

  fn bonded_token_supply() -> Balance {
    Zero::zero()
  }
}

#[frame::pallet]
pub mod pallet {
  use super::WeightInfo;
  use super::*;

  #[pallet::config]
  pub trait Config: frame_system::Config {
    /// Currency interface for native asset
    type Currency: NativeMutate<Self::AccountId, Balance = Balance>
      + NativeInspect<Self::AccountId, Balance = Balance>;

    /// Asset management interface for local and foreign assets
    type Assets: Mutate<Self::AccountId, AssetId = u32, Balance = Balance>;

    /// Bonded ratio and bonded supply
    type Staking: StakingInfo;

    /// Logical block time
    type UnixTime: UnixTime;

    /// Denomination minted as block provisions
    #[pallet::constant]
    type BondDenom: Get<AssetKind>;

    /// Pallet ID for the account receiving minted provisions
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    /// Origin allowed to overwrite the recorded inflation state
    type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;

    /// Weight information
    type WeightInfo: WeightInfo;

    /// Staking figures for benchmarks
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper: BenchmarkHelper;
  }

  #[pallet::pallet]
  #[pallet::storage_version(STORAGE_VERSION)]
  pub struct Pallet<T>(_);

  /// The current storage version.
  const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

  /// Monetary-policy parameters
  #[pallet::storage]
  #[pallet::getter(fn params)]
  pub type Params<T> = StorageValue<_, MintParams, ValueQuery>;

  /// Inflation and block time of the most recent mint
  #[pallet::storage]
  #[pallet::getter(fn last_block_info)]
  pub type LastBlock<T> = StorageValue<_, LastBlockInfo, OptionQuery>;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// Block provisions minted into the pallet account
    Minted {
      denom: AssetKind,
      amount: Balance,
      inflation: FixedU128,
      bonded_ratio: FixedU128,
    },
    /// Block provisions could not be minted; the inflation state still advanced
    MintFailed {
      denom: AssetKind,
      amount: Balance,
      error: DispatchError,
    },
    /// Recorded inflation state replaced by the admin origin
    LastBlockInfoSet { inflation: FixedU128, time: Moment },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// Inflation text is not a decimal number
    MalformedDecimal,
    /// Inflation rate is outside the accepted range
    InvalidInflation,
    /// Inflation rate is outside `[min_inflation, max_inflation]`
    InflationOutOfRange,
    /// Inflation state carries no timestamp
    MissingTimestamp,
    /// Policy parameters violate their invariants
    InvalidParams,
  }

  impl<T> From<LastBlockInfoError> for Error<T> {
    fn from(error: LastBlockInfoError) -> Self {
      match error {
        LastBlockInfoError::MalformedDecimal(_) => Error::<T>::MalformedDecimal,
        LastBlockInfoError::InvalidInflation => Error::<T>::InvalidInflation,
        LastBlockInfoError::MissingTimestamp => Error::<T>::MissingTimestamp,
        LastBlockInfoError::OutsidePolicyRange => Error::<T>::InflationOutOfRange,
      }
    }
  }

  impl<T> From<ParamsError> for Error<T> {
    fn from(_: ParamsError) -> Self {
      Error::<T>::InvalidParams
    }
  }

  #[pallet::hooks]
  impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
    fn on_initialize(_n: BlockNumberFor<T>) -> Weight {
      // Minting runs in `on_finalize`, after the timestamp inherent.
      T::WeightInfo::mint_block_provisions()
    }

    fn on_finalize(_n: BlockNumberFor<T>) {
      Self::mint_block_provisions();
    }

    #[cfg(feature = "try-runtime")]
    fn try_state(_n: BlockNumberFor<T>) -> Result<(), frame::deps::sp_runtime::TryRuntimeError> {
      Self::do_try_state()
    }
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Replace the recorded inflation state (admin only)
    ///
    /// The candidate must hold a timestamp and a decimal rate within
    /// `[min_inflation, max_inflation]`.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::force_set_last_block_info())]
    pub fn force_set_last_block_info(origin: OriginFor<T>, info: LastBlockInfo) -> DispatchResult {
      T::AdminOrigin::ensure_origin(origin)?;

      let inflation = info
        .validate_for(&Params::<T>::get())
        .map_err(Error::<T>::from)?;
      let time = info.time.ok_or(Error::<T>::MissingTimestamp)?;

      LastBlock::<T>::put(info);

      Self::deposit_event(Event::LastBlockInfoSet { inflation, time });

      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    /// Get the account ID holding minted provisions
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }

    /// Block time in nanoseconds since the Unix epoch
    pub fn now() -> Moment {
      T::UnixTime::now().as_nanos().unique_saturated_into()
    }

    /// Inflation rate recorded by the most recent mint
    pub fn current_inflation() -> Option<FixedU128> {
      LastBlock::<T>::get().and_then(|info| info.rate().ok())
    }

    /// Provisions the current block would mint, without side effects
    pub fn block_provisions() -> Result<BlockProvision<AssetKind>, Error<T>> {
      Self::block_provisions_at(T::Staking::bonded_ratio())
    }

    fn block_provisions_at(bonded_ratio: FixedU128) -> Result<BlockProvision<AssetKind>, Error<T>> {
      let last = LastBlock::<T>::get();
      provisions::compute_block_provisions(
        Self::now(),
        &Params::<T>::get(),
        last.as_ref(),
        bonded_ratio,
        T::Staking::bonded_token_supply(),
        T::BondDenom::get(),
      )
      .map_err(Into::into)
    }

    /// Compute, mint and record this block's provisions
    pub(crate) fn mint_block_provisions() {
      let bonded_ratio = T::Staking::bonded_ratio();
      let provision = match Self::block_provisions_at(bonded_ratio) {
        Ok(provision) => provision,
        Err(error) => {
          log::error!(
            target: LOG_TARGET,
            "recorded inflation state is unusable: {:?}",
            error,
          );
          // Corrupt consensus state halts block production.
          panic!("mint: corrupt last block info: {:?}", error);
        }
      };

      if provision.clock_regressed() {
        log::warn!(
          target: LOG_TARGET,
          "block time {} precedes last mint at {}, treating as zero elapsed",
          provision.time,
          provision.previous_time,
        );
      }

      let Coin { denom, amount } = provision.coin;
      if !amount.is_zero() {
        match Self::mint_into_account(denom, amount) {
          Ok(()) => Self::deposit_event(Event::Minted {
            denom,
            amount,
            inflation: provision.inflation,
            bonded_ratio,
          }),
          Err(error) => {
            log::error!(
              target: LOG_TARGET,
              "failed to mint {} of {:?}: {:?}",
              amount,
              denom,
              error,
            );
            Self::deposit_event(Event::MintFailed {
              denom,
              amount,
              error,
            });
          }
        }
      }

      LastBlock::<T>::put(provision.last_block_info());

      log::debug!(
        target: LOG_TARGET,
        "provisioned {} of {:?} over {:?} at inflation {:?}",
        amount,
        denom,
        provision.elapsed,
        provision.inflation,
      );
    }

    fn mint_into_account(denom: AssetKind, amount: Balance) -> DispatchResult {
      let account = Self::account_id();
      match denom {
        AssetKind::Native => T::Currency::mint_into(&account, amount).map(|_| ()),
        AssetKind::Local(id) | AssetKind::Foreign(id) => {
          T::Assets::mint_into(id, &account, amount).map(|_| ())
        }
      }
    }

    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), frame::deps::sp_runtime::TryRuntimeError> {
      let params = Params::<T>::get();
      ensure!(
        params.validate().is_ok(),
        "mint params violate their invariants"
      );
      if let Some(info) = LastBlock::<T>::get() {
        info.validate_for(&params).map_err(|error| match error {
          LastBlockInfoError::MissingTimestamp => "recorded inflation has no timestamp",
          LastBlockInfoError::OutsidePolicyRange => "recorded inflation outside policy bounds",
          _ => "recorded inflation is not a rate in (0, 1]",
        })?;
      }
      Ok(())
    }
  }

  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    /// Initial monetary-policy parameters
    pub params: MintParams,
    /// Imported inflation state, if the chain does not start fresh
    pub last_block_info: Option<LastBlockInfo>,
    #[serde(skip)]
    pub _marker: core::marker::PhantomData<T>,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      if let Err(error) = self.params.validate() {
        panic!("invalid mint params in genesis: {:?}", error);
      }
      Params::<T>::put(self.params);

      if let Some(info) = &self.last_block_info {
        if let Err(error) = info.validate_for(&self.params) {
          panic!("invalid last block info in genesis: {:?}", error);
        }
        LastBlock::<T>::put(info);
      }

      frame_system::Pallet::<T>::inc_providers(&Pallet::<T>::account_id());
    }
  }
}
