#![cfg(feature = "runtime-benchmarks")]

use super::*;
use frame::deps::frame_support::traits::fungibles::Inspect as AssetsInspect;
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_system::RawOrigin;
use sp_arithmetic::{FixedPointNumber, FixedU128};

fn minted_balance<T: Config>(denom: AssetKind) -> Balance {
  let account = Pallet::<T>::account_id();
  match denom {
    AssetKind::Native => T::Currency::balance(&account),
    AssetKind::Local(id) | AssetKind::Foreign(id) => T::Assets::balance(id, &account),
  }
}

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn force_set_last_block_info() {
    let params = Params::<T>::get();
    let info = LastBlockInfo::new(params.max_inflation, Pallet::<T>::now());

    #[extrinsic_call]
    force_set_last_block_info(RawOrigin::Root, info.clone());

    assert_eq!(LastBlock::<T>::get(), Some(info));
  }

  #[benchmark]
  fn mint_block_provisions() -> Result<(), BenchmarkError> {
    // Worst case: an under-bonded chain over a full-length block mints a
    // non-zero amount and moves the rate
    T::BenchmarkHelper::set_staking(FixedU128::zero(), 1_000_000_000_000_000_000);
    let params = Params::<T>::get();
    let info = LastBlockInfo::new(
      params.min_inflation,
      Pallet::<T>::now().saturating_sub(params.max_block_duration),
    );
    LastBlock::<T>::put(&info);

    let expected = Pallet::<T>::block_provisions()
      .map_err(|_| BenchmarkError::Stop("recorded inflation state is unusable"))?;
    if expected.coin.amount.is_zero() {
      return Err(BenchmarkError::Stop("staking figures yield nothing to mint"));
    }
    let before = minted_balance::<T>(expected.coin.denom);

    #[block]
    {
      Pallet::<T>::mint_block_provisions();
    }

    assert_eq!(
      minted_balance::<T>(expected.coin.denom) - before,
      expected.coin.amount
    );
    assert_eq!(LastBlock::<T>::get(), Some(expected.last_block_info()));
    Ok(())
  }

  impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
