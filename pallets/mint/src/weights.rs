#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use core::marker::PhantomData;
use polkadot_sdk::frame_support::{
  traits::Get,
  weights::{constants::RocksDbWeight, Weight},
};

pub trait WeightInfo {
  fn force_set_last_block_info() -> Weight;
  fn mint_block_provisions() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config + crate::Config> WeightInfo for SubstrateWeight<T> {
  /// Storage: `Mint::LastBlock` (w:1)
  fn force_set_last_block_info() -> Weight {
    Weight::from_parts(9_000_000, 600)
      .saturating_add(T::DbWeight::get().writes(1))
  }

  /// Storage: `Mint::Params` (r:1), `Mint::LastBlock` (r:1 w:1),
  /// `System::Account` (r:1 w:1), `Balances::TotalIssuance` (r:1 w:1)
  fn mint_block_provisions() -> Weight {
    Weight::from_parts(30_000_000, 3600)
      .saturating_add(T::DbWeight::get().reads(4))
      .saturating_add(T::DbWeight::get().writes(3))
  }
}

impl WeightInfo for () {
  fn force_set_last_block_info() -> Weight {
    Weight::from_parts(9_000_000, 600)
      .saturating_add(RocksDbWeight::get().writes(1))
  }
  fn mint_block_provisions() -> Weight {
    Weight::from_parts(30_000_000, 3600)
      .saturating_add(RocksDbWeight::get().reads(4))
      .saturating_add(RocksDbWeight::get().writes(3))
  }
}
