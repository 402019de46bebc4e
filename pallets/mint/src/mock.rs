extern crate alloc;

use crate as pallet_mint;
use core::{cell::Cell, time::Duration};
use polkadot_sdk::frame_support::{
  PalletId, construct_runtime, derive_impl, parameter_types,
  traits::{ConstU32, ConstU128, Hooks, UnixTime},
};
use polkadot_sdk::frame_system::{self, EnsureRoot};
use polkadot_sdk::sp_runtime::{
  BuildStorage,
  testing::H256,
  traits::{BlakeTwo256, IdentityLookup},
};
use primitives::{
  AssetKind, Balance, Moment,
  ecosystem::{pallet_ids::MINT_PALLET_ID, time::NANOS_PER_SECOND},
};
use sp_arithmetic::{FixedPointNumber, FixedU128};

use crate::types::{LastBlockInfo, MintParams};

type Block = frame_system::mocking::MockBlock<Test>;

construct_runtime!(
  pub struct Test {
    System: frame_system,
    Balances: polkadot_sdk::pallet_balances,
    Assets: polkadot_sdk::pallet_assets,
    Mint: pallet_mint,
  }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
  type Block = Block;
  type AccountId = u64;
  type Lookup = IdentityLookup<Self::AccountId>;
  type Hash = H256;
  type Hashing = BlakeTwo256;
  type AccountData = polkadot_sdk::pallet_balances::AccountData<u128>;
}

impl polkadot_sdk::pallet_balances::Config for Test {
  type MaxLocks = ();
  type MaxReserves = ();
  type ReserveIdentifier = [u8; 8];
  type Balance = u128;
  type DustRemoval = ();
  type RuntimeEvent = RuntimeEvent;
  type ExistentialDeposit = ConstU128<1>;
  type AccountStore = System;
  type WeightInfo = ();
  type FreezeIdentifier = ();
  type MaxFreezes = ();
  type RuntimeHoldReason = ();
  type RuntimeFreezeReason = ();
  type DoneSlashHandler = ();
}

impl polkadot_sdk::pallet_assets::Config for Test {
  type RuntimeEvent = RuntimeEvent;
  type Balance = u128;
  type AssetId = u32;
  type AssetIdParameter = u32;
  type Currency = Balances;
  type CreateOrigin = polkadot_sdk::frame_support::traits::AsEnsureOriginWithArg<
    frame_system::EnsureSigned<Self::AccountId>,
  >;
  type ForceOrigin = frame_system::EnsureRoot<Self::AccountId>;
  type AssetDeposit = ConstU128<1>;
  type AssetAccountDeposit = ConstU128<1>;
  type MetadataDepositBase = ConstU128<1>;
  type MetadataDepositPerByte = ConstU128<1>;
  type ApprovalDeposit = ConstU128<1>;
  type StringLimit = ConstU32<50>;
  type Freezer = ();
  type Extra = ();
  type ReserveData = ();
  type CallbackHandle = ();
  type WeightInfo = ();
  type RemoveItemsLimit = ConstU32<5>;
  type Holder = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = AssetBenchmarkHelper;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct AssetBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl polkadot_sdk::pallet_assets::BenchmarkHelper<u32, ()> for AssetBenchmarkHelper {
  fn create_asset_id_parameter(id: u32) -> u32 {
    id
  }
  fn create_reserve_id_parameter(_id: u32) -> () {
    ()
  }
}

/// Block time of the genesis block
pub const GENESIS_TIME: Moment = 1_700_000_000 * NANOS_PER_SECOND;

/// Time between two consecutive mock blocks
pub const BLOCK_TIME: Moment = 6 * NANOS_PER_SECOND;

/// Local asset created at genesis, usable as an alternative bond denom
pub const STAKE_ASSET: u32 = 1;

// Stateful mocks for the block clock and the staking figures
thread_local! {
  static NOW: Cell<Moment> = const { Cell::new(GENESIS_TIME) };
  static BONDED_RATIO: Cell<FixedU128> = Cell::new(FixedU128::from_inner(0));
  static BONDED_SUPPLY: Cell<Balance> = const { Cell::new(0) };
}

pub struct MockTime;
impl UnixTime for MockTime {
  fn now() -> Duration {
    Duration::from_nanos(NOW.with(|now| now.get()))
  }
}

pub struct MockStaking;
impl pallet_mint::StakingInfo for MockStaking {
  fn bonded_ratio() -> FixedU128 {
    BONDED_RATIO.with(|ratio| ratio.get())
  }

  fn bonded_token_supply() -> Balance {
    BONDED_SUPPLY.with(|supply| supply.get())
  }
}

pub fn set_time(now: Moment) {
  NOW.with(|cell| cell.set(now));
}

pub fn now() -> Moment {
  NOW.with(|cell| cell.get())
}

pub fn set_staking(bonded_ratio: FixedU128, bonded_supply: Balance) {
  BONDED_RATIO.with(|cell| cell.set(bonded_ratio));
  BONDED_SUPPLY.with(|cell| cell.set(bonded_supply));
}

parameter_types! {
  pub const MintPalletId: PalletId = PalletId(*MINT_PALLET_ID);
  pub static BondDenom: AssetKind = AssetKind::Native;
}

impl pallet_mint::Config for Test {
  type Currency = Balances;
  type Assets = Assets;
  type Staking = MockStaking;
  type UnixTime = MockTime;
  type BondDenom = BondDenom;
  type PalletId = MintPalletId;
  type AdminOrigin = EnsureRoot<u64>;
  type WeightInfo = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = MintBenchmarkHelper;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct MintBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl pallet_mint::BenchmarkHelper for MintBenchmarkHelper {
  fn set_staking(bonded_ratio: FixedU128, bonded_supply: Balance) {
    set_staking(bonded_ratio, bonded_supply);
  }
}

pub fn percent(n: u128) -> FixedU128 {
  FixedU128::saturating_from_rational(n, 100)
}

/// Policy used by the pallet tests: inflation in [7%, 20%], bonded band
/// [60%, 70%], 0.001 inflation change per second, 60s block cap.
pub fn test_params() -> MintParams {
  MintParams {
    min_inflation: percent(7),
    max_inflation: percent(20),
    min_bonded: percent(60),
    max_bonded: percent(70),
    inflation_change: FixedU128::from_inner(1_000_000),
    max_block_duration: 60 * NANOS_PER_SECOND,
  }
}

pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  new_test_ext_with(test_params(), None)
}

pub fn new_test_ext_with(
  params: MintParams,
  last_block_info: Option<LastBlockInfo>,
) -> polkadot_sdk::sp_io::TestExternalities {
  let mut t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();

  polkadot_sdk::pallet_assets::GenesisConfig::<Test> {
    assets: alloc::vec![(STAKE_ASSET, 1, true, 1)],
    metadata: alloc::vec![],
    accounts: alloc::vec![],
    reserves: alloc::vec![],
    next_asset_id: None,
  }
  .assimilate_storage(&mut t)
  .unwrap();

  pallet_mint::GenesisConfig::<Test> {
    params,
    last_block_info,
    _marker: Default::default(),
  }
  .assimilate_storage(&mut t)
  .unwrap();

  set_time(GENESIS_TIME);
  set_staking(percent(65), 0);
  BondDenom::set(AssetKind::Native);

  let mut ext: polkadot_sdk::sp_io::TestExternalities = t.into();
  ext.execute_with(|| System::set_block_number(1));
  ext
}

/// Run the mint hooks for the current block at the current mock time
pub fn finalize_block() {
  let n = System::block_number();
  Mint::on_initialize(n);
  Mint::on_finalize(n);
}

/// Advance block number and clock by one block, then run the mint hooks
pub fn next_block() {
  System::set_block_number(System::block_number() + 1);
  set_time(now() + BLOCK_TIME);
  finalize_block();
}
