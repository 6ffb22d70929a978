/// ─── Borealis Network Constants ─────────────────────────────────────────────
///
/// Fixed parameters of the Borealis test-network genesis. Every node loads
/// the same genesis document, so the values here are part of the agreed
/// network surface: changing any of them forks the network at block zero.

// ── Staking ──────────────────────────────────────────────────────────────────

/// Delegation fee registered for every initial staker (basis points × 10⁴).
pub const DELEGATION_FEE: u32 = 1_000_000;

/// Duration of the initial stake in seconds (one year).
pub const INITIAL_STAKE_DURATION: u64 = 31_536_000;

/// Stagger between consecutive initial-staker end times, in seconds.
pub const INITIAL_STAKE_DURATION_OFFSET: u64 = 5_400;

// ── Allocations ──────────────────────────────────────────────────────────────

/// Difference between unlock-schedule locktime and start time in the
/// reference genesis. Preserved so downstream tooling computes the same
/// relative unlock points on every network.
pub const GENESIS_LOCKTIME_STARTTIME_DELTA: i64 = 2_836_800;

/// X-chain address holding the pre-funded wallet allocation. Also the
/// reward address registered for every initial staker.
pub const WALLET_X_ADDRESS: &str = "X-custom18jma8ppw3nhx5r4ap8clazz0dps7rv5u9xde7p";

/// X-chain address whose locked funds back the initial stake.
pub const STAKING_X_ADDRESS: &str = "X-custom1g65uqn6t77p656w64023nh8nd9updzmxwd59gh";

/// ETH-style address shared by both allocation records.
pub const ALLOCATION_ETH_ADDRESS: &str = "0xb3d82b1367d362de99ab59a658165aff520cbd4d";

/// Wallet allocation: amount unlocked at genesis.
pub const WALLET_INITIAL_AMOUNT: u64 = 300_000_000_000_000_000;

/// Wallet allocation: schedule tranche released immediately (no locktime).
pub const WALLET_UNLOCKED_TRANCHE: u64 = 20_000_000_000_000_000;

/// Wallet allocation: schedule tranche released at the genesis locktime.
pub const WALLET_LOCKED_TRANCHE: u64 = 10_000_000_000_000_000;

/// Staking reserve: single locked tranche backing the initial stake.
pub const STAKING_LOCKED_TRANCHE: u64 = 10_000_000_000_000_000;

/// Free-text template slot filled in by deployment tooling.
pub const GENESIS_MESSAGE: &str = "{{ fun_quote }}";

// ── Embedded execution chain ─────────────────────────────────────────────────

/// Chain ID of the embedded execution chain.
pub const EMBEDDED_CHAIN_ID: u64 = 43_112;

/// The single pre-funded address of the embedded chain (no 0x prefix,
/// matching the execution-chain alloc map format).
pub const EMBEDDED_FUNDED_ADDRESS: &str = "8db97C7cEcE249c2b98bDC0226Cc4C2A57BF52FC";

/// Balance of the pre-funded address, as a hex-encoded wei quantity
/// (50,000,000 ether).
pub const EMBEDDED_FUNDED_BALANCE: &str = "0x295BE96E64066972000000";

/// Block gas limit of the embedded chain (100,000,000).
pub const EMBEDDED_GAS_LIMIT: &str = "0x5f5e100";

/// Instant at which all network upgrades are considered active:
/// 2020-12-05 05:00:00 UTC. The embedded chain starts here so every
/// feature is live the moment the primary network activates.
pub const UPGRADES_ACTIVE_TIMESTAMP: i64 = 1_607_144_400;

/// Zero quantity in the execution chain's hex format.
pub const HEX_ZERO: &str = "0x0";

/// All-zero 32-byte hash (mixHash, parentHash).
pub const ZERO_HASH: &str = "0x0000000000000000000000000000000000000000000000000000000000000000";

/// All-zero ETH address (coinbase).
pub const ZERO_ETH_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// extraData field of the embedded genesis block.
pub const EMBEDDED_EXTRA_DATA: &str = "0x00";
