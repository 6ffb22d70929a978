//! borealis-genesis
//!
//! Builds the bootstrap configuration of a Borealis test network: a
//! primary-chain genesis document describing the initial validator set,
//! token allocations and their unlock schedules, with the genesis of the
//! embedded execution chain carried inside it as a string field.
//!
//! Every node must load a byte-identical document to agree on the starting
//! state, so assembly is deterministic for a fixed input and start time:
//! the wall clock is read exactly once per invocation and threaded through
//! every derived lock time.

pub mod document;
pub mod embedded;

pub use document::Genesis;
pub use embedded::build_embedded_genesis;

use borealis_core::constants::{
    ALLOCATION_ETH_ADDRESS, DELEGATION_FEE, GENESIS_LOCKTIME_STARTTIME_DELTA, GENESIS_MESSAGE,
    INITIAL_STAKE_DURATION, INITIAL_STAKE_DURATION_OFFSET, STAKING_LOCKED_TRANCHE,
    STAKING_X_ADDRESS, WALLET_INITIAL_AMOUNT, WALLET_LOCKED_TRANCHE, WALLET_UNLOCKED_TRANCHE,
    WALLET_X_ADDRESS,
};
use borealis_core::error::BorealisError;
use borealis_core::types::{NetworkId, NodeKeys, Timestamp};
use borealis_crypto::{hex_nc, node_id, BlsSigner};
use chrono::Utc;
use tracing::{debug, info};

use document::{Allocation, LockedAmount, Staker, StakerSigner};

/// Assemble the genesis document for `network_id`, reading the wall clock
/// once for the start time.
///
/// Returns the serialized document; the caller owns the bytes. Any failure
/// aborts the whole call — no partial document is ever returned.
pub fn assemble_genesis(
    network_id: NetworkId,
    node_keys: &[NodeKeys],
) -> Result<Vec<u8>, BorealisError> {
    assemble_genesis_at(network_id, node_keys, Utc::now().timestamp())
}

/// Assemble the genesis document with an explicit start time.
///
/// `start_time` is used for the top-level field and for every derived lock
/// time, so a single document is internally consistent regardless of when
/// it is built. Stakers appear in `node_keys` order, duplicates included —
/// the order fixes the canonical byte layout and therefore the agreed hash.
pub fn assemble_genesis_at(
    network_id: NetworkId,
    node_keys: &[NodeKeys],
    start_time: Timestamp,
) -> Result<Vec<u8>, BorealisError> {
    info!(network_id, nodes = node_keys.len(), "assembling genesis");

    let embedded = build_embedded_genesis()?;
    let c_chain_genesis =
        String::from_utf8(embedded).map_err(|e| BorealisError::Serialization(e.to_string()))?;

    let mut initial_stakers = Vec::with_capacity(node_keys.len());
    for (index, keys) in node_keys.iter().enumerate() {
        let node_id = node_id(&keys.staking_key, &keys.staking_cert).map_err(|source| {
            BorealisError::NodeIdDerivation {
                index,
                source: Box::new(source),
            }
        })?;
        let signer =
            BlsSigner::from_bytes(&keys.bls_key).map_err(|source| BorealisError::BlsSignerLoad {
                index,
                source: Box::new(source),
            })?;
        let pop = signer.proof_of_possession();

        debug!(index, node_id = %node_id, "derived staker identity");
        initial_stakers.push(Staker {
            delegation_fee: DELEGATION_FEE,
            node_id,
            reward_address: WALLET_X_ADDRESS.to_string(),
            signer: StakerSigner {
                proof_of_possession: hex_nc(&pop.proof_of_possession),
                public_key: hex_nc(&pop.public_key),
            },
        });
    }

    let lock_time = start_time + GENESIS_LOCKTIME_STARTTIME_DELTA;
    let allocations = vec![
        Allocation {
            avax_addr: WALLET_X_ADDRESS.to_string(),
            eth_addr: ALLOCATION_ETH_ADDRESS.to_string(),
            initial_amount: WALLET_INITIAL_AMOUNT,
            unlock_schedule: vec![
                LockedAmount {
                    amount: WALLET_UNLOCKED_TRANCHE,
                    locktime: None,
                },
                LockedAmount {
                    amount: WALLET_LOCKED_TRANCHE,
                    locktime: Some(lock_time),
                },
            ],
        },
        Allocation {
            avax_addr: STAKING_X_ADDRESS.to_string(),
            eth_addr: ALLOCATION_ETH_ADDRESS.to_string(),
            initial_amount: 0,
            unlock_schedule: vec![LockedAmount {
                amount: STAKING_LOCKED_TRANCHE,
                locktime: Some(lock_time),
            }],
        },
    ];

    let genesis = Genesis {
        allocations,
        c_chain_genesis,
        initial_stake_duration: INITIAL_STAKE_DURATION,
        initial_stake_duration_offset: INITIAL_STAKE_DURATION_OFFSET,
        initial_staked_funds: vec![STAKING_X_ADDRESS.to_string()],
        initial_stakers,
        message: GENESIS_MESSAGE.to_string(),
        network_id,
        start_time,
    };

    info!(
        network_id,
        stakers = genesis.initial_stakers.len(),
        start_time,
        "genesis document assembled"
    );
    document::to_indented_json(&genesis).map_err(|e| BorealisError::Serialization(e.to_string()))
}
