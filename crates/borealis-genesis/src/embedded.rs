//! Embedded execution-chain genesis builder.

use std::collections::BTreeMap;

use borealis_core::constants::{
    EMBEDDED_CHAIN_ID, EMBEDDED_EXTRA_DATA, EMBEDDED_FUNDED_ADDRESS, EMBEDDED_FUNDED_BALANCE,
    EMBEDDED_GAS_LIMIT, HEX_ZERO, UPGRADES_ACTIVE_TIMESTAMP, ZERO_ETH_ADDRESS, ZERO_HASH,
};
use borealis_core::error::BorealisError;

use crate::document::{ChainConfig, EmbeddedAccount, EmbeddedGenesis};

/// Build the serialized genesis of the embedded execution chain.
///
/// A pure function of compile-time constants: one pre-funded account, every
/// network upgrade active from the start, zero difficulty (the format
/// requires the field even though proof-of-work is unused) and a fixed gas
/// limit. Serialized compact; the assembler embeds the result as a string
/// field of the top-level document.
pub fn build_embedded_genesis() -> Result<Vec<u8>, BorealisError> {
    let mut alloc = BTreeMap::new();
    alloc.insert(
        EMBEDDED_FUNDED_ADDRESS.to_string(),
        EmbeddedAccount {
            balance: EMBEDDED_FUNDED_BALANCE.to_string(),
        },
    );

    let config = ChainConfig {
        chain_id: EMBEDDED_CHAIN_ID,
        homestead_block: 0,
        dao_fork_block: 0,
        dao_fork_support: true,
        eip150_block: 0,
        eip155_block: 0,
        eip158_block: 0,
        byzantium_block: 0,
        constantinople_block: 0,
        petersburg_block: 0,
        istanbul_block: 0,
        muir_glacier_block: 0,
        subnet_evm_timestamp: 0,
        durango_timestamp: Some(UPGRADES_ACTIVE_TIMESTAMP),
        etna_timestamp: Some(UPGRADES_ACTIVE_TIMESTAMP),
    };

    let genesis = EmbeddedGenesis {
        alloc,
        coinbase: ZERO_ETH_ADDRESS.to_string(),
        config,
        difficulty: HEX_ZERO.to_string(),
        extra_data: EMBEDDED_EXTRA_DATA.to_string(),
        gas_limit: EMBEDDED_GAS_LIMIT.to_string(),
        gas_used: HEX_ZERO.to_string(),
        mix_hash: ZERO_HASH.to_string(),
        nonce: HEX_ZERO.to_string(),
        number: HEX_ZERO.to_string(),
        parent_hash: ZERO_HASH.to_string(),
        timestamp: UPGRADES_ACTIVE_TIMESTAMP,
    };

    serde_json::to_vec(&genesis).map_err(|e| BorealisError::Serialization(e.to_string()))
}
