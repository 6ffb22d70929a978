//! The canonical genesis document model.
//!
//! Field names, nesting and the numeric-vs-string typing of every field are
//! part of the network's compatibility surface: downstream node software
//! parses the document by field name. Struct fields below are declared in
//! lexicographic order of their serialized names so the emitted byte layout
//! matches genesis files produced by map-based (key-sorting) serializers.

use borealis_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ── Top-level document ───────────────────────────────────────────────────────

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Genesis {
    pub allocations: Vec<Allocation>,
    /// The embedded execution-chain genesis, double-encoded: a complete JSON
    /// document carried as a string value. Downstream parsers require this
    /// exact shape.
    #[serde(rename = "cChainGenesis")]
    pub c_chain_genesis: String,
    #[serde(rename = "initialStakeDuration")]
    pub initial_stake_duration: u64,
    #[serde(rename = "initialStakeDurationOffset")]
    pub initial_stake_duration_offset: u64,
    #[serde(rename = "initialStakedFunds")]
    pub initial_staked_funds: Vec<String>,
    #[serde(rename = "initialStakers")]
    pub initial_stakers: Vec<Staker>,
    pub message: String,
    #[serde(rename = "networkID")]
    pub network_id: u32,
    #[serde(rename = "startTime")]
    pub start_time: Timestamp,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Staker {
    #[serde(rename = "delegationFee")]
    pub delegation_fee: u32,
    #[serde(rename = "nodeID")]
    pub node_id: String,
    #[serde(rename = "rewardAddress")]
    pub reward_address: String,
    pub signer: StakerSigner,
}

/// Hex-encoded BLS registration artifacts of one staker.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StakerSigner {
    #[serde(rename = "proofOfPossession")]
    pub proof_of_possession: String,
    #[serde(rename = "publicKey")]
    pub public_key: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Allocation {
    #[serde(rename = "avaxAddr")]
    pub avax_addr: String,
    #[serde(rename = "ethAddr")]
    pub eth_addr: String,
    #[serde(rename = "initialAmount")]
    pub initial_amount: u64,
    #[serde(rename = "unlockSchedule")]
    pub unlock_schedule: Vec<LockedAmount>,
}

/// One unlock-schedule tranche. A tranche without a locktime is released
/// immediately at genesis; the field is then omitted, not null.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LockedAmount {
    pub amount: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locktime: Option<Timestamp>,
}

// ── Embedded execution-chain genesis ─────────────────────────────────────────

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EmbeddedGenesis {
    pub alloc: BTreeMap<String, EmbeddedAccount>,
    pub coinbase: String,
    pub config: ChainConfig,
    pub difficulty: String,
    #[serde(rename = "extraData")]
    pub extra_data: String,
    #[serde(rename = "gasLimit")]
    pub gas_limit: String,
    #[serde(rename = "gasUsed")]
    pub gas_used: String,
    #[serde(rename = "mixHash")]
    pub mix_hash: String,
    pub nonce: String,
    pub number: String,
    #[serde(rename = "parentHash")]
    pub parent_hash: String,
    pub timestamp: Timestamp,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EmbeddedAccount {
    pub balance: String,
}

/// Externally-defined execution-chain parameter schema: chain ID plus
/// fork-activation points. Serialized verbatim; the activation semantics
/// belong to the execution layer, not to this workspace. Fields follow the
/// schema's own declaration order, not lexicographic order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChainConfig {
    #[serde(rename = "chainId")]
    pub chain_id: u64,
    #[serde(rename = "homesteadBlock")]
    pub homestead_block: u64,
    #[serde(rename = "daoForkBlock")]
    pub dao_fork_block: u64,
    #[serde(rename = "daoForkSupport")]
    pub dao_fork_support: bool,
    #[serde(rename = "eip150Block")]
    pub eip150_block: u64,
    #[serde(rename = "eip155Block")]
    pub eip155_block: u64,
    #[serde(rename = "eip158Block")]
    pub eip158_block: u64,
    #[serde(rename = "byzantiumBlock")]
    pub byzantium_block: u64,
    #[serde(rename = "constantinopleBlock")]
    pub constantinople_block: u64,
    #[serde(rename = "petersburgBlock")]
    pub petersburg_block: u64,
    #[serde(rename = "istanbulBlock")]
    pub istanbul_block: u64,
    #[serde(rename = "muirGlacierBlock")]
    pub muir_glacier_block: u64,
    #[serde(rename = "subnetEVMTimestamp")]
    pub subnet_evm_timestamp: u64,
    /// Optional upgrades are omitted entirely when inactive.
    #[serde(
        default,
        rename = "durangoTimestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub durango_timestamp: Option<Timestamp>,
    #[serde(
        default,
        rename = "etnaTimestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub etna_timestamp: Option<Timestamp>,
}

/// Serialize with the single-space indentation the canonical top-level
/// document uses.
pub fn to_indented_json<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut ser)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locktime_omitted_when_absent() {
        let tranche = LockedAmount {
            amount: 5,
            locktime: None,
        };
        assert_eq!(
            serde_json::to_string(&tranche).unwrap(),
            r#"{"amount":5}"#
        );

        let locked = LockedAmount {
            amount: 5,
            locktime: Some(100),
        };
        assert_eq!(
            serde_json::to_string(&locked).unwrap(),
            r#"{"amount":5,"locktime":100}"#
        );
    }

    #[test]
    fn indented_json_uses_single_space() {
        let tranche = LockedAmount {
            amount: 1,
            locktime: Some(2),
        };
        let text = String::from_utf8(to_indented_json(&tranche).unwrap()).unwrap();
        assert_eq!(text, "{\n \"amount\": 1,\n \"locktime\": 2\n}");
    }

    #[test]
    fn staker_fields_serialize_in_canonical_order() {
        let staker = Staker {
            delegation_fee: 1,
            node_id: "NodeID-x".into(),
            reward_address: "X-addr".into(),
            signer: StakerSigner {
                proof_of_possession: "0xaa".into(),
                public_key: "0xbb".into(),
            },
        };
        assert_eq!(
            serde_json::to_string(&staker).unwrap(),
            r#"{"delegationFee":1,"nodeID":"NodeID-x","rewardAddress":"X-addr","signer":{"proofOfPossession":"0xaa","publicKey":"0xbb"}}"#
        );
    }
}
