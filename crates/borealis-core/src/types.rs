use serde::{Deserialize, Serialize};
use std::fmt;

/// Unix timestamp (seconds, UTC).
pub type Timestamp = i64;

/// Network identifier echoed verbatim into the genesis document.
pub type NetworkId = u32;

// ── NodeKeys ─────────────────────────────────────────────────────────────────

/// Raw key material for one validator node, supplied by the caller.
///
/// Never persisted by this workspace; the genesis document only carries
/// artifacts derived from these bytes (node ID, BLS public key,
/// proof-of-possession), never the keys themselves.
#[derive(Clone, Serialize, Deserialize)]
pub struct NodeKeys {
    /// PEM-encoded staking TLS private key.
    pub staking_key: Vec<u8>,
    /// PEM-encoded staking TLS certificate paired with `staking_key`.
    pub staking_cert: Vec<u8>,
    /// Raw BLS secret-key bytes.
    pub bls_key: Vec<u8>,
}

impl NodeKeys {
    pub fn new(staking_key: Vec<u8>, staking_cert: Vec<u8>, bls_key: Vec<u8>) -> Self {
        Self {
            staking_key,
            staking_cert,
            bls_key,
        }
    }
}

impl fmt::Debug for NodeKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Key material must never reach logs; print lengths only.
        write!(
            f,
            "NodeKeys {{ staking_key: {}b, staking_cert: {}b, bls_key: {}b }}",
            self.staking_key.len(),
            self.staking_cert.len(),
            self.bls_key.len()
        )
    }
}
