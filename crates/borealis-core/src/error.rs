use thiserror::Error;

#[derive(Debug, Error)]
pub enum BorealisError {
    // ── Key material ─────────────────────────────────────────────────────────
    #[error("invalid staking key: {0}")]
    InvalidStakingKey(String),

    #[error("invalid staking certificate: {0}")]
    InvalidStakingCert(String),

    #[error("malformed BLS secret key")]
    InvalidBlsKey,

    // ── Genesis assembly ─────────────────────────────────────────────────────
    #[error("staker #{index}: couldn't derive node ID: {source}")]
    NodeIdDerivation {
        index: usize,
        #[source]
        source: Box<BorealisError>,
    },

    #[error("staker #{index}: couldn't load BLS signer: {source}")]
    BlsSignerLoad {
        index: usize,
        #[source]
        source: Box<BorealisError>,
    },

    // ── Serialization ────────────────────────────────────────────────────────
    #[error("serialization error: {0}")]
    Serialization(String),
}
