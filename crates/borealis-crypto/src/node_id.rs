//! Node identity derivation from staking TLS material.
//!
//! A node's identity is a digest of its staking certificate, rendered as
//! `NodeID-<CB58>`. The staking key never enters the derivation, but a pair
//! with an unreadable key is unusable as staking material, so both PEM
//! blocks are validated before hashing.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use borealis_core::error::BorealisError;
use sha2::{Digest, Sha256};

use crate::encode::cb58;

const NODE_ID_PREFIX: &str = "NodeID-";

/// Length of the node identity digest (truncated SHA-256 of the cert DER).
const NODE_ID_LEN: usize = 20;

/// Derive the canonical node identity string from a staking key/cert pair.
pub fn node_id(staking_key: &[u8], staking_cert: &[u8]) -> Result<String, BorealisError> {
    decode_pem(staking_key, "PRIVATE KEY").map_err(BorealisError::InvalidStakingKey)?;
    let der = decode_pem(staking_cert, "CERTIFICATE").map_err(BorealisError::InvalidStakingCert)?;

    let digest = Sha256::digest(&der);
    Ok(format!(
        "{NODE_ID_PREFIX}{}",
        cb58(&digest[..NODE_ID_LEN])
    ))
}

/// Extract and decode the body of the first PEM block whose label contains
/// `label`. Tolerates surrounding whitespace; rejects anything without a
/// matching BEGIN/END pair or with a non-base64 body.
fn decode_pem(input: &[u8], label: &str) -> Result<Vec<u8>, String> {
    let text = std::str::from_utf8(input).map_err(|_| "not valid UTF-8".to_string())?;

    let mut body = String::new();
    let mut in_block = false;
    let mut complete = false;
    for line in text.lines() {
        let line = line.trim();
        if !in_block {
            if line.starts_with("-----BEGIN ") && line.ends_with("-----") && line.contains(label) {
                in_block = true;
            }
            continue;
        }
        if line.starts_with("-----END ") {
            complete = true;
            break;
        }
        body.push_str(line);
    }

    if !complete {
        return Err(format!("no {label} PEM block found"));
    }
    if body.is_empty() {
        return Err(format!("empty {label} PEM block"));
    }
    BASE64
        .decode(body.as_bytes())
        .map_err(|e| format!("invalid PEM base64: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_pair() -> (Vec<u8>, Vec<u8>) {
        let issued = rcgen::generate_simple_self_signed(vec!["borealis".into()]).unwrap();
        (
            issued.key_pair.serialize_pem().into_bytes(),
            issued.cert.pem().into_bytes(),
        )
    }

    #[test]
    fn node_id_is_deterministic_and_prefixed() {
        let (key, cert) = test_pair();
        let a = node_id(&key, &cert).unwrap();
        let b = node_id(&key, &cert).unwrap();
        assert_eq!(a, b);
        assert!(a.starts_with("NodeID-"));
    }

    #[test]
    fn distinct_certs_get_distinct_ids() {
        let (key_a, cert_a) = test_pair();
        let (key_b, cert_b) = test_pair();
        assert_ne!(
            node_id(&key_a, &cert_a).unwrap(),
            node_id(&key_b, &cert_b).unwrap()
        );
    }

    #[test]
    fn malformed_cert_rejected() {
        let (key, _) = test_pair();
        let err = node_id(&key, b"not a certificate").unwrap_err();
        assert!(matches!(err, BorealisError::InvalidStakingCert(_)));

        let err = node_id(&key, b"").unwrap_err();
        assert!(matches!(err, BorealisError::InvalidStakingCert(_)));
    }

    #[test]
    fn malformed_key_rejected() {
        let (_, cert) = test_pair();
        let err = node_id(b"garbage", &cert).unwrap_err();
        assert!(matches!(err, BorealisError::InvalidStakingKey(_)));
    }

    #[test]
    fn truncated_pem_block_rejected() {
        let (key, cert) = test_pair();
        // Strip the END marker; the block never completes.
        let truncated: Vec<u8> = String::from_utf8(cert)
            .unwrap()
            .lines()
            .filter(|l| !l.starts_with("-----END"))
            .collect::<Vec<_>>()
            .join("\n")
            .into_bytes();
        assert!(node_id(&key, &truncated).is_err());
    }

    #[test]
    fn non_base64_body_rejected() {
        let (key, _) = test_pair();
        let bogus = b"-----BEGIN CERTIFICATE-----\n!!!not base64!!!\n-----END CERTIFICATE-----\n";
        assert!(matches!(
            node_id(&key, bogus),
            Err(BorealisError::InvalidStakingCert(_))
        ));
    }
}
