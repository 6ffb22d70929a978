//! BLS12-381 signer for initial-staker registration.
//!
//! Each validator registers a BLS public key in the genesis together with a
//! proof-of-possession: the secret key's signature over its own compressed
//! public key, under the POP domain-separation tag. The proof prevents
//! rogue-key attacks in aggregate-signature schemes.

use blst::min_pk::{PublicKey, SecretKey, Signature};
use blst::BLST_ERROR;
use borealis_core::error::BorealisError;
use rand::RngCore;
use zeroize::Zeroizing;

/// Domain separation tag for proof-of-possession signatures
/// (Ethereum 2.0 compatible).
const POP_DST: &[u8] = b"BLS_POP_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_";

/// Compressed BLS public key length.
pub const PUBLIC_KEY_LEN: usize = 48;

/// BLS signature / proof-of-possession length.
pub const PROOF_LEN: usize = 96;

/// A loaded BLS secret key.
pub struct BlsSigner {
    secret: SecretKey,
}

impl BlsSigner {
    /// Load a signer from raw 32-byte secret-key bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BorealisError> {
        let secret = SecretKey::from_bytes(bytes).map_err(|_| BorealisError::InvalidBlsKey)?;
        Ok(Self { secret })
    }

    /// Generate a fresh signer from OS randomness.
    pub fn generate() -> Self {
        let mut ikm = Zeroizing::new([0u8; 32]);
        rand::thread_rng().fill_bytes(ikm.as_mut());
        let secret = SecretKey::key_gen(ikm.as_ref(), &[]).expect("32-byte IKM is valid");
        Self { secret }
    }

    /// Raw secret-key bytes, wiped on drop.
    pub fn secret_bytes(&self) -> Zeroizing<[u8; 32]> {
        Zeroizing::new(self.secret.to_bytes())
    }

    /// Compressed public key (48 bytes).
    pub fn public_key(&self) -> [u8; PUBLIC_KEY_LEN] {
        self.secret.sk_to_pk().to_bytes()
    }

    /// Derive the public key and its proof-of-possession.
    ///
    /// Signing with a loaded secret key is infallible, so unlike
    /// [`BlsSigner::from_bytes`] this cannot error.
    pub fn proof_of_possession(&self) -> ProofOfPossession {
        let public_key = self.public_key();
        let proof = self.secret.sign(&public_key, POP_DST, &[]).to_bytes();
        ProofOfPossession {
            public_key,
            proof_of_possession: proof,
        }
    }
}

impl std::fmt::Debug for BlsSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BlsSigner({})", hex::encode(&self.public_key()[..4]))
    }
}

/// A BLS public key with its proof-of-possession, both fixed-length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProofOfPossession {
    pub public_key: [u8; PUBLIC_KEY_LEN],
    pub proof_of_possession: [u8; PROOF_LEN],
}

impl ProofOfPossession {
    /// Verify the proof against its own public key.
    pub fn verify(&self) -> bool {
        let Ok(pk) = PublicKey::from_bytes(&self.public_key) else {
            return false;
        };
        let Ok(sig) = Signature::from_bytes(&self.proof_of_possession) else {
            return false;
        };
        sig.verify(true, &self.public_key, POP_DST, &[], &pk, true) == BLST_ERROR::BLST_SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proof_of_possession_verifies() {
        let signer = BlsSigner::generate();
        assert!(signer.proof_of_possession().verify());
    }

    #[test]
    fn tampered_proof_rejected() {
        let signer = BlsSigner::generate();
        let mut pop = signer.proof_of_possession();
        pop.proof_of_possession[0] ^= 0xff;
        assert!(!pop.verify());
    }

    #[test]
    fn proof_does_not_verify_for_other_key() {
        let a = BlsSigner::generate();
        let b = BlsSigner::generate();
        let mut pop = a.proof_of_possession();
        pop.public_key = b.public_key();
        assert!(!pop.verify());
    }

    #[test]
    fn from_bytes_roundtrip_is_deterministic() {
        let signer = BlsSigner::generate();
        let restored = BlsSigner::from_bytes(signer.secret_bytes().as_ref()).unwrap();
        assert_eq!(signer.public_key(), restored.public_key());
        assert_eq!(signer.proof_of_possession(), restored.proof_of_possession());
    }

    #[test]
    fn malformed_secret_key_rejected() {
        assert!(matches!(
            BlsSigner::from_bytes(&[0u8; 16]),
            Err(BorealisError::InvalidBlsKey)
        ));
        assert!(BlsSigner::from_bytes(&[]).is_err());
    }
}
