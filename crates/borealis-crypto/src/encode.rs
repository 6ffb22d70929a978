use sha2::{Digest, Sha256};

/// Encode bytes as `0x`-prefixed lowercase hex, no checksum.
pub fn hex_nc(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Checksummed base58: base58(payload ‖ last 4 bytes of SHA-256(payload)).
pub fn cb58(payload: &[u8]) -> String {
    let digest = Sha256::digest(payload);
    let mut buf = Vec::with_capacity(payload.len() + 4);
    buf.extend_from_slice(payload);
    buf.extend_from_slice(&digest[digest.len() - 4..]);
    bs58::encode(buf).into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::{Digest, Sha256};

    #[test]
    fn hex_nc_is_prefixed_lowercase() {
        assert_eq!(hex_nc(&[0xde, 0xad, 0xbe, 0xef]), "0xdeadbeef");
        assert_eq!(hex_nc(&[]), "0x");
    }

    #[test]
    fn cb58_appends_valid_checksum() {
        let payload = [7u8; 20];
        let decoded = bs58::decode(cb58(&payload)).into_vec().unwrap();
        let (body, checksum) = decoded.split_at(decoded.len() - 4);
        assert_eq!(body, payload);
        let digest = Sha256::digest(body);
        assert_eq!(checksum, &digest[digest.len() - 4..]);
    }

    #[test]
    fn cb58_differs_on_payload_tweak() {
        let a = cb58(&[1u8; 20]);
        let mut tweaked = [1u8; 20];
        tweaked[19] = 2;
        assert_ne!(a, cb58(&tweaked));
    }
}
