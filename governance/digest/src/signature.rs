use {
    crate::HashExt,
    governance_types::{Address, B256},
    k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey},
};

/// `r | s | v`
pub const SIGNATURE_LENGTH: usize = 65;

#[derive(Debug, thiserror::Error)]
pub enum SignatureError {
    #[error("signature must be 65 bytes, found {0}")]
    IncorrectLength(usize),

    #[error("invalid recovery id {0}; must be 0, 1, 27, or 28")]
    InvalidRecoveryId(u8),

    #[error(transparent)]
    Ecdsa(#[from] k256::ecdsa::Error),
}

/// Sign a digest, producing a 65-byte recoverable signature with `v` of 27
/// or 28, the form expected by on-chain `ecrecover`.
///
/// NOTE: This function takes the signing digest, not the struct hash.
pub fn sign_digest(
    key: &SigningKey,
    digest: B256,
) -> Result<[u8; SIGNATURE_LENGTH], SignatureError> {
    let (signature, recovery_id) = key.sign_prehash_recoverable(digest.as_slice())?;

    let mut bytes = [0; SIGNATURE_LENGTH];
    bytes[..64].copy_from_slice(&signature.to_bytes());
    bytes[64] = recovery_id.to_byte() + 27;

    Ok(bytes)
}

/// Recover the address that produced `signature` over `digest`.
pub fn recover_signer(digest: B256, signature: &[u8]) -> Result<Address, SignatureError> {
    if signature.len() != SIGNATURE_LENGTH {
        return Err(SignatureError::IncorrectLength(signature.len()));
    }

    let v = signature[64];
    let mut recovery_id = match v {
        0 | 1 => RecoveryId::from_byte(v),
        27 | 28 => RecoveryId::from_byte(v - 27),
        _ => None,
    }
    .ok_or(SignatureError::InvalidRecoveryId(v))?;

    let mut sig = Signature::from_slice(&signature[..64])?;

    // High-S signatures require normalization since the verifier rejects them.
    // Negating `s` flips the parity of the recovered point's y coordinate.
    if let Some(normalized) = sig.normalize_s() {
        sig = normalized;
        recovery_id = RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced());
    }

    let vk = VerifyingKey::recover_from_prehash(digest.as_slice(), &sig, recovery_id)?;

    Ok(public_key_to_address(&vk))
}

/// An account's address is the last 20 bytes of the Keccak-256 hash of its
/// uncompressed public key, without the `0x04` tag.
pub fn public_key_to_address(vk: &VerifyingKey) -> Address {
    let point = vk.to_encoded_point(false);
    let hash = point.as_bytes()[1..].keccak256();
    Address::from_slice(&hash[12..])
}

// ----------------------------------- tests -----------------------------------
