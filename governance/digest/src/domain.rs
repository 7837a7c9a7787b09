use {
    crate::{HashExt, WordHasher, typehash::EIP712_DOMAIN_TYPEHASH},
    governance_types::{Address, B256, U256},
    sha3::{Digest, Keccak256},
};

/// Version byte and magic prefix of a typed-data signing digest.
pub const SIGNING_PREFIX: [u8; 2] = [0x19, 0x01];

/// Bind a struct hash to a verifying domain:
/// `keccak256(0x19 | 0x01 | domainSeparator | structHash)`.
///
/// This is the value that is signed and verified, never the struct hash
/// alone, so that a signature can't be replayed on another chain or contract.
pub fn compute_signing_digest(domain_separator: B256, struct_hash: B256) -> B256 {
    let mut hasher = Keccak256::new();
    hasher.update(SIGNING_PREFIX);
    hasher.update(domain_separator);
    hasher.update(struct_hash);
    let digest: [u8; 32] = hasher.finalize().into();
    B256::from(digest)
}

/// The parameters a domain separator commits to.
///
/// The engine itself only ever sees the resulting separator; this is a helper
/// for callers that don't already have one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    pub name: String,
    pub version: String,
    pub chain_id: U256,
    pub verifying_contract: Address,
}

impl Domain {
    pub fn new<N, V>(name: N, version: V, chain_id: U256, verifying_contract: Address) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            version: version.into(),
            chain_id,
            verifying_contract,
        }
    }

    pub fn separator(&self) -> B256 {
        WordHasher::new()
            .word(&EIP712_DOMAIN_TYPEHASH)
            .word(&self.name.keccak256())
            .word(&self.version.keccak256())
            .word(&self.chain_id)
            .word(&self.verifying_contract)
            .finalize()
    }

    pub fn signing_digest(&self, struct_hash: B256) -> B256 {
        compute_signing_digest(self.separator(), struct_hash)
    }
}

// ----------------------------------- tests -----------------------------------
