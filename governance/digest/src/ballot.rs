use {
    crate::{
        WordHasher,
        typehash::{BALLOT_TYPEHASH, BRIDGE_OPERATORS_BALLOT_TYPEHASH, WEIGHTED_ADDRESS_TYPEHASH},
    },
    governance_types::{B256, U256, VoteType, WeightedAddress},
};

/// Hash a signer's vote on a proposal:
/// `keccak256(BALLOT_TYPEHASH | proposalHash | support)`.
pub fn hash_ballot(proposal_hash: B256, support: VoteType) -> B256 {
    WordHasher::new()
        .word(&BALLOT_TYPEHASH)
        .word(&proposal_hash)
        .word(&support)
        .finalize()
}

pub fn hash_weighted_address(operator: &WeightedAddress) -> B256 {
    WordHasher::new()
        .word(&WEIGHTED_ADDRESS_TYPEHASH)
        .word(&operator.addr)
        .word(&operator.weight)
        .finalize()
}

/// Hash a snapshot of bridge operator weights for a period.
///
/// Each operator is hashed on its own, then the per-operator digests are
/// hashed together in input order. Reordering operators changes the hash.
pub fn hash_bridge_operators_ballot(period: U256, operators: &[WeightedAddress]) -> B256 {
    let operators_hash = operators
        .iter()
        .fold(WordHasher::new(), |hasher, operator| {
            hasher.word(&hash_weighted_address(operator))
        })
        .finalize();

    let hash = WordHasher::new()
        .word(&BRIDGE_OPERATORS_BALLOT_TYPEHASH)
        .word(&period)
        .word(&operators_hash)
        .finalize();

    #[cfg(feature = "tracing")]
    tracing::debug!(%period, operators = operators.len(), %hash, "Hashed bridge operators ballot");

    hash
}

// ----------------------------------- tests -----------------------------------
