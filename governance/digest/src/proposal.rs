use {
    crate::{
        HashExt, Word, WordHasher, hash_words,
        typehash::{GLOBAL_PROPOSAL_TYPEHASH, PROPOSAL_TYPEHASH},
    },
    governance_types::{B256, Bytes, GlobalProposalDetail, ProposalDetail, ShapeError, U256},
};

/// Hash a per-chain proposal.
///
/// ```plain
/// keccak256(
///     PROPOSAL_TYPEHASH | nonce | chainId |
///     keccak256(targets) | keccak256(values) |
///     keccak256(keccak256(calldata_0) | ...) | keccak256(gasAmounts)
/// )
/// ```
///
/// where `|` means concatenation of 32-byte words.
pub fn hash_proposal(proposal: &ProposalDetail) -> Result<B256, ShapeError> {
    proposal.validate()?;

    let hash = hash_instructions(
        PROPOSAL_TYPEHASH,
        proposal.nonce,
        proposal.chain_id,
        hash_words(&proposal.targets),
        &proposal.values,
        &proposal.calldatas,
        &proposal.gas_amounts,
    );

    #[cfg(feature = "tracing")]
    tracing::debug!(
        nonce = %proposal.nonce,
        chain_id = %proposal.chain_id,
        instructions = proposal.len(),
        %hash,
        "Hashed proposal"
    );

    Ok(hash)
}

/// Hash a chain-agnostic proposal. Identical to [`hash_proposal`] except that
/// target options are hashed in place of target addresses, under a distinct
/// type hash.
pub fn hash_global_proposal(proposal: &GlobalProposalDetail) -> Result<B256, ShapeError> {
    proposal.validate()?;

    let hash = hash_instructions(
        GLOBAL_PROPOSAL_TYPEHASH,
        proposal.nonce,
        proposal.chain_id,
        hash_words(&proposal.target_options),
        &proposal.values,
        &proposal.calldatas,
        &proposal.gas_amounts,
    );

    #[cfg(feature = "tracing")]
    tracing::debug!(
        nonce = %proposal.nonce,
        chain_id = %proposal.chain_id,
        instructions = proposal.len(),
        %hash,
        "Hashed global proposal"
    );

    Ok(hash)
}

/// Each calldata is variable-length, so it's first reduced to its own digest.
pub fn hash_calldatas(calldatas: &[Bytes]) -> B256 {
    calldatas
        .iter()
        .fold(WordHasher::new(), |hasher, calldata| {
            hasher.word(&calldata.keccak256())
        })
        .finalize()
}

fn hash_instructions(
    typehash: B256,
    nonce: U256,
    chain_id: U256,
    targets_hash: B256,
    values: &[U256],
    calldatas: &[Bytes],
    gas_amounts: &[U256],
) -> B256 {
    let fields: [&dyn Word; 7] = [
        &typehash,
        &nonce,
        &chain_id,
        &targets_hash,
        &hash_words(values),
        &hash_calldatas(calldatas),
        &hash_words(gas_amounts),
    ];

    hash_words(fields.iter().copied())
}

// ----------------------------------- tests -----------------------------------
