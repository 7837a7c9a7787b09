use {
    crate::{
        compute_signing_digest, hash_ballot, hash_bridge_operators_ballot, hash_global_proposal,
        hash_proposal,
    },
    governance_types::{
        B256, Ballot, BridgeOperatorsBallot, GlobalProposalDetail, Proposal, ProposalDetail,
        ShapeError,
    },
};

/// A struct with a canonical typed-data hash.
pub trait StructHash {
    fn struct_hash(&self) -> Result<B256, ShapeError>;

    /// The digest that signers sign over, binding the struct hash to a domain.
    fn signing_digest(&self, domain_separator: B256) -> Result<B256, ShapeError> {
        Ok(compute_signing_digest(domain_separator, self.struct_hash()?))
    }
}

impl StructHash for ProposalDetail {
    fn struct_hash(&self) -> Result<B256, ShapeError> {
        hash_proposal(self)
    }
}

impl StructHash for GlobalProposalDetail {
    fn struct_hash(&self) -> Result<B256, ShapeError> {
        hash_global_proposal(self)
    }
}

impl StructHash for Proposal {
    fn struct_hash(&self) -> Result<B256, ShapeError> {
        match self {
            Proposal::Local(proposal) => hash_proposal(proposal),
            Proposal::Global(proposal) => hash_global_proposal(proposal),
        }
    }
}

impl StructHash for Ballot {
    fn struct_hash(&self) -> Result<B256, ShapeError> {
        Ok(hash_ballot(self.proposal_hash, self.support))
    }
}

impl StructHash for BridgeOperatorsBallot {
    fn struct_hash(&self) -> Result<B256, ShapeError> {
        Ok(hash_bridge_operators_ballot(self.period, &self.operators))
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        governance_types::{TargetOption, U256, VoteType},
    };

    #[test]
    fn proposal_variant_selects_hashing_path() {
        let local = ProposalDetail::new(U256::from(1), U256::from(2020));
        let global = GlobalProposalDetail::new(U256::from(1), U256::from(2020));

        assert_eq!(
            Proposal::from(local.clone()).struct_hash(),
            hash_proposal(&local)
        );
        assert_eq!(
            Proposal::from(global.clone()).struct_hash(),
            hash_global_proposal(&global)
        );
    }

    #[test]
    fn signing_digest_wraps_struct_hash() {
        let ballot = Ballot::new(B256::with_last_byte(1), VoteType::Against);
        let separator = B256::repeat_byte(0x42);

        assert_eq!(
            ballot.signing_digest(separator).unwrap(),
            compute_signing_digest(separator, hash_ballot(ballot.proposal_hash, ballot.support))
        );
    }

    #[test]
    fn signing_digest_propagates_shape_errors() {
        let mut proposal = GlobalProposalDetail::new(U256::ZERO, U256::ZERO);
        proposal.target_options.push(TargetOption::BridgeManager);

        assert!(proposal.signing_digest(B256::ZERO).is_err());
    }
}
