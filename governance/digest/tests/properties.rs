use {
    governance_digest::{
        Address, B256, Bytes, ProposalDetail, U256, WeightedAddress, compute_signing_digest,
        hash_bridge_operators_ballot, hash_proposal,
    },
    proptest::{collection::vec, prelude::*},
};

fn arb_u256() -> impl Strategy<Value = U256> {
    any::<[u8; 32]>().prop_map(|bytes| U256::from_be_bytes::<32>(bytes))
}

fn arb_address() -> impl Strategy<Value = Address> {
    any::<[u8; 20]>().prop_map(Address::from)
}

fn arb_b256() -> impl Strategy<Value = B256> {
    any::<[u8; 32]>().prop_map(B256::from)
}

fn arb_instruction() -> impl Strategy<Value = (Address, U256, Bytes, U256)> {
    (
        arb_address(),
        arb_u256(),
        vec(any::<u8>(), 0..100).prop_map(Bytes::from),
        arb_u256(),
    )
}

fn arb_proposal(min_len: usize) -> impl Strategy<Value = ProposalDetail> {
    (arb_u256(), arb_u256(), vec(arb_instruction(), min_len..8)).prop_map(
        |(nonce, chain_id, instructions)| {
            instructions.into_iter().fold(
                ProposalDetail::new(nonce, chain_id),
                |proposal, (target, value, calldata, gas)| {
                    proposal.with_instruction(target, value, calldata, gas)
                },
            )
        },
    )
}

proptest! {
    #[test]
    fn hashing_is_deterministic(proposal in arb_proposal(0)) {
        prop_assert_eq!(hash_proposal(&proposal)?, hash_proposal(&proposal.clone())?);
    }

    #[test]
    fn swapping_distinct_instructions_changes_hash(
        proposal in arb_proposal(2),
        i in any::<prop::sample::Index>(),
        j in any::<prop::sample::Index>(),
    ) {
        let (i, j) = (i.index(proposal.len()), j.index(proposal.len()));
        let instruction = |k: usize| (
            proposal.targets[k],
            proposal.values[k],
            proposal.calldatas[k].clone(),
            proposal.gas_amounts[k],
        );
        prop_assume!(instruction(i) != instruction(j));

        let mut swapped = proposal.clone();
        swapped.targets.swap(i, j);
        swapped.values.swap(i, j);
        swapped.calldatas.swap(i, j);
        swapped.gas_amounts.swap(i, j);

        prop_assert_ne!(hash_proposal(&proposal)?, hash_proposal(&swapped)?);
    }

    #[test]
    fn swapping_distinct_values_changes_hash(
        proposal in arb_proposal(2),
        i in any::<prop::sample::Index>(),
        j in any::<prop::sample::Index>(),
    ) {
        let (i, j) = (i.index(proposal.len()), j.index(proposal.len()));
        prop_assume!(proposal.values[i] != proposal.values[j]);

        let mut swapped = proposal.clone();
        swapped.values.swap(i, j);

        prop_assert_ne!(hash_proposal(&proposal)?, hash_proposal(&swapped)?);
    }

    #[test]
    fn dropping_an_array_entry_is_rejected(proposal in arb_proposal(1)) {
        let mut malformed = proposal;
        malformed.gas_amounts.pop();

        prop_assert!(hash_proposal(&malformed).is_err());
    }

    #[test]
    fn domains_bind_signing_digest(a in arb_b256(), b in arb_b256(), struct_hash in arb_b256()) {
        prop_assume!(a != b);

        prop_assert_ne!(
            compute_signing_digest(a, struct_hash),
            compute_signing_digest(b, struct_hash)
        );
    }

    #[test]
    fn reversing_distinct_operators_changes_hash(
        period in arb_u256(),
        first in (arb_address(), arb_u256()),
        second in (arb_address(), arb_u256()),
    ) {
        prop_assume!(first != second);

        let forward = [
            WeightedAddress::new(first.0, first.1),
            WeightedAddress::new(second.0, second.1),
        ];
        let reversed = [forward[1], forward[0]];

        prop_assert_ne!(
            hash_bridge_operators_ballot(period, &forward),
            hash_bridge_operators_ballot(period, &reversed)
        );
    }
}
