use {
    crate::{ShapeError, error::ensure_same_len},
    alloy_primitives::{Address, B256, U256},
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumString, FromRepr},
};

/// A signer's vote choice. The discriminant is the `uint8` committed to in
/// the ballot hash.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    FromRepr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum VoteType {
    For = 0,
    Against = 1,
}

impl VoteType {
    pub const fn tag(self) -> u8 {
        self as u8
    }
}

/// A signer's vote commitment on a specific proposal hash.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Ballot {
    pub proposal_hash: B256,
    pub support: VoteType,
}

impl Ballot {
    pub const fn new(proposal_hash: B256, support: VoteType) -> Self {
        Self {
            proposal_hash,
            support,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedAddress {
    pub addr: Address,
    pub weight: U256,
}

impl WeightedAddress {
    pub const fn new(addr: Address, weight: U256) -> Self {
        Self { addr, weight }
    }
}

/// Snapshot of bridge-operator weights for a reward period.
///
/// Operator order is part of the commitment.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct BridgeOperatorsBallot {
    pub period: U256,
    pub operators: Vec<WeightedAddress>,
}

impl BridgeOperatorsBallot {
    pub const SCHEMA: &'static str = "BridgeOperatorsBallot";

    pub fn new(period: U256, operators: Vec<WeightedAddress>) -> Self {
        Self { period, operators }
    }

    /// Build the ballot from the parallel `operators` / `weights` arrays that
    /// contracts return when queried.
    pub fn from_parallel(
        period: U256,
        operators: Vec<Address>,
        weights: Vec<U256>,
    ) -> Result<Self, ShapeError> {
        ensure_same_len(Self::SCHEMA, ("operators", operators.len()), &[(
            "weights",
            weights.len(),
        )])?;

        let operators = operators
            .into_iter()
            .zip(weights)
            .map(|(addr, weight)| WeightedAddress::new(addr, weight))
            .collect();

        Ok(Self { period, operators })
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, alloy_primitives::address, std::str::FromStr};

    #[test]
    fn vote_type_tags() {
        assert_eq!(VoteType::For.tag(), 0);
        assert_eq!(VoteType::Against.tag(), 1);
        assert_eq!(VoteType::from_repr(1), Some(VoteType::Against));
        assert_eq!(VoteType::from_repr(2), None);
        assert_eq!(VoteType::from_str("against").unwrap(), VoteType::Against);
    }

    #[test]
    fn building_operators_ballot_from_parallel_arrays() {
        let a = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
        let b = address!("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb");

        let ballot = BridgeOperatorsBallot::from_parallel(U256::from(5), vec![a, b], vec![
            U256::from(10),
            U256::from(20),
        ])
        .unwrap();
        assert_eq!(ballot.operators, vec![
            WeightedAddress::new(a, U256::from(10)),
            WeightedAddress::new(b, U256::from(20)),
        ]);

        let err = BridgeOperatorsBallot::from_parallel(U256::from(5), vec![a, b], vec![
            U256::from(10),
        ])
        .unwrap_err();
        assert_eq!(err.field, "weights");
        assert_eq!(err.expect, 2);
        assert_eq!(err.actual, 1);
    }

    #[test]
    fn deserializing_ballot() {
        let ballot: Ballot = serde_json::from_str(
            r#"{
                "proposalHash": "0x0000000000000000000000000000000000000000000000000000000000000001",
                "support": "for"
            }"#,
        )
        .unwrap();

        assert_eq!(ballot.proposal_hash, B256::with_last_byte(1));
        assert_eq!(ballot.support, VoteType::For);
    }
}
