//! Type hashes: the Keccak-256 of each struct's canonical type string.
//!
//! These must be bit-identical to the constants used by the verifying
//! contracts. A mismatch isn't detectable at runtime; it produces digests that
//! look valid but never verify. The tests below pin each constant to its type
//! string.

use alloy_primitives::{B256, b256};

pub const PROPOSAL_TYPE: &str = "ProposalDetail(uint256 nonce,uint256 chainId,address[] targets,uint256[] values,bytes[] calldatas,uint256[] gasAmounts)";

pub const GLOBAL_PROPOSAL_TYPE: &str = "GlobalProposalDetail(uint256 nonce,uint256 chainId,uint8[] targetOptions,uint256[] values,bytes[] calldatas,uint256[] gasAmounts)";

pub const BALLOT_TYPE: &str = "Ballot(bytes32 proposalHash,uint8 support)";

pub const WEIGHTED_ADDRESS_TYPE: &str = "WeightedAddress(address addr,uint256 weight)";

// Referenced struct types are appended after the primary type.
pub const BRIDGE_OPERATORS_BALLOT_TYPE: &str = "BridgeOperatorsBallot(uint256 period,WeightedAddress[] operators)WeightedAddress(address addr,uint256 weight)";

pub const EIP712_DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";

pub const PROPOSAL_TYPEHASH: B256 =
    b256!("65526afa953b4e935ecd640e6905741252eedae157e79c37331ee8103c70019d");

pub const GLOBAL_PROPOSAL_TYPEHASH: B256 =
    b256!("a5addc7e195836105eeda9b1ad78194fd4b815fc260b77a66ffa21e88f295ffb");

pub const BALLOT_TYPEHASH: B256 =
    b256!("d900570327c4c0df8dd6bdd522b7da7e39145dd049d2fd4602276adcd511e3c2");

pub const WEIGHTED_ADDRESS_TYPEHASH: B256 =
    b256!("3c66f1bc9d050034ff93d3e3e70ae387ab531ac77189aecbb153fb8b2f25816e");

pub const BRIDGE_OPERATORS_BALLOT_TYPEHASH: B256 =
    b256!("c619a891fd1ff5098212f6991adf7c8b51f579fa8bc67828211bb4b5661ac1a0");

pub const EIP712_DOMAIN_TYPEHASH: B256 =
    b256!("8b73c3c69bb8fe3d512ecc4cf759cc79239f7b179b0ffacaa9a75d522b39400f");

// ----------------------------------- tests -----------------------------------
