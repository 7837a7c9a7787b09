//! Canonical digests for governance proposals and ballots.
//!
//! Every hash is computed in two stages, following the typed-data signing
//! scheme of [EIP-712](https://eips.ethereum.org/EIPS/eip-712):
//!
//! 1. the struct is reduced to a fixed-size tuple of 32-byte words, with each
//!    variable-length array first canonicalized to a single digest, and that
//!    tuple is hashed together with the struct's type hash;
//! 2. the struct hash is prefixed with `0x1901` and a domain separator and
//!    hashed again, producing the digest that is actually signed.
//!
//! The engine is pure: no I/O, no state. It validates the shape of its input
//! (related arrays must have equal lengths) but nothing else. In particular it
//! doesn't check that calldata decodes to a valid call against its target;
//! that is left to the contract that executes the proposal.

mod ballot;
mod domain;
mod encoding;
mod proposal;
mod signature;
mod struct_hash;
pub mod typehash;

pub use {
    crate::{
        ballot::*, domain::*, encoding::*, proposal::*, signature::*, struct_hash::*,
    },
    governance_types::*,
};
