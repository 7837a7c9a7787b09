mod ballot;
mod error;
mod proposal;

pub use crate::{ballot::*, error::*, proposal::*};

// Re-export the primitive types used in the public API, so that downstream
// crates don't need to depend on `alloy-primitives` for the same version.
pub use alloy_primitives::{Address, B256, Bytes, U256};
