use {
    crate::{ResolveError, ShapeError, error::ensure_same_len},
    alloy_primitives::{Address, Bytes, U256},
    serde::{Deserialize, Serialize},
    std::collections::BTreeMap,
    strum_macros::{Display, EnumString, FromRepr},
};

/// A batch of on-chain instructions, executed in order upon approval.
///
/// The four arrays index the same instruction list: the `i`-th instruction
/// calls `targets[i]` with `calldatas[i]`, attaching `values[i]` of the native
/// currency and forwarding `gas_amounts[i]` gas.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProposalDetail {
    pub nonce: U256,
    pub chain_id: U256,
    pub targets: Vec<Address>,
    pub values: Vec<U256>,
    pub calldatas: Vec<Bytes>,
    pub gas_amounts: Vec<U256>,
}

impl ProposalDetail {
    pub const SCHEMA: &'static str = "ProposalDetail";

    pub fn new(nonce: U256, chain_id: U256) -> Self {
        Self {
            nonce,
            chain_id,
            ..Default::default()
        }
    }

    /// Append one instruction, keeping the four arrays aligned.
    pub fn with_instruction<C>(
        mut self,
        target: Address,
        value: U256,
        calldata: C,
        gas: U256,
    ) -> Self
    where
        C: Into<Bytes>,
    {
        self.targets.push(target);
        self.values.push(value);
        self.calldatas.push(calldata.into());
        self.gas_amounts.push(gas);
        self
    }

    pub fn validate(&self) -> Result<(), ShapeError> {
        ensure_same_len(Self::SCHEMA, ("targets", self.targets.len()), &[
            ("values", self.values.len()),
            ("calldatas", self.calldatas.len()),
            ("gasAmounts", self.gas_amounts.len()),
        ])
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Well-known contract roles a global proposal may target. Each chain
/// resolves a role to its own deployment address at execution time.
///
/// The discriminant is the `uint8` tag committed to in the proposal hash.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    FromRepr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum TargetOption {
    Unset = 0,
    BridgeManager = 1,
    GatewayContract = 2,
    BridgeReward = 3,
    BridgeSlash = 4,
    BridgeTracking = 5,
}

impl TargetOption {
    pub const fn tag(self) -> u8 {
        self as u8
    }
}

/// Per-chain lookup from a target role to a concrete contract address.
pub trait TargetResolver {
    fn resolve(&self, option: TargetOption) -> Option<Address>;
}

impl TargetResolver for BTreeMap<TargetOption, Address> {
    fn resolve(&self, option: TargetOption) -> Option<Address> {
        self.get(&option).copied()
    }
}

/// A chain-agnostic proposal. Targets are given as roles rather than
/// addresses, so that the same hash is valid on every chain.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GlobalProposalDetail {
    pub nonce: U256,
    pub chain_id: U256,
    pub target_options: Vec<TargetOption>,
    pub values: Vec<U256>,
    pub calldatas: Vec<Bytes>,
    pub gas_amounts: Vec<U256>,
}

impl GlobalProposalDetail {
    pub const SCHEMA: &'static str = "GlobalProposalDetail";

    pub fn new(nonce: U256, chain_id: U256) -> Self {
        Self {
            nonce,
            chain_id,
            ..Default::default()
        }
    }

    pub fn with_instruction<C>(
        mut self,
        target: TargetOption,
        value: U256,
        calldata: C,
        gas: U256,
    ) -> Self
    where
        C: Into<Bytes>,
    {
        self.target_options.push(target);
        self.values.push(value);
        self.calldatas.push(calldata.into());
        self.gas_amounts.push(gas);
        self
    }

    pub fn validate(&self) -> Result<(), ShapeError> {
        ensure_same_len(Self::SCHEMA, ("targetOptions", self.target_options.len()), &[
            ("values", self.values.len()),
            ("calldatas", self.calldatas.len()),
            ("gasAmounts", self.gas_amounts.len()),
        ])
    }

    pub fn len(&self) -> usize {
        self.target_options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.target_options.is_empty()
    }

    /// Resolve every target option to this chain's address, producing the
    /// proposal that is actually executed.
    ///
    /// Instruction order is preserved. Errors if any option is `Unset` or
    /// unknown to the resolver.
    pub fn into_proposal_detail<R>(self, resolver: &R) -> Result<ProposalDetail, ResolveError>
    where
        R: TargetResolver + ?Sized,
    {
        self.validate()?;

        let targets = self
            .target_options
            .iter()
            .enumerate()
            .map(|(index, &option)| match option {
                TargetOption::Unset => Err(ResolveError::Unset { index }),
                _ => resolver
                    .resolve(option)
                    .ok_or(ResolveError::Unknown { option, index }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ProposalDetail {
            nonce: self.nonce,
            chain_id: self.chain_id,
            targets,
            values: self.values,
            calldatas: self.calldatas,
            gas_amounts: self.gas_amounts,
        })
    }
}

/// Either kind of proposal. Decides which hashing path is taken.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Proposal {
    Local(ProposalDetail),
    Global(GlobalProposalDetail),
}

impl Proposal {
    pub fn nonce(&self) -> U256 {
        match self {
            Proposal::Local(p) => p.nonce,
            Proposal::Global(p) => p.nonce,
        }
    }

    pub fn chain_id(&self) -> U256 {
        match self {
            Proposal::Local(p) => p.chain_id,
            Proposal::Global(p) => p.chain_id,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Proposal::Local(p) => p.len(),
            Proposal::Global(p) => p.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn validate(&self) -> Result<(), ShapeError> {
        match self {
            Proposal::Local(p) => p.validate(),
            Proposal::Global(p) => p.validate(),
        }
    }
}

impl From<ProposalDetail> for Proposal {
    fn from(proposal: ProposalDetail) -> Self {
        Proposal::Local(proposal)
    }
}

impl From<GlobalProposalDetail> for Proposal {
    fn from(proposal: GlobalProposalDetail) -> Self {
        Proposal::Global(proposal)
    }
}

// ----------------------------------- tests -----------------------------------
