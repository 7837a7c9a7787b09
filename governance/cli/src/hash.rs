use {
    crate::{
        config::Config,
        report::{Report, read_json},
    },
    anyhow::anyhow,
    clap::Parser,
    governance_digest::{B256, BridgeOperatorsBallot, Proposal, StructHash, VoteType, hash_ballot},
    std::path::PathBuf,
};

#[derive(Parser)]
pub struct ProposalCmd {
    /// JSON file containing a local or global proposal
    file: PathBuf,
}

impl ProposalCmd {
    pub fn run(self, cfg: &Config) -> anyhow::Result<Report> {
        let proposal: Proposal = read_json(&self.file)?;

        tracing::info!(
            nonce = %proposal.nonce(),
            chain_id = %proposal.chain_id(),
            instructions = proposal.len(),
            "Hashing proposal"
        );

        let struct_hash = proposal.struct_hash()?;
        let domain = cfg.domain.as_ref().map(|d| d.to_domain());

        Ok(Report::new().struct_hash(struct_hash, domain.as_ref()))
    }
}

#[derive(Parser)]
pub struct BallotCmd {
    /// Hash of the proposal being voted on
    #[arg(long)]
    proposal_hash: B256,

    /// Vote direction [possible values: for, against]
    #[arg(long)]
    support: VoteType,
}

impl BallotCmd {
    pub fn run(self, cfg: &Config) -> anyhow::Result<Report> {
        let struct_hash = hash_ballot(self.proposal_hash, self.support);
        let domain = cfg.domain.as_ref().map(|d| d.to_domain());

        Ok(Report::new().struct_hash(struct_hash, domain.as_ref()))
    }
}

#[derive(Parser)]
pub struct OperatorsCmd {
    /// JSON file containing a bridge operators ballot
    file: PathBuf,
}

impl OperatorsCmd {
    pub fn run(self, cfg: &Config) -> anyhow::Result<Report> {
        let ballot: BridgeOperatorsBallot = read_json(&self.file)?;

        tracing::info!(
            period = %ballot.period,
            operators = ballot.operators.len(),
            "Hashing bridge operators ballot"
        );

        let struct_hash = ballot.struct_hash()?;
        let domain = cfg.domain.as_ref().map(|d| d.to_domain());

        Ok(Report::new().struct_hash(struct_hash, domain.as_ref()))
    }
}

#[derive(Parser)]
pub struct DomainCmd {}

impl DomainCmd {
    pub fn run(self, cfg: &Config) -> anyhow::Result<Report> {
        let domain = cfg
            .domain
            .as_ref()
            .ok_or_else(|| anyhow!("no `[domain]` section in config"))?
            .to_domain();

        Ok(Report::new()
            .line("name", domain.name.clone())
            .line("version", domain.version.clone())
            .line("chain_id", domain.chain_id.to_string())
            .line("verifying_contract", domain.verifying_contract.to_string())
            .hash("domain_separator", domain.separator()))
    }
}

// ----------------------------------- tests -----------------------------------
