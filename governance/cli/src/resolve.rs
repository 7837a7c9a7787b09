use {
    crate::{
        config::Config,
        report::{Report, read_json},
    },
    anyhow::bail,
    clap::Parser,
    governance_digest::{Proposal, hash_proposal},
    std::path::PathBuf,
};

#[derive(Parser)]
pub struct ResolveCmd {
    /// JSON file containing a global proposal
    file: PathBuf,
}

impl ResolveCmd {
    pub fn run(self, cfg: &Config) -> anyhow::Result<Report> {
        let global = match read_json(&self.file)? {
            Proposal::Global(global) => global,
            Proposal::Local(_) => bail!("`{}` is already a local proposal", self.file.display()),
        };

        let targets = cfg.target_resolver()?;

        tracing::info!(
            instructions = global.len(),
            known_targets = targets.len(),
            "Resolving global proposal"
        );

        let proposal = global.into_proposal_detail(&targets)?;
        let hash = hash_proposal(&proposal)?;
        let json = serde_json::to_string(&Proposal::Local(proposal))?;

        Ok(Report::new().line("proposal", json).hash("struct_hash", hash))
    }
}

// ----------------------------------- tests -----------------------------------
