use {
    crate::report::Report,
    clap::Parser,
    governance_digest::{B256, Bytes, recover_signer},
};

#[derive(Parser)]
pub struct RecoverCmd {
    /// Signing digest the signature was made over
    #[arg(long)]
    digest: B256,

    /// 65-byte `r | s | v` signature, hex-encoded
    #[arg(long)]
    signature: Bytes,
}

impl RecoverCmd {
    pub fn run(self) -> anyhow::Result<Report> {
        let signer = recover_signer(self.digest, &self.signature)?;

        tracing::info!(%signer, "Recovered signer");

        Ok(Report::new().line("signer", signer.to_string()))
    }
}

// ----------------------------------- tests -----------------------------------
