mod config;
mod hash;
mod home_directory;
mod recover;
mod report;
mod resolve;

use {
    crate::{
        config::Config,
        hash::{BallotCmd, DomainCmd, OperatorsCmd, ProposalCmd},
        home_directory::HomeDirectory,
        recover::RecoverCmd,
        resolve::ResolveCmd,
    },
    clap::Parser,
    config_parser::parse_config,
    std::path::PathBuf,
    tracing::metadata::LevelFilter,
};

/// Prefix of environment variables that override the config file, e.g.
/// `GOVHASH__DOMAIN__CHAIN_ID`.
const ENV_PREFIX: &str = "GOVHASH";

#[derive(Parser)]
#[command(author, version, about, next_display_order = None)]
struct Cli {
    /// Directory containing `govhash.toml` [default: ~/.govhash]
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Hash a local or global proposal
    Proposal(ProposalCmd),

    /// Hash a ballot
    Ballot(BallotCmd),

    /// Hash a bridge operators ballot
    Operators(OperatorsCmd),

    /// Print the configured domain separator
    Domain(DomainCmd),

    /// Recover the signer of a signing digest
    Recover(RecoverCmd),

    /// Resolve a global proposal into this chain's proposal
    Resolve(ResolveCmd),
}

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments.
    let cli = Cli::parse();

    // Find the home directory from the CLI `--home` flag.
    let app_dir = HomeDirectory::new_or_default(cli.home)?;

    // Parse the config file.
    let cfg: Config = parse_config(app_dir.config_file(), ENV_PREFIX)?;

    // Set up tracing. Logs go to stderr so that stdout is only the report.
    tracing_subscriber::fmt()
        .with_max_level(cfg.log_level.parse::<LevelFilter>()?)
        .with_writer(std::io::stderr)
        .init();

    let report = match cli.command {
        Command::Proposal(cmd) => cmd.run(&cfg),
        Command::Ballot(cmd) => cmd.run(&cfg),
        Command::Operators(cmd) => cmd.run(&cfg),
        Command::Domain(cmd) => cmd.run(&cfg),
        Command::Recover(cmd) => cmd.run(),
        Command::Resolve(cmd) => cmd.run(&cfg),
    }?;

    print!("{report}");

    Ok(())
}
