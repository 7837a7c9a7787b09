use {anyhow::anyhow, std::path::PathBuf};

/// Where `govhash` looks for its config file.
pub struct HomeDirectory {
    home: PathBuf,
}

impl HomeDirectory {
    pub fn new(home: PathBuf) -> Self {
        Self { home }
    }

    /// Use the `--home` flag if given, otherwise `~/.govhash`.
    pub fn new_or_default(maybe_home: Option<PathBuf>) -> anyhow::Result<Self> {
        if let Some(home) = maybe_home {
            return Ok(Self::new(home));
        }

        let home = home::home_dir().ok_or_else(|| anyhow!("failed to find home directory"))?;

        Ok(Self::new(home.join(".govhash")))
    }

    pub fn config_file(&self) -> PathBuf {
        self.home.join("govhash.toml")
    }
}

// ----------------------------------- tests -----------------------------------
