use {
    anyhow::Context,
    governance_digest::{Address, Domain, TargetOption, U256},
    serde::{Deserialize, Serialize},
    std::collections::BTreeMap,
};

#[derive(Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub domain: Option<DomainConfig>,
    /// Addresses of this chain's contracts, keyed by role name (e.g.
    /// `gateway_contract`). Used to resolve global proposals.
    pub targets: BTreeMap<String, Address>,
}

impl Config {
    pub fn target_resolver(&self) -> anyhow::Result<BTreeMap<TargetOption, Address>> {
        self.targets
            .iter()
            .map(|(name, address)| {
                let option = name
                    .parse::<TargetOption>()
                    .with_context(|| format!("unknown target option `{name}` in config"))?;
                Ok((option, *address))
            })
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            domain: None,
            targets: BTreeMap::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DomainConfig {
    pub name: String,
    pub version: String,
    pub chain_id: u64,
    pub verifying_contract: Address,
}

impl DomainConfig {
    pub fn to_domain(&self) -> Domain {
        Domain::new(
            self.name.clone(),
            self.version.clone(),
            U256::from(self.chain_id),
            self.verifying_contract,
        )
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, config_parser::parse_config, std::path::Path};

    #[test]
    fn parsing_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata/govhash.toml");
        let cfg: Config = parse_config(path, "GOVHASH_TEST_FILE").unwrap();

        assert_eq!(cfg.log_level, "debug");

        let targets = cfg.target_resolver().unwrap();
        assert_eq!(
            targets.get(&TargetOption::GatewayContract),
            Some(&Address::repeat_byte(0x42))
        );
        assert_eq!(
            targets.get(&TargetOption::BridgeManager),
            Some(&Address::repeat_byte(0x11))
        );
        assert!(!targets.contains_key(&TargetOption::BridgeSlash));

        let domain = cfg.domain.unwrap().to_domain();
        assert_eq!(domain.chain_id, U256::from(2020));
        assert_eq!(domain.verifying_contract, Address::repeat_byte(0xcc));
    }

    #[test]
    fn missing_config_file_uses_defaults() {
        let cfg: Config = parse_config("does/not/exist.toml", "GOVHASH_TEST_MISSING").unwrap();

        assert_eq!(cfg.log_level, "info");
        assert!(cfg.domain.is_none());
        assert!(cfg.targets.is_empty());
    }

    #[test]
    fn unknown_target_name_is_rejected() {
        let mut cfg = Config::default();
        cfg.targets
            .insert("bridge_treasury".to_string(), Address::repeat_byte(0x01));

        assert!(cfg.target_resolver().is_err());
    }
}
