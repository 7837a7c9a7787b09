use {
    config::{Config, Environment, File},
    serde::de::DeserializeOwned,
    std::path::Path,
};

/// Parse a TOML config file, then apply environment variable overrides.
///
/// Overrides are named `{PREFIX}__{SECTION}__{KEY}`; for example,
/// `GOVHASH__DOMAIN__CHAIN_ID` overrides `chain_id` under `[domain]`.
///
/// A missing file is not an error. Fields the file doesn't set fall back to
/// their serde defaults.
pub fn parse_config<P, D>(path: P, env_prefix: &str) -> anyhow::Result<D>
where
    P: AsRef<Path>,
    D: DeserializeOwned,
{
    let env_override = Environment::with_prefix(env_prefix)
        .prefix_separator("__")
        .separator("__");

    let config = Config::builder()
        .add_source(File::from(path.as_ref()).required(false))
        .add_source(env_override)
        .build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use {super::*, assertor::*, serde::Deserialize};

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct TestSettings {
        log_level: String,
        domain: Option<TestDomain>,
    }

    #[derive(Debug, Deserialize)]
    struct TestDomain {
        name: String,
        version: String,
        chain_id: u64,
        verifying_contract: String,
    }

    #[test]
    fn test_parse_config_file() {
        let config: TestSettings = parse_config("fixtures/config_test1.toml", "CFGTEST_FILE")
            .expect("Failed to parse file");

        let domain = config.domain.expect("domain section is missing");
        assert_that!(config.log_level.as_str()).is_equal_to("info");
        assert_that!(domain.name.as_str()).is_equal_to("GovernanceAdmin");
        assert_that!(domain.version.as_str()).is_equal_to("2");
        assert_that!(domain.chain_id).is_equal_to(2020);
        assert_that!(domain.verifying_contract.as_str())
            .is_equal_to("0xcccccccccccccccccccccccccccccccccccccccc");
    }

    #[test]
    fn test_env_override() {
        std::env::set_var("CFGTEST_ENV__LOG_LEVEL", "debug");
        std::env::set_var("CFGTEST_ENV__DOMAIN__NAME", "BridgeManager");

        let config: TestSettings = parse_config("fixtures/config_test1.toml", "CFGTEST_ENV")
            .expect("Failed to parse file");

        let domain = config.domain.expect("domain section is missing");
        assert_that!(config.log_level.as_str()).is_equal_to("debug");
        assert_that!(domain.name.as_str()).is_equal_to("BridgeManager");
        assert_that!(domain.chain_id).is_equal_to(2020);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config: TestSettings =
            parse_config("fixtures/does_not_exist.toml", "CFGTEST_MISSING")
                .expect("Failed to parse defaults");

        assert_that!(config.log_level.as_str()).is_equal_to("");
        assert_that!(config.domain.is_none()).is_true();
    }
}
