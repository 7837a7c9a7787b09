use {
    anyhow::Context,
    governance_digest::{B256, Domain, compute_signing_digest, to_hex_string},
    serde::de::DeserializeOwned,
    std::{fmt, fs, path::Path},
};

/// Labelled output lines, printed in insertion order as `label: value`.
#[derive(Debug, Default)]
pub struct Report {
    lines: Vec<(&'static str, String)>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line<V>(mut self, label: &'static str, value: V) -> Self
    where
        V: Into<String>,
    {
        self.lines.push((label, value.into()));
        self
    }

    pub fn hash(self, label: &'static str, hash: B256) -> Self {
        self.line(label, to_hex_string(&hash))
    }

    /// Add the struct hash, and if a domain is given, the domain separator
    /// and signing digest that bind it.
    pub fn struct_hash(self, struct_hash: B256, domain: Option<&Domain>) -> Self {
        let report = self.hash("struct_hash", struct_hash);

        match domain {
            Some(domain) => {
                let separator = domain.separator();
                report
                    .hash("domain_separator", separator)
                    .hash("signing_digest", compute_signing_digest(separator, struct_hash))
            },
            None => report,
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in &self.lines {
            writeln!(f, "{label}: {value}")?;
        }

        Ok(())
    }
}

pub fn read_json<T>(path: &Path) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read `{}`", path.display()))?;

    serde_json::from_str(&raw).with_context(|| format!("failed to parse `{}`", path.display()))
}
