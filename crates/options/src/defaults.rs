use crate::parties::ALL_PARTIES;

pub const DEFAULT_SANDBOX_HOST: &str = "localhost";
pub const DEFAULT_SANDBOX_PORT: i32 = 7600;

/// Values used for every option absent from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub(crate) sandbox_host: String,
    pub(crate) sandbox_port: i32,
    pub(crate) parties: Vec<String>,
}

impl Defaults {
    pub fn with_sandbox_host(mut self, host: impl Into<String>) -> Self {
        self.sandbox_host = host.into();
        self
    }

    pub fn with_sandbox_port(mut self, port: i32) -> Self {
        self.sandbox_port = port;
        self
    }

    pub fn with_parties<I, S>(mut self, parties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parties = parties.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            sandbox_host: DEFAULT_SANDBOX_HOST.to_string(),
            sandbox_port: DEFAULT_SANDBOX_PORT,
            parties: ALL_PARTIES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_sandbox_constants() {
        let defaults = Defaults::default();
        assert_eq!(defaults.sandbox_host, "localhost");
        assert_eq!(defaults.sandbox_port, 7600);
        assert_eq!(defaults.parties, ALL_PARTIES);
    }

    #[test]
    fn builders_replace_single_fields() {
        let defaults = Defaults::default()
            .with_sandbox_port(6865)
            .with_parties(["Issuer"]);
        assert_eq!(defaults.sandbox_host, "localhost");
        assert_eq!(defaults.sandbox_port, 6865);
        assert_eq!(defaults.parties, ["Issuer"]);
    }
}
