use anyhow::{anyhow, Context, Result};
use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Runtime configuration for the API server.
///
/// The bearer token is the only credential the run endpoint accepts. It is
/// loaded once at startup and shared read-only with every request.
#[derive(Debug, Clone)]
pub struct Settings {
    pub bearer_token: String,
    pub host: String,
    pub port: u16,
}

impl Settings {
    pub fn new(bearer_token: impl Into<String>) -> Self {
        Self {
            bearer_token: bearer_token.into(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bearer_token = lookup("HACKRX_BEARER_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| anyhow!("HACKRX_BEARER_TOKEN environment variable not set"))?;

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got '{}'", raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            bearer_token: bearer_token.trim().to_string(),
            host,
            port,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_host_and_port() {
        let settings = Settings::from_lookup(lookup_from(&[("HACKRX_BEARER_TOKEN", "secret")])).unwrap();
        assert_eq!(settings.bearer_token, "secret");
        assert_eq!(settings.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn reads_host_and_port_overrides() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("HACKRX_BEARER_TOKEN", "secret"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
        ]))
        .unwrap();
        assert_eq!(settings.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn missing_token_is_an_error() {
        let err = Settings::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("HACKRX_BEARER_TOKEN"));
    }

    #[test]
    fn blank_token_is_an_error() {
        assert!(Settings::from_lookup(lookup_from(&[("HACKRX_BEARER_TOKEN", "   ")])).is_err());
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = Settings::from_lookup(lookup_from(&[
            ("HACKRX_BEARER_TOKEN", "secret"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
