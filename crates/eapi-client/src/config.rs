//! Switch connection configuration
//!
//! Everything the client needs is passed in explicitly through
//! [`SwitchConfig`]. [`SwitchConfig::from_env`] reads the same settings from
//! `SWITCH_*` environment variables.

use crate::error::ConfigError;
use crate::models::VlanId;
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Environment variable holding the switch address
pub const ENV_HOST: &str = "SWITCH_HOST";
/// Environment variable holding the eAPI username
pub const ENV_USERNAME: &str = "SWITCH_USERNAME";
/// Environment variable holding the eAPI password
pub const ENV_PASSWORD: &str = "SWITCH_PASSWORD";
/// Environment variable selecting `http` or `https`
pub const ENV_SCHEME: &str = "SWITCH_SCHEME";
/// Environment variable disabling TLS certificate verification
pub const ENV_INSECURE: &str = "SWITCH_INSECURE";
/// Environment variable with a request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "SWITCH_TIMEOUT_SECS";

/// URL scheme used to reach `/command-api`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    /// Plain HTTP (eAPI `protocol http` must be enabled on the switch)
    Http,
    /// HTTPS, the eAPI default
    #[default]
    Https,
}

impl Scheme {
    /// Scheme as it appears in a URL
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            other => Err(ConfigError::InvalidConfig(format!(
                "unsupported scheme '{}', expected http or https",
                other
            ))),
        }
    }
}

/// Connection settings for one switch
#[derive(Clone, PartialEq, Eq)]
pub struct SwitchConfig {
    /// eAPI username
    pub username: String,
    /// eAPI password
    pub password: String,
    /// Switch address, `host` or `host:port`
    pub host: String,
    /// URL scheme
    pub scheme: Scheme,
    /// Skip TLS certificate verification for this client only
    pub insecure: bool,
    /// Per-request timeout; `None` leaves the HTTP client default
    pub timeout: Option<Duration>,
}

impl fmt::Debug for SwitchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwitchConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("scheme", &self.scheme)
            .field("insecure", &self.insecure)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl SwitchConfig {
    /// HTTPS config with certificate verification on and no timeout
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            host: host.into(),
            scheme: Scheme::Https,
            insecure: false,
            timeout: None,
        }
    }

    /// Set the URL scheme
    #[must_use]
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Accept any certificate the switch presents
    ///
    /// Lab switches usually run with a self-signed certificate.
    #[must_use]
    pub fn with_insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    /// Set a per-request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Load from `SWITCH_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| {
                    ConfigError::InvalidConfig(format!("{} environment variable is required", key))
                })
        };

        let mut config = Self::new(
            required(ENV_USERNAME)?,
            required(ENV_PASSWORD)?,
            required(ENV_HOST)?,
        );

        if let Some(scheme) = lookup(ENV_SCHEME) {
            config.scheme = scheme.parse()?;
        }
        if let Some(insecure) = lookup(ENV_INSECURE) {
            config.insecure = parse_flag(ENV_INSECURE, &insecure)?;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs.trim().parse().map_err(|e| {
                ConfigError::InvalidConfig(format!("{} must be a whole number of seconds: {}", ENV_TIMEOUT_SECS, e))
            })?;
            if secs == 0 {
                return Err(ConfigError::InvalidConfig(format!(
                    "{} must be greater than zero",
                    ENV_TIMEOUT_SECS
                )));
            }
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidConfig(format!(
            "{} must be a boolean, got '{}'",
            key, other
        ))),
    }
}

/// Parse a comma-separated VLAN list such as `"1, 2,30"`
///
/// Order and duplicates are preserved; empty entries are skipped.
pub fn parse_vlan_list(input: &str) -> Result<Vec<VlanId>, ConfigError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<VlanId>()
                .map_err(|e| ConfigError::InvalidConfig(format!("invalid vlan id '{}': {}", s, e)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = SwitchConfig::from_lookup(lookup_from(&[
            (ENV_HOST, "10.10.10.11"),
            (ENV_USERNAME, "admin"),
            (ENV_PASSWORD, "admin"),
        ]))
        .unwrap();

        assert_eq!(config, SwitchConfig::new("admin", "admin", "10.10.10.11"));
        assert_eq!(config.scheme, Scheme::Https);
        assert!(!config.insecure);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_from_lookup_all_options() {
        let config = SwitchConfig::from_lookup(lookup_from(&[
            (ENV_HOST, "switch1:8443"),
            (ENV_USERNAME, "ops"),
            (ENV_PASSWORD, "secret"),
            (ENV_SCHEME, "HTTP"),
            (ENV_INSECURE, "true"),
            (ENV_TIMEOUT_SECS, "15"),
        ]))
        .unwrap();

        assert_eq!(config.scheme, Scheme::Http);
        assert!(config.insecure);
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.host, "switch1:8443");
    }

    #[test]
    fn test_from_lookup_missing_password() {
        let err = SwitchConfig::from_lookup(lookup_from(&[
            (ENV_HOST, "10.10.10.11"),
            (ENV_USERNAME, "admin"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains(ENV_PASSWORD));
    }

    #[test]
    fn test_from_lookup_rejects_bad_values() {
        let base = [
            (ENV_HOST, "h"),
            (ENV_USERNAME, "u"),
            (ENV_PASSWORD, "p"),
        ];

        let mut with_scheme = base.to_vec();
        with_scheme.push((ENV_SCHEME, "ftp"));
        assert!(SwitchConfig::from_lookup(lookup_from(&with_scheme)).is_err());

        let mut with_flag = base.to_vec();
        with_flag.push((ENV_INSECURE, "maybe"));
        assert!(SwitchConfig::from_lookup(lookup_from(&with_flag)).is_err());

        let mut with_timeout = base.to_vec();
        with_timeout.push((ENV_TIMEOUT_SECS, "-3"));
        assert!(SwitchConfig::from_lookup(lookup_from(&with_timeout)).is_err());
    }

    #[test]
    fn test_from_lookup_rejects_zero_timeout() {
        let err = SwitchConfig::from_lookup(lookup_from(&[
            (ENV_HOST, "10.10.10.11"),
            (ENV_USERNAME, "admin"),
            (ENV_PASSWORD, "admin"),
            (ENV_TIMEOUT_SECS, "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfig(_)));
        assert!(err.to_string().contains(ENV_TIMEOUT_SECS));
    }

    #[test]
    fn test_new_keeps_tls_verification_on() {
        let config = SwitchConfig::new("admin", "admin", "10.10.10.11");
        assert!(!config.insecure);
        assert_eq!(config.scheme, Scheme::Https);
        assert!(config.with_insecure(true).insecure);
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = SwitchConfig::new("admin", "hunter2", "10.0.0.1");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_parse_vlan_list() {
        assert_eq!(parse_vlan_list("1,2,3,4").unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(parse_vlan_list(" 30 , 10,,10 ").unwrap(), vec![30, 10, 10]);
        assert!(parse_vlan_list("").unwrap().is_empty());
        assert!(parse_vlan_list("1,abc").is_err());
        assert!(parse_vlan_list("70000").is_err());
    }
}
