//! Harmony deployment environments and their hostnames.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One of the four Harmony deployments a client can talk to.
///
/// Defaults to [`Environment::Uat`], where client work is normally
/// exercised before being pointed at production.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Environment {
    /// Sandbox.
    Sbx,
    /// System integration test.
    Sit,
    /// User acceptance test.
    #[default]
    Uat,
    /// Production.
    Prod,
}

impl Environment {
    /// All variants, in a fixed order.
    pub const ALL: [Environment; 4] = [
        Environment::Sbx,
        Environment::Sit,
        Environment::Uat,
        Environment::Prod,
    ];

    /// Hostname serving this environment.
    ///
    /// Total: every variant maps to exactly one hostname.
    pub fn hostname(self) -> &'static str {
        match self {
            Environment::Sbx => "harmony.sbx.earthdata.nasa.gov",
            Environment::Sit => "harmony.sit.earthdata.nasa.gov",
            Environment::Uat => "harmony.uat.earthdata.nasa.gov",
            Environment::Prod => "harmony.earthdata.nasa.gov",
        }
    }
}

impl fmt::Display for Environment {
    /// Canonical upper-case token, matching the `ENVIRONMENT` variable
    /// spelling.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Environment::Sbx => "SBX",
            Environment::Sit => "SIT",
            Environment::Uat => "UAT",
            Environment::Prod => "PROD",
        };
        f.write_str(token)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    /// Case-insensitive: `"prod"`, `"Prod"` and `"PROD"` all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SBX" => Ok(Environment::Sbx),
            "SIT" => Ok(Environment::Sit),
            "UAT" => Ok(Environment::Uat),
            "PROD" => Ok(Environment::Prod),
            _ => Err(ConfigError::UnknownEnvironment(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hostname_is_total() {
        for env in Environment::ALL {
            assert!(!env.hostname().is_empty(), "{env} has no hostname");
        }
    }

    #[test]
    fn hostnames_match_deployments() {
        assert_eq!(
            Environment::Sbx.hostname(),
            "harmony.sbx.earthdata.nasa.gov"
        );
        assert_eq!(
            Environment::Sit.hostname(),
            "harmony.sit.earthdata.nasa.gov"
        );
        assert_eq!(
            Environment::Uat.hostname(),
            "harmony.uat.earthdata.nasa.gov"
        );
        assert_eq!(Environment::Prod.hostname(), "harmony.earthdata.nasa.gov");
    }

    #[test]
    fn default_is_uat() {
        assert_eq!(Environment::default(), Environment::Uat);
    }

    #[test]
    fn parses_case_insensitively() {
        for (input, expected) in [
            ("SBX", Environment::Sbx),
            ("sit", Environment::Sit),
            ("Uat", Environment::Uat),
            (" prod ", Environment::Prod),
        ] {
            assert_eq!(input.parse::<Environment>().unwrap(), expected);
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        for env in Environment::ALL {
            assert_eq!(env.to_string().parse::<Environment>().unwrap(), env);
        }
    }

    #[test]
    fn unknown_token_errors() {
        let err = "staging".parse::<Environment>().unwrap_err();
        assert!(err.to_string().contains("staging"));
    }

    #[test]
    fn serde_uses_uppercase_tokens() {
        let json = serde_json::to_string(&Environment::Prod).unwrap();
        assert_eq!(json, "\"PROD\"");
        let back: Environment = serde_json::from_str("\"SIT\"").unwrap();
        assert_eq!(back, Environment::Sit);
    }
}
