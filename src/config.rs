use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Initial state of the bug simulator (`ENABLE_BUG`).
    pub enable_bug: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same parsing as [`Config::from_env`] against an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            enable_bug: lookup("ENABLE_BUG").is_some_and(|v| parse_flag(&v)),
        })
    }
}

/// Only `"true"` (any case) counts as set.
pub fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_set() {
        let cfg = config_from(&[]).unwrap();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8000);
        assert!(!cfg.enable_bug);
    }

    #[test]
    fn enable_bug_is_case_insensitive() {
        for raw in ["true", "TRUE", "True", " true "] {
            assert!(config_from(&[("ENABLE_BUG", raw)]).unwrap().enable_bug, "{raw:?}");
        }
    }

    #[test]
    fn anything_else_is_false() {
        for raw in ["false", "1", "yes", "on", "", "truthy"] {
            assert!(!parse_flag(raw), "{raw:?} must not enable the bug");
        }
    }

    #[test]
    fn host_and_port_overrides() {
        let cfg = config_from(&[("HOST", "127.0.0.1"), ("PORT", "9090")]).unwrap();
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 9090);
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
