//! Chat endpoint configuration
//!
//! Read once at startup from the environment:
//!
//! | Variable                    | Default                      |
//! |-----------------------------|------------------------------|
//! | `BASQUIN_CHAT_URL`          | `http://localhost:3000/chat` |
//! | `BASQUIN_CHAT_TIMEOUT_SECS` | `30`                         |

pub const CHAT_URL_VAR: &str = "BASQUIN_CHAT_URL";
pub const CHAT_TIMEOUT_VAR: &str = "BASQUIN_CHAT_TIMEOUT_SECS";

pub const DEFAULT_CHAT_URL: &str = "http://localhost:3000/chat";
pub const DEFAULT_CHAT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CHAT_URL.to_string(),
            timeout_secs: DEFAULT_CHAT_TIMEOUT_SECS,
        }
    }
}

impl ChatConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Blank or unparsable values
    /// keep the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup(CHAT_URL_VAR).filter(|v| !v.trim().is_empty()) {
            config.endpoint = url.trim().to_string();
        }

        if let Some(raw) = lookup(CHAT_TIMEOUT_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout_secs = secs,
                _ => log::warn!(
                    "Ignoring {}={:?}, using {}s",
                    CHAT_TIMEOUT_VAR,
                    raw,
                    config.timeout_secs
                ),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ChatConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ChatConfig::default());
        assert_eq!(config.endpoint, "http://localhost:3000/chat");
    }

    #[test]
    fn test_overrides() {
        let config = ChatConfig::from_lookup(lookup(&[
            (CHAT_URL_VAR, " https://example.test/chat "),
            (CHAT_TIMEOUT_VAR, "5"),
        ]));
        assert_eq!(config.endpoint, "https://example.test/chat");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let config =
            ChatConfig::from_lookup(lookup(&[(CHAT_URL_VAR, "  "), (CHAT_TIMEOUT_VAR, "soon")]));
        assert_eq!(config, ChatConfig::default());

        let config = ChatConfig::from_lookup(lookup(&[(CHAT_TIMEOUT_VAR, "0")]));
        assert_eq!(config.timeout_secs, DEFAULT_CHAT_TIMEOUT_SECS);
    }
}
