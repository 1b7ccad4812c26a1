use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What `sync` does with items that vanished from the remote source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RetentionPolicy {
    /// Leave orphans flagged and wait for an explicit confirm/keep/delete.
    #[default]
    Ask,
    /// Keep every orphan automatically.
    Keep,
    /// Delete every orphan automatically and block it from future syncs.
    Delete,
}

impl fmt::Display for RetentionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RetentionPolicy::Ask => "ask",
            RetentionPolicy::Keep => "keep",
            RetentionPolicy::Delete => "delete",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for RetentionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ask" => Ok(RetentionPolicy::Ask),
            "keep" => Ok(RetentionPolicy::Keep),
            "delete" => Ok(RetentionPolicy::Delete),
            other => Err(format!(
                "Unknown retention policy '{}' (expected ask, keep or delete)",
                other
            )),
        }
    }
}

/// User settings, persisted as their own document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub retention_policy: RetentionPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_ask() {
        assert_eq!(Settings::default().retention_policy, RetentionPolicy::Ask);
    }

    #[test]
    fn policy_parsing() {
        assert_eq!("ask".parse::<RetentionPolicy>(), Ok(RetentionPolicy::Ask));
        assert_eq!("keep".parse::<RetentionPolicy>(), Ok(RetentionPolicy::Keep));
        assert_eq!(
            "delete".parse::<RetentionPolicy>(),
            Ok(RetentionPolicy::Delete)
        );
        assert!("maybe".parse::<RetentionPolicy>().is_err());
    }

    #[test]
    fn serialization_roundtrip() {
        let settings = Settings {
            retention_policy: RetentionPolicy::Delete,
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("delete"));
        let parsed: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn missing_field_defaults() {
        let parsed: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, Settings::default());
    }
}
