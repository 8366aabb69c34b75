use serde::{Deserialize, Serialize};

/// What to do when a pass references a name the registry does not have.
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamePolicy {
    /// Every unmatched name is an error.
    #[default]
    Strict,
    /// The first name must match, later misses are dropped from the path.
    Permissive,
}

/// What to do when a referenced name matches several registry entries.
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    #[default]
    FirstMatchWins,
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub name_policy: NamePolicy,
    pub duplicate_policy: DuplicatePolicy,
}

impl ResolverConfig {
    pub fn strict() -> Self {
        Self::default()
    }

    pub fn permissive() -> Self {
        ResolverConfig {
            name_policy: NamePolicy::Permissive,
            ..Self::default()
        }
    }

    pub fn with_duplicate_policy(mut self, duplicate_policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = duplicate_policy;
        self
    }
}
