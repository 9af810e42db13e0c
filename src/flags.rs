//! Feature-flag resolution from process arguments and configuration.
//!
//! Flags are resolved exactly once at startup and are read-only for the
//! process lifetime. A `--<flag-name>` token among the raw process
//! arguments activates a flag regardless of any configuration value;
//! otherwise the config `[features]` table decides.

use std::collections::{BTreeSet, HashMap};

/// Gates the dataflow query tool set.
pub const DATAFLOW_QUERY: &str = "dataflow-query";

/// Gates the interactive device-code sign-in tool.
pub const DEVICE_CODE_AUTH: &str = "device-code-auth";

/// Every flag the server recognizes.
pub const KNOWN_FLAGS: &[&str] = &[DATAFLOW_QUERY, DEVICE_CODE_AUTH];

/// Resolved flag activation state, immutable after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    active: BTreeSet<String>,
}

impl FeatureFlags {
    /// Resolve flag activation from raw process arguments and the
    /// `[features]` configuration table.
    #[must_use]
    pub fn resolve<I, S>(args: I, config: &HashMap<String, bool>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<String> = args.into_iter().map(|a| a.as_ref().to_owned()).collect();

        let mut active = BTreeSet::new();
        for flag in KNOWN_FLAGS {
            let switch = format!("--{flag}");
            let on_cli = tokens.iter().any(|token| token == &switch);
            let in_config = config.get(*flag).copied().unwrap_or(false);
            if on_cli || in_config {
                active.insert((*flag).to_owned());
            }
        }

        Self { active }
    }

    /// Whether the named flag is active.
    #[must_use]
    pub fn is_active(&self, name: &str) -> bool {
        self.active.contains(name)
    }

    /// Names of all active flags, in stable lexicographic order.
    #[must_use]
    pub fn active_names(&self) -> Vec<&str> {
        self.active.iter().map(String::as_str).collect()
    }
}
