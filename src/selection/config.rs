use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of regular messages forwarded when the caller does not
/// say otherwise.
pub const DEFAULT_CONTEXT_BUDGET: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid budget: {0}")]
    InvalidBudget(usize),
}

// Serializable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectionConfig {
    /// Cap on regular messages; system and starred messages are exempt.
    pub budget: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            budget: DEFAULT_CONTEXT_BUDGET,
        }
    }
}

impl SelectionConfig {
    pub fn with_budget(budget: usize) -> Self {
        Self { budget }
    }

    /// A zero budget would forward nothing but system and starred messages,
    /// which is never what a settings file means.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.budget == 0 {
            return Err(ConfigError::InvalidBudget(self.budget));
        }
        Ok(())
    }
}
