//! Session configuration.
//!
//! There is no configuration file. The binary builds a [`SessionConfig`]
//! from command-line flags; library callers construct one directly.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// What the interactive session does with a rejected dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "policy")]
pub enum InvalidInputPolicy {
    /// Report the error and prompt again.
    ///
    /// `max_attempts` of `None` re-prompts until the input is valid or ends.
    Retry { max_attempts: Option<NonZeroU32> },

    /// Fail the request on the first rejected value.
    Abort,
}

impl Default for InvalidInputPolicy {
    fn default() -> Self {
        InvalidInputPolicy::Retry { max_attempts: None }
    }
}

impl InvalidInputPolicy {
    /// Build a policy from the `run` command's flags.
    ///
    /// `strict` wins over `max_attempts`.
    pub fn from_flags(strict: bool, max_attempts: Option<NonZeroU32>) -> Self {
        if strict {
            InvalidInputPolicy::Abort
        } else {
            InvalidInputPolicy::Retry { max_attempts }
        }
    }

    /// Whether another prompt is allowed after `failed` rejected attempts.
    pub fn allows_retry(&self, failed: u32) -> bool {
        match self {
            InvalidInputPolicy::Abort => false,
            InvalidInputPolicy::Retry { max_attempts: None } => true,
            InvalidInputPolicy::Retry {
                max_attempts: Some(max),
            } => failed < max.get(),
        }
    }
}

/// Settings for one interactive session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Handling of rejected dimensions
    pub policy: InvalidInputPolicy,
}

impl SessionConfig {
    pub fn with_policy(policy: InvalidInputPolicy) -> Self {
        SessionConfig { policy }
    }
}
