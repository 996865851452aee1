//! # Account Provisioning
//!
//! The capability interface the workflows call to mutate OS accounts.
//! Success or failure comes from the exit status of the underlying command
//! only; command output is never parsed beyond being attached as a
//! diagnostic.
//!
//! `SystemProvisioner` is the real implementation. Tests substitute a fake
//! that returns canned outcomes.

mod system;

pub use system::SystemProvisioner;

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Outcome of an idempotent "make sure it exists" step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    AlreadyExists,
    Created,
    Failed(String),
}

/// A provisioning command exited unsuccessfully or could not be started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{step} failed: {diagnostic}")]
pub struct ProvisionError {
    pub step: String,
    pub diagnostic: String,
}

impl ProvisionError {
    pub fn new(step: impl Into<String>, diagnostic: impl Into<String>) -> Self {
        Self {
            step: step.into(),
            diagnostic: diagnostic.into(),
        }
    }
}

/// Everything `create_account` needs to add one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub username: String,
    pub home: PathBuf,
    pub primary_group: String,
    pub shell: String,
    pub secondary_group: Option<String>,
}

pub trait AccountProvisioner {
    /// Creates group `name` unless it already exists.
    fn ensure_group_exists(&mut self, name: &str) -> StepOutcome;

    /// Creates `path` unless it exists and hands it to `owner_group:owner_group`.
    fn ensure_home_directory(&mut self, path: &Path, owner_group: &str) -> StepOutcome;

    fn create_account(&mut self, account: &NewAccount) -> Result<(), ProvisionError>;

    /// Removes the account and its home directory. Fails if the user is unknown.
    fn delete_account(&mut self, name: &str) -> Result<(), ProvisionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provision_error_display_names_step() {
        let err = ProvisionError::new("userdel", "user 'bob' does not exist");
        assert_eq!(err.to_string(), "userdel failed: user 'bob' does not exist");
    }
}
