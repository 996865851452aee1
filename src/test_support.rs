//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::{HashSet, VecDeque};
use std::io;
use std::path::{Path, PathBuf};

use crate::core::action::Key;
use crate::core::dialog::KeySource;
use crate::core::state::InputState;
use crate::core::workflow::Console;
use crate::provision::{AccountProvisioner, NewAccount, ProvisionError, StepOutcome};

/// A console that replays a fixed key script and records what was shown.
#[derive(Default)]
pub struct ScriptedConsole {
    keys: VecDeque<Key>,
    pub prompts: Vec<String>,
    pub messages: Vec<String>,
    pub log: Vec<String>,
    pub pauses: usize,
}

impl ScriptedConsole {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            ..Default::default()
        }
    }

    /// A script that types `text`, with `\n` standing for Enter.
    pub fn typing(text: &str) -> Self {
        let mut console = Self::default();
        console.push_text(text);
        console
    }

    pub fn push_keys(&mut self, keys: impl IntoIterator<Item = Key>) {
        self.keys.extend(keys);
    }

    pub fn push_text(&mut self, text: &str) {
        self.keys.extend(text.chars().map(|c| match c {
            '\n' => Key::Enter,
            c => Key::Char(c),
        }));
    }

    pub fn is_exhausted(&self) -> bool {
        self.keys.is_empty()
    }

    fn pop(&mut self) -> io::Result<Key> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted"))
    }
}

impl KeySource for ScriptedConsole {
    fn next_key(&mut self, prompt: &str, _state: &InputState) -> io::Result<Key> {
        self.prompts.push(prompt.to_string());
        self.pop()
    }
}

impl Console for ScriptedConsole {
    fn show_message(&mut self, text: &str) -> io::Result<()> {
        self.messages.push(text.to_string());
        Ok(())
    }

    fn log_line(&mut self, line: &str) -> io::Result<()> {
        self.log.push(line.to_string());
        Ok(())
    }

    fn pause(&mut self) -> io::Result<()> {
        self.pauses += 1;
        self.pop().map(|_| ())
    }
}

/// One recorded call into the fake provisioner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionCall {
    EnsureGroup(String),
    EnsureHome(PathBuf, String),
    Create(NewAccount),
    Delete(String),
}

/// In-memory stand-in for the OS account database.
#[derive(Default)]
pub struct FakeProvisioner {
    groups: HashSet<String>,
    directories: HashSet<PathBuf>,
    users: HashSet<String>,
    failing_groups: Vec<(String, String)>,
    create_failure: Option<String>,
    pub calls: Vec<ProvisionCall>,
}

impl FakeProvisioner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group(mut self, name: &str) -> Self {
        self.groups.insert(name.to_string());
        self
    }

    pub fn with_directory(mut self, path: &str) -> Self {
        self.directories.insert(PathBuf::from(path));
        self
    }

    pub fn with_user(mut self, name: &str) -> Self {
        self.users.insert(name.to_string());
        self
    }

    pub fn fail_group(mut self, name: &str, diagnostic: &str) -> Self {
        self.failing_groups.push((name.to_string(), diagnostic.to_string()));
        self
    }

    pub fn fail_create(mut self, diagnostic: &str) -> Self {
        self.create_failure = Some(diagnostic.to_string());
        self
    }

    pub fn has_user(&self, name: &str) -> bool {
        self.users.contains(name)
    }

    pub fn created_accounts(&self) -> Vec<&NewAccount> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                ProvisionCall::Create(account) => Some(account),
                _ => None,
            })
            .collect()
    }
}

impl AccountProvisioner for FakeProvisioner {
    fn ensure_group_exists(&mut self, name: &str) -> StepOutcome {
        self.calls.push(ProvisionCall::EnsureGroup(name.to_string()));
        if let Some((_, diagnostic)) = self.failing_groups.iter().find(|(g, _)| g == name) {
            return StepOutcome::Failed(diagnostic.clone());
        }
        if self.groups.insert(name.to_string()) {
            StepOutcome::Created
        } else {
            StepOutcome::AlreadyExists
        }
    }

    fn ensure_home_directory(&mut self, path: &Path, owner_group: &str) -> StepOutcome {
        self.calls
            .push(ProvisionCall::EnsureHome(path.to_path_buf(), owner_group.to_string()));
        if self.directories.insert(path.to_path_buf()) {
            StepOutcome::Created
        } else {
            StepOutcome::AlreadyExists
        }
    }

    fn create_account(&mut self, account: &NewAccount) -> Result<(), ProvisionError> {
        self.calls.push(ProvisionCall::Create(account.clone()));
        if let Some(ref diagnostic) = self.create_failure {
            return Err(ProvisionError::new("useradd", diagnostic.clone()));
        }
        self.users.insert(account.username.clone());
        Ok(())
    }

    fn delete_account(&mut self, name: &str) -> Result<(), ProvisionError> {
        self.calls.push(ProvisionCall::Delete(name.to_string()));
        if self.users.remove(name) {
            Ok(())
        } else {
            Err(ProvisionError::new("id", format!("id: '{name}': no such user")))
        }
    }
}
