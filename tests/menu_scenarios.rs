use std::collections::{HashSet, VecDeque};
use std::io;
use std::path::{Path, PathBuf};

use usermenu::core::action::Key;
use usermenu::core::config::ResolvedConfig;
use usermenu::core::dialog::KeySource;
use usermenu::core::state::InputState;
use usermenu::core::workflow::{self, Console};
use usermenu::provision::{AccountProvisioner, NewAccount, ProvisionError, StepOutcome};

// ============================================================================
// Helper Types
// ============================================================================

/// Replays keys and records every state it was asked to show.
#[derive(Default)]
struct RecordingConsole {
    keys: VecDeque<Key>,
    states: Vec<InputState>,
    log: Vec<String>,
}

impl RecordingConsole {
    fn new(keys: &[Key]) -> Self {
        Self {
            keys: keys.iter().copied().collect(),
            ..Default::default()
        }
    }

    fn type_text(&mut self, text: &str) {
        self.keys.extend(text.chars().map(Key::Char));
        self.keys.push_back(Key::Enter);
    }

    fn push(&mut self, keys: &[Key]) {
        self.keys.extend(keys.iter().copied());
    }

    fn pop(&mut self) -> io::Result<Key> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more keys"))
    }
}

impl KeySource for RecordingConsole {
    fn next_key(&mut self, _prompt: &str, state: &InputState) -> io::Result<Key> {
        self.states.push(state.clone());
        self.pop()
    }
}

impl Console for RecordingConsole {
    fn show_message(&mut self, _text: &str) -> io::Result<()> {
        Ok(())
    }

    fn log_line(&mut self, line: &str) -> io::Result<()> {
        self.log.push(line.to_string());
        Ok(())
    }

    fn pause(&mut self) -> io::Result<()> {
        self.pop().map(|_| ())
    }
}

/// Provisioner over in-memory groups, directories and users.
#[derive(Default)]
struct MemoryProvisioner {
    groups: HashSet<String>,
    directories: HashSet<PathBuf>,
    users: HashSet<String>,
    accounts: Vec<NewAccount>,
}

impl AccountProvisioner for MemoryProvisioner {
    fn ensure_group_exists(&mut self, name: &str) -> StepOutcome {
        if self.groups.insert(name.to_string()) {
            StepOutcome::Created
        } else {
            StepOutcome::AlreadyExists
        }
    }

    fn ensure_home_directory(&mut self, path: &Path, _owner_group: &str) -> StepOutcome {
        if self.directories.insert(path.to_path_buf()) {
            StepOutcome::Created
        } else {
            StepOutcome::AlreadyExists
        }
    }

    fn create_account(&mut self, account: &NewAccount) -> Result<(), ProvisionError> {
        if !self.users.insert(account.username.clone()) {
            return Err(ProvisionError::new(
                "useradd",
                format!("useradd: user '{}' already exists", account.username),
            ));
        }
        self.accounts.push(account.clone());
        Ok(())
    }

    fn delete_account(&mut self, name: &str) -> Result<(), ProvisionError> {
        if self.users.remove(name) {
            Ok(())
        } else {
            Err(ProvisionError::new("id", format!("id: '{name}': no such user")))
        }
    }
}

fn menu_index(state: &InputState) -> Option<usize> {
    match state {
        InputState::MenuNav(menu) => Some(menu.selected()),
        _ => None,
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_exit_after_moving_to_last_entry() {
    let mut console = RecordingConsole::new(&[Key::Down, Key::Down, Key::Enter, Key::Left, Key::Enter]);
    let mut provisioner = MemoryProvisioner::default();

    workflow::run_menu(&mut console, &mut provisioner, &ResolvedConfig::default()).unwrap();

    // The third key was read while the menu sat on "Exit"
    assert_eq!(menu_index(&console.states[2]), Some(2));
    assert!(matches!(console.states[3], InputState::Confirming(_)));
    assert!(console.keys.is_empty());
}

#[test]
fn test_create_user_in_new_group() {
    let mut console = RecordingConsole::new(&[Key::Enter]);
    console.type_text("alice");
    console.type_text("eng");
    // decline the secondary group, dismiss the log, exit
    console.push(&[Key::Right, Key::Enter, Key::Enter, Key::Down, Key::Down, Key::Enter, Key::Enter]);
    let mut provisioner = MemoryProvisioner::default();

    workflow::run_menu(&mut console, &mut provisioner, &ResolvedConfig::default()).unwrap();

    assert_eq!(
        console.log,
        [
            "Group 'eng' created.",
            "Directory /home/eng created and assigned to group 'eng'.",
            "User 'alice' successfully created with home directory '/home/eng/alice'.",
        ]
    );
    assert_eq!(provisioner.accounts.len(), 1);
    assert_eq!(provisioner.accounts[0].shell, "/bin/bash");
    assert_eq!(provisioner.accounts[0].secondary_group, None);
}

#[test]
fn test_second_user_in_same_group_reuses_group() {
    let mut console = RecordingConsole::new(&[]);
    let mut provisioner = MemoryProvisioner::default();
    let config = ResolvedConfig::default();

    workflow::provision_user(&mut console, &mut provisioner, &config, "alice", "eng", None).unwrap();
    console.log.clear();
    workflow::provision_user(&mut console, &mut provisioner, &config, "bob", "eng", Some("ops")).unwrap();

    assert_eq!(
        console.log,
        [
            "The group 'eng' already exists.",
            "Directory /home/eng already exists.",
            "Secondary group 'ops' created.",
            "User 'bob' successfully created with home directory '/home/eng/bob'.",
            "User 'bob' added to secondary group 'ops'.",
        ]
    );
}

#[test]
fn test_delete_missing_user_returns_to_menu() {
    let mut console = RecordingConsole::new(&[Key::Down, Key::Enter]);
    console.type_text("bob");
    // confirm, dismiss the log, then exit from the menu
    console.push(&[Key::Enter, Key::Enter, Key::Down, Key::Enter, Key::Enter]);
    let mut provisioner = MemoryProvisioner::default();

    workflow::run_menu(&mut console, &mut provisioner, &ResolvedConfig::default()).unwrap();

    assert_eq!(console.log.len(), 1);
    assert!(console.log[0].contains("id: 'bob': no such user"));
    // Menu came back still on "Delete User"
    let menu_states: Vec<_> = console.states.iter().filter_map(menu_index).collect();
    assert_eq!(menu_states, [0, 1, 1, 2]);
}
