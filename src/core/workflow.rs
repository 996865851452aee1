//! # Workflows
//!
//! The menu loop and the two account workflows. Each workflow asks its
//! questions through nested dialogs, calls the provisioner, and streams
//! one log line per provisioning step back to the console.
//!
//! Provisioning failures never abort a workflow: they become log lines and
//! the remaining steps still run. Only console I/O errors propagate.

use log::info;
use std::io;

use crate::core::action::{Commit, update};
use crate::core::config::ResolvedConfig;
use crate::core::dialog::{self, KeySource};
use crate::core::state::{InputState, MenuEntry, MenuModel};
use crate::provision::{AccountProvisioner, NewAccount, StepOutcome};

/// The screen operations workflows need on top of dialogs.
pub trait Console: KeySource {
    /// Replaces the screen with a single message.
    fn show_message(&mut self, text: &str) -> io::Result<()>;

    /// Appends one line to the incremental log, starting a fresh log screen
    /// if something else is currently displayed.
    fn log_line(&mut self, line: &str) -> io::Result<()>;

    /// Leaves the current screen up until any key is pressed.
    fn pause(&mut self) -> io::Result<()>;
}

/// Runs the main menu until "Exit" is confirmed.
pub fn run_menu(
    console: &mut impl Console,
    provisioner: &mut impl AccountProvisioner,
    config: &ResolvedConfig,
) -> io::Result<()> {
    let mut state = InputState::MenuNav(MenuModel::default());

    loop {
        let key = console.next_key("", &state)?;
        let Some(Commit::Select(entry)) = update(&mut state, key) else {
            continue;
        };
        info!("You selected '{}'", entry.label());

        match entry {
            MenuEntry::CreateUser => {
                create_user(console, provisioner, config)?;
                console.pause()?;
            }
            MenuEntry::DeleteUser => {
                delete_user(console, provisioner)?;
                console.pause()?;
            }
            MenuEntry::Exit => {
                if dialog::confirm(console, "Are you sure you want to exit?")? {
                    info!("Exit confirmed");
                    return Ok(());
                }
            }
        }
    }
}

/// Asks for username, primary group and an optional secondary group, then
/// provisions the account.
pub fn create_user(
    console: &mut impl Console,
    provisioner: &mut impl AccountProvisioner,
    config: &ResolvedConfig,
) -> io::Result<()> {
    let username = dialog::capture_text(console, "Enter username: ")?;
    let group = dialog::capture_text(console, "Enter group: ")?;
    console.show_message(&format!("Username: {username} | Group: {group}"))?;

    let secondary_group = if dialog::confirm(console, "You want to add a secondary group?")? {
        Some(dialog::capture_text(console, "Enter secondary group: ")?).filter(|g| !g.is_empty())
    } else {
        None
    };

    provision_user(console, provisioner, config, &username, &group, secondary_group.as_deref())
}

/// Runs the provisioning steps for one new account, logging each outcome.
pub fn provision_user(
    console: &mut impl Console,
    provisioner: &mut impl AccountProvisioner,
    config: &ResolvedConfig,
    username: &str,
    group: &str,
    secondary_group: Option<&str>,
) -> io::Result<()> {
    info!(
        "Provisioning user '{}' (group '{}', secondary {:?})",
        username, group, secondary_group
    );

    let line = match provisioner.ensure_group_exists(group) {
        StepOutcome::AlreadyExists => format!("The group '{group}' already exists."),
        StepOutcome::Created => format!("Group '{group}' created."),
        StepOutcome::Failed(e) => format!("Failed to create the group '{group}': {e}"),
    };
    console.log_line(&line)?;

    let group_dir = config.group_directory(group);
    let dir = group_dir.display();
    let line = match provisioner.ensure_home_directory(&group_dir, group) {
        StepOutcome::AlreadyExists => format!("Directory {dir} already exists."),
        StepOutcome::Created => {
            format!("Directory {dir} created and assigned to group '{group}'.")
        }
        StepOutcome::Failed(e) => format!("Failed to prepare the directory {dir}: {e}"),
    };
    console.log_line(&line)?;

    if let Some(secondary) = secondary_group {
        let line = match provisioner.ensure_group_exists(secondary) {
            StepOutcome::AlreadyExists => {
                format!("The secondary group '{secondary}' already exists.")
            }
            StepOutcome::Created => format!("Secondary group '{secondary}' created."),
            StepOutcome::Failed(e) => {
                format!("Failed to create the secondary group '{secondary}': {e}")
            }
        };
        console.log_line(&line)?;
    }

    let account = NewAccount {
        username: username.to_string(),
        home: config.user_home(group, username),
        primary_group: group.to_string(),
        shell: config.login_shell.clone(),
        secondary_group: secondary_group.map(str::to_string),
    };
    let home = account.home.display();

    match provisioner.create_account(&account) {
        Ok(()) => {
            console.log_line(&format!(
                "User '{username}' successfully created with home directory '{home}'."
            ))?;
            if let Some(secondary) = secondary_group {
                console.log_line(&format!(
                    "User '{username}' added to secondary group '{secondary}'."
                ))?;
            }
        }
        Err(e) => console.log_line(&format!("Error creating the user '{username}': {e}"))?,
    }
    Ok(())
}

/// Asks for a username and, once confirmed, deletes that account.
pub fn delete_user(
    console: &mut impl Console,
    provisioner: &mut impl AccountProvisioner,
) -> io::Result<()> {
    let username = dialog::capture_text(console, "Enter username to delete: ")?;
    let question = format!("Are you looking to delete the user {username}?");
    if !dialog::confirm(console, &question)? {
        info!("Deletion of '{}' declined", username);
        return Ok(());
    }

    let line = match provisioner.delete_account(&username) {
        Ok(()) => format!("User '{username}' deleted successfully."),
        Err(e) => format!("Failed to delete the user '{username}': {e}"),
    };
    console.log_line(&line)
}
