//! OS-backed provisioner: `getent`, `groupadd`, `chown`, `useradd`, `id`
//! and `userdel`, run synchronously. The UI blocks while they run.

use log::{debug, info, warn};
use std::fs;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use super::{AccountProvisioner, NewAccount, ProvisionError, StepOutcome};

#[derive(Debug, Default)]
pub struct SystemProvisioner;

impl SystemProvisioner {
    pub fn new() -> Self {
        Self
    }
}

/// Runs `cmd` to completion. `Err` carries the diagnostic for a failed or
/// unstartable command.
fn run(step: &str, cmd: &mut Command) -> Result<Output, ProvisionError> {
    debug!("Running {:?}", cmd);
    let output = cmd
        .stdin(Stdio::null())
        .output()
        .map_err(|e| ProvisionError::new(step, format!("could not run {step}: {e}")))?;

    if output.status.success() {
        info!("{} succeeded", step);
        Ok(output)
    } else {
        let diagnostic = diagnostic(&output);
        warn!("{} failed: {}", step, diagnostic);
        Err(ProvisionError::new(step, diagnostic))
    }
}

/// Trimmed stderr, or the exit status when the command printed nothing.
fn diagnostic(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if stderr.is_empty() {
        output.status.to_string()
    } else {
        stderr.to_string()
    }
}

/// Builds the `useradd` invocation for `account`.
fn useradd_command(account: &NewAccount) -> Command {
    let mut cmd = Command::new("useradd");
    cmd.arg("-m")
        .arg("-d")
        .arg(&account.home)
        .args(["-g", account.primary_group.as_str()])
        .args(["-s", account.shell.as_str()]);
    if let Some(ref group) = account.secondary_group {
        cmd.args(["-G", group.as_str()]);
    }
    cmd.arg(&account.username);
    cmd
}

impl AccountProvisioner for SystemProvisioner {
    fn ensure_group_exists(&mut self, name: &str) -> StepOutcome {
        if run("getent", Command::new("getent").args(["group", name]).stdout(Stdio::null())).is_ok() {
            return StepOutcome::AlreadyExists;
        }
        match run("groupadd", Command::new("groupadd").arg(name)) {
            Ok(_) => StepOutcome::Created,
            Err(e) => StepOutcome::Failed(e.diagnostic),
        }
    }

    fn ensure_home_directory(&mut self, path: &Path, owner_group: &str) -> StepOutcome {
        if path.exists() {
            debug!("{} already exists", path.display());
            return StepOutcome::AlreadyExists;
        }
        if let Err(e) = fs::create_dir_all(path) {
            warn!("Failed to create {}: {}", path.display(), e);
            return StepOutcome::Failed(e.to_string());
        }
        let owner = format!("{owner_group}:{owner_group}");
        match run("chown", Command::new("chown").arg(&owner).arg(path)) {
            Ok(_) => StepOutcome::Created,
            Err(e) => StepOutcome::Failed(e.diagnostic),
        }
    }

    fn create_account(&mut self, account: &NewAccount) -> Result<(), ProvisionError> {
        run("useradd", &mut useradd_command(account)).map(|_| ())
    }

    fn delete_account(&mut self, name: &str) -> Result<(), ProvisionError> {
        run("id", Command::new("id").arg(name).stdout(Stdio::null()))?;
        run("userdel", Command::new("userdel").args(["-r", name]).stdout(Stdio::null()))?;
        Ok(())
    }
}
