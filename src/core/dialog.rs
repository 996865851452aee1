//! # Dialogs
//!
//! Runs one instance of the input state machine to completion. Each call
//! builds its own model, feeds it keys from a `KeySource` until a key
//! commits, then drops the model and returns the typed result.

use std::io;

use crate::core::action::{Commit, Key, update};
use crate::core::state::InputState;

/// Something that can show a dialog and hand back the next key.
///
/// The terminal adapter renders `state` under `prompt` before blocking on
/// input. Test doubles just pop keys from a script.
pub trait KeySource {
    fn next_key(&mut self, prompt: &str, state: &InputState) -> io::Result<Key>;
}

/// Feeds keys into `state` until one of them commits.
pub fn run(source: &mut impl KeySource, prompt: &str, mut state: InputState) -> io::Result<Commit> {
    loop {
        let key = source.next_key(prompt, &state)?;
        if let Some(commit) = update(&mut state, key) {
            return Ok(commit);
        }
    }
}

/// Asks a yes/no question. The answer starts on "yes".
pub fn confirm(source: &mut impl KeySource, prompt: &str) -> io::Result<bool> {
    match run(source, prompt, InputState::confirming())? {
        Commit::Confirm(answer) => Ok(answer),
        other => Err(unexpected(other)),
    }
}

/// Prompts for a line of printable text. The result may be empty.
pub fn capture_text(source: &mut impl KeySource, prompt: &str) -> io::Result<String> {
    match run(source, prompt, InputState::capturing_text())? {
        Commit::Text(text) => Ok(text),
        other => Err(unexpected(other)),
    }
}

fn unexpected(commit: Commit) -> io::Error {
    io::Error::other(format!("dialog committed an unexpected value: {commit:?}"))
}
