//! # Core Application Logic
//!
//! The menu, the dialogs and the account workflows. Nothing in here knows
//! about ratatui or crossterm: keys come in through `dialog::KeySource` and
//! output goes out through `workflow::Console`.
//!
//! ```text
//!                    ┌──────────────────────────────┐
//!                    │            CORE              │
//!                    │        (this module)         │
//!                    │                              │
//!                    │  • InputState (models)       │
//!                    │  • Key / Commit              │
//!                    │  • update() (reducer)        │
//!                    │  • dialogs + workflows       │
//!                    └───────┬──────────────┬───────┘
//!                            │              │
//!                            ▼              ▼
//!                     ┌────────────┐ ┌──────────────┐
//!                     │    TUI     │ │  Provisioner │
//!                     │  Adapter   │ │ (OS commands)│
//!                     │ (ratatui)  │ │              │
//!                     └────────────┘ └──────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: menu, yes/no and text models plus the `InputState` enum
//! - [`action`]: the `Key` enum and the pure `update()` transition
//! - [`dialog`]: runs one dialog to completion
//! - [`workflow`]: menu loop, create-user and delete-user
//! - [`config`]: optional settings file and env overrides

pub mod action;
pub mod config;
pub mod dialog;
pub mod state;
pub mod workflow;
