//! Interactive directory path completion.
//!
//! The typed path is split into a head that names the directory to list and
//! a tail that filters its subdirectories. Tab completes the highlighted
//! candidate, Enter commits the typed path under the base directory and
//! Escape cancels.

pub mod app;
pub mod cli;
pub mod command;
pub mod config;
pub mod dir_cache;
pub mod error;
pub mod event;
pub mod filter;
pub mod navigator;
pub mod path_split;
pub mod screenshot;
pub mod test_runner;
pub mod theme;
pub mod ui;
pub mod view;

pub use config::PromptConfig;
pub use error::{PromptError, Result};
pub use navigator::{InputEvent, NavigationEngine, NavigationState, Outcome, Status};
