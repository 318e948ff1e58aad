//! Path navigation state machine
//!
//! The prompt is driven by a pure transition function over `NavigationState`.
//! `NavigationEngine` owns one session: the state, the session's directory
//! cache and the listing for the current head path.

use crate::config::PromptConfig;
use crate::dir_cache::{DirectoryCache, DirectoryLister, FsLister};
use crate::filter::filter_with_search_term;
use crate::path_split::{join_completion, join_under, split_path};
use crate::view::{self, DisplayModel};

/// Events the host feeds into the navigator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Any edit of the input line, carrying the full current line content
    Edit(String),
    Complete,
    MoveUp,
    MoveDown,
    Commit,
    Cancel,
}

/// How a finished session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Resolved path under the base directory, not checked for existence
    Committed(String),
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    Done(Outcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub base_path: String,
    /// Raw text typed so far, relative to `base_path`
    pub inserted_path: String,
    pub active_index: usize,
    pub status: Status,
}

impl NavigationState {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            inserted_path: String::new(),
            active_index: 0,
            status: Status::Idle,
        }
    }

    /// `(head, tail)` of the typed path
    pub fn split(&self) -> (String, String) {
        split_path(&self.inserted_path)
    }

    pub fn is_done(&self) -> bool {
        matches!(self.status, Status::Done(_))
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.status {
            Status::Done(outcome) => Some(outcome),
            Status::Idle => None,
        }
    }
}

/// Apply one event to `state` given the candidates currently on offer.
///
/// A finished session ignores every further event.
pub fn transition(
    state: &NavigationState,
    event: &InputEvent,
    candidates: &[String],
) -> NavigationState {
    let mut next = state.clone();
    if state.is_done() {
        return next;
    }

    match event {
        InputEvent::Commit => {
            let resolved = join_under(&state.base_path, &state.inserted_path);
            next.status = Status::Done(Outcome::Committed(resolved));
        }
        InputEvent::Cancel => {
            next.inserted_path.clear();
            next.status = Status::Done(Outcome::Cancelled);
        }
        InputEvent::Complete => {
            // Completes the active candidate; nothing to complete keeps the text
            if let Some(candidate) = candidates.get(state.active_index) {
                let (head, _) = state.split();
                next.inserted_path = join_completion(&head, candidate);
                next.active_index = 0;
            }
        }
        InputEvent::MoveUp => {
            if !candidates.is_empty() {
                next.active_index = if state.active_index == 0 {
                    candidates.len() - 1
                } else {
                    state.active_index - 1
                };
            }
        }
        InputEvent::MoveDown => {
            if !candidates.is_empty() {
                next.active_index = (state.active_index + 1) % candidates.len();
            }
        }
        InputEvent::Edit(line) => {
            next.inserted_path = line.clone();
            next.active_index = 0;
        }
    }

    next
}

/// One prompt session
pub struct NavigationEngine<L = FsLister> {
    config: PromptConfig,
    cache: DirectoryCache<L>,
    state: NavigationState,
    head: String,
    dir_list: Vec<String>,
}

impl NavigationEngine<FsLister> {
    pub fn new(config: PromptConfig) -> Self {
        Self::with_cache(config, DirectoryCache::new())
    }
}

impl<L: DirectoryLister> NavigationEngine<L> {
    pub fn with_cache(config: PromptConfig, cache: DirectoryCache<L>) -> Self {
        let state = NavigationState::new(config.base_path.clone());
        let mut engine = Self {
            config,
            cache,
            state,
            head: String::new(),
            dir_list: Vec::new(),
        };
        engine.refresh_dir_list();
        engine
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn config(&self) -> &PromptConfig {
        &self.config
    }

    pub fn cache(&self) -> &DirectoryCache<L> {
        &self.cache
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.state.outcome()
    }

    /// Candidates for the current input, in listing order
    pub fn candidates(&self) -> Vec<String> {
        let (_, tail) = self.state.split();
        filter_with_search_term(&self.dir_list, &tail)
    }

    /// Feed one event. The directory listing is only refreshed when the head
    /// path changes, so plain typing inside a segment never touches the disk.
    pub fn apply(&mut self, event: InputEvent) -> &Status {
        let candidates = self.candidates();
        self.state = transition(&self.state, &event, &candidates);

        match &self.state.status {
            Status::Idle => {
                let (head, _) = self.state.split();
                if head != self.head {
                    log::debug!("Navigator: head changed {:?} -> {:?}", self.head, head);
                    self.head = head;
                    self.refresh_dir_list();
                }
            }
            Status::Done(Outcome::Committed(path)) => {
                log::info!("Navigator: committed {:?}", path);
            }
            Status::Done(Outcome::Cancelled) => {
                log::info!("Navigator: cancelled");
            }
        }

        &self.state.status
    }

    /// Display model for the current state
    pub fn view(&self) -> DisplayModel {
        view::project(&self.state, &self.candidates(), &self.config)
    }

    fn refresh_dir_list(&mut self) {
        let dir = join_under(&self.state.base_path, &self.head);
        let entries = self.cache.list(&dir);
        let filter = &self.config.filter;
        self.dir_list = entries
            .into_iter()
            .filter(|entry| filter(entry))
            .map(|entry| entry.name)
            .collect();
    }
}
