//! View model for rendering the prompt
//!
//! `project` turns navigation state into everything a renderer needs, so
//! renderers never look at the engine directly.

use crate::config::PromptConfig;
use crate::navigator::{NavigationState, Outcome, Status};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewStatus {
    Idle,
    Committed,
    Cancelled,
}

/// A candidate row inside the visible page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleItem {
    pub name: String,
    /// Position in the full candidate list
    pub index: usize,
    pub is_active: bool,
    /// Last of all candidates, not just of the page
    pub is_last: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayModel {
    pub message: String,
    pub inserted_path: String,
    pub status: ViewStatus,
    pub items: Vec<VisibleItem>,
    pub total_candidates: usize,
    pub empty_text: String,
    pub page_size: usize,
}

pub fn project(state: &NavigationState, candidates: &[String], config: &PromptConfig) -> DisplayModel {
    let status = match &state.status {
        Status::Idle => ViewStatus::Idle,
        Status::Done(Outcome::Committed(_)) => ViewStatus::Committed,
        Status::Done(Outcome::Cancelled) => ViewStatus::Cancelled,
    };

    let (start, end) = page_window(candidates.len(), state.active_index, config.page_size);
    let items = candidates[start..end]
        .iter()
        .enumerate()
        .map(|(offset, name)| {
            let index = start + offset;
            VisibleItem {
                name: name.clone(),
                index,
                is_active: index == state.active_index,
                is_last: index + 1 == candidates.len(),
            }
        })
        .collect();

    DisplayModel {
        message: config.message.clone(),
        inserted_path: state.inserted_path.clone(),
        status,
        items,
        total_candidates: candidates.len(),
        empty_text: config.empty_text.clone(),
        page_size: config.page_size,
    }
}

/// Non-looping page window `[start, end)` over `len` rows. The active row is
/// kept in the middle of the page except near either end of the list.
pub fn page_window(len: usize, active: usize, page_size: usize) -> (usize, usize) {
    let page_size = page_size.max(1);
    if len <= page_size {
        return (0, len);
    }

    let active = active.min(len - 1);
    let start = active
        .saturating_sub(page_size / 2)
        .min(len - page_size);
    (start, start + page_size)
}
