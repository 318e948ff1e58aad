use crate::dir_cache::DirectoryEntry;
use crate::error::Result;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_EMPTY_TEXT: &str = "No more directory";

/// Caller-supplied predicate applied after hidden and non-directory entries
/// have been dropped.
pub type EntryFilter = Arc<dyn Fn(&DirectoryEntry) -> bool + Send + Sync>;

/// Everything needed to start one prompt session.
#[derive(Clone)]
pub struct PromptConfig {
    pub message: String,
    pub base_path: String,
    /// Rows of candidates shown at once. Only the renderer uses it.
    pub page_size: usize,
    pub empty_text: String,
    pub filter: EntryFilter,
    pub theme: Theme,
}

impl PromptConfig {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            base_path: default_base_path(),
            page_size: DEFAULT_PAGE_SIZE,
            empty_text: DEFAULT_EMPTY_TEXT.to_string(),
            filter: Arc::new(|_| true),
            theme: Theme::default(),
        }
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_empty_text(mut self, empty_text: impl Into<String>) -> Self {
        self.empty_text = empty_text.into();
        self
    }

    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&DirectoryEntry) -> bool + Send + Sync + 'static,
    {
        self.filter = Arc::new(filter);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

impl fmt::Debug for PromptConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptConfig")
            .field("message", &self.message)
            .field("base_path", &self.base_path)
            .field("page_size", &self.page_size)
            .field("empty_text", &self.empty_text)
            .finish_non_exhaustive()
    }
}

fn default_base_path() -> String {
    std::env::current_dir()
        .map(|dir| dir.to_string_lossy().to_string())
        .unwrap_or_else(|_| ".".to_string())
}

/// Prompt settings read from a JSON file. Every field is optional so a file
/// only needs to name what it changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptSettings {
    pub message: Option<String>,
    pub base_path: Option<String>,
    pub page_size: Option<usize>,
    pub empty_text: Option<String>,
    /// Directory names never offered as candidates.
    pub exclude: Vec<String>,
}

impl PromptSettings {
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: PromptSettings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Overlay `other` on top of `self`; values set in `other` win and
    /// exclusions accumulate.
    pub fn merge(mut self, other: PromptSettings) -> Self {
        if other.message.is_some() {
            self.message = other.message;
        }
        if other.base_path.is_some() {
            self.base_path = other.base_path;
        }
        if other.page_size.is_some() {
            self.page_size = other.page_size;
        }
        if other.empty_text.is_some() {
            self.empty_text = other.empty_text;
        }
        self.exclude.extend(other.exclude);
        self
    }

    pub fn into_config(self, default_message: &str) -> PromptConfig {
        let mut config =
            PromptConfig::new(self.message.unwrap_or_else(|| default_message.to_string()));

        if let Some(base_path) = self.base_path {
            config = config.with_base_path(base_path);
        }
        if let Some(page_size) = self.page_size {
            config = config.with_page_size(page_size);
        }
        if let Some(empty_text) = self.empty_text {
            config = config.with_empty_text(empty_text);
        }
        if !self.exclude.is_empty() {
            let exclude = self.exclude;
            config = config.with_filter(move |entry| !exclude.contains(&entry.name));
        }

        config
    }
}
