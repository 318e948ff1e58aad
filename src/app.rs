use crossterm::event::{Event, KeyEvent};

use crate::config::PromptConfig;
use crate::dir_cache::{DirectoryCache, DirectoryLister, FsLister};
use crate::event::{translate_key, LineBuffer};
use crate::navigator::{InputEvent, NavigationEngine, Outcome};
use crate::ui::DefaultRenderer;
use crate::view::DisplayModel;

/// One interactive prompt: the navigation engine plus the input line the
/// host edits
pub struct App<L = FsLister> {
    pub engine: NavigationEngine<L>,
    pub input: LineBuffer,
    pub renderer: DefaultRenderer,
}

impl App<FsLister> {
    pub fn new(config: PromptConfig) -> Self {
        Self::with_cache(config, DirectoryCache::new())
    }
}

impl<L: DirectoryLister> App<L> {
    pub fn with_cache(config: PromptConfig, cache: DirectoryCache<L>) -> Self {
        let renderer = DefaultRenderer::new(config.theme.clone());
        Self {
            engine: NavigationEngine::with_cache(config, cache),
            input: LineBuffer::new(),
            renderer,
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            self.handle_key(key);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.is_done() {
            return;
        }
        if let Some(event) = translate_key(key, &mut self.input) {
            self.apply(event);
        }
    }

    pub fn apply(&mut self, event: InputEvent) {
        let completing = event == InputEvent::Complete;
        self.engine.apply(event);

        // Completion rewrites the input line with the engine's text
        if completing {
            let inserted = self.engine.state().inserted_path.clone();
            self.input.set(&inserted);
        }
    }

    pub fn is_done(&self) -> bool {
        self.engine.state().is_done()
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.engine.outcome()
    }

    pub fn view(&self) -> DisplayModel {
        self.engine.view()
    }
}
