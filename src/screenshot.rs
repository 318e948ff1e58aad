use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use crate::app::App;
use crate::dir_cache::DirectoryLister;
use crate::error::Result;
use crate::ui::Renderer;

/// Render the prompt once into an off-screen buffer and return it as text
pub fn render_to_string<L: DirectoryLister>(app: &App<L>, width: u16, height: u16) -> Result<String> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend)?;

    let model = app.view();
    terminal.draw(|frame| {
        app.renderer.render(frame, &model);
    })?;

    Ok(buffer_to_string(terminal.backend().buffer()))
}

pub fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();

    for y in 0..buffer.area().height {
        let mut row = String::new();
        for x in 0..buffer.area().width {
            let sym = buffer[(x, y)].symbol();
            if sym.is_empty() {
                row.push(' ');
            } else {
                row.push_str(sym);
            }
        }
        result.push_str(row.trim_end());
        result.push('\n');
    }

    result
}
