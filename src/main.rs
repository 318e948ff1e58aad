use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal, TerminalOptions, Viewport};
use std::io::{self, Stderr};
use std::path::Path;

use dir_prompt::app::App;
use dir_prompt::cli::{Cli, Commands, PromptArgs, DEFAULT_MESSAGE};
use dir_prompt::config::PromptSettings;
use dir_prompt::error::{PromptError, Result};
use dir_prompt::navigator::Outcome;
use dir_prompt::screenshot;
use dir_prompt::test_runner::TestRunner;
use dir_prompt::ui::Renderer;
use dir_prompt::PromptConfig;

fn main() -> Result<()> {
    // Initialize logger only if DIR_PROMPT_LOG environment variable is set
    if let Ok(log_file) = std::env::var("DIR_PROMPT_LOG") {
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
        {
            Ok(file) => {
                env_logger::Builder::new()
                    .target(env_logger::Target::Pipe(Box::new(file)))
                    .filter_level(log::LevelFilter::Debug)
                    .init();
                log::info!("dir-prompt starting up");
            }
            Err(e) => eprintln!("Failed to open log file {}: {}", log_file, e),
        }
    }

    let cli = Cli::parse();
    let config = load_config(&cli.prompt)?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => match run_interactive(config)? {
            Some(path) => {
                println!("{}", path);
                Ok(())
            }
            None => std::process::exit(1),
        },
        Commands::Test {
            script,
            verbose,
            overwrite,
        } => run_headless_test(config, &script, verbose, overwrite),
        Commands::Screenshot {
            script,
            output,
            width,
            height,
        } => {
            let mut app = App::new(config);
            if let Some(script) = script {
                TestRunner::from_file(&script)?.run(&mut app);
            }
            let content = screenshot::render_to_string(&app, width, height)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Screenshot saved to: {}", path);
                }
                None => print!("{}", content),
            }
            Ok(())
        }
    }
}

fn load_config(args: &PromptArgs) -> Result<PromptConfig> {
    let file_settings = match &args.config {
        Some(path) => PromptSettings::load_from_file(path)?,
        None => PromptSettings::default(),
    };

    let settings = file_settings.merge(args.to_settings());
    Ok(settings.into_config(DEFAULT_MESSAGE))
}

fn run_headless_test(config: PromptConfig, script_path: &str, verbose: bool, overwrite: bool) -> Result<()> {
    // Set up logging if verbose or if environment variable is set
    if verbose && std::env::var("DIR_PROMPT_LOG").is_err() {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    }

    log::info!("🧪 Starting headless test run");
    log::info!("🧪 Script: {}", script_path);

    let mut app = App::new(config);
    let mut runner = TestRunner::from_file(script_path)?;
    runner.overwrite_mode = overwrite;
    runner.screenshot_base_dir = Path::new(script_path).parent().map(Path::to_path_buf);

    let test_result = runner.run(&mut app);
    test_result.print_summary();

    if test_result.success {
        log::info!("🧪 Test completed successfully");
        Ok(())
    } else {
        log::error!("🧪 Test failed");
        Err(PromptError::from("Test failed"))
    }
}

/// Run the prompt inline on stderr. Returns the committed path, or `None`
/// when the user cancelled.
fn run_interactive(config: PromptConfig) -> Result<Option<String>> {
    let mut app = App::new(config);
    let height = app.renderer.height(app.engine.config().page_size);

    enable_raw_mode()?;
    let backend = CrosstermBackend::new(io::stderr());
    let options = TerminalOptions {
        viewport: Viewport::Inline(height),
    };
    let mut terminal = match Terminal::with_options(backend, options) {
        Ok(terminal) => terminal,
        Err(e) => {
            disable_raw_mode()?;
            return Err(e.into());
        }
    };

    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    terminal.show_cursor()?;
    eprintln!();
    result?;

    Ok(match app.outcome() {
        Some(Outcome::Committed(path)) => Some(path.clone()),
        Some(Outcome::Cancelled) | None => None,
    })
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stderr>>, app: &mut App) -> Result<()> {
    terminal.hide_cursor()?;

    loop {
        let model = app.view();
        terminal.draw(|frame| app.renderer.render(frame, &model))?;

        if app.is_done() {
            return Ok(());
        }

        let event = crossterm::event::read()?;
        app.handle_event(event);
    }
}
