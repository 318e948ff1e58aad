use crate::app::App;
use crate::command::Command;
use crate::dir_cache::DirectoryLister;
use crate::error::{PromptError, Result};
use crate::navigator::{Outcome, Status};
use crate::screenshot;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Script format for headless sessions
///
/// Each line is one command:
/// - `char:<c>` - Type one character (e.g., `char:p`, `char:/`)
/// - `type:<text>` - Type several characters, one key press each
/// - `key:<keyname>` - Send a key (e.g., `key:tab`, `key:enter`, `key:esc`)
/// - `assert:<property>:<value>` - Assert prompt state
/// - `screenshot:<file>` - Compare (or write, in overwrite mode) a text screenshot
/// - `# comment` - Comments (ignored)
///
/// Examples:
/// ```text
/// # Complete "proj" and accept it
/// type:proj
/// key:tab
/// assert:inserted_path:projects/
/// key:enter
/// assert:status:committed
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptStep {
    Input(Command),
    Assert(String),
    Screenshot(String),
}

#[derive(Debug, Clone)]
pub struct TestScript {
    pub steps: Vec<ScriptStep>,
}

#[derive(Debug, Clone)]
pub struct TestRunner {
    pub script: TestScript,
    pub overwrite_mode: bool,
    pub screenshot_base_dir: Option<PathBuf>,
    pub screenshot_size: (u16, u16),
}

impl TestRunner {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_string(&content)
    }

    pub fn from_string(content: &str) -> Result<Self> {
        let mut steps = Vec::new();

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let script_error = |message: String| PromptError::Script {
                line: line_num + 1,
                message,
            };

            let step = if let Some(value) = line.strip_prefix("char:") {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => ScriptStep::Input(Command::Char(c)),
                    _ => return Err(script_error(format!("Expected one character: {}", line))),
                }
            } else if let Some(value) = line.strip_prefix("type:") {
                ScriptStep::Input(Command::Type(value.to_string()))
            } else if let Some(value) = line.strip_prefix("key:") {
                ScriptStep::Input(Command::from_key_name(value).map_err(script_error)?)
            } else if let Some(value) = line.strip_prefix("assert:") {
                ScriptStep::Assert(value.to_string())
            } else if let Some(value) = line.strip_prefix("screenshot:") {
                ScriptStep::Screenshot(value.to_string())
            } else {
                return Err(script_error(format!("Invalid command: {}", line)));
            };

            steps.push(step);
        }

        Ok(TestRunner {
            script: TestScript { steps },
            overwrite_mode: false,
            screenshot_base_dir: None,
            screenshot_size: (80, 16),
        })
    }

    pub fn run<L: DirectoryLister>(&self, app: &mut App<L>) -> TestResult {
        let start_time = Instant::now();
        let mut events_processed = 0;
        let mut assertions_passed = 0;
        let mut assertions_failed = 0;
        let mut errors = Vec::new();

        log::info!("🧪 Starting test run with {} steps", self.script.steps.len());

        for (index, step) in self.script.steps.iter().enumerate() {
            log::debug!("🧪 Executing step {}: {:?}", index, step);

            match step {
                ScriptStep::Input(command) => {
                    for key in command.key_events() {
                        app.handle_key(key);
                        events_processed += 1;
                    }
                }
                ScriptStep::Assert(assertion) => match self.evaluate_assertion(app, assertion) {
                    Ok(true) => {
                        assertions_passed += 1;
                        log::debug!("🧪 Assertion passed: {}", assertion);
                    }
                    Ok(false) => {
                        assertions_failed += 1;
                        errors.push(format!(
                            "Assertion failed: {} (inserted_path={:?}, candidates={:?})",
                            assertion,
                            app.engine.state().inserted_path,
                            app.engine.candidates()
                        ));
                    }
                    Err(e) => {
                        assertions_failed += 1;
                        errors.push(format!("Assertion error: {}", e));
                    }
                },
                ScriptStep::Screenshot(filename) => {
                    if let Err(e) = self.take_screenshot(app, filename) {
                        errors.push(format!("Screenshot failed: {}", e));
                    }
                }
            }
        }

        let duration = start_time.elapsed();
        log::info!("🧪 Test run completed in {:?}", duration);

        let success = assertions_failed == 0 && errors.is_empty();
        TestResult {
            duration,
            events_processed,
            assertions_passed,
            assertions_failed,
            errors,
            success,
        }
    }

    pub fn evaluate_assertion<L: DirectoryLister>(
        &self,
        app: &App<L>,
        assertion: &str,
    ) -> std::result::Result<bool, String> {
        let (property, expected) = assertion
            .split_once(':')
            .ok_or("Assertion must be in format 'property:value'")?;

        let state = app.engine.state();
        match property {
            "inserted_path" => Ok(state.inserted_path == expected),
            "buffer" => Ok(app.input.text() == expected),
            "active_index" => {
                let expected_index = expected
                    .parse::<usize>()
                    .map_err(|_| "active_index expects numeric value")?;
                Ok(state.active_index == expected_index)
            }
            "candidates" => Ok(app.engine.candidates().join(",") == expected),
            "candidate_count" => {
                let expected_count = expected
                    .parse::<usize>()
                    .map_err(|_| "candidate_count expects numeric value")?;
                Ok(app.engine.candidates().len() == expected_count)
            }
            "status" => {
                let actual = match &state.status {
                    Status::Idle => "idle",
                    Status::Done(Outcome::Committed(_)) => "committed",
                    Status::Done(Outcome::Cancelled) => "cancelled",
                };
                Ok(actual == expected)
            }
            "result" => match app.outcome() {
                Some(Outcome::Committed(path)) => Ok(path == expected),
                Some(Outcome::Cancelled) | None => Ok(expected == "none" || expected.is_empty()),
            },
            _ => Err(format!("Unknown assertion property: {}", property)),
        }
    }

    fn take_screenshot<L: DirectoryLister>(&self, app: &App<L>, filename: &str) -> Result<()> {
        let (width, height) = self.screenshot_size;
        let content = screenshot::render_to_string(app, width, height)?;

        let final_path = match &self.screenshot_base_dir {
            Some(base_dir) => base_dir.join(filename),
            None => PathBuf::from(filename),
        };

        if self.overwrite_mode {
            std::fs::write(&final_path, content)?;
            log::info!("📸 Screenshot saved to: {}", final_path.display());
            return Ok(());
        }

        match std::fs::read_to_string(&final_path) {
            Ok(existing_content) if existing_content == content => {
                log::info!("✅ Screenshot verification passed: {}", final_path.display());
                Ok(())
            }
            Ok(_) => Err(format!(
                "{} differs from the rendered prompt. Use overwrite mode to update.",
                final_path.display()
            )
            .into()),
            Err(_) => Err(format!(
                "{} does not exist. Use overwrite mode to create.",
                final_path.display()
            )
            .into()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TestResult {
    pub duration: Duration,
    pub events_processed: usize,
    pub assertions_passed: usize,
    pub assertions_failed: usize,
    pub errors: Vec<String>,
    pub success: bool,
}

impl TestResult {
    pub fn print_summary(&self) {
        println!("🧪 Test Results:");
        println!("   Duration: {:?}", self.duration);
        println!("   Events processed: {}", self.events_processed);
        println!("   Assertions passed: {}", self.assertions_passed);
        println!("   Assertions failed: {}", self.assertions_failed);

        if !self.errors.is_empty() {
            println!("   Errors:");
            for error in &self.errors {
                println!("     - {}", error);
            }
        }

        if self.success {
            println!("   Status: ✅ PASSED");
        } else {
            println!("   Status: ❌ FAILED");
        }
    }
}
