#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use dir_prompt::app::App;
use dir_prompt::PromptConfig;

/// Directory layout shared by the integration tests:
///
/// ```text
/// .git/
/// docs/
/// notes.txt
/// photos/2023/
/// photos/2024/
/// projects/dir-prompt/src/
/// projects/website/
/// ```
pub fn create_test_tree() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    for dir in [
        ".git",
        "docs",
        "photos/2023",
        "photos/2024",
        "projects/dir-prompt/src",
        "projects/website",
    ] {
        fs::create_dir_all(root.join(dir)).expect("Failed to create directory");
    }
    fs::write(root.join("notes.txt"), "remember the milk").expect("Failed to write file");

    temp_dir
}

pub fn base_path(temp_dir: &TempDir) -> String {
    temp_dir.path().to_string_lossy().to_string()
}

pub fn create_test_app(temp_dir: &TempDir) -> App {
    App::new(PromptConfig::new("Select a directory").with_base_path(base_path(temp_dir)))
}

pub fn join(base: &str, relative: &str) -> String {
    Path::new(base).join(relative).to_string_lossy().to_string()
}
