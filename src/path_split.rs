//! Splitting typed paths into a resolved head and a search tail, and the
//! lexical joins used when completing and committing.

use std::path::MAIN_SEPARATOR;

/// Split a typed path into `(head, tail)`.
///
/// The head is every segment except the last one and is treated as the
/// directory to list; the tail is the fragment still being typed. A final
/// segment of exactly `.` counts as complete: the tail is empty and the head
/// keeps the marker. `..` is not special-cased and becomes the tail like any
/// other fragment.
pub fn split_path(path: &str) -> (String, String) {
    let mut segments: Vec<&str> = path.split(MAIN_SEPARATOR).collect();

    let tail = match segments.last() {
        Some(&".") => String::new(),
        _ => segments.pop().unwrap_or_default().to_string(),
    };

    (segments.join(&MAIN_SEPARATOR.to_string()), tail)
}

/// Text placed in the edit buffer after completing `name` under `head`.
/// Always ends with a separator so the next keystroke starts a new segment.
pub fn join_completion(head: &str, name: &str) -> String {
    if head.is_empty() {
        normalize(&format!("{name}{MAIN_SEPARATOR}"))
    } else {
        normalize(&format!("{head}{MAIN_SEPARATOR}{name}{MAIN_SEPARATOR}"))
    }
}

/// Join a typed path onto the base directory.
///
/// The typed text is always appended, even when it starts with a separator.
/// The result is normalized and carries no trailing separator.
pub fn join_under(base: &str, relative: &str) -> String {
    let joined = if relative.is_empty() {
        normalize(base)
    } else {
        normalize(&format!("{base}{MAIN_SEPARATOR}{relative}"))
    };

    let trimmed = joined.trim_end_matches(MAIN_SEPARATOR);
    if trimmed.is_empty() {
        // Root stays as a lone separator
        joined[..MAIN_SEPARATOR.len_utf8()].to_string()
    } else {
        trimmed.to_string()
    }
}

/// Lexically normalize a path: drop empty and `.` segments and resolve `..`
/// against the previous segment. A trailing separator is preserved.
pub fn normalize(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let absolute = path.starts_with(MAIN_SEPARATOR);
    let trailing = path.ends_with(MAIN_SEPARATOR);

    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split(MAIN_SEPARATOR) {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|last| *last != "..") {
                    segments.pop();
                } else if !absolute {
                    segments.push("..");
                }
            }
            other => segments.push(other),
        }
    }

    let mut normalized = segments.join(&MAIN_SEPARATOR.to_string());
    if absolute {
        normalized.insert(0, MAIN_SEPARATOR);
    }
    if normalized.is_empty() {
        normalized.push('.');
    }
    if trailing && !normalized.ends_with(MAIN_SEPARATOR) {
        normalized.push(MAIN_SEPARATOR);
    }
    normalized
}
