//! Hygiene — enforces coding standards at test time
//!
//! Scans the diagram crate's production sources for antipatterns. Every
//! budget is zero: the widget has no fallible operation, so no panic path,
//! silent discard, or dead-code escape hatch is ever justified.

use std::fs;
use std::path::Path;

const BANNED: &[(&str, &str)] = &[
    (".unwrap()", "panics on None/Err"),
    (".expect(", "panics with a message"),
    ("panic!(", "explicit panic"),
    ("unreachable!(", "asserted-unreachable panic"),
    ("todo!(", "unfinished stub"),
    ("unimplemented!(", "unfinished stub"),
    ("let _ =", "silently discards a value"),
    (".ok()", "silently discards an error"),
    ("#[allow(dead_code)]", "hides unused code"),
];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, skipping `*_test.rs` side files.
fn source_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            source_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

#[test]
fn production_sources_are_free_of_banned_patterns() {
    let mut files = Vec::new();
    source_files(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found; run from the crate root");

    let mut violations = Vec::new();
    for file in &files {
        for (lineno, line) in file.content.lines().enumerate() {
            for (pattern, why) in BANNED {
                if line.contains(pattern) {
                    violations.push(format!(
                        "  {}:{}: `{pattern}` ({why})",
                        file.path,
                        lineno + 1
                    ));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "banned patterns in production code:\n{}",
        violations.join("\n")
    );
}
