//! Hygiene — source-scan budgets for the doctree crate.
//!
//! Path handling must tolerate any listing the server sends, so nothing in
//! `src/` may panic or swallow a result. Every budget is zero.

use std::fs;
use std::path::Path;

/// `(pattern, budget)` pairs checked against production sources.
const BUDGETS: &[(&str, usize)] = &[
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("todo!(", 0),
    ("let _ =", 0),
    (".ok()", 0),
    ("#[allow(dead_code)]", 0),
];

/// Production `.rs` files under `src/` as `(path, content)`, skipping `*_test.rs`.
fn source_files() -> Vec<(String, String)> {
    let mut out = Vec::new();
    collect(Path::new("src"), &mut out);
    out
}

fn collect(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

#[test]
fn sources_are_found() {
    assert!(
        source_files().iter().any(|(p, _)| p.ends_with("lib.rs")),
        "hygiene scan must run from the doctree crate root"
    );
}

#[test]
fn pattern_budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for &(pattern, budget) in BUDGETS {
        let hits: Vec<String> = files
            .iter()
            .filter_map(|(path, content)| {
                let n = content.lines().filter(|l| l.contains(pattern)).count();
                (n > 0).then(|| format!("  {path}: {n}"))
            })
            .collect();
        let count: usize = files
            .iter()
            .map(|(_, c)| c.lines().filter(|l| l.contains(pattern)).count())
            .sum();
        if count > budget {
            failures.push(format!("`{pattern}` found {count}, max {budget}\n{}", hits.join("\n")));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}
