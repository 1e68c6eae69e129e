//! Hygiene — enforces coding standards at test time
//!
//! Scans the crate's production sources for antipatterns. Each pattern has a
//! budget (ideally zero). To add one you have to remove an existing one
//! first; budgets never grow.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

// Panics crash the wasm instance.
const UNWRAP: Budget = Budget { pattern: ".unwrap()", max: 0, why: "propagate with ?" };
const EXPECT: Budget = Budget { pattern: ".expect(", max: 0, why: "propagate with ?" };
const PANIC: Budget = Budget { pattern: "panic!(", max: 0, why: "return an Error" };
const UNREACHABLE: Budget = Budget { pattern: "unreachable!(", max: 0, why: "make the state unrepresentable" };
const TODO: Budget = Budget { pattern: "todo!(", max: 0, why: "implement it" };
const UNIMPLEMENTED: Budget = Budget { pattern: "unimplemented!(", max: 0, why: "implement it" };

// Silent loss.
const SILENT_DISCARD: Budget = Budget { pattern: "let _ =", max: 0, why: "inspect or propagate the result" };
const DOT_OK: Budget = Budget { pattern: ".ok()", max: 0, why: "inspect or propagate the error" };

// Style / structure.
const ALLOW_DEAD_CODE: Budget = Budget { pattern: "#[allow(dead_code)]", max: 0, why: "delete it" };
const PRINTLN: Budget = Budget { pattern: "println!(", max: 0, why: "log through tracing" };
const CONSOLE: Budget = Budget { pattern: "web_sys::console", max: 0, why: "log through tracing" };

/// Only these modules may touch the browser.
const BROWSER_MODULES: &[&str] = &["web.rs", "engine.rs"];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
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

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter().map(|(path, count)| format!("  {path}: {count}")).collect::<Vec<_>>().join("\n")
}

fn check(budget: &Budget) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");
    let found = hits(&files, budget.pattern);
    let count: usize = found.iter().map(|(_, c)| c).sum();
    assert!(
        count <= budget.max,
        "{} budget exceeded: found {count}, max {} ({}).\n{}",
        budget.pattern,
        budget.max,
        budget.why,
        format_hits(&found)
    );
}

#[test]
fn unwrap_budget() {
    check(&UNWRAP);
}

#[test]
fn expect_budget() {
    check(&EXPECT);
}

#[test]
fn panic_budget() {
    check(&PANIC);
}

#[test]
fn unreachable_budget() {
    check(&UNREACHABLE);
}

#[test]
fn todo_budget() {
    check(&TODO);
}

#[test]
fn unimplemented_budget() {
    check(&UNIMPLEMENTED);
}

#[test]
fn silent_discard_budget() {
    check(&SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    check(&DOT_OK);
}

#[test]
fn allow_dead_code_budget() {
    check(&ALLOW_DEAD_CODE);
}

#[test]
fn println_budget() {
    check(&PRINTLN);
}

#[test]
fn console_budget() {
    check(&CONSOLE);
}

#[test]
fn browser_types_stay_in_browser_modules() {
    let offenders: Vec<String> = source_files()
        .into_iter()
        .filter(|f| f.content.contains("web_sys"))
        .filter(|f| !BROWSER_MODULES.iter().any(|m| f.path.ends_with(m)))
        .map(|f| f.path)
        .collect();
    assert!(offenders.is_empty(), "web_sys used outside {BROWSER_MODULES:?}:\n  {}", offenders.join("\n  "));
}
