//! Rendering reports and driving the command runner

use std::fs;
use std::path::PathBuf;

use apidelta_engine::{DiffConfig, ModuleInput, ModuleReport, diff_module};
use apidelta_runtime::{Cli, Format, render_json, render_text, run};
use clap::Parser;

const OLD: &str = "public struct T {\n  public func f(x: Int)\n  public func g(a: Int) -> Void\n}\n";
const NEW: &str = "public struct T {\n  public func f(x: Int, y: Int)\n}\npublic var version: String\n";

fn report() -> ModuleReport {
    diff_module(
        &ModuleInput::new("Lib", OLD),
        &ModuleInput::new("Lib", NEW),
        &DiffConfig::default(),
    )
    .unwrap()
}

fn write_pair(tag: &str) -> (PathBuf, PathBuf) {
    let dir = std::env::temp_dir().join(format!("apidelta-it-{tag}-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let old = dir.join("old.swiftinterface");
    let new = dir.join("new.swiftinterface");
    fs::write(&old, OLD).unwrap();
    fs::write(&new, NEW).unwrap();
    (old, new)
}

#[test]
fn text_groups_by_path() {
    let text = render_text(&report());
    let top = text.find("(top level)\n  + public var version: String").unwrap();
    let t = text.find("\nT\n").unwrap();
    assert!(top < t);
    assert!(text.contains("  - public func g(a: Int) -> Void\n"));
    assert!(text.contains("  ~ public func f(x: Int)\n    -> public func f(x: Int, y: Int)\n"));
    assert!(text.contains("      * Added parameter `y: Int`\n"));
}

#[test]
fn json_round_trips_through_serde() {
    let json = render_json(&report()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let changes = value["changes"].as_array().unwrap();
    assert_eq!(changes.len(), 3);
    let kinds: Vec<_> = changes.iter().map(|c| c["change"].as_str().unwrap()).collect();
    assert_eq!(kinds, vec!["modification", "removal", "addition"]);
    assert_eq!(changes[0]["field_diffs"][0], "Added parameter `y: Int`");
    assert_eq!(changes[0]["parent_path"], "T");
}

#[test]
fn runner_reads_files_and_renders_text() {
    let (old, new) = write_pair("text");
    let cli = Cli::parse_from([
        "apidelta",
        "--module",
        "Lib",
        old.to_str().unwrap(),
        new.to_str().unwrap(),
    ]);
    assert_eq!(cli.format, Format::Text);
    let output = run(&cli).unwrap();
    assert!(output.starts_with("Module Lib: 1 addition, 1 removal, 1 modification\n"));
}

#[test]
fn runner_honours_raw_flags() {
    let (old, new) = write_pair("raw");
    let cli = Cli::parse_from([
        "apidelta",
        "-m",
        "Lib",
        "-f",
        "json",
        "--no-consolidate",
        "--sequential",
        old.to_str().unwrap(),
        new.to_str().unwrap(),
    ]);
    let output = run(&cli).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["changes"].as_array().map(Vec::len), Some(4));
}
