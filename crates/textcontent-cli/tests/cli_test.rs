//! Integration tests for the textcontent CLI.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_textcontent"))
}

#[test]
fn test_basic_stdin() {
    cli()
        .write_stdin("<h1>Title</h1><p>Content</p>")
        .assert()
        .success()
        .stdout("Title\nContent\n");
}

#[test]
fn test_file_input() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("input.html");
    fs::write(&input_path, "<p>Test   content</p><script>ignored()</script>").unwrap();

    cli()
        .arg(input_path.to_str().unwrap())
        .assert()
        .success()
        .stdout("Test content\n");
}

#[test]
fn test_missing_file() {
    cli()
        .arg("/nonexistent/input.html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_selector_prints_each_match() {
    cli()
        .args(["--selector", "li"])
        .write_stdin("<ul><li>one</li><li hidden>two</li><li>three</li></ul>")
        .assert()
        .success()
        .stdout("one\ntwo\nthree\n");
}

#[test]
fn test_invalid_selector() {
    cli()
        .args(["--selector", "li["])
        .write_stdin("<p>x</p>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid selector"));
}

#[test]
fn test_image_options() {
    let html = r#"<p>a <img src="cat.png"> b</p>"#;

    cli()
        .args(["--base-url", "http://example.com/"])
        .write_stdin(html)
        .assert()
        .success()
        .stdout("a http://example.com/cat.png b\n");

    cli()
        .arg("--no-img-to-src")
        .write_stdin(html)
        .assert()
        .success()
        .stdout("a b\n");
}

#[test]
fn test_line_breaks() {
    cli()
        .args(["--line-breaks", "2"])
        .write_stdin("<p>one</p><p>two</p>")
        .assert()
        .success()
        .stdout("one\n\ntwo\n");
}
