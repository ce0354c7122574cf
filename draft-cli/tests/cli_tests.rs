#![allow(clippy::unwrap_used)]
//! End-to-end tests for the `drafts` subcommands.
//!
//! Each test parses a real argument vector and runs it against files in a
//! temporary directory, capturing command output in memory.

use std::fs;
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use draft_cli::cli::{Cli, execute};
use serde_json::Value;
use tempfile::TempDir;

const PETSTORE_JSON: &str = r#"{
  "openapi": "3.0.0",
  "info": { "title": "Petstore", "description": "All the pets" },
  "paths": {}
}"#;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

async fn run(args: &[&str]) -> Result<String> {
    let mut argv = vec!["drafts", "--no-color"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv)?;
    let mut out = Vec::new();
    execute(cli, &mut out).await?;
    Ok(String::from_utf8(out).unwrap())
}

async fn run_json(args: &[&str]) -> Value {
    let out = run(args).await.unwrap();
    serde_json::from_str(&out).unwrap()
}

// detect

#[tokio::test]
async fn test_detect_directory_json_report() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "petstore.json", PETSTORE_JSON);
    write(
        tmp.path(),
        "events.yaml",
        "asyncapi: 2.0.0\ninfo:\n  title: Events\n",
    );
    write(tmp.path(), "list.json", "[1, 2, 3]");
    write(tmp.path(), "notes.yaml", "just some words");

    let dir = tmp.path().to_str().unwrap();
    let report = run_json(&["detect", dir, "--json"]).await;

    assert_eq!(report["scanned_files"], 4);
    assert_eq!(report["undetected_files"], 1);
    assert_eq!(report["ok"], false);

    let detections = report["detections"].as_array().unwrap();
    let petstore = detections
        .iter()
        .find(|d| d["file"].as_str().unwrap().ends_with("petstore.json"))
        .unwrap();
    assert_eq!(petstore["result"]["dialect"], "openapi");
    assert_eq!(petstore["result"]["version"], "3.0.2");
    assert_eq!(petstore["result"]["name"], "Petstore");

    let list = detections
        .iter()
        .find(|d| d["file"].as_str().unwrap().ends_with("list.json"))
        .unwrap();
    assert_eq!(list["result"]["syntaxFamily"], "json");
    assert_eq!(list["result"]["dialect"], "avro");
}

#[tokio::test]
async fn test_detect_human_output() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "petstore.json", PETSTORE_JSON);

    let out = run(&["detect", tmp.path().to_str().unwrap()]).await.unwrap();
    assert!(out.contains("DRAFT CONTENT DETECTION"), "got: {out}");
    assert!(out.contains("petstore.json"), "got: {out}");
}

#[tokio::test]
async fn test_detect_strict_fails_on_undetected() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "notes.yaml", "just a string");

    let err = run(&["detect", tmp.path().to_str().unwrap(), "--strict"])
        .await
        .unwrap_err();
    assert!(err.to_string().contains("1 file(s) undetected"), "got: {err}");
}

#[tokio::test]
async fn test_detect_exclude_pattern() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "petstore.json", PETSTORE_JSON);
    write(tmp.path(), "broken.json", "not json at all {");

    let dir = tmp.path().to_str().unwrap();
    let report = run_json(&["detect", dir, "-e", "broken.json", "--json", "--strict"]).await;
    assert_eq!(report["scanned_files"], 1);
    assert_eq!(report["ok"], true);
}

#[tokio::test]
async fn test_detect_missing_path() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nope");
    let err = run(&["detect", missing.to_str().unwrap()]).await.unwrap_err();
    assert!(err.to_string().contains("does not exist"), "got: {err}");
}

// import

#[tokio::test]
async fn test_import_detected_openapi() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "petstore.json", PETSTORE_JSON);
    let file = tmp.path().join("petstore.json");

    let request = run_json(&["import", "--file", file.to_str().unwrap()]).await;

    assert_eq!(request["draft"]["type"], "OPENAPI");
    assert_eq!(request["draft"]["name"], "Petstore");
    assert_eq!(request["draft"]["summary"], "All the pets");
    assert_eq!(request["draft"]["context"]["type"], "file");
    assert_eq!(
        request["draft"]["context"]["file"]["fileName"],
        "petstore.json"
    );
    assert_eq!(request["content"]["contentType"], "application/json");
    assert_eq!(request["content"]["data"], PETSTORE_JSON);
}

#[tokio::test]
async fn test_import_undetected_needs_type_and_name() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "notes.txt", "hello");
    let file = tmp.path().join("notes.txt");
    let file = file.to_str().unwrap();

    let err = run(&["import", "--file", file]).await.unwrap_err();
    assert!(format!("{err:#}").contains("Draft name is required"), "got: {err:#}");

    let err = run(&["import", "--file", file, "--name", "Notes"])
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("Draft type is required"), "got: {err:#}");

    let request = run_json(&["import", "--file", file, "--name", "Notes", "--type", "avro"]).await;
    assert_eq!(request["draft"]["type"], "AVRO");
    assert_eq!(request["draft"]["summary"], "");
    assert_eq!(request["content"]["contentType"], "application/json");
}

#[tokio::test]
async fn test_import_overrides_detected_fields() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "petstore.json", PETSTORE_JSON);
    let file = tmp.path().join("petstore.json");

    let request = run_json(&[
        "import",
        "--file",
        file.to_str().unwrap(),
        "--name",
        "Pet Store",
        "--summary",
        "Renamed",
    ])
    .await;
    assert_eq!(request["draft"]["name"], "Pet Store");
    assert_eq!(request["draft"]["summary"], "Renamed");
    assert_eq!(request["draft"]["type"], "OPENAPI");
}

#[tokio::test]
async fn test_import_empty_file() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "empty.json", "  \n");
    let file = tmp.path().join("empty.json");

    let err = run(&["import", "--file", file.to_str().unwrap(), "--name", "x"])
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("Draft content is empty"), "got: {err:#}");
}

#[tokio::test]
async fn test_import_file_too_large() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "petstore.json", PETSTORE_JSON);
    let file = tmp.path().join("petstore.json");

    let err = run(&["import", "--file", file.to_str().unwrap(), "--max-size", "10"])
        .await
        .unwrap_err();
    assert!(err.to_string().contains("[scan error]"), "got: {err}");
}

// list

fn write_drafts(dir: &Path) -> String {
    let drafts = serde_json::json!([
        { "id": "1", "name": "Orders", "summary": "Order events", "type": "ASYNCAPI" },
        { "id": "2", "name": "petstore", "summary": "", "type": "OPENAPI" },
        { "id": "3", "name": "Accounts", "summary": "User accounts", "type": "AVRO",
          "createdOn": "2024-05-01T10:00:00Z" }
    ]);
    let path = dir.join("drafts.json");
    fs::write(&path, drafts.to_string()).unwrap();
    path.to_str().unwrap().to_owned()
}

fn names(page: &Value) -> Vec<&str> {
    page["drafts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_list_sorted_ascending() {
    let tmp = TempDir::new().unwrap();
    let drafts = write_drafts(tmp.path());

    let page = run_json(&["list", &drafts, "--json"]).await;
    assert_eq!(page["count"], 3);
    assert_eq!(names(&page), vec!["Accounts", "Orders", "petstore"]);
}

#[tokio::test]
async fn test_list_filter_descending_paged() {
    let tmp = TempDir::new().unwrap();
    let drafts = write_drafts(tmp.path());

    let page = run_json(&["list", &drafts, "--descending", "--per-page", "2", "--json"]).await;
    assert_eq!(page["count"], 3);
    assert_eq!(names(&page), vec!["petstore", "Orders"]);

    let page = run_json(&["list", &drafts, "-f", "ACCOUNT", "--json"]).await;
    assert_eq!(names(&page), vec!["Accounts"]);
}

#[tokio::test]
async fn test_list_human_output() {
    let tmp = TempDir::new().unwrap();
    let drafts = write_drafts(tmp.path());

    let out = run(&["list", &drafts, "--per-page", "2", "--page", "2"])
        .await
        .unwrap();
    assert!(out.contains("petstore"), "got: {out}");
    assert!(out.contains("(Design or schema with no summary)"), "got: {out}");
    assert!(out.contains("Page 2 of 2 (3 drafts)"), "got: {out}");
}

#[tokio::test]
async fn test_list_no_matches() {
    let tmp = TempDir::new().unwrap();
    let drafts = write_drafts(tmp.path());

    let out = run(&["list", &drafts, "-f", "zzz"]).await.unwrap();
    assert!(out.contains("No drafts found."), "got: {out}");
    assert!(out.contains("Page 1 of 1 (0 drafts)"), "got: {out}");
}

#[tokio::test]
async fn test_list_invalid_file() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "drafts.json", "{\"not\": \"an array\"}");
    let path = tmp.path().join("drafts.json");

    let err = run(&["list", path.to_str().unwrap()]).await.unwrap_err();
    assert!(err.to_string().contains("Invalid drafts file"), "got: {err}");
}
