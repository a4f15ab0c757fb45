// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use clap::Parser;

use super::*;

fn parse(args: &[&str]) -> Cli {
    let mut full = vec!["codegenless"];
    full.extend_from_slice(args);
    Cli::parse_from(full)
}

#[tokio::test]
async fn test_unknown_device_is_rejected_at_startup() {
    let cli = parse(&["--device", "Nokia 3310"]);
    let err = Recorder::from_cli(&cli).await.unwrap_err();
    match err {
        RecorderError::UnknownDevice { name, known } => {
            assert_eq!(name, "Nokia 3310");
            assert!(known.contains("Pixel 2"));
        }
        other => panic!("expected unknown device, got {:?}", other),
    }
}

#[tokio::test]
async fn test_invalid_storage_file_is_rejected_at_startup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    tokio::fs::write(&path, "{ nope").await.unwrap();

    let cli = parse(&[&format!("--load-storage={}", path.display())]);
    let err = Recorder::from_cli(&cli).await.unwrap_err();
    assert!(matches!(err, RecorderError::Storage(_)));
}

#[tokio::test]
async fn test_emit_accumulates_script_and_writes_through() {
    let cli = parse(&[]);
    let mut recorder = Recorder::from_cli(&cli).await.unwrap();

    let mut sink = Vec::new();
    recorder.emit(&mut sink, "first ").await.unwrap();
    recorder.emit(&mut sink, "second").await.unwrap();

    assert_eq!(recorder.script(), "first second");
    assert_eq!(String::from_utf8(sink).unwrap(), "first second");
}

#[tokio::test]
async fn test_loaded_storage_is_carried_into_options() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("load.json");
    tokio::fs::write(&path, r#"{ "cookies": [], "origins": [] }"#)
        .await
        .unwrap();

    let load_arg = format!("--load-storage={}", path.display());
    let cli = parse(&[&load_arg]);
    let recorder = Recorder::from_cli(&cli).await.unwrap();

    let preamble = recorder.options.preamble();
    assert!(preamble.contains(&format!("storageState: '{}'", path.display())));
}
