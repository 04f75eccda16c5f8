// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::config::ProducerConfig;

fn config(stages: &[&[&str]]) -> ProducerConfig {
    ProducerConfig {
        stages: stages
            .iter()
            .map(|s| s.iter().map(|a| a.to_string()).collect())
            .collect(),
        workdir: None,
    }
}

#[tokio::test]
async fn test_creates_candidate_directory() {
    let dir = tempfile::tempdir().unwrap();
    let candidate = dir.path().join("tmp");

    Producer::new(config(&[])).produce(&candidate).await.unwrap();
    assert!(candidate.is_dir());
}

#[tokio::test]
async fn test_existing_candidate_directory_is_fine() {
    let dir = tempfile::tempdir().unwrap();

    Producer::new(config(&[])).produce(dir.path()).await.unwrap();
    assert!(dir.path().is_dir());
}

#[tokio::test]
async fn test_stages_run_in_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let marker = dir.path().join("marker");
    let copy = dir.path().join("copy");

    let producer = Producer::new(config(&[
        &["touch", marker.to_str().unwrap()],
        &["cp", marker.to_str().unwrap(), copy.to_str().unwrap()],
    ]));
    producer.produce(dir.path()).await.unwrap();

    // The second stage only succeeds if the first completed before it
    assert!(copy.is_file());
}

#[tokio::test]
async fn test_failing_stage_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let marker = dir.path().join("marker");

    let producer = Producer::new(config(&[
        &["false"],
        &["touch", marker.to_str().unwrap()],
    ]));
    let result = producer.produce(dir.path()).await;

    match result {
        Err(ProducerError::StageFailed { stage, .. }) => assert_eq!(stage, "false"),
        other => panic!("expected StageFailed, got {:?}", other),
    }
    // The later stage never ran
    assert!(!marker.exists());
}

#[tokio::test]
async fn test_unspawnable_stage_is_reported() {
    let dir = tempfile::tempdir().unwrap();

    let producer = Producer::new(config(&[&["goldrun-no-such-tool"]]));
    let result = producer.produce(dir.path()).await;

    assert!(matches!(result, Err(ProducerError::Spawn { .. })));
}

#[tokio::test]
async fn test_empty_stage_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    let producer = Producer::new(config(&[&[]]));
    let result = producer.produce(dir.path()).await;

    assert!(matches!(result, Err(ProducerError::EmptyStage)));
}

#[tokio::test]
async fn test_workdir_is_honored() {
    let dir = tempfile::tempdir().unwrap();
    let workdir = tempfile::tempdir().unwrap();

    let producer = Producer::new(ProducerConfig {
        stages: vec![vec![
            "sh".to_string(),
            "-c".to_string(),
            "touch produced-here".to_string(),
        ]],
        workdir: Some(workdir.path().to_path_buf()),
    });
    producer.produce(dir.path()).await.unwrap();

    assert!(workdir.path().join("produced-here").is_file());
}
