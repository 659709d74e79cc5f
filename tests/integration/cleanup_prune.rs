use std::{path::PathBuf, process::Command};

use anyhow::Result;
use httpmock::{prelude::*, Method::HEAD};
use serde_json::Value;
use tempfile::tempdir;

use elrond_assets_tools::{
    cleanup::{prune_network, run_cleanup, CleanupConfig, HttpAssetRegistry, LookupMode},
    cli::CleanupProfile,
};

use crate::common::{create_token_dirs, write_cleanup_config, BINARY_PATH};

async fn mock_known_assets(server: &MockServer) {
    server
        .mock_async(|when, then| {
            when.method(HEAD).path("/tokens/TOKEN-abcd");
            then.status(200);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/collections/COLL-xyz1");
            then.status(200).json_body(serde_json::json!({ "collection": "COLL-xyz1" }));
        })
        .await;
}

#[tokio::test]
async fn only_unknown_assets_are_removed() -> Result<()> {
    let server = MockServer::start_async().await;
    mock_known_assets(&server).await;
    let ghost_lookups = server
        .mock_async(|when, then| {
            when.path_contains("GHOST-0000");
            then.status(404);
        })
        .await;

    let temp = tempdir()?;
    create_token_dirs(temp.path(), &["TOKEN-abcd", "COLL-xyz1", "GHOST-0000"])?;

    let registry = HttpAssetRegistry::new(&server.base_url(), LookupMode::Collections)?;
    let report = prune_network(temp.path(), &registry, false).await?;

    assert_eq!(report.removed, vec!["GHOST-0000".to_string()]);
    assert_eq!(report.kept, 2);
    assert!(temp.path().join("TOKEN-abcd").exists());
    assert!(temp.path().join("COLL-xyz1").exists());
    assert!(!temp.path().join("GHOST-0000").exists());
    ghost_lookups.assert_hits_async(2).await;
    Ok(())
}

#[tokio::test]
async fn reserved_characters_stay_in_the_looked_up_identifier() -> Result<()> {
    let server = MockServer::start_async().await;
    let truncated_lookup = server
        .mock_async(|when, then| {
            when.method(HEAD).path("/tokens/TOKEN");
            then.status(200);
        })
        .await;

    let temp = tempdir()?;
    create_token_dirs(temp.path(), &["TOKEN#old"])?;

    let registry = HttpAssetRegistry::new(&server.base_url(), LookupMode::Collections)?;
    let report = prune_network(temp.path(), &registry, false).await?;

    assert_eq!(report.removed, vec!["TOKEN#old".to_string()]);
    assert_eq!(report.kept, 0);
    assert!(!temp.path().join("TOKEN#old").exists());
    truncated_lookup.assert_hits_async(0).await;
    Ok(())
}

#[tokio::test]
async fn run_cleanup_resolves_roots_against_assets_root() -> Result<()> {
    let server = MockServer::start_async().await;
    mock_known_assets(&server).await;

    let temp = tempdir()?;
    let tokens = temp.path().join("devnet/tokens");
    create_token_dirs(&tokens, &["TOKEN-abcd", "GHOST-0000"])?;
    let config_path = temp.path().join("cleanup.toml");
    write_cleanup_config(&config_path, "devnet/tokens", &server.base_url())?;

    let config = CleanupConfig::load_from_path(config_path)?;
    let profile = CleanupProfile {
        config_path: None,
        assets_root: temp.path().to_path_buf(),
        networks: vec!["mocknet".into()],
        dry_run: false,
    };
    let reports = run_cleanup(&profile, &config).await?;

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].network, "mocknet");
    assert_eq!(reports[0].removed, vec!["GHOST-0000".to_string()]);
    assert!(tokens.join("TOKEN-abcd").exists());
    Ok(())
}

#[tokio::test]
async fn network_failure_aborts_the_run() -> Result<()> {
    let temp = tempdir()?;
    let tokens = temp.path().join("tokens");
    create_token_dirs(&tokens, &["TOKEN-abcd"])?;

    // Nothing listens on port 9 (discard) on a test host.
    let registry = HttpAssetRegistry::new("http://127.0.0.1:9", LookupMode::Collections)?;
    let error = prune_network(&tokens, &registry, false)
        .await
        .expect_err("unreachable API must fail");

    assert!(error.to_string().contains("request to"), "{error:#}");
    assert!(tokens.join("TOKEN-abcd").exists());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn binary_prints_json_summary() -> Result<()> {
    let server = MockServer::start_async().await;
    mock_known_assets(&server).await;

    let temp = tempdir()?;
    create_token_dirs(&temp.path().join("tokens"), &["COLL-xyz1", "GHOST-0000"])?;
    let config_path: PathBuf = temp.path().join("cleanup.toml");
    write_cleanup_config(&config_path, "tokens", &server.base_url())?;

    let output = Command::new(BINARY_PATH)
        .arg("cleanup")
        .arg("--config")
        .arg(&config_path)
        .arg("--assets-root")
        .arg(temp.path())
        .arg("--dry-run")
        .output()?;

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let payload: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(payload["status"], "planned");
    assert_eq!(payload["removed_total"], 1);
    assert_eq!(payload["networks"][0]["removed"][0], "GHOST-0000");
    assert!(temp.path().join("tokens/GHOST-0000").exists());
    Ok(())
}
