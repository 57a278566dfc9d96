use clap::Parser;
use refdata_fixtures::cli::{Args, Command, RecordKind};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command as Process, Output};
use tempfile::TempDir;

fn run_binary(dir: &Path, args: &[&str]) -> std::io::Result<Output> {
    Process::new(env!("CARGO_BIN_EXE_refdata-fixtures"))
        .args(args)
        .current_dir(dir)
        .env_remove("FIXTURES_DIR")
        .env_remove("COUNTRIES_FILE")
        .env_remove("ORG_TYPES_FILE")
        .env_remove("STATE_PROVS_FILE")
        .env("RUST_LOG", "off")
        .output()
}

#[test]
fn test_parse_decode_command() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::try_parse_from([
        "refdata-fixtures",
        "decode",
        "org-type",
        "fixtures/org-types.json",
    ])?;

    match args.command {
        Command::Decode { kind, path } => {
            assert_eq!(kind, RecordKind::OrgType);
            assert_eq!(path, PathBuf::from("fixtures/org-types.json"));
        }
        other => panic!("unexpected command: {:?}", other),
    }
    assert!(args.fixtures_dir.is_none());

    Ok(())
}

#[test]
fn test_fixtures_dir_is_global() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::try_parse_from(["refdata-fixtures", "check", "--fixtures-dir", "/tmp/fx"])?;

    assert!(matches!(args.command, Command::Check));
    assert_eq!(args.fixtures_dir.as_deref(), Some("/tmp/fx"));

    Ok(())
}

#[test]
fn test_unknown_kind_is_rejected() {
    assert!(Args::try_parse_from(["refdata-fixtures", "decode", "city", "x.json"]).is_err());
}

#[test]
fn test_check_fails_on_dangling_parent() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    fs::write(
        temp_dir.path().join("org-types.json"),
        r#"[{"id":1,"name":"A","parent_org_type_id":9}]"#,
    )?;
    let dir = temp_dir.path().to_string_lossy().to_string();

    let output = run_binary(temp_dir.path(), &["check", "--fixtures-dir", &dir])?;
    let stdout = String::from_utf8(output.stdout)?;
    let stderr = String::from_utf8(output.stderr)?;

    assert!(!output.status.success());
    assert!(
        stdout.contains("OrgType 1: parentOrgTypeId = 9 does not resolve"),
        "{}",
        stdout
    );
    assert!(stderr.contains("1 dangling reference(s)"), "{}", stderr);

    Ok(())
}

#[test]
fn test_check_succeeds_when_references_resolve() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    fs::write(
        temp_dir.path().join("org-types.json"),
        r#"[{"id":1,"name":"A"},{"id":2,"name":"B","parent_org_type_id":1}]"#,
    )?;
    let dir = temp_dir.path().to_string_lossy().to_string();

    let output = run_binary(temp_dir.path(), &["check", "--fixtures-dir", &dir])?;

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)?.contains("All references resolve"));

    Ok(())
}

#[test]
fn test_decode_prints_normalized_records() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    fs::write(
        temp_dir.path().join("org-types.json"),
        r#"[{"id":1,"name":"A","parent_org_type_id":9,"active":true},{"name":"B"}]"#,
    )?;

    let output = run_binary(temp_dir.path(), &["decode", "org-type", "org-types.json"])?;
    assert!(output.status.success());

    let printed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        printed,
        json!([
            { "id": 1, "name": "A", "parentOrgTypeId": 9 },
            { "id": null, "name": "B", "parentOrgTypeId": 0 }
        ])
    );

    Ok(())
}

#[test]
fn test_decode_fails_on_invalid_record() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    fs::write(
        temp_dir.path().join("countries.json"),
        r#"[{"id":"1","code":"US"}]"#,
    )?;

    let output = run_binary(temp_dir.path(), &["decode", "country", "countries.json"])?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    Ok(())
}
