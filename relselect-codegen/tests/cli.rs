//! Integration test: drive the `relselect-codegen` binary

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Fixture shared with the root crate's tests
fn input_schema() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../tests/fixtures/database.json")
}

/// Run the binary from an empty directory so no `config/relselect.toml` is picked up
fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_relselect-codegen"))
        .args(args)
        .current_dir(dir)
        .env_remove("RELSELECT__SELECT__SCHEMA_PATH")
        .env_remove("RELSELECT__SELECT__RELATION_POLICY")
        .output()
        .expect("Failed to run relselect-codegen")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_relations_command() {
    let dir = tempfile::tempdir().unwrap();
    let schema = input_schema();
    let output = run(
        dir.path(),
        &["relations", "--schema", schema.to_str().unwrap(), "--table", "Comment"],
    );

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let text = stdout(&output);
    assert!(text.contains("forward:   Comment, User"), "{text}");
    assert!(text.contains("inverse:   Comment"), "{text}");
    assert!(text.contains("available: Comment, User"), "{text}");
}

#[test]
fn test_compile_command_inline_json() {
    let dir = tempfile::tempdir().unwrap();
    let schema = input_schema();
    let selection =
        r#"{"select": {"id": true}, "include": {"UserOrganization": {"select": {"role": true}}}}"#;
    let output = run(
        dir.path(),
        &[
            "compile",
            "--schema",
            schema.to_str().unwrap(),
            "--table",
            "User",
            "--selection",
            selection,
        ],
    );

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(stdout(&output).trim(), "id,UserOrganization(role)");
}

#[test]
fn test_compile_command_strict_rejects_unrelated_table() {
    let dir = tempfile::tempdir().unwrap();
    let schema = input_schema();
    let selection = dir.path().join("selection.json");
    std::fs::write(&selection, r#"{"include": {"Organization": {}}}"#).unwrap();

    let args = [
        "compile",
        "--schema",
        schema.to_str().unwrap(),
        "--table",
        "User",
        "--selection",
        selection.to_str().unwrap(),
    ];

    let permissive = run(dir.path(), &args);
    assert!(permissive.status.success());
    assert_eq!(stdout(&permissive).trim(), "*,Organization(*)");

    let mut strict_args = args.to_vec();
    strict_args.push("--strict");
    let strict = run(dir.path(), &strict_args);
    assert!(!strict.status.success());
    assert!(String::from_utf8_lossy(&strict.stderr).contains("is not a relation of 'User'"));
}

#[test]
fn test_generate_command_writes_module() {
    let dir = tempfile::tempdir().unwrap();
    let schema = input_schema();
    let out = dir.path().join("generated/schema.rs");
    let output = run(
        dir.path(),
        &[
            "generate",
            "--schema",
            schema.to_str().unwrap(),
            "--output",
            out.to_str().unwrap(),
        ],
    );

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let code = std::fs::read_to_string(&out).unwrap();
    assert!(syn::parse_file(&code).is_ok());
    assert!(stdout(&output).contains("Generated 5 tables"));
}

#[test]
fn test_missing_schema_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["relations", "--table", "User"]);
    assert!(!output.status.success());
}
