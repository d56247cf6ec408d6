use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;

use crate::cli_test::onepassword_cmd;
use crate::common::FakeOp;

#[test]
#[serial]
fn test_exit_code_cli_not_found() {
    let fake = FakeOp::new();
    let missing = fake.path().join("missing-op");

    let mut cmd = Command::cargo_bin("onepassword").unwrap();
    let output = cmd
        .env("ONEPASSWORD_CLI_PATH", &missing)
        .env("ONEPASSWORD_CONFIG", fake.config_path())
        .args(["uuid", "Foo"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(127)); // CliNotFound
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("1password-cli installed"));
}

#[test]
#[serial]
fn test_exit_code_value_not_found() {
    let fake = FakeOp::new();
    fake.reply("item-get", r#"{"other_key":"x"}"#);

    let output = onepassword_cmd(&fake)
        .args(["value", "Foo", "bar"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3)); // ValueNotFound
}

#[test]
#[serial]
fn test_exit_code_json_error() {
    let fake = FakeOp::new();
    fake.reply("items-list", "Invalid JSON");

    let output = onepassword_cmd(&fake).arg("list").output().unwrap();
    assert_eq!(output.status.code(), Some(4)); // Json
}

#[test]
#[serial]
fn test_exit_code_runtime_error() {
    let fake = FakeOp::new();
    fake.fail("document-get", "[ERROR] \"nope\" isn't a document");

    onepassword_cmd(&fake)
        .args(["document", "nope"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("isn't a document"));
}

#[test]
#[serial]
fn test_malformed_config_file() {
    let fake = FakeOp::new();
    std::fs::write(fake.config_path(), "[vault\n").unwrap();

    onepassword_cmd(&fake)
        .arg("vaults")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
#[serial]
fn test_empty_vault_rejected() {
    let fake = FakeOp::new();

    onepassword_cmd(&fake)
        .args(["uuid", "Foo", "--vault", ""])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Vault name must not be empty"));
    assert!(fake.queries().is_empty());
}
