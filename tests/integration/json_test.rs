use serial_test::serial;

use crate::cli_test::onepassword_cmd;
use crate::common::FakeOp;

#[test]
#[serial]
fn test_value_json() {
    let fake = FakeOp::new();
    fake.reply("item-get", r#"{"id":"username","value":"bar@example.com"}"#);

    let output = onepassword_cmd(&fake)
        .args(["username", "Foo", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["vault"], "Private");
    assert_eq!(json["item"], "Foo");
    assert_eq!(json["field"], "username");
    assert_eq!(json["value"], "bar@example.com");
}

#[test]
#[serial]
fn test_uuid_json() {
    let fake = FakeOp::new();
    fake.reply("item-get", r#"{"id":"some_valid_uuid"}"#);

    let output = onepassword_cmd(&fake)
        .args(["uuid", "Foo", "--json"])
        .output()
        .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["id"], "some_valid_uuid");
}

#[test]
#[serial]
fn test_version_json() {
    let fake = FakeOp::new();
    fake.reply("version", "2.24.0-beta.01\n");

    let output = onepassword_cmd(&fake)
        .args(["version", "--json"])
        .output()
        .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["version"], "2.24.0-beta.01");
    assert_eq!(json["major"], 2);
    assert_eq!(json["minor"], 24);
    assert_eq!(json["prerelease"], true);
}

#[test]
#[serial]
fn test_error_envelope_json() {
    let fake = FakeOp::new();
    fake.reply("item-get", r#"{"nonexistent":1}"#);

    let output = onepassword_cmd(&fake)
        .args(["uuid", "Foo", "--json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], "value_not_found");
    assert_eq!(json["error"]["exit_code"], 3);
}
