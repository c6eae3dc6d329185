use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn tally(store_dir: &Path, user: &str) -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.arg("--store-dir").arg(store_dir).arg("--user").arg(user);
    cmd
}

/// Pull the assigned item id out of the create confirmation line.
fn created_id(stdout: &[u8]) -> String {
    let text = String::from_utf8_lossy(stdout);
    let start = text.find("ID ").expect("create output should report an ID") + 3;
    let rest = &text[start..];
    let end = rest.find('.').expect("ID should be followed by a period");
    rest[..end].to_string()
}

#[test]
fn full_ledger_flow() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = temp_dir.path();

    // alice creates an item
    let assert = tally(store, "alice")
        .args(["create", "Bolts", "100", "0.50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("successfully created"));
    let id = created_id(&assert.get_output().stdout);

    // add 50 -> quantity 150
    tally(store, "alice")
        .args(["log", &id, "add", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New quantity: 150"))
        .stdout(predicate::str::contains("Transaction logged successfully."));

    // removing more than available is rejected and changes nothing
    tally(store, "alice")
        .args(["log", &id, "remove", "200"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Not enough quantity available for Bolts.",
        ));

    tally(store, "alice")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quantity: 150"));

    // delete, then the item is gone
    tally(store, "alice")
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item deleted: Bolts"));

    tally(store, "alice")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No items found."));
}

#[test]
fn foreign_items_look_missing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = temp_dir.path();

    let assert = tally(store, "alice")
        .args(["create", "Washers", "10", "0.25"])
        .assert()
        .success();
    let id = created_id(&assert.get_output().stdout);

    // bob can neither log against nor delete alice's item
    tally(store, "bob")
        .args(["log", &id, "add", "5"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Item not found or you do not have permission.",
        ));

    tally(store, "bob")
        .args(["delete", &id])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Item not found."));

    // the item is untouched for its owner
    tally(store, "alice")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quantity: 10"));
}

#[test]
fn invalid_action_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = temp_dir.path();

    let assert = tally(store, "alice")
        .args(["create", "Nuts", "10", "0.10"])
        .assert()
        .success();
    let id = created_id(&assert.get_output().stdout);

    tally(store, "alice")
        .args(["log", &id, "discard", "5"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Invalid action. Please specify 'add' or 'remove'.",
        ));
}

#[test]
fn invalid_create_arguments_persist_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = temp_dir.path();

    tally(store, "alice")
        .args(["create", "Widget", "-5", "9.99"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Quantity must be a positive integer."));

    tally(store, "alice")
        .args(["create", "Widget", "10", "0"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Price must be a positive number."));

    tally(store, "alice")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No items found."));
}

#[test]
fn default_user_comes_from_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = temp_dir.path();

    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.arg("--store-dir")
        .arg(store)
        .args(["config", "user", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Default user set to alice."));

    // no --user flag needed once configured
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.arg("--store-dir")
        .arg(store)
        .args(["create", "Bolts", "5", "1.00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("successfully created"));

    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.arg("--store-dir")
        .arg(store)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Owner: alice"));
}
