use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, is_match};

fn cmd() -> Command {
    Command::cargo_bin("horo").unwrap()
}

#[test]
fn once_prints_a_full_snapshot() {
    cmd()
        .arg("--once")
        .assert()
        .success()
        .stdout(is_match(r"^\d{2}:\d{2}:\d{2} (AM|PM)\n").unwrap())
        .stdout(is_match(r"(Sunday|Monday|Tuesday|Wednesday|Thursday|Friday|Saturday), ").unwrap())
        .stdout(contains("Day").or(contains("Night")))
        .stdout(is_match(r"(Mobile|Tablet|Desktop)\n\d{4}\n$").unwrap());
}

#[test]
fn once_honors_a_timezone_override() {
    cmd()
        .args(["--once", "--timezone", "Asia/Tokyo"])
        .assert()
        .success()
        .stdout(contains("Asia/Tokyo"));
}

#[test]
fn unknown_timezone_fails_with_its_name() {
    cmd()
        .args(["--once", "--timezone", "Nowhere/Null"])
        .assert()
        .failure()
        .stderr(contains("unknown timezone: Nowhere/Null"));
}
