#![cfg(feature = "cli")]

use assert_cmd::Command;

fn fruit_lookup() -> Command {
    Command::cargo_bin("fruit-lookup").unwrap()
}

#[test]
fn test_prints_name_for_index() {
    fruit_lookup().arg("3").assert().success().stdout("mango\n");
    fruit_lookup().arg("0").assert().success().stdout("apple\n");
}

#[test]
fn test_missing_argument_exits_with_one() {
    fruit_lookup().assert().failure().code(1).stdout("");
}

#[test]
fn test_extra_argument_exits_with_one() {
    fruit_lookup().args(["1", "2"]).assert().failure().code(1).stdout("");
}

#[test]
fn test_non_integer_exits_with_one() {
    fruit_lookup().arg("mango").assert().failure().code(1);
}

#[test]
fn test_out_of_range_reports_error() {
    fruit_lookup().arg("10").assert().failure().code(2).stdout("");
    fruit_lookup().arg("-1").assert().failure().code(2).stdout("");
}

#[test]
fn test_generates_completions() {
    let output = fruit_lookup().args(["--completions", "bash"]).output().unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("fruit-lookup"));
}
