//! End-to-end tests for the `attorder` binary.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn reorders_standard_input() {
    let mut cmd = cargo_bin_cmd!("attorder");
    let _ = cmd
        .args(["-o", "id,class"])
        .write_stdin(r#"<a href="/" class="x" id="y">link</a>"#);
    let _ = cmd
        .assert()
        .success()
        .stdout(r#"<a id="y" class="x" href="/">link</a>"#);
}

#[test]
fn repeated_order_flags_append() {
    let mut cmd = cargo_bin_cmd!("attorder");
    let _ = cmd
        .args(["-o", "id", "--order", "data-.*,", "--stdio"])
        .write_stdin("<p title data-b id data-a>");
    let _ = cmd.assert().success().stdout("<p id data-b data-a title>");
}

#[test]
fn rewrites_files_in_place() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.html");
    let second = dir.path().join("second.html");
    fs::write(&first, "<div b a></div>\n").unwrap();
    fs::write(&second, "<!-- <x z y> -->\n<span id=\"s\" class=\"c\">\n").unwrap();

    let mut cmd = cargo_bin_cmd!("attorder");
    let _ = cmd.args(["-o", "id", "-w"]).arg(&first).arg(&second);
    let _ = cmd.assert().success().stdout("");

    assert_eq!(fs::read_to_string(&first).unwrap(), "<div a b></div>\n");
    assert_eq!(
        fs::read_to_string(&second).unwrap(),
        "<!-- <x z y> -->\n<span id=\"s\" class=\"c\">\n"
    );
}

#[test]
fn failing_file_does_not_stop_the_batch() {
    let dir = TempDir::new().unwrap();
    let broken = dir.path().join("broken.html");
    let good = dir.path().join("good.html");
    fs::write(&broken, "<div class=\"x\"").unwrap();
    fs::write(&good, "<i b a>").unwrap();

    let mut cmd = cargo_bin_cmd!("attorder");
    let _ = cmd.arg("-w").arg(&broken).arg(&good);
    let _ = cmd.assert().failure().code(1).stderr(
        predicate::str::contains("broken.html").and(predicate::str::contains("closing '>'")),
    );

    assert_eq!(fs::read_to_string(&broken).unwrap(), "<div class=\"x\"");
    assert_eq!(fs::read_to_string(&good).unwrap(), "<i a b>");
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let mut cmd = cargo_bin_cmd!("attorder");
    let _ = cmd.arg(dir.path().join("nope.html"));
    let _ = cmd.assert().failure().stderr(
        predicate::str::contains("failed to read").and(predicate::str::contains("nope.html")),
    );
}

#[test]
fn invalid_pattern_is_rejected() {
    let mut cmd = cargo_bin_cmd!("attorder");
    let _ = cmd.args(["-o", "("]).write_stdin("<a>");
    let _ = cmd
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("invalid order pattern"));
}

#[test]
fn duplicate_warning_respects_quiet() {
    let input = "<a x=\"1\" x=\"2\">";

    let mut cmd = cargo_bin_cmd!("attorder");
    let _ = cmd.write_stdin(input);
    let _ = cmd
        .assert()
        .success()
        .stdout("<a x=\"2\" x=\"2\">")
        .stderr(predicate::str::contains("duplicate attribute 'x'"));

    let mut cmd = cargo_bin_cmd!("attorder");
    let _ = cmd.arg("-q").write_stdin(input);
    let _ = cmd.assert().success().stderr("");
}

#[test]
fn tokens_and_tree_dumps() {
    let mut cmd = cargo_bin_cmd!("attorder");
    let _ = cmd.arg("--tokens").write_stdin("<b>");
    let _ = cmd
        .assert()
        .success()
        .stdout(predicate::str::contains("[1:2](identifier \"b\")"));

    let mut cmd = cargo_bin_cmd!("attorder");
    let _ = cmd.arg("--tree").write_stdin("<ul c b>\n<li></li></ul>");
    let _ = cmd.assert().success().stdout(
        predicate::str::contains("<ul b c>").and(predicate::str::contains("  </li>")),
    );
}

#[test]
fn write_without_files_is_an_error() {
    let mut cmd = cargo_bin_cmd!("attorder");
    let _ = cmd.arg("-w").write_stdin("<a>");
    let _ = cmd.assert().failure();
}

#[test]
fn order_patterns_are_not_trimmed() {
    // " id" is a pattern of its own and matches no attribute name
    let mut cmd = cargo_bin_cmd!("attorder");
    let _ = cmd
        .args(["-o", " id,class"])
        .write_stdin("<a id class>");
    let _ = cmd.assert().success().stdout("<a class id>");
}
