//! Сквозные тесты бинаря `feed-demo`: короткий прогон с крошечным бюджетом
//! тиков должен завершаться сам и печатать итоговые снимки.

use assert_cmd::Command;
use predicates::prelude::*;

fn feed_demo() -> Command {
    Command::cargo_bin("feed-demo").expect("feed-demo binary")
}

#[test]
fn short_run_prints_reports_and_snapshots() {
    feed_demo()
        .args([
            "--ticks",
            "3",
            "--tick-interval-ms",
            "1",
            "--subscribers",
            "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("producer done: field=ibm ticks_emitted=3"))
        .stdout(predicate::str::contains("producer done: field=apple ticks_emitted=3"))
        .stdout(predicate::str::contains("producer done: field=google ticks_emitted=3"))
        .stdout(predicate::str::contains("final publisher snapshot: apple="))
        .stdout(predicate::str::contains("updates=9"));
}

#[test]
fn fields_file_overrides_default_trio() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fields.txt");
    std::fs::write(&path, "msft\n# comment\nnvda\n").unwrap();

    feed_demo()
        .args(["--ticks", "2", "--tick-interval-ms", "1"])
        .arg("--fields-file")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("field=msft ticks_emitted=2"))
        .stdout(predicate::str::contains("field=nvda ticks_emitted=2"))
        .stdout(predicate::str::contains("ibm").not());
}

#[test]
fn inline_fields_csv() {
    feed_demo()
        .args(["--fields", "aaa,bbb", "--ticks", "1", "--tick-interval-ms", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("field=aaa ticks_emitted=1"))
        .stdout(predicate::str::contains("field=bbb ticks_emitted=1"));
}

#[test]
fn empty_inline_fields_fail() {
    feed_demo()
        .args(["--fields", " , "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("field list is empty"));
}

#[test]
fn fields_file_and_inline_are_mutually_exclusive() {
    feed_demo()
        .args(["--fields", "ibm", "--fields-file", "whatever.txt"])
        .assert()
        .failure();
}
