use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_prints_countdown_and_exits_successfully() {
    Command::cargo_bin("recursion-poem")
        .unwrap()
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(
            "This is line 5\n\
             This is line 4\n\
             This is line 3\n\
             This is line 2\n\
             This is line 1\n\
             That's all folks!\n",
        );
}

#[test]
fn test_debug_logging_stays_off_stdout() {
    Command::cargo_bin("recursion-poem")
        .unwrap()
        .env("RUST_LOG", "recursion_poem=debug")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("This is line 5\n"))
        .stdout(predicate::str::contains("Starting").not())
        .stderr(predicate::str::contains("Starting recursion-poem"));
}

#[test]
fn test_rejects_arguments() {
    Command::cargo_bin("recursion-poem")
        .unwrap()
        .arg("10")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());

    Command::cargo_bin("recursion-poem")
        .unwrap()
        .arg("--depth")
        .assert()
        .failure();
}
