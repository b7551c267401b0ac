//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const QUIZZES: &str = "Math\n2+2|4\n3*3|9\n\nArt\nRed+Blue|Purple|Green|Orange\n";

fn quizdesk() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quizdesk").unwrap();
    cmd.env_remove("QUIZDESK_DATA_DIR");
    cmd
}

fn data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("quizzes.txt"), QUIZZES).unwrap();
    dir
}

#[test]
fn play_register_and_take_quiz() {
    let dir = data_dir();

    // Register, take Math on Easy (single-option questions), go back, exit.
    quizdesk()
        .current_dir(dir.path())
        .arg("play")
        .write_stdin("1\nAbcdef\npw\n12\nY7\n1\n2\n1\n1\n1\n2\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your username is: Abc12"))
        .stdout(predicate::str::contains("Result: 2/2 - 100.0% - A"))
        .stderr(predicate::str::contains("Unable to load Users..."));

    let users = std::fs::read_to_string(dir.path().join("users.txt")).unwrap();
    assert_eq!(users, "Abc12|pw|Abcdef|12|Y7\n");
    let results = std::fs::read_to_string(dir.path().join("results.txt")).unwrap();
    assert_eq!(results, "Abc12|Math|Easy|100.0\n");
}

#[test]
fn play_is_default_command() {
    let dir = data_dir();
    quizdesk()
        .current_dir(dir.path())
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Register"))
        .stdout(predicate::str::contains("4. Exit"));
}

#[test]
fn play_rejects_delimiter_in_input() {
    let dir = data_dir();
    quizdesk()
        .current_dir(dir.path())
        .write_stdin("1\nAb|c\nAbc\npw\n30\nY13\n2\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"|\" is a forbidden character"))
        .stdout(predicate::str::contains("Your username is: Abc30"));
}

#[test]
fn play_login_with_existing_user() {
    let dir = data_dir();
    std::fs::write(dir.path().join("users.txt"), "Sam15|secret|Samira|15|Y10\n").unwrap();

    quizdesk()
        .current_dir(dir.path())
        .write_stdin("2\nSam15\nsecret\n2\n2\nSam15\nwrong\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello Sam15"))
        .stdout(predicate::str::contains("Invalid Username/Password"));
}

#[test]
fn play_exits_cleanly_on_closed_stdin() {
    let dir = data_dir();
    quizdesk()
        .current_dir(dir.path())
        .write_stdin("1\nAbc")
        .assert()
        .success();
    assert!(!dir.path().join("users.txt").exists());
}

#[test]
fn report_quiz_average_and_highest() {
    let dir = data_dir();
    std::fs::write(
        dir.path().join("results.txt"),
        "abc12|Math|Easy|100.0\nabc12|Math|Easy|50.0\n",
    )
    .unwrap();
    std::fs::write(dir.path().join("users.txt"), "abc12|pw|Abcdef|12|Y7\n").unwrap();

    quizdesk()
        .arg("--data-dir")
        .arg(dir.path())
        .args(["report", "quiz", "--category", "Math", "--difficulty", "Easy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Average : 75.0"))
        .stdout(predicate::str::contains("Highest : 100.0%"))
        .stdout(predicate::str::contains("Abcdef"));
}

#[test]
fn report_quiz_json() {
    let dir = data_dir();
    std::fs::write(
        dir.path().join("results.txt"),
        "abc12|Math|Easy|100.0\nabc12|Math|Easy|50.0\n",
    )
    .unwrap();

    let output = quizdesk()
        .arg("--data-dir")
        .arg(dir.path())
        .args(["report", "quiz", "--category", "Math", "--difficulty", "Easy"])
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["average"], 75.0);
    assert_eq!(json["highest"], 100.0);
    assert_eq!(json["top_username"], "abc12");
    assert!(json["top_user"].is_null());
}

#[test]
fn report_quiz_rejects_unknown_difficulty() {
    let dir = data_dir();
    quizdesk()
        .arg("--data-dir")
        .arg(dir.path())
        .args(["report", "quiz", "--category", "Math", "--difficulty", "Extreme"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown difficulty: Extreme"));
}

#[test]
fn report_user_lists_results() {
    let dir = data_dir();
    std::fs::write(
        dir.path().join("results.txt"),
        "abc12|Math|Easy|100.0\nxyz14|Art|Hard|10.0\nabc12|Art|Medium|62.5\n",
    )
    .unwrap();

    quizdesk()
        .arg("--data-dir")
        .arg(dir.path())
        .args(["report", "user", "--username", "abc12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User Results"))
        .stdout(predicate::str::contains("62.5%"))
        .stdout(predicate::str::contains("10.0%").not());
}

#[test]
fn validate_good_data() {
    let dir = data_dir();
    quizdesk()
        .arg("--data-dir")
        .arg(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 categories, 3 questions"))
        .stdout(predicate::str::contains("not found"))
        .stdout(predicate::str::contains("All data files valid"));
}

#[test]
fn validate_malformed_users() {
    let dir = data_dir();
    std::fs::write(dir.path().join("users.txt"), "alice|pw|Alice|30\n").unwrap();

    quizdesk()
        .arg("--data-dir")
        .arg(dir.path())
        .arg("validate")
        .assert()
        .failure()
        .stdout(predicate::str::contains("line 1"))
        .stderr(predicate::str::contains("failed validation"));
}

#[test]
fn missing_explicit_config_fails() {
    let dir = data_dir();
    quizdesk()
        .current_dir(dir.path())
        .args(["--config", "nope.toml", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn config_file_selects_data_files() {
    let dir = data_dir();
    std::fs::create_dir(dir.path().join("data")).unwrap();
    std::fs::write(dir.path().join("data/questions.txt"), QUIZZES).unwrap();
    std::fs::write(
        dir.path().join("quizdesk.toml"),
        "data_dir = \"data\"\nquizzes_file = \"questions.txt\"\n",
    )
    .unwrap();

    quizdesk()
        .current_dir(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("questions.txt: 2 categories"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    quizdesk()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizdesk.toml"))
        .stdout(predicate::str::contains("quizzes.txt"));

    assert!(dir.path().join("quizdesk.toml").exists());
    assert!(dir.path().join("quizzes.txt").exists());

    quizdesk()
        .current_dir(dir.path())
        .arg("validate")
        .assert()
        .success();
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    quizdesk().current_dir(dir.path()).arg("init").assert().success();

    quizdesk()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn init_writes_config_to_given_path() {
    let dir = TempDir::new().unwrap();

    quizdesk()
        .current_dir(dir.path())
        .args(["--config", "conf/custom.toml", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created conf/custom.toml"));

    assert!(dir.path().join("conf/custom.toml").exists());
    assert!(!dir.path().join("quizdesk.toml").exists());

    quizdesk()
        .current_dir(dir.path())
        .args(["--config", "conf/custom.toml", "validate"])
        .assert()
        .success();
}
