use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_list_names_every_machine() {
    cargo_bin_cmd!("statewire")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("very_simple_alarm"))
        .stdout(predicate::str::contains("alarm_with_error"))
        .stdout(predicate::str::contains("monitored_greenhouse"));
}

#[test]
fn test_generate_to_stdout() {
    cargo_bin_cmd!("statewire")
        .args(["generate", "very_simple_alarm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("enum STATE {idle, alarming};"))
        .stdout(predicate::str::contains("void setup(){"))
        .stdout(predicate::str::contains("case alarming:"));
}

#[test]
fn test_generate_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("alarm.ino");

    cargo_bin_cmd!("statewire")
        .args([
            "generate",
            "dual_check_alarm",
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    let wiring = std::fs::read_to_string(&out).unwrap();
    assert!(wiring.contains("// Application name: dual_check_alarm"));
    assert!(
        wiring.contains("(digitalRead(8) == HIGH && b1BounceGuard) && (digitalRead(9) == HIGH && b2BounceGuard)")
    );
}

#[test]
fn test_validate_succeeds_for_builtin_machine() {
    cargo_bin_cmd!("statewire")
        .args(["validate", "alarm_with_error"])
        .assert()
        .success();
}

#[test]
fn test_show_dumps_model_json() {
    let output = cargo_bin_cmd!("statewire")
        .args(["show", "timed_alarm"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let model: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(model["name"], "timed_alarm");
    assert_eq!(model["states"].as_array().unwrap().len(), 2);
}

#[test]
fn test_unknown_machine_fails() {
    cargo_bin_cmd!("statewire")
        .args(["generate", "no_such_machine"])
        .assert()
        .failure();
}
