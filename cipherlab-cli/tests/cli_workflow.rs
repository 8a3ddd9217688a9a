#![allow(missing_docs)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cipherlab() -> Command {
    Command::new(env!("CARGO_BIN_EXE_cipherlab-cli"))
}

#[test]
fn test_caesar_encrypt_and_decrypt() {
    cipherlab()
        .args(["encrypt", "--cipher", "caesar", "--key", "3", "Hello!"])
        .assert()
        .success()
        .stdout("KHOOR\n");

    cipherlab()
        .args(["decrypt", "--cipher", "caesar", "--key", "3", "KHOOR"])
        .assert()
        .success()
        .stdout("HELLO\n");
}

#[test]
fn test_rail_fence_encrypt_from_file_to_file() {
    // 1. Setup
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let input_path = temp_dir.path().join("plain.txt");
    let encrypted_path = temp_dir.path().join("cipher.txt");
    let decrypted_path = temp_dir.path().join("decrypted.txt");
    fs::write(&input_path, "We are discovered. Flee at once!").expect("Failed to write input");

    // 2. Encrypt
    cipherlab()
        .args(["encrypt", "--cipher", "railfence", "--key", "3"])
        .arg("--input")
        .arg(&input_path)
        .arg("--output")
        .arg(&encrypted_path)
        .assert()
        .success();
    let encrypted = fs::read_to_string(&encrypted_path).expect("Failed to read ciphertext");
    assert_eq!(encrypted, "WECRLTEERDSOEEFEAOCAIVDEN");

    // 3. Decrypt and verify
    cipherlab()
        .args(["decrypt", "--cipher", "railfence", "--key", "3"])
        .arg("--input")
        .arg(&encrypted_path)
        .arg("--output")
        .arg(&decrypted_path)
        .assert()
        .success();
    let decrypted = fs::read_to_string(&decrypted_path).expect("Failed to read plaintext");
    assert_eq!(decrypted, "WEAREDISCOVEREDFLEEATONCE");
}

#[test]
fn test_vigenere_reads_stdin() {
    cipherlab()
        .args(["encrypt", "--cipher", "vigenere", "--key", "LEMON"])
        .write_stdin("attack at dawn\n")
        .assert()
        .success()
        .stdout("LXFOPVEFRNHR\n");
}

#[test]
fn test_invalid_key_fails_without_output() {
    cipherlab()
        .args(["encrypt", "--cipher", "caesar", "--key", "26", "HELLO"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("between 0 and 25"));
}

#[test]
fn test_empty_input_fails() {
    cipherlab()
        .args(["encrypt", "--cipher", "caesar", "--key", "3", "1234"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));
}

#[test]
fn test_validate_command() {
    cipherlab()
        .args(["validate", "--cipher", "railfence", "--key", "3", "ABCDEFG"])
        .assert()
        .success()
        .stdout("valid\n");

    cipherlab()
        .args(["validate", "--cipher", "railfence", "--key", "5", "ABCDE"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Rails (5) must be fewer"));

    cipherlab()
        .args(["validate", "--cipher", "caesar", "--key", "-1", "ABC"])
        .assert()
        .failure();
}

#[test]
fn test_unknown_cipher_is_rejected_by_the_parser() {
    cipherlab()
        .args(["encrypt", "--cipher", "enigma", "--key", "3", "HELLO"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown cipher: enigma"));
}

#[test]
fn test_frequency_analysis_with_export() {
    // 1. Setup
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let export_path = temp_dir.path().join("frequency.txt");

    // 2. Analyze
    cipherlab()
        .args(["analyze", "--tool", "frequency", "aab"])
        .arg("--output")
        .arg(&export_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Letter Frequency (3 letters)"))
        .stdout(predicate::str::contains("66.67%"));

    // 3. Verify the export
    let export = fs::read_to_string(&export_path).expect("Failed to read export");
    assert_eq!(export, "Letter Frequency:\nA: 66.67% (2x)\nB: 33.33% (1x)\n");
}

#[test]
fn test_brute_force_lists_every_key() {
    cipherlab()
        .args(["analyze", "--tool", "bruteforce", "KHOOR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Key 00] KHOOR"))
        .stdout(predicate::str::contains("[Key 03] HELLO"))
        .stdout(predicate::str::contains("[Key 25] LIPPS"));
}

#[test]
fn test_brute_force_export_differs_from_terminal_view() {
    // 1. Setup
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let export_path = temp_dir.path().join("bruteforce.txt");

    // 2. Analyze: the terminal shows padded keys
    cipherlab()
        .args(["analyze", "--tool", "bruteforce", "KHOOR"])
        .arg("--output")
        .arg(&export_path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Caesar Brute-Force (26 keys)\n"))
        .stdout(predicate::str::contains("[Key 03] HELLO"));

    // 3. The export keeps the plain format
    let export = fs::read_to_string(&export_path).expect("Failed to read export");
    assert!(export.starts_with("Caesar Brute-Force Results:\n[Key 0] KHOOR\n"));
    assert!(export.contains("\n[Key 3] HELLO\n"));
    assert!(export.ends_with("\n[Key 25] LIPPS\n"));
    assert_eq!(export.lines().count(), 27);
}

#[test]
fn test_analysis_rejects_short_input() {
    cipherlab()
        .args(["analyze", "--tool", "frequency", "a1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 2 letters"));
}

#[test]
fn test_json_output() {
    let output = cipherlab()
        .args(["--json", "analyze", "--tool", "bruteforce", "AB"])
        .output()
        .expect("Failed to run analyze");
    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["tool"], "bruteforce");
    assert_eq!(json["data"]["candidates"].as_array().map(Vec::len), Some(26));

    cipherlab()
        .args(["--json", "encrypt", "--cipher", "caesar", "--key", "1", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""output": "BCD""#));
}

#[test]
fn test_json_flag_applies_to_output_files() {
    // 1. Setup
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let report_path = temp_dir.path().join("report.json");
    let analysis_path = temp_dir.path().join("analysis.json");

    // 2. Encrypt to a file: the file holds the JSON report, stdout stays empty
    cipherlab()
        .args(["--json", "encrypt", "--cipher", "caesar", "--key", "1", "abc"])
        .arg("--output")
        .arg(&report_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).expect("Failed to read report"))
            .expect("report should be JSON");
    assert_eq!(report["direction"], "encrypt");
    assert_eq!(report["cipher"], "caesar");
    assert_eq!(report["output"], "BCD");

    // 3. Analysis exports follow the same flag
    cipherlab()
        .args(["--json", "analyze", "--tool", "frequency", "aab"])
        .arg("--output")
        .arg(&analysis_path)
        .assert()
        .success();
    let analysis: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&analysis_path).expect("Failed to read export"))
            .expect("export should be JSON");
    assert_eq!(analysis["tool"], "frequency");
    assert_eq!(analysis["data"]["total"], 3);
}

#[test]
fn test_count_command() {
    cipherlab()
        .args(["count", "Hello, World!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Raw characters: 13"))
        .stdout(predicate::str::contains("Cleaned characters: 10"));
}
