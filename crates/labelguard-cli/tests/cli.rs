//! End-to-end CLI tests driven through a fake container runtime binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("labelguard-cli should have parent")
        .parent()
        .expect("crates should have parent")
        .join("tests")
        .join("fixtures")
        .join("labelguard")
}

fn labelguard() -> Command {
    Command::cargo_bin("labelguard").expect("binary built")
}

#[test]
fn help_describes_arguments() {
    labelguard()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--timeout"))
        .stdout(predicate::str::contains("--runtime"));
}

#[test]
fn missing_document_is_a_hard_error() {
    labelguard()
        .arg("/definitely/not/there.yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[cfg(unix)]
mod with_fake_runtime {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    /// A docker-shaped shell script: `pull` succeeds silently, `inspect`
    /// prints a fixed label mapping.
    fn fake_runtime(dir: &std::path::Path, labels_json: &str) -> PathBuf {
        let path = dir.join("fake-docker");
        let script = format!(
            "#!/bin/sh\nif [ \"$1\" = \"pull\" ]; then\n  exit 0\nfi\nprintf '%s\\n' '{labels_json}'\n"
        );
        std::fs::write(&path, script).expect("write fake runtime");
        let mut perms = std::fs::metadata(&path).expect("stat").permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).expect("chmod");
        path
    }

    fn failing_pull_runtime(dir: &std::path::Path) -> PathBuf {
        let path = dir.join("fake-docker-offline");
        std::fs::write(
            &path,
            "#!/bin/sh\necho 'registry unreachable' >&2\nexit 1\n",
        )
        .expect("write fake runtime");
        let mut perms = std::fs::metadata(&path).expect("stat").permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).expect("chmod");
        path
    }

    #[test]
    fn passing_document_exits_zero_and_writes_annotations() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let runtime = fake_runtime(
            tmp.path(),
            r#"{"version":"2.1.0","maintainer":"team-core"}"#,
        );
        let output = tmp.path().join("result.yaml");

        labelguard()
            .arg(fixtures_dir().join("passing.yaml"))
            .arg(&output)
            .arg("--runtime")
            .arg(&runtime)
            .assert()
            .success()
            .stderr(predicate::str::contains("0 failed"));

        let annotated = std::fs::read_to_string(&output).expect("read annotated document");
        assert!(annotated.contains("existsResult: true"));
        assert!(annotated.contains("Label found"));
        assert!(annotated.contains("greaterThanResult: true"));
        assert!(annotated.contains("equalResult: true"));
    }

    #[test]
    fn failing_check_exits_two() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let runtime = fake_runtime(tmp.path(), r#"{"version":"2.1.0"}"#);
        let output = tmp.path().join("result.yaml");

        labelguard()
            .arg(fixtures_dir().join("failing.yaml"))
            .arg(&output)
            .arg("--runtime")
            .arg(&runtime)
            .assert()
            .code(2)
            .stderr(predicate::str::contains("1 failed"));

        let annotated = std::fs::read_to_string(&output).expect("read annotated document");
        assert!(annotated.contains("is not greater than 9.0.0"));
    }

    #[test]
    fn pull_failure_aborts_without_writing_output() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let runtime = failing_pull_runtime(tmp.path());
        let output = tmp.path().join("result.yaml");

        labelguard()
            .arg(fixtures_dir().join("passing.yaml"))
            .arg(&output)
            .arg("--runtime")
            .arg(&runtime)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("verify labels"));

        assert!(!output.exists());
    }

    #[test]
    fn json_output_follows_the_output_extension() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let runtime = fake_runtime(
            tmp.path(),
            r#"{"version":"2.1.0","maintainer":"team-core"}"#,
        );
        let output = tmp.path().join("result.json");

        labelguard()
            .arg(fixtures_dir().join("passing.yaml"))
            .arg(&output)
            .arg("--runtime")
            .arg(&runtime)
            .assert()
            .success();

        let annotated = std::fs::read_to_string(&output).expect("read annotated document");
        let parsed: serde_json::Value =
            serde_json::from_str(&annotated).expect("annotated output is JSON");
        assert_eq!(
            parsed["images"]["registry.example/app"]["labelConstraints"]["version"]
                ["existsResult"],
            serde_json::json!(true)
        );
    }
}
