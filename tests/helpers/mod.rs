#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const ENGLISH_EMAIL: &str = "Dear Sam,

Thank you for the quick turnaround on the quarterly numbers. I reviewed the draft this morning and it looks solid overall.

- Revenue section needs the updated chart.
- Please double-check the churn figures.

Best regards,
Alex";

pub const KOREAN_REPORT: &str = "안녕하세요, 팀장님.

이번 주 진행 상황을 공유드립니다. 배포 일정은 예정대로 진행되었습니다.

그리고 다음 주에는 성능 개선 작업을 시작할 예정입니다. 따라서 리뷰 일정을 조정해야 합니다.

확인 부탁드립니다.";

/// Create an isolated style-profile home with a `docs/` directory holding
/// the given `(file name, content)` pairs.
///
/// Returns (TempDir, docs_dir). The `TempDir` must outlive the commands
/// built with `cli_with_home()`.
pub fn setup_docs(files: &[(&str, &str)]) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let docs = tmp.path().join("docs");
    std::fs::create_dir_all(&docs).unwrap();
    for (name, content) in files {
        std::fs::write(docs.join(name), content).unwrap();
    }
    (tmp, docs)
}

/// Build a CLI command whose home (config and profiles) is the temp directory.
#[allow(deprecated)]
pub fn cli_with_home(tmp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("style-profile").unwrap();
    cmd.env("STYLE_PROFILE_HOME", tmp.path());
    cmd.env("HOME", tmp.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn profile_path(tmp: &TempDir, name: &str) -> PathBuf {
    tmp.path().join("profiles").join(format!("{name}.json"))
}

pub fn read_json(path: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}
