use std::path::Path;

use anyhow::{bail, Result};
use tracing::info;

use crate::builder::analyze;
use crate::ingest::{load_documents, Document};
use crate::merge::merge;
use crate::report::generate_report;
use crate::store::ProfileStore;

/// Analyze a source from scratch and store it, replacing any profile of the same name.
pub fn learn(store: &ProfileStore, source: &Path, name: &str, extensions: &[String]) -> Result<String> {
    store.path_for(name)?;
    let documents = require_documents(source, extensions)?;

    let bodies = texts(&documents);
    let profile = analyze(&bodies);
    let path = store.save(name, &profile)?;
    store.save_samples(name, &bodies)?;

    Ok(format!(
        "Learned profile '{}' from {} document(s): {}\n\n{}",
        name,
        documents.len(),
        path.display(),
        generate_report(&profile)
    ))
}

/// Analyze a source and fold it into an existing profile.
/// Falls back to a fresh profile when none exists yet.
pub fn learn_append(
    store: &ProfileStore,
    source: &Path,
    name: &str,
    extensions: &[String],
) -> Result<String> {
    let existing = store.load(name)?;
    let documents = require_documents(source, extensions)?;
    let bodies = texts(&documents);
    let fresh = analyze(&bodies);

    let (profile, summary) = match existing {
        Some(existing) => {
            let merged = merge(&existing, &fresh);
            info!(
                profile = name,
                before = existing.metadata.total_documents,
                added = fresh.metadata.total_documents,
                after = merged.metadata.total_documents,
                "appended to profile"
            );
            let summary = format!(
                "Updated profile '{}': {} + {} document(s) = {}",
                name,
                existing.metadata.total_documents,
                fresh.metadata.total_documents,
                merged.metadata.total_documents
            );
            (merged, summary)
        }
        None => {
            let summary = format!(
                "No existing profile '{}'; created it from {} document(s)",
                name,
                fresh.metadata.total_documents
            );
            (fresh, summary)
        }
    };

    let path = store.save(name, &profile)?;
    let kept = store.prepend_samples(name, &bodies)?;
    info!(profile = name, samples = kept, "updated sample archive");

    Ok(format!(
        "{}: {}\n\n{}",
        summary,
        path.display(),
        generate_report(&profile)
    ))
}

fn require_documents(source: &Path, extensions: &[String]) -> Result<Vec<Document>> {
    let documents = load_documents(source, extensions)?;
    if documents.is_empty() {
        bail!(
            "no documents found in {} (looked for: {})",
            source.display(),
            extensions.join(", ")
        );
    }
    Ok(documents)
}

fn texts(documents: &[Document]) -> Vec<&str> {
    documents.iter().map(|d| d.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn exts() -> Vec<String> {
        vec!["txt".into()]
    }

    fn write_doc(dir: &Path, name: &str, text: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn learn_saves_profile() {
        let tmp = TempDir::new().unwrap();
        let store = ProfileStore::new(tmp.path().join("profiles"));
        let doc = write_doc(tmp.path(), "a.txt", "Dear Sam, Thank you for your time. Best regards, Alex.");

        let out = learn(&store, &doc, "mail", &exts()).unwrap();
        assert!(out.contains("Learned profile 'mail' from 1 document(s)"));

        let profile = store.load("mail").unwrap().unwrap();
        assert_eq!(profile.metadata.total_documents, 1);
    }

    #[test]
    fn learn_rejects_empty_source() {
        let tmp = TempDir::new().unwrap();
        let store = ProfileStore::new(tmp.path().join("profiles"));
        let empty = tmp.path().join("empty");
        std::fs::create_dir(&empty).unwrap();

        let err = learn(&store, &empty, "mail", &exts()).unwrap_err();
        assert!(err.to_string().contains("no documents found"));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn learn_append_accumulates_documents() {
        let tmp = TempDir::new().unwrap();
        let store = ProfileStore::new(tmp.path().join("profiles"));
        let first = write_doc(tmp.path(), "a.txt", "회의 내용을 공유드립니다. 확인 부탁드립니다.");
        let second = write_doc(tmp.path(), "b.txt", "일정이 변경되었습니다. 참고 부탁드립니다.");

        let out = learn_append(&store, &first, "ko", &exts()).unwrap();
        assert!(out.contains("No existing profile 'ko'"));

        let out = learn_append(&store, &second, "ko", &exts()).unwrap();
        assert!(out.contains("1 + 1 document(s) = 2"));

        let profile = store.load("ko").unwrap().unwrap();
        assert_eq!(profile.metadata.total_documents, 2);
        assert_eq!(
            store.load_samples("ko").unwrap(),
            vec!["일정이 변경되었습니다. 참고 부탁드립니다.", "회의 내용을 공유드립니다. 확인 부탁드립니다."]
        );
    }

    #[test]
    fn learn_replaces_sample_archive() {
        let tmp = TempDir::new().unwrap();
        let store = ProfileStore::new(tmp.path().join("profiles"));
        store.save_samples("mail", &["stale text"]).unwrap();
        let doc = write_doc(tmp.path(), "a.txt", "Dear Sam, Thank you for your time. Best regards, Alex.");

        learn(&store, &doc, "mail", &exts()).unwrap();
        assert_eq!(
            store.load_samples("mail").unwrap(),
            vec!["Dear Sam, Thank you for your time. Best regards, Alex."]
        );
    }
}
